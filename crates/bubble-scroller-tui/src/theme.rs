use bubble_scroller_core::Rgb;
use ratatui::style::Color;

/// Runtime theme for the terminal host
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg2: Color,
    /// Backdrop behind the scroller glyphs
    pub paper: Color,

    // Foreground colors
    pub fg0: Color,
    pub grey0: Color,
    pub grey2: Color,

    // Semantic colors
    pub accent: Color,
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Gruvbox dark chrome around a light scroller backdrop
    pub fn dark() -> Self {
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            paper: Color::Rgb(0xfb, 0xf1, 0xc7),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            highlight: Color::Rgb(0xd6, 0x5d, 0x0e),
        }
    }

    /// Gruvbox light
    pub fn light() -> Self {
        Self {
            bg0: Color::Rgb(0xfb, 0xf1, 0xc7),
            bg2: Color::Rgb(0xeb, 0xdb, 0xb2),
            paper: Color::Rgb(0xf9, 0xf5, 0xd7),
            fg0: Color::Rgb(0x3c, 0x38, 0x36),
            grey0: Color::Rgb(0xa8, 0x99, 0x84),
            grey2: Color::Rgb(0x7c, 0x6f, 0x64),
            accent: Color::Rgb(0x42, 0x7b, 0x58),
            highlight: Color::Rgb(0xaf, 0x3a, 0x03),
        }
    }
}

/// Load a theme by name, falling back to dark
pub fn load_theme(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "light" | "gruvbox-light" => Theme::light(),
        "dark" | "gruvbox-dark" => Theme::dark(),
        other => {
            tracing::warn!(theme = other, "unknown theme, using dark");
            Theme::dark()
        }
    }
}

#[inline]
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
