use serde::{Deserialize, Serialize};

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0x4c, 0xaf, 0x50);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex colour string.
    /// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            // Short form: RGB -> RRGGBB
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }
}

/// Resolved text appearance: colour plus the base size every row scale multiplies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Rgb,
    pub size: f32,
}

impl TextStyle {
    pub const DEFAULT_SIZE: f32 = 50.0;
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            size: Self::DEFAULT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse_hex("#000000"), Some(Rgb::BLACK));
        assert_eq!(Rgb::parse_hex("ff8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::parse_hex("#fff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::parse_hex(" #4caf50 "), Some(Rgb::GREEN));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(Rgb::parse_hex("#12"), None);
        assert_eq!(Rgb::parse_hex("zzzzzz"), None);
        assert_eq!(Rgb::parse_hex("ééé"), None);
    }

    #[test]
    fn test_default_style() {
        let style = TextStyle::default();
        assert_eq!(style.color, Rgb::BLACK);
        assert_eq!(style.size, 50.0);
    }
}
