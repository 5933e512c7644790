use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::style::{Rgb, TextStyle};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroller: ScrollerConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Geometry and animation parameters of the scroller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollerConfig {
    /// Radius of the bumper circle
    #[serde(default = "default_circle_radius")]
    pub circle_radius: f32,
    /// Duration of the protrude/retract animation in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Extra space above the first row, on top of the host's padding
    #[serde(default = "default_vertical_padding")]
    pub intrinsic_vertical_padding: f32,
    /// Scale of rows untouched by the bulge
    #[serde(default = "default_text_scale_min")]
    pub text_scale_min: f32,
    /// Scale of the row nearest the bulge's widest point
    #[serde(default = "default_text_scale_max")]
    pub text_scale_max: f32,
    /// Easing curve for the bumper animation
    #[serde(default)]
    pub easing: EasingType,
    /// Stroke the scroll-line path
    #[serde(default)]
    pub debug_path: bool,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            circle_radius: default_circle_radius(),
            animation_duration_ms: default_animation_duration(),
            intrinsic_vertical_padding: default_vertical_padding(),
            text_scale_min: default_text_scale_min(),
            text_scale_max: default_text_scale_max(),
            easing: EasingType::default(),
            debug_path: false,
        }
    }
}

impl ScrollerConfig {
    #[inline]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if !self.circle_radius.is_finite() || self.circle_radius < 0.0 {
            return Err(crate::Error::Config(format!(
                "circle_radius must be a non-negative number, got {}",
                self.circle_radius
            )));
        }
        if !self.intrinsic_vertical_padding.is_finite() || self.intrinsic_vertical_padding < 0.0 {
            return Err(crate::Error::Config(format!(
                "intrinsic_vertical_padding must be a non-negative number, got {}",
                self.intrinsic_vertical_padding
            )));
        }
        if !(self.text_scale_min <= self.text_scale_max) {
            return Err(crate::Error::Config(format!(
                "text_scale_min ({}) must not exceed text_scale_max ({})",
                self.text_scale_min, self.text_scale_max
            )));
        }
        Ok(())
    }
}

/// Easing curve applied to animation progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump to the end on the last frame
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
    /// Slow start and end, fast middle
    #[default]
    AccelerateDecelerate,
}

/// Text appearance, resolved once into a [`TextStyle`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Text color as hex (e.g., "#000000")
    #[serde(default = "default_text_color")]
    pub text_color: String,
    /// Base text size before per-row scaling
    #[serde(default = "default_text_size")]
    pub text_size: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            text_color: default_text_color(),
            text_size: default_text_size(),
        }
    }
}

impl StyleConfig {
    pub fn resolve(&self) -> crate::Result<TextStyle> {
        let color = Rgb::parse_hex(&self.text_color).ok_or_else(|| {
            crate::Error::Config(format!("invalid text_color: {:?}", self.text_color))
        })?;
        if !self.text_size.is_finite() || self.text_size <= 0.0 {
            return Err(crate::Error::Config(format!(
                "text_size must be positive, got {}",
                self.text_size
            )));
        }
        Ok(TextStyle {
            color,
            size: self.text_size,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Scroller units per terminal column
    #[serde(default = "default_cell_width")]
    pub cell_width: f32,
    /// Scroller units per terminal row
    #[serde(default = "default_cell_height")]
    pub cell_height: f32,
    /// Theme name ("dark" or "light")
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
            theme: default_theme_name(),
        }
    }
}

impl UiConfig {
    /// Get tick duration for animation FPS
    pub fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(crate::Error::Config(
                "tick_rate_ms must be greater than 0".to_string(),
            ));
        }
        if !(1..=1000).contains(&self.animation_fps) {
            return Err(crate::Error::Config(format!(
                "animation_fps must be between 1 and 1000, got {}",
                self.animation_fps
            )));
        }
        for (name, size) in [("cell_width", self.cell_width), ("cell_height", self.cell_height)] {
            if !size.is_finite() || size <= 0.0 {
                return Err(crate::Error::Config(format!(
                    "{name} must be a positive number, got {size}"
                )));
            }
        }
        Ok(())
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bubble-scroller")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_circle_radius() -> f32 {
    200.0
}

fn default_animation_duration() -> u64 {
    150
}

fn default_vertical_padding() -> f32 {
    40.0
}

fn default_text_scale_min() -> f32 {
    0.7
}

fn default_text_scale_max() -> f32 {
    1.3
}

fn default_text_color() -> String {
    "#000000".to_string()
}

fn default_text_size() -> f32 {
    TextStyle::DEFAULT_SIZE
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_cell_width() -> f32 {
    10.0
}

fn default_cell_height() -> f32 {
    20.0
}

fn default_theme_name() -> String {
    "dark".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let config: Self = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.scroller.validate()?;
        self.style.resolve()?;
        self.ui.validate()?;
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/bubble-scroller/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("bubble-scroller")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("bubble-scroller.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
