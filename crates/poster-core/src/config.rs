// File: crates/poster-core/src/config.rs
// Summary: Serializable poster settings (JSON) resolved into layout requests and themes.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::parse_css_color;
use crate::error::ConfigError;
use crate::layout::RenderRequest;
use crate::text::TextItem;
use crate::theme::{self, Theme};
use crate::types::{CanvasDimensions, Orientation, HEIGHT, WIDTH};

/// Default bound on a single map image load.
pub const DEFAULT_LOAD_TIMEOUT_MS: u64 = 10_000;

/// All user-controlled inputs of a combined view. Missing JSON fields take defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterSettings {
    pub width: u32,
    pub height: u32,
    pub orientation: Orientation,
    /// Circle diameter as a percentage of the usable constrained axis, 1..=100.
    pub radius_percent: f32,
    /// How far the two centers are pulled together, 0..=100.
    pub overlap_percent: f32,
    pub border_width: f32,
    /// Overrides the theme border color when set.
    pub border_color: Option<String>,
    /// Overrides the theme background when set.
    pub background: Option<String>,
    pub theme: String,
    /// Star map first instead of street map first.
    pub swap_order: bool,
    pub captions: bool,
    pub caption_size: f32,
    pub load_timeout_ms: u64,
    pub text_items: Vec<TextItem>,
}

impl Default for PosterSettings {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            orientation: Orientation::Landscape,
            radius_percent: 60.0,
            overlap_percent: 30.0,
            border_width: 4.0,
            border_color: None,
            background: None,
            theme: "midnight".to_string(),
            swap_order: false,
            captions: true,
            caption_size: 16.0,
            load_timeout_ms: DEFAULT_LOAD_TIMEOUT_MS,
            text_items: Vec::new(),
        }
    }
}

impl PosterSettings {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings that cannot produce a drawable poster. Percentages are not checked
    /// here; layout clamps them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        CanvasDimensions::new(self.width, self.height)?;
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ConfigError::Invalid(format!("border_width must be >= 0, got {}", self.border_width)));
        }
        if self.load_timeout_ms == 0 {
            return Err(ConfigError::Invalid("load_timeout_ms must be > 0".into()));
        }
        for item in &self.text_items {
            if !item.font_size.is_finite() || item.font_size <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "font_size for '{}' must be > 0, got {}",
                    item.text, item.font_size
                )));
            }
        }
        self.theme()?;
        Ok(())
    }

    pub fn dims(&self) -> Result<CanvasDimensions, ConfigError> {
        Ok(CanvasDimensions::new(self.width, self.height)?)
    }

    pub fn request(&self) -> Result<RenderRequest, ConfigError> {
        Ok(RenderRequest {
            dims: self.dims()?,
            radius_percent: self.radius_percent,
            overlap_percent: self.overlap_percent,
            orientation: self.orientation,
        })
    }

    /// Named preset with any background/border overrides applied.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        let mut t = theme::find(&self.theme);
        if let Some(bg) = &self.background {
            let c = parse_css_color(bg).map_err(|source| ConfigError::Color { field: "background", source })?;
            t = t.with_background(c);
        }
        if let Some(border) = &self.border_color {
            let c = parse_css_color(border).map_err(|source| ConfigError::Color { field: "border_color", source })?;
            t = t.with_border(c);
        }
        Ok(t)
    }

    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms.max(1))
    }
}
