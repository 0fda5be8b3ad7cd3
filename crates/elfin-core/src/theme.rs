//! Read-only color provider consulted by widgets while drawing.

use std::fs;
use std::path::Path;

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Theme loading errors.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

/// Color operations used by widget drawing code.
pub trait ColorExt {
    /// Same color with alpha replaced by `alpha`.
    fn opacity(self, alpha: f32) -> Self;
    /// Scale the RGB channels by `amount`, saturating at full intensity.
    fn level(self, amount: f32) -> Self;
    /// The alpha channel.
    fn alpha(&self) -> f32;
}

impl ColorExt for Color {
    fn opacity(self, alpha: f32) -> Self {
        let [r, g, b, _] = self.components;
        Color::new([r, g, b, alpha.clamp(0.0, 1.0)])
    }

    fn level(self, amount: f32) -> Self {
        let [r, g, b, a] = self.components;
        let scale = |c: f32| (c * amount).clamp(0.0, 1.0);
        Color::new([scale(r), scale(g), scale(b), a])
    }

    fn alpha(&self) -> f32 {
        self.components[3]
    }
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Named colors available to widgets.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Outlines and frames.
    pub frame_color: Color,
    /// Glows and active indicators.
    pub indicator_color: Color,
    /// Control bodies.
    pub controls_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        ThemeConfig::default().into()
    }
}

impl Theme {
    /// Parse a theme from JSON. Missing keys keep their default color.
    pub fn from_json(json: &str) -> ThemeResult<Self> {
        let config: ThemeConfig =
            serde_json::from_str(json).map_err(|e| ThemeError::Parse(e.to_string()))?;
        Ok(config.into())
    }

    /// Serialize the theme to pretty JSON.
    pub fn to_json(&self) -> ThemeResult<String> {
        serde_json::to_string_pretty(&ThemeConfig::from(*self))
            .map_err(|e| ThemeError::Parse(e.to_string()))
    }

    /// Load a theme from a JSON file.
    pub fn load(path: &Path) -> ThemeResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| ThemeError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: ThemeConfig = serde_json::from_str(&json)
            .map_err(|e| ThemeError::Parse(format!("Failed to parse {}: {}", path.display(), e)))?;
        log::debug!("Loaded theme from {}", path.display());
        Ok(config.into())
    }
}

/// On-disk form of [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub frame_color: SerializableColor,
    pub indicator_color: SerializableColor,
    pub controls_color: SerializableColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            frame_color: SerializableColor::new(220, 220, 220, 180),
            indicator_color: SerializableColor::new(59, 130, 246, 255),
            controls_color: SerializableColor::new(48, 52, 58, 255),
        }
    }
}

impl From<ThemeConfig> for Theme {
    fn from(config: ThemeConfig) -> Self {
        Self {
            frame_color: config.frame_color.into(),
            indicator_color: config.indicator_color.into(),
            controls_color: config.controls_color.into(),
        }
    }
}

impl From<Theme> for ThemeConfig {
    fn from(theme: Theme) -> Self {
        Self {
            frame_color: theme.frame_color.into(),
            indicator_color: theme.indicator_color.into(),
            controls_color: theme.controls_color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_replaces_alpha() {
        let color = Color::from_rgba8(255, 0, 0, 128).opacity(1.0);
        assert!((color.alpha() - 1.0).abs() < f32::EPSILON);
        assert_eq!(color.to_rgba8().r, 255);
    }

    #[test]
    fn test_level_scales_and_saturates() {
        let color = Color::from_rgba8(200, 100, 0, 255);
        let brighter = color.level(1.5).to_rgba8();
        assert_eq!(brighter.r, 255);
        assert_eq!(brighter.g, 150);
        assert_eq!(brighter.b, 0);

        let darker = color.level(0.5).to_rgba8();
        assert_eq!(darker.r, 100);
        assert_eq!(darker.g, 50);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let theme = Theme::from_json(r#"{ "frame_color": { "r": 1, "g": 2, "b": 3, "a": 255 } }"#)
            .unwrap();
        assert_eq!(SerializableColor::from(theme.frame_color), SerializableColor::new(1, 2, 3, 255));
        assert_eq!(
            SerializableColor::from(theme.controls_color),
            ThemeConfig::default().controls_color
        );
    }

    #[test]
    fn test_invalid_json() {
        let result = Theme::from_json("not json");
        assert!(matches!(result, Err(ThemeError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        let json = Theme::default().to_json().unwrap();
        fs::write(&path, json).unwrap();

        let theme = Theme::load(&path).unwrap();
        assert_eq!(ThemeConfig::from(theme), ThemeConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Theme::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ThemeError::Io(_))));
    }
}
