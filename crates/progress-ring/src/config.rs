use palette::rgb::FromHexError;
use palette::{Srgb, Srgba, WithAlpha};
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_STROKE_THICKNESS: f64 = 5.0;
pub const DEFAULT_CIRCLE_RADIUS: f64 = 100.0;
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 800;
pub const CROSS_SCALE: f64 = 0.9;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub stroke_thickness: Option<f64>,
    pub circle_radius: Option<f64>,
    pub animation_duration_ms: Option<i64>,
    pub background_color: Option<String>,
    pub progress_color: Option<String>,
}

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid color '{input}': {source}")]
    Hex {
        input: String,
        #[source]
        source: FromHexError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Srgba<f64>,
    pub progress: Srgba<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressConfig {
    pub stroke_thickness: f64,
    pub circle_radius: f64,
    pub animation_duration: Duration,
    pub background_color: Option<Srgba<f64>>,
    pub progress_color: Option<Srgba<f64>>,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            stroke_thickness: DEFAULT_STROKE_THICKNESS,
            circle_radius: DEFAULT_CIRCLE_RADIUS,
            animation_duration: Duration::from_millis(DEFAULT_ANIMATION_DURATION_MS),
            background_color: None,
            progress_color: None,
        }
    }
}

impl ProgressConfig {
    pub fn resolve(options: &StyleOptions) -> Self {
        let defaults = Self::default();
        Self {
            stroke_thickness: positive_or(
                "stroke_thickness",
                options.stroke_thickness,
                defaults.stroke_thickness,
            ),
            circle_radius: positive_or(
                "circle_radius",
                options.circle_radius,
                defaults.circle_radius,
            ),
            animation_duration: options
                .animation_duration_ms
                .map(|ms| match u64::try_from(ms) {
                    Ok(ms) => Duration::from_millis(ms),
                    Err(_) => {
                        log::warn!("Ignoring negative animation_duration_ms ({})", ms);
                        defaults.animation_duration
                    }
                })
                .unwrap_or(defaults.animation_duration),
            background_color: color_or_theme("background_color", &options.background_color),
            progress_color: color_or_theme("progress_color", &options.progress_color),
        }
    }

    pub fn settle_target(&self) -> f64 {
        self.circle_radius / CROSS_SCALE
    }

    pub fn palette(&self, theme: Palette) -> Palette {
        Palette {
            background: self.background_color.unwrap_or(theme.background),
            progress: self.progress_color.unwrap_or(theme.progress),
        }
    }
}

fn positive_or(name: &str, value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        Some(v) => {
            log::warn!("Ignoring invalid {} ({}), using {}", name, v, fallback);
            fallback
        }
        None => fallback,
    }
}

fn color_or_theme(name: &str, value: &Option<String>) -> Option<Srgba<f64>> {
    let raw = value.as_deref()?;
    parse_color(raw)
        .inspect_err(|e| log::warn!("Ignoring {}: {}", name, e))
        .ok()
}

pub fn parse_color(input: &str) -> Result<Srgba<f64>, ColorError> {
    let rgb = Srgb::<u8>::from_str(input.trim()).map_err(|source| ColorError::Hex {
        input: input.to_string(),
        source,
    })?;
    Ok(rgb.into_format::<f64>().with_alpha(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_use_every_default() {
        let config = ProgressConfig::resolve(&StyleOptions::default());
        assert_eq!(config, ProgressConfig::default());
        assert_eq!(config.stroke_thickness, 5.0);
        assert_eq!(config.circle_radius, 100.0);
        assert_eq!(config.animation_duration, Duration::from_millis(800));
        assert!(config.background_color.is_none());
        assert!(config.progress_color.is_none());
    }

    #[test]
    fn test_options_fall_back_independently() {
        let options: StyleOptions =
            serde_json::from_str(r##"{ "circle_radius": 42.0, "progress_color": "#ff0000" }"##)
                .unwrap();
        let config = ProgressConfig::resolve(&options);

        assert_eq!(config.circle_radius, 42.0);
        assert_eq!(config.stroke_thickness, DEFAULT_STROKE_THICKNESS);
        assert_eq!(
            config.animation_duration,
            Duration::from_millis(DEFAULT_ANIMATION_DURATION_MS)
        );
        assert!(config.background_color.is_none());
        assert_eq!(config.progress_color, Some(Srgba::new(1.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_invalid_values_are_replaced_by_defaults() {
        let options = StyleOptions {
            stroke_thickness: Some(f64::NAN),
            circle_radius: Some(-10.0),
            animation_duration_ms: Some(-1),
            background_color: Some("not a color".to_string()),
            progress_color: Some("#00ff00".to_string()),
        };
        let config = ProgressConfig::resolve(&options);

        assert_eq!(config.stroke_thickness, DEFAULT_STROKE_THICKNESS);
        assert_eq!(config.circle_radius, DEFAULT_CIRCLE_RADIUS);
        assert_eq!(
            config.animation_duration,
            Duration::from_millis(DEFAULT_ANIMATION_DURATION_MS)
        );
        assert!(config.background_color.is_none());
        assert_eq!(config.progress_color, Some(Srgba::new(0.0, 1.0, 0.0, 1.0)));
    }

    #[test]
    fn test_zero_duration_is_allowed() {
        let options = StyleOptions {
            animation_duration_ms: Some(0),
            ..Default::default()
        };
        assert_eq!(
            ProgressConfig::resolve(&options).animation_duration,
            Duration::ZERO
        );
    }

    #[test]
    fn test_parse_color_formats() {
        let white = Srgba::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(parse_color("#ffffff").unwrap(), white);
        assert_eq!(parse_color("ffffff").unwrap(), white);
        assert_eq!(parse_color("#fff").unwrap(), white);
        assert_eq!(parse_color("  #FFFFFF ").unwrap(), white);
        assert!(parse_color("#ggg").is_err());
        assert!(parse_color("").is_err());
    }

    #[test]
    fn test_palette_prefers_configured_colors() {
        let theme = Palette {
            background: Srgba::new(0.5, 0.5, 0.5, 1.0),
            progress: Srgba::new(0.0, 0.0, 1.0, 1.0),
        };
        let config = ProgressConfig {
            background_color: Some(Srgba::new(0.0, 0.0, 0.0, 1.0)),
            ..Default::default()
        };
        let palette = config.palette(theme);
        assert_eq!(palette.background, Srgba::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(palette.progress, theme.progress);
    }

    #[test]
    fn test_settle_target_scales_radius() {
        let config = ProgressConfig::default();
        assert!((config.settle_target() - 100.0 / 0.9).abs() < 1e-9);
    }
}
