use serde::{Deserialize, Serialize};

use crate::api::types::Rgb;

/// How qualifying triangles are put on the canvas. Chosen once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Stroke the A→B→C path only.
    Lines,
    /// Fill the closed triangle only.
    #[default]
    Polygons,
    /// Stroke and fill.
    LinesAndPolygons,
}

impl RenderMode {
    pub fn strokes(self) -> bool {
        matches!(self, RenderMode::Lines | RenderMode::LinesAndPolygons)
    }

    pub fn fills(self) -> bool {
        matches!(self, RenderMode::Polygons | RenderMode::LinesAndPolygons)
    }
}

/// Configuration for the constellation engine, provided by the host.
///
/// Every field has a default, so a host can pass `{}` (or a partial object)
/// as JSON and get the portfolio intro's look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkleConfig {
    /// Primary base color. Accepted for API compatibility; the palette is fixed.
    pub color_a: Rgb,
    /// Secondary base color. Accepted for API compatibility; the palette is fixed.
    pub color_b: Rgb,
    /// Max pairwise distance (canvas pixels) for three points to form a triangle.
    pub distance_threshold: f64,
    /// Canvas pixel size = container size / resolution (default: 0.5).
    pub resolution: f64,
    /// Max per-axis speed, in canvas pixels per frame.
    pub speed_range: f64,
    /// CSS color the background is refilled with each frame.
    pub background_color: String,
    /// When false the engine paints a single static frame and never animates.
    pub autoplay: bool,
    pub mode: RenderMode,
    /// Stop on every scroll event and restart on `scrollend`.
    /// Hosts enable this on browsers that stutter when painting during scroll.
    pub pause_during_scroll: bool,
    /// Fixed seed for point placement. `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl SparkleConfig {
    pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 110.0;
    pub const DEFAULT_RESOLUTION: f64 = 0.5;
    pub const DEFAULT_SPEED_RANGE: f64 = 1.0;
    pub const DEFAULT_BACKGROUND: &'static str = "#222222";

    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace unusable values with their fallbacks.
    pub fn normalized(mut self) -> Self {
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            log::warn!("sparkle: invalid resolution {}, using 1", self.resolution);
            self.resolution = 1.0;
        }
        if !self.speed_range.is_finite() || self.speed_range == 0.0 {
            log::warn!("sparkle: invalid speed range {}, using 1", self.speed_range);
            self.speed_range = Self::DEFAULT_SPEED_RANGE;
        }
        if !(self.distance_threshold.is_finite() && self.distance_threshold > 0.0) {
            log::warn!(
                "sparkle: invalid distance threshold {}, using {}",
                self.distance_threshold,
                Self::DEFAULT_DISTANCE_THRESHOLD
            );
            self.distance_threshold = Self::DEFAULT_DISTANCE_THRESHOLD;
        }
        if self.background_color.trim().is_empty() {
            self.background_color = Self::DEFAULT_BACKGROUND.to_string();
        }
        self
    }
}

impl Default for SparkleConfig {
    fn default() -> Self {
        Self {
            color_a: Rgb::new(0, 255, 255),
            color_b: Rgb::new(255, 0, 255),
            distance_threshold: Self::DEFAULT_DISTANCE_THRESHOLD,
            resolution: Self::DEFAULT_RESOLUTION,
            speed_range: Self::DEFAULT_SPEED_RANGE,
            background_color: Self::DEFAULT_BACKGROUND.to_string(),
            autoplay: true,
            mode: RenderMode::default(),
            pause_during_scroll: false,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_object_uses_defaults() {
        let config = SparkleConfig::from_json("{}").unwrap();
        assert_eq!(config, SparkleConfig::default());
        assert_eq!(config.distance_threshold, 110.0);
        assert_eq!(config.resolution, 0.5);
        assert!(config.autoplay);
    }

    #[test]
    fn parse_partial_config() {
        let json = r##"{
            "color_a": [10, 20, 30],
            "autoplay": false,
            "mode": "lines_and_polygons",
            "background_color": "#000000",
            "seed": 7
        }"##;
        let config = SparkleConfig::from_json(json).unwrap();
        assert_eq!(config.color_a, Rgb::new(10, 20, 30));
        assert!(!config.autoplay);
        assert_eq!(config.mode, RenderMode::LinesAndPolygons);
        assert_eq!(config.background_color, "#000000");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.speed_range, 1.0);
    }

    #[test]
    fn parse_rejects_unknown_mode() {
        assert!(SparkleConfig::from_json(r#"{ "mode": "dots" }"#).is_err());
    }

    #[test]
    fn normalized_applies_fallbacks() {
        let config = SparkleConfig {
            resolution: 0.0,
            speed_range: 0.0,
            distance_threshold: -5.0,
            background_color: "  ".into(),
            ..SparkleConfig::default()
        }
        .normalized();
        assert_eq!(config.resolution, 1.0);
        assert_eq!(config.speed_range, 1.0);
        assert_eq!(config.distance_threshold, 110.0);
        assert_eq!(config.background_color, "#222222");
    }

    #[test]
    fn normalized_keeps_valid_values() {
        let config = SparkleConfig {
            resolution: 2.0,
            speed_range: 3.5,
            ..SparkleConfig::default()
        };
        assert_eq!(config.clone().normalized(), config);
    }

    #[test]
    fn render_mode_flags() {
        assert!(RenderMode::Lines.strokes() && !RenderMode::Lines.fills());
        assert!(!RenderMode::Polygons.strokes() && RenderMode::Polygons.fills());
        assert!(RenderMode::LinesAndPolygons.strokes() && RenderMode::LinesAndPolygons.fills());
    }
}
