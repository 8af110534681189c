//! Slider configuration
//!
//! Supplied once by the host when the widget is created and only read afterwards.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Per-widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    // === Layout ===
    /// Widget box width (pixels)
    pub width: f64,
    /// Widget box height (pixels)
    pub height: f64,

    // === Ring ===
    /// Centerline radius of the ring
    pub radius: f64,
    /// Ring thickness (the arc extends radius ± thickness/2)
    #[serde(alias = "thick")]
    pub thickness: f64,

    // === Range ===
    pub min: i64,
    pub max: i64,

    // === Label ===
    /// Suffix appended to the value label
    pub units: String,
    /// Optional badge image drawn inside the ring
    #[serde(alias = "image_url")]
    pub image_url: Option<String>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            radius: DEFAULT_RADIUS,
            thickness: DEFAULT_THICKNESS,

            min: DEFAULT_MIN,
            max: DEFAULT_MAX,

            units: DEFAULT_UNITS.to_string(),
            image_url: None,
        }
    }
}

impl SliderConfig {
    /// Parse a (possibly partial) JSON configuration; missing keys take defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.max <= 0 {
            log::warn!("Slider max {} is not positive, values will all read 0", config.max);
        }
        Ok(config)
    }

    /// Center of the widget box
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Radius of the background circumference, also the inner edge of the arc
    #[inline]
    pub fn track_radius(&self) -> f64 {
        self.radius - self.thickness / 2.0
    }

    /// Outer edge of the progress arc
    #[inline]
    pub fn outer_radius(&self) -> f64 {
        self.radius + self.thickness / 2.0
    }

    /// Side of the square image badge
    pub fn image_size(&self) -> f64 {
        self.radius * 2.0
    }

    /// Top/left offset of the image badge inside the widget box
    pub fn image_position(&self) -> f64 {
        self.width / 2.0 - self.radius
    }

    /// Whether a badge image is configured (track renders transparent)
    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SliderConfig::default();
        assert_eq!(config.width, 120.0);
        assert_eq!(config.radius, 45.0);
        assert_eq!(config.max, 100);
        assert_eq!(config.units, "%");
        assert!(!config.has_image());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SliderConfig::from_json(r#"{"max": 360, "thick": 8, "units": "°"}"#).unwrap();
        assert_eq!(config.max, 360);
        assert_eq!(config.thickness, 8.0);
        assert_eq!(config.units, "°");
        assert_eq!(config.width, 120.0);
        assert_eq!(config.min, 0);
    }

    #[test]
    fn test_image_url_key() {
        let config = SliderConfig::from_json(r#"{"imageUrl": "badge.png"}"#).unwrap();
        assert!(config.has_image());

        let empty = SliderConfig::from_json(r#"{"imageUrl": ""}"#).unwrap();
        assert!(!empty.has_image());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(SliderConfig::from_json("{\"max\": \"lots\"}").is_err());
    }

    #[test]
    fn test_derived_geometry() {
        let config = SliderConfig::default();
        assert_eq!(config.center(), DVec2::new(60.0, 60.0));
        assert_eq!(config.track_radius(), 42.5);
        assert_eq!(config.outer_radius(), 47.5);
        assert_eq!(config.image_size(), 90.0);
        assert_eq!(config.image_position(), 15.0);
    }
}
