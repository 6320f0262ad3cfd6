//! Generation options and their serializable overrides.
//!
//! [`Options`] is the complete set of values a pattern reads. Callers usually
//! supply an [`OptionOverrides`] instead, which names only the keys they want
//! to change and is merged over the registry defaults.
//!
//! # Example
//!
//! ```
//! use geopattern::{OptionOverrides, Options};
//!
//! let overrides = OptionOverrides::from_json(r##"{ "base_color": "#2244aa" }"##).unwrap();
//! let options = Options::default().merged(&overrides);
//!
//! assert_eq!(options.base_color, "#2244aa");
//! assert_eq!(options.fill_color_dark, "#222");
//! ```

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::color::parse_color;
use crate::error::Result;

// ============================================================================
// Options
// ============================================================================

/// Fully-populated generation options.
///
/// # JSON Format
///
/// ```json
/// {
///   "base_color": "#933c3c",
///   "fill_color_dark": "#222",
///   "fill_color_light": "#ddd",
///   "stroke_color": "#000",
///   "stroke_opacity": 0.02,
///   "opacity_min": 0.02,
///   "opacity_max": 0.15
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify))]
#[serde(default)]
pub struct Options {
    /// Color the background is derived from.
    pub base_color: String,

    /// Fill for cells whose sampled value is odd.
    pub fill_color_dark: String,

    /// Fill for cells whose sampled value is even.
    pub fill_color_light: String,

    /// Outline color for stroked shapes.
    pub stroke_color: String,

    /// Outline opacity for stroked shapes.
    pub stroke_opacity: f64,

    /// Opacity of a cell whose sampled value is 0.
    pub opacity_min: f64,

    /// Opacity of a cell whose sampled value is 15.
    pub opacity_max: f64,

    /// Pattern to use when none is passed explicitly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_color: "#933c3c".to_string(),
            fill_color_dark: "#222".to_string(),
            fill_color_light: "#ddd".to_string(),
            stroke_color: "#000".to_string(),
            stroke_opacity: 0.02,
            opacity_min: 0.02,
            opacity_max: 0.15,
            generator: None,
        }
    }
}

impl Options {
    /// Returns a copy with every set field of `overrides` applied.
    pub fn merged(&self, overrides: &OptionOverrides) -> Self {
        let pick = |over: &Option<String>, base: &String| over.clone().unwrap_or_else(|| base.clone());
        Self {
            base_color: pick(&overrides.base_color, &self.base_color),
            fill_color_dark: pick(&overrides.fill_color_dark, &self.fill_color_dark),
            fill_color_light: pick(&overrides.fill_color_light, &self.fill_color_light),
            stroke_color: pick(&overrides.stroke_color, &self.stroke_color),
            stroke_opacity: overrides.stroke_opacity.unwrap_or(self.stroke_opacity),
            opacity_min: overrides.opacity_min.unwrap_or(self.opacity_min),
            opacity_max: overrides.opacity_max.unwrap_or(self.opacity_max),
            generator: overrides.generator.clone().or_else(|| self.generator.clone()),
        }
    }

    /// Parses [`base_color`](Self::base_color), failing with
    /// [`Error::InvalidColor`](crate::Error::InvalidColor) if it is malformed.
    pub fn validate(&self) -> Result<Srgb<u8>> {
        parse_color(&self.base_color)
    }

    /// Serializes the options to a JSON string.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the options to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes options from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// OptionOverrides
// ============================================================================

/// Partial options, merged over registry defaults at generation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify))]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct OptionOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "clap", arg(long))]
    pub base_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "clap", arg(long))]
    pub fill_color_dark: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "clap", arg(long))]
    pub fill_color_light: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "clap", arg(long))]
    pub stroke_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "clap", arg(long))]
    pub stroke_opacity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "clap", arg(long))]
    pub opacity_min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "clap", arg(long))]
    pub opacity_max: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "clap", arg(skip))]
    pub generator: Option<String>,
}

impl OptionOverrides {
    /// Creates overrides that change nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_color(mut self, color: impl Into<String>) -> Self {
        self.base_color = Some(color.into());
        self
    }

    pub fn with_fill_colors(mut self, light: impl Into<String>, dark: impl Into<String>) -> Self {
        self.fill_color_light = Some(light.into());
        self.fill_color_dark = Some(dark.into());
        self
    }

    pub fn with_stroke(mut self, color: impl Into<String>, opacity: f64) -> Self {
        self.stroke_color = Some(color.into());
        self.stroke_opacity = Some(opacity);
        self
    }

    pub fn with_opacity_range(mut self, min: f64, max: f64) -> Self {
        self.opacity_min = Some(min);
        self.opacity_max = Some(max);
        self
    }

    pub fn with_generator(mut self, name: impl Into<String>) -> Self {
        self.generator = Some(name.into());
        self
    }

    /// Serializes the overrides to a JSON string.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes overrides from a JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn defaults_match_documented_values() {
        let options = Options::default();
        assert_eq!(options.base_color, "#933c3c");
        assert_eq!(options.fill_color_dark, "#222");
        assert_eq!(options.fill_color_light, "#ddd");
        assert_eq!(options.stroke_color, "#000");
        assert_eq!(options.stroke_opacity, 0.02);
        assert_eq!(options.opacity_min, 0.02);
        assert_eq!(options.opacity_max, 0.15);
        assert!(options.generator.is_none());
    }

    #[test]
    fn merge_applies_only_set_fields() {
        let overrides = OptionOverrides::new()
            .with_base_color("#2244aa")
            .with_opacity_range(0.1, 0.9)
            .with_generator("xes");
        let merged = Options::default().merged(&overrides);

        assert_eq!(merged.base_color, "#2244aa");
        assert_eq!(merged.opacity_min, 0.1);
        assert_eq!(merged.opacity_max, 0.9);
        assert_eq!(merged.generator.as_deref(), Some("xes"));
        assert_eq!(merged.fill_color_light, "#ddd");
        assert_eq!(merged.stroke_opacity, 0.02);
    }

    #[test]
    fn empty_overrides_are_identity() {
        let base = Options {
            generator: Some("plaid".into()),
            ..Options::default()
        };
        assert_eq!(base.merged(&OptionOverrides::new()), base);
    }

    #[test]
    fn validate_rejects_bad_base_color() {
        let options = Options {
            base_color: "not-a-color".into(),
            ..Options::default()
        };
        assert!(matches!(options.validate(), Err(Error::InvalidColor { .. })));
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn options_json_roundtrip() {
        let options = Options::default().merged(&OptionOverrides::new().with_stroke("#fff", 0.5));
        let json = options.to_json().unwrap();
        assert!(json.contains("\"stroke_color\":\"#fff\""));
        assert!(!json.contains("generator"));
        assert_eq!(Options::from_json(&json).unwrap(), options);
    }

    #[test]
    fn partial_options_json_fills_defaults() {
        let options = Options::from_json(r#"{ "opacity_max": 0.5 }"#).unwrap();
        assert_eq!(options.opacity_max, 0.5);
        assert_eq!(options.base_color, "#933c3c");
    }

    #[test]
    fn overrides_json_skips_unset_fields() {
        let overrides = OptionOverrides::new().with_fill_colors("#eee", "#111");
        let json = overrides.to_json().unwrap();
        assert_eq!(json, r##"{"fill_color_dark":"#111","fill_color_light":"#eee"}"##);

        let restored = OptionOverrides::from_json("{}").unwrap();
        assert_eq!(restored, OptionOverrides::new());
    }
}
