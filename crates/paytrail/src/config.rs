//! Configuration types for Paytrail chart rendering.
//!
//! All types implement [`serde::Deserialize`] and fall back to defaults for
//! every missing field, so a partial TOML file is always valid.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining chart, style and language.
//! - [`ChartConfig`] - Canvas size, margins and the zigzag [`SegmentPolicy`].
//! - [`StyleConfig`] - Colors of the path, points, captions and background.
//!
//! # Example
//!
//! ```
//! # use paytrail::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.chart().width(), 980.0);
//! assert!(config.style().stroke_color().is_ok());
//! ```

use serde::Deserialize;

use paytrail_core::color::Color;

use crate::{i18n::Language, layout::SegmentPolicy};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Chart geometry section.
    #[serde(default)]
    chart: ChartConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Language tag of the caption bundle, e.g. `"th"` or `"en-US"`.
    #[serde(default)]
    language: Option<String>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given sections and no language
    /// tag.
    pub fn new(chart: ChartConfig, style: StyleConfig) -> Self {
        Self {
            chart,
            style,
            language: None,
        }
    }

    /// Returns the chart configuration.
    pub fn chart(&self) -> &ChartConfig {
        &self.chart
    }

    /// Returns the chart configuration for in-place overrides.
    pub fn chart_mut(&mut self) -> &mut ChartConfig {
        &mut self.chart
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the configured language tag, if any.
    pub fn language_tag(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Resolves the configured tag to a [`Language`]. Unset or unsupported
    /// tags resolve to the default language.
    pub fn language(&self) -> Language {
        self.language
            .as_deref()
            .map(Language::from_tag)
            .unwrap_or_default()
    }

    pub fn set_language(&mut self, tag: &str) {
        self.language = Some(tag.to_string());
    }

    /// Builder-style variant of [`AppConfig::set_language`].
    pub fn with_language(mut self, tag: &str) -> Self {
        self.set_language(tag);
        self
    }
}

/// Canvas and path configuration.
///
/// Sizes are in SVG user units. Negative values are clamped when the
/// geometry is resolved, never rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    width: f32,
    height: f32,
    margin_horizontal: f32,
    /// Vertical bias of the baseline below the canvas middle.
    baseline_offset: f32,
    /// Floor of the horizontal span available to the points.
    min_available_width: f32,
    /// Fixed zigzag amplitude; derived from the point gap when unset.
    zigzag_amplitude: Option<f32>,
    segments: SegmentPolicy,
}

impl ChartConfig {
    /// The compact profile: same canvas, baseline closer to the middle.
    pub fn compact() -> Self {
        Self {
            baseline_offset: 8.0,
            ..Self::default()
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn margin_horizontal(&self) -> f32 {
        self.margin_horizontal
    }

    pub fn baseline_offset(&self) -> f32 {
        self.baseline_offset
    }

    pub fn min_available_width(&self) -> f32 {
        self.min_available_width
    }

    pub fn zigzag_amplitude(&self) -> Option<f32> {
        self.zigzag_amplitude
    }

    /// Returns the policy deciding which segments are drawn irregular.
    pub fn segments(&self) -> &SegmentPolicy {
        &self.segments
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_margin_horizontal(mut self, margin: f32) -> Self {
        self.margin_horizontal = margin;
        self
    }

    pub fn with_zigzag_amplitude(mut self, amplitude: f32) -> Self {
        self.zigzag_amplitude = Some(amplitude);
        self
    }

    pub fn with_segments(mut self, segments: SegmentPolicy) -> Self {
        self.segments = segments;
        self
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 980.0,
            height: 280.0,
            margin_horizontal: 40.0,
            baseline_offset: 20.0,
            min_available_width: 200.0,
            zigzag_amplitude: None,
            segments: SegmentPolicy::default(),
        }
    }
}

const DEFAULT_STROKE_COLOR: &str = "#2c8592";
const DEFAULT_POINT_FILL: &str = "#c9e04a";
const DEFAULT_TEXT_COLOR: &str = "#333333";
const DEFAULT_MUTED_TEXT_COLOR: &str = "#666666";
const DEFAULT_ARROWHEAD_COLOR: &str = "#1b1b1b";
const DEFAULT_TOOLTIP_FILL: &str = "white";
const DEFAULT_BACKGROUND_COLOR: &str = "#f8f9fa";

/// Visual styling of the rendered chart.
///
/// Colors are stored as CSS color strings and parsed on access, so an
/// invalid color surfaces as an error at render time.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    stroke_color: Option<String>,
    #[serde(default)]
    point_fill_color: Option<String>,
    #[serde(default)]
    text_color: Option<String>,
    #[serde(default)]
    muted_text_color: Option<String>,
    #[serde(default)]
    arrowhead_color: Option<String>,
    #[serde(default)]
    tooltip_fill_color: Option<String>,
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Color of the timeline path, point outlines and connectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn stroke_color(&self) -> Result<Color, String> {
        parse_color("stroke", self.stroke_color.as_deref(), DEFAULT_STROKE_COLOR)
    }

    pub fn point_fill_color(&self) -> Result<Color, String> {
        parse_color(
            "point fill",
            self.point_fill_color.as_deref(),
            DEFAULT_POINT_FILL,
        )
    }

    pub fn text_color(&self) -> Result<Color, String> {
        parse_color("text", self.text_color.as_deref(), DEFAULT_TEXT_COLOR)
    }

    /// Color of the subtitle.
    pub fn muted_text_color(&self) -> Result<Color, String> {
        parse_color(
            "muted text",
            self.muted_text_color.as_deref(),
            DEFAULT_MUTED_TEXT_COLOR,
        )
    }

    pub fn arrowhead_color(&self) -> Result<Color, String> {
        parse_color(
            "arrowhead",
            self.arrowhead_color.as_deref(),
            DEFAULT_ARROWHEAD_COLOR,
        )
    }

    pub fn tooltip_fill_color(&self) -> Result<Color, String> {
        parse_color(
            "tooltip fill",
            self.tooltip_fill_color.as_deref(),
            DEFAULT_TOOLTIP_FILL,
        )
    }

    pub fn background_color(&self) -> Result<Color, String> {
        parse_color(
            "background",
            self.background_color.as_deref(),
            DEFAULT_BACKGROUND_COLOR,
        )
    }

    pub fn with_stroke_color(mut self, color: &str) -> Self {
        self.stroke_color = Some(color.to_string());
        self
    }

    pub fn with_point_fill_color(mut self, color: &str) -> Self {
        self.point_fill_color = Some(color.to_string());
        self
    }

    pub fn with_background_color(mut self, color: &str) -> Self {
        self.background_color = Some(color.to_string());
        self
    }
}

fn parse_color(field: &str, configured: Option<&str>, default: &str) -> Result<Color, String> {
    Color::new(configured.unwrap_or(default))
        .map_err(|err| format!("Invalid {field} color in config: {err}"))
}
