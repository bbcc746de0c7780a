//! Derived layout constants for one layout pass.

use log::{debug, warn};

use crate::config::ChartConfig;

/// Cap on the derived zigzag amplitude.
const MAX_DERIVED_AMPLITUDE: f32 = 20.0;
/// Derived amplitude as a fraction of the point gap.
const AMPLITUDE_GAP_RATIO: f32 = 0.4;

const MIN_DOT_RADIUS: f32 = 4.0;
const DOT_RADIUS_DIVISOR: f32 = 120.0;
const MIN_STROKE_WIDTH: f32 = 2.0;
const STROKE_WIDTH_DIVISOR: f32 = 320.0;

const FONT_SIZE: f32 = 14.0;
const SMALL_FONT_SIZE: f32 = 12.0;
const TITLE_FONT_SIZE: f32 = 16.0;

/// Layout constants resolved from a [`ChartConfig`] and the point count.
///
/// Inputs are clamped rather than rejected: non-finite values fall back to
/// their defaults, negative sizes become zero and a narrow canvas still gets
/// `min_available_width` of horizontal span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    width: f32,
    height: f32,
    margin: f32,
    center_y: f32,
    available_width: f32,
    gap: f32,
    dot_radius: f32,
    stroke_width: f32,
    amplitude: f32,
    point_count: usize,
}

impl ChartGeometry {
    /// Resolves the geometry for `point_count` points.
    ///
    /// # Examples
    ///
    /// ```
    /// use paytrail::config::ChartConfig;
    /// use paytrail::layout::ChartGeometry;
    ///
    /// let geometry = ChartGeometry::resolve(&ChartConfig::default(), 10);
    /// assert_eq!(geometry.center_y(), 160.0);
    /// assert_eq!(geometry.gap(), 100.0);
    /// assert_eq!(geometry.amplitude(), 20.0);
    /// ```
    pub fn resolve(config: &ChartConfig, point_count: usize) -> Self {
        let defaults = ChartConfig::default();
        let width = finite_or("width", config.width(), defaults.width()).max(0.0);
        let height = finite_or("height", config.height(), defaults.height()).max(0.0);
        let margin = finite_or(
            "margin_horizontal",
            config.margin_horizontal(),
            defaults.margin_horizontal(),
        )
        .max(0.0);
        let baseline_offset = finite_or(
            "baseline_offset",
            config.baseline_offset(),
            defaults.baseline_offset(),
        );
        let min_available_width = finite_or(
            "min_available_width",
            config.min_available_width(),
            defaults.min_available_width(),
        );

        let center_y = (height / 2.0 + baseline_offset).round();
        let available_width = min_available_width.max(width - 2.0 * margin);
        let gap = available_width / point_count.saturating_sub(1).max(1) as f32;

        let dot_radius = (width / DOT_RADIUS_DIVISOR).round().max(MIN_DOT_RADIUS);
        let stroke_width = (width / STROKE_WIDTH_DIVISOR).round().max(MIN_STROKE_WIDTH);

        let amplitude = match config.zigzag_amplitude().filter(|a| a.is_finite()) {
            Some(amplitude) => amplitude.max(0.0),
            None => (gap * AMPLITUDE_GAP_RATIO).min(MAX_DERIVED_AMPLITUDE),
        };

        let geometry = Self {
            width,
            height,
            margin,
            center_y,
            available_width,
            gap,
            dot_radius,
            stroke_width,
            amplitude,
            point_count,
        };
        debug!(
            point_count,
            center_y,
            gap,
            amplitude;
            "Chart geometry resolved"
        );
        geometry
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Horizontal margin; the first point sits at this x.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Shared baseline y of every point.
    pub fn center_y(&self) -> f32 {
        self.center_y
    }

    pub fn available_width(&self) -> f32 {
        self.available_width
    }

    /// Horizontal distance between consecutive points.
    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn dot_radius(&self) -> f32 {
        self.dot_radius
    }

    /// Radius of the circular tap region around each point.
    pub fn hit_radius(&self) -> f32 {
        self.dot_radius * 2.0
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn font_size(&self) -> f32 {
        FONT_SIZE
    }

    pub fn small_font_size(&self) -> f32 {
        SMALL_FONT_SIZE
    }

    pub fn title_font_size(&self) -> f32 {
        TITLE_FONT_SIZE
    }

    /// Peak and trough displacement of irregular segments.
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }
}

/// Replaces a NaN or infinite config value with its default.
fn finite_or(field: &str, value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        warn!(field, value; "Non-finite chart value replaced by default");
        fallback
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_canvas_ten_points() {
        let geometry = ChartGeometry::resolve(&ChartConfig::default(), 10);

        assert_approx_eq!(f32, geometry.center_y(), 160.0);
        assert_approx_eq!(f32, geometry.available_width(), 900.0);
        assert_approx_eq!(f32, geometry.gap(), 100.0);
        assert_approx_eq!(f32, geometry.dot_radius(), 8.0);
        assert_approx_eq!(f32, geometry.hit_radius(), 16.0);
        assert_approx_eq!(f32, geometry.stroke_width(), 3.0);
        assert_approx_eq!(f32, geometry.amplitude(), 20.0);
        assert_approx_eq!(f32, geometry.font_size(), 14.0);
        assert_approx_eq!(f32, geometry.small_font_size(), 12.0);
        assert_approx_eq!(f32, geometry.title_font_size(), 16.0);
        assert_eq!(geometry.point_count(), 10);
    }

    #[test]
    fn test_compact_baseline() {
        let geometry = ChartGeometry::resolve(&ChartConfig::compact(), 10);
        assert_approx_eq!(f32, geometry.center_y(), 148.0);
    }

    #[test]
    fn test_single_point_gap_is_guarded() {
        let geometry = ChartGeometry::resolve(&ChartConfig::default(), 1);
        assert!(geometry.gap().is_finite());
        assert_approx_eq!(f32, geometry.gap(), 900.0);

        let empty = ChartGeometry::resolve(&ChartConfig::default(), 0);
        assert!(empty.gap().is_finite());
    }

    #[test]
    fn test_narrow_canvas_clamps() {
        let config = ChartConfig::default().with_size(100.0, 100.0);
        let geometry = ChartGeometry::resolve(&config, 5);

        assert_approx_eq!(f32, geometry.available_width(), 200.0);
        assert_approx_eq!(f32, geometry.gap(), 50.0);
        assert_approx_eq!(f32, geometry.dot_radius(), 4.0);
        assert_approx_eq!(f32, geometry.stroke_width(), 2.0);
    }

    #[test]
    fn test_negative_sizes_clamped() {
        let config = ChartConfig::default()
            .with_size(-50.0, -10.0)
            .with_margin_horizontal(-5.0);
        let geometry = ChartGeometry::resolve(&config, 3);

        assert_approx_eq!(f32, geometry.width(), 0.0);
        assert_approx_eq!(f32, geometry.height(), 0.0);
        assert_approx_eq!(f32, geometry.margin(), 0.0);
        assert_approx_eq!(f32, geometry.available_width(), 200.0);
    }

    #[test]
    fn test_configured_amplitude() {
        let config = ChartConfig::default().with_zigzag_amplitude(35.0);
        let geometry = ChartGeometry::resolve(&config, 10);
        assert_approx_eq!(f32, geometry.amplitude(), 35.0);

        let config = ChartConfig::default().with_zigzag_amplitude(-3.0);
        let geometry = ChartGeometry::resolve(&config, 10);
        assert_approx_eq!(f32, geometry.amplitude(), 0.0);
    }

    #[test]
    fn test_derived_amplitude_follows_small_gap() {
        // 41 points over 900 units: gap 22.5, 40% of it is 9.
        let geometry = ChartGeometry::resolve(&ChartConfig::default(), 41);
        assert_approx_eq!(f32, geometry.amplitude(), 9.0);
    }

    #[test]
    fn test_non_finite_values_fall_back() {
        let config: ChartConfig = toml::from_str(
            "width = nan\nheight = inf\nmargin_horizontal = -inf\n\
             baseline_offset = nan\nmin_available_width = nan\nzigzag_amplitude = inf",
        )
        .unwrap();
        let geometry = ChartGeometry::resolve(&config, 10);

        assert_approx_eq!(f32, geometry.width(), 980.0);
        assert_approx_eq!(f32, geometry.height(), 280.0);
        assert_approx_eq!(f32, geometry.margin(), 40.0);
        assert_approx_eq!(f32, geometry.center_y(), 160.0);
        assert_approx_eq!(f32, geometry.gap(), 100.0);
        assert_approx_eq!(f32, geometry.amplitude(), 20.0);
    }
}
