//! Stroke definitions for paths, point outlines and callout connectors.
//!
//! | Rust Property | SVG Attribute |
//! |--------------|---------------|
//! | `color` | `stroke`, `stroke-opacity` |
//! | `width` | `stroke-width` |
//! | `cap` | `stroke-linecap` |
//! | `join` | `stroke-linejoin` |

use crate::color::Color;

/// Defines how line endpoints are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    Round,
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Defines how corners between path segments are rendered.
///
/// Zigzag segments are angular, so the join decides whether their peaks look
/// sharp (`Miter`) or softened (`Round`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    /// Sharp corner (SVG default)
    #[default]
    Miter,
    Round,
    Bevel,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// A stroke definition for rendering lines and outlines.
///
/// # Examples
///
/// ```
/// use paytrail_core::draw::{StrokeCap, StrokeDefinition, StrokeJoin};
/// use paytrail_core::color::Color;
///
/// let stroke = StrokeDefinition::new(Color::new("#2c8592").unwrap(), 3.0)
///     .with_cap(StrokeCap::Round)
///     .with_join(StrokeJoin::Round);
/// assert_eq!(stroke.width(), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// Creates a new stroke with butt caps and miter joins.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// Creates a stroke with round caps and round joins, as used for the
    /// timeline path.
    pub fn rounded(color: Color, width: f32) -> Self {
        Self::new(color, width)
            .with_cap(StrokeCap::Round)
            .with_join(StrokeJoin::Round)
    }

    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_join(mut self, join: StrokeJoin) -> Self {
        self.join = join;
        self
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the stroke join style.
    pub fn join(&self) -> StrokeJoin {
        self.join
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use paytrail_core::draw::StrokeDefinition;
/// use paytrail_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 2.0);
/// let line = svg_element::Path::new().set("d", "M 0 0 L 10 0");
/// let line = paytrail_core::apply_stroke!(line, &stroke);
/// assert!(line.to_string().contains("stroke-width=\"2\""));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
            .set("stroke-linejoin", $stroke.join().to_svg_value())
    }};
}
