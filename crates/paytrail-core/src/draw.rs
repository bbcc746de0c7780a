//! Drawable primitives for chart rendering.
//!
//! Every primitive implements [`Drawable`] and emits its SVG nodes into a
//! [`RenderLayer`] of a [`LayeredOutput`]. Layers are sorted when the output is
//! rendered, so primitives can be produced in any order while the final
//! document keeps the chart's z-order (path below points, points below
//! captions, tooltips and arrows on top).

mod layer;
mod positioned;
mod shape;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use positioned::PositionedDrawable;
pub use shape::{Circle, Polygon, Polyline, Rectangle};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin};
pub use text::{FontWeight, Text, TextDefinition};

use crate::geometry::Point;

/// Trait for chart elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// Anchored drawables (circles, rectangles, text) are placed at
    /// `position`. Vertex-based drawables (polylines, polygons) are translated
    /// by `position`, so passing [`Point::default()`] renders their vertices
    /// as given.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;
}
