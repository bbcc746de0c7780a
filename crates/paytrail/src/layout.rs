//! Chart layout: geometry, point placement, path synthesis and annotations.
//!
//! Every stage is a pure function of its inputs; a layout pass is rerun in
//! full whenever the points, configuration or tooltip state change.

mod annotation;
mod geometry;
mod path;
mod placement;

pub use annotation::{
    Annotation, AnnotationPlanner, AnnotationRole, FlankArrow, TerminalCallout, TextAnnotation,
    terminal_target,
};
pub use geometry::ChartGeometry;
pub use path::{PathBuilder, PathSegment, SegmentKind, SegmentPolicy, TimelinePath};
pub use placement::{PlacedPoint, Placement, place_points};
