//! The renderable result of one layout pass.

use log::trace;

use paytrail_core::{
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

use crate::{
    layout::{Annotation, ChartGeometry, PlacedPoint, Placement, TerminalCallout, TimelinePath},
    tooltip::{TooltipController, tooltip_content},
};

const TOOLTIP_WIDTH: f32 = 80.0;
const TOOLTIP_HEIGHT: f32 = 30.0;
const TOOLTIP_OFFSET_Y: f32 = 50.0;
const TOOLTIP_TEXT_OFFSET_Y: f32 = 32.0;
const TOOLTIP_CORNER_RADIUS: f32 = 6.0;

/// The tooltip box of the active point.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    index: usize,
    id: Id,
    bounds: Bounds,
    text_position: Point,
    content: String,
}

impl Tooltip {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn corner_radius(&self) -> f32 {
        TOOLTIP_CORNER_RADIUS
    }

    /// Baseline position of the tooltip text.
    pub fn text_position(&self) -> Point {
        self.text_position
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Builds the tooltip for the active point, if it resolves to a point that
/// has tooltip content.
pub fn plan_tooltip(placement: &Placement<'_>, controller: &TooltipController) -> Option<Tooltip> {
    let point = placement.get(controller.active()?)?;
    let content = tooltip_content(point.data())?;
    let (x, y) = (point.x(), point.y());

    Some(Tooltip {
        index: point.index(),
        id: point.id(),
        bounds: Bounds::new_from_top_left(
            Point::new(x - TOOLTIP_WIDTH / 2.0, y - TOOLTIP_OFFSET_Y),
            Size::new(TOOLTIP_WIDTH, TOOLTIP_HEIGHT),
        ),
        text_position: Point::new(x, y - TOOLTIP_TEXT_OFFSET_Y),
        content: content.to_string(),
    })
}

/// Everything a renderer needs to paint the chart: resolved geometry, placed
/// points, the path, overlay annotations and the visible tooltip.
///
/// A scene borrows the points it was laid out from.
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    geometry: ChartGeometry,
    placement: Placement<'a>,
    path: TimelinePath,
    annotations: Vec<Annotation>,
    tooltip: Option<Tooltip>,
}

impl<'a> Scene<'a> {
    pub fn new(
        geometry: ChartGeometry,
        placement: Placement<'a>,
        path: TimelinePath,
        annotations: Vec<Annotation>,
        tooltip: Option<Tooltip>,
    ) -> Self {
        Self {
            geometry,
            placement,
            path,
            annotations,
            tooltip,
        }
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    pub fn placement(&self) -> &Placement<'a> {
        &self.placement
    }

    pub fn points(&self) -> &[PlacedPoint<'a>] {
        self.placement.points()
    }

    pub fn path(&self) -> &TimelinePath {
        &self.path
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn terminal_callout(&self) -> Option<&TerminalCallout> {
        self.annotations.iter().find_map(|annotation| match annotation {
            Annotation::Callout(callout) => Some(callout),
            _ => None,
        })
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Whether the point at `index` shows its tooltip.
    pub fn is_tooltip_visible(&self, index: usize) -> bool {
        self.tooltip.as_ref().is_some_and(|t| t.index == index)
    }

    /// Maps a tap at `position` to the id of the topmost point whose hit
    /// circle contains it. Later points are drawn over earlier ones.
    pub fn hit_test(&self, position: Point) -> Option<Id> {
        let radius = self.geometry.hit_radius();
        let hit = self
            .placement
            .iter()
            .rev()
            .find(|point| point.position().distance_to(position) <= radius)
            .map(PlacedPoint::id);
        trace!(x = position.x(), y = position.y(), hit:? = hit; "Hit test");
        hit
    }
}
