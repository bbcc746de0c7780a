//! Caption, callout and arrow placement.
//!
//! Every position is a fixed offset from the canvas or from a placed point;
//! nothing is tuned per dataset and no overlap avoidance is attempted.

use log::debug;

use paytrail_core::{draw::FontWeight, geometry::Point, identifier::Id};

use super::{ChartGeometry, PlacedPoint, Placement};
use crate::i18n::{Language, TextBundle};

const TITLE_Y: f32 = 25.0;
const SUBTITLE_Y: f32 = 42.0;
const AXIS_LABEL_X: f32 = 15.0;
const AXIS_LABEL_ROTATION: f32 = -90.0;

const YEAR_CAPTION_OFFSET: f32 = 25.0;
const AGE_YEAR_CAPTION_OFFSET: f32 = 40.0;
const AGE_CAPTION_SHRINK: f32 = 2.0;
const MAJOR_NOTE_OFFSET: f32 = 30.0;
const AMOUNT_BASE_OFFSET: f32 = 40.0;
const AMOUNT_LINE_HEIGHT: f32 = 20.0;

const CALLOUT_TOP_Y: f32 = 60.0;
const CALLOUT_VALUE_Y: f32 = 52.0;
const CALLOUT_CONNECTOR_GAP: f32 = 20.0;
const CALLOUT_HEAD_BASE_GAP: f32 = 23.0;
const CALLOUT_HEAD_TIP_GAP: f32 = 15.0;
const CALLOUT_HEAD_HALF_WIDTH: f32 = 6.0;
const CALLOUT_CAPTION_OFFSET: f32 = 60.0;

const FLANK_Y: f32 = 80.0;
const FLANK_SHAFT_NEAR: f32 = 60.0;
const FLANK_SHAFT_FAR: f32 = 150.0;
const FLANK_HEAD_TIP: f32 = 50.0;
const FLANK_HEAD_BASE: f32 = 65.0;
const FLANK_HEAD_HALF_HEIGHT: f32 = 5.0;

/// What a caption labels; the renderer picks colors from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationRole {
    Title,
    Subtitle,
    AxisLabel,
    YearCaption,
    AgeCaption,
    MajorNote,
    AmountCaption,
    CalloutValue,
    CalloutCaption,
}

/// A positioned caption. The position is the text baseline, centered
/// horizontally.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnnotation {
    role: AnnotationRole,
    position: Point,
    content: String,
    font_size: f32,
    font_weight: FontWeight,
    rotation: Option<f32>,
}

impl TextAnnotation {
    fn new(role: AnnotationRole, position: Point, content: &str, font_size: f32) -> Self {
        Self {
            role,
            position,
            content: content.to_string(),
            font_size,
            font_weight: FontWeight::Normal,
            rotation: None,
        }
    }

    fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn role(&self) -> AnnotationRole {
        self.role
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    /// Rotation in degrees around [`TextAnnotation::position`].
    pub fn rotation(&self) -> Option<f32> {
        self.rotation
    }
}

/// Arrow and value pointing down at the final-payment point.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalCallout {
    index: usize,
    id: Id,
    connector: [Point; 2],
    arrowhead: [Point; 3],
    value: TextAnnotation,
    caption: TextAnnotation,
}

impl TerminalCallout {
    /// Index of the targeted point.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// Vertical connector from the top of the chart to just above the point.
    pub fn connector(&self) -> [Point; 2] {
        self.connector
    }

    /// Downward-pointing triangle; the last vertex is the tip.
    pub fn arrowhead(&self) -> [Point; 3] {
        self.arrowhead
    }

    pub fn value(&self) -> &TextAnnotation {
        &self.value
    }

    pub fn caption(&self) -> &TextAnnotation {
        &self.caption
    }
}

/// A static horizontal arrow at one edge of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlankArrow {
    shaft: [Point; 2],
    head: [Point; 3],
}

impl FlankArrow {
    pub fn shaft(&self) -> [Point; 2] {
        self.shaft
    }

    /// Triangle; the first vertex is the tip.
    pub fn head(&self) -> [Point; 3] {
        self.head
    }
}

/// One overlay element of the chart.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Text(TextAnnotation),
    Callout(TerminalCallout),
    FlankArrow(FlankArrow),
}

/// The callout target: the last point in sequence order that is flagged as
/// the final payment and carries a value.
pub fn terminal_target<'p, 'a>(placement: &'p Placement<'a>) -> Option<&'p PlacedPoint<'a>> {
    placement
        .iter()
        .rev()
        .find(|p| p.data().is_last_payment() && p.data().value().is_some())
}

/// Computes the annotation list for a placement.
#[derive(Debug)]
pub struct AnnotationPlanner<'g> {
    geometry: &'g ChartGeometry,
    bundle: &'static TextBundle,
}

impl<'g> AnnotationPlanner<'g> {
    pub fn new(geometry: &'g ChartGeometry, language: Language) -> Self {
        Self {
            geometry,
            bundle: language.bundle(),
        }
    }

    /// Static decorations first, then per-point captions in point order, then
    /// the terminal callout if there is a qualifying point.
    pub fn plan(&self, placement: &Placement<'_>) -> Vec<Annotation> {
        let mut annotations = self.static_decorations();

        for point in placement.iter() {
            annotations.extend(self.point_captions(point).into_iter().map(Annotation::Text));
        }

        if let Some(callout) = terminal_target(placement).map(|p| self.terminal_callout(p)) {
            annotations.push(Annotation::Callout(callout));
        }

        debug!(annotations_count = annotations.len(); "Annotations planned");
        annotations
    }

    fn static_decorations(&self) -> Vec<Annotation> {
        let geometry = self.geometry;
        let center_x = geometry.width() / 2.0;

        let title = TextAnnotation::new(
            AnnotationRole::Title,
            Point::new(center_x, TITLE_Y),
            self.bundle.coverage,
            geometry.title_font_size(),
        )
        .with_weight(FontWeight::SemiBold);

        let subtitle = TextAnnotation::new(
            AnnotationRole::Subtitle,
            Point::new(center_x, SUBTITLE_Y),
            self.bundle.or_clause,
            geometry.font_size(),
        );

        let axis_label = TextAnnotation::new(
            AnnotationRole::AxisLabel,
            Point::new(AXIS_LABEL_X, geometry.center_y()),
            self.bundle.x_axis_label,
            geometry.font_size(),
        )
        .with_weight(FontWeight::SemiBold)
        .with_rotation(AXIS_LABEL_ROTATION);

        vec![
            Annotation::Text(title),
            Annotation::Text(subtitle),
            Annotation::Text(axis_label),
            Annotation::FlankArrow(flank_arrow(0.0, 1.0)),
            Annotation::FlankArrow(flank_arrow(geometry.width(), -1.0)),
        ]
    }

    fn point_captions(&self, point: &PlacedPoint<'_>) -> Vec<TextAnnotation> {
        let geometry = self.geometry;
        let data = point.data();
        let (x, y) = (point.x(), point.y());
        let mut captions = Vec::new();

        if let Some(caption) = data.axis_caption() {
            let offset = if data.is_age_marked() {
                captions.push(TextAnnotation::new(
                    AnnotationRole::AgeCaption,
                    Point::new(x, y + YEAR_CAPTION_OFFSET),
                    self.bundle.at_age,
                    geometry.small_font_size() - AGE_CAPTION_SHRINK,
                ));
                AGE_YEAR_CAPTION_OFFSET
            } else {
                YEAR_CAPTION_OFFSET
            };
            captions.push(TextAnnotation::new(
                AnnotationRole::YearCaption,
                Point::new(x, y + offset),
                &caption,
                geometry.small_font_size(),
            ));
        }

        if let Some(note) = data.note().filter(|_| data.is_major()) {
            captions.push(TextAnnotation::new(
                AnnotationRole::MajorNote,
                Point::new(x, y - MAJOR_NOTE_OFFSET),
                note,
                geometry.small_font_size(),
            ));
        }

        let amount = data
            .level()
            .filter(|level| *level >= 0)
            .zip(data.amount_label());
        if let Some((level, amount)) = amount {
            let offset = AMOUNT_BASE_OFFSET + level as f32 * AMOUNT_LINE_HEIGHT;
            captions.push(
                TextAnnotation::new(
                    AnnotationRole::AmountCaption,
                    Point::new(x, y - offset),
                    amount,
                    geometry.small_font_size(),
                )
                .with_weight(FontWeight::Bold),
            );
        }

        captions
    }

    fn terminal_callout(&self, point: &PlacedPoint<'_>) -> TerminalCallout {
        let geometry = self.geometry;
        let (x, y) = (point.x(), point.y());
        let value = point.data().value().unwrap_or_default();

        TerminalCallout {
            index: point.index(),
            id: point.id(),
            connector: [
                Point::new(x, CALLOUT_TOP_Y),
                Point::new(x, y - CALLOUT_CONNECTOR_GAP),
            ],
            arrowhead: [
                Point::new(x - CALLOUT_HEAD_HALF_WIDTH, y - CALLOUT_HEAD_BASE_GAP),
                Point::new(x + CALLOUT_HEAD_HALF_WIDTH, y - CALLOUT_HEAD_BASE_GAP),
                Point::new(x, y - CALLOUT_HEAD_TIP_GAP),
            ],
            value: TextAnnotation::new(
                AnnotationRole::CalloutValue,
                Point::new(x, CALLOUT_VALUE_Y),
                value,
                geometry.title_font_size(),
            )
            .with_weight(FontWeight::Bold),
            caption: TextAnnotation::new(
                AnnotationRole::CalloutCaption,
                Point::new(x, y + CALLOUT_CAPTION_OFFSET),
                self.bundle.premium_end,
                geometry.small_font_size(),
            ),
        }
    }
}

/// Arrow at the edge `edge_x`, pointing outward; `inward` is `1.0` for the
/// left edge and `-1.0` for the right one.
fn flank_arrow(edge_x: f32, inward: f32) -> FlankArrow {
    let at = |distance: f32| edge_x + inward * distance;
    FlankArrow {
        shaft: [
            Point::new(at(FLANK_SHAFT_NEAR), FLANK_Y),
            Point::new(at(FLANK_SHAFT_FAR), FLANK_Y),
        ],
        head: [
            Point::new(at(FLANK_HEAD_TIP), FLANK_Y),
            Point::new(at(FLANK_HEAD_BASE), FLANK_Y - FLANK_HEAD_HALF_HEIGHT),
            Point::new(at(FLANK_HEAD_BASE), FLANK_Y + FLANK_HEAD_HALF_HEIGHT),
        ],
    }
}
