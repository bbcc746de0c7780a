//! Timeline path synthesis.
//!
//! The path starts at the first placed point and visits every following
//! point in order. Segment `i` (for `1 <= i < n`) joins point `i - 1` to
//! point `i`, and a [`SegmentPolicy`] decides whether it is drawn straight or
//! deflected away from the baseline.

use std::{collections::BTreeSet, fmt};

use log::{debug, trace};
use serde::Deserialize;
use svg::node::{Value, element::path::Data};

use paytrail_core::geometry::Point;

use super::{PlacedPoint, Placement};

/// Segments drawn irregular when nothing else is configured.
const DEFAULT_IRREGULAR_SEGMENTS: [usize; 3] = [4, 5, 7];
const DEFAULT_MAJOR_DAMPING: f32 = 0.5;
/// Number of horizontal steps the zigzag span is divided into.
const ZIGZAG_STEPS: f32 = 6.0;

fn default_major_damping() -> f32 {
    DEFAULT_MAJOR_DAMPING
}

/// Chooses the drawing strategy of each segment.
///
/// In TOML the variant is selected by the `strategy` key:
///
/// ```toml
/// [chart.segments]
/// strategy = "indexed"
/// indices = [4, 5, 7]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SegmentPolicy {
    /// The listed segments zigzag; all others are straight. Indices outside
    /// `1..n` are ignored.
    Indexed { indices: BTreeSet<usize> },
    /// Every segment gets one mid-point deflection, upward on odd segments
    /// and downward on even ones. The deflection is scaled by
    /// `major_damping` when either endpoint is a major point.
    Alternating {
        #[serde(default = "default_major_damping")]
        major_damping: f32,
    },
}

impl SegmentPolicy {
    /// Index-based policy over the given segments.
    pub fn indexed(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::Indexed {
            indices: indices.into_iter().collect(),
        }
    }

    /// Alternating policy with the default damping.
    pub fn alternating() -> Self {
        Self::Alternating {
            major_damping: DEFAULT_MAJOR_DAMPING,
        }
    }
}

impl Default for SegmentPolicy {
    fn default() -> Self {
        Self::indexed(DEFAULT_IRREGULAR_SEGMENTS)
    }
}

/// How a single segment was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Straight,
    /// Lead-in, peak, crossing, trough, crossing, lead-out.
    Zigzag,
    /// One mid-point deflection.
    Deflected,
}

/// The sub-path between two consecutive placed points.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    index: usize,
    kind: SegmentKind,
    from: Point,
    vertices: Vec<Point>,
}

impl PathSegment {
    /// Segment index; segment `i` ends at point `i`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Start of the segment, the end of the previous one.
    pub fn from(&self) -> Point {
        self.from
    }

    /// Vertices after [`PathSegment::from`]; the last one is the end point.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn end(&self) -> Point {
        self.vertices.last().copied().unwrap_or(self.from)
    }
}

/// A connected path through all placed points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelinePath {
    start: Option<Point>,
    segments: Vec<PathSegment>,
}

impl TimelinePath {
    /// First vertex, `None` for an empty path.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Last vertex, `None` for an empty path.
    pub fn end(&self) -> Option<Point> {
        self.segments
            .last()
            .map(PathSegment::end)
            .or(self.start)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the segment ending at point `index`.
    pub fn segment(&self, index: usize) -> Option<&PathSegment> {
        self.segments.iter().find(|s| s.index == index)
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// All vertices in drawing order, starting with [`TimelinePath::start`].
    pub fn vertices(&self) -> Vec<Point> {
        self.start
            .into_iter()
            .chain(self.segments.iter().flat_map(|s| s.vertices.iter().copied()))
            .collect()
    }

    /// SVG path data: one move to the start, then a line to every vertex.
    /// `None` for an empty path.
    pub fn path_data(&self) -> Option<Data> {
        let start = self.start?;
        let data = self
            .segments
            .iter()
            .flat_map(|s| s.vertices.iter())
            .fold(Data::new().move_to((start.x(), start.y())), |data, v| {
                data.line_to((v.x(), v.y()))
            });
        Some(data)
    }
}

/// Formats the path as SVG path data, e.g. `M40,160 L140,160`.
impl fmt::Display for TimelinePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path_data() {
            Some(data) => write!(f, "{}", Value::from(data)),
            None => Ok(()),
        }
    }
}

/// Builds a [`TimelinePath`] from placed points.
#[derive(Debug)]
pub struct PathBuilder<'p> {
    policy: &'p SegmentPolicy,
    amplitude: f32,
}

impl<'p> PathBuilder<'p> {
    pub fn new(policy: &'p SegmentPolicy, amplitude: f32) -> Self {
        Self {
            policy,
            amplitude: finite_or_zero(amplitude).max(0.0),
        }
    }

    /// Walks the placement pairwise and emits one segment per pair.
    pub fn build(&self, placement: &Placement<'_>) -> TimelinePath {
        let points = placement.points();
        let Some(first) = points.first() else {
            debug!("No points, empty path");
            return TimelinePath::default();
        };

        let segments: Vec<_> = points
            .windows(2)
            .map(|pair| self.build_segment(&pair[0], &pair[1]))
            .collect();

        debug!(
            segments_count = segments.len(),
            irregular_count = segments
                .iter()
                .filter(|s| s.kind != SegmentKind::Straight)
                .count();
            "Path built"
        );

        TimelinePath {
            start: Some(first.position()),
            segments,
        }
    }

    fn build_segment(&self, from: &PlacedPoint<'_>, to: &PlacedPoint<'_>) -> PathSegment {
        let index = to.index();
        let (kind, vertices) = match self.policy {
            SegmentPolicy::Indexed { indices } if indices.contains(&index) => (
                SegmentKind::Zigzag,
                zigzag_vertices(from.position(), to.position(), self.amplitude),
            ),
            SegmentPolicy::Indexed { .. } => (SegmentKind::Straight, vec![to.position()]),
            SegmentPolicy::Alternating { major_damping } => {
                let damping = if from.data().is_major() || to.data().is_major() {
                    resolve_damping(*major_damping)
                } else {
                    1.0
                };
                let upward = index % 2 == 1;
                (
                    SegmentKind::Deflected,
                    deflected_vertices(
                        from.position(),
                        to.position(),
                        self.amplitude * damping,
                        upward,
                    ),
                )
            }
        };

        trace!(index, kind:?; "Segment built");
        PathSegment {
            index,
            kind,
            from: from.position(),
            vertices,
        }
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

/// Clamps `major_damping` into `0..=1`; NaN falls back to the default.
fn resolve_damping(damping: f32) -> f32 {
    if damping.is_nan() {
        DEFAULT_MAJOR_DAMPING
    } else {
        damping.clamp(0.0, 1.0)
    }
}

/// Zigzag between `from` and `to` on the baseline `from.y()`.
///
/// A straight lead of `min(amplitude, length / 6)` is kept at both ends.
/// The span between the leads is divided into six steps: peak, crossing,
/// trough and crossing fall on the first four, then the path runs flat to
/// the lead-out. The last vertex is exactly `to`.
fn zigzag_vertices(from: Point, to: Point, amplitude: f32) -> Vec<Point> {
    let baseline = from.y();
    let length = (to.x() - from.x()).max(0.0);
    let lead = amplitude.min(length / ZIGZAG_STEPS).max(0.0);

    let start = from.x() + lead;
    let end = to.x() - lead;
    let step = (end - start).max(0.0) / ZIGZAG_STEPS;

    vec![
        Point::new(start, baseline),
        Point::new(start + step, baseline - amplitude),
        Point::new(start + 2.0 * step, baseline),
        Point::new(start + 3.0 * step, baseline + amplitude),
        Point::new(start + 4.0 * step, baseline),
        Point::new(end.max(start), baseline),
        to,
    ]
}

fn deflected_vertices(from: Point, to: Point, deflection: f32, upward: bool) -> Vec<Point> {
    let mid = from.midpoint(to);
    let offset = if upward { -deflection } else { deflection };
    vec![mid.with_y(from.y() + offset), to]
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::{
        config::ChartConfig,
        layout::{ChartGeometry, place_points},
        semantic::{DataPoint, sample_schedule},
    };

    fn build(points: &[DataPoint], policy: &SegmentPolicy, amplitude: f32) -> TimelinePath {
        let geometry = ChartGeometry::resolve(&ChartConfig::default(), points.len());
        let placement = place_points(points, &geometry);
        PathBuilder::new(policy, amplitude).build(&placement)
    }

    #[test]
    fn test_default_policy() {
        assert_eq!(SegmentPolicy::default(), SegmentPolicy::indexed([4, 5, 7]));
    }

    #[test]
    fn test_empty_and_single() {
        let policy = SegmentPolicy::default();

        let empty = build(&[], &policy, 20.0);
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "");
        assert!(empty.end().is_none());

        let single = build(&[DataPoint::new("only")], &policy, 20.0);
        assert_eq!(single.to_string(), "M40,160");
        assert!(single.segments().is_empty());
        assert_eq!(single.start(), single.end());
    }

    #[test]
    fn test_indexed_segments() {
        let points = sample_schedule();
        let path = build(&points, &SegmentPolicy::default(), 35.0);

        assert_eq!(path.segments().len(), 9);
        for segment in path.segments() {
            let expected = if [4, 5, 7].contains(&segment.index()) {
                SegmentKind::Zigzag
            } else {
                SegmentKind::Straight
            };
            assert_eq!(segment.kind(), expected, "segment {}", segment.index());
        }
        assert!(path.segment(0).is_none());
        assert_eq!(path.segment(1).unwrap().vertices().len(), 1);
    }

    #[test]
    fn test_zigzag_shape() {
        let vertices = zigzag_vertices(Point::new(440.0, 160.0), Point::new(540.0, 160.0), 35.0);

        assert_eq!(vertices.len(), 7);
        let lead = 100.0 / 6.0;
        assert_approx_eq!(f32, vertices[0].x(), 440.0 + lead, epsilon = 1e-3);
        assert_approx_eq!(f32, vertices[1].y(), 125.0);
        assert_approx_eq!(f32, vertices[2].y(), 160.0);
        assert_approx_eq!(f32, vertices[3].y(), 195.0);
        assert_approx_eq!(f32, vertices[4].y(), 160.0);
        assert_approx_eq!(f32, vertices[5].x(), 540.0 - lead, epsilon = 1e-3);
        assert_eq!(vertices[6], Point::new(540.0, 160.0));

        let peaks = vertices.iter().filter(|v| v.y() < 160.0).count();
        let troughs = vertices.iter().filter(|v| v.y() > 160.0).count();
        assert_eq!((peaks, troughs), (1, 1));
    }

    #[test]
    fn test_zigzag_degenerate_segment() {
        let vertices = zigzag_vertices(Point::new(10.0, 50.0), Point::new(10.0, 50.0), 20.0);
        assert!(vertices.iter().all(|v| v.x() >= 10.0 && v.x() <= 10.0));
        assert_eq!(vertices.last().copied(), Some(Point::new(10.0, 50.0)));
    }

    #[test]
    fn test_alternating_directions_and_damping() {
        let points = vec![
            DataPoint::new("a"),
            DataPoint::new("b"),
            DataPoint::new("c"),
            DataPoint::new("d").with_major(true),
        ];
        let path = build(&points, &SegmentPolicy::alternating(), 20.0);
        let segments = path.segments();

        assert!(segments.iter().all(|s| s.kind() == SegmentKind::Deflected));
        // Segment 1 deflects up, segment 2 down.
        assert_approx_eq!(f32, segments[0].vertices()[0].y(), 140.0);
        assert_approx_eq!(f32, segments[1].vertices()[0].y(), 180.0);
        // Segment 3 ends on a major point and is damped by half.
        assert_approx_eq!(f32, segments[2].vertices()[0].y(), 150.0);
    }

    #[test]
    fn test_display_path_data() {
        let points = vec![DataPoint::new("a"), DataPoint::new("b")];
        let path = build(&points, &SegmentPolicy::indexed([]), 20.0);
        assert_eq!(path.to_string(), "M40,160 L940,160");
        assert_eq!(path.vertices().len(), 2);
        assert!(build(&[], &SegmentPolicy::indexed([]), 20.0).path_data().is_none());
    }

    #[test]
    fn test_non_finite_damping_and_amplitude() {
        let points = vec![
            DataPoint::new("a").with_major(true),
            DataPoint::new("b"),
            DataPoint::new("c").with_major(true),
        ];
        let policy: SegmentPolicy =
            toml::from_str("strategy = \"alternating\"\nmajor_damping = nan").unwrap();

        let path = build(&points, &policy, 20.0);
        assert!(path.vertices().iter().all(|v| v.y().is_finite()));
        assert_approx_eq!(f32, path.segments()[0].vertices()[0].y(), 150.0);
        assert_approx_eq!(f32, path.segments()[1].vertices()[0].y(), 170.0);

        let unbounded = SegmentPolicy::Alternating {
            major_damping: f32::INFINITY,
        };
        let path = build(&points, &unbounded, 20.0);
        assert_approx_eq!(f32, path.segments()[0].vertices()[0].y(), 140.0);

        let flat = build(&points, &SegmentPolicy::alternating(), f32::INFINITY);
        assert!(flat.vertices().iter().all(|v| v.y() == 160.0));
    }

    #[test]
    fn test_policy_from_toml() {
        let indexed: SegmentPolicy =
            toml::from_str("strategy = \"indexed\"\nindices = [2, 3]").unwrap();
        assert_eq!(indexed, SegmentPolicy::indexed([2, 3]));

        let alternating: SegmentPolicy = toml::from_str("strategy = \"alternating\"").unwrap();
        assert_eq!(alternating, SegmentPolicy::alternating());
    }

    proptest! {
        #[test]
        fn prop_path_endpoints_and_bounds(
            count in 1usize..25,
            amplitude in 0.0f32..60.0,
            irregular in proptest::collection::btree_set(1usize..25, 0..10),
        ) {
            let points: Vec<_> = (0..count)
                .map(|i| DataPoint::new(&format!("p{i}")))
                .collect();
            let geometry = ChartGeometry::resolve(&ChartConfig::default(), count);
            let placement = place_points(&points, &geometry);
            let policy = SegmentPolicy::Indexed { indices: irregular };
            let path = PathBuilder::new(&policy, amplitude).build(&placement);

            let first = placement.first().unwrap().position();
            let last = placement.last().unwrap().position();
            prop_assert_eq!(path.start(), Some(first));
            prop_assert_eq!(path.end(), Some(last));

            let baseline = geometry.center_y();
            for segment in path.segments() {
                prop_assert_eq!(segment.end().y(), baseline);
                for vertex in segment.vertices() {
                    prop_assert!(vertex.y() >= baseline - amplitude - 1e-3);
                    prop_assert!(vertex.y() <= baseline + amplitude + 1e-3);
                    prop_assert!(vertex.x() >= segment.from().x() - 1e-3);
                    prop_assert!(vertex.x() <= segment.end().x() + 1e-3);
                }
            }
        }

        #[test]
        fn prop_alternating_deflection_within_amplitude(
            count in 2usize..25,
            amplitude in 0.0f32..60.0,
            major_damping in proptest::num::f32::ANY,
            majors in proptest::collection::vec(any::<bool>(), 25),
        ) {
            let points: Vec<_> = (0..count)
                .map(|i| DataPoint::new(&format!("p{i}")).with_major(majors[i]))
                .collect();
            let geometry = ChartGeometry::resolve(&ChartConfig::default(), count);
            let placement = place_points(&points, &geometry);
            let policy = SegmentPolicy::Alternating { major_damping };
            let path = PathBuilder::new(&policy, amplitude).build(&placement);

            let baseline = geometry.center_y();
            prop_assert_eq!(path.segments().len(), count - 1);
            for segment in path.segments() {
                prop_assert_eq!(segment.kind(), SegmentKind::Deflected);
                for vertex in segment.vertices() {
                    prop_assert!(vertex.y().is_finite());
                    prop_assert!(vertex.y() >= baseline - amplitude - 1e-3);
                    prop_assert!(vertex.y() <= baseline + amplitude + 1e-3);
                }
            }
        }
    }
}
