//! Maps data points onto the shared baseline.

use indexmap::IndexMap;
use log::{debug, warn};

use paytrail_core::{geometry::Point, identifier::Id};

use super::ChartGeometry;
use crate::semantic::DataPoint;

/// A data point with its resolved canvas position for one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct PlacedPoint<'a> {
    data: &'a DataPoint,
    position: Point,
    index: usize,
}

impl<'a> PlacedPoint<'a> {
    pub fn data(&self) -> &'a DataPoint {
        self.data
    }

    pub fn id(&self) -> Id {
        self.data.id()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn x(&self) -> f32 {
        self.position.x()
    }

    pub fn y(&self) -> f32 {
        self.position.y()
    }

    /// Zero-based position in the input sequence.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Placed points in input order, addressable by id.
///
/// When ids repeat, lookups by id resolve to the last point carrying it.
#[derive(Debug, Clone, Default)]
pub struct Placement<'a> {
    points: Vec<PlacedPoint<'a>>,
    by_id: IndexMap<Id, usize>,
}

impl<'a> Placement<'a> {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PlacedPoint<'a>] {
        &self.points
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PlacedPoint<'a>> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<&PlacedPoint<'a>> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PlacedPoint<'a>> {
        self.points.last()
    }

    /// Looks up a point by id.
    pub fn get(&self, id: Id) -> Option<&PlacedPoint<'a>> {
        self.index_of(id).map(|index| &self.points[index])
    }

    /// Returns the index the id resolves to.
    pub fn index_of(&self, id: Id) -> Option<usize> {
        self.by_id.get(&id).copied()
    }
}

/// Places every point on the baseline at `x = margin + gap * index`.
///
/// The result has the same length and order as `points`.
pub fn place_points<'a>(points: &'a [DataPoint], geometry: &ChartGeometry) -> Placement<'a> {
    let mut by_id = IndexMap::with_capacity(points.len());

    let placed: Vec<_> = points
        .iter()
        .enumerate()
        .map(|(index, data)| {
            if by_id.insert(data.id(), index).is_some() {
                warn!(id:% = data.id(), index; "Duplicate point id, later point wins");
            }
            PlacedPoint {
                data,
                position: Point::new(
                    geometry.margin() + geometry.gap() * index as f32,
                    geometry.center_y(),
                ),
                index,
            }
        })
        .collect();

    debug!(points_count = placed.len(); "Points placed");

    Placement {
        points: placed,
        by_id,
    }
}
