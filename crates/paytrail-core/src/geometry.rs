//! Geometric primitives for chart layout and hit testing.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Paytrail uses the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! A point "above" the baseline therefore has a *smaller* y value.

/// A 2D point representing a position on the chart canvas.
///
/// # Examples
///
/// ```
/// # use paytrail_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Euclidean distance between this point and another point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use paytrail_core::geometry::Point;
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// assert_eq!(a.distance_to(b), 5.0);
    /// ```
    pub fn distance_to(self, other: Point) -> f32 {
        let delta = self.sub_point(other);
        delta.x.hypot(delta.y)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned rectangle described by its minimum and maximum corners.
///
/// Used for tooltip boxes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from a top-left corner and a size.
    ///
    /// # Examples
    ///
    /// ```
    /// # use paytrail_core::geometry::{Bounds, Point, Size};
    /// let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(80.0, 30.0));
    /// assert_eq!(bounds.max_x(), 90.0);
    /// assert_eq!(bounds.max_y(), 50.0);
    /// ```
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x(),
            min_y: top_left.y(),
            max_x: top_left.x() + size.width(),
            max_y: top_left.y() + size.height(),
        }
    }

    pub fn min_x(&self) -> f32 {
        self.min_x
    }

    pub fn min_y(&self) -> f32 {
        self.min_y
    }

    pub fn max_x(&self) -> f32 {
        self.max_x
    }

    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner
    pub fn min_point(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn to_size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    proptest! {
        #[test]
        fn midpoint_is_between_points(p1 in point_strategy(), p2 in point_strategy()) {
            let mid = p1.midpoint(p2);
            prop_assert!(mid.x() >= p1.x().min(p2.x()) && mid.x() <= p1.x().max(p2.x()));
            prop_assert!(mid.y() >= p1.y().min(p2.y()) && mid.y() <= p1.y().max(p2.y()));
        }

        #[test]
        fn distance_is_symmetric(p1 in point_strategy(), p2 in point_strategy()) {
            prop_assert!(approx_eq!(f32, p1.distance_to(p2), p2.distance_to(p1)));
        }

        #[test]
        fn bounds_size_round_trips(
            p in point_strategy(),
            w in 0.0f32..500.0,
            h in 0.0f32..500.0,
        ) {
            let size = Bounds::new_from_top_left(p, Size::new(w, h)).to_size();
            prop_assert!(approx_eq!(f32, size.width(), w, epsilon = 1e-3));
            prop_assert!(approx_eq!(f32, size.height(), h, epsilon = 1e-3));
        }
    }
}
