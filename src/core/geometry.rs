//! Plane geometry shared by the board and the input adapter.
//!
//! Coordinates are continuous and use the same space as tile centers:
//! x grows to the right, y grows downward, one grid cell is `cell_size`
//! units wide. Nothing here knows about tiles.

use serde::{Deserialize, Serialize};

/// A point in board coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned selection rectangle.
///
/// Stored as an origin plus extent, the way a drag gesture reports it.
/// A rectangle with a non-positive width or height is degenerate and
/// contains nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SelectionRect {
    /// Create a rectangle from its top-left corner and extent.
    ///
    /// No normalization happens here: a negative extent stays negative and
    /// makes the rectangle degenerate.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build the rectangle swept by a drag from `start` to `current`.
    ///
    /// The corners may arrive in any order.
    ///
    /// ```
    /// use fruitbox::core::{Point, SelectionRect};
    ///
    /// let rect = SelectionRect::from_drag(Point::new(50.0, 40.0), Point::new(10.0, 80.0));
    /// assert_eq!(rect, SelectionRect::new(10.0, 40.0, 40.0, 40.0));
    /// ```
    #[must_use]
    pub fn from_drag(start: Point, current: Point) -> Self {
        Self {
            x: start.x.min(current.x),
            y: start.y.min(current.y),
            width: (current.x - start.x).abs(),
            height: (current.y - start.y).abs(),
        }
    }

    /// The smallest rectangle covering both points.
    #[must_use]
    pub fn bounding(a: Point, b: Point) -> Self {
        Self::from_drag(a, b)
    }

    /// Grow the rectangle by `margin` on every side.
    #[must_use]
    pub fn expand(self, margin: f64) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True when the rectangle has no area (empty or inverted).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Inclusive containment test on all four edges.
    ///
    /// Degenerate rectangles contain no points.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        !self.is_degenerate()
            && p.x >= self.left()
            && p.x <= self.right()
            && p.y >= self.top()
            && p.y <= self.bottom()
    }
}
