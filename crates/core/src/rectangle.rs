use crate::{Point, Size};

/// An axis-aligned rectangle, in logical pixels.
///
/// Edges are inclusive: a point lying exactly on the right or bottom edge
/// is contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rectangle {
    /// X coordinate of the top-left corner.
    pub x: i32,

    /// Y coordinate of the top-left corner.
    pub y: i32,

    /// Width of the rectangle.
    pub width: i32,

    /// Height of the rectangle.
    pub height: i32,
}

impl Rectangle {
    /// Creates a new [`Rectangle`] with its top-left corner in the given
    /// [`Point`] and with the provided [`Size`].
    pub const fn new(top_left: Point, size: Size) -> Self {
        Self {
            x: top_left.x,
            y: top_left.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Returns the right edge of the [`Rectangle`].
    pub fn max_x(&self) -> i32 {
        self.x + self.width
    }

    /// Returns the bottom edge of the [`Rectangle`].
    pub fn max_y(&self) -> i32 {
        self.y + self.height
    }

    /// Returns true if the given [`Point`] is contained in the [`Rectangle`].
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x
            && point.x <= self.max_x()
            && self.y <= point.y
            && point.y <= self.max_y()
    }

    /// Computes the smallest [`Rectangle`] enclosing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);

        Self {
            x,
            y,
            width: self.max_x().max(other.max_x()) - x,
            height: self.max_y().max(other.max_y()) - y,
        }
    }
}
