/// An amount of space in 2 dimensions, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// The width.
    pub width: i32,
    /// The height.
    pub height: i32,
}

impl Size {
    /// A [`Size`] with zero width and height.
    pub const ZERO: Size = Size::new(0, 0);

    /// Creates a new [`Size`] with the given width and height.
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    /// Returns the component-wise maximum of two sizes.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Size {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Scales both dimensions by an integer device factor.
    #[must_use]
    pub fn scale(self, factor: u32) -> Self {
        let factor = factor as i32;

        Size {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}
