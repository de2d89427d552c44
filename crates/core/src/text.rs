//! Measure text.
use crate::Size;

/// Measures the pixel extent of a label.
///
/// Layout only needs metrics, so implementors are free to measure against a
/// throwaway context.
pub trait Measure {
    /// Returns the logical width and height of `text` in the menu font.
    fn measure(&mut self, text: &str) -> Size;
}
