//! Handle pointer and surface events.
use crate::Point;

/// An input event, in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The pointer entered the menu surface at the given position.
    CursorEntered(Point),

    /// The pointer moved to the given position.
    CursorMoved(Point),

    /// The pointer left the menu surface.
    CursorLeft,

    /// A pointer button was pressed.
    ButtonPressed(Button),

    /// The surface was closed or the menu was dismissed from outside.
    Closed,
}

/// A pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// The left button.
    Left,

    /// The right button.
    Right,

    /// The middle (wheel) button.
    Middle,

    /// Some other button.
    Other(u16),
}
