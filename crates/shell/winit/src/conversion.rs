//! Convert [`winit`] types into [`rmenu_core`] types.
use rmenu_core::event::Button;
use rmenu_core::{Event, Point};

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, WindowEvent};

/// Tracks the pointer between [`winit`] events.
///
/// [`winit`] announces that the pointer entered a window without telling
/// where; the next motion carries the position, so it is reported as the
/// entry instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    entering: bool,
}

impl Pointer {
    /// Converts a [`WindowEvent`] into an [`Event`], if it matters to a menu.
    ///
    /// `scale` is the integer device scale the menu is drawn at.
    pub fn convert(&mut self, event: &WindowEvent, scale: u32) -> Option<Event> {
        match event {
            WindowEvent::CursorEntered { .. } => {
                self.entered();
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.moved(cursor_position(*position, scale)))
            }
            WindowEvent::CursorLeft { .. } => {
                self.entering = false;
                Some(Event::CursorLeft)
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => Some(Event::ButtonPressed(mouse_button(*button))),
            WindowEvent::CloseRequested | WindowEvent::Destroyed => Some(Event::Closed),
            _ => None,
        }
    }

    /// Marks the next motion as the pointer entering the window.
    pub fn entered(&mut self) {
        self.entering = true;
    }

    /// Turns a motion to `position` into an [`Event`].
    pub fn moved(&mut self, position: Point) -> Event {
        if std::mem::take(&mut self.entering) {
            Event::CursorEntered(position)
        } else {
            Event::CursorMoved(position)
        }
    }
}

/// Converts a physical cursor position into logical pixels at the given
/// integer `scale`, truncating any fraction.
pub fn cursor_position(position: PhysicalPosition<f64>, scale: u32) -> Point {
    let scale = f64::from(scale.max(1));

    Point::new(position.x / scale, position.y / scale).truncate()
}

/// Converts a [`winit`] mouse button into a [`Button`].
pub fn mouse_button(button: winit::event::MouseButton) -> Button {
    match button {
        winit::event::MouseButton::Left => Button::Left,
        winit::event::MouseButton::Right => Button::Right,
        winit::event::MouseButton::Middle => Button::Middle,
        winit::event::MouseButton::Back => Button::Other(8),
        winit::event::MouseButton::Forward => Button::Other(9),
        winit::event::MouseButton::Other(other) => Button::Other(other),
    }
}
