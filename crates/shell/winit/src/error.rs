use winit::error::{EventLoopError, OsError};

/// An error that occurred while running a menu window.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The event loop could not be created.
    #[error("the event loop could not be created")]
    EventLoopCreationFailed(#[source] EventLoopError),

    /// The event loop stopped with an error.
    #[error("the event loop failed")]
    EventLoopFailed(#[source] EventLoopError),

    /// The window could not be created.
    #[error("the window could not be created")]
    WindowCreationFailed(#[source] OsError),

    /// The drawing surface could not be created.
    #[error("the graphics surface could not be created")]
    GraphicsCreationFailed(#[source] rmenu_tiny_skia::Error),

    /// A frame could not be drawn or shown.
    #[error("a frame could not be presented")]
    Presentation(#[source] rmenu_tiny_skia::Error),
}
