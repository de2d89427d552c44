//! A software renderer for rmenu on top of `tiny-skia`.
//!
//! Labels are shaped with `cosmic-text`, icons and textures are decoded with
//! `image`, and finished frames are shown with `softbuffer`.
pub mod raster;
pub mod text;
pub mod window;

mod frame;

pub use text::Font;
pub use tiny_skia::Pixmap;
pub use window::Surface;

use frame::Frame;

use rmenu_core::text::Measure;
use rmenu_core::{Menu, Size};

use std::path::Path;

/// An error produced by the renderer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The window surface failed.
    #[error("surface error: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),

    /// A frame buffer could not be allocated.
    #[error("cannot allocate a {width}x{height} frame")]
    PixmapAllocation {
        /// The requested width, in physical pixels.
        width: u32,
        /// The requested height, in physical pixels.
        height: u32,
    },
}

/// Draws a [`Menu`] into pixmaps.
pub struct Renderer {
    text: text::Pipeline,
    raster: raster::Cache,
    texture: Option<Pixmap>,
}

impl Renderer {
    /// Creates a new [`Renderer`] drawing labels with the given [`Font`].
    pub fn new(font: Font) -> Self {
        Self {
            text: text::Pipeline::new(font),
            raster: raster::Cache::default(),
            texture: None,
        }
    }

    /// Loads the image at `path` to fill every item.
    ///
    /// If the image cannot be decoded, items keep their gradient.
    #[must_use]
    pub fn with_texture(mut self, path: &Path) -> Self {
        match raster::load_pixmap(path) {
            Ok(texture) => {
                log::debug!(
                    "Loaded {}x{} texture {}",
                    texture.width(),
                    texture.height(),
                    path.display()
                );
                self.texture = Some(texture);
            }
            Err(error) => {
                log::warn!("Failed to load texture {}: {error}", path.display());
            }
        }

        self
    }

    /// Returns true if items are filled with a texture.
    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    /// Lays out `menu` and draws a new frame of it at the given integer
    /// device `scale`.
    ///
    /// The frame covers the root column and every open submenu.
    pub fn draw(&mut self, menu: &mut Menu, scale: u32) -> Result<Pixmap, Error> {
        let _ = menu.layout(self);

        let size = menu.composite_size().scale(scale.max(1));
        let width = size.width.max(1) as u32;
        let height = size.height.max(1) as u32;

        let mut pixmap =
            Pixmap::new(width, height).ok_or(Error::PixmapAllocation { width, height })?;

        menu.render(&mut Frame {
            pixmap: pixmap.as_mut(),
            scale: scale.max(1),
            text: &mut self.text,
            raster: &mut self.raster,
            texture: self.texture.as_ref(),
        });

        Ok(pixmap)
    }
}

impl Measure for Renderer {
    fn measure(&mut self, text: &str) -> Size {
        self.text.measure(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmenu_core::{Event, Point, Style, icon};

    fn renderer() -> Renderer {
        Renderer {
            text: text::tests::pipeline(),
            raster: raster::Cache::default(),
            texture: None,
        }
    }

    #[test]
    fn test_frame_grows_with_open_submenus() {
        let mut renderer = renderer();
        let mut menu = Menu::parse(
            "Open\nEdit\n\tCopy\n\tPaste",
            &mut icon::Disabled,
            Style::default(),
        )
        .unwrap();

        let closed = renderer.draw(&mut menu, 1).unwrap();
        assert_eq!((closed.width(), closed.height()), (100, 63));

        let _ = menu.update(Event::CursorMoved(Point::new(10, 40)));

        let open = renderer.draw(&mut menu, 2).unwrap();
        assert_eq!((open.width(), open.height()), (400, 192));
    }

    #[test]
    fn test_missing_texture_keeps_gradient() {
        let renderer = renderer().with_texture(Path::new("/nonexistent/texture.png"));

        assert!(!renderer.has_texture());
    }
}
