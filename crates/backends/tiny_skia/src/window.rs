//! Present pixmaps on a window with `softbuffer`.
use crate::Error;

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use std::num::NonZeroU32;

/// A window surface that shows whole pixmaps.
pub struct Surface<W: HasDisplayHandle + HasWindowHandle> {
    _context: softbuffer::Context<W>,
    surface: softbuffer::Surface<W, W>,
}

impl<W> Surface<W>
where
    W: HasDisplayHandle + HasWindowHandle + Clone,
{
    /// Creates a [`Surface`] for the given window.
    pub fn new(window: W) -> Result<Self, Error> {
        let context = softbuffer::Context::new(window.clone())?;
        let surface = softbuffer::Surface::new(&context, window)?;

        Ok(Self {
            _context: context,
            surface,
        })
    }

    /// Resizes the surface to the pixmap and copies it over.
    ///
    /// Transparency is dropped: softbuffer surfaces are opaque.
    pub fn present(&mut self, pixmap: &tiny_skia::Pixmap) -> Result<(), Error> {
        let (Some(width), Some(height)) = (
            NonZeroU32::new(pixmap.width()),
            NonZeroU32::new(pixmap.height()),
        ) else {
            return Ok(());
        };

        self.surface.resize(width, height)?;

        let mut buffer = self.surface.buffer_mut()?;

        for (target, pixel) in buffer.iter_mut().zip(pixmap.pixels()) {
            *target = into_xrgb(*pixel);
        }

        buffer.present()?;

        Ok(())
    }
}

fn into_xrgb(pixel: tiny_skia::PremultipliedColorU8) -> u32 {
    // Blending onto black keeps the premultiplied components as they are
    (u32::from(pixel.red()) << 16) | (u32::from(pixel.green()) << 8) | u32::from(pixel.blue())
}
