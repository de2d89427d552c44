//! Decoded icon images attached to menu items.
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{self, AtomicU64};

/// A handle to decoded RGBA pixels.
///
/// Cloning a [`Handle`] is cheap; the pixels are shared. Backends may cache
/// whatever they derive from a handle under its [`Handle::id`].
#[derive(Clone)]
pub struct Handle {
    id: u64,
    raster: Arc<Raster>,
}

struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Handle {
    /// Creates a [`Handle`] from straight (not premultiplied) RGBA8 pixels.
    ///
    /// Returns `None` if either dimension is zero or the pixel buffer does not
    /// match the dimensions.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 || pixels.len() != width as usize * height as usize * 4 {
            return None;
        }

        static NEXT_ID: AtomicU64 = AtomicU64::new(0);

        Some(Self {
            id: NEXT_ID.fetch_add(1, atomic::Ordering::Relaxed),
            raster: Arc::new(Raster {
                width,
                height,
                pixels,
            }),
        })
    }

    /// Returns the unique identifier of the [`Handle`].
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.raster.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.raster.height
    }

    /// Returns the straight RGBA8 pixels, row by row.
    pub fn pixels(&self) -> &[u8] {
        &self.raster.pixels
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Handle {}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("id", &self.id)
            .field("width", &self.raster.width)
            .field("height", &self.raster.height)
            .finish()
    }
}

/// An error produced while decoding an icon.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The file could not be read.
    #[error("failed to read icon: {0}")]
    Io(String),

    /// The file could not be decoded.
    #[error("failed to decode icon: {0}")]
    Decode(String),

    /// The decoded image has no pixels.
    #[error("icon has no pixels")]
    Empty,
}

/// Decodes icon files into [`Handle`]s.
pub trait Load {
    /// Decodes the image stored at `path`.
    fn load(&mut self, path: &Path) -> Result<Handle, Error>;
}

impl<F> Load for F
where
    F: FnMut(&Path) -> Result<Handle, Error>,
{
    fn load(&mut self, path: &Path) -> Result<Handle, Error> {
        self(path)
    }
}

/// A [`Load`] implementation that never produces an icon.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disabled;

impl Load for Disabled {
    fn load(&mut self, _path: &Path) -> Result<Handle, Error> {
        Err(Error::Decode(String::from("icons are disabled")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_checks_dimensions() {
        assert!(Handle::from_rgba(2, 2, vec![0; 16]).is_some());
        assert!(Handle::from_rgba(2, 2, vec![0; 15]).is_none());
        assert!(Handle::from_rgba(0, 2, Vec::new()).is_none());
    }

    #[test]
    fn test_handles_are_unique() {
        let a = Handle::from_rgba(1, 1, vec![0; 4]).unwrap();
        let b = Handle::from_rgba(1, 1, vec![0; 4]).unwrap();

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
