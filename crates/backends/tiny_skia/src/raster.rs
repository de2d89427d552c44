//! Decode and cache raster images.
use rmenu_core::icon;

use rustc_hash::FxHashMap;
use std::path::Path;

/// Decodes icons with the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Loader;

impl icon::Load for Loader {
    fn load(&mut self, path: &Path) -> Result<icon::Handle, icon::Error> {
        let image = image::open(path)
            .map_err(|error| match error {
                image::ImageError::IoError(error) => icon::Error::Io(error.to_string()),
                error => icon::Error::Decode(error.to_string()),
            })?
            .into_rgba8();

        let (width, height) = image.dimensions();

        icon::Handle::from_rgba(width, height, image.into_raw()).ok_or(icon::Error::Empty)
    }
}

/// Decodes the image at `path` into a pixmap ready to be drawn.
pub fn load_pixmap(path: &Path) -> Result<tiny_skia::Pixmap, icon::Error> {
    let handle = icon::Load::load(&mut Loader, path)?;

    to_pixmap(&handle).ok_or(icon::Error::Empty)
}

/// Premultiplied pixmaps of every icon drawn so far.
#[derive(Debug, Default)]
pub struct Cache {
    pixmaps: FxHashMap<u64, Option<tiny_skia::Pixmap>>,
}

impl Cache {
    /// Returns the pixmap of `handle`, converting it on first use.
    pub fn get(&mut self, handle: &icon::Handle) -> Option<&tiny_skia::Pixmap> {
        self.pixmaps
            .entry(handle.id())
            .or_insert_with(|| to_pixmap(handle))
            .as_ref()
    }
}

fn to_pixmap(handle: &icon::Handle) -> Option<tiny_skia::Pixmap> {
    let mut pixmap = tiny_skia::Pixmap::new(handle.width(), handle.height())?;

    for (pixel, rgba) in pixmap
        .pixels_mut()
        .iter_mut()
        .zip(handle.pixels().chunks_exact(4))
    {
        *pixel = tiny_skia::ColorU8::from_rgba(rgba[0], rgba[1], rgba[2], rgba[3]).premultiply();
    }

    Some(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use icon::Load;

    #[test]
    fn test_pixmap_is_premultiplied() {
        let handle = icon::Handle::from_rgba(1, 2, vec![255, 0, 0, 255, 200, 100, 50, 0]).unwrap();
        let pixmap = to_pixmap(&handle).unwrap();

        let opaque = pixmap.pixel(0, 0).unwrap();
        assert_eq!((opaque.red(), opaque.alpha()), (255, 255));

        let transparent = pixmap.pixel(0, 1).unwrap();
        assert_eq!((transparent.red(), transparent.alpha()), (0, 0));
    }

    #[test]
    fn test_cache_converts_once() {
        let handle = icon::Handle::from_rgba(2, 2, vec![255; 16]).unwrap();
        let mut cache = Cache::default();

        assert!(cache.get(&handle).is_some());
        assert!(cache.get(&handle.clone()).is_some());
        assert_eq!(cache.pixmaps.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let error = Loader.load(Path::new("/nonexistent/icon.png")).unwrap_err();

        assert!(matches!(error, icon::Error::Io(_)));
    }
}
