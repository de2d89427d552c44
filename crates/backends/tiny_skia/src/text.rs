//! Shape, measure and draw labels with `cosmic-text`.
use rmenu_core::{Color, Point, Size};

use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping, SwashCache};
use rustc_hash::FxHashMap;

/// Ratio between the line height and the font size.
const LINE_HEIGHT: f32 = 1.2;

/// A font description, e.g. `"Sans 12"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// The font family.
    pub family: Family,

    /// The font size, in logical pixels.
    pub size: f32,
}

/// The family of a [`Font`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Family {
    /// The default sans-serif family.
    SansSerif,

    /// The default serif family.
    Serif,

    /// The default monospace family.
    Monospace,

    /// A family looked up by name.
    Name(String),
}

impl Font {
    /// The size, in points, used when a description has none.
    pub const DEFAULT_POINTS: f32 = 12.0;

    /// Parses a description made of a family name followed by an optional
    /// size in points, like `"DejaVu Sans 10"`.
    ///
    /// Points are converted to pixels at 96 DPI.
    pub fn parse(description: &str) -> Self {
        let description = description.trim();

        let (family, points) = match description.rsplit_once(char::is_whitespace) {
            Some((family, size)) => match size.parse::<f32>() {
                Ok(points) if points > 0.0 => (family.trim_end(), points),
                _ => (description, Self::DEFAULT_POINTS),
            },
            None => match description.parse::<f32>() {
                Ok(points) if points > 0.0 => ("", points),
                _ => (description, Self::DEFAULT_POINTS),
            },
        };

        let family = match family.to_ascii_lowercase().as_str() {
            "" | "sans" | "sans-serif" => Family::SansSerif,
            "serif" => Family::Serif,
            "mono" | "monospace" => Family::Monospace,
            _ => Family::Name(family.to_owned()),
        };

        Self {
            family,
            size: points * 96.0 / 72.0,
        }
    }

    fn attrs(&self) -> Attrs<'_> {
        let family = match &self.family {
            Family::SansSerif => cosmic_text::Family::SansSerif,
            Family::Serif => cosmic_text::Family::Serif,
            Family::Monospace => cosmic_text::Family::Monospace,
            Family::Name(name) => cosmic_text::Family::Name(name),
        };

        Attrs::new().family(family)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::parse("Sans 12")
    }
}

/// Shapes labels once per scale and draws them into a pixmap.
pub struct Pipeline {
    font: Font,
    font_system: FontSystem,
    swash_cache: SwashCache,
    buffers: FxHashMap<(String, u32), Buffer>,
}

impl Pipeline {
    /// Creates a [`Pipeline`] drawing with the given [`Font`] and every
    /// font installed on the system.
    pub fn new(font: Font) -> Self {
        Self::with_font_system(font, FontSystem::new())
    }

    fn with_font_system(font: Font, font_system: FontSystem) -> Self {
        log::debug!("Text pipeline uses {font:?}");

        if font_system.db().is_empty() {
            log::warn!("No fonts available, labels will not be drawn");
        }

        Self {
            font,
            font_system,
            swash_cache: SwashCache::new(),
            buffers: FxHashMap::default(),
        }
    }

    /// Returns the logical extent of `text`.
    ///
    /// Without any font installed, every label measures [`Size::ZERO`].
    pub fn measure(&mut self, text: &str) -> Size {
        if self.font_system.db().is_empty() {
            return Size::ZERO;
        }

        let buffer = self.buffer(text, 1);
        let mut width = 0.0f32;
        let mut height = 0.0f32;

        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            height += run.line_height;
        }

        Size::new(width.ceil() as i32, height.ceil() as i32)
    }

    /// Draws `text` with its top-left corner at the physical `position`,
    /// shaped for the given device `scale`.
    pub fn draw(
        &mut self,
        pixmap: &mut tiny_skia::PixmapMut<'_>,
        text: &str,
        position: Point<f32>,
        scale: u32,
        color: Color,
    ) {
        let [r, g, b, a] = color.into_rgba8();
        let x = position.x.round() as i32;
        let y = position.y.round() as i32;

        let key = (text.to_owned(), scale);
        let font = &self.font;
        let font_system = &mut self.font_system;

        let buffer = self
            .buffers
            .entry(key)
            .or_insert_with(|| shape(font_system, font, text, scale));

        let mut paint = tiny_skia::Paint::default();

        buffer.draw(
            font_system,
            &mut self.swash_cache,
            cosmic_text::Color::rgba(r, g, b, a),
            |glyph_x, glyph_y, width, height, color| {
                let Some(rect) = tiny_skia::Rect::from_xywh(
                    (x + glyph_x) as f32,
                    (y + glyph_y) as f32,
                    width as f32,
                    height as f32,
                ) else {
                    return;
                };

                paint.set_color_rgba8(color.r(), color.g(), color.b(), color.a());
                pixmap.fill_rect(rect, &paint, tiny_skia::Transform::identity(), None);
            },
        );
    }

    fn buffer(&mut self, text: &str, scale: u32) -> &Buffer {
        let font = &self.font;
        let font_system = &mut self.font_system;

        self.buffers
            .entry((text.to_owned(), scale))
            .or_insert_with(|| shape(font_system, font, text, scale))
    }
}

fn shape(font_system: &mut FontSystem, font: &Font, text: &str, scale: u32) -> Buffer {
    let size = font.size * scale as f32;
    let mut buffer = Buffer::new(font_system, Metrics::new(size, size * LINE_HEIGHT));

    // Shaping needs at least one face to fall back on
    if font_system.db().is_empty() {
        return buffer;
    }

    buffer.set_size(font_system, None, None);
    buffer.set_text(font_system, text, font.attrs(), Shaping::Advanced);
    buffer.shape_until_scroll(font_system, false);

    buffer
}
