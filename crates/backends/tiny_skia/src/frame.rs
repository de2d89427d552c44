use crate::raster;
use crate::text;

use rmenu_core::render::Painter;
use rmenu_core::text::Measure;
use rmenu_core::{Color, Point, Rectangle, Size, icon};

use tiny_skia::{
    FillRule, FilterQuality, GradientStop, LinearGradient, Paint, PathBuilder, Pattern, PixmapMut,
    PixmapPaint, SpreadMode, Stroke, Transform,
};

/// A [`Painter`] drawing one frame into a pixmap at an integer device
/// scale.
pub struct Frame<'a> {
    pub(crate) pixmap: PixmapMut<'a>,
    pub(crate) scale: u32,
    pub(crate) text: &'a mut text::Pipeline,
    pub(crate) raster: &'a mut raster::Cache,
    pub(crate) texture: Option<&'a tiny_skia::Pixmap>,
}

impl Frame<'_> {
    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale as f32, self.scale as f32)
    }
}

impl Measure for Frame<'_> {
    fn measure(&mut self, text: &str) -> Size {
        self.text.measure(text)
    }
}

impl Painter for Frame<'_> {
    fn fill_rectangle(&mut self, bounds: Rectangle, color: Color) {
        let Some(rect) = into_rect(bounds) else {
            return;
        };

        let transform = self.transform();

        self.pixmap
            .fill_rect(rect, &solid(color), transform, None);
    }

    fn fill_gradient(&mut self, bounds: Rectangle, [from, to]: [Color; 2]) {
        let Some(rect) = into_rect(bounds) else {
            return;
        };

        let shader = LinearGradient::new(
            tiny_skia::Point::from_xy(rect.left(), rect.top()),
            tiny_skia::Point::from_xy(rect.right(), rect.top()),
            vec![
                GradientStop::new(0.0, into_color(from)),
                GradientStop::new(1.0, into_color(to)),
            ],
            SpreadMode::Pad,
            Transform::identity(),
        );

        let paint = match shader {
            Some(shader) => Paint {
                shader,
                anti_alias: false,
                ..Paint::default()
            },
            None => solid(from),
        };

        let transform = self.transform();

        self.pixmap.fill_rect(rect, &paint, transform, None);
    }

    fn fill_texture(&mut self, bounds: Rectangle) -> bool {
        let Some(texture) = self.texture else {
            return false;
        };

        let Some(rect) = into_rect(bounds) else {
            return true;
        };

        let shader = Pattern::new(
            texture.as_ref(),
            SpreadMode::Pad,
            FilterQuality::Bilinear,
            1.0,
            Transform::from_row(
                rect.width() / texture.width() as f32,
                0.0,
                0.0,
                rect.height() / texture.height() as f32,
                rect.left(),
                rect.top(),
            ),
        );

        let paint = Paint {
            shader,
            ..Paint::default()
        };

        let transform = self.transform();

        self.pixmap.fill_rect(rect, &paint, transform, None);

        true
    }

    fn stroke_rectangle(&mut self, bounds: Rectangle, width: f32, color: Color) {
        let Some(rect) = into_rect(bounds) else {
            return;
        };

        let path = PathBuilder::from_rect(rect);
        let transform = self.transform();

        self.pixmap.stroke_path(
            &path,
            &solid(color),
            &Stroke {
                width,
                ..Stroke::default()
            },
            transform,
            None,
        );
    }

    fn stroke_line(&mut self, from: Point<f32>, to: Point<f32>, width: f32, color: Color) {
        let mut builder = PathBuilder::new();
        builder.move_to(from.x, from.y);
        builder.line_to(to.x, to.y);

        let Some(path) = builder.finish() else {
            return;
        };

        let transform = self.transform();

        self.pixmap.stroke_path(
            &path,
            &solid(color),
            &Stroke {
                width,
                ..Stroke::default()
            },
            transform,
            None,
        );
    }

    fn fill_triangle(&mut self, [a, b, c]: [Point<f32>; 3], color: Color) {
        let mut builder = PathBuilder::new();
        builder.move_to(a.x, a.y);
        builder.line_to(b.x, b.y);
        builder.line_to(c.x, c.y);
        builder.close();

        let Some(path) = builder.finish() else {
            return;
        };

        let transform = self.transform();

        self.pixmap
            .fill_path(&path, &solid(color), FillRule::Winding, transform, None);
    }

    fn draw_icon(&mut self, icon: &icon::Handle, position: Point<f32>, scale: f32) {
        let transform = self
            .transform()
            .pre_translate(position.x, position.y)
            .pre_scale(scale, scale);

        let Some(pixmap) = self.raster.get(icon) else {
            log::debug!("Icon {} has no pixels to draw", icon.id());
            return;
        };

        self.pixmap.draw_pixmap(
            0,
            0,
            pixmap.as_ref(),
            &PixmapPaint {
                quality: FilterQuality::Bilinear,
                ..PixmapPaint::default()
            },
            transform,
            None,
        );
    }

    fn draw_text(&mut self, text: &str, position: Point<f32>, color: Color) {
        let scale = self.scale as f32;

        self.text.draw(
            &mut self.pixmap,
            text,
            Point::new(position.x * scale, position.y * scale),
            self.scale,
            color,
        );
    }
}

fn into_rect(bounds: Rectangle) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_xywh(
        bounds.x as f32,
        bounds.y as f32,
        bounds.width as f32,
        bounds.height as f32,
    )
}

fn into_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.into_rgba8();

    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn solid(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(into_color(color));
    paint
}
