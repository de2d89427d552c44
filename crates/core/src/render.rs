//! Draw the open levels of a menu.
use crate::hover;
use crate::icon;
use crate::text::Measure;
use crate::{Color, MenuList, MenuNode, Point, Rectangle, Style};

/// A surface the menu can be drawn on.
///
/// Every coordinate is in logical pixels; implementors apply the device
/// scale themselves.
pub trait Painter: Measure {
    /// Fills `bounds` with a solid color.
    fn fill_rectangle(&mut self, bounds: Rectangle, color: Color);

    /// Fills `bounds` with a horizontal gradient from `stops[0]` on the left
    /// edge to `stops[1]` on the right edge.
    fn fill_gradient(&mut self, bounds: Rectangle, stops: [Color; 2]);

    /// Fills `bounds` with the item texture stretched to fit.
    ///
    /// Returns `false`, without drawing, when no texture is available.
    fn fill_texture(&mut self, bounds: Rectangle) -> bool;

    /// Strokes the outline of `bounds`.
    fn stroke_rectangle(&mut self, bounds: Rectangle, width: f32, color: Color);

    /// Strokes a straight line.
    fn stroke_line(&mut self, from: Point<f32>, to: Point<f32>, width: f32, color: Color);

    /// Fills a triangle.
    fn fill_triangle(&mut self, vertices: [Point<f32>; 3], color: Color);

    /// Draws `icon` with its top-left corner at `position`, scaled by `scale`
    /// in both directions.
    fn draw_icon(&mut self, icon: &icon::Handle, position: Point<f32>, scale: f32);

    /// Draws `text` with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Point<f32>, color: Color);
}

/// Draws the root column and every open submenu column of `root`.
///
/// Each drawn level and entry is stamped with `frame`. The next level to
/// open is `hovered_path[level]`; when the path is shorter than the current
/// level, the [`hover::submenu_path`] at `cursor` decides instead. That
/// fallback only sees columns already drawn in `frame`.
pub fn render(
    root: &mut MenuList,
    hovered_path: &[usize],
    cursor: Point,
    frame: u64,
    style: &Style,
    painter: &mut impl Painter,
) {
    let mut open = Vec::with_capacity(hovered_path.len());

    while let Some(list) = root.descend_mut(&open) {
        let level = open.len();
        let hovered = hovered_path.get(level).copied();

        draw_level(list, hovered, frame, style, painter);

        let next = match hovered {
            Some(index) => Some(index),
            None => hover::submenu_path(root, cursor, frame).get(level).copied(),
        };

        let Some(index) = next else {
            break;
        };

        let opens_submenu = root
            .descend(&open)
            .and_then(|list| list.get(index))
            .is_some_and(MenuNode::is_submenu);

        if !opens_submenu {
            break;
        }

        open.push(index);
    }
}

fn draw_level(
    list: &mut MenuList,
    hovered: Option<usize>,
    frame: u64,
    style: &Style,
    painter: &mut impl Painter,
) {
    let Some(bounds) = list.bounds() else {
        return;
    };

    list.last_rendered = Some(frame);
    painter.fill_rectangle(bounds, style.background);

    let text_left_padding = list.text_left_padding;

    for (index, item) in list.items.iter_mut().enumerate() {
        item.last_rendered = Some(frame);

        if item.is_separator() {
            draw_separator(item.bounds, style, painter);
        } else {
            draw_item(item, hovered == Some(index), text_left_padding, style, painter);
        }
    }
}

fn draw_separator(bounds: Rectangle, style: &Style, painter: &mut impl Painter) {
    let y = bounds.y as f32 + style.separator_size as f32 / 2.0;

    painter.stroke_line(
        Point::new((bounds.x + style.separator_inset) as f32, y),
        Point::new((bounds.max_x() - style.separator_inset) as f32, y),
        style.separator_size as f32,
        style.separator,
    );
}

fn draw_item(
    item: &MenuNode,
    is_hovered: bool,
    text_left_padding: i32,
    style: &Style,
    painter: &mut impl Painter,
) {
    let bounds = item.bounds;

    if painter.fill_texture(bounds) {
        if is_hovered {
            painter.fill_rectangle(bounds, style.hovered_overlay);
        }
    } else {
        let stops = if is_hovered {
            style.hovered_gradient
        } else {
            style.button_gradient
        };

        painter.fill_gradient(bounds, stops);
    }

    if style.border {
        painter.stroke_rectangle(bounds, 1.0, style.border_color);
    }

    if let Some(icon) = &item.icon {
        let scale = style.icon_size as f32 / icon.width().max(icon.height()) as f32;
        let height = icon.height() as f32 * scale;

        painter.draw_icon(
            icon,
            Point::new(
                (bounds.x + style.icon_left_pad) as f32,
                bounds.y as f32 + (bounds.height as f32 - height) / 2.0,
            ),
            scale,
        );
    }

    let text = painter.measure(&item.label);

    painter.draw_text(
        &item.label,
        Point::new(
            (bounds.x + text_left_padding) as f32,
            bounds.y as f32 + (bounds.height - text.height) as f32 / 2.0,
        ),
        style.text,
    );

    if item.is_submenu() {
        let size = text.height as f32 * 0.5;
        let x = bounds.max_x() as f32 - size - style.arrow_margin;
        let y = bounds.y as f32 + (bounds.height as f32 - size) / 2.0;

        painter.fill_triangle(
            [
                Point::new(x, y),
                Point::new(x + size, y + size / 2.0),
                Point::new(x, y + size),
            ],
            style.arrow,
        );
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{Size, layout};

    /// Everything a [`Recorder`] was asked to draw.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Op {
        Rectangle(Rectangle, Color),
        Gradient(Rectangle, [Color; 2]),
        Texture(Rectangle),
        Outline(Rectangle),
        Line(Point<f32>, Point<f32>),
        Triangle([Point<f32>; 3]),
        Icon(Point<f32>, f32),
        Text(String, Point<f32>),
    }

    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub(crate) ops: Vec<Op>,
        pub(crate) textured: bool,
    }

    impl Recorder {
        pub(crate) fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(text, _) => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn text_position(&self, label: &str) -> Point<f32> {
            self.ops
                .iter()
                .find_map(|op| match op {
                    Op::Text(text, position) if text == label => Some(*position),
                    _ => None,
                })
                .unwrap()
        }
    }

    impl Measure for Recorder {
        fn measure(&mut self, text: &str) -> Size {
            Size::new(8 * text.chars().count() as i32, 16)
        }
    }

    impl Painter for Recorder {
        fn fill_rectangle(&mut self, bounds: Rectangle, color: Color) {
            self.ops.push(Op::Rectangle(bounds, color));
        }

        fn fill_gradient(&mut self, bounds: Rectangle, stops: [Color; 2]) {
            self.ops.push(Op::Gradient(bounds, stops));
        }

        fn fill_texture(&mut self, bounds: Rectangle) -> bool {
            if self.textured {
                self.ops.push(Op::Texture(bounds));
            }

            self.textured
        }

        fn stroke_rectangle(&mut self, bounds: Rectangle, _width: f32, _color: Color) {
            self.ops.push(Op::Outline(bounds));
        }

        fn stroke_line(&mut self, from: Point<f32>, to: Point<f32>, _width: f32, _color: Color) {
            self.ops.push(Op::Line(from, to));
        }

        fn fill_triangle(&mut self, vertices: [Point<f32>; 3], _color: Color) {
            self.ops.push(Op::Triangle(vertices));
        }

        fn draw_icon(&mut self, _icon: &icon::Handle, position: Point<f32>, scale: f32) {
            self.ops.push(Op::Icon(position, scale));
        }

        fn draw_text(&mut self, text: &str, position: Point<f32>, _color: Color) {
            self.ops.push(Op::Text(text.to_owned(), position));
        }
    }

    fn menu() -> MenuList {
        let mut list: MenuList = [
            MenuNode::item("Open").output("open-cmd"),
            MenuNode::separator(),
            MenuNode::item("Edit").children([
                MenuNode::item("Copy").output("copy-cmd"),
                MenuNode::item("Paste").output("paste-cmd"),
            ]),
        ]
        .into_iter()
        .collect();

        let _ = layout::measure(&mut list, &mut Recorder::default(), Point::ORIGIN, &Style::default());
        list
    }

    #[test]
    fn test_render_root_only() {
        let mut list = menu();
        let mut recorder = Recorder::default();

        render(&mut list, &[], Point::new(-1, -1), 1, &Style::default(), &mut recorder);

        assert_eq!(recorder.texts(), ["Open", "Edit"]);
        assert!(list.iter().all(|item| item.is_live(1)));
        assert_eq!(list.last_rendered(), Some(1));
        assert!(list[2].submenu().iter().all(|item| !item.is_live(1)));
    }

    #[test]
    fn test_render_open_submenu() {
        let mut list = menu();
        let mut recorder = Recorder::default();

        render(&mut list, &[2], Point::new(-1, -1), 4, &Style::default(), &mut recorder);

        assert_eq!(recorder.texts(), ["Open", "Edit", "Copy", "Paste"]);
        assert!(list[2].submenu().iter().all(|item| item.is_live(4)));
        assert_eq!(list[2].submenu().last_rendered(), Some(4));
    }

    #[test]
    fn test_render_hovered_leaf_opens_nothing() {
        let mut list = menu();
        let mut recorder = Recorder::default();

        render(&mut list, &[0], Point::new(10, 10), 1, &Style::default(), &mut recorder);

        assert_eq!(recorder.texts(), ["Open", "Edit"]);
    }

    #[test]
    fn test_render_out_of_range_path() {
        let mut list = menu();
        let mut recorder = Recorder::default();

        render(&mut list, &[9, 3], Point::ORIGIN, 1, &Style::default(), &mut recorder);

        assert_eq!(recorder.texts(), ["Open", "Edit"]);
    }

    #[test]
    fn test_render_hover_gradient() {
        let style = Style::default();
        let mut list = menu();
        let mut recorder = Recorder::default();

        render(&mut list, &[2, 1], Point::ORIGIN, 1, &style, &mut recorder);

        let gradients: Vec<_> = recorder
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Gradient(_, stops) => Some(*stops),
                _ => None,
            })
            .collect();

        assert_eq!(
            gradients,
            [
                style.button_gradient,
                style.hovered_gradient,
                style.button_gradient,
                style.hovered_gradient,
            ]
        );
    }

    #[test]
    fn test_render_texture_overlay() {
        let style = Style::default();
        let mut list = menu();
        let mut recorder = Recorder {
            textured: true,
            ..Recorder::default()
        };

        render(&mut list, &[0], Point::ORIGIN, 1, &style, &mut recorder);

        let open = list[0].bounds();
        let position = recorder
            .ops
            .iter()
            .position(|op| *op == Op::Texture(open))
            .unwrap();

        assert_eq!(
            recorder.ops[position + 1],
            Op::Rectangle(open, style.hovered_overlay)
        );
        assert!(!recorder.ops.iter().any(|op| matches!(op, Op::Gradient(..))));
    }

    #[test]
    fn test_render_level_background_first() {
        let style = Style::default();
        let mut list = menu();
        let mut recorder = Recorder::default();

        render(&mut list, &[], Point::ORIGIN, 1, &style, &mut recorder);

        assert_eq!(
            recorder.ops[0],
            Op::Rectangle(list.bounds().unwrap(), style.background)
        );
    }

    #[test]
    fn test_render_separator_is_inset_rule() {
        let style = Style::default();
        let mut list = menu();
        let mut recorder = Recorder::default();

        render(&mut list, &[], Point::ORIGIN, 1, &style, &mut recorder);

        let separator = list[1].bounds();
        let y = separator.y as f32 + 0.5;

        assert!(recorder.ops.contains(&Op::Line(
            Point::new((separator.x + 5) as f32, y),
            Point::new((separator.max_x() - 5) as f32, y),
        )));
    }

    #[test]
    fn test_render_arrow_only_on_submenus() {
        let mut list = menu();
        let mut recorder = Recorder::default();

        render(&mut list, &[2], Point::ORIGIN, 1, &Style::default(), &mut recorder);

        let arrows: Vec<_> = recorder
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Triangle(vertices) => Some(*vertices),
                _ => None,
            })
            .collect();

        let edit = list[2].bounds();
        assert_eq!(arrows.len(), 1);
        assert!(arrows[0][1].x <= (edit.max_x() - 4) as f32);
        assert!(arrows[0][0].y >= edit.y as f32);
    }

    #[test]
    fn test_render_border() {
        let style = Style::default().with_border(true);
        let mut list = menu();
        let mut recorder = Recorder::default();

        render(&mut list, &[], Point::ORIGIN, 1, &style, &mut recorder);

        let outlines = recorder
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Outline(_)))
            .count();

        assert_eq!(outlines, 2);
    }

    #[test]
    fn test_render_icon_alignment() {
        let style = Style::default();
        let icon = icon::Handle::from_rgba(40, 20, vec![255; 40 * 20 * 4]).unwrap();
        let mut list: MenuList = [MenuNode::item("Iconic").icon(icon), MenuNode::item("Plain")]
            .into_iter()
            .collect();

        let _ = layout::measure(&mut list, &mut Recorder::default(), Point::ORIGIN, &style);

        let mut recorder = Recorder::default();
        render(&mut list, &[], Point::ORIGIN, 1, &style, &mut recorder);

        let padding = style.icon_text_left_padding() as f32;
        assert_eq!(recorder.text_position("Iconic").x, padding);
        assert_eq!(recorder.text_position("Plain").x, padding);

        let icon = recorder
            .ops
            .iter()
            .find_map(|op| match op {
                Op::Icon(position, scale) => Some((*position, *scale)),
                _ => None,
            })
            .unwrap();

        // 40x20 fitted into 20x20 keeps its aspect ratio
        assert_eq!(icon.1, 0.5);
        assert_eq!(icon.0, Point::new(style.icon_left_pad as f32, 10.0));
    }

    #[test]
    fn test_render_text_centered() {
        let style = Style::default();
        let mut list = menu();
        let mut recorder = Recorder::default();

        render(&mut list, &[], Point::ORIGIN, 1, &style, &mut recorder);

        let open = recorder.text_position("Open");
        assert_eq!(open, Point::new(style.text_padding as f32, 7.0));
    }
}
