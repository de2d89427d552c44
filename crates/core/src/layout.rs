//! Position every entry of a menu tree.
//!
//! A level is a single column: every entry shares its `x` and width, and the
//! entries are stacked top to bottom. A submenu opens as a new column to the
//! right of its parent column, with its first entry level with the item that
//! opens it.
use crate::text::Measure;
use crate::{MenuList, Point, Rectangle, Size, Style};

/// Lays out `list` with its top-left corner at `origin`, then every nested
/// submenu, and returns the size of the `list` column alone.
///
/// An empty list measures nothing and yields [`Size::ZERO`].
pub fn measure(
    list: &mut MenuList,
    measure: &mut impl Measure,
    origin: Point,
    style: &Style,
) -> Size {
    if list.is_empty() {
        return Size::ZERO;
    }

    let mut has_icons = false;
    let mut max_content_width = 0;

    for item in list.items.iter().filter(|item| !item.is_separator()) {
        let text = measure.measure(&item.label);
        let mut content_width = text.width + 2 * style.text_padding;

        if item.icon.is_some() {
            has_icons = true;
            content_width += style.icon_size + style.icon_text_gap;
        }

        if item.is_submenu() {
            content_width += style.arrow_allowance;
        }

        max_content_width = max_content_width.max(content_width);
    }

    let width = max_content_width.max(style.min_width);

    list.has_icons = has_icons;
    list.text_left_padding = if has_icons {
        style.icon_text_left_padding()
    } else {
        style.text_padding
    };

    let mut y = origin.y;

    for item in &mut list.items {
        let height = if item.is_separator() {
            style.separator_size
        } else {
            style.button_height
        };

        item.bounds = Rectangle::new(Point::new(origin.x, y), Size::new(width, height));
        y += height + style.button_spacing;
    }

    let height = y - origin.y - style.button_spacing;

    for item in &mut list.items {
        if item.is_submenu() {
            let origin = Point::new(origin.x + width, item.bounds.y);
            let _ = self::measure(&mut item.children, measure, origin, style);
        }
    }

    Size::new(width, height)
}
