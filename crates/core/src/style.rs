//! Static appearance of a menu.
use crate::Color;

/// The static appearance and metrics of a menu.
///
/// All lengths are logical pixels. [`Style::default`] holds the built-in
/// look; the layout engine and the renderer only ever read it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Height of a regular item.
    pub button_height: i32,
    /// Vertical gap between two consecutive entries.
    pub button_spacing: i32,
    /// Horizontal text padding on both sides of a label.
    pub text_padding: i32,
    /// Minimum width of a column.
    pub min_width: i32,
    /// Height and line width of a separator.
    pub separator_size: i32,
    /// Inset of the separator rule from both column edges.
    pub separator_inset: i32,
    /// Side of the square an icon is fitted into.
    pub icon_size: i32,
    /// Gap between an icon and its label.
    pub icon_text_gap: i32,
    /// Left padding of an icon inside its item.
    pub icon_left_pad: i32,
    /// Extra width reserved for the submenu arrow.
    pub arrow_allowance: i32,
    /// Distance of the submenu arrow from the right edge.
    pub arrow_margin: f32,
    /// Whether items get a border.
    pub border: bool,

    /// Background of a whole column.
    pub background: Color,
    /// Gradient stops of an idle item, left to right.
    pub button_gradient: [Color; 2],
    /// Gradient stops of a hovered item, left to right.
    pub hovered_gradient: [Color; 2],
    /// Overlay painted on a hovered textured item.
    pub hovered_overlay: Color,
    /// Color of separator rules.
    pub separator: Color,
    /// Color of labels.
    pub text: Color,
    /// Color of the submenu arrow.
    pub arrow: Color,
    /// Color of item borders.
    pub border_color: Color,
}

impl Style {
    /// Left inset of labels in a column where at least one item has an icon.
    pub fn icon_text_left_padding(&self) -> i32 {
        self.icon_size + self.icon_text_gap + self.icon_left_pad
    }

    /// Returns the [`Style`] with item borders turned on or off.
    #[must_use]
    pub fn with_border(self, border: bool) -> Self {
        Self { border, ..self }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            button_height: 30,
            button_spacing: 3,
            text_padding: 20,
            min_width: 100,
            separator_size: 1,
            separator_inset: 5,
            icon_size: 20,
            icon_text_gap: 8,
            icon_left_pad: 6,
            arrow_allowance: 20,
            arrow_margin: 4.0,
            border: false,

            background: Color::from_hex(0x0a0900),
            button_gradient: [
                Color::from_rgb(0.32, 0.23, 0.20),
                Color::from_rgb(0.48, 0.36, 0.32),
            ],
            hovered_gradient: [
                Color::from_rgb(0.43, 0.30, 0.26),
                Color::from_rgb(0.57, 0.43, 0.38),
            ],
            hovered_overlay: Color::from_rgba(1.0, 1.0, 0.7, 0.25),
            separator: Color::from_hex(0xf09000),
            text: Color::from_hex(0xf0f0f0),
            arrow: Color::WHITE,
            border_color: Color::from_hex(0x505055),
        }
    }
}
