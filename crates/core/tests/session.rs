//! Whole menu sessions, from the input text to the selected entry.
use rmenu_core::event::Button;
use rmenu_core::icon;
use rmenu_core::render::Painter;
use rmenu_core::text::Measure;
use rmenu_core::{Action, Color, Event, Menu, Point, Rectangle, Size, Status, Style};

use std::path::Path;

/// Draws nothing and keeps the labels it was asked to draw.
#[derive(Default)]
struct Labels {
    drawn: Vec<(String, Point<f32>)>,
}

impl Labels {
    fn texts(&self) -> Vec<&str> {
        self.drawn.iter().map(|(text, _)| text.as_str()).collect()
    }
}

impl Measure for Labels {
    fn measure(&mut self, text: &str) -> Size {
        Size::new(7 * text.chars().count() as i32, 14)
    }
}

impl Painter for Labels {
    fn fill_rectangle(&mut self, _bounds: Rectangle, _color: Color) {}

    fn fill_gradient(&mut self, _bounds: Rectangle, _stops: [Color; 2]) {}

    fn fill_texture(&mut self, _bounds: Rectangle) -> bool {
        false
    }

    fn stroke_rectangle(&mut self, _bounds: Rectangle, _width: f32, _color: Color) {}

    fn stroke_line(&mut self, _from: Point<f32>, _to: Point<f32>, _width: f32, _color: Color) {}

    fn fill_triangle(&mut self, _vertices: [Point<f32>; 3], _color: Color) {}

    fn draw_icon(&mut self, _icon: &icon::Handle, _position: Point<f32>, _scale: f32) {}

    fn draw_text(&mut self, text: &str, position: Point<f32>, _color: Color) {
        self.drawn.push((text.to_owned(), position));
    }
}

fn redraw(menu: &mut Menu) -> Labels {
    let mut labels = Labels::default();

    let _ = menu.layout(&mut labels);
    menu.render(&mut labels);

    labels
}

fn center(bounds: Rectangle) -> Point {
    Point::new(bounds.x + bounds.width / 2, bounds.y + bounds.height / 2)
}

const INPUT: &str = "\
# Launcher
Open\topen-cmd
Edit
\tCopy\tcopy-cmd
\tPaste\tpaste-cmd

Quit
";

#[test]
fn select_from_a_submenu() {
    let mut menu = Menu::parse(INPUT, &mut icon::Disabled, Style::default()).unwrap();

    let first = redraw(&mut menu);
    assert_eq!(first.texts(), ["Open", "Edit", "Quit"]);

    let edit = menu.root()[1].bounds();
    assert_eq!(menu.update(Event::CursorEntered(center(edit))), Action::Redraw);
    assert_eq!(menu.hovered_path(), [1]);

    let second = redraw(&mut menu);
    assert_eq!(second.texts(), ["Open", "Edit", "Quit", "Copy", "Paste"]);

    let submenu = menu.root()[1].submenu();
    assert_eq!(submenu[0].bounds().x, edit.max_x());
    assert_eq!(submenu[0].bounds().y, edit.y);

    let paste = submenu[1].bounds();
    assert_eq!(menu.update(Event::CursorMoved(center(paste))), Action::Redraw);
    assert_eq!(menu.hovered_path(), [1, 1]);

    let _ = redraw(&mut menu);

    assert_eq!(menu.update(Event::ButtonPressed(Button::Left)), Action::Exit);
    assert_eq!(menu.status(), &Status::Selected(String::from("paste-cmd")));
}

#[test]
fn label_is_emitted_without_output() {
    let mut menu = Menu::parse(INPUT, &mut icon::Disabled, Style::default()).unwrap();
    let _ = redraw(&mut menu);

    let quit = menu.root()[3].bounds();
    let _ = menu.update(Event::CursorMoved(center(quit)));

    assert_eq!(menu.click(), Some("Quit"));
}

#[test]
fn leaving_closes_every_submenu() {
    let mut menu = Menu::parse(INPUT, &mut icon::Disabled, Style::default()).unwrap();
    let _ = redraw(&mut menu);

    let edit = menu.root()[1].bounds();
    let _ = menu.update(Event::CursorMoved(center(edit)));
    assert_eq!(menu.update(Event::CursorLeft), Action::Redraw);

    let labels = redraw(&mut menu);
    assert_eq!(labels.texts(), ["Open", "Edit", "Quit"]);
    assert_eq!(menu.composite_size(), menu.layout(&mut Labels::default()));
}

#[test]
fn failed_icons_are_dropped() {
    let mut loader = |path: &Path| -> Result<icon::Handle, icon::Error> {
        Err(icon::Error::Io(path.display().to_string()))
    };

    let menu = Menu::parse(
        "IMG:/nowhere.png\tTerminal\tfoot\nQuit",
        &mut loader,
        Style::default(),
    )
    .unwrap();

    assert!(menu.root()[0].icon_handle().is_none());
    assert_eq!(menu.root()[0].selection(), "foot");
}

#[test]
fn window_close_dismisses() {
    let mut menu = Menu::parse(INPUT, &mut icon::Disabled, Style::default()).unwrap();

    assert_eq!(menu.update(Event::Closed), Action::Exit);
    assert_eq!(menu.status(), &Status::Dismissed);
}
