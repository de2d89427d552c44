use crate::event::{Button, Event};
use crate::hover;
use crate::icon;
use crate::layout;
use crate::parser;
use crate::render::{self, Painter};
use crate::text::Measure;
use crate::{Error, MenuList, Point, Size, Style, click};

/// Where a [`Menu`] session stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The menu is waiting for input.
    Running,

    /// A leaf was clicked; holds the string to emit.
    Selected(String),

    /// The menu was closed without a selection.
    Dismissed,
}

/// What the shell has to do after an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing changed.
    Idle,

    /// Lay out, draw and present the menu again.
    Redraw,

    /// The session is over.
    Exit,
}

/// A menu session.
///
/// Owns the immutable-shaped tree, the committed hovered path, the pointer
/// position and the frame counter.
#[derive(Debug, Clone)]
pub struct Menu {
    root: MenuList,
    style: Style,
    hovered_path: Vec<usize>,
    frame: u64,
    cursor: Point,
    cursor_inside: bool,
    root_size: Size,
    status: Status,
}

impl Menu {
    /// Creates a [`Menu`] from an already built tree.
    ///
    /// Fails with [`Error::Empty`] if the tree has no entries.
    pub fn new(root: MenuList, style: Style) -> Result<Self, Error> {
        if root.is_empty() {
            return Err(Error::Empty);
        }

        Ok(Self {
            root,
            style,
            hovered_path: Vec::new(),
            frame: 0,
            cursor: Point::ORIGIN,
            cursor_inside: false,
            root_size: Size::ZERO,
            status: Status::Running,
        })
    }

    /// Parses `input` and creates a [`Menu`] from it.
    ///
    /// See [`parser::parse`] for the format.
    pub fn parse(input: &str, loader: &mut impl icon::Load, style: Style) -> Result<Self, Error> {
        let root = parser::parse(input, loader)?;

        Self::new(root, style)
    }

    /// Returns the root column.
    pub fn root(&self) -> &MenuList {
        &self.root
    }

    /// Returns the [`Style`] of the menu.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Returns the committed hovered path.
    pub fn hovered_path(&self) -> &[usize] {
        &self.hovered_path
    }

    /// Returns the current frame counter.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Returns the last known pointer position.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Returns true while the pointer is over the menu surface.
    pub fn is_cursor_inside(&self) -> bool {
        self.cursor_inside
    }

    /// Returns the [`Status`] of the session.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Returns true until a selection is made or the menu is dismissed.
    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Assigns geometry to the whole tree and returns the size of the root
    /// column.
    pub fn layout(&mut self, measure: &mut impl Measure) -> Size {
        self.root_size = layout::measure(&mut self.root, measure, Point::ORIGIN, &self.style);
        self.root_size
    }

    /// Returns the size of the surface needed to show the root column and
    /// every column on the hovered path.
    pub fn composite_size(&self) -> Size {
        let mut size = self.root_size;
        let mut current = &self.root;

        for &index in &self.hovered_path {
            let Some(item) = current.get(index).filter(|item| item.is_submenu()) else {
                break;
            };

            if let Some(bounds) = item.submenu().bounds() {
                size = size.max(Size::new(bounds.max_x(), bounds.max_y()));
            }

            current = item.submenu();
        }

        size
    }

    /// Returns the path to the entry directly under the pointer.
    pub fn find_hovered_path(&self) -> Vec<usize> {
        hover::hovered_path(&self.root, self.cursor, self.frame)
    }

    /// Returns the chain of drawn submenus whose columns contain the pointer.
    pub fn find_submenu_path(&self) -> Vec<usize> {
        hover::submenu_path(&self.root, self.cursor, self.frame)
    }

    /// Starts a new frame and draws every open level with `painter`.
    pub fn render(&mut self, painter: &mut impl Painter) {
        self.frame += 1;

        log::trace!("Rendering frame {} with path {:?}", self.frame, self.hovered_path);

        render::render(
            &mut self.root,
            &self.hovered_path,
            self.cursor,
            self.frame,
            &self.style,
            painter,
        );
    }

    /// Processes an [`Event`] and tells the shell what to do next.
    ///
    /// Once the session is over every event is ignored.
    pub fn update(&mut self, event: Event) -> Action {
        if !self.is_running() {
            return Action::Exit;
        }

        match event {
            Event::CursorEntered(position) => redraw_if(self.cursor_entered(position)),
            Event::CursorMoved(position) => redraw_if(self.cursor_moved(position)),
            Event::CursorLeft => redraw_if(self.cursor_left()),
            Event::ButtonPressed(Button::Left) => {
                if self.click().is_some() {
                    Action::Exit
                } else {
                    Action::Idle
                }
            }
            Event::ButtonPressed(_) => Action::Idle,
            Event::Closed => {
                self.dismiss();
                Action::Exit
            }
        }
    }

    /// Moves the pointer and commits the new hovered path, unless it is the
    /// same or empty.
    ///
    /// Returns true if the menu must be drawn again.
    pub fn cursor_moved(&mut self, position: Point) -> bool {
        self.cursor = position;

        let path = self.find_hovered_path();

        if path.is_empty() || path == self.hovered_path {
            return false;
        }

        log::trace!("Hovered path {:?} -> {:?}", self.hovered_path, path);
        self.hovered_path = path;

        true
    }

    /// Places the pointer on the surface and commits whatever path is under
    /// it, even an empty one.
    ///
    /// Returns true if the committed path changed.
    pub fn cursor_entered(&mut self, position: Point) -> bool {
        self.cursor_inside = true;
        self.cursor = position;

        let path = self.find_hovered_path();
        let changed = path != self.hovered_path;

        self.hovered_path = path;

        changed
    }

    /// Takes the pointer off the surface and closes every submenu.
    ///
    /// Returns true if a path was open.
    pub fn cursor_left(&mut self) -> bool {
        self.cursor_inside = false;

        if self.hovered_path.is_empty() {
            return false;
        }

        self.hovered_path.clear();

        true
    }

    /// Resolves a click at the pointer position.
    ///
    /// On a leaf, the session ends with [`Status::Selected`] and the emitted
    /// string is returned. Anywhere else nothing happens.
    pub fn click(&mut self) -> Option<&str> {
        if !self.is_running() {
            return None;
        }

        let selection = click::find_leaf(&self.root, self.cursor, self.frame)?
            .selection()
            .to_owned();

        log::debug!("Selected {selection:?}");
        self.status = Status::Selected(selection);

        match &self.status {
            Status::Selected(selection) => Some(selection),
            Status::Running | Status::Dismissed => None,
        }
    }

    /// Ends the session without a selection.
    pub fn dismiss(&mut self) {
        if self.is_running() {
            self.status = Status::Dismissed;
        }
    }
}

fn redraw_if(changed: bool) -> Action {
    if changed { Action::Redraw } else { Action::Idle }
}
