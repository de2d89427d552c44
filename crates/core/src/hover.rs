//! Resolve which chain of submenus is open.
//!
//! A path is a list of sibling indices from the root down. Two lookups
//! exist and they may disagree for one frame after the geometry changes:
//!
//! - [`hovered_path`] follows the entry directly under the pointer and is
//!   what pointer events commit.
//! - [`submenu_path`] follows the bounding boxes of already drawn submenus
//!   and is what the renderer falls back on when the committed path is too
//!   short.
//!
//! Both only trust geometry that was drawn in the current frame.
use crate::{MenuList, Point};

/// Returns the path to the entry under `cursor`, or an empty path.
///
/// Siblings are scanned in declaration order and the first hit wins. When
/// no sibling of a level is hit, every submenu of that level is searched in
/// turn; the render stamps keep closed submenus from matching.
pub fn hovered_path(root: &MenuList, cursor: Point, frame: u64) -> Vec<usize> {
    fn find(list: &MenuList, cursor: Point, frame: u64, path: &mut Vec<usize>) -> bool {
        if let Some(index) = list.iter().position(|item| item.in_box(cursor, frame)) {
            path.push(index);
            return true;
        }

        for (index, item) in list.iter().enumerate() {
            if !item.is_submenu() {
                continue;
            }

            path.push(index);

            if find(item.submenu(), cursor, frame, path) {
                return true;
            }

            let _ = path.pop();
        }

        false
    }

    let mut path = Vec::new();
    let _ = find(root, cursor, frame, &mut path);

    path
}

/// Returns the chain of submenus drawn in `frame` whose column contains
/// `cursor`.
///
/// Unlike [`hovered_path`], this ignores the individual entries: the pointer
/// only has to be inside the union of a submenu's entries.
pub fn submenu_path(root: &MenuList, cursor: Point, frame: u64) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = root;

    while let Some((index, submenu)) = current.iter().enumerate().find_map(|(index, item)| {
        let submenu = item.submenu();

        (item.is_submenu()
            && submenu.last_rendered() == Some(frame)
            && submenu.bounds().is_some_and(|bounds| bounds.contains(cursor)))
        .then_some((index, submenu))
    }) {
        path.push(index);
        current = submenu;
    }

    path
}
