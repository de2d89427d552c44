//! Resolve a click to a single leaf.
use crate::{MenuList, MenuNode, Point};

/// Returns the first leaf, in depth-first declaration order, hit by
/// `cursor` in `frame`.
///
/// Every submenu is searched whether it is open or not: entries of a
/// column that was not drawn in `frame` cannot be hit anyway.
pub fn find_leaf(list: &MenuList, cursor: Point, frame: u64) -> Option<&MenuNode> {
    for item in list {
        if item.is_separator() {
            continue;
        }

        if item.is_submenu() {
            if let Some(leaf) = find_leaf(item.submenu(), cursor, frame) {
                return Some(leaf);
            }
        } else if item.in_box(cursor, frame) {
            return Some(item);
        }
    }

    None
}
