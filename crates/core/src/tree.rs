//! A tree structure for a hierarchical menu.
//!
//! A [`MenuNode`] is either a separator or an item; an item with children is
//! a submenu. The shape of the tree never changes once it is built, only the
//! geometry and the render stamps of its nodes do.
use crate::icon;
use crate::{Point, Rectangle};

/// The kind of a [`MenuNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A selectable item without children.
    Leaf,
    /// A horizontal rule between items.
    Separator,
    /// An item that opens a nested [`MenuList`].
    Submenu,
}

/// A single entry of a menu.
#[derive(Debug, Clone)]
pub struct MenuNode {
    pub(crate) label: String,
    pub(crate) output: Option<String>,
    pub(crate) icon: Option<icon::Handle>,
    pub(crate) children: MenuList,
    pub(crate) is_separator: bool,
    pub(crate) bounds: Rectangle,
    pub(crate) last_rendered: Option<u64>,
}

impl MenuNode {
    /// Creates a new item with the given label.
    pub fn item(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            output: None,
            icon: None,
            children: MenuList::default(),
            is_separator: false,
            bounds: Rectangle::default(),
            last_rendered: None,
        }
    }

    /// Creates a new separator.
    pub fn separator() -> Self {
        Self {
            is_separator: true,
            ..Self::item(String::new())
        }
    }

    /// Sets the string emitted when the item is selected.
    ///
    /// An empty output is the same as none: the label is emitted instead.
    #[must_use]
    pub fn output(mut self, output: impl Into<String>) -> Self {
        let output = output.into();
        self.output = (!output.is_empty()).then_some(output);
        self
    }

    /// Sets the icon of the item.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<Option<icon::Handle>>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Sets the children of the item, turning it into a submenu.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = MenuNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Returns the [`Kind`] of the node.
    pub fn kind(&self) -> Kind {
        if self.is_separator {
            Kind::Separator
        } else if self.children.is_empty() {
            Kind::Leaf
        } else {
            Kind::Submenu
        }
    }

    /// Returns true if the node is a separator.
    pub fn is_separator(&self) -> bool {
        self.is_separator
    }

    /// Returns true if the node opens a submenu.
    pub fn is_submenu(&self) -> bool {
        self.kind() == Kind::Submenu
    }

    /// Returns the display text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the explicit output, if any.
    pub fn output_text(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Returns what selecting the node emits: its output, or else its label.
    pub fn selection(&self) -> &str {
        self.output.as_deref().unwrap_or(&self.label)
    }

    /// Returns the decoded icon, if any.
    pub fn icon_handle(&self) -> Option<&icon::Handle> {
        self.icon.as_ref()
    }

    /// Returns the nested entries.
    pub fn submenu(&self) -> &MenuList {
        &self.children
    }

    /// Returns the absolute bounds assigned by the last layout pass.
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Returns the frame in which the node was last drawn.
    pub fn last_rendered(&self) -> Option<u64> {
        self.last_rendered
    }

    /// Returns true if the node was drawn in `frame`, which makes its
    /// geometry trustworthy for hit-testing.
    pub fn is_live(&self, frame: u64) -> bool {
        self.last_rendered == Some(frame)
    }

    /// Returns true if `cursor` hits this node in the given frame.
    ///
    /// Separators and nodes not drawn in `frame` never match.
    pub fn in_box(&self, cursor: Point, frame: u64) -> bool {
        !self.is_separator && self.is_live(frame) && self.bounds.contains(cursor)
    }

    pub(crate) fn depth_first(&self, depth: usize, f: &mut impl FnMut(&MenuNode, usize)) {
        f(self, depth);

        for child in &self.children {
            child.depth_first(depth + 1, f);
        }
    }
}

/// The ordered children of a menu level.
///
/// Besides its nodes, a list carries what the last layout pass found out
/// about the whole column.
#[derive(Debug, Clone)]
pub struct MenuList {
    pub(crate) items: Vec<MenuNode>,
    pub(crate) last_rendered: Option<u64>,
    pub(crate) has_icons: bool,
    pub(crate) text_left_padding: i32,
}

impl MenuList {
    /// Creates a [`MenuList`] from its nodes.
    pub fn new(items: Vec<MenuNode>) -> Self {
        Self {
            items,
            last_rendered: None,
            has_icons: false,
            text_left_padding: 0,
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the entry at `index`.
    pub fn get(&self, index: usize) -> Option<&MenuNode> {
        self.items.get(index)
    }

    /// Iterates over the entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, MenuNode> {
        self.items.iter()
    }

    /// Returns true if any entry had an icon in the last layout pass.
    pub fn has_icons(&self) -> bool {
        self.has_icons
    }

    /// Returns the left inset of every label in this column.
    pub fn text_left_padding(&self) -> i32 {
        self.text_left_padding
    }

    /// Returns the frame in which the list was last drawn.
    pub fn last_rendered(&self) -> Option<u64> {
        self.last_rendered
    }

    /// Returns the union of the bounds of every entry.
    pub fn bounds(&self) -> Option<Rectangle> {
        let mut items = self.items.iter();
        let first = items.next()?.bounds;

        Some(items.fold(first, |bounds, item| bounds.union(&item.bounds)))
    }

    /// Follows `path` from this list and returns the list it ends in.
    ///
    /// Returns `None` if an index is out of range or does not name a submenu.
    pub fn descend(&self, path: &[usize]) -> Option<&MenuList> {
        path.iter().try_fold(self, |list, &index| {
            list.items
                .get(index)
                .filter(|item| item.is_submenu())
                .map(|item| &item.children)
        })
    }

    pub(crate) fn descend_mut(&mut self, path: &[usize]) -> Option<&mut MenuList> {
        path.iter().try_fold(self, |list, &index| {
            list.items
                .get_mut(index)
                .filter(|item| item.is_submenu())
                .map(|item| &mut item.children)
        })
    }

    /// Visits every node of the tree depth-first, with its depth.
    pub fn visit(&self, mut f: impl FnMut(&MenuNode, usize)) {
        for item in &self.items {
            item.depth_first(0, &mut f);
        }
    }
}

impl Default for MenuList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FromIterator<MenuNode> for MenuList {
    fn from_iter<I: IntoIterator<Item = MenuNode>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MenuList {
    type Item = &'a MenuNode;
    type IntoIter = std::slice::Iter<'a, MenuNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl std::ops::Index<usize> for MenuList {
    type Output = MenuNode;

    fn index(&self, index: usize) -> &MenuNode {
        &self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(MenuNode::item("A").kind(), Kind::Leaf);
        assert_eq!(MenuNode::separator().kind(), Kind::Separator);
        assert_eq!(
            MenuNode::item("A")
                .children([MenuNode::item("B")])
                .kind(),
            Kind::Submenu
        );
    }

    #[test]
    fn test_selection_falls_back_to_label() {
        assert_eq!(MenuNode::item("Quit").selection(), "Quit");
        assert_eq!(MenuNode::item("Quit").output("").selection(), "Quit");
        assert_eq!(MenuNode::item("Open").output("open-cmd").selection(), "open-cmd");
    }

    #[test]
    fn test_descend() {
        let list: MenuList = [
            MenuNode::item("A"),
            MenuNode::item("B").children([
                MenuNode::item("B1"),
                MenuNode::item("B2").children([MenuNode::item("B2a")]),
            ]),
        ]
        .into_iter()
        .collect();

        assert_eq!(list.descend(&[]).map(MenuList::len), Some(2));
        assert_eq!(list.descend(&[1, 1]).map(|l| l[0].label()), Some("B2a"));
        assert!(list.descend(&[0]).is_none());
        assert!(list.descend(&[5]).is_none());
    }
}
