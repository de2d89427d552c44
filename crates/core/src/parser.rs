//! Build a menu tree from tab-indented text.
//!
//! Every line is one entry. Its leading tabs give its depth; a line one
//! level deeper than the previous item becomes a child of that item.
//!
//! ```text
//! # comment
//! IMG:/usr/share/icons/term.png<TAB>Terminal<TAB>foot
//! Edit
//! <TAB>Copy<TAB>copy-cmd
//! <TAB>Paste<TAB>paste-cmd
//!
//! Quit
//! ```
//!
//! An empty line is a separator and may only appear at the top level.
use crate::icon;
use crate::{Error, MenuList, MenuNode};

use std::path::Path;

const ICON_PREFIX: &str = "IMG:";

/// Parses `input` into the root [`MenuList`].
///
/// Icons are decoded with `loader` as soon as their line is read. A failed
/// decode only drops that icon; structural errors abort the whole parse.
///
/// An input without entries yields an empty list, not an error.
pub fn parse(input: &str, loader: &mut impl icon::Load) -> Result<MenuList, Error> {
    let mut builder = Builder::new();
    let mut after_separator = false;

    for (number, line) in input.lines().enumerate() {
        let line_number = number + 1;
        let depth = line.bytes().take_while(|&byte| byte == b'\t').count();
        let content = line[depth..].trim_end_matches('\r');

        if content.starts_with('#') {
            continue;
        }

        if content.is_empty() {
            if depth > 0 {
                return Err(Error::SeparatorInSubmenu { line: line_number });
            }

            builder.push(0, MenuNode::separator());
            after_separator = true;
            continue;
        }

        if depth > 0 && after_separator {
            return Err(Error::SeparatorInSubmenu { line: line_number });
        }

        let (icon, record) = match content.strip_prefix(ICON_PREFIX) {
            Some(directive) => {
                let (path, record) = directive
                    .split_once('\t')
                    .ok_or(Error::MissingIconTab { line: line_number })?;

                (load_icon(loader, path), record)
            }
            None => (None, content),
        };

        let node = match record.split_once('\t') {
            Some((label, output)) => MenuNode::item(label).output(output),
            None => MenuNode::item(record),
        };

        builder.push(depth, node.icon(icon));
        after_separator = false;
    }

    Ok(builder.finish())
}

fn load_icon(loader: &mut impl icon::Load, path: &str) -> Option<icon::Handle> {
    match loader.load(Path::new(path)) {
        Ok(handle) => Some(handle),
        Err(error) => {
            log::warn!("Failed to load icon {path}: {error}");
            None
        }
    }
}

/// Keeps one open insertion list per depth.
///
/// `stack[d]` collects the children of the last node of `stack[d - 1]`. A
/// list is handed over to its parent when its level closes.
struct Builder {
    stack: Vec<Vec<MenuNode>>,
}

impl Builder {
    fn new() -> Self {
        Self {
            stack: vec![Vec::new()],
        }
    }

    fn push(&mut self, depth: usize, node: MenuNode) {
        while self.stack.len() > depth + 1 {
            self.close();
        }

        while self.stack.len() < depth + 1 {
            let has_parent = self
                .stack
                .last()
                .is_some_and(|level| !level.is_empty());

            if !has_parent {
                log::warn!(
                    "Entry {:?} at depth {depth} has no parent, keeping it at depth {}",
                    node.label(),
                    self.stack.len() - 1
                );
                break;
            }

            self.stack.push(Vec::new());
        }

        if let Some(level) = self.stack.last_mut() {
            level.push(node);
        }
    }

    fn close(&mut self) {
        if self.stack.len() < 2 {
            return;
        }

        let Some(children) = self.stack.pop() else {
            return;
        };

        if let Some(parent) = self.stack.last_mut().and_then(|level| level.last_mut()) {
            parent.children.items.extend(children);
        }
    }

    fn finish(mut self) -> MenuList {
        while self.stack.len() > 1 {
            self.close();
        }

        MenuList::new(self.stack.pop().unwrap_or_default())
    }
}
