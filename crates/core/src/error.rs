/// An error that aborts building a menu.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A separator was found inside a submenu.
    #[error("line {line}: no separators in submenus")]
    SeparatorInSubmenu {
        /// The 1-based input line.
        line: usize,
    },

    /// An `IMG:` directive is not followed by a tab.
    #[error("line {line}: missing tab after icon")]
    MissingIconTab {
        /// The 1-based input line.
        line: usize,
    },

    /// The input holds no menu entries.
    #[error("no menu items provided")]
    Empty,
}
