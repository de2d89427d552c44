//! rmenu shows a cascading popup menu described as tab-indented text and
//! prints the output of the entry the user clicks.
//!
//! Every line of the input is one entry; leading tabs nest it under the
//! previous entry. A label may be followed by a tab and the string to print
//! when it is selected, and by an `IMG:<path><TAB>` prefix to show an icon.
//! An empty line draws a separator.
//!
//! ```text
//! Terminal	foot
//! Edit
//! 	Copy	wl-copy
//! 	Paste	wl-paste
//!
//! Quit
//! ```
//!
//! The crate ties together [`core`], which knows nothing about windows,
//! [`renderer`], which draws with `tiny-skia`, and [`shell`], which runs the
//! `winit` event loop.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use rmenu_core as core;
pub use rmenu_tiny_skia as renderer;
pub use rmenu_winit as shell;

pub use crate::core::{Menu, Status, Style};
pub use crate::shell::Settings;

use std::io::{self, Read};
use std::path::Path;

/// The result of running a menu.
pub type Result<T = Status> = std::result::Result<T, Error>;

/// An error that keeps a menu from running.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be read.
    #[error("failed to read the menu: {0}")]
    Input(#[from] io::Error),

    /// The input is not a valid menu.
    #[error(transparent)]
    Parse(#[from] crate::core::Error),

    /// The menu window failed.
    #[error(transparent)]
    Shell(#[from] crate::shell::Error),
}

/// Reads the menu description from the file at `path`, or from the standard
/// input if there is none.
pub fn read(path: Option<&Path>) -> Result<String> {
    let input = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut input = String::new();
            let _ = io::stdin().lock().read_to_string(&mut input)?;
            input
        }
    };

    Ok(input)
}

/// Parses `input`, decoding its icons from disk, and runs the menu in a new
/// window until a selection is made or the menu is dismissed.
pub fn run(input: &str, style: Style, settings: Settings) -> Result {
    let menu = Menu::parse(input, &mut crate::renderer::raster::Loader, style)?;

    log::debug!("Parsed {} top-level entries", menu.root().len());

    Ok(crate::shell::run(menu, settings)?)
}
