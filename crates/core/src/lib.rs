//! The essential ideas of rmenu.
//!
//! `rmenu_core` holds everything that does not need a display: the menu
//! [`tree`] built by the [`parser`], the [`layout`] engine, the [`hover`]
//! resolver, the [`render`] walk and the [`click`] resolver. The [`Menu`]
//! session ties them together and reacts to pointer [`Event`]s.
//!
//! Text measurement, drawing and image decoding are left to the backends
//! through the [`text::Measure`], [`render::Painter`] and [`icon::Load`]
//! traits.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod click;
pub mod event;
pub mod hover;
pub mod icon;
pub mod layout;
pub mod parser;
pub mod render;
pub mod style;
pub mod text;
pub mod tree;

mod color;
mod error;
mod menu;
mod point;
mod rectangle;
mod size;

pub use color::Color;
pub use error::Error;
pub use event::Event;
pub use menu::{Action, Menu, Status};
pub use point::Point;
pub use rectangle::Rectangle;
pub use size::Size;
pub use style::Style;
pub use tree::{Kind, MenuList, MenuNode};
