//! peoplepick: an interactive people picker for the terminal
//!
//! Type part of a name, and after a short quiet period the dropdown narrows
//! to the people whose name contains it. Pick one with Enter or a click.

pub mod app;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod layout;
pub mod logging;
pub mod people;
pub mod picker;
pub mod widgets;


pub use error::PickError;
pub use people::{PEOPLE, Person};
