//! People picker
//!
//! The search widget itself: a single-line input, a debounced applied query,
//! a dropdown of matching people and the current selection.

pub mod picker_render;
mod picker_state;

pub use picker_state::{DropdownContent, PickerState, SelectionCallback};

pub const PLACEHOLDER: &str = "Enter a part of the name";
pub const NO_SELECTION_TITLE: &str = "No selected person";
pub const NO_SUGGESTIONS_MESSAGE: &str = "No matching suggestions";
