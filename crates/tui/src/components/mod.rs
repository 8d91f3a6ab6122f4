//! UI building blocks shared by the combo box and the root view.

/// Option list rendering.
pub mod list;
/// Input prompt rendering.
pub mod prompt;
/// Row construction and match highlighting.
pub mod rows;

pub use list::{ListContext, render_option_list};
pub use prompt::{InputContext, render_input};
