//! Root view of the combo box screen.
//!
//! [`App`] holds the selection and wires the fixed option list into the
//! combo box. Supporting modules split the implementation into key handling
//! and rendering.

mod actions;
mod render;
mod state;

pub use actions::ComboOutcome;
pub use state::App;
