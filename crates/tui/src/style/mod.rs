//! Visual styling utilities.
//!
//! Themes are colour schemes for the combo box screen. [`StyleConfig`] wraps
//! the active theme so additional visual knobs have somewhere to live.

/// Theme definitions, built-in themes, and lookup helpers.
pub mod theme;

pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}
