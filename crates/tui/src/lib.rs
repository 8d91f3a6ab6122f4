//! Interactive terminal combo box.
//!
//! The crate renders a heading, a searchable dropdown over a fixed option
//! list, and a line reflecting the current selection. [`App`] is the root
//! view that owns the selection; [`ComboBox`] is the widget that filters the
//! options and reports picks back to it.

mod app;
mod builder;
pub mod combo;
pub mod components;
mod config;
pub mod filter;
pub mod input;
pub mod options;
mod runtime;
pub mod selection;
pub mod style;

pub use app::{App, ComboOutcome};
pub use builder::ComboBoxUi;
pub use combo::{ComboAction, ComboBox};
pub use config::UiLabels;
pub use filter::{FilterPolicy, MatchMode, OptionMatch, filter_options};
pub use input::SearchInput;
pub use options::{ComboOption, OptionList, OptionListError};
pub use runtime::run;
pub use selection::Selection;
pub use style::{StyleConfig, Theme, builtin_themes, default_theme};

#[cfg(test)]
mod snapshot_tests;
