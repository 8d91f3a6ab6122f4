use std::path::PathBuf;

use combo_box_tui::{FilterPolicy, UiLabels};
use thiserror::Error;

/// A configuration value that failed validation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid value for {key}: {reason} (value: {value:?})")]
pub(crate) struct SettingsError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) reason: &'static str,
}

impl SettingsError {
	pub(crate) fn invalid(key: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
		Self {
			key,
			value: value.into(),
			reason,
		}
	}
}

/// Application-ready configuration derived from config files, environment
/// variables, CLI flags, and defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) labels: UiLabels,
	pub(crate) theme: Option<String>,
	pub(crate) initial_query: String,
	pub(crate) filter: FilterPolicy,
	pub(crate) log_file: Option<PathBuf>,
	pub(crate) log_filter: Option<String>,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Title: {}", self.labels.title);
		println!("  Placeholder: {}", self.labels.placeholder);
		println!(
			"  UI theme: {}",
			self.theme.as_deref().unwrap_or("(use the library default)")
		);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		println!("  Match mode: {}", self.filter.mode.as_str());
		println!(
			"  Case sensitive: {}",
			bool_to_word(self.filter.case_sensitive)
		);
		match &self.log_file {
			Some(path) => println!("  Log file: {}", path.display()),
			None => println!("  Log file: (data directory)"),
		}
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
