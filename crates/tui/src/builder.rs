use anyhow::{Result, bail};

use crate::App;
use crate::app::ComboOutcome;
use crate::config::UiLabels;
use crate::filter::FilterPolicy;
use crate::options::OptionList;
use crate::style::{Theme, by_name};

/// A small builder for configuring the combo box screen before running it.
pub struct ComboBoxUi {
	options: OptionList,
	labels: Option<UiLabels>,
	theme: Option<Theme>,
	policy: FilterPolicy,
	initial_query: String,
}

impl ComboBoxUi {
	/// Create a builder over the built-in option list.
	#[must_use]
	pub fn new() -> Self {
		Self {
			options: OptionList::builtin(),
			labels: None,
			theme: None,
			policy: FilterPolicy::default(),
			initial_query: String::new(),
		}
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Select a built-in theme by name or alias.
	pub fn with_theme_name(self, name: &str) -> Result<Self> {
		match by_name(name) {
			Some(theme) => Ok(self.with_theme(theme)),
			None => bail!("unknown theme: {name}"),
		}
	}

	#[must_use]
	pub fn with_filter_policy(mut self, policy: FilterPolicy) -> Self {
		self.policy = policy;
		self
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Assemble the [`App`] without touching the terminal.
	#[must_use]
	pub fn build<'a>(self) -> App<'a> {
		let mut app = App::new(self.options);
		if let Some(labels) = self.labels {
			app.set_labels(labels);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_filter_policy(self.policy);
		if !self.initial_query.is_empty() {
			app.set_initial_query(self.initial_query);
		}
		app
	}

	/// Run the interactive screen with the configured options.
	pub fn run(self) -> Result<ComboOutcome> {
		self.build().run()
	}
}

impl Default for ComboBoxUi {
	fn default() -> Self {
		Self::new()
	}
}
