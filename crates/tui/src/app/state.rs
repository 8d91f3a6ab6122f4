//! Root view state.
//!
//! The [`App`] owns the selection and the combo box. The combo box reports
//! picks back as [`ComboAction`]s which are applied through [`App::on_change`];
//! nothing else writes the selection.

use crate::combo::{ComboAction, ComboBox};
use crate::config::UiLabels;
use crate::filter::FilterPolicy;
use crate::options::{ComboOption, OptionList};
use crate::selection::Selection;
use crate::style::{StyleConfig, Theme};

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	/// The single current choice, empty until the user picks an option.
	pub(crate) selection: Selection,
	pub(crate) combo: ComboBox<'a>,
	pub(crate) ui: UiLabels,
	pub(crate) style: StyleConfig,
}

impl<'a> App<'a> {
	/// Construct the root view over `options` with default labels.
	#[must_use]
	pub fn new(options: OptionList) -> Self {
		let ui = UiLabels::default();
		let style = StyleConfig::default();
		let mut combo = ComboBox::new(options, ui.placeholder.clone());
		combo.apply_theme(&style.theme);
		Self {
			selection: Selection::empty(),
			combo,
			ui,
			style,
		}
	}

	/// Apply a new theme.
	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
		self.combo.apply_theme(&theme);
	}

	#[must_use]
	pub fn theme(&self) -> &Theme {
		&self.style.theme
	}

	/// Replace the visible labels, keeping the combo box placeholder in sync.
	pub fn set_labels(&mut self, ui: UiLabels) {
		self.combo.set_placeholder(ui.placeholder.clone());
		self.ui = ui;
	}

	pub fn set_filter_policy(&mut self, policy: FilterPolicy) {
		self.combo.set_policy(policy);
	}

	pub fn set_initial_query(&mut self, query: impl Into<String>) {
		self.combo.set_query(query);
	}

	/// Store `value` as the new selection.
	///
	/// This is the only writer of the selection; the next frame reflects it.
	pub fn on_change(&mut self, value: impl Into<String>) {
		let value = value.into();
		tracing::info!(value = %value, "selection changed");
		self.selection.set(value);
		self.combo.set_selected_key(self.selection.as_str());
	}

	pub(crate) fn apply(&mut self, action: ComboAction) {
		match action {
			ComboAction::Changed(value) => self.on_change(value),
		}
	}

	#[must_use]
	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	/// The option matching the current selection, if any.
	#[must_use]
	pub fn selected_option(&self) -> Option<&ComboOption> {
		let value = self.selection.value()?;
		self.combo.options().by_value(value)
	}

	/// The list handed to the combo box.
	#[must_use]
	pub fn options(&self) -> &OptionList {
		self.combo.options()
	}

	#[must_use]
	pub fn combo(&self) -> &ComboBox<'a> {
		&self.combo
	}

	#[must_use]
	pub fn labels(&self) -> &UiLabels {
		&self.ui
	}

	/// Text of the line reflecting the selection, e.g. `selected option: Banana`.
	#[must_use]
	pub fn selection_line(&self) -> String {
		self.ui.selection_line(self.selection.as_str())
	}
}
