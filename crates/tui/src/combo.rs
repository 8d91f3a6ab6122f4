//! The searchable dropdown widget.
//!
//! [`ComboBox`] owns the query input, the filtered view of its options, and
//! the highlighted row. It never stores the selection itself: picking an
//! option produces a [`ComboAction`] for the owner to apply, and the owner
//! hands the current value back through [`ComboBox::set_selected_key`].

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::TableState;

use crate::components::{InputContext, ListContext, render_input, render_option_list};
use crate::config::UiLabels;
use crate::filter::{FilterPolicy, OptionMatch, filter_options};
use crate::input::SearchInput;
use crate::options::{ComboOption, OptionList};
use crate::style::Theme;

/// Notification emitted when the user changes the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboAction {
	/// The selection should become this value. Empty clears it.
	Changed(String),
}

pub struct ComboBox<'a> {
	options: OptionList,
	placeholder: String,
	selected_key: String,
	policy: FilterPolicy,
	pub(crate) search_input: SearchInput<'a>,
	pub(crate) matches: Vec<OptionMatch>,
	pub(crate) table_state: TableState,
}

impl<'a> ComboBox<'a> {
	/// Create a combo box over `options` showing `placeholder` while empty.
	#[must_use]
	pub fn new(options: OptionList, placeholder: impl Into<String>) -> Self {
		let mut combo = Self {
			options,
			placeholder: placeholder.into(),
			selected_key: String::new(),
			policy: FilterPolicy::default(),
			search_input: SearchInput::new(""),
			matches: Vec::new(),
			table_state: TableState::default(),
		};
		combo.refilter();
		combo
	}

	/// Replace the filtering policy and re-run the current query.
	pub fn set_policy(&mut self, policy: FilterPolicy) {
		self.policy = policy;
		self.refilter();
	}

	/// Replace the query text.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.search_input.set_text(query);
		self.refilter();
	}

	/// Draw typed text in the theme's prompt style.
	pub fn apply_theme(&mut self, theme: &Theme) {
		self.search_input.set_style(theme.prompt);
	}

	pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
		self.placeholder = placeholder.into();
	}

	/// Mark the option whose value equals `key` as the current selection.
	pub fn set_selected_key(&mut self, key: impl Into<String>) {
		self.selected_key = key.into();
	}

	#[must_use]
	pub fn options(&self) -> &OptionList {
		&self.options
	}

	#[must_use]
	pub fn placeholder(&self) -> &str {
		&self.placeholder
	}

	#[must_use]
	pub fn selected_key(&self) -> &str {
		&self.selected_key
	}

	#[must_use]
	pub fn query(&self) -> &str {
		self.search_input.text()
	}

	/// Options that currently match the query, in display order.
	pub fn visible_options(&self) -> impl Iterator<Item = &ComboOption> {
		self.matches
			.iter()
			.filter_map(|hit| self.options.get(hit.index))
	}

	/// The option under the cursor, if any.
	#[must_use]
	pub fn highlighted(&self) -> Option<&ComboOption> {
		let row = self.table_state.selected()?;
		let hit = self.matches.get(row)?;
		self.options.get(hit.index)
	}

	/// Process a key press, returning an action when the selection changes.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<ComboAction> {
		match key.code {
			KeyCode::Enter => return self.pick_highlighted(),
			KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				if self.selected_key.is_empty() {
					return None;
				}
				tracing::info!("selection cleared");
				return Some(ComboAction::Changed(String::new()));
			}
			KeyCode::Up => self.move_highlight_up(),
			KeyCode::Down => self.move_highlight_down(),
			KeyCode::Home => self.highlight_row(0),
			KeyCode::End => self.highlight_row(self.matches.len().saturating_sub(1)),
			_ => {
				if self.search_input.input(key) {
					self.refilter();
				}
			}
		}
		None
	}

	fn pick_highlighted(&mut self) -> Option<ComboAction> {
		let picked = self.highlighted()?.clone();
		tracing::info!(key = picked.key, value = %picked.value, "option picked");

		self.search_input.clear();
		self.refilter();
		if let Some(row) = self.matches.iter().position(|hit| {
			self.options
				.get(hit.index)
				.is_some_and(|option| option.key == picked.key)
		}) {
			self.table_state.select(Some(row));
		}

		Some(ComboAction::Changed(picked.value))
	}

	fn refilter(&mut self) {
		self.matches = filter_options(&self.options, self.search_input.text(), self.policy);
		self.table_state.select(if self.matches.is_empty() {
			None
		} else {
			Some(0)
		});
	}

	fn move_highlight_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_highlight_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.matches.len()
		{
			self.table_state.select(Some(selected + 1));
		}
	}

	fn highlight_row(&mut self, row: usize) {
		if !self.matches.is_empty() {
			self.table_state.select(Some(row.min(self.matches.len() - 1)));
		}
	}

	/// Draw the input row and the option list into `area`.
	pub(crate) fn render(&mut self, frame: &mut Frame, area: Rect, labels: &UiLabels, theme: &Theme) {
		let [input_area, list_area] =
			Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);

		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				placeholder: &self.placeholder,
				area: input_area,
				theme,
			},
		);

		render_option_list(
			frame,
			list_area,
			&mut self.table_state,
			ListContext {
				options: &self.options,
				matches: &self.matches,
				selected_key: &self.selected_key,
				title: &labels.list_title,
				empty_message: &labels.empty_message,
				theme,
			},
		);
	}
}
