//! Single-line text input backing the combo box query.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Thin wrapper over [`TextArea`] that keeps the query on one line.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	/// Create an input pre-filled with `initial`.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::default();
		textarea.set_cursor_line_style(Style::default());
		let mut input = Self { textarea };
		input.set_text(initial);
		input
	}

	/// Replace the query, keeping only its first line and the current styling.
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.clear();
		let text: String = text.into();
		let first_line = text.lines().next().unwrap_or_default();
		if !first_line.is_empty() {
			self.textarea.insert_str(first_line);
		}
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key to the input. Returns `true` when the text changed.
	///
	/// Keys that would introduce a second line are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL));
		if newline {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	/// Clear the query. Returns `true` when there was text to remove.
	pub fn clear(&mut self) -> bool {
		if self.text().is_empty() {
			return false;
		}
		self.textarea = {
			let mut textarea = TextArea::default();
			textarea.set_cursor_line_style(self.textarea.cursor_line_style());
			textarea.set_cursor_style(self.textarea.cursor_style());
			textarea.set_style(self.textarea.style());
			textarea
		};
		true
	}

	/// Apply the prompt style to the typed text.
	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	#[must_use]
	pub fn style(&self) -> Style {
		self.textarea.style()
	}

	pub(crate) fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
