/// Textual configuration rendered around the combo box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Heading drawn at the top of the screen.
	pub title: String,
	/// Placeholder displayed while the query is empty.
	pub placeholder: String,
	/// Prefix of the line reflecting the current selection.
	pub selection_label: String,
	/// Title of the bordered option list.
	pub list_title: String,
	/// Message shown when no option matches the query.
	pub empty_message: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Custom Combo Box".to_string(),
			placeholder: "type to search".to_string(),
			selection_label: "selected option: ".to_string(),
			list_title: "Options".to_string(),
			empty_message: "No results".to_string(),
		}
	}
}

impl UiLabels {
	/// Override the heading.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Override the input placeholder.
	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	/// Format the selection line for `value`.
	#[must_use]
	pub fn selection_line(&self, value: &str) -> String {
		format!("{}{value}", self.selection_label)
	}
}
