use ratatui::style::{Color, Style};

/// A theme containing styles for the elements of the combo box screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for the heading and list borders.
	pub header: Style,
	/// Style for the highlighted option row.
	pub row_highlight: Style,
	/// Style for the prompt glyph and typed query text.
	pub prompt: Style,
	/// Style for muted text such as the placeholder and empty state.
	pub empty: Style,
	/// Style for characters that matched the query.
	pub highlight: Style,
	/// Style for the selection line and check mark.
	pub selection: Style,
}

impl Theme {
	/// Returns the style used for borders and separators.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}
}

/// Describes a built-in theme and the names it answers to.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Returns `true` if `name` is this theme's name or one of its aliases.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		let wanted = normalize_name(name);
		normalize_name(&self.name) == wanted
			|| self
				.aliases
				.iter()
				.any(|alias| normalize_name(alias) == wanted)
	}
}

pub(super) fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}
