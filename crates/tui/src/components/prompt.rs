use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::input::SearchInput;
use crate::style::Theme;

/// Glyph drawn in front of the query.
pub(crate) const PROMPT_SYMBOL: &str = "› ";

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
	/// The search input widget.
	pub search_input: &'a SearchInput<'a>,
	/// Placeholder text shown when input is empty.
	pub placeholder: &'a str,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render the prompt symbol, the query, and the placeholder when empty.
pub fn render_input(frame: &mut ratatui::Frame, input: InputContext<'_>) {
	let InputContext {
		search_input,
		placeholder,
		area,
		theme,
	} = input;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let prompt_width = (PROMPT_SYMBOL.width() as u16).min(area.width);
	let prompt_area = Rect {
		width: prompt_width,
		..area
	};
	let text_area = Rect {
		x: area.x + prompt_width,
		width: area.width - prompt_width,
		..area
	};

	frame.buffer_mut().set_line(
		prompt_area.x,
		prompt_area.y,
		&Line::from(Span::styled(PROMPT_SYMBOL, theme.prompt)),
		prompt_area.width,
	);

	search_input.render_textarea(frame, text_area);

	if search_input.text().is_empty() {
		render_placeholder(frame, text_area, placeholder, theme);
	}
}

fn render_placeholder(frame: &mut ratatui::Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	let display_text: String = text.chars().take(area.width as usize).collect();
	frame.buffer_mut().set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		area.width,
	);
}
