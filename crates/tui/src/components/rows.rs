use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};

use crate::filter::OptionMatch;
use crate::options::OptionList;
use crate::style::Theme;

/// Marker appended to the row of the currently selected option.
pub(crate) const SELECTED_MARKER: &str = " ✓";

/// Build table rows for the filtered options.
#[must_use]
pub fn build_option_rows<'a>(
	options: &'a OptionList,
	matches: &'a [OptionMatch],
	selected_key: &str,
	theme: &Theme,
) -> Vec<Row<'a>> {
	matches
		.iter()
		.filter_map(|hit| {
			let option = options.get(hit.index)?;
			let mut line = highlight_line(&option.value, &hit.positions, theme.highlight_style());
			if !selected_key.is_empty() && option.value == selected_key {
				line.spans.push(Span::styled(SELECTED_MARKER, theme.selection));
			}
			Some(Row::new([
				Cell::from(line),
				Cell::from(option.key.to_string()),
			]))
		})
		.collect()
}

/// Split `text` into spans, styling the chars at `positions` with `style`.
///
/// Consecutive matched chars share a span.
#[must_use]
pub fn highlight_line<'a>(text: &'a str, positions: &[usize], style: Style) -> Line<'a> {
	if positions.is_empty() {
		return Line::from(text);
	}

	let mut spans = Vec::new();
	let mut run_start = 0;
	let mut run_matched = false;
	for (position, (byte, _)) in text.char_indices().enumerate() {
		let matched = positions.contains(&position);
		if matched != run_matched && byte > run_start {
			spans.push(styled_run(&text[run_start..byte], run_matched, style));
			run_start = byte;
		}
		if matched != run_matched {
			run_start = byte;
			run_matched = matched;
		}
	}
	if run_start < text.len() {
		spans.push(styled_run(&text[run_start..], run_matched, style));
	}
	Line::from(spans)
}

fn styled_run(text: &str, matched: bool, style: Style) -> Span<'_> {
	if matched {
		Span::styled(text, style)
	} else {
		Span::raw(text)
	}
}
