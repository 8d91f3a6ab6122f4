use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use super::rows::build_option_rows;
use crate::filter::OptionMatch;
use crate::options::OptionList;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the list's border.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;
const KEY_COLUMN_WIDTH: u16 = 5;

/// Everything needed to draw the option list.
pub struct ListContext<'a> {
	pub options: &'a OptionList,
	pub matches: &'a [OptionMatch],
	/// Value of the currently selected option, empty when none.
	pub selected_key: &'a str,
	pub title: &'a str,
	pub empty_message: &'a str,
	pub theme: &'a Theme,
}

/// Render the bordered option table, or the empty-state message.
pub fn render_option_list(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	ctx: ListContext<'_>,
) {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(ctx.theme.border_style());
	if !ctx.title.is_empty() {
		block = block.title(ctx.title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.width == 0 || inner.height == 0 {
		return;
	}

	let header = Row::new([Cell::from("Option"), Cell::from("Key")])
		.style(ctx.theme.border_style())
		.height(1)
		.bottom_margin(1);
	let rows = build_option_rows(ctx.options, ctx.matches, ctx.selected_key, ctx.theme);
	let table = Table::new(
		rows,
		[Constraint::Fill(1), Constraint::Length(KEY_COLUMN_WIDTH)],
	)
	.header(header)
	.column_spacing(TABLE_COLUMN_SPACING)
	.highlight_spacing(HighlightSpacing::Always)
	.row_highlight_style(ctx.theme.row_highlight)
	.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, inner, table_state);

	render_header_separator(frame, inner, ctx.theme);

	if ctx.matches.is_empty() && inner.height > TABLE_HEADER_ROWS {
		let message_area = Rect {
			y: inner.y + TABLE_HEADER_ROWS,
			height: inner.height - TABLE_HEADER_ROWS,
			..inner
		};
		let empty = Paragraph::new(Span::styled(ctx.empty_message, ctx.theme.empty_style()))
			.alignment(Alignment::Center);
		frame.render_widget(empty, message_area);
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 {
		return;
	}
	let width = area.width as usize;
	let line = if width <= 2 {
		Line::from(" ".repeat(width))
	} else {
		Line::from(vec![
			Span::raw(" "),
			Span::styled("─".repeat(width - 2), theme.border_style()),
			Span::raw(" "),
		])
	};
	frame.buffer_mut().set_line(area.x, area.y + 1, &line, area.width);
}
