use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};

use crate::components::list::TABLE_HEADER_ROWS;

/// Input row above the option list.
const INPUT_ROWS: u16 = 1;
/// Top and bottom border of the option list.
const BORDER_ROWS: u16 = 2;

/// Screen regions of the root view, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScreenAreas {
	pub title: Rect,
	pub combo: Rect,
	pub selection: Rect,
}

/// Rows the combo box needs to show `rows` options without scrolling.
///
/// At least one body row is reserved so the empty-state message fits.
pub(crate) fn combo_height(rows: usize) -> u16 {
	let body = u16::try_from(rows.max(1)).unwrap_or(u16::MAX);
	INPUT_ROWS
		.saturating_add(BORDER_ROWS)
		.saturating_add(TABLE_HEADER_ROWS)
		.saturating_add(body)
}

/// Split the frame into heading, combo box, and selection line.
pub(crate) fn screen_layout(area: Rect, option_rows: usize) -> ScreenAreas {
	let area = area.inner(Margin {
		vertical: 0,
		horizontal: 1,
	});
	let [title, _, combo, _, selection] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Length(combo_height(option_rows)),
		Constraint::Length(1),
		Constraint::Length(1),
	])
	.flex(Flex::Start)
	.areas(area);

	ScreenAreas {
		title,
		combo,
		selection,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn combo_height_covers_chrome_and_rows() {
		assert_eq!(combo_height(4), 1 + 2 + 2 + 4);
		assert_eq!(combo_height(0), combo_height(1));
	}

	#[test]
	fn regions_stack_in_order_with_horizontal_margin() {
		let areas = screen_layout(Rect::new(0, 0, 40, 20), 4);
		assert_eq!(areas.title, Rect::new(1, 0, 38, 1));
		assert_eq!(areas.combo, Rect::new(1, 2, 38, combo_height(4)));
		assert_eq!(areas.selection.y, areas.combo.bottom() + 1);
		assert_eq!(areas.selection.height, 1);
	}
}
