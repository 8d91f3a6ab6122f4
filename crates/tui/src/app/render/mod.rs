mod layout;

use ratatui::Frame;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::App;
use layout::screen_layout;

impl App<'_> {
	/// Draw the heading, the combo box, and the selection line.
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let visible_rows = self.combo.matches.len();
		let areas = screen_layout(frame.area(), visible_rows);
		let theme = self.style.theme;

		frame.render_widget(
			Paragraph::new(Line::from(Span::styled(self.ui.title.as_str(), theme.header))),
			areas.title,
		);

		self.combo.render(frame, areas.combo, &self.ui, &theme);

		let selection_line = Line::from(vec![
			Span::raw(self.ui.selection_label.as_str()),
			Span::styled(self.selection.as_str(), theme.selection),
		]);
		frame.render_widget(Paragraph::new(selection_line), areas.selection);
	}
}
