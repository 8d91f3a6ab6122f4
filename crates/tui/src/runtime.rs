//! Application runtime and event loop.

use std::time::Duration;

use anyhow::{Context, Result};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::App;
use crate::app::ComboOutcome;
use crate::options::OptionList;

/// Construct an [`App`] over `options` and run it to completion.
pub fn run(options: OptionList) -> Result<ComboOutcome> {
	let mut app = App::new(options);
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<ComboOutcome> {
		let mut terminal = ratatui::init();
		tracing::info!(options = self.options().len(), "combo box session started");

		let result = self.event_loop(&mut terminal);
		ratatui::restore();

		if let Ok(outcome) = &result {
			tracing::info!(
				accepted = outcome.accepted,
				selection = outcome.selection.as_ref().map(|option| option.value.as_str()),
				"combo box session finished"
			);
		}
		result
	}

	fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<ComboOutcome> {
		terminal.clear().context("failed to clear the terminal")?;
		loop {
			terminal
				.draw(|frame| self.draw(frame))
				.context("failed to draw frame")?;

			if !event::poll(Duration::from_millis(50)).context("failed to poll terminal events")? {
				continue;
			}
			match event::read().context("failed to read terminal event")? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key) {
						return Ok(outcome);
					}
				}
				_ => {}
			}
		}
	}
}
