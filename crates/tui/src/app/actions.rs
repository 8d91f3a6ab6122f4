use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::options::ComboOption;

/// Result of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboOutcome {
	/// `false` when the session was aborted with `Ctrl+C`.
	pub accepted: bool,
	/// Query text at the time the session ended.
	pub query: String,
	/// The selected option, if any.
	pub selection: Option<ComboOption>,
}

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<ComboOutcome> {
		match key.code {
			KeyCode::Esc => return Some(self.outcome(true)),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Some(self.outcome(false));
			}
			_ => {
				if let Some(action) = self.combo.handle_key(key) {
					self.apply(action);
				}
			}
		}
		None
	}

	pub(crate) fn outcome(&self, accepted: bool) -> ComboOutcome {
		ComboOutcome {
			accepted,
			query: self.combo.query().to_string(),
			selection: self.selected_option().cloned(),
		}
	}
}
