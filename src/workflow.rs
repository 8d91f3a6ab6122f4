use anyhow::Result;
use combo_box_tui::{ComboBoxUi, ComboOutcome};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive combo box.
pub(crate) struct ComboWorkflow {
	ui: ComboBoxUi,
}

impl ComboWorkflow {
	/// Build the workflow from configuration, applying labels, theme, and filter.
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			labels,
			theme,
			initial_query,
			filter,
			..
		} = config;

		let mut ui = ComboBoxUi::new()
			.with_labels(labels)
			.with_filter_policy(filter)
			.with_initial_query(initial_query);

		if let Some(theme) = theme {
			ui = ui.with_theme_name(&theme)?;
		}

		Ok(Self { ui })
	}

	/// Run the interactive screen and return the final outcome.
	pub(crate) fn run(self) -> Result<ComboOutcome> {
		self.ui.run()
	}
}
