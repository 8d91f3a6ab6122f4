//! Command-line entry point for the combo box.

mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use combo_box_tui::style;
use settings::ResolvedConfig;
use workflow::ComboWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let log_path = logging::initialize(resolved.log_file.as_deref(), resolved.log_filter.as_deref());
	tracing::debug!(log_file = ?log_path, "logging initialised");

	run_session(cli.output, resolved)
}

/// Run the combo box and print the outcome in the chosen format.
fn run_session(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = ComboWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
