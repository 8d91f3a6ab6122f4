use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{MatchModeArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `combo-box` binary.
#[derive(Parser, Debug)]
#[command(
	name = "combo-box",
	version,
	long_version = long_version(),
	about = "Searchable dropdown over a fixed option list",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "COMBO_BOX_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Pre-fill the search input"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(long, value_name = "THEME", help = "Select a theme by name")]
	pub(crate) theme: Option<String>,
	#[arg(long, value_name = "TEXT", help = "Override the heading")]
	pub(crate) title: Option<String>,
	#[arg(long, value_name = "TEXT", help = "Override the input placeholder")]
	pub(crate) placeholder: Option<String>,
	#[arg(
		short = 'm',
		long = "match-mode",
		value_enum,
		help = "How the query is matched against options"
	)]
	pub(crate) match_mode: Option<MatchModeArg>,
	#[arg(
		long = "case-sensitive",
		value_parser = BoolishValueParser::new(),
		help = "Match case exactly (substring and prefix modes)"
	)]
	pub(crate) case_sensitive: Option<bool>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		env = "COMBO_BOX_LOG_FILE",
		help = "Write logs to this file"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
