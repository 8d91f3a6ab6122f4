use clap::ValueEnum;
use combo_box_tui::MatchMode;

/// Filtering policies selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum MatchModeArg {
	Substring,
	Prefix,
	Fuzzy,
}

impl MatchModeArg {
	/// Return the name consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		MatchMode::from(self).as_str()
	}
}

impl From<MatchModeArg> for MatchMode {
	fn from(arg: MatchModeArg) -> Self {
		match arg {
			MatchModeArg::Substring => MatchMode::Substring,
			MatchModeArg::Prefix => MatchMode::Prefix,
			MatchModeArg::Fuzzy => MatchMode::Fuzzy,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
