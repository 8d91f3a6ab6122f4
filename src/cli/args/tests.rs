use clap::{CommandFactory, Parser};

use super::options::MatchModeArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn defaults_print_plain_output() {
	let parsed = CliArgs::try_parse_from(["combo-box"]).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert_eq!(parsed.match_mode, None);
	assert!(!parsed.no_config);
}

#[test]
fn search_flags_are_parsed() {
	let parsed = CliArgs::try_parse_from([
		"combo-box",
		"-m",
		"prefix",
		"--case-sensitive",
		"yes",
		"-q",
		"ban",
		"-o",
		"json",
	])
	.expect("parses");
	assert_eq!(parsed.match_mode, Some(MatchModeArg::Prefix));
	assert_eq!(parsed.case_sensitive, Some(true));
	assert_eq!(parsed.initial_query.as_deref(), Some("ban"));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn unknown_match_mode_is_rejected() {
	assert!(CliArgs::try_parse_from(["combo-box", "--match-mode", "regex"]).is_err());
}
