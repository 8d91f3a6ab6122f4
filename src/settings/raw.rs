use std::path::PathBuf;

use combo_box_tui::{FilterPolicy, MatchMode, UiLabels, style};
use serde::Deserialize;

use super::resolved::{ResolvedConfig, SettingsError};
use crate::cli::CliArgs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	search: SearchSection,
	log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	placeholder: Option<String>,
	theme: Option<String>,
	initial_query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	match_mode: Option<String>,
	case_sensitive: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	file: Option<PathBuf>,
	filter: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.ui.placeholder = Some(placeholder);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(mode) = cli.match_mode {
			self.search.match_mode = Some(mode.as_str().to_string());
		}
		if let Some(value) = cli.case_sensitive {
			self.search.case_sensitive = Some(value);
		}
		if let Some(path) = cli.log_file.clone() {
			self.log.file = Some(path);
		}
	}

	/// Validate the merged values and produce the final configuration.
	pub(super) fn resolve(self) -> Result<ResolvedConfig, SettingsError> {
		let mut labels = UiLabels::default();
		if let Some(title) = self.ui.title {
			labels.title = non_blank("ui.title", title)?;
		}
		if let Some(placeholder) = self.ui.placeholder {
			labels.placeholder = non_blank("ui.placeholder", placeholder)?;
		}

		let theme = match self.ui.theme {
			Some(name) if style::by_name(&name).is_none() => {
				return Err(SettingsError::invalid("ui.theme", name, "unknown theme"));
			}
			other => other,
		};

		let mode = match self.search.match_mode {
			Some(name) => MatchMode::from_name(&name).ok_or_else(|| {
				SettingsError::invalid(
					"search.match_mode",
					name,
					"expected substring, prefix, or fuzzy",
				)
			})?,
			None => MatchMode::default(),
		};

		Ok(ResolvedConfig {
			labels,
			theme,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			filter: FilterPolicy::new(mode, self.search.case_sensitive.unwrap_or(false)),
			log_file: self.log.file,
			log_filter: self.log.filter,
		})
	}
}

fn non_blank(key: &'static str, value: String) -> Result<String, SettingsError> {
	if value.trim().is_empty() {
		return Err(SettingsError::invalid(key, value, "must not be empty"));
	}
	Ok(value)
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	fn cli(args: &[&str]) -> CliArgs {
		let mut argv = vec!["combo-box"];
		argv.extend_from_slice(args);
		CliArgs::try_parse_from(argv).expect("parses")
	}

	#[test]
	fn defaults_reproduce_the_page() {
		let resolved = RawConfig::default().resolve().expect("resolve");
		assert_eq!(resolved.labels, UiLabels::default());
		assert_eq!(resolved.filter, FilterPolicy::default());
		assert!(resolved.initial_query.is_empty());
		assert!(resolved.theme.is_none());
	}

	#[test]
	fn cli_overrides_file_values() {
		let mut raw: RawConfig = toml_raw(
			r#"
[ui]
title = "From file"
[search]
match_mode = "prefix"
"#,
		);
		raw.apply_cli_overrides(&cli(&["--title", "From CLI", "-m", "fuzzy"]));
		let resolved = raw.resolve().expect("resolve");
		assert_eq!(resolved.labels.title, "From CLI");
		assert_eq!(resolved.filter.mode, MatchMode::Fuzzy);
	}

	#[test]
	fn unknown_theme_is_rejected() {
		let mut raw = RawConfig::default();
		raw.apply_cli_overrides(&cli(&["--theme", "neon"]));
		let err = raw.resolve().expect_err("unknown theme");
		assert_eq!(err.key, "ui.theme");
	}

	#[test]
	fn unknown_match_mode_is_rejected() {
		let raw = toml_raw("[search]\nmatch_mode = \"regex\"\n");
		let err = raw.resolve().expect_err("bad mode");
		assert_eq!(err.key, "search.match_mode");
	}

	#[test]
	fn blank_placeholder_is_rejected() {
		let mut raw = RawConfig::default();
		raw.apply_cli_overrides(&cli(&["--placeholder", "  "]));
		let err = raw.resolve().expect_err("blank");
		assert_eq!(err.key, "ui.placeholder");
	}

	fn toml_raw(contents: &str) -> RawConfig {
		config::Config::builder()
			.add_source(config::File::from_str(contents, config::FileFormat::Toml))
			.build()
			.expect("build")
			.try_deserialize()
			.expect("deserialize")
	}
}
