use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};

use crate::app_dirs;
use crate::cli::CliArgs;

/// Environment variables starting with this prefix (followed by `__`) override
/// file settings, e.g. `COMBO_BOX__UI__TITLE`.
const ENV_PREFIX: &str = "COMBO_BOX";
const ENV_SEPARATOR: &str = "__";

/// The configuration layers, lowest precedence first. CLI flags are applied
/// on top of the built [`Config`] by the loader.
pub(super) struct ConfigSources {
	/// Optional files from the config dir and the working directory.
	discovered: Vec<PathBuf>,
	/// Files named with `--config`; each must exist.
	explicit: Vec<PathBuf>,
	environment: Environment,
}

impl ConfigSources {
	pub(super) fn from_cli(cli: &CliArgs) -> Self {
		Self {
			discovered: if cli.no_config {
				Vec::new()
			} else {
				default_config_files()
			},
			explicit: cli.config.clone(),
			environment: environment(),
		}
	}

	/// Read variables from `vars` instead of the process environment.
	#[cfg(test)]
	pub(super) fn with_env_vars(mut self, vars: config::Map<String, String>) -> Self {
		self.environment = environment().source(Some(vars));
		self
	}

	pub(super) fn build(self) -> Result<Config> {
		let optional = self
			.discovered
			.into_iter()
			.map(|path| File::from(path).required(false));
		let required = self
			.explicit
			.into_iter()
			.map(|path| File::from(path).required(true));

		optional
			.chain(required)
			.fold(Config::builder(), |builder, file| builder.add_source(file))
			.add_source(self.environment)
			.build()
			.context("failed to read configuration sources")
	}
}

fn environment() -> Environment {
	Environment::with_prefix(ENV_PREFIX)
		.separator(ENV_SEPARATOR)
		.try_parsing(true)
}

/// Config files consulted unless `--no-config` is given.
fn default_config_files() -> Vec<PathBuf> {
	let config_dir = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let working_dir = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|dir| [dir.join(".combo-box.toml"), dir.join("combo-box.toml")]);
	config_dir.into_iter().chain(working_dir).collect()
}
