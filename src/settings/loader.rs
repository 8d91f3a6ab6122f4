use anyhow::{Context, Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::ConfigSources;
use crate::cli::CliArgs;

/// Load configuration by combining config files, environment variables, and
/// CLI arguments.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	load_from(ConfigSources::from_cli(cli), cli)
}

fn load_from(sources: ConfigSources, cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = sources
		.build()?
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve().context("invalid configuration")
}
