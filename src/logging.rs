//! File-backed tracing setup.
//!
//! The terminal belongs to the UI while it runs, so log lines are written to a
//! file instead of stderr. Filtering follows `COMBO_BOX_LOG` when set, then the
//! configured filter, then `info`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const FILTER_ENV: &str = "COMBO_BOX_LOG";
const DEFAULT_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "combo-box.log";

/// Install the global subscriber. Returns the log file path on success.
///
/// Failing to open the log file is not fatal: the UI runs without logging.
pub(crate) fn initialize(file: Option<&Path>, filter: Option<&str>) -> Option<PathBuf> {
	let path = match file {
		Some(path) => path.to_path_buf(),
		None => app_dirs::get_data_dir().ok()?.join(LOG_FILE_NAME),
	};
	let writer = open_log_file(&path).ok()?;

	let installed = tracing_subscriber::fmt()
		.with_env_filter(build_filter(filter))
		.with_writer(Mutex::new(writer))
		.with_ansi(false)
		.with_target(false)
		.try_init()
		.is_ok();
	installed.then_some(path)
}

fn build_filter(configured: Option<&str>) -> EnvFilter {
	EnvFilter::try_from_env(FILTER_ENV)
		.or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_FILTER)))
		.unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}
