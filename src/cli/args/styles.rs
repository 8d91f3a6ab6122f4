use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use combo_box_tui::style;

use crate::app_dirs;

/// `--version` output: the version followed by where settings and logs live
/// and which themes are bundled.
pub(super) fn long_version() -> &'static str {
	let banner = version_banner(
		env!("CARGO_PKG_VERSION"),
		&[
			("config directory", app_dirs::get_config_dir()),
			("data directory", app_dirs::get_data_dir()),
		],
		&style::names(),
	);
	Box::leak(banner.into_boxed_str())
}

fn version_banner(version: &str, dirs: &[(&str, Result<PathBuf>)], themes: &[String]) -> String {
	let mut lines = vec![version.to_string(), String::new()];
	lines.extend(dirs.iter().map(|(label, dir)| match dir {
		Ok(path) => format!("{label}: {}", path.display()),
		Err(err) => format!("{label}: unavailable ({err})"),
	}));
	lines.push(format!("themes: {}", themes.join(", ")));
	lines.join("\n")
}

/// Help colours, matching the blue prompt of the default theme.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Blue.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Blue.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::BrightWhite.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::Yellow.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
