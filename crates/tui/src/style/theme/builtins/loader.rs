//! Parses the embedded theme files.
//!
//! Each file names a theme and spells out its six styles as short strings:
//!
//! ```toml
//! name = "slate"
//! aliases = ["dark"]
//! default = true
//!
//! [styles]
//! header = "bold #c0caf5"
//! row_highlight = "#e0af68 on #292e42"
//! ```
//!
//! A style string is a list of words. `on <colour>` sets the background, a
//! ratatui modifier name (`bold`, `italic`, ...) adds that modifier, and the
//! one remaining colour is the foreground. Colours are anything
//! [`Color`]'s `FromStr` accepts: names, `#rrggbb` and ANSI indices.

use anyhow::{Context, Result, bail};
use include_dir::Dir;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use thiserror::Error;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeStyles {
	header: StyleSpec,
	row_highlight: StyleSpec,
	prompt: StyleSpec,
	empty: StyleSpec,
	highlight: StyleSpec,
	selection: StyleSpec,
}

impl From<ThemeStyles> for Theme {
	fn from(styles: ThemeStyles) -> Self {
		Theme {
			header: styles.header.0,
			row_highlight: styles.row_highlight.0,
			prompt: styles.prompt.0,
			empty: styles.empty.0,
			highlight: styles.highlight.0,
			selection: styles.selection.0,
		}
	}
}

/// A style written as a single string in a theme file.
#[derive(Debug, Deserialize)]
#[serde(try_from = "String")]
struct StyleSpec(Style);

impl TryFrom<String> for StyleSpec {
	type Error = StyleSpecError;

	fn try_from(spec: String) -> Result<Self, Self::Error> {
		parse_style(&spec).map(Self)
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(super) enum StyleSpecError {
	#[error("`{0}` is neither a colour nor a modifier")]
	UnknownWord(String),
	#[error("`on` must be followed by a background colour")]
	MissingBackground,
	#[error("a second foreground colour `{0}` was given")]
	SecondForeground(String),
}

fn parse_style(spec: &str) -> Result<Style, StyleSpecError> {
	let mut style = Style::new();
	let mut words = spec.split_whitespace();
	while let Some(word) = words.next() {
		if word.eq_ignore_ascii_case("on") {
			let background = words.next().ok_or(StyleSpecError::MissingBackground)?;
			style = style.bg(parse_colour(background)?);
		} else if let Some(modifier) = Modifier::from_name(&word.to_ascii_uppercase()) {
			style = style.add_modifier(modifier);
		} else if style.fg.is_some() {
			return Err(StyleSpecError::SecondForeground(word.to_string()));
		} else {
			style = style.fg(parse_colour(word)?);
		}
	}
	Ok(style)
}

fn parse_colour(word: &str) -> Result<Color, StyleSpecError> {
	word.parse()
		.map_err(|_| StyleSpecError::UnknownWord(word.to_string()))
}

fn parse_theme_file(contents: &str) -> Result<ThemeFile> {
	Ok(toml::from_str(contents)?)
}

impl ThemeFile {
	fn into_registration(self) -> ThemeRegistration {
		let mut registration = ThemeRegistration::new(self.name, self.styles.into());
		registration.aliases = self
			.aliases
			.into_iter()
			.filter(|alias| !alias.trim().is_empty())
			.collect();
		registration
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let themes = files
		.into_iter()
		.map(|file| {
			let path = file.path().display();
			let contents = file
				.contents_utf8()
				.with_context(|| format!("{path} is not valid UTF-8"))?;
			parse_theme_file(contents).with_context(|| format!("invalid theme file {path}"))
		})
		.collect::<Result<Vec<_>>>()?;
	register(themes)
}

/// Register every parsed theme and pick the default: the one marked
/// `default = true`, or the first when none is.
fn register(themes: Vec<ThemeFile>) -> Result<BuiltinThemes> {
	let marked: Vec<&str> = themes
		.iter()
		.filter(|theme| theme.default)
		.map(|theme| theme.name.as_str())
		.collect();
	if marked.len() > 1 {
		bail!("several built-in themes claim to be the default: {}", marked.join(", "));
	}
	let default_index = themes.iter().position(|theme| theme.default).unwrap_or(0);

	let registrations: Vec<_> = themes
		.into_iter()
		.map(ThemeFile::into_registration)
		.collect();
	let Some(default) = registrations.get(default_index) else {
		bail!("no built-in themes are bundled");
	};
	let default_theme = default.theme;

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	const MONO: &str = r##"
name = "mono"
aliases = ["plain", "  "]

[styles]
header = "bold"
row_highlight = "reversed"
prompt = "blue"
empty = "darkgray italic"
highlight = "#ffaa00 on black"
selection = "28"
"##;

	#[test]
	fn style_words_combine() {
		let style = parse_style("bold #ffaa00 on 236 underlined").expect("style");
		assert_eq!(style.fg, Some(Color::Rgb(255, 170, 0)));
		assert_eq!(style.bg, Some(Color::Indexed(236)));
		assert!(style.add_modifier.contains(Modifier::BOLD | Modifier::UNDERLINED));
		assert_eq!(parse_style("").expect("empty"), Style::new());
	}

	#[test]
	fn malformed_styles_are_rejected() {
		assert_eq!(
			parse_style("chartreuse"),
			Err(StyleSpecError::UnknownWord("chartreuse".into()))
		);
		assert_eq!(parse_style("red on"), Err(StyleSpecError::MissingBackground));
		assert_eq!(
			parse_style("red blue"),
			Err(StyleSpecError::SecondForeground("blue".into()))
		);
	}

	#[test]
	fn theme_file_becomes_a_registration() {
		let registration = parse_theme_file(MONO).expect("parse").into_registration();
		assert_eq!(registration.name, "mono");
		assert_eq!(registration.aliases, vec!["plain".to_string()]);
		let theme = registration.theme;
		assert_eq!(theme.prompt.fg, Some(Color::Blue));
		assert_eq!(theme.empty.fg, Some(Color::DarkGray));
		assert_eq!(theme.highlight.bg, Some(Color::Black));
		assert_eq!(theme.selection.fg, Some(Color::Indexed(28)));
	}

	#[test]
	fn missing_style_is_an_error() {
		let incomplete = MONO.replace("selection = \"28\"\n", "");
		assert!(parse_theme_file(&incomplete).is_err());
	}

	#[test]
	fn unmarked_themes_default_to_the_first() {
		let first = parse_theme_file(MONO).expect("parse");
		let second = parse_theme_file(&MONO.replace("\"mono\"", "\"other\"")).expect("parse");
		let expected = Theme::from(parse_theme_file(MONO).expect("parse").styles);
		let themes = register(vec![first, second]).expect("register");
		assert_eq!(themes.default_theme, expected);
		assert_eq!(themes.registrations.len(), 2);
	}

	#[test]
	fn only_one_theme_may_be_the_default() {
		let marked = MONO.replacen("name = \"mono\"", "name = \"mono\"\ndefault = true", 1);
		let first = parse_theme_file(&marked).expect("parse");
		let second = parse_theme_file(&marked).expect("parse");
		assert!(register(vec![first, second]).is_err());
		assert!(register(Vec::new()).is_err());
	}
}
