//! Query matching over the option list.
//!
//! Matching always compares the query against an option's display value.
//! Substring and prefix modes keep declaration order; fuzzy mode delegates to
//! frizbee and orders hits by score.

use frizbee::{Config, match_indices, match_list};

use crate::options::OptionList;

/// How the typed query is compared against option values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
	/// The value contains the query anywhere.
	#[default]
	Substring,
	/// The value starts with the query.
	Prefix,
	/// Typo-tolerant fuzzy matching.
	Fuzzy,
}

impl MatchMode {
	/// Every supported mode, in the order they are documented.
	pub const ALL: [MatchMode; 3] = [MatchMode::Substring, MatchMode::Prefix, MatchMode::Fuzzy];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			MatchMode::Substring => "substring",
			MatchMode::Prefix => "prefix",
			MatchMode::Fuzzy => "fuzzy",
		}
	}

	/// Parse a mode name, ignoring case and surrounding whitespace.
	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		let name = name.trim();
		Self::ALL
			.into_iter()
			.find(|mode| mode.as_str().eq_ignore_ascii_case(name))
	}
}

/// Filtering policy handed to the combo box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterPolicy {
	pub mode: MatchMode,
	/// Only honoured by substring and prefix matching.
	pub case_sensitive: bool,
}

impl FilterPolicy {
	#[must_use]
	pub fn new(mode: MatchMode, case_sensitive: bool) -> Self {
		Self {
			mode,
			case_sensitive,
		}
	}
}

/// A single option that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionMatch {
	/// Position of the option within the [`OptionList`].
	pub index: usize,
	pub score: u16,
	/// Character positions in the value that matched the query.
	pub positions: Vec<usize>,
}

impl OptionMatch {
	fn unscored(index: usize) -> Self {
		Self {
			index,
			score: 0,
			positions: Vec::new(),
		}
	}
}

/// Filter `options` against `query` using `policy`.
///
/// An empty (or all-whitespace) query keeps every option in list order.
#[must_use]
pub fn filter_options(options: &OptionList, query: &str, policy: FilterPolicy) -> Vec<OptionMatch> {
	let query = query.trim();
	if query.is_empty() {
		return (0..options.len()).map(OptionMatch::unscored).collect();
	}

	let matches = match policy.mode {
		MatchMode::Substring | MatchMode::Prefix => literal_matches(options, query, policy),
		MatchMode::Fuzzy => fuzzy_matches(options, query),
	};
	tracing::debug!(
		query,
		mode = policy.mode.as_str(),
		hits = matches.len(),
		"filtered options"
	);
	matches
}

fn literal_matches(options: &OptionList, query: &str, policy: FilterPolicy) -> Vec<OptionMatch> {
	let needle: Vec<char> = query.chars().collect();
	let anchored = policy.mode == MatchMode::Prefix;

	options
		.iter()
		.enumerate()
		.filter_map(|(index, option)| {
			let haystack: Vec<char> = option.value.chars().collect();
			let start = find_chars(&haystack, &needle, anchored, policy.case_sensitive)?;
			Some(OptionMatch {
				index,
				score: u16::try_from(needle.len()).unwrap_or(u16::MAX),
				positions: (start..start + needle.len()).collect(),
			})
		})
		.collect()
}

/// Return the char offset at which `needle` occurs in `haystack`.
fn find_chars(haystack: &[char], needle: &[char], anchored: bool, case_sensitive: bool) -> Option<usize> {
	if needle.len() > haystack.len() {
		return None;
	}
	let last_start = if anchored {
		0
	} else {
		haystack.len() - needle.len()
	};
	(0..=last_start).find(|&start| {
		haystack[start..start + needle.len()]
			.iter()
			.zip(needle)
			.all(|(&h, &n)| chars_equal(h, n, case_sensitive))
	})
}

fn chars_equal(a: char, b: char, case_sensitive: bool) -> bool {
	if a == b {
		return true;
	}
	!case_sensitive && a.to_lowercase().eq(b.to_lowercase())
}

/// Builds frizbee options for a query over a small, fixed dataset.
fn fuzzy_config() -> Config {
	let mut config = Config {
		prefilter: false,
		..Config::default()
	};
	config.max_typos = None;
	config.sort = false;
	config
}

fn fuzzy_matches(options: &OptionList, query: &str) -> Vec<OptionMatch> {
	let config = fuzzy_config();
	let haystacks: Vec<&str> = options.iter().map(|option| option.value.as_str()).collect();

	let mut matches: Vec<OptionMatch> = match_list(query, &haystacks, &config)
		.into_iter()
		.filter(|entry| entry.score > 0)
		.map(|entry| {
			let index = entry.index as usize;
			let positions = haystacks
				.get(index)
				.map(|value| fuzzy_positions(query, value, &config))
				.unwrap_or_default();
			OptionMatch {
				index,
				score: entry.score,
				positions,
			}
		})
		.collect();

	matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.index.cmp(&b.index)));
	matches
}

fn fuzzy_positions(query: &str, value: &str, config: &Config) -> Vec<usize> {
	match_indices(query, value, config)
		.map(|found| char_positions(value, &found.indices))
		.unwrap_or_default()
}

/// Positions of the chars in `value` that start at one of `byte_offsets`.
fn char_positions(value: &str, byte_offsets: &[usize]) -> Vec<usize> {
	value
		.char_indices()
		.enumerate()
		.filter(|(_, (byte, _))| byte_offsets.contains(byte))
		.map(|(position, _)| position)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::options::ComboOption;

	fn values(options: &OptionList, matches: &[OptionMatch]) -> Vec<String> {
		matches
			.iter()
			.map(|hit| options[hit.index].value.clone())
			.collect()
	}

	#[test]
	fn empty_query_keeps_every_option_in_order() {
		let options = OptionList::builtin();
		for mode in MatchMode::ALL {
			let matches = filter_options(&options, "   ", FilterPolicy::new(mode, false));
			assert_eq!(
				values(&options, &matches),
				vec!["Apple", "Banana", "Carrot", "Durian"]
			);
		}
	}

	#[test]
	fn substring_matching_ignores_case_by_default() {
		let options = OptionList::builtin();
		let matches = filter_options(&options, "AN", FilterPolicy::default());
		assert_eq!(values(&options, &matches), vec!["Banana", "Durian"]);
		assert_eq!(matches[0].positions, vec![1, 2]);
		assert_eq!(matches[1].positions, vec![4, 5]);
	}

	#[test]
	fn case_sensitive_substring_requires_exact_case() {
		let options = OptionList::builtin();
		let policy = FilterPolicy::new(MatchMode::Substring, true);
		assert!(filter_options(&options, "apple", policy).is_empty());
		let matches = filter_options(&options, "App", policy);
		assert_eq!(values(&options, &matches), vec!["Apple"]);
	}

	#[test]
	fn prefix_matching_anchors_at_start() {
		let options = OptionList::builtin();
		let policy = FilterPolicy::new(MatchMode::Prefix, false);
		assert!(filter_options(&options, "an", policy).is_empty());
		let matches = filter_options(&options, "ca", policy);
		assert_eq!(values(&options, &matches), vec!["Carrot"]);
		assert_eq!(matches[0].positions, vec![0, 1]);
	}

	#[test]
	fn unmatched_query_yields_nothing() {
		let options = OptionList::builtin();
		assert!(filter_options(&options, "zz", FilterPolicy::default()).is_empty());
	}

	#[test]
	fn query_longer_than_value_does_not_match() {
		let options = OptionList::new(vec![ComboOption::new(1, "Fig")]).expect("options");
		assert!(filter_options(&options, "Figs", FilterPolicy::default()).is_empty());
	}

	#[test]
	fn non_ascii_values_report_char_positions() {
		let options =
			OptionList::new(vec![ComboOption::new(1, "Crème brûlée")]).expect("options");
		let matches = filter_options(&options, "BRÛ", FilterPolicy::default());
		assert_eq!(matches.len(), 1);
		assert_eq!(matches[0].positions, vec![6, 7, 8]);
	}

	fn fuzzy(case_sensitive: bool) -> FilterPolicy {
		FilterPolicy::new(MatchMode::Fuzzy, case_sensitive)
	}

	#[test]
	fn fuzzy_matching_finds_exact_values() {
		let options = OptionList::builtin();
		let matches = filter_options(&options, "durian", fuzzy(false));
		assert_eq!(values(&options, &matches).first().map(String::as_str), Some("Durian"));
		assert!(matches.windows(2).all(|pair| pair[0].score >= pair[1].score));
	}

	#[test]
	fn fuzzy_ties_keep_list_order() {
		let options = OptionList::new(vec![
			ComboOption::new(8, "Plum"),
			ComboOption::new(2, "Pear"),
			ComboOption::new(5, "Plum"),
		])
		.expect("options");
		let matches = filter_options(&options, "plum", fuzzy(false));
		let plums: Vec<usize> = matches
			.iter()
			.filter(|hit| options[hit.index].value == "Plum")
			.map(|hit| hit.index)
			.collect();
		assert_eq!(plums, vec![0, 2]);
		assert_eq!(matches[0].score, matches[1].score);
	}

	#[test]
	fn fuzzy_drops_options_without_a_score() {
		let options = OptionList::builtin();
		assert!(filter_options(&options, "qqq", fuzzy(false)).is_empty());
		let matches = filter_options(&options, "an", fuzzy(false));
		assert!(!matches.is_empty());
		assert!(matches.iter().all(|hit| hit.score > 0));
	}

	#[test]
	fn fuzzy_ignores_the_case_flag() {
		let options = OptionList::builtin();
		let insensitive = filter_options(&options, "CARROT", fuzzy(false));
		let sensitive = filter_options(&options, "CARROT", fuzzy(true));
		assert_eq!(insensitive, sensitive);
		assert_eq!(values(&options, &sensitive).first().map(String::as_str), Some("Carrot"));
	}

	#[test]
	fn byte_offsets_map_to_char_positions() {
		// C r è(2 bytes) m e ' ' b r û(2 bytes) l é(2 bytes) e
		let value = "Crème brûlée";
		assert_eq!(char_positions(value, &[0, 2, 4]), vec![0, 2, 3]);
		assert_eq!(char_positions(value, &[7, 8, 9, 11, 12, 14]), vec![6, 7, 8, 9, 10, 11]);
		// A continuation byte never starts a char.
		assert!(char_positions(value, &[3]).is_empty());
	}

	#[test]
	fn fuzzy_positions_point_at_chars_of_non_ascii_values() {
		let options =
			OptionList::new(vec![ComboOption::new(1, "Crème brûlée")]).expect("options");
		let matches = filter_options(&options, "brûlée", fuzzy(false));
		assert_eq!(matches.len(), 1);
		let chars: Vec<char> = options[0].value.chars().collect();
		let matched: String = matches[0]
			.positions
			.iter()
			.map(|&position| chars[position])
			.collect();
		assert_eq!(matched, "brûlée");
	}

	#[test]
	fn match_modes_parse_from_names() {
		assert_eq!(MatchMode::from_name(" Fuzzy "), Some(MatchMode::Fuzzy));
		assert_eq!(MatchMode::from_name("prefix"), Some(MatchMode::Prefix));
		assert_eq!(MatchMode::from_name("regex"), None);
	}
}
