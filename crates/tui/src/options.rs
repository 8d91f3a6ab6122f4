//! The fixed option set offered by the combo box.
//!
//! Options are immutable key/value pairs. An [`OptionList`] keeps them in the
//! order they were declared and refuses duplicate keys, so a key always names
//! exactly one option.

use std::collections::HashSet;
use std::ops::Index;

use thiserror::Error;

/// A single selectable entry: a unique numeric key and its display string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComboOption {
	/// Unique identifier of the option.
	pub key: u32,
	/// Text shown to the user and stored as the selection.
	pub value: String,
}

impl ComboOption {
	/// Create a new option.
	#[must_use]
	pub fn new(key: u32, value: impl Into<String>) -> Self {
		Self {
			key,
			value: value.into(),
		}
	}
}

/// Errors raised while assembling an [`OptionList`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionListError {
	/// Two options share the same key.
	#[error("duplicate option key {key} (`{first}` and `{second}`)")]
	DuplicateKey {
		key: u32,
		first: String,
		second: String,
	},
}

/// Ordered, immutable collection of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionList {
	options: Vec<ComboOption>,
}

const BUILTIN: [(u32, &str); 4] = [(1, "Apple"), (2, "Banana"), (3, "Carrot"), (4, "Durian")];

impl OptionList {
	/// Build a list from the provided options, rejecting duplicate keys.
	pub fn new(options: Vec<ComboOption>) -> Result<Self, OptionListError> {
		let mut seen = HashSet::with_capacity(options.len());
		for (index, option) in options.iter().enumerate() {
			if !seen.insert(option.key) {
				let first = options[..index]
					.iter()
					.find(|earlier| earlier.key == option.key)
					.map(|earlier| earlier.value.clone())
					.unwrap_or_default();
				return Err(OptionListError::DuplicateKey {
					key: option.key,
					first,
					second: option.value.clone(),
				});
			}
		}
		tracing::debug!(count = options.len(), "option list assembled");
		Ok(Self { options })
	}

	/// The four options the application ships with.
	#[must_use]
	pub fn builtin() -> Self {
		Self {
			options: BUILTIN
				.iter()
				.map(|(key, value)| ComboOption::new(*key, *value))
				.collect(),
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.options.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&ComboOption> {
		self.options.get(index)
	}

	/// Iterate over the options in declaration order.
	pub fn iter(&self) -> std::slice::Iter<'_, ComboOption> {
		self.options.iter()
	}

	/// Look up an option by its key.
	#[must_use]
	pub fn by_key(&self, key: u32) -> Option<&ComboOption> {
		self.options.iter().find(|option| option.key == key)
	}

	/// Look up an option by its display value.
	#[must_use]
	pub fn by_value(&self, value: &str) -> Option<&ComboOption> {
		self.options.iter().find(|option| option.value == value)
	}
}

impl Default for OptionList {
	fn default() -> Self {
		Self::builtin()
	}
}

impl Index<usize> for OptionList {
	type Output = ComboOption;

	fn index(&self, index: usize) -> &Self::Output {
		&self.options[index]
	}
}

impl<'a> IntoIterator for &'a OptionList {
	type Item = &'a ComboOption;
	type IntoIter = std::slice::Iter<'a, ComboOption>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
