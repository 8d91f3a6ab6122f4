use std::fmt;

/// The single current choice held by the root view.
///
/// Empty until the user picks an option, after which it stores that option's
/// display value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
	value: String,
}

impl Selection {
	#[must_use]
	pub fn empty() -> Self {
		Self::default()
	}

	/// Replace the current value. An empty string clears the selection.
	pub fn set(&mut self, value: impl Into<String>) {
		self.value = value.into();
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.value.is_empty()
	}

	/// The selected value, or `""` when nothing is selected.
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.value
	}

	#[must_use]
	pub fn value(&self) -> Option<&str> {
		(!self.value.is_empty()).then_some(self.value.as_str())
	}
}

impl fmt::Display for Selection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.value)
	}
}
