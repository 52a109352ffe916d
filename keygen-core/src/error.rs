use std::fmt;

use thiserror::Error;

/// Signals that a value was (or would be) drawn from a non-cryptographic source.
///
/// Carried on [`crate::Generated`] when weak entropy is allowed, and wrapped in
/// [`GenerateError::WeakEntropy`] when it is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeakEntropyWarning {
	/// Generator that requested the draw.
	pub generator: &'static str,
}

impl fmt::Display for WeakEntropyWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"'{}' drew from an insecure entropy source; do not use the value as a secret",
			self.generator
		)
	}
}

/// Errors raised while building a [`crate::Catalog`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
	/// A catalog needs at least one entry to have a primary generator.
	#[error("catalog must contain at least one generator")]
	Empty,

	/// Two descriptors share the same id.
	#[error("duplicate generator id: {0}")]
	DuplicateId(String),
}

/// Errors raised by a single generation call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
	/// The id does not name a generator (or is not in the injected catalog).
	#[error("unsupported generator: {0}")]
	UnsupportedGenerator(String),

	/// A numeric option resolved to a value outside the accepted range.
	#[error("invalid option '{key}' = {value}: {reason}")]
	InvalidOption {
		key: String,
		value: i64,
		reason: String,
	},

	/// The producer requires secure entropy but was given an insecure source.
	#[error("weak entropy rejected: {0}")]
	WeakEntropy(WeakEntropyWarning),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_offending_input() {
		let err = GenerateError::UnsupportedGenerator("nope".to_owned());
		assert_eq!(err.to_string(), "unsupported generator: nope");

		let err = GenerateError::InvalidOption {
			key: "length".to_owned(),
			value: -3,
			reason: "must not be negative".to_owned(),
		};
		assert_eq!(err.to_string(), "invalid option 'length' = -3: must not be negative");
	}

	#[test]
	fn weak_entropy_warning_names_generator() {
		let warning = WeakEntropyWarning { generator: "password" };
		assert!(warning.to_string().starts_with("'password'"));
		assert!(GenerateError::WeakEntropy(warning).to_string().contains("insecure"));
	}
}
