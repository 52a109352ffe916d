use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Name of the only option the standard generators read.
pub const LENGTH: &str = "length";

/// A single option value supplied by a caller or declared as a default.
///
/// Integers deserialize as `Number`; any other JSON number (`12.0`, `6.5`)
/// lands in `Float` and is truncated toward zero when read as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
	Flag(bool),
	Number(i64),
	Float(f64),
	Text(String),
}

impl From<i64> for OptionValue {
	fn from(value: i64) -> Self {
		OptionValue::Number(value)
	}
}

impl From<f64> for OptionValue {
	fn from(value: f64) -> Self {
		OptionValue::Float(value)
	}
}

impl From<bool> for OptionValue {
	fn from(value: bool) -> Self {
		OptionValue::Flag(value)
	}
}

impl From<&str> for OptionValue {
	fn from(value: &str) -> Self {
		OptionValue::Text(value.to_owned())
	}
}

/// Option name to value mapping for one generation call.
///
/// Also used for a descriptor's declared defaults. Keys are kept sorted so
/// serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationOptions {
	values: BTreeMap<String, OptionValue>,
}

impl GenerationOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Options with only `length` set.
	pub fn with_length(length: i64) -> Self {
		let mut options = Self::new();
		options.set(LENGTH, length);
		options
	}

	/// Sets (or replaces) an option.
	pub fn set(&mut self, key: &str, value: impl Into<OptionValue>) -> &mut Self {
		self.values.insert(key.to_owned(), value.into());
		self
	}

	pub fn get(&self, key: &str) -> Option<&OptionValue> {
		self.values.get(key)
	}

	/// Returns the option only if it holds a number.
	///
	/// Floats are truncated toward zero (saturating at the `i64` bounds).
	/// Text and flag values are treated as absent.
	pub fn number(&self, key: &str) -> Option<i64> {
		match self.values.get(key) {
			Some(OptionValue::Number(n)) => Some(*n),
			Some(OptionValue::Float(f)) if f.is_finite() => Some(f.trunc() as i64),
			_ => None,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterates over `(name, value)` pairs in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Returns these options layered over `defaults`; values in `self` win.
	pub fn merged_over(&self, defaults: &GenerationOptions) -> GenerationOptions {
		let mut merged = defaults.clone();
		for (key, value) in &self.values {
			merged.values.insert(key.clone(), value.clone());
		}
		merged
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn number_ignores_non_numeric_values() {
		let mut options = GenerationOptions::new();
		options.set("length", "12").set("upper", true).set("count", 3_i64);
		assert_eq!(options.number("length"), None);
		assert_eq!(options.number("upper"), None);
		assert_eq!(options.number("count"), Some(3));
		assert_eq!(options.number("missing"), None);
	}

	#[test]
	fn caller_values_win_when_merged() {
		let defaults = GenerationOptions::with_length(16);
		let mut caller = GenerationOptions::with_length(8);
		caller.set("symbols", false);

		let merged = caller.merged_over(&defaults);
		assert_eq!(merged.number(LENGTH), Some(8));
		assert_eq!(merged.get("symbols"), Some(&OptionValue::Flag(false)));

		let untouched = GenerationOptions::new().merged_over(&defaults);
		assert_eq!(untouched.number(LENGTH), Some(16));
	}

	#[test]
	fn deserializes_plain_json_objects() {
		let options: GenerationOptions =
			serde_json::from_str(r#"{"length": 24, "label": "x", "strict": true}"#).unwrap();
		assert_eq!(options.number("length"), Some(24));
		assert_eq!(options.get("label"), Some(&OptionValue::Text("x".to_owned())));
		assert_eq!(options.get("strict"), Some(&OptionValue::Flag(true)));
		assert_eq!(serde_json::to_string(&GenerationOptions::with_length(4)).unwrap(), r#"{"length":4}"#);
	}

	#[test]
	fn fractional_json_numbers_are_truncated() {
		let options: GenerationOptions =
			serde_json::from_str(r#"{"length": 12.0, "width": 6.9, "depth": -2.5}"#).unwrap();
		assert_eq!(options.get("length"), Some(&OptionValue::Float(12.0)));
		assert_eq!(options.number("length"), Some(12));
		assert_eq!(options.number("width"), Some(6));
		assert_eq!(options.number("depth"), Some(-2));

		let mut options = GenerationOptions::new();
		options.set("nan", f64::NAN);
		assert_eq!(options.number("nan"), None);
	}
}
