use serde::Serialize;

use crate::catalog::kind::GeneratorKind;
use crate::catalog::options::GenerationOptions;

/// Immutable metadata for one generator.
///
/// # Invariants
/// - `default_options` is `None` for generators that take no options
/// - Built once with the catalog and never mutated afterwards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorDescriptor {
	/// Identifier, serialized as its string id.
	#[serde(rename = "id")]
	pub kind: GeneratorKind,

	/// Display title.
	pub title: String,

	/// One-line display description.
	pub description: String,

	/// Defaults the generator reads when the caller omits an option.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default_options: Option<GenerationOptions>,
}

impl GeneratorDescriptor {
	pub fn new(kind: GeneratorKind, title: &str, description: &str) -> Self {
		Self {
			kind,
			title: title.to_owned(),
			description: description.to_owned(),
			default_options: None,
		}
	}

	/// Declares a default `length`.
	pub fn with_default_length(mut self, length: i64) -> Self {
		self.default_options = Some(GenerationOptions::with_length(length));
		self
	}

	pub fn id(&self) -> &'static str {
		self.kind.as_str()
	}

	pub fn path(&self) -> &'static str {
		self.kind.path()
	}

	/// Whether the generator exposes any options.
	pub fn takes_options(&self) -> bool {
		self.default_options.as_ref().is_some_and(|o| !o.is_empty())
	}
}
