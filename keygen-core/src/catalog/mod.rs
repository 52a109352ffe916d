//! Generator catalog.
//!
//! This module provides:
//! - The closed set of generator identifiers (`GeneratorKind`)
//! - Immutable generator metadata (`GeneratorDescriptor`)
//! - Caller-supplied options (`GenerationOptions`)
//! - The ordered, validated registry (`Catalog`)

/// Immutable generator metadata.
pub mod descriptor;

/// Generator identifiers and their URL paths.
pub mod kind;

/// Option values supplied by callers or declared as defaults.
pub mod options;

use std::collections::HashSet;

use crate::error::CatalogError;

pub use descriptor::GeneratorDescriptor;
pub use kind::GeneratorKind;
pub use options::{GenerationOptions, OptionValue};

/// Fixed, ordered registry of generator descriptors.
///
/// # Responsibilities
/// - Validate the descriptor list once, at construction
/// - Resolve ids to descriptors and paths
/// - Expose the primary (first) generator
///
/// # Invariants
/// - Never empty
/// - No two descriptors share an id
#[derive(Debug, Clone)]
pub struct Catalog {
	generators: Vec<GeneratorDescriptor>,
}

impl Catalog {
	/// Builds a catalog from descriptors, keeping their order.
	///
	/// # Errors
	/// - `CatalogError::Empty` if `generators` is empty
	/// - `CatalogError::DuplicateId` if an id appears twice
	pub fn new(generators: Vec<GeneratorDescriptor>) -> Result<Self, CatalogError> {
		if generators.is_empty() {
			return Err(CatalogError::Empty);
		}

		let mut seen = HashSet::new();
		for generator in &generators {
			if !seen.insert(generator.kind) {
				return Err(CatalogError::DuplicateId(generator.id().to_owned()));
			}
		}

		Ok(Self { generators })
	}

	/// The twelve standard generators, in display order.
	pub fn standard() -> Self {
		let generators = vec![
			GeneratorDescriptor::new(
				GeneratorKind::NextjsAuth,
				"Next.js Auth Secret Generator",
				"Generate secure authentication secrets for Next.js applications",
			),
			GeneratorDescriptor::new(
				GeneratorKind::SecureKey,
				"Secure & Strong Secret Key Generator",
				"Generate cryptographically secure secret keys with customizable length",
			)
			.with_default_length(32),
			GeneratorDescriptor::new(
				GeneratorKind::ApiKey,
				"Random API Key Generator",
				"Generate random API keys for your applications",
			),
			GeneratorDescriptor::new(
				GeneratorKind::Password,
				"Random Password Generator",
				"Generate strong random passwords with mixed characters",
			)
			.with_default_length(16),
			GeneratorDescriptor::new(
				GeneratorKind::JwtSecret,
				"Random JWT Secret Generator",
				"Generate secure secrets for JWT token signing",
			)
			.with_default_length(64),
			GeneratorDescriptor::new(
				GeneratorKind::Uuid,
				"Random UUID Generator",
				"Generate RFC 4122 compliant universally unique identifiers",
			),
			GeneratorDescriptor::new(
				GeneratorKind::RandomString,
				"Random String Generator",
				"Generate random strings for various purposes",
			)
			.with_default_length(20),
			GeneratorDescriptor::new(
				GeneratorKind::HexColor,
				"Random Hex Color Generator",
				"Generate random hexadecimal color codes",
			),
			GeneratorDescriptor::new(
				GeneratorKind::Base64,
				"Random Base64 String Generator",
				"Generate random Base64 encoded strings",
			)
			.with_default_length(24),
			GeneratorDescriptor::new(
				GeneratorKind::Alphanumeric,
				"Random Alphanumeric String Generator",
				"Generate random strings with letters and numbers only",
			)
			.with_default_length(16),
			GeneratorDescriptor::new(
				GeneratorKind::Numeric,
				"Random Numeric String Generator",
				"Generate random numeric strings",
			)
			.with_default_length(12),
			GeneratorDescriptor::new(
				GeneratorKind::MacAddress,
				"Random MAC Address Generator",
				"Generate random MAC addresses in standard format",
			),
		];

		Self { generators }
	}

	/// All descriptors, in catalog order.
	pub fn list(&self) -> &[GeneratorDescriptor] {
		&self.generators
	}

	/// Looks up a descriptor by string id.
	///
	/// Returns `None` for unknown ids and for valid kinds this catalog omits.
	pub fn get(&self, id: &str) -> Option<&GeneratorDescriptor> {
		self.generators.iter().find(|g| g.id() == id)
	}

	pub fn get_kind(&self, kind: GeneratorKind) -> Option<&GeneratorDescriptor> {
		self.generators.iter().find(|g| g.kind == kind)
	}

	/// First descriptor in catalog order.
	pub fn primary(&self) -> &GeneratorDescriptor {
		// Non-empty by construction
		&self.generators[0]
	}

	/// Canonical URL path for a catalog id.
	pub fn path_for(&self, id: &str) -> Option<&'static str> {
		self.get(id).map(GeneratorDescriptor::path)
	}

	pub fn len(&self) -> usize {
		self.generators.len()
	}

	/// Always `false`; present for API symmetry with `len`.
	pub fn is_empty(&self) -> bool {
		self.generators.is_empty()
	}
}

impl Default for Catalog {
	fn default() -> Self {
		Self::standard()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn standard_catalog_covers_every_kind_in_order() {
		let catalog = Catalog::standard();
		let kinds: Vec<_> = catalog.list().iter().map(|g| g.kind).collect();
		assert_eq!(kinds, GeneratorKind::ALL.to_vec());
		assert!(Catalog::new(catalog.list().to_vec()).is_ok());
	}

	#[test]
	fn primary_is_nextjs_auth() {
		assert_eq!(Catalog::standard().primary().id(), "nextjs-auth");
	}

	#[test]
	fn lookup_misses_return_none() {
		let catalog = Catalog::standard();
		assert!(catalog.get("nonexistent").is_none());
		assert!(catalog.path_for("nonexistent").is_none());
		assert_eq!(catalog.get("uuid").map(|g| g.title.as_str()), Some("Random UUID Generator"));
	}

	#[test]
	fn empty_catalog_is_rejected() {
		assert_eq!(Catalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let generators = vec![
			GeneratorDescriptor::new(GeneratorKind::Uuid, "a", "a"),
			GeneratorDescriptor::new(GeneratorKind::HexColor, "b", "b"),
			GeneratorDescriptor::new(GeneratorKind::Uuid, "c", "c"),
		];
		assert_eq!(Catalog::new(generators).unwrap_err(), CatalogError::DuplicateId("uuid".to_owned()));
	}

	#[test]
	fn subset_catalog_keeps_its_own_order() {
		let catalog = Catalog::new(vec![
			GeneratorDescriptor::new(GeneratorKind::MacAddress, "MAC", "mac"),
			GeneratorDescriptor::new(GeneratorKind::Password, "Password", "pw").with_default_length(10),
		])
		.unwrap();
		assert_eq!(catalog.primary().kind, GeneratorKind::MacAddress);
		assert!(catalog.get("uuid").is_none());
		assert_eq!(catalog.path_for("password"), Some("/random-password-generator"));
		assert!(catalog.list()[1].takes_options());
		assert!(!catalog.list()[0].takes_options());
	}

	#[test]
	fn every_catalog_id_has_a_path() {
		let catalog = Catalog::standard();
		for generator in catalog.list() {
			assert!(catalog.path_for(generator.id()).is_some());
		}
	}
}
