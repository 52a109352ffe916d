use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Closed set of generator identifiers.
///
/// The string form (`as_str`) is the stable id used by every surface.
/// Adding a variant forces every `match` over the kind (strategy dispatch,
/// path table) to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneratorKind {
	#[serde(rename = "nextjs-auth")]
	NextjsAuth,
	#[serde(rename = "secure-key")]
	SecureKey,
	#[serde(rename = "api-key")]
	ApiKey,
	#[serde(rename = "password")]
	Password,
	#[serde(rename = "jwt-secret")]
	JwtSecret,
	#[serde(rename = "uuid")]
	Uuid,
	#[serde(rename = "random-string")]
	RandomString,
	#[serde(rename = "hex-color")]
	HexColor,
	#[serde(rename = "base64")]
	Base64,
	#[serde(rename = "alphanumeric")]
	Alphanumeric,
	#[serde(rename = "numeric")]
	Numeric,
	#[serde(rename = "mac-address")]
	MacAddress,
}

impl GeneratorKind {
	/// Every kind, in standard catalog order.
	pub const ALL: [GeneratorKind; 12] = [
		GeneratorKind::NextjsAuth,
		GeneratorKind::SecureKey,
		GeneratorKind::ApiKey,
		GeneratorKind::Password,
		GeneratorKind::JwtSecret,
		GeneratorKind::Uuid,
		GeneratorKind::RandomString,
		GeneratorKind::HexColor,
		GeneratorKind::Base64,
		GeneratorKind::Alphanumeric,
		GeneratorKind::Numeric,
		GeneratorKind::MacAddress,
	];

	/// Stable string id.
	pub fn as_str(self) -> &'static str {
		match self {
			GeneratorKind::NextjsAuth => "nextjs-auth",
			GeneratorKind::SecureKey => "secure-key",
			GeneratorKind::ApiKey => "api-key",
			GeneratorKind::Password => "password",
			GeneratorKind::JwtSecret => "jwt-secret",
			GeneratorKind::Uuid => "uuid",
			GeneratorKind::RandomString => "random-string",
			GeneratorKind::HexColor => "hex-color",
			GeneratorKind::Base64 => "base64",
			GeneratorKind::Alphanumeric => "alphanumeric",
			GeneratorKind::Numeric => "numeric",
			GeneratorKind::MacAddress => "mac-address",
		}
	}

	/// Canonical URL path of the generator's page.
	pub fn path(self) -> &'static str {
		match self {
			GeneratorKind::NextjsAuth => "/next-js-auth-secret-generator",
			GeneratorKind::SecureKey => "/secure-strong-secret-key-generator",
			GeneratorKind::ApiKey => "/random-api-key-generator",
			GeneratorKind::Password => "/random-password-generator",
			GeneratorKind::JwtSecret => "/random-jwt-secret-generator",
			GeneratorKind::Uuid => "/random-uuid-generator",
			GeneratorKind::RandomString => "/random-string-generator",
			GeneratorKind::HexColor => "/random-hex-color-generator",
			GeneratorKind::Base64 => "/random-base64-string-generator",
			GeneratorKind::Alphanumeric => "/random-alphanumeric-string-generator",
			GeneratorKind::Numeric => "/random-numeric-string-generator",
			GeneratorKind::MacAddress => "/random-mac-address-generator",
		}
	}
}

impl fmt::Display for GeneratorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for GeneratorKind {
	type Err = GenerateError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		GeneratorKind::ALL
			.into_iter()
			.find(|kind| kind.as_str() == s)
			.ok_or_else(|| GenerateError::UnsupportedGenerator(s.to_owned()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn ids_round_trip_through_from_str() {
		for kind in GeneratorKind::ALL {
			assert_eq!(kind.as_str().parse::<GeneratorKind>(), Ok(kind));
		}
	}

	#[test]
	fn unknown_id_is_unsupported() {
		assert_eq!(
			"nonexistent".parse::<GeneratorKind>(),
			Err(GenerateError::UnsupportedGenerator("nonexistent".to_owned()))
		);
	}

	#[test]
	fn ids_and_paths_are_unique() {
		let ids: HashSet<_> = GeneratorKind::ALL.iter().map(|k| k.as_str()).collect();
		let paths: HashSet<_> = GeneratorKind::ALL.iter().map(|k| k.path()).collect();
		assert_eq!(ids.len(), GeneratorKind::ALL.len());
		assert_eq!(paths.len(), GeneratorKind::ALL.len());
		assert!(paths.iter().all(|p| p.starts_with('/') && p.ends_with("-generator")));
	}

	#[test]
	fn serde_uses_string_id() {
		let json = serde_json::to_string(&GeneratorKind::MacAddress).unwrap();
		assert_eq!(json, "\"mac-address\"");
		let kind: GeneratorKind = serde_json::from_str("\"jwt-secret\"").unwrap();
		assert_eq!(kind, GeneratorKind::JwtSecret);
	}
}
