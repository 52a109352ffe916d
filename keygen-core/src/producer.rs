use crate::catalog::options::LENGTH;
use crate::catalog::{Catalog, GenerationOptions, GeneratorDescriptor, GeneratorKind};
use crate::entropy::{EntropyKind, EntropySource, SecureEntropy};
use crate::error::{GenerateError, WeakEntropyWarning};
use crate::strategy;

/// Upper bound for any resolved `length` option.
pub const MAX_LENGTH: i64 = 4096;

/// Upper bound for the number of values drawn by one `generate_many` call.
pub const MAX_COUNT: usize = 100;

const COUNT: &str = "count";

/// Fixed length of the random part of an API key.
const API_KEY_LENGTH: usize = 48;
const API_KEY_PREFIX: &str = "sk-";

/// Byte count behind a Next.js auth secret.
const NEXTJS_AUTH_BYTES: usize = 32;

/// What the producer does when handed an insecure entropy source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntropyPolicy {
	/// Refuse to generate (`GenerateError::WeakEntropy`).
	#[default]
	RequireSecure,
	/// Generate, attaching a `WeakEntropyWarning` to the output.
	AllowWeak,
}

/// One generated value.
///
/// Never cached or compared; each call yields a fresh value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
	kind: GeneratorKind,
	value: String,
	entropy: EntropyKind,
}

impl Generated {
	pub fn kind(&self) -> GeneratorKind {
		self.kind
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn into_value(self) -> String {
		self.value
	}

	pub fn entropy(&self) -> EntropyKind {
		self.entropy
	}

	/// Present when the value came from an insecure source.
	pub fn warning(&self) -> Option<WeakEntropyWarning> {
		match self.entropy {
			EntropyKind::Secure => None,
			EntropyKind::Insecure => Some(WeakEntropyWarning {
				generator: self.kind.as_str(),
			}),
		}
	}
}

/// Produces values for the generators of an injected catalog.
///
/// # Responsibilities
/// - Resolve an id against the catalog
/// - Resolve the `length` option (caller → descriptor default → built-in default)
/// - Enforce the entropy policy before drawing
/// - Dispatch to exactly one strategy
#[derive(Debug)]
pub struct Producer<E: EntropySource = SecureEntropy> {
	catalog: Catalog,
	source: E,
	policy: EntropyPolicy,
}

impl Producer<SecureEntropy> {
	/// Producer backed by the operating system CSPRNG.
	pub fn secure(catalog: Catalog) -> Self {
		Self::new(catalog, SecureEntropy::new())
	}
}

impl<E: EntropySource> Producer<E> {
	/// Creates a producer that requires secure entropy.
	pub fn new(catalog: Catalog, source: E) -> Self {
		Self {
			catalog,
			source,
			policy: EntropyPolicy::RequireSecure,
		}
	}

	pub fn with_policy(mut self, policy: EntropyPolicy) -> Self {
		self.policy = policy;
		self
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn entropy_kind(&self) -> EntropyKind {
		self.source.kind()
	}

	/// Generates one value for the generator named `id`.
	///
	/// # Errors
	/// - `UnsupportedGenerator` if `id` is not in the catalog
	/// - `InvalidOption` if `length` resolves below 0 or above `MAX_LENGTH`
	/// - `WeakEntropy` if the source is insecure and the policy requires secure
	pub fn generate(&self, id: &str, options: Option<&GenerationOptions>) -> Result<Generated, GenerateError> {
		let descriptor = self
			.catalog
			.get(id)
			.ok_or_else(|| GenerateError::UnsupportedGenerator(id.to_owned()))?;
		self.generate_descriptor(descriptor, options)
	}

	/// Typed variant of [`Producer::generate`].
	pub fn generate_kind(
		&self,
		kind: GeneratorKind,
		options: Option<&GenerationOptions>,
	) -> Result<Generated, GenerateError> {
		let descriptor = self
			.catalog
			.get_kind(kind)
			.ok_or_else(|| GenerateError::UnsupportedGenerator(kind.as_str().to_owned()))?;
		self.generate_descriptor(descriptor, options)
	}

	/// Generates `count` independent values with the same options.
	///
	/// # Errors
	/// - `InvalidOption` for `count` if it is 0 or above `MAX_COUNT`
	/// - Any error of [`Producer::generate`]
	pub fn generate_many(
		&self,
		id: &str,
		options: Option<&GenerationOptions>,
		count: usize,
	) -> Result<Vec<Generated>, GenerateError> {
		if count == 0 || count > MAX_COUNT {
			return Err(GenerateError::InvalidOption {
				key: COUNT.to_owned(),
				value: i64::try_from(count).unwrap_or(i64::MAX),
				reason: format!("must be between 1 and {MAX_COUNT}"),
			});
		}
		(0..count).map(|_| self.generate(id, options)).collect()
	}

	fn generate_descriptor(
		&self,
		descriptor: &GeneratorDescriptor,
		options: Option<&GenerationOptions>,
	) -> Result<Generated, GenerateError> {
		let kind = descriptor.kind;
		let entropy = self.source.kind();
		if entropy == EntropyKind::Insecure && self.policy == EntropyPolicy::RequireSecure {
			return Err(GenerateError::WeakEntropy(WeakEntropyWarning {
				generator: kind.as_str(),
			}));
		}

		let source = &self.source;
		let value = match kind {
			GeneratorKind::NextjsAuth => strategy::base64_bytes(source, NEXTJS_AUTH_BYTES),
			GeneratorKind::SecureKey => {
				let length = resolve_length(descriptor, options, 32)?;
				strategy::hex_digits(source, length)
			}
			GeneratorKind::ApiKey => {
				let key = strategy::sample_charset(source, strategy::ALPHANUMERIC, API_KEY_LENGTH);
				format!("{API_KEY_PREFIX}{key}")
			}
			GeneratorKind::Password => {
				let length = resolve_length(descriptor, options, 16)?;
				strategy::sample_charset(source, strategy::WITH_SYMBOLS, length)
			}
			GeneratorKind::JwtSecret => {
				let length = resolve_length(descriptor, options, 64)?;
				strategy::hex_digits(source, length)
			}
			GeneratorKind::Uuid => strategy::uuid_v4(source),
			GeneratorKind::RandomString => {
				let length = resolve_length(descriptor, options, 20)?;
				strategy::sample_charset(source, strategy::ALPHANUMERIC, length)
			}
			GeneratorKind::HexColor => strategy::hex_color(source),
			GeneratorKind::Base64 => {
				let length = resolve_length(descriptor, options, 24)?;
				strategy::base64_bytes(source, length)
			}
			GeneratorKind::Alphanumeric => {
				let length = resolve_length(descriptor, options, 16)?;
				strategy::sample_charset(source, strategy::ALPHANUMERIC, length)
			}
			GeneratorKind::Numeric => {
				let length = resolve_length(descriptor, options, 12)?;
				strategy::sample_charset(source, strategy::DIGITS, length)
			}
			GeneratorKind::MacAddress => strategy::mac_address(source),
		};

		Ok(Generated { kind, value, entropy })
	}
}

/// Resolves `length`: numeric caller value, else descriptor default, else `fallback`.
///
/// Caller options are merged over the descriptor defaults; a non-numeric
/// caller value is treated as absent, so the default still applies.
fn resolve_length(
	descriptor: &GeneratorDescriptor,
	options: Option<&GenerationOptions>,
	fallback: i64,
) -> Result<usize, GenerateError> {
	let defaults = descriptor.default_options.clone().unwrap_or_default();
	let merged = match options {
		Some(options) => options.merged_over(&defaults),
		None => defaults.clone(),
	};
	let length = merged
		.number(LENGTH)
		.or_else(|| defaults.number(LENGTH))
		.unwrap_or(fallback);

	if length < 0 {
		return Err(invalid_length(length, "must not be negative".to_owned()));
	}
	if length > MAX_LENGTH {
		return Err(invalid_length(length, format!("must be at most {MAX_LENGTH}")));
	}

	usize::try_from(length).map_err(|e| invalid_length(length, e.to_string()))
}

fn invalid_length(value: i64, reason: String) -> GenerateError {
	GenerateError::InvalidOption {
		key: LENGTH.to_owned(),
		value,
		reason,
	}
}
