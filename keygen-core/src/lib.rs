//! Random key and identifier generation library.
//!
//! This crate provides a small catalog of value generators including:
//! - Charset-sampled strings (passwords, API keys, numeric codes)
//! - Byte-entropy encodings (hex secrets, Base64 blobs)
//! - Fixed-shape identifiers (UUID v4, hex colors, MAC addresses)
//! - Site metadata for the surfaces built on top (paths, SEO text, sitemap)
//!
//! Randomness is always injected through an [`entropy::EntropySource`];
//! the library never falls back to a weaker source on its own.

/// Generator catalog: identifiers, descriptors and caller options.
pub mod catalog;

/// Entropy sources (secure and explicitly insecure).
pub mod entropy;

/// Error types for catalog construction and generation.
pub mod error;

/// Generation entry point dispatching a generator id to its strategy.
pub mod producer;

/// Slugs, SEO text and sitemap construction.
pub mod site;

/// Low-level generation strategies.
///
/// Not exposed
pub(crate) mod strategy;

pub use catalog::{Catalog, GenerationOptions, GeneratorDescriptor, GeneratorKind, OptionValue};
pub use entropy::{EntropyKind, EntropySource, InsecureEntropy, SecureEntropy};
pub use error::{CatalogError, GenerateError, WeakEntropyWarning};
pub use producer::{EntropyPolicy, Generated, Producer, MAX_COUNT, MAX_LENGTH};
