use std::sync::{Mutex, PoisonError};

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::Serialize;

/// Quality label of an entropy source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntropyKind {
	/// Cryptographically secure, suitable for secrets.
	Secure,
	/// Statistically random only. Never use for secrets.
	Insecure,
}

/// Source of randomness used by every generation strategy.
///
/// There are exactly two implementations: [`SecureEntropy`] and
/// [`InsecureEntropy`]. Callers choose one explicitly; nothing in the crate
/// downgrades from one to the other.
pub trait EntropySource: Send + Sync {
	/// Quality label of this source.
	fn kind(&self) -> EntropyKind;

	/// Fills `dest` with random bytes.
	fn fill_bytes(&self, dest: &mut [u8]);

	/// Returns a uniform integer in `[0, bound)`.
	///
	/// A `bound` of 0 or 1 always yields 0.
	fn index(&self, bound: usize) -> usize;
}

/// Thread-local CSPRNG (ChaCha, reseeded from the operating system).
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureEntropy;

impl SecureEntropy {
	pub fn new() -> Self {
		Self
	}
}

impl EntropySource for SecureEntropy {
	fn kind(&self) -> EntropyKind {
		EntropyKind::Secure
	}

	fn fill_bytes(&self, dest: &mut [u8]) {
		rand::rng().fill_bytes(dest);
	}

	fn index(&self, bound: usize) -> usize {
		if bound <= 1 {
			return 0;
		}
		rand::rng().random_range(0..bound)
	}
}

/// Fast non-cryptographic generator, labeled insecure.
///
/// Intended for tests and reproducible demos: [`InsecureEntropy::seeded`]
/// makes every draw deterministic. Draws are serialized behind a mutex so the
/// source can be shared between threads.
#[derive(Debug)]
pub struct InsecureEntropy {
	rng: Mutex<SmallRng>,
}

impl InsecureEntropy {
	/// Creates an insecure source seeded from the operating system.
	pub fn new() -> Self {
		Self {
			rng: Mutex::new(SmallRng::from_os_rng()),
		}
	}

	/// Creates an insecure source with a fixed seed.
	pub fn seeded(seed: u64) -> Self {
		Self {
			rng: Mutex::new(SmallRng::seed_from_u64(seed)),
		}
	}

	fn with_rng<T>(&self, f: impl FnOnce(&mut SmallRng) -> T) -> T {
		// A panic mid-draw leaves the RNG state valid, so poisoning is ignored
		let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
		f(&mut rng)
	}
}

impl Default for InsecureEntropy {
	fn default() -> Self {
		Self::new()
	}
}

impl EntropySource for InsecureEntropy {
	fn kind(&self) -> EntropyKind {
		EntropyKind::Insecure
	}

	fn fill_bytes(&self, dest: &mut [u8]) {
		self.with_rng(|rng| rng.fill_bytes(dest));
	}

	fn index(&self, bound: usize) -> usize {
		if bound <= 1 {
			return 0;
		}
		self.with_rng(|rng| rng.random_range(0..bound))
	}
}

impl<E: EntropySource + ?Sized> EntropySource for Box<E> {
	fn kind(&self) -> EntropyKind {
		(**self).kind()
	}

	fn fill_bytes(&self, dest: &mut [u8]) {
		(**self).fill_bytes(dest);
	}

	fn index(&self, bound: usize) -> usize {
		(**self).index(bound)
	}
}
