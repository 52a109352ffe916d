//! Generation strategies shared by the producer.
//!
//! Every function draws exclusively from the given entropy source.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use uuid::Builder;

use crate::entropy::EntropySource;

pub(crate) const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
	abcdefghijklmnopqrstuvwxyz\
	0123456789";

pub(crate) const WITH_SYMBOLS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
	abcdefghijklmnopqrstuvwxyz\
	0123456789\
	!@#$%^&*()_+-=[]{}|;:,.<>?";

pub(crate) const DIGITS: &[u8] = b"0123456789";

pub(crate) const HEX_UPPER: &[u8] = b"0123456789ABCDEF";

/// Largest value of a 24-bit RGB color.
const MAX_COLOR: usize = 0xFF_FFFF;

/// Samples `length` characters independently and with replacement from `charset`.
pub(crate) fn sample_charset<E: EntropySource + ?Sized>(source: &E, charset: &[u8], length: usize) -> String {
	(0..length)
		.map(|_| charset[source.index(charset.len())] as char)
		.collect()
}

fn random_bytes<E: EntropySource + ?Sized>(source: &E, count: usize) -> Vec<u8> {
	let mut bytes = vec![0u8; count];
	source.fill_bytes(&mut bytes);
	bytes
}

/// `count` random bytes as standard, padded Base64.
pub(crate) fn base64_bytes<E: EntropySource + ?Sized>(source: &E, count: usize) -> String {
	STANDARD.encode(random_bytes(source, count))
}

/// Exactly `length` lowercase hex digits.
///
/// Draws `ceil(length / 2)` bytes; for odd lengths the low nibble of the last
/// byte is discarded, so the output carries `4 * length` bits.
pub(crate) fn hex_digits<E: EntropySource + ?Sized>(source: &E, length: usize) -> String {
	let mut encoded = hex::encode(random_bytes(source, length.div_ceil(2)));
	encoded.truncate(length);
	encoded
}

/// RFC 4122 version 4 UUID, lowercase hyphenated.
pub(crate) fn uuid_v4<E: EntropySource + ?Sized>(source: &E) -> String {
	let mut bytes = [0u8; 16];
	source.fill_bytes(&mut bytes);
	Builder::from_random_bytes(bytes).into_uuid().to_string()
}

/// `#rrggbb` with a uniform color in `[0, 0xFFFFFF]`.
pub(crate) fn hex_color<E: EntropySource + ?Sized>(source: &E) -> String {
	format!("#{:06x}", source.index(MAX_COLOR + 1))
}

/// Six uppercase hex octets joined by `:`.
pub(crate) fn mac_address<E: EntropySource + ?Sized>(source: &E) -> String {
	let digits = sample_charset(source, HEX_UPPER, 12);
	digits
		.as_bytes()
		.chunks(2)
		.map(|pair| String::from_utf8_lossy(pair).into_owned())
		.collect::<Vec<_>>()
		.join(":")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::entropy::{InsecureEntropy, SecureEntropy};

	#[test]
	fn charsets_have_expected_sizes() {
		assert_eq!(ALPHANUMERIC.len(), 62);
		assert_eq!(WITH_SYMBOLS.len(), 62 + 26);
		assert_eq!(DIGITS.len(), 10);
	}

	#[test]
	fn sampled_characters_stay_in_charset() {
		let source = SecureEntropy::new();
		let value = sample_charset(&source, DIGITS, 500);
		assert_eq!(value.len(), 500);
		assert!(value.bytes().all(|b| DIGITS.contains(&b)));
	}

	#[test]
	fn sampling_reaches_the_whole_charset() {
		let source = InsecureEntropy::seeded(11);
		let value = sample_charset(&source, HEX_UPPER, 2000);
		assert!(HEX_UPPER.iter().all(|c| value.as_bytes().contains(c)));
	}

	#[test]
	fn hex_digits_truncate_odd_lengths() {
		let source = SecureEntropy::new();
		for length in [0usize, 1, 7, 64, 65] {
			let value = hex_digits(&source, length);
			assert_eq!(value.len(), length);
			assert!(value.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
		}
	}

	#[test]
	fn base64_of_32_bytes_is_44_chars() {
		let value = base64_bytes(&SecureEntropy::new(), 32);
		assert_eq!(value.len(), 44);
		assert_eq!(STANDARD.decode(value).unwrap().len(), 32);
	}

	#[test]
	fn uuid_has_version_and_variant_nibbles() {
		let value = uuid_v4(&InsecureEntropy::seeded(3));
		let parsed = uuid::Uuid::parse_str(&value).unwrap();
		assert_eq!(parsed.get_version_num(), 4);
		assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
	}

	#[test]
	fn color_and_mac_shapes() {
		let source = SecureEntropy::new();
		let color = hex_color(&source);
		assert_eq!(color.len(), 7);
		assert!(color.starts_with('#'));

		let mac = mac_address(&source);
		assert_eq!(mac.len(), 17);
		assert_eq!(mac.matches(':').count(), 5);
	}
}
