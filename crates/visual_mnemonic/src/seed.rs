//! Seed normalization.
//!
//! Every generation run is driven by a single unsigned integer of arbitrary width.
//! Integer seeds pass through unchanged; text seeds are widened by appending their
//! SHA3-256 digest to the UTF-8 bytes and reading the concatenation as a big-endian
//! integer, so a one-character change perturbs the digest half of the value.
use std::fmt;
use std::fmt::Write as _;

use num_bigint::BigUint;
use sha3::{Digest, Sha3_256};

use crate::error::{Error, Result};

/// Input accepted by [`derive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// Arbitrary text, hashed and widened before use.
    Text(String),
    /// Signed integer; must be non-negative.
    Integer(i128),
    /// A value that has already been derived. Passed through unchanged.
    Derived(DerivedSeed),
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::Text(value.to_owned())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Seed::Text(value)
    }
}

impl From<&String> for Seed {
    fn from(value: &String) -> Self {
        Seed::Text(value.clone())
    }
}

impl From<DerivedSeed> for Seed {
    fn from(value: DerivedSeed) -> Self {
        Seed::Derived(value)
    }
}

impl From<u128> for Seed {
    fn from(value: u128) -> Self {
        Seed::Derived(DerivedSeed::from_u128(value))
    }
}

macro_rules! seed_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Seed {
                fn from(value: $t) -> Self {
                    Seed::Integer(value as i128)
                }
            }
        )*
    };
}

seed_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

/// A non-negative integer of arbitrary width, stored big-endian without leading zero bytes.
///
/// Zero is represented by an empty byte string.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<u8>", into = "Vec<u8>"))]
pub struct DerivedSeed {
    bytes: Vec<u8>,
}

impl DerivedSeed {
    /// Builds a seed from big-endian bytes. Leading zero bytes are dropped.
    pub fn from_be_bytes(bytes: impl AsRef<[u8]>) -> Self {
        let bytes = bytes.as_ref();
        let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        Self {
            bytes: bytes[first..].to_vec(),
        }
    }

    pub fn from_u128(value: u128) -> Self {
        Self::from_be_bytes(value.to_be_bytes())
    }

    /// Widens text: `utf8 ++ sha3_256(utf8)`, big-endian.
    pub fn from_text(text: &str) -> Self {
        let raw = text.as_bytes();
        let digest = Sha3_256::digest(raw);
        let mut bytes = Vec::with_capacity(raw.len() + digest.len());
        bytes.extend_from_slice(raw);
        bytes.extend_from_slice(&digest);
        Self::from_be_bytes(bytes)
    }

    /// Canonical big-endian bytes (empty for zero).
    pub fn as_be_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the value if it fits into 128 bits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.bytes.len() > 16 {
            return None;
        }
        Some(
            self.bytes
                .iter()
                .fold(0u128, |acc, &b| (acc << 8) | u128::from(b)),
        )
    }

    /// Number of significant bits.
    pub fn bit_len(&self) -> usize {
        match self.bytes.first() {
            Some(&top) => (self.bytes.len() - 1) * 8 + (8 - top.leading_zeros() as usize),
            None => 0,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.bytes.is_empty()
    }

    /// 256-bit key for seeding the generator's RNG. Every bit of the integer contributes.
    pub fn rng_key(&self) -> [u8; 32] {
        Sha3_256::digest(&self.bytes).into()
    }

    /// Low 32 bits, used as the base seed of the noise layers.
    pub fn noise_seed(&self) -> u32 {
        self.bytes
            .iter()
            .rev()
            .take(4)
            .rev()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b))
    }
}

impl From<Vec<u8>> for DerivedSeed {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_be_bytes(bytes)
    }
}

impl From<DerivedSeed> for Vec<u8> {
    fn from(seed: DerivedSeed) -> Self {
        seed.bytes
    }
}

impl fmt::Display for DerivedSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimal = BigUint::from_bytes_be(&self.bytes).to_str_radix(10);
        f.pad_integral(true, "", &decimal)
    }
}

impl fmt::Debug for DerivedSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedSeed({self})")
    }
}

impl fmt::LowerHex for DerivedSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.bytes.len() * 2);
        match self.bytes.split_first() {
            None => out.push('0'),
            Some((head, tail)) => {
                let _ = write!(out, "{head:x}");
                for b in tail {
                    let _ = write!(out, "{b:02x}");
                }
            }
        }
        f.pad_integral(true, "0x", &out)
    }
}

/// Normalizes a seed into the integer that drives a run.
///
/// Negative integers are rejected with [`Error::InvalidConfig`].
pub fn derive(seed: impl Into<Seed>) -> Result<DerivedSeed> {
    match seed.into() {
        Seed::Text(text) => Ok(DerivedSeed::from_text(&text)),
        Seed::Integer(n) if n < 0 => Err(Error::InvalidConfig(format!(
            "integer seed must be non-negative, got {n}"
        ))),
        Seed::Integer(n) => Ok(DerivedSeed::from_u128(n as u128)),
        Seed::Derived(d) => Ok(d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC_DIGEST: [u8; 32] = [
        0x3a, 0x98, 0x5d, 0xa7, 0x4f, 0xe2, 0x25, 0xb2, 0x04, 0x5c, 0x17, 0x2d, 0x6b, 0xd3, 0x90,
        0xbd, 0x85, 0x5f, 0x08, 0x6e, 0x3e, 0x9d, 0x52, 0x5b, 0x46, 0xbf, 0xe2, 0x45, 0x11, 0x43,
        0x15, 0x32,
    ];

    #[test]
    fn integer_seed_passes_through() {
        let d = derive(42u64).unwrap();
        assert_eq!(d.to_u128(), Some(42));
        assert_eq!(d.to_string(), "42");
    }

    #[test]
    fn derivation_is_idempotent() {
        let once = derive("hello").unwrap();
        let twice = derive(once.clone()).unwrap();
        assert_eq!(once, twice);

        let n = derive(7i32).unwrap();
        assert_eq!(derive(n.clone()).unwrap(), n);
    }

    #[test]
    fn negative_integer_is_rejected() {
        let err = derive(-1i64).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn text_seed_appends_sha3_digest() {
        let d = derive("abc").unwrap();
        let mut expected = b"abc".to_vec();
        expected.extend_from_slice(&ABC_DIGEST);
        assert_eq!(d.as_be_bytes(), expected.as_slice());
        assert_eq!(
            d.to_string(),
            "739005866799877783602023349313615043552404882205792026086999944424650684123037504818"
        );
    }

    #[test]
    fn single_character_change_alters_digest_half() {
        let a = derive("Hello").unwrap();
        let b = derive("Hellp").unwrap();
        assert_ne!(a, b);
        let tail_a = &a.as_be_bytes()[5..];
        let tail_b = &b.as_be_bytes()[5..];
        let differing = tail_a.iter().zip(tail_b).filter(|(x, y)| x != y).count();
        assert!(differing > 16, "only {differing} digest bytes differ");
    }

    #[test]
    fn empty_text_is_just_the_digest() {
        let d = derive("").unwrap();
        assert!(d.bit_len() <= 256);
        assert!(d.bit_len() > 200);
    }

    #[test]
    fn leading_zero_bytes_are_canonicalized() {
        let a = DerivedSeed::from_be_bytes([0, 0, 1, 2]);
        let b = DerivedSeed::from_be_bytes([1, 2]);
        assert_eq!(a, b);
        assert_eq!(a.to_u128(), Some(258));
        assert!(DerivedSeed::from_be_bytes([0, 0]).is_zero());
        assert_eq!(DerivedSeed::default().to_string(), "0");
    }

    #[test]
    fn u128_max_survives_without_sign_issues() {
        let d = derive(u128::MAX).unwrap();
        assert_eq!(d.to_u128(), Some(u128::MAX));
        assert_eq!(d.bit_len(), 128);
        assert_eq!(d.to_string(), u128::MAX.to_string());
    }

    #[test]
    fn hex_and_noise_seed_use_low_bytes() {
        let d = DerivedSeed::from_be_bytes([0x01, 0xab, 0xcd, 0xef, 0x12]);
        assert_eq!(format!("{d:x}"), "1abcdef12");
        assert_eq!(format!("{d:#x}"), "0x1abcdef12");
        assert_eq!(d.noise_seed(), 0xabcd_ef12);
        assert_eq!(DerivedSeed::from_u128(42).noise_seed(), 42);
    }

    #[test]
    fn rng_key_depends_on_every_byte() {
        let a = DerivedSeed::from_be_bytes([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5]);
        let b = DerivedSeed::from_be_bytes([2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5]);
        assert_eq!(a.noise_seed(), b.noise_seed());
        assert_ne!(a.rng_key(), b.rng_key());
    }

    #[test]
    fn byte_vec_conversion_canonicalizes() {
        let parsed = DerivedSeed::from(vec![0, 0, 1]);
        assert_eq!(parsed, DerivedSeed::from_u128(1));
        assert_eq!(parsed.rng_key(), DerivedSeed::from_u128(1).rng_key());
        assert_eq!(Vec::from(parsed), vec![1u8]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_seed_drops_leading_zeros() {
        use serde::de::value::{Error as DeError, SeqDeserializer};
        use serde::Deserialize;

        let de: SeqDeserializer<_, DeError> = SeqDeserializer::new(vec![0u8, 1].into_iter());
        let parsed = DerivedSeed::deserialize(de).unwrap();
        let canonical = DerivedSeed::from_u128(1);
        assert_eq!(parsed, canonical);
        assert_eq!(parsed.rng_key(), canonical.rng_key());
    }
}
