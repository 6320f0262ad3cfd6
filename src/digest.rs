//! Deterministic value source derived from the input string.
//!
//! Every number a pattern uses comes from a [`Digest`]: the SHA-1 of the
//! input, addressed nibble by nibble as if it were its 40-character hex
//! rendering.

use sha1::{Digest as _, Sha1};

/// Number of hex characters in a digest.
pub const DIGEST_LEN: usize = 40;

/// SHA-1 digest of an input string, readable as hex sub-strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; 20],
    hex: String,
}

impl Digest {
    /// Hashes the UTF-8 bytes of `input`.
    pub fn new(input: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(input.as_bytes());
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hasher.finalize());
        Self {
            hex: hex::encode(bytes),
            bytes,
        }
    }

    /// The lowercase hex rendering (always [`DIGEST_LEN`] characters).
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// The raw 20 digest bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.bytes
    }

    /// Parses `length` hex characters starting at `offset` as a base-16 integer.
    ///
    /// # Panics
    ///
    /// Panics if `length` is 0 or greater than 8, or if the read runs past the
    /// end of the digest. Every pattern reads from fixed offsets, so this only
    /// fires on a bug in a pattern implementation.
    pub fn read(&self, offset: usize, length: usize) -> u32 {
        assert!(
            (1..=8).contains(&length),
            "digest read length {length} out of range"
        );
        assert!(
            offset + length <= DIGEST_LEN,
            "digest read ({offset}, {length}) past end of digest"
        );

        (offset..offset + length).fold(0, |acc, index| (acc << 4) | self.nibble(index))
    }

    /// Same as [`read`](Self::read), widened to `f64` for value mapping.
    pub fn read_f64(&self, offset: usize, length: usize) -> f64 {
        f64::from(self.read(offset, length))
    }

    fn nibble(&self, index: usize) -> u32 {
        let byte = self.bytes[index / 2];
        let nibble = if index % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        u32::from(nibble)
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_sha1_hex() {
        assert_eq!(
            Digest::new("GitHub").as_str(),
            "5442e2b64fa09764b9f593867e59a97292c84059"
        );
        assert_eq!(
            Digest::new("").as_str(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[test]
    fn read_parses_hex_substrings() {
        let digest = Digest::new("GitHub");
        assert_eq!(digest.read(0, 1), 0x5);
        assert_eq!(digest.read(1, 1), 0x4);
        assert_eq!(digest.read(14, 3), 0x64b);
        assert_eq!(digest.read(17, 1), 0x9);
        assert_eq!(digest.read(36, 4), 0x4059);
        assert_eq!(digest.read(39, 1), 0x9);
    }

    #[test]
    fn read_agrees_with_string_parsing() {
        let digest = Digest::new("mastodon");
        for offset in 0..DIGEST_LEN {
            for length in 1..=(DIGEST_LEN - offset).min(8) {
                let expected =
                    u32::from_str_radix(&digest.as_str()[offset..offset + length], 16).unwrap();
                assert_eq!(digest.read(offset, length), expected, "({offset}, {length})");
            }
        }
    }

    #[test]
    #[should_panic(expected = "past end of digest")]
    fn read_past_end_panics() {
        Digest::new("GitHub").read(39, 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn zero_length_read_panics() {
        Digest::new("GitHub").read(0, 0);
    }
}
