//! SHA-1 password digests and their k-anonymity split.
//!
//! The range API indexes passwords by the uppercase hex SHA-1 of their UTF-8
//! bytes. A digest is split into a 5 character [`QueryPrefix`], which is the
//! only part ever sent over the network, and a 35 character [`DigestSuffix`],
//! which is matched locally against the returned candidates.

use std::fmt;

use sha1::{Digest, Sha1};

/// The length of a raw SHA1 hash in bytes.
pub const HASH_LEN: usize = 20;

/// The length of a SHA1 hash rendered as hex.
pub const DIGEST_HEX_LEN: usize = HASH_LEN * 2;

/// The length of a SHA1 hash prefix used for range queries (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// The length of the hex suffix matched against range responses.
pub const SUFFIX_LEN: usize = DIGEST_HEX_LEN - PREFIX_LEN;

/// Hex lookup table for digest rendering.
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Uppercase hex SHA1 digest of a password.
///
/// Stored inline on the stack. `Debug` only shows the query prefix so that a
/// stray `{:?}` in a log line cannot leak the full digest; use [`as_str`] or
/// `Display` when the full value is wanted for a local report.
///
/// [`as_str`]: PasswordDigest::as_str
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordDigest {
    hex: [u8; DIGEST_HEX_LEN],
}

impl PasswordDigest {
    /// Hashes the UTF-8 bytes of `password`.
    pub fn of(password: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(password.as_bytes());
        let hash: [u8; HASH_LEN] = hasher.finalize().into();
        Self::from_hash(&hash)
    }

    /// Renders an already computed SHA1 hash.
    pub fn from_hash(hash: &[u8; HASH_LEN]) -> Self {
        let mut hex = [0u8; DIGEST_HEX_LEN];
        for (i, byte) in hash.iter().enumerate() {
            hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
            hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
        }
        Self { hex }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: every byte was taken from HEX_CHARS, which is ASCII.
        unsafe { std::str::from_utf8_unchecked(&self.hex) }
    }

    /// The first 5 hex characters, safe to send to the range API.
    #[inline]
    pub fn prefix(&self) -> QueryPrefix<'_> {
        QueryPrefix(&self.as_str()[..PREFIX_LEN])
    }

    /// Everything after the prefix. Never leaves the process.
    #[inline]
    pub fn suffix(&self) -> DigestSuffix<'_> {
        DigestSuffix(&self.as_str()[PREFIX_LEN..])
    }

    #[inline]
    pub fn split(&self) -> (QueryPrefix<'_>, DigestSuffix<'_>) {
        (self.prefix(), self.suffix())
    }
}

impl fmt::Display for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PasswordDigest({}..)", self.prefix())
    }
}

/// The 5 character hex prefix sent to `/range/{prefix}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryPrefix<'a>(&'a str);

impl<'a> QueryPrefix<'a> {
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl fmt::Display for QueryPrefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The 35 character hex remainder of a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigestSuffix<'a>(&'a str);

impl<'a> DigestSuffix<'a> {
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}
