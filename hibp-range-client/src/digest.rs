use std::fmt;

use sha1::{Digest, Sha1};
use zeroize::Zeroize;

/// The length of the hex-encoded SHA1 digest.
pub const HEX_LEN: usize = 40;

/// The length of the digest prefix sent to the range API (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// The length of the suffix matched locally against the range response.
pub const SUFFIX_LEN: usize = HEX_LEN - PREFIX_LEN;

/// Hex lookup table for uppercase encoding.
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Uppercase hex SHA1 digest of a password, split at [`PREFIX_LEN`].
///
/// Only [`HashSplit::prefix`] may leave the process. The buffer is zeroed on
/// drop and `Debug` prints the prefix alone.
pub struct HashSplit {
    hex: [u8; HEX_LEN],
}

impl HashSplit {
    /// Hashes the raw password bytes exactly as given.
    pub fn from_password(password: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(password);
        let mut hash: [u8; 20] = hasher.finalize().into();

        let hex = encode_upper(&hash);
        hash.zeroize();

        Self { hex }
    }

    /// The 5-character query key.
    #[inline]
    pub fn prefix(&self) -> &str {
        self.as_str(0, PREFIX_LEN)
    }

    /// The 35 characters compared against each candidate record.
    #[inline]
    pub fn suffix(&self) -> &str {
        self.as_str(PREFIX_LEN, HEX_LEN)
    }

    #[inline(always)]
    fn as_str(&self, start: usize, end: usize) -> &str {
        // SAFETY: hex only ever holds bytes taken from HEX_CHARS, which are ASCII.
        unsafe { std::str::from_utf8_unchecked(&self.hex[start..end]) }
    }
}

impl Drop for HashSplit {
    fn drop(&mut self) {
        self.hex.zeroize();
    }
}

impl fmt::Debug for HashSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSplit")
            .field("prefix", &self.prefix())
            .finish_non_exhaustive()
    }
}

/// Splits the SHA1 of `password` into owned `(prefix, suffix)` strings.
pub fn split(password: &[u8]) -> (String, String) {
    let hash = HashSplit::from_password(password);
    (hash.prefix().to_owned(), hash.suffix().to_owned())
}

#[inline]
fn encode_upper(hash: &[u8; 20]) -> [u8; HEX_LEN] {
    let mut hex = [0u8; HEX_LEN];
    for (i, byte) in hash.iter().enumerate() {
        hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
        hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
    }
    hex
}
