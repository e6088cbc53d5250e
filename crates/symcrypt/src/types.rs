//! Nominal wrapper types for the values that cross the encryption boundary.
//!
//! [`Plaintext`], [`Ciphertext`], [`Owner`] and [`HexKey`] are distinct types
//! with no conversions between them, so a plaintext cannot be passed where an
//! owner is expected, a ciphertext cannot be stored where a plaintext belongs,
//! and so on. Getting raw bytes out of any of them is always explicit.
//!
//! Secret-bearing types ([`Plaintext`], [`HexKey`]) are zeroized on drop,
//! compare in constant time and redact themselves in `Debug` output.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constant_time::ct_eq;

/// A secret value to protect.
///
/// Holds arbitrary bytes; text is the common case. Empty plaintext is valid.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct Plaintext(Vec<u8>);

impl Plaintext {
    /// Create a plaintext from raw bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw plaintext bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// View the plaintext as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns the UTF-8 error if the bytes are not valid text.
    pub fn to_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.0)
    }

    /// Take the raw bytes out, leaving nothing behind to zeroize.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        std::mem::take(&mut self.0)
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the plaintext is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Plaintext {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Plaintext {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&[u8]> for Plaintext {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Plaintext {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl PartialEq for Plaintext {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.0, &other.0)
    }
}

impl Eq for Plaintext {}

impl fmt::Debug for Plaintext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plaintext([REDACTED; {}])", self.0.len())
    }
}

/// Hex-encoded output of encryption: `hex(nonce || ciphertext || tag)`.
///
/// Carries no owner information. Construction does not validate the
/// encoding; malformed values are rejected at decrypt time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ciphertext(String);

impl Ciphertext {
    /// The hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the hex string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Length of the hex string in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the hex string is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Ciphertext {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Ciphertext {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl FromStr for Ciphertext {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity a secret is encrypted for.
///
/// Authenticated but never encrypted, and never part of the [`Ciphertext`].
/// The empty owner is a valid identity distinct from every non-empty one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Owner(String);

impl Owner {
    /// Create an owner from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns the UTF-8 error if the bytes are not valid text.
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self, std::string::FromUtf8Error> {
        String::from_utf8(bytes).map(Self)
    }

    /// The identifier as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier bytes, as bound into the ciphertext.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<&str> for Owner {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Owner {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 32-byte secret key, hex-encoded (64 characters).
///
/// Only [`HexKey::expose_secret`] yields the string. Not validated until a
/// client is built from it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HexKey(String);

impl HexKey {
    /// The hex string.
    ///
    /// # Security
    ///
    /// Handle with extreme care - this exposes the raw key material.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl From<String> for HexKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for HexKey {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl PartialEq for HexKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.0.as_bytes(), other.0.as_bytes())
    }
}

impl Eq for HexKey {}

impl fmt::Debug for HexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HexKey([REDACTED])")
    }
}
