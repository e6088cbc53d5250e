//! `XChaCha20-Poly1305` AEAD encryption.
//!
//! Provides authenticated encryption with associated data (AEAD) using
//! `XChaCha20-Poly1305`:
//! - 256-bit keys
//! - 192-bit nonces (extended nonce for safe random generation)
//! - 128-bit authentication tags
//! - Associated data authentication
//!
//! ## Security Properties
//!
//! - Confidentiality: `XChaCha20` stream cipher
//! - Integrity: Poly1305 MAC with 128-bit security
//! - Nonce misuse: 192-bit nonce makes random collisions negligible
//!
//! ## Usage
//!
//! ```rust
//! use symcrypt::cipher::{AeadKey, Nonce};
//! use symcrypt::OsRandom;
//!
//! let key = AeadKey::new([0x42u8; 32]);
//! let nonce = Nonce::generate(&OsRandom)?;
//!
//! let sealed = key.seal(&nonce, b"secret", b"owner")?;
//! let opened = key.open(&nonce, &sealed, b"owner")?;
//! assert_eq!(opened, b"secret");
//! # Ok::<(), symcrypt::SymcryptError>(())
//! ```

use chacha20poly1305::{
    XChaCha20Poly1305,
    aead::{Aead, KeyInit, Payload},
};
use zeroize::{ZeroizeOnDrop, Zeroizing};

use crate::error::{Result, SymcryptError};
use crate::random::RandomSource;
use crate::types::HexKey;
use crate::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};

/// XChaCha20-Poly1305 nonce (24 bytes).
///
/// The extended 192-bit nonce allows safe random nonce generation
/// without risk of collision (birthday bound is 2^96 messages).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    /// Create a nonce from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create a nonce from a slice.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; NONCE_SIZE] = slice.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Generate a fresh random nonce.
    ///
    /// # Errors
    ///
    /// Returns [`SymcryptError::RandomSource`] if `rng` fails.
    pub fn generate<R: RandomSource + ?Sized>(rng: &R) -> Result<Self> {
        let mut bytes = [0u8; NONCE_SIZE];
        rng.fill(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Get raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }

    fn as_generic(&self) -> &chacha20poly1305::XNonce {
        chacha20poly1305::XNonce::from_slice(&self.0)
    }
}

/// AEAD encryption key (32 bytes).
///
/// Key is zeroized on drop.
#[derive(Clone, ZeroizeOnDrop)]
pub struct AeadKey([u8; KEY_SIZE]);

impl AeadKey {
    /// Create a key from raw bytes.
    #[must_use]
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from slice.
    ///
    /// # Errors
    ///
    /// Returns [`SymcryptError::InvalidKeyLength`] if slice length is not 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != KEY_SIZE {
            return Err(SymcryptError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: slice.len(),
            });
        }
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Decode a hex-encoded key.
    ///
    /// # Errors
    ///
    /// Returns [`SymcryptError::InvalidKeyEncoding`] if the string is not
    /// valid hex, or [`SymcryptError::InvalidKeyLength`] if it does not
    /// decode to exactly 32 bytes.
    pub fn from_hex(hex_key: &HexKey) -> Result<Self> {
        let decoded = Zeroizing::new(
            hex::decode(hex_key.expose_secret()).map_err(|_| SymcryptError::InvalidKeyEncoding)?,
        );
        Self::from_slice(&decoded)
    }

    /// Get raw key bytes.
    ///
    /// # Security
    ///
    /// Handle with extreme care - this exposes the raw key material.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Encrypt plaintext with associated data.
    ///
    /// Returns ciphertext with appended authentication tag (`plaintext.len()` + 16 bytes).
    ///
    /// # Errors
    ///
    /// Returns [`SymcryptError::EncryptionFailed`] if AEAD encryption fails.
    pub fn seal(&self, nonce: &Nonce, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let cipher = XChaCha20Poly1305::new((&self.0).into());

        cipher
            .encrypt(
                nonce.as_generic(),
                Payload {
                    msg: plaintext,
                    aad,
                },
            )
            .map_err(|_| SymcryptError::EncryptionFailed)
    }

    /// Decrypt ciphertext with associated data.
    ///
    /// Input must include the authentication tag at the end. Nothing is
    /// returned unless the tag verifies.
    ///
    /// # Errors
    ///
    /// Returns [`SymcryptError::AuthenticationFailed`] on any verification failure.
    pub fn open(&self, nonce: &Nonce, ciphertext_and_tag: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        if ciphertext_and_tag.len() < TAG_SIZE {
            return Err(SymcryptError::AuthenticationFailed);
        }

        let cipher = XChaCha20Poly1305::new((&self.0).into());

        cipher
            .decrypt(
                nonce.as_generic(),
                Payload {
                    msg: ciphertext_and_tag,
                    aad,
                },
            )
            .map_err(|_| SymcryptError::AuthenticationFailed)
    }
}
