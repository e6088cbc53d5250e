//! Ciphertext wire format.
//!
//! ```text
//! +----------------+------------------------------------------+
//! | Nonce (24B)    | Ciphertext (len(plaintext)) + Tag (16B)  |
//! +----------------+------------------------------------------+
//! ```
//!
//! The whole byte string is hex-encoded (lowercase on output, either case
//! accepted on input). Decoding only checks structure; authenticity is the
//! job of [`AeadKey::open`](crate::cipher::AeadKey::open).

use crate::cipher::Nonce;
use crate::error::{Result, SymcryptError};
use crate::types::Ciphertext;
use crate::{NONCE_SIZE, TAG_SIZE};

/// A decoded ciphertext: the nonce and the sealed bytes that follow it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealedBox {
    /// Nonce used to seal.
    pub nonce: Nonce,
    /// Encrypted bytes followed by the authentication tag.
    pub sealed: Vec<u8>,
}

impl SealedBox {
    /// Hex-encode `nonce || sealed`.
    #[must_use]
    pub fn encode(&self) -> Ciphertext {
        let mut bytes = Vec::with_capacity(NONCE_SIZE + self.sealed.len());
        bytes.extend_from_slice(self.nonce.as_bytes());
        bytes.extend_from_slice(&self.sealed);
        Ciphertext::from(hex::encode(bytes))
    }

    /// Split a hex ciphertext into nonce and sealed bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SymcryptError::InvalidCiphertextEncoding`] if the string is
    /// not valid hex, or [`SymcryptError::MalformedCiphertext`] if it decodes
    /// to fewer than [`NONCE_SIZE`] bytes.
    pub fn decode(ciphertext: &Ciphertext) -> Result<Self> {
        let bytes =
            hex::decode(ciphertext.as_str()).map_err(|_| SymcryptError::InvalidCiphertextEncoding)?;

        let Some((nonce, sealed)) = bytes.split_first_chunk::<NONCE_SIZE>() else {
            return Err(SymcryptError::MalformedCiphertext {
                minimum: NONCE_SIZE,
                actual: bytes.len(),
            });
        };

        Ok(Self {
            nonce: Nonce::from_bytes(*nonce),
            sealed: sealed.to_vec(),
        })
    }

    /// Plaintext length implied by the sealed part, if it is long enough to
    /// hold a tag.
    #[must_use]
    pub fn plaintext_len(&self) -> Option<usize> {
        self.sealed.len().checked_sub(TAG_SIZE)
    }
}

/// Hex length of the ciphertext produced for a plaintext of `plaintext_len` bytes.
#[must_use]
pub const fn ciphertext_len(plaintext_len: usize) -> usize {
    2 * (NONCE_SIZE + plaintext_len + TAG_SIZE)
}
