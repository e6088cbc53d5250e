//! Error types.

use thiserror::Error;

/// Result alias for symcrypt operations.
pub type Result<T> = std::result::Result<T, SymcryptError>;

/// Errors returned by key handling, encryption and decryption.
///
/// Messages never contain key material, plaintext or owner identities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymcryptError {
    /// The secure random source could not supply bytes
    #[error("secure random source unavailable")]
    RandomSource,

    /// The hex key is not valid hex
    #[error("invalid key encoding: expected hex")]
    InvalidKeyEncoding,

    /// The decoded key has the wrong length
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// The ciphertext is not valid hex
    #[error("invalid ciphertext encoding: expected hex")]
    InvalidCiphertextEncoding,

    /// The decoded ciphertext is too short to hold a nonce
    #[error("malformed ciphertext: expected at least {minimum} bytes, got {actual}")]
    MalformedCiphertext {
        /// Minimum decoded length
        minimum: usize,
        /// Actual decoded length
        actual: usize,
    },

    /// AEAD verification failed (wrong key, wrong owner or corrupted data)
    #[error("authentication failed")]
    AuthenticationFailed,

    /// AEAD sealing rejected the input
    #[error("encryption failed")]
    EncryptionFailed,
}

impl SymcryptError {
    /// Whether the error was caused by a malformed caller-supplied value
    /// rather than a cryptographic or entropy failure.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyEncoding
                | Self::InvalidKeyLength { .. }
                | Self::InvalidCiphertextEncoding
                | Self::MalformedCiphertext { .. }
        )
    }
}
