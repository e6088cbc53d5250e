//! Owner-bound encryption client.
//!
//! A [`Client`] encrypts a [`Plaintext`] "for" an [`Owner`] and decrypts a
//! [`Ciphertext`] only for that same owner. The owner bytes are the AEAD
//! associated data: they are authenticated, not encrypted, and not carried
//! in the ciphertext.
//!
//! ## Encrypt
//!
//! 1. Draw a fresh 24-byte nonce from the random source
//! 2. Seal the plaintext with the owner as associated data
//! 3. Return `hex(nonce || sealed)`
//!
//! ## Decrypt
//!
//! 1. Hex-decode and split off the nonce (format errors are reported as such)
//! 2. Open with the supplied owner as associated data
//! 3. Any verification failure is [`SymcryptError::AuthenticationFailed`],
//!    whatever the cause, and no plaintext is returned

use std::fmt;

use zeroize::ZeroizeOnDrop;

use crate::cipher::{AeadKey, Nonce};
use crate::error::Result;
use crate::random::{OsRandom, RandomSource};
use crate::types::{Ciphertext, HexKey, Owner, Plaintext};
use crate::wire::SealedBox;

/// Encrypts and decrypts secrets owned by an identity.
///
/// Implementations are immutable once built and safe to share between
/// threads.
pub trait Client: Send + Sync {
    /// Encrypt a plaintext secret for `owner`.
    ///
    /// Every call uses a fresh random nonce, so encrypting the same input
    /// twice yields different ciphertexts.
    ///
    /// # Errors
    ///
    /// Returns [`SymcryptError::RandomSource`](crate::SymcryptError::RandomSource)
    /// if no nonce could be drawn.
    fn encrypt(&self, plaintext: &Plaintext, owner: &Owner) -> Result<Ciphertext>;

    /// Decrypt a ciphertext for `owner`.
    ///
    /// # Errors
    ///
    /// Returns a format error for malformed input, and
    /// [`SymcryptError::AuthenticationFailed`](crate::SymcryptError::AuthenticationFailed)
    /// if the ciphertext was not produced by this key for this owner.
    fn decrypt(&self, ciphertext: &Ciphertext, owner: &Owner) -> Result<Plaintext>;
}

/// [`Client`] backed by `XChaCha20-Poly1305` with random nonces.
#[derive(Clone)]
pub struct XChaChaClient<R = OsRandom> {
    key: AeadKey,
    rng: R,
}

/// Build a client from a hex-encoded 32-byte key.
///
/// # Errors
///
/// Returns [`SymcryptError::InvalidKeyEncoding`](crate::SymcryptError::InvalidKeyEncoding)
/// if the key is not hex, or
/// [`SymcryptError::InvalidKeyLength`](crate::SymcryptError::InvalidKeyLength)
/// if it does not decode to 32 bytes.
pub fn new_client(hex_key: &HexKey) -> Result<XChaChaClient> {
    XChaChaClient::new(hex_key)
}

impl XChaChaClient {
    /// Build a client drawing nonces from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// See [`new_client`].
    pub fn new(hex_key: &HexKey) -> Result<Self> {
        Self::with_random_source(hex_key, OsRandom)
    }
}

impl<R: RandomSource> XChaChaClient<R> {
    /// Build a client drawing nonces from `rng`.
    ///
    /// # Errors
    ///
    /// See [`new_client`].
    pub fn with_random_source(hex_key: &HexKey, rng: R) -> Result<Self> {
        let key = AeadKey::from_hex(hex_key)?;
        Ok(Self { key, rng })
    }
}

impl<R: RandomSource> Client for XChaChaClient<R> {
    fn encrypt(&self, plaintext: &Plaintext, owner: &Owner) -> Result<Ciphertext> {
        let nonce = Nonce::generate(&self.rng)?;
        let sealed = self.key.seal(&nonce, plaintext.as_bytes(), owner.as_bytes())?;
        Ok(SealedBox { nonce, sealed }.encode())
    }

    fn decrypt(&self, ciphertext: &Ciphertext, owner: &Owner) -> Result<Plaintext> {
        let SealedBox { nonce, sealed } = SealedBox::decode(ciphertext)?;
        let plaintext = self.key.open(&nonce, &sealed, owner.as_bytes())?;
        Ok(Plaintext::new(plaintext))
    }
}

// The only secret is `key`, and `AeadKey` wipes itself on drop.
impl<R> ZeroizeOnDrop for XChaChaClient<R> {}

impl<R> fmt::Debug for XChaChaClient<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XChaChaClient")
            .field("key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
