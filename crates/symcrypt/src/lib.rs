//! # symcrypt
//!
//! Owner-bound symmetric encryption of secret values.
//!
//! A value encrypted "for" an [`Owner`] can only be decrypted again when the
//! same owner is supplied. The owner identity is never encrypted; it is bound
//! into the ciphertext as AEAD associated data, so a mismatch surfaces as an
//! authentication failure.
//!
//! This crate provides:
//! - Distinct [`Plaintext`], [`Ciphertext`], [`Owner`] and [`HexKey`] types
//! - `XChaCha20-Poly1305` encryption behind the [`Client`] trait
//! - Random key generation from the operating system CSPRNG
//! - A pluggable [`RandomSource`] for nonce and key generation
//!
//! ## Cryptographic Suite
//!
//! | Function | Algorithm | Size |
//! |----------|-----------|------|
//! | AEAD | XChaCha20-Poly1305 | 256-bit key |
//! | Nonce | random | 192-bit |
//! | Tag | Poly1305 | 128-bit |
//!
//! ## Wire Format
//!
//! ```text
//! hex( nonce (24B) || ciphertext (len(plaintext)) || tag (16B) )
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use symcrypt::{Client, Owner, Plaintext, generate_random_key, new_client};
//!
//! let key = generate_random_key()?;
//! let client = new_client(&key)?;
//!
//! let owner = Owner::from("userid_000111");
//! let ciphertext = client.encrypt(&Plaintext::from("ascx_mysecretaccesstoken"), &owner)?;
//!
//! let plaintext = client.decrypt(&ciphertext, &owner)?;
//! assert_eq!(plaintext, Plaintext::from("ascx_mysecretaccesstoken"));
//!
//! // Another owner cannot open it.
//! assert!(client.decrypt(&ciphertext, &Owner::from("userid_222333")).is_err());
//! # Ok::<(), symcrypt::SymcryptError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cipher;
pub mod client;
pub mod constant_time;
pub mod error;
pub mod key;
pub mod random;
pub mod types;
pub mod wire;

pub use client::{Client, XChaChaClient, new_client};
pub use error::{Result, SymcryptError};
pub use key::{generate_random_key, generate_random_key_with};
pub use random::{OsRandom, RandomSource};
pub use types::{Ciphertext, HexKey, Owner, Plaintext};

/// XChaCha20-Poly1305 key size
pub const KEY_SIZE: usize = 32;

/// XChaCha20-Poly1305 nonce size
pub const NONCE_SIZE: usize = 24;

/// Poly1305 authentication tag size
pub const TAG_SIZE: usize = 16;

/// Length of a hex-encoded key
pub const HEX_KEY_LEN: usize = KEY_SIZE * 2;
