//! Random key generation.
//!
//! Keys leave this module hex-encoded as a [`HexKey`]; persisting and
//! transporting them is the caller's job.

use zeroize::Zeroizing;

use crate::KEY_SIZE;
use crate::error::Result;
use crate::random::{OsRandom, RandomSource};
use crate::types::HexKey;

/// Generate a random key from the OS CSPRNG.
///
/// # Errors
///
/// Returns [`SymcryptError::RandomSource`](crate::SymcryptError::RandomSource)
/// if the OS CSPRNG cannot supply 32 bytes.
pub fn generate_random_key() -> Result<HexKey> {
    generate_random_key_with(&OsRandom)
}

/// Generate a random key from the given source.
///
/// # Errors
///
/// Returns [`SymcryptError::RandomSource`](crate::SymcryptError::RandomSource)
/// if `rng` fails.
pub fn generate_random_key_with<R: RandomSource + ?Sized>(rng: &R) -> Result<HexKey> {
    let mut bytes = Zeroizing::new([0u8; KEY_SIZE]);
    rng.fill(&mut *bytes)?;
    Ok(HexKey::from(hex::encode(&*bytes)))
}
