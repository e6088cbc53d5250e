//! Secure random number generation.
//!
//! Production randomness comes from the operating system CSPRNG. The
//! [`RandomSource`] trait lets tests substitute a deterministic or failing
//! source; there is no fallback to a weaker generator.

use crate::error::{Result, SymcryptError};

/// A source of cryptographically secure random bytes.
pub trait RandomSource: Send + Sync {
    /// Fill `buf` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SymcryptError::RandomSource`] if the source cannot supply
    /// the requested bytes. Implementations must not return partially
    /// filled buffers as success.
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        (**self).fill(buf)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for std::sync::Arc<R> {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        (**self).fill(buf)
    }
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        getrandom::fill(buf).map_err(|_| SymcryptError::RandomSource)
    }
}

/// Fill a buffer with random bytes from the OS CSPRNG.
///
/// # Errors
///
/// Returns [`SymcryptError::RandomSource`] if the underlying OS CSPRNG fails.
pub fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRandom.fill(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_fills_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        fill_random(&mut a).unwrap();
        fill_random(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_buffer() {
        let mut buf = [0u8; 0];
        assert!(OsRandom.fill(&mut buf).is_ok());
    }

    #[test]
    fn test_source_by_reference() {
        fn draw<R: RandomSource>(rng: R) -> [u8; 8] {
            let mut buf = [0u8; 8];
            rng.fill(&mut buf).unwrap();
            buf
        }
        let rng = OsRandom;
        let _ = draw(&rng);
        let _ = draw(std::sync::Arc::new(rng));
    }
}
