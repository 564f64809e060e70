//! Entropy source abstraction.
//!
//! This module provides a trait-based abstraction over the host's secure
//! random source, allowing both the real OS CSPRNG and deterministic fixture
//! sources for testing. The validator never implements its own randomness;
//! it only consumes this interface.

use rand_core::{OsRng, RngCore};
use thiserror::Error;

/// Errors that can occur when drawing random bytes.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source could not produce bytes.
    #[error("entropy source unavailable: {0}")]
    Unavailable(String),
}

/// Trait for random byte sources.
///
/// This abstraction allows swapping between the real OS entropy source
/// and deterministic implementations for testing.
pub trait EntropySource {
    /// Fills `dest` with random bytes from the source.
    ///
    /// If the source blocks (e.g. waiting for OS entropy), this call blocks
    /// too; validation runs are offline and impose no timeout.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), SourceError>;

    /// Draws `len` freshly allocated random bytes.
    fn random_bytes(&mut self, len: usize) -> Result<Vec<u8>, SourceError> {
        let mut buf = vec![0u8; len];
        self.fill_bytes(&mut buf)?;
        Ok(buf)
    }
}

/// The host operating system's CSPRNG.
///
/// Backed by `rand_core::OsRng` (`/dev/urandom`, `getrandom(2)`, or the
/// platform equivalent).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropySource;

impl OsEntropySource {
    /// Creates a handle to the OS CSPRNG.
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropySource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), SourceError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| SourceError::Unavailable(e.to_string()))
    }
}

/// Deterministic source that serves bytes by cycling a fixed pattern.
///
/// NOT random - only for testing the validator against known inputs.
/// A pattern whose length equals the configured sample length makes every
/// sample identical, which is how collision handling is exercised.
#[derive(Debug, Clone)]
pub struct FixedSource {
    pattern: Vec<u8>,
    position: usize,
}

impl FixedSource {
    /// Creates a source that repeats `pattern` forever.
    pub fn new(pattern: Vec<u8>) -> Self {
        Self {
            pattern,
            position: 0,
        }
    }

    /// Creates a source that serves a single constant byte value.
    pub fn constant(value: u8) -> Self {
        Self::new(vec![value])
    }
}

impl EntropySource for FixedSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), SourceError> {
        if self.pattern.is_empty() {
            return Err(SourceError::Unavailable(
                "fixed source has an empty pattern".to_string(),
            ));
        }
        for byte in dest.iter_mut() {
            *byte = self.pattern[self.position];
            self.position = (self.position + 1) % self.pattern.len();
        }
        Ok(())
    }
}
