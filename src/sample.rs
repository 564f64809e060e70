//! Sample types for drawn entropy.

use crate::source::{EntropySource, SourceError};

/// A single fixed-length byte sequence drawn from the entropy source.
///
/// Immutable after creation and owned solely by the validation run that
/// drew it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sample {
    data: Vec<u8>,
}

impl Sample {
    /// Creates a sample from raw bytes.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Returns the raw byte data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Counts the number of set bits.
    pub fn popcount(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}

impl std::fmt::Debug for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sample")
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// The ordered collection of samples owned by one validation run.
///
/// The stream-oriented tests consume the concatenated byte stream; the
/// collision test compares the individual samples against each other.
#[derive(Debug, Clone)]
pub struct SampleSet {
    samples: Vec<Sample>,
    sample_length: usize,
}

impl SampleSet {
    /// Draws `count` independent samples of `length` bytes each.
    ///
    /// Every sample is a fresh draw; nothing is reused across runs.
    pub fn draw<S: EntropySource>(
        source: &mut S,
        count: usize,
        length: usize,
    ) -> Result<Self, SourceError> {
        let mut samples = Vec::with_capacity(count);
        for _ in 0..count {
            samples.push(Sample::from_bytes(source.random_bytes(length)?));
        }
        Ok(Self {
            samples,
            sample_length: length,
        })
    }

    /// Builds a set from pre-drawn samples (for testing injected fixtures).
    pub fn from_samples(samples: Vec<Sample>, sample_length: usize) -> Self {
        Self {
            samples,
            sample_length,
        }
    }

    /// Returns the individual samples.
    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the number of samples.
    #[inline]
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// Returns the configured bytes per sample.
    #[inline]
    pub fn sample_length(&self) -> usize {
        self.sample_length
    }

    /// Returns the total number of bytes across all samples.
    #[inline]
    pub fn total_bytes(&self) -> usize {
        self.samples.iter().map(Sample::len).sum()
    }

    /// Concatenates all samples into one contiguous byte stream.
    pub fn concat(&self) -> Vec<u8> {
        let mut stream = Vec::with_capacity(self.total_bytes());
        for sample in &self.samples {
            stream.extend_from_slice(sample.data());
        }
        stream
    }
}
