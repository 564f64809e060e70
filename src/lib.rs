//! Entropy Validation Library
//!
//! A battery of classical statistical tests that certifies a
//! cryptographically secure random byte source. The validator draws a
//! configurable number of fresh samples from an injected source and scores
//! five independent tests: chi-square uniformity, monobit bit balance,
//! Wald-Wolfowitz runs, collision detection, and empirical Shannon entropy.
//!
//! # Architecture
//!
//! ```text
//! source → sample → analysis → report
//! ```
//!
//! # Design Principles
//!
//! - **Consume, never generate**: randomness comes only from the injected
//!   `EntropySource`; the validator implements no RNG of its own
//! - **Failing tests are output, not errors**: a bad verdict surfaces in the
//!   `Report` so CI can see it; only parameter and source failures are `Err`
//! - **No silent retries**: retrying a failed run could mask a broken source
//! - **Sanity checks, not proofs**: passing is necessary but not sufficient
//!   for cryptographic quality
//!
//! # Example
//!
//! ```
//! use entropy_validator::{run_validation, OsEntropySource, ValidationConfig};
//!
//! let mut source = OsEntropySource::new();
//! let config = ValidationConfig {
//!     sample_count: 200,
//!     sample_length: 32,
//!     ..Default::default()
//! };
//!
//! let report = run_validation(&mut source, &config).unwrap();
//! assert_eq!(report.results.len(), 5);
//! println!("{}", report);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod report;
pub mod sample;
pub mod source;
pub mod validator;

// Re-export commonly used types at crate root
pub use analysis::{Significance, LOW_CONFIDENCE_SAMPLE_COUNT, MIN_ENTROPY_BITS_PER_BYTE};
pub use config::{ConfigError, FileConfig, OutputConfig};
pub use report::{Report, TestResult};
pub use sample::{Sample, SampleSet};
pub use source::{EntropySource, FixedSource, OsEntropySource, SourceError};
pub use validator::{run_validation, ValidationConfig, ValidationError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
