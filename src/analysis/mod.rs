//! Statistical tests and significance conventions.
//!
//! This module holds the pure statistic computations and the critical-value
//! tables they are scored against. These are sanity checks on a random
//! source, not cryptographic proofs of entropy.

mod significance;
mod statistics;

pub use significance::{
    Significance, LOW_CONFIDENCE_SAMPLE_COUNT, MIN_ENTROPY_BITS_PER_BYTE,
};
pub use statistics::{
    byte_frequencies, chi_square_statistic, count_duplicates, count_runs, monobit_statistic,
    popcount, runs_statistic, shannon_entropy,
};
