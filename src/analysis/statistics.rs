//! Pure statistic computations for entropy quality.
//!
//! Every function here is a pure function of its input bytes: no state, no
//! randomness, identical output for identical input. These tests detect
//! obvious problems in a random source; passing them is necessary but not
//! sufficient for cryptographic quality.

use crate::sample::Sample;
use std::collections::HashSet;

/// Tabulates byte-value frequencies over the data (256 bins).
pub fn byte_frequencies(data: &[u8]) -> [u64; 256] {
    let mut counts = [0u64; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }
    counts
}

/// Chi-square statistic of the byte distribution against uniformity.
///
/// 256 bins, so 255 degrees of freedom. Small values mean the observed
/// distribution is close to uniform.
pub fn chi_square_statistic(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let expected = data.len() as f64 / 256.0;
    byte_frequencies(data)
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Counts set bits across the data.
pub fn popcount(data: &[u8]) -> usize {
    data.iter().map(|b| b.count_ones() as usize).sum()
}

/// Monobit statistic: normalized deviation of the ones count from n/2.
///
/// `|ones - n/2| / sqrt(n/4)`, approximately standard normal for random
/// input. Large values indicate bit-level bias.
pub fn monobit_statistic(data: &[u8]) -> f64 {
    let n = (data.len() * 8) as f64;
    if n == 0.0 {
        return 0.0;
    }

    let ones = popcount(data) as f64;
    (ones - n / 2.0).abs() / (n / 4.0).sqrt()
}

/// Counts maximal runs of identical bits in the bitstream.
pub fn count_runs(data: &[u8]) -> usize {
    if data.is_empty() {
        return 0;
    }

    let mut runs = 1usize;
    let mut prev = bit_at(data, 0);
    for i in 1..data.len() * 8 {
        let bit = bit_at(data, i);
        if bit != prev {
            runs += 1;
            prev = bit;
        }
    }
    runs
}

#[inline]
fn bit_at(data: &[u8], index: usize) -> u8 {
    (data[index / 8] >> (7 - index % 8)) & 1
}

/// Wald-Wolfowitz runs statistic.
///
/// Compares the observed run count to its expectation under randomness and
/// returns an approximately standard normal z-score. Returns infinity when
/// the bit proportion is already too far from 0.5 for the run count to be
/// meaningful (`|pi - 0.5| >= 2/sqrt(n)`), which counts as a failure at any
/// significance level.
pub fn runs_statistic(data: &[u8]) -> f64 {
    let n = (data.len() * 8) as f64;
    if n < 2.0 {
        return 0.0;
    }

    let ones = popcount(data) as f64;
    let pi = ones / n;

    if (pi - 0.5).abs() >= 2.0 / n.sqrt() {
        return f64::INFINITY;
    }

    let runs = count_runs(data) as f64;
    let zeros = n - ones;
    let expected = 2.0 * ones * zeros / n + 1.0;
    let variance = (2.0 * ones * zeros * (2.0 * ones * zeros - n)) / (n * n * (n - 1.0));

    if variance <= 0.0 {
        return f64::INFINITY;
    }

    (runs - expected) / variance.sqrt()
}

/// Empirical Shannon entropy of the data in bits per byte.
///
/// Maximum is 8.0 for uniform 8-bit symbols; constant data scores 0.0.
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let n = data.len() as f64;
    byte_frequencies(data)
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.log2()
        })
        .sum()
}

/// Counts samples that exactly duplicate an earlier sample in the set.
pub fn count_duplicates(samples: &[Sample]) -> usize {
    let mut seen = HashSet::with_capacity(samples.len());
    let mut duplicates = 0;
    for sample in samples {
        if !seen.insert(sample.data()) {
            duplicates += 1;
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_chi_square_uniform_bytes_is_zero() {
        // Exactly one occurrence of every byte value
        let data: Vec<u8> = (0..=255).collect();
        assert!(chi_square_statistic(&data).abs() < 1e-9);
    }

    #[test]
    fn test_chi_square_constant_data_is_large() {
        let data = vec![0x00u8; 2560];
        assert!(chi_square_statistic(&data) > 310.457);
    }

    #[test]
    fn test_monobit_balanced_is_zero() {
        // 0xAA has four ones and four zeros per byte
        let data = vec![0xAAu8; 100];
        assert!(monobit_statistic(&data).abs() < 1e-9);
    }

    #[test]
    fn test_monobit_all_zeros_is_sqrt_n() {
        let data = vec![0x00u8; 128];
        let n: f64 = 128.0 * 8.0;
        assert!((monobit_statistic(&data) - n.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_count_runs_alternating() {
        // 10101010... every adjacent pair differs
        let data = vec![0xAAu8; 4];
        assert_eq!(count_runs(&data), 32);
    }

    #[test]
    fn test_count_runs_constant() {
        let data = vec![0xFFu8; 4];
        assert_eq!(count_runs(&data), 1);
    }

    #[test]
    fn test_runs_degenerate_on_biased_input() {
        let data = vec![0x00u8; 1000];
        assert!(runs_statistic(&data).is_infinite());
    }

    #[test]
    fn test_runs_alternating_pattern_extreme() {
        // Perfectly alternating bits: balanced, but far too many runs
        let data = vec![0xAAu8; 1000];
        let z = runs_statistic(&data);
        assert!(z.is_finite());
        assert!(z > 2.576);
    }

    #[test]
    fn test_entropy_constant_is_zero() {
        let data = vec![0x42u8; 1000];
        assert!(shannon_entropy(&data).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_uniform_is_eight() {
        let data: Vec<u8> = (0..=255).collect();
        assert!((shannon_entropy(&data) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_count_duplicates() {
        let samples = vec![
            Sample::from_bytes(vec![1, 2, 3]),
            Sample::from_bytes(vec![4, 5, 6]),
            Sample::from_bytes(vec![1, 2, 3]),
            Sample::from_bytes(vec![1, 2, 3]),
        ];
        assert_eq!(count_duplicates(&samples), 2);
    }

    #[test]
    fn test_no_duplicates_in_distinct_samples() {
        let samples: Vec<Sample> = (0u16..100)
            .map(|i| Sample::from_bytes(i.to_be_bytes().to_vec()))
            .collect();
        assert_eq!(count_duplicates(&samples), 0);
    }

    proptest! {
        #[test]
        fn prop_statistics_are_idempotent(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
            prop_assert_eq!(chi_square_statistic(&data), chi_square_statistic(&data));
            prop_assert_eq!(monobit_statistic(&data), monobit_statistic(&data));
            prop_assert_eq!(runs_statistic(&data), runs_statistic(&data));
            prop_assert_eq!(shannon_entropy(&data), shannon_entropy(&data));
        }

        #[test]
        fn prop_entropy_bounded(data in proptest::collection::vec(any::<u8>(), 1..2048)) {
            let h = shannon_entropy(&data);
            prop_assert!(h >= 0.0);
            prop_assert!(h <= 8.0 + 1e-9);
        }

        #[test]
        fn prop_chi_square_nonnegative(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
            prop_assert!(chi_square_statistic(&data) >= 0.0);
        }

        #[test]
        fn prop_monobit_invariant_under_complement(data in proptest::collection::vec(any::<u8>(), 1..1024)) {
            let complement: Vec<u8> = data.iter().map(|b| !b).collect();
            let a = monobit_statistic(&data);
            let b = monobit_statistic(&complement);
            prop_assert!((a - b).abs() < 1e-9);
        }
    }
}
