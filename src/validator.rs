//! The validation run: draws samples and scores the test battery.
//!
//! Each run is stateless and synchronous. Parameter errors and source
//! failures are `Err`; a failing statistical test is a failing `TestResult`
//! inside an `Ok(Report)`, because a bad verdict is informative output and
//! must never be silently retried (retrying could mask a broken source).

use crate::analysis::{
    chi_square_statistic, count_duplicates, monobit_statistic, runs_statistic, shannon_entropy,
    Significance, LOW_CONFIDENCE_SAMPLE_COUNT, MIN_ENTROPY_BITS_PER_BYTE,
};
use crate::report::{Report, TestResult};
use crate::sample::SampleSet;
use crate::source::{EntropySource, SourceError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a validation run before a report is produced.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A run parameter was not positive.
    #[error("invalid parameter: {name} must be positive (got {value})")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: usize,
    },
    /// The entropy source failed before all samples were drawn.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Parameters for one validation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Number of independent samples to draw.
    pub sample_count: usize,
    /// Bytes per sample.
    pub sample_length: usize,
    /// Significance level for all scored tests.
    #[serde(default)]
    pub significance: Significance,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            sample_count: 1000,
            sample_length: 32,
            significance: Significance::default(),
        }
    }
}

impl ValidationConfig {
    /// Validates the run parameters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sample_count == 0 {
            return Err(ValidationError::InvalidParameter {
                name: "sample_count",
                value: self.sample_count,
            });
        }
        if self.sample_length == 0 {
            return Err(ValidationError::InvalidParameter {
                name: "sample_length",
                value: self.sample_length,
            });
        }
        Ok(())
    }
}

/// Draws samples from `source` and runs the full test battery.
///
/// The report always contains exactly five results, in order: chi-square,
/// monobit, runs, collision, Shannon entropy. No partial report is ever
/// produced; parameter and source failures abort the run instead.
pub fn run_validation<S: EntropySource>(
    source: &mut S,
    config: &ValidationConfig,
) -> Result<Report, ValidationError> {
    config.validate()?;

    tracing::info!(
        sample_count = config.sample_count,
        sample_length = config.sample_length,
        significance = %config.significance,
        "Drawing samples for validation run"
    );

    let samples = SampleSet::draw(source, config.sample_count, config.sample_length)?;
    let stream = samples.concat();
    let low_confidence = config.sample_count < LOW_CONFIDENCE_SAMPLE_COUNT;

    let results = vec![
        chi_square_test(&stream, config.significance, low_confidence),
        monobit_test(&stream, config.significance, low_confidence),
        runs_test(&stream, config.significance, low_confidence),
        collision_test(&samples),
        entropy_test(&stream, low_confidence),
    ];

    for result in &results {
        if result.passed {
            tracing::trace!(
                test = result.name,
                statistic = result.statistic,
                "Test passed"
            );
        } else {
            tracing::warn!(
                test = result.name,
                statistic = result.statistic,
                threshold = result.threshold,
                "Test failed"
            );
        }
    }

    let report = Report::new(
        config.sample_count,
        config.sample_length,
        config.significance.to_string(),
        results,
    );

    tracing::info!(passed = report.passed, "Validation run complete");
    Ok(report)
}

fn annotate(message: String, low_confidence: bool) -> String {
    if low_confidence {
        format!(
            "{} (low confidence: fewer than {} samples)",
            message, LOW_CONFIDENCE_SAMPLE_COUNT
        )
    } else {
        message
    }
}

fn chi_square_test(stream: &[u8], significance: Significance, low_confidence: bool) -> TestResult {
    let statistic = chi_square_statistic(stream);
    let critical = significance.chi_square_critical();
    let message = annotate(
        format!(
            "byte distribution vs uniform, df=255, critical value {:.3} at {}",
            critical, significance
        ),
        low_confidence,
    );
    TestResult::new(
        "chi-square uniformity",
        statistic,
        critical,
        statistic < critical,
        message,
    )
}

fn monobit_test(stream: &[u8], significance: Significance, low_confidence: bool) -> TestResult {
    let statistic = monobit_statistic(stream);
    let critical = significance.z_critical();
    let message = annotate(
        format!(
            "proportion of set bits vs 0.5, two-sided critical value {:.3} at {}",
            critical, significance
        ),
        low_confidence,
    );
    TestResult::new(
        "monobit bit balance",
        statistic,
        critical,
        statistic < critical,
        message,
    )
}

fn runs_test(stream: &[u8], significance: Significance, low_confidence: bool) -> TestResult {
    let statistic = runs_statistic(stream);
    let critical = significance.z_critical();
    let message = if statistic.is_infinite() {
        "bit proportion too far from 0.5 for a meaningful run count".to_string()
    } else {
        format!(
            "Wald-Wolfowitz run count z-score, critical value +/-{:.3} at {}",
            critical, significance
        )
    };
    let message = annotate(message, low_confidence);
    TestResult::new(
        "runs (Wald-Wolfowitz)",
        statistic,
        critical,
        statistic.abs() < critical,
        message,
    )
}

fn collision_test(samples: &SampleSet) -> TestResult {
    let duplicates = count_duplicates(samples.samples());
    let message = if samples.count() < 2 {
        "no pair to compare, trivially passes".to_string()
    } else if duplicates == 0 {
        format!("no duplicates among {} samples", samples.count())
    } else {
        format!(
            "{} duplicate sample(s) among {}: suspicious, though not impossible for small runs",
            duplicates,
            samples.count()
        )
    };
    TestResult::new(
        "collision",
        duplicates as f64,
        0.0,
        duplicates == 0,
        message,
    )
}

fn entropy_test(stream: &[u8], low_confidence: bool) -> TestResult {
    let statistic = shannon_entropy(stream);
    let message = annotate(
        format!(
            "empirical Shannon entropy, minimum {:.1} bits/byte of 8.0 possible",
            MIN_ENTROPY_BITS_PER_BYTE
        ),
        low_confidence,
    );
    TestResult::new(
        "shannon entropy",
        statistic,
        MIN_ENTROPY_BITS_PER_BYTE,
        statistic >= MIN_ENTROPY_BITS_PER_BYTE,
        message,
    )
}
