//! Validation report types.
//!
//! A `Report` is produced once per validation run and consumed immediately
//! by the caller; nothing is persisted. A failing test is informative
//! output, not an error, so it lives inside the report rather than in a
//! `Result::Err`.

use serde::Serialize;

/// Outcome of a single statistical test.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Test name, e.g. "chi-square uniformity".
    pub name: &'static str,
    /// Computed test statistic.
    pub statistic: f64,
    /// Threshold the statistic was scored against.
    pub threshold: f64,
    /// Whether the test passed.
    pub passed: bool,
    /// Human-readable detail, including any low-confidence annotation.
    pub message: String,
}

impl TestResult {
    /// Creates a result for a test that scores its statistic against an
    /// upper bound.
    pub fn new(
        name: &'static str,
        statistic: f64,
        threshold: f64,
        passed: bool,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name,
            statistic,
            threshold,
            passed,
            message: message.into(),
        }
    }
}

/// Ordered collection of test results with an overall verdict.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Number of samples drawn for this run.
    pub sample_count: usize,
    /// Bytes per sample.
    pub sample_length: usize,
    /// Significance level label, e.g. "α=0.01".
    pub significance: String,
    /// Per-test outcomes, in the fixed test order.
    pub results: Vec<TestResult>,
    /// Overall verdict: pass iff every sub-test passed.
    pub passed: bool,
}

impl Report {
    /// Builds a report from test results, deriving the overall verdict.
    pub fn new(
        sample_count: usize,
        sample_length: usize,
        significance: String,
        results: Vec<TestResult>,
    ) -> Self {
        let passed = results.iter().all(|r| r.passed);
        Self {
            sample_count,
            sample_length,
            significance,
            results,
            passed,
        }
    }

    /// Returns the number of failing sub-tests.
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.passed).count()
    }

    /// Serializes the report as pretty-printed JSON for CI consumption.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "entropy validation report")?;
        writeln!(
            f,
            "  samples: {} x {} bytes, significance {}",
            self.sample_count, self.sample_length, self.significance
        )?;
        writeln!(f)?;
        for result in &self.results {
            let status = if result.passed { "PASS" } else { "FAIL" };
            writeln!(
                f,
                "  [{}] {:<24} statistic={:<12.4} threshold={:.4}",
                status, result.name, result.statistic, result.threshold
            )?;
            writeln!(f, "         {}", result.message)?;
        }
        writeln!(f)?;
        if self.passed {
            write!(f, "verdict: PASS ({} tests)", self.results.len())
        } else {
            write!(
                f,
                "verdict: FAIL ({} of {} tests failed)",
                self.failed_count(),
                self.results.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing(name: &'static str) -> TestResult {
        TestResult::new(name, 1.0, 2.0, true, "ok")
    }

    fn failing(name: &'static str) -> TestResult {
        TestResult::new(name, 3.0, 2.0, false, "too large")
    }

    #[test]
    fn test_verdict_pass_iff_all_pass() {
        let report = Report::new(10, 32, "α=0.01".to_string(), vec![passing("a"), passing("b")]);
        assert!(report.passed);
        assert_eq!(report.failed_count(), 0);

        let report = Report::new(10, 32, "α=0.01".to_string(), vec![passing("a"), failing("b")]);
        assert!(!report.passed);
        assert_eq!(report.failed_count(), 1);
    }

    #[test]
    fn test_display_contains_verdict() {
        let report = Report::new(10, 32, "α=0.01".to_string(), vec![failing("monobit")]);
        let text = report.to_string();
        assert!(text.contains("FAIL"));
        assert!(text.contains("monobit"));
        assert!(text.contains("1 of 1 tests failed"));
    }

    #[test]
    fn test_json_serialization() {
        let report = Report::new(10, 32, "α=0.01".to_string(), vec![passing("runs")]);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"runs\""));
        assert!(json.contains("\"passed\": true"));
    }
}
