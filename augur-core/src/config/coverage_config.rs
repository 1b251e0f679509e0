use serde::{Deserialize, Serialize};

use super::defaults;

/// How the coverage gate measures an attribute's holder footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageMode {
    /// Holder fraction must fall in [min_ratio, max_ratio].
    Ratio,
    /// Holder count must reach min_absolute; the upper bound stays a ratio.
    Absolute,
    /// Ratio for large candidate sets, absolute below `auto_cutoff` —
    /// ratio thresholds are unstable on small sets.
    Auto,
}

/// Coverage-gate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    pub mode: CoverageMode,
    pub min_ratio: f64,
    pub max_ratio: f64,
    pub min_absolute: usize,
    /// Candidate-set size below which Auto mode switches to absolute counts.
    pub auto_cutoff: usize,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            mode: CoverageMode::Auto,
            min_ratio: defaults::DEFAULT_COVERAGE_MIN_RATIO,
            max_ratio: defaults::DEFAULT_COVERAGE_MAX_RATIO,
            min_absolute: defaults::DEFAULT_COVERAGE_MIN_ABSOLUTE,
            auto_cutoff: defaults::DEFAULT_COVERAGE_AUTO_CUTOFF,
        }
    }
}
