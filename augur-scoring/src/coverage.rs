//! Coverage gate: admits an attribute as question material only when its
//! holder footprint is informative.
//!
//! Attributes held by (near-)everyone discriminate nothing; attributes held
//! by (near-)no one are statistically noisy and unlikely to be confirmable.

use augur_core::config::{CoverageConfig, CoverageMode};

/// Does the attribute's holder footprint fall in the admissible range?
///
/// Universal (holders == total) and empty (holders == 0) attributes are
/// rejected in every mode.
pub fn passes_gate(holder_count: usize, total_candidates: usize, config: &CoverageConfig) -> bool {
    if total_candidates == 0 || holder_count == 0 || holder_count >= total_candidates {
        return false;
    }

    let ratio = holder_count as f64 / total_candidates as f64;
    let mode = match config.mode {
        CoverageMode::Auto if total_candidates < config.auto_cutoff => CoverageMode::Absolute,
        CoverageMode::Auto => CoverageMode::Ratio,
        m => m,
    };

    match mode {
        CoverageMode::Ratio => ratio >= config.min_ratio && ratio <= config.max_ratio,
        // On small sets the lower bound is an absolute count; the upper bound
        // stays a ratio.
        CoverageMode::Absolute => holder_count >= config.min_absolute && ratio <= config.max_ratio,
        CoverageMode::Auto => unreachable!("auto resolved above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio_config() -> CoverageConfig {
        CoverageConfig {
            mode: CoverageMode::Ratio,
            min_ratio: 0.05,
            max_ratio: 0.85,
            min_absolute: 2,
            auto_cutoff: 20,
        }
    }

    #[test]
    fn universal_and_empty_attributes_never_pass() {
        let config = ratio_config();
        assert!(!passes_gate(0, 100, &config));
        assert!(!passes_gate(100, 100, &config));

        let absolute = CoverageConfig {
            mode: CoverageMode::Absolute,
            ..ratio_config()
        };
        assert!(!passes_gate(0, 10, &absolute));
        assert!(!passes_gate(10, 10, &absolute));
    }

    #[test]
    fn ratio_bounds_are_inclusive() {
        let config = ratio_config();
        assert!(passes_gate(5, 100, &config));
        assert!(passes_gate(85, 100, &config));
        assert!(!passes_gate(4, 100, &config));
        assert!(!passes_gate(86, 100, &config));
    }

    #[test]
    fn auto_switches_to_absolute_on_small_sets() {
        let config = CoverageConfig::default();
        // 10 candidates < auto_cutoff 20: ratio 0.2 would pass either way,
        // but a single holder fails min_absolute despite ratio 0.1 >= 0.05.
        assert!(!passes_gate(1, 10, &config));
        assert!(passes_gate(2, 10, &config));
        // Large set: ratio rules apply, a single holder of 1000 is too rare.
        assert!(!passes_gate(1, 1000, &config));
        assert!(passes_gate(50, 1000, &config));
    }
}
