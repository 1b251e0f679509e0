use serde::{Deserialize, Serialize};

use super::defaults;

/// Which weight-update rule a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Multiplicative rescale driven by answer strength × beta.
    Multiplicative,
    /// Noise-aware Bayesian update with an assumed answer error rate.
    /// Preferred default: no beta tuning constant required.
    Bayesian,
}

/// Signed strength assigned to each answer token, in [-1, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthTable {
    pub strong_yes: f64,
    pub yes: f64,
    pub no: f64,
    pub strong_no: f64,
}

impl Default for StrengthTable {
    fn default() -> Self {
        Self {
            strong_yes: defaults::DEFAULT_STRENGTH_STRONG,
            yes: defaults::DEFAULT_STRENGTH_WEAK,
            no: -defaults::DEFAULT_STRENGTH_WEAK,
            strong_no: -defaults::DEFAULT_STRENGTH_STRONG,
        }
    }
}

/// Belief-update configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateConfig {
    pub policy: UpdatePolicy,
    /// Multiplicative-policy steepness.
    pub beta: f64,
    /// Bayesian-policy assumed answer error rate, in (0, 0.5).
    pub epsilon: f64,
    /// Strength multiplier for bundle/aggregate questions — a has-any
    /// answer asserts a weaker, broader claim.
    pub bundle_strength_scale: f64,
    pub strengths: StrengthTable,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            policy: UpdatePolicy::Bayesian,
            beta: defaults::DEFAULT_BETA,
            epsilon: defaults::DEFAULT_EPSILON,
            bundle_strength_scale: defaults::DEFAULT_BUNDLE_STRENGTH_SCALE,
            strengths: StrengthTable::default(),
        }
    }
}
