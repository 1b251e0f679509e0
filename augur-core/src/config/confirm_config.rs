use serde::{Deserialize, Serialize};

use super::defaults;

/// When and how confirmation questions are inserted between explores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmConfig {
    /// Confidence band that triggers a confirmation turn.
    pub band_min: f64,
    pub band_max: f64,
    /// Confidence at or above which a confirmation turn prefers a hard
    /// confirm over a soft confirm.
    pub hard_min_confidence: f64,
    /// Dynamic threshold on effective candidate count:
    /// clamp(candidate_count / divisor, min, max).
    pub threshold_min: f64,
    pub threshold_max: f64,
    pub threshold_divisor: f64,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            band_min: defaults::DEFAULT_CONFIRM_BAND_MIN,
            band_max: defaults::DEFAULT_CONFIRM_BAND_MAX,
            hard_min_confidence: defaults::DEFAULT_HARD_CONFIRM_MIN_CONFIDENCE,
            threshold_min: defaults::DEFAULT_CONFIRM_THRESHOLD_MIN,
            threshold_max: defaults::DEFAULT_CONFIRM_THRESHOLD_MAX,
            threshold_divisor: defaults::DEFAULT_CONFIRM_THRESHOLD_DIVISOR,
        }
    }
}
