use serde::{Deserialize, Serialize};

use super::defaults;

/// Question-selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Primary explore policy: expected-entropy minimization. When false,
    /// fall back to picking the attribute whose yes-mass is closest to 0.5.
    pub use_information_gain: bool,
    /// Reject splits whose affirmative mass falls outside [min, max].
    /// The selector retries without the band before giving up.
    pub p_band_min: f64,
    pub p_band_max: f64,
    /// After this many consecutive negative answers, bias selection toward
    /// a high-affirmative-mass attribute instead of the most discriminating.
    pub streak_breaker_after: usize,
    /// How many top-ranked candidates hard-confirm probes.
    pub hard_confirm_top_k: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            use_information_gain: true,
            p_band_min: defaults::DEFAULT_P_BAND_MIN,
            p_band_max: defaults::DEFAULT_P_BAND_MAX,
            streak_breaker_after: defaults::DEFAULT_STREAK_BREAKER_AFTER,
            hard_confirm_top_k: defaults::DEFAULT_HARD_CONFIRM_TOP_K,
        }
    }
}
