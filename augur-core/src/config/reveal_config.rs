use serde::{Deserialize, Serialize};

use super::defaults;

/// Reveal (commit-to-a-guess) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Confidence at which the engine commits to a guess.
    pub threshold: f64,
    /// Multiplicative penalty applied to a candidate's weight after a
    /// rejected reveal.
    pub miss_penalty: f64,
    /// Wrong reveals allowed before the session terminates in failure.
    pub miss_cap: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_REVEAL_THRESHOLD,
            miss_penalty: defaults::DEFAULT_REVEAL_MISS_PENALTY,
            miss_cap: defaults::DEFAULT_REVEAL_MISS_CAP,
        }
    }
}
