use serde::{Deserialize, Serialize};

/// Per-turn summary statistics over the belief distribution, recomputed by
/// the orchestration at the start of every turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionAggregates {
    /// Probability mass on the single most likely candidate.
    pub confidence: f64,
    /// Participation-ratio diversity (1 / Σp²): how spread the belief is,
    /// independent of raw candidate count.
    pub effective_candidates: f64,
    /// Trailing run of negative answers.
    pub negative_streak: usize,
    /// Wrong reveals so far this session.
    pub reveal_misses: u32,
}
