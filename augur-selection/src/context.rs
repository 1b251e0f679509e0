use augur_core::config::EngineConfig;
use augur_core::models::{Candidate, Distribution, SessionHistory, WeightMap};
use augur_core::traits::{IAttributeMatrix, ITaxonomyProvider};

/// Everything a selection strategy may look at for one turn.
///
/// Strategies are pure over this context; all per-turn state (weights,
/// probabilities, history) is borrowed from the session.
pub struct SelectionContext<'a> {
    pub weights: &'a WeightMap,
    pub probabilities: &'a Distribution,
    pub turn_index: u32,
    pub history: &'a SessionHistory,
    pub config: &'a EngineConfig,
    pub catalog: &'a [Candidate],
    pub taxonomy: &'a dyn ITaxonomyProvider,
    pub matrix: &'a dyn IAttributeMatrix,
}
