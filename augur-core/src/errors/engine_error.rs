/// Engine errors. None of these is fatal to the hosting process; the
/// orchestration layer resolves every one of them to a terminal session
/// outcome.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Normalization attempted on an empty or all-zero weight set.
    #[error("cannot normalize an empty or all-zero distribution")]
    EmptyDistribution,

    /// A taxonomy or matrix lookup returned nothing for this turn.
    #[error("data unavailable: {what}")]
    DataUnavailable { what: String },

    /// No question can be formed even after the last-resort fallback.
    ///
    /// The engine itself reports this condition as an absent question
    /// followed by a forced terminal reveal; the variant exists for callers
    /// that surface exhaustion as an error at their own API boundary.
    #[error("attribute pool exhausted, no further question can be formed")]
    Exhausted,

    /// A candidate id referenced by a question or reveal is not in the
    /// catalog. Produced by provider implementations (catalog and matrix
    /// backends), like `DataUnavailable` — never by the engine.
    #[error("unknown candidate: {id}")]
    UnknownCandidate { id: String },

    /// A configuration knob is out of its valid range.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}
