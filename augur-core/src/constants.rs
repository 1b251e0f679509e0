/// Augur engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Floor applied to every candidate's prior weight. A zero prior would make
/// a candidate permanently unreachable under multiplicative updates.
pub const MIN_PRIOR: f64 = 1e-6;

/// Floor for the Bayesian answer-error rate. Epsilon exactly zero would let a
/// single contradicting answer drive a weight to 0.0 irrecoverably.
pub const MIN_EPSILON: f64 = 1e-6;

/// Tolerance used when checking that probabilities sum to 1.
pub const PROB_SUM_TOLERANCE: f64 = 1e-9;
