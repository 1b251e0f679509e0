//! # augur-belief
//!
//! The belief updater: maps an answer to evidence and rescales candidate
//! weights. Two interchangeable policies, selected by config:
//!
//! | Policy | Evidence model |
//! |--------|----------------|
//! | Multiplicative | signed strength × beta, exponential rescale |
//! | Bayesian | answer error rate epsilon, likelihood-ratio rescale |
//!
//! Both guarantee weights stay ≥ 0 and never invert the ranking between two
//! candidates that agree on the asked fact.

pub mod apply;
pub mod bayesian;
pub mod multiplicative;
pub mod strength;

pub use apply::apply_answer;
pub use strength::answer_strength;
