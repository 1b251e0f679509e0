//! # augur-scoring
//!
//! Pure numeric layer of the engine: catalog priors, weight normalization,
//! distribution statistics (confidence, effective candidate count), the
//! dynamic confirm threshold, and the coverage gate that filters attributes
//! into question material.
//!
//! Everything here is a pure function over explicit inputs; no state, no
//! providers.

pub mod coverage;
pub mod distribution;
pub mod prior;
pub mod thresholds;

pub use coverage::passes_gate;
pub use distribution::{confidence, effective_candidate_count, normalize};
pub use prior::{base_prior, initial_weights};
pub use thresholds::effective_confirm_threshold;
