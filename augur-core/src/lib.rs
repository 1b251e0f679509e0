//! # augur-core
//!
//! Foundation crate for the augur guessing engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{AugurResult, EngineError};
pub use models::{
    Answer, Attribute, AttributeKind, Bundle, Candidate, Distribution, HistoryEntry, Question,
    SessionHistory, WeightMap,
};
