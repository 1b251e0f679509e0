//! Data model for the augur engine.
//!
//! Everything here is plain data: candidates and attributes are immutable
//! during a session, weights are the only per-turn mutable state, and
//! questions/answers/history are the transient turn records.

mod aggregates;
mod answer;
mod attribute;
mod bundle;
mod candidate;
mod hard_fact;
mod history;
mod question;
mod weights;

pub use aggregates::SessionAggregates;
pub use answer::Answer;
pub use attribute::{Attribute, AttributeKind, CurationTier};
pub use bundle::Bundle;
pub use candidate::Candidate;
pub use hard_fact::{HardFact, HardFactKind};
pub use history::{HistoryEntry, SessionHistory};
pub use question::{ExploreTarget, Question, QuestionKind};
pub use weights::{Distribution, WeightMap};

/// Candidate identifier. Stable within a catalog.
pub type CandidateId = String;
/// Attribute identifier. Stable within a taxonomy.
pub type AttributeId = String;
