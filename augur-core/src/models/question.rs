use serde::{Deserialize, Serialize};

use super::{Attribute, Bundle, CandidateId, HardFact};

/// What an explore question asks about: one attribute, or a bundle with
/// has-any semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum ExploreTarget {
    Attribute { attribute: Attribute },
    /// Member attributes are carried in full so the answer can be replayed
    /// into the belief updater without another taxonomy round-trip.
    Bundle { bundle: Bundle, members: Vec<Attribute> },
}

impl ExploreTarget {
    /// Display phrasing for the asked fact.
    pub fn phrasing(&self) -> String {
        match self {
            Self::Attribute { attribute } => attribute
                .question_phrasing
                .clone()
                .unwrap_or_else(|| format!("Is it {}?", attribute.label)),
            Self::Bundle { bundle, .. } => format!("Is it related to {}?", bundle.label),
        }
    }
}

/// A question emitted by the engine. Transient: never persisted, but carries
/// enough payload to be answered and replayed into the belief updater.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    /// Broad discrimination over the current distribution.
    Explore { target: ExploreTarget },
    /// Validate the leading hypothesis via an inferred trait it holds.
    SoftConfirm {
        attribute: Attribute,
        top_candidate: CandidateId,
    },
    /// Directly test a hard fact about a top-ranked candidate.
    HardConfirm {
        candidate: CandidateId,
        fact: HardFact,
    },
}

/// Kind discriminant, used by history rules ("no two hard-confirms in a
/// row") without matching on payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Explore,
    SoftConfirm,
    HardConfirm,
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::Explore { .. } => QuestionKind::Explore,
            Self::SoftConfirm { .. } => QuestionKind::SoftConfirm,
            Self::HardConfirm { .. } => QuestionKind::HardConfirm,
        }
    }

    /// True when this question asserts a broad has-any claim rather than a
    /// single fact. Such answers carry weaker evidence.
    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            Self::Explore {
                target: ExploreTarget::Bundle { .. }
            }
        )
    }
}
