use serde::{Deserialize, Serialize};

/// The fact types a hard-confirm question can test about a top candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardFactKind {
    /// "Does its name start with X?"
    IdentifierPrefix,
    /// "Is it attributed to / associated with X?" — backed by a structural
    /// attribute the candidate holds.
    AttributedTo,
}

impl HardFactKind {
    /// Fixed probe order within one candidate rank.
    pub const ORDER: [HardFactKind; 2] = [HardFactKind::IdentifierPrefix, HardFactKind::AttributedTo];
}

/// A concrete discriminating fact about a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HardFact {
    pub kind: HardFactKind,
    /// For `IdentifierPrefix`: the uppercased first character of the label.
    /// For `AttributedTo`: the id of the structural attribute being tested.
    pub value: String,
}

impl HardFact {
    pub fn new(kind: HardFactKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
