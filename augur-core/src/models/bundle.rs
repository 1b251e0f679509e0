use serde::{Deserialize, Serialize};

use super::AttributeId;

/// A thematic set of attributes satisfied by has-any semantics, used for
/// broad opening questions ("is it about any kind of sport?").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: String,
    pub label: String,
    pub members: Vec<AttributeId>,
    /// Turn index from which this bundle becomes askable. Sensitive bundles
    /// only unlock after a few turns of context.
    #[serde(default)]
    pub unlock_turn: u32,
}

impl Bundle {
    pub fn new(id: impl Into<String>, label: impl Into<String>, members: Vec<AttributeId>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            members,
            unlock_turn: 0,
        }
    }

    pub fn with_unlock_turn(mut self, turn: u32) -> Self {
        self.unlock_turn = turn;
        self
    }
}
