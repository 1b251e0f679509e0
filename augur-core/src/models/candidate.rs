use serde::{Deserialize, Serialize};

/// One item in the catalog being guessed. Immutable during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    /// Display name. Also the source of identifier-prefix hard facts.
    pub label: String,
    /// Static popularity signal from the catalog, ≥ 0. Scale is
    /// catalog-defined; only relative magnitude matters for priors.
    pub popularity: f64,
    /// Optional additive bonus on top of the popularity signal.
    #[serde(default)]
    pub popularity_bonus: f64,
}

impl Candidate {
    pub fn new(id: impl Into<String>, label: impl Into<String>, popularity: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            popularity,
            popularity_bonus: 0.0,
        }
    }

    /// First character of the label, uppercased — the identifier-prefix
    /// hard-confirm fact value.
    pub fn identifier_prefix(&self) -> Option<String> {
        self.label
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
    }
}
