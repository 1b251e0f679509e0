use serde::{Deserialize, Serialize};

/// How an attribute is grounded in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// Binary fact, always true when a link exists.
    Asserted,
    /// Extracted with a confidence score in [0, 1]; binarized against a
    /// configurable threshold before use.
    Inferred,
    /// Named-entity style fact (e.g. a character identity, an author).
    Structural,
}

/// Curation tier of an attribute within the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurationTier {
    Core,
    Extended,
    Experimental,
}

impl Default for CurationTier {
    fn default() -> Self {
        Self::Core
    }
}

/// An askable fact or inferred trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: String,
    pub label: String,
    pub kind: AttributeKind,
    /// Custom question phrasing; callers fall back to a generated phrasing
    /// from the label when absent.
    #[serde(default)]
    pub question_phrasing: Option<String>,
    /// Synonym group this attribute belongs to. All members of a group are
    /// treated as one question target for repeat prevention.
    #[serde(default)]
    pub synonym_group: Option<String>,
    /// Bundle this attribute belongs to, if any.
    #[serde(default)]
    pub bundle: Option<String>,
    #[serde(default)]
    pub tier: CurationTier,
}

impl Attribute {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            question_phrasing: None,
            synonym_group: None,
            bundle: None,
            tier: CurationTier::Core,
        }
    }

    pub fn with_synonym_group(mut self, group: impl Into<String>) -> Self {
        self.synonym_group = Some(group.into());
        self
    }

    pub fn with_bundle(mut self, bundle: impl Into<String>) -> Self {
        self.bundle = Some(bundle.into());
        self
    }

    /// Repeat-prevention key: the synonym group when present, otherwise the
    /// attribute's own id.
    pub fn exclusion_key(&self) -> &str {
        self.synonym_group.as_deref().unwrap_or(&self.id)
    }
}
