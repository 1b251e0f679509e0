use std::collections::BTreeMap;

use crate::errors::AugurResult;
use crate::models::{AttributeId, AttributeKind, CandidateId};

/// Candidate–attribute holdings.
///
/// A link's confidence is 1.0 for asserted/structural attributes and the
/// extraction score for inferred ones; an absent link means the candidate
/// lacks the attribute. A precomputed dense structure and an on-demand
/// query backend are interchangeable behind this trait.
pub trait IAttributeMatrix: Send + Sync {
    /// Link confidence, or `None` when the candidate lacks the attribute.
    fn link_confidence(&self, candidate: &str, attribute: &str) -> AugurResult<Option<f64>>;

    /// All (attribute, confidence) links of one candidate, in attribute-id
    /// order.
    fn attributes_of(&self, candidate: &str) -> AugurResult<Vec<(AttributeId, f64)>>;

    /// Among `candidates`, those linked to `attribute`, with confidences.
    fn links_for(
        &self,
        attribute: &str,
        candidates: &[CandidateId],
    ) -> AugurResult<Vec<(CandidateId, f64)>> {
        let mut out = Vec::new();
        for c in candidates {
            if let Some(conf) = self.link_confidence(c, attribute)? {
                out.push((c.clone(), conf));
            }
        }
        Ok(out)
    }
}

/// Binarize a link against an attribute kind: asserted and structural links
/// are always true when present, inferred links must clear the threshold.
pub fn holds(confidence: Option<f64>, kind: AttributeKind, inferred_threshold: f64) -> bool {
    match (confidence, kind) {
        (None, _) => false,
        (Some(_), AttributeKind::Asserted | AttributeKind::Structural) => true,
        (Some(c), AttributeKind::Inferred) => c >= inferred_threshold,
    }
}

/// Precomputed in-memory matrix. Suitable for small catalogs and tests;
/// larger deployments back the trait with their query layer instead.
#[derive(Debug, Clone, Default)]
pub struct DenseMatrix {
    links: BTreeMap<CandidateId, BTreeMap<AttributeId, f64>>,
}

impl DenseMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asserted/structural link (confidence 1.0).
    pub fn link(&mut self, candidate: impl Into<CandidateId>, attribute: impl Into<AttributeId>) {
        self.link_scored(candidate, attribute, 1.0);
    }

    /// Add a link with an explicit confidence score.
    pub fn link_scored(
        &mut self,
        candidate: impl Into<CandidateId>,
        attribute: impl Into<AttributeId>,
        confidence: f64,
    ) {
        self.links
            .entry(candidate.into())
            .or_default()
            .insert(attribute.into(), confidence.clamp(0.0, 1.0));
    }
}

impl IAttributeMatrix for DenseMatrix {
    fn link_confidence(&self, candidate: &str, attribute: &str) -> AugurResult<Option<f64>> {
        Ok(self
            .links
            .get(candidate)
            .and_then(|attrs| attrs.get(attribute))
            .copied())
    }

    fn attributes_of(&self, candidate: &str) -> AugurResult<Vec<(AttributeId, f64)>> {
        Ok(self
            .links
            .get(candidate)
            .map(|attrs| attrs.iter().map(|(a, c)| (a.clone(), *c)).collect())
            .unwrap_or_default())
    }
}
