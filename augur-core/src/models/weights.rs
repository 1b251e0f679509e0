use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::CandidateId;

/// Unnormalized belief mass per candidate. Values are always ≥ 0.
///
/// Backed by a `BTreeMap` so iteration order is deterministic — tie-breaks
/// throughout the engine rely on candidate-id ordering for reproducibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightMap(BTreeMap<CandidateId, f64>);

impl WeightMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set a candidate's weight, clamping negative values to 0.
    pub fn set(&mut self, id: impl Into<CandidateId>, weight: f64) {
        self.0.insert(id.into(), weight.max(0.0));
    }

    pub fn get(&self, id: &str) -> f64 {
        self.0.get(id).copied().unwrap_or(0.0)
    }

    /// Multiply a candidate's weight by a non-negative factor.
    pub fn scale(&mut self, id: &str, factor: f64) {
        if let Some(w) = self.0.get_mut(id) {
            *w = (*w * factor.max(0.0)).max(0.0);
        }
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Candidate ids in deterministic (lexicographic) order.
    pub fn ids(&self) -> impl Iterator<Item = &CandidateId> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CandidateId, f64)> {
        self.0.iter().map(|(id, w)| (id, *w))
    }
}

impl FromIterator<(CandidateId, f64)> for WeightMap {
    fn from_iter<T: IntoIterator<Item = (CandidateId, f64)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (id, w) in iter {
            map.set(id, w);
        }
        map
    }
}

/// Normalized belief: probabilities over the current candidate set, summing
/// to 1. Constructed only via `augur_scoring::distribution::normalize`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution(BTreeMap<CandidateId, f64>);

impl Distribution {
    /// Build from an already-normalized map. Callers are expected to go
    /// through the scoring layer's `normalize`.
    pub fn from_normalized(map: BTreeMap<CandidateId, f64>) -> Self {
        Self(map)
    }

    pub fn get(&self, id: &str) -> f64 {
        self.0.get(id).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CandidateId, f64)> {
        self.0.iter().map(|(id, p)| (id, *p))
    }

    /// Candidates ranked by probability descending, candidate id ascending
    /// on ties. The id tie-break keeps runs reproducible.
    pub fn ranked(&self) -> Vec<(&CandidateId, f64)> {
        let mut out: Vec<(&CandidateId, f64)> = self.0.iter().map(|(id, p)| (id, *p)).collect();
        out.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        out
    }

    /// The top-ranked candidate, if any.
    pub fn top(&self) -> Option<(&CandidateId, f64)> {
        self.ranked().into_iter().next()
    }
}
