//! Normalization and distribution statistics.

use std::collections::BTreeMap;

use augur_core::errors::{AugurResult, EngineError};
use augur_core::models::{Distribution, WeightMap};

/// Normalize weights into probabilities summing to 1.
///
/// Fails with `EmptyDistribution` on an empty or all-zero weight set; the
/// orchestration turns that into a terminal failure rather than a crash.
pub fn normalize(weights: &WeightMap) -> AugurResult<Distribution> {
    let total = weights.total();
    if weights.is_empty() || total <= 0.0 {
        return Err(EngineError::EmptyDistribution);
    }

    let map: BTreeMap<String, f64> = weights
        .iter()
        .map(|(id, w)| (id.clone(), w / total))
        .collect();
    Ok(Distribution::from_normalized(map))
}

/// Maximum probability in the distribution — the engine's confidence in its
/// leading hypothesis.
pub fn confidence(probabilities: &Distribution) -> f64 {
    probabilities
        .iter()
        .map(|(_, p)| p)
        .fold(0.0_f64, f64::max)
}

/// Participation ratio `1 / Σp²`: how many candidates are effectively still
/// in play. Equals the candidate count for a uniform distribution and tends
/// to 1 as the belief concentrates.
pub fn effective_candidate_count(probabilities: &Distribution) -> f64 {
    let sum_sq: f64 = probabilities.iter().map(|(_, p)| p * p).sum();
    if sum_sq <= 0.0 {
        return 0.0;
    }
    1.0 / sum_sq
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(pairs: &[(&str, f64)]) -> WeightMap {
        pairs
            .iter()
            .map(|(id, w)| (id.to_string(), *w))
            .collect()
    }

    #[test]
    fn normalize_sums_to_one() {
        let dist = normalize(&weights(&[("a", 2.0), ("b", 6.0)])).unwrap();
        let total: f64 = dist.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!((dist.get("a") - 0.25).abs() < 1e-12);
    }

    #[test]
    fn normalize_rejects_all_zero() {
        assert!(matches!(
            normalize(&weights(&[("a", 0.0), ("b", 0.0)])),
            Err(EngineError::EmptyDistribution)
        ));
        assert!(matches!(
            normalize(&WeightMap::new()),
            Err(EngineError::EmptyDistribution)
        ));
    }

    #[test]
    fn effective_count_is_n_for_uniform() {
        let dist = normalize(&weights(&[("a", 1.0), ("b", 1.0), ("c", 1.0), ("d", 1.0)])).unwrap();
        assert!((effective_candidate_count(&dist) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn effective_count_tends_to_one_when_concentrated() {
        let dist = normalize(&weights(&[("a", 1000.0), ("b", 1.0)])).unwrap();
        assert!(effective_candidate_count(&dist) < 1.01);
        assert!(confidence(&dist) > 0.99);
    }
}
