//! Property tests for the scoring layer.

use augur_core::models::WeightMap;
use augur_scoring::{confidence, effective_candidate_count, normalize};
use proptest::prelude::*;

fn arb_weights() -> impl Strategy<Value = WeightMap> {
    prop::collection::vec(0.001_f64..1000.0, 1..50).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, w)| (format!("c{i:03}"), w))
            .collect()
    })
}

proptest! {
    #[test]
    fn probabilities_sum_to_one(weights in arb_weights()) {
        let dist = normalize(&weights).unwrap();
        let total: f64 = dist.iter().map(|(_, p)| p).sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn probabilities_are_non_negative(weights in arb_weights()) {
        let dist = normalize(&weights).unwrap();
        prop_assert!(dist.iter().all(|(_, p)| p >= 0.0));
    }

    #[test]
    fn confidence_bounds(weights in arb_weights()) {
        let dist = normalize(&weights).unwrap();
        let c = confidence(&dist);
        let n = dist.len() as f64;
        // Max probability is at least the uniform share and at most 1.
        prop_assert!(c >= 1.0 / n - 1e-9);
        prop_assert!(c <= 1.0 + 1e-9);
    }

    #[test]
    fn effective_count_bounds(weights in arb_weights()) {
        let dist = normalize(&weights).unwrap();
        let eff = effective_candidate_count(&dist);
        let n = dist.len() as f64;
        prop_assert!(eff >= 1.0 - 1e-9);
        prop_assert!(eff <= n + 1e-9);
    }

    #[test]
    fn normalization_preserves_ratios(weights in arb_weights()) {
        let dist = normalize(&weights).unwrap();
        let ids: Vec<_> = weights.ids().cloned().collect();
        if ids.len() >= 2 {
            let (a, b) = (&ids[0], &ids[1]);
            let weight_ratio = weights.get(a) / weights.get(b);
            let prob_ratio = dist.get(a) / dist.get(b);
            prop_assert!((weight_ratio - prob_ratio).abs() < 1e-6 * weight_ratio.abs().max(1.0));
        }
    }
}
