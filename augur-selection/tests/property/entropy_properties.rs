//! Property tests for the information-gain math.

use std::collections::BTreeSet;

use proptest::prelude::*;

use augur_core::models::{CandidateId, WeightMap};
use augur_scoring::normalize;
use augur_selection::entropy::{expected_entropy, information_gain, shannon_entropy};

fn arb_weights() -> impl Strategy<Value = WeightMap> {
    prop::collection::btree_map("[a-h]", 0.01_f64..50.0, 2..8)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    // Conditioning on an answer can never increase expected entropy, so
    // information gain is non-negative for every split.
    #[test]
    fn information_gain_is_never_negative(
        weights in arb_weights(),
        holders in prop::collection::btree_set("[a-h]", 0..8),
    ) {
        let dist = normalize(&weights).unwrap();
        let holders: BTreeSet<CandidateId> = holders;
        prop_assert!(information_gain(&dist, &holders) >= -1e-9);
    }

    #[test]
    fn expected_entropy_is_bounded_by_current_entropy(
        weights in arb_weights(),
        holders in prop::collection::btree_set("[a-h]", 0..8),
    ) {
        let dist = normalize(&weights).unwrap();
        let current = shannon_entropy(dist.iter().map(|(_, p)| p));
        prop_assert!(expected_entropy(&dist, &holders) <= current + 1e-9);
    }
}
