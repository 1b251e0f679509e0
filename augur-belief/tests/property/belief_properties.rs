//! Property tests for the two update policies.

use std::collections::BTreeSet;

use proptest::prelude::*;

use augur_core::models::{CandidateId, WeightMap};

fn arb_weights() -> impl Strategy<Value = WeightMap> {
    prop::collection::btree_map("[a-e]", 0.01_f64..100.0, 2..6)
        .prop_map(|m| m.into_iter().collect())
}

fn arb_holders() -> impl Strategy<Value = BTreeSet<CandidateId>> {
    prop::collection::btree_set("[a-e]", 0..4)
}

proptest! {
    #[test]
    fn multiplicative_keeps_weights_positive(
        weights in arb_weights(),
        holders in arb_holders(),
        strength in -1.0_f64..=1.0,
        beta in 0.1_f64..4.0,
    ) {
        let mut updated = weights.clone();
        augur_belief::multiplicative::update(&mut updated, &holders, strength, beta);
        for (_, w) in updated.iter() {
            prop_assert!(w > 0.0);
        }
    }

    #[test]
    fn bayesian_keeps_weights_positive(
        weights in arb_weights(),
        holders in arb_holders(),
        strength in -1.0_f64..=1.0,
        epsilon in 0.0_f64..0.49,
    ) {
        let mut updated = weights.clone();
        augur_belief::bayesian::update(&mut updated, &holders, strength, epsilon);
        for (_, w) in updated.iter() {
            prop_assert!(w > 0.0);
        }
    }

    // Two candidates on the same side of the asked fact must keep their
    // exact weight ratio under either policy.
    #[test]
    fn updates_preserve_within_group_ratios(
        weights in arb_weights(),
        holders in arb_holders(),
        strength in -1.0_f64..=1.0,
    ) {
        let mut mult = weights.clone();
        augur_belief::multiplicative::update(&mut mult, &holders, strength, 1.2);
        let mut bayes = weights.clone();
        augur_belief::bayesian::update(&mut bayes, &holders, strength, 0.12);

        let ids: Vec<&CandidateId> = weights.ids().collect();
        for pair in ids.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if holders.contains(a) != holders.contains(b) {
                continue;
            }
            let before = weights.get(a) / weights.get(b);
            prop_assert!((mult.get(a) / mult.get(b) - before).abs() < 1e-6 * before.abs());
            prop_assert!((bayes.get(a) / bayes.get(b) - before).abs() < 1e-6 * before.abs());
        }
    }
}
