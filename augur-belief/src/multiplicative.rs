//! Multiplicative strength-scaled update.

use std::collections::BTreeSet;

use augur_core::models::{CandidateId, WeightMap};

/// Rescale every weight by `exp(±beta × strength)`.
///
/// On positive strength holders are rewarded and non-holders penalized; on
/// negative strength the factors invert. The exponential keeps every factor
/// strictly positive, so weights never reach zero or flip sign, and two
/// candidates that agree on the asked fact keep their exact weight ratio.
pub fn update(
    weights: &mut WeightMap,
    holders: &BTreeSet<CandidateId>,
    strength: f64,
    beta: f64,
) {
    if strength == 0.0 {
        return;
    }
    let holder_factor = (beta * strength).exp();
    let non_holder_factor = (-beta * strength).exp();

    let ids: Vec<CandidateId> = weights.ids().cloned().collect();
    for id in ids {
        let factor = if holders.contains(&id) {
            holder_factor
        } else {
            non_holder_factor
        };
        weights.scale(&id, factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(pairs: &[(&str, f64)]) -> WeightMap {
        pairs.iter().map(|(id, w)| (id.to_string(), *w)).collect()
    }

    fn holders(ids: &[&str]) -> BTreeSet<CandidateId> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn affirmative_rewards_holders() {
        let mut w = weights(&[("holder", 1.0), ("other", 1.0)]);
        update(&mut w, &holders(&["holder"]), 0.6, 1.2);
        assert!(w.get("holder") > w.get("other"));
        assert!(w.get("other") > 0.0);
    }

    #[test]
    fn negative_penalizes_holders() {
        let mut w = weights(&[("holder", 1.0), ("other", 1.0)]);
        update(&mut w, &holders(&["holder"]), -1.0, 1.2);
        assert!(w.get("holder") < w.get("other"));
        assert!(w.get("holder") > 0.0);
    }

    #[test]
    fn zero_strength_is_a_no_op() {
        let mut w = weights(&[("a", 2.0), ("b", 3.0)]);
        let before = w.clone();
        update(&mut w, &holders(&["a"]), 0.0, 1.2);
        assert_eq!(w, before);
    }

    #[test]
    fn agreeing_candidates_keep_their_ratio() {
        let mut w = weights(&[("a", 4.0), ("b", 1.0), ("c", 2.0)]);
        update(&mut w, &holders(&["a", "b"]), 1.0, 0.8);
        let ratio = w.get("a") / w.get("b");
        assert!((ratio - 4.0).abs() < 1e-9);
    }
}
