//! Noise-aware Bayesian update.

use std::collections::BTreeSet;

use augur_core::constants::MIN_EPSILON;
use augur_core::models::{CandidateId, WeightMap};

/// Likelihood-ratio update assuming the respondent answers incorrectly with
/// probability `epsilon`.
///
/// For an affirmative answer a holder's weight is multiplied by the
/// probability of a correct "yes" (1 − ε) and a non-holder's by ε; a
/// negative answer inverts the two. Weak answers widen the effective error
/// rate toward 0.5, so their evidence approaches zero information rather
/// than being treated as a softer multiplier on full evidence.
///
/// `strength` is the signed evidence in [-1, 1] from the strength table;
/// epsilon is floored at `MIN_EPSILON` so a single contradicting answer can
/// never zero a weight outright.
pub fn update(
    weights: &mut WeightMap,
    holders: &BTreeSet<CandidateId>,
    strength: f64,
    epsilon: f64,
) {
    if strength == 0.0 {
        return;
    }
    let magnitude = strength.abs().min(1.0);
    let epsilon = epsilon.clamp(MIN_EPSILON, 0.5 - MIN_EPSILON);
    // |strength| = 1 keeps the configured epsilon; as it fades to 0 the
    // effective error rate approaches 0.5 (uninformative).
    let eps_eff = epsilon + (1.0 - magnitude) * (0.5 - epsilon);

    let (holder_factor, non_holder_factor) = if strength > 0.0 {
        (1.0 - eps_eff, eps_eff)
    } else {
        (eps_eff, 1.0 - eps_eff)
    };

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
    fn affirmative_answer_shifts_mass_to_holders() {
        let mut w = weights(&[("holder", 1.0), ("other", 1.0)]);
        update(&mut w, &holders(&["holder"]), 1.0, 0.1);
        assert!(w.get("holder") > w.get("other"));
    }

    #[test]
    fn epsilon_zero_degrades_gracefully() {
        let mut w = weights(&[("holder", 1.0), ("other", 1.0)]);
        update(&mut w, &holders(&["holder"]), 1.0, 0.0);
        // Non-holder is crushed but not zeroed; total mass stays positive.
        assert!(w.get("other") > 0.0);
        assert!(w.get("holder") > 0.0);
        assert!(w.total() > 0.0);
    }

    #[test]
    fn weak_answers_carry_less_evidence() {
        let mut strong = weights(&[("holder", 1.0), ("other", 1.0)]);
        let mut weak = strong.clone();
        update(&mut strong, &holders(&["holder"]), 1.0, 0.1);
        update(&mut weak, &holders(&["holder"]), 0.6, 0.1);
        let strong_ratio = strong.get("holder") / strong.get("other");
        let weak_ratio = weak.get("holder") / weak.get("other");
        assert!(strong_ratio > weak_ratio);
        assert!(weak_ratio > 1.0);
    }

    #[test]
    fn agreeing_candidates_keep_their_ratio() {
        let mut w = weights(&[("a", 3.0), ("b", 1.0)]);
        update(&mut w, &holders(&["a", "b"]), -1.0, 0.15);
        assert!((w.get("a") / w.get("b") - 3.0).abs() < 1e-9);
    }
}
