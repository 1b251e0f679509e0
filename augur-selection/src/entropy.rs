//! Information-gain math.
//!
//! The explore policy uses expected Shannon-entropy reduction (natural log).
//! A variance/Gini proxy would satisfy most of the same behavior; Shannon is
//! the documented choice so the numbers compose with standard IG intuition.

use std::collections::BTreeSet;

use augur_core::models::{CandidateId, Distribution};

/// Shannon entropy of a probability slice. Zero-probability terms contribute
/// nothing.
pub fn shannon_entropy<I>(probs: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    probs
        .into_iter()
        .filter(|p| *p > 0.0)
        .map(|p| -p * p.ln())
        .sum()
}

/// Probability mass on the "yes" side of a split.
pub fn split_mass(probabilities: &Distribution, holders: &BTreeSet<CandidateId>) -> f64 {
    probabilities
        .iter()
        .filter(|(id, _)| holders.contains(*id))
        .map(|(_, p)| p)
        .sum()
}

/// Expected post-answer entropy of a yes/no split:
/// `p_yes × H(yes side) + p_no × H(no side)`, each side renormalized.
pub fn expected_entropy(probabilities: &Distribution, holders: &BTreeSet<CandidateId>) -> f64 {
    let p_yes = split_mass(probabilities, holders);
    let p_no = 1.0 - p_yes;

    let mut h_yes = 0.0;
    let mut h_no = 0.0;
    for (id, p) in probabilities.iter() {
        if p <= 0.0 {
            continue;
        }
        if holders.contains(id) {
            if p_yes > 0.0 {
                let q = p / p_yes;
                h_yes -= q * q.ln();
            }
        } else if p_no > 0.0 {
            let q = p / p_no;
            h_no -= q * q.ln();
        }
    }

    p_yes * h_yes + p_no * h_no
}

/// Expected entropy reduction from asking about this split.
pub fn information_gain(probabilities: &Distribution, holders: &BTreeSet<CandidateId>) -> f64 {
    let current = shannon_entropy(probabilities.iter().map(|(_, p)| p));
    current - expected_entropy(probabilities, holders)
}
