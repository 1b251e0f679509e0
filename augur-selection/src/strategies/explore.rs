//! Explore: pick the attribute or bundle that best discriminates the
//! current distribution.

use tracing::debug;

use augur_core::errors::AugurResult;
use augur_core::models::{ExploreTarget, Question};

use crate::context::SelectionContext;
use crate::entropy::expected_entropy;
use crate::pool;

/// One competitor in an explore pick: its split and the question it would
/// become. The key is unique and orders deterministically (bundle keys are
/// namespaced so they cannot collide with attribute ids).
struct Split {
    key: String,
    yes_mass: f64,
    expected_entropy: f64,
    question: Question,
}

/// Unified explore: bundles and plain attributes compete in one pool.
pub fn unified(ctx: &SelectionContext<'_>) -> AugurResult<Option<Question>> {
    select(ctx, true)
}

/// Plain-attribute explore, no bundles.
pub fn attributes_only(ctx: &SelectionContext<'_>) -> AugurResult<Option<Question>> {
    select(ctx, false)
}

fn select(ctx: &SelectionContext<'_>, include_bundles: bool) -> AugurResult<Option<Question>> {
    let mut splits: Vec<Split> = Vec::new();

    for entry in pool::attribute_entries(ctx, true)? {
        splits.push(Split {
            key: format!("attr:{}", entry.attribute.id),
            yes_mass: entry.yes_mass,
            expected_entropy: expected_entropy(ctx.probabilities, &entry.holders),
            question: Question::Explore {
                target: ExploreTarget::Attribute {
                    attribute: entry.attribute,
                },
            },
        });
    }
    if include_bundles {
        for entry in pool::bundle_entries(ctx)? {
            splits.push(Split {
                key: format!("bundle:{}", entry.bundle.id),
                yes_mass: entry.yes_mass,
                expected_entropy: expected_entropy(ctx.probabilities, &entry.holders),
                question: Question::Explore {
                    target: ExploreTarget::Bundle {
                        bundle: entry.bundle,
                        members: entry.members,
                    },
                },
            });
        }
    }

    if splits.is_empty() {
        return Ok(None);
    }

    let selection = &ctx.config.selection;

    // Streak breaker: after a run of negatives, surface a likely hit
    // instead of the most discriminating split.
    if selection.streak_breaker_after > 0
        && ctx.history.negative_streak() >= selection.streak_breaker_after
    {
        let pick = splits
            .iter()
            .max_by(|a, b| {
                a.yes_mass
                    .partial_cmp(&b.yes_mass)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| b.key.cmp(&a.key))
            })
            .map(|s| s.question.clone());
        debug!(turn = ctx.turn_index, "streak breaker engaged");
        return Ok(pick);
    }

    // p-band filter, with a retry without the band rather than giving up.
    let banded: Vec<&Split> = splits
        .iter()
        .filter(|s| s.yes_mass >= selection.p_band_min && s.yes_mass <= selection.p_band_max)
        .collect();
    let eligible: Vec<&Split> = if banded.is_empty() {
        splits.iter().collect()
    } else {
        banded
    };

    let pick = if selection.use_information_gain {
        // Minimal expected post-answer entropy, id-ordered tie-break.
        eligible.iter().min_by(|a, b| {
            a.expected_entropy
                .partial_cmp(&b.expected_entropy)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.key.cmp(&b.key))
        })
    } else {
        // Fallback policy: yes-mass closest to an even split.
        eligible.iter().min_by(|a, b| {
            (a.yes_mass - 0.5)
                .abs()
                .partial_cmp(&(b.yes_mass - 0.5).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.key.cmp(&b.key))
        })
    };

    if let Some(split) = pick {
        debug!(
            key = %split.key,
            yes_mass = split.yes_mass,
            expected_entropy = split.expected_entropy,
            "explore pick"
        );
    }
    Ok(pick.map(|s| s.question.clone()))
}
