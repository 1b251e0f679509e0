//! Hard confirm: directly test a discriminating fact about a top candidate.

use std::collections::BTreeMap;

use augur_core::errors::AugurResult;
use augur_core::models::{AttributeKind, HardFact, HardFactKind, Question};
use augur_core::traits::holds;

use crate::context::SelectionContext;

/// Iterate the top-K ranked candidates and the two fact kinds in rank-major
/// order; return the first fact not already probed this session. `None`
/// when all top-K facts of both kinds are exhausted — the caller falls back.
pub fn select(ctx: &SelectionContext<'_>) -> AugurResult<Option<Question>> {
    let k = ctx.config.selection.hard_confirm_top_k.max(1);
    let labels: BTreeMap<&str, &str> = ctx
        .catalog
        .iter()
        .map(|c| (c.id.as_str(), c.label.as_str()))
        .collect();
    let structural: BTreeMap<String, AttributeKind> = ctx
        .taxonomy
        .attributes()?
        .into_iter()
        .map(|a| (a.id, a.kind))
        .collect();

    for (candidate_id, _) in ctx.probabilities.ranked().into_iter().take(k) {
        for kind in HardFactKind::ORDER {
            let value = match kind {
                HardFactKind::IdentifierPrefix => labels
                    .get(candidate_id.as_str())
                    .and_then(|label| label.chars().next())
                    .map(|c| c.to_uppercase().to_string()),
                HardFactKind::AttributedTo => first_structural(ctx, candidate_id, &structural)?,
            };
            let Some(value) = value else { continue };
            if ctx.history.fact_asked(kind, &value) {
                continue;
            }
            return Ok(Some(Question::HardConfirm {
                candidate: candidate_id.clone(),
                fact: HardFact::new(kind, value),
            }));
        }
    }
    Ok(None)
}

/// First structural attribute the candidate holds that has not been probed,
/// in attribute-id order.
fn first_structural(
    ctx: &SelectionContext<'_>,
    candidate_id: &str,
    kinds: &BTreeMap<String, AttributeKind>,
) -> AugurResult<Option<String>> {
    for (attribute_id, conf) in ctx.matrix.attributes_of(candidate_id)? {
        let Some(kind) = kinds.get(&attribute_id) else {
            continue;
        };
        if *kind != AttributeKind::Structural {
            continue;
        }
        if !holds(Some(conf), *kind, ctx.config.inferred_threshold) {
            continue;
        }
        if ctx
            .history
            .fact_asked(HardFactKind::AttributedTo, &attribute_id)
        {
            continue;
        }
        return Ok(Some(attribute_id));
    }
    Ok(None)
}
