//! Attribute pool assembly: which attributes and bundles are question
//! material this turn.

use std::collections::BTreeSet;

use augur_core::errors::AugurResult;
use augur_core::models::{Attribute, Bundle, CandidateId};
use augur_core::traits::holds;
use augur_scoring::passes_gate;

use crate::context::SelectionContext;
use crate::entropy::split_mass;

/// A gated, askable attribute with its current split.
#[derive(Debug, Clone)]
pub struct PoolEntry {
    pub attribute: Attribute,
    pub holders: BTreeSet<CandidateId>,
    /// Probability mass that would answer "yes".
    pub yes_mass: f64,
}

/// A gated, askable bundle (has-any holder semantics).
#[derive(Debug, Clone)]
pub struct BundlePoolEntry {
    pub bundle: Bundle,
    pub members: Vec<Attribute>,
    pub holders: BTreeSet<CandidateId>,
    pub yes_mass: f64,
}

/// Build the plain-attribute pool.
///
/// Applies history/synonym-group exclusion always; the coverage gate only
/// when `apply_coverage` (the last-resort strategy turns it off).
pub fn attribute_entries(
    ctx: &SelectionContext<'_>,
    apply_coverage: bool,
) -> AugurResult<Vec<PoolEntry>> {
    let mut attributes = ctx.taxonomy.attributes()?;
    // Deterministic pool order regardless of provider order.
    attributes.sort_by(|a, b| a.id.cmp(&b.id));

    let total = ctx.weights.len();
    let mut out = Vec::new();
    for attribute in attributes {
        if ctx
            .history
            .is_excluded(&attribute.id, attribute.synonym_group.as_deref())
        {
            continue;
        }
        let holders = attribute_holders(ctx, &attribute)?;
        if apply_coverage && !passes_gate(holders.len(), total, &ctx.config.coverage) {
            continue;
        }
        let yes_mass = split_mass(ctx.probabilities, &holders);
        out.push(PoolEntry {
            attribute,
            holders,
            yes_mass,
        });
    }
    Ok(out)
}

/// Build the bundle pool: unlocked at this turn, never asked before, and
/// coverage-gated on the has-any holder set.
pub fn bundle_entries(ctx: &SelectionContext<'_>) -> AugurResult<Vec<BundlePoolEntry>> {
    let mut bundles = ctx.taxonomy.bundles()?;
    bundles.sort_by(|a, b| a.id.cmp(&b.id));
    let all_attributes = ctx.taxonomy.attributes()?;

    let total = ctx.weights.len();
    let mut out = Vec::new();
    for bundle in bundles {
        if ctx.turn_index < bundle.unlock_turn || ctx.history.bundle_asked(&bundle.id) {
            continue;
        }
        let members: Vec<Attribute> = all_attributes
            .iter()
            .filter(|a| bundle.members.contains(&a.id))
            .cloned()
            .collect();
        if members.is_empty() {
            continue;
        }

        let mut holders = BTreeSet::new();
        for member in &members {
            for id in attribute_holders(ctx, member)? {
                holders.insert(id);
            }
        }
        if !passes_gate(holders.len(), total, &ctx.config.coverage) {
            continue;
        }
        let yes_mass = split_mass(ctx.probabilities, &holders);
        out.push(BundlePoolEntry {
            bundle,
            members,
            holders,
            yes_mass,
        });
    }
    Ok(out)
}

/// Current candidates holding one attribute, binarized for inferred links.
pub fn attribute_holders(
    ctx: &SelectionContext<'_>,
    attribute: &Attribute,
) -> AugurResult<BTreeSet<CandidateId>> {
    let ids: Vec<CandidateId> = ctx.weights.ids().cloned().collect();
    let links = ctx.matrix.links_for(&attribute.id, &ids)?;
    Ok(links
        .into_iter()
        .filter(|(_, conf)| holds(Some(*conf), attribute.kind, ctx.config.inferred_threshold))
        .map(|(id, _)| id)
        .collect())
}
