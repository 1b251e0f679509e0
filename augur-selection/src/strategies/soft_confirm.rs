//! Soft confirm: validate the leading hypothesis via an inferred trait.

use augur_core::errors::AugurResult;
use augur_core::models::{AttributeKind, Question};

use crate::context::SelectionContext;
use crate::pool::{self, PoolEntry};

/// Pick an inferred attribute inside the p-band, preferring one the current
/// top-ranked candidate actually holds; fall back to the band-best attribute
/// regardless of top-candidate membership.
pub fn select(ctx: &SelectionContext<'_>) -> AugurResult<Option<Question>> {
    let top = match ctx.probabilities.top() {
        Some((id, _)) => id.clone(),
        None => return Ok(None),
    };

    let selection = &ctx.config.selection;
    let banded: Vec<PoolEntry> = pool::attribute_entries(ctx, true)?
        .into_iter()
        .filter(|e| e.attribute.kind == AttributeKind::Inferred)
        .filter(|e| e.yes_mass >= selection.p_band_min && e.yes_mass <= selection.p_band_max)
        .collect();
    if banded.is_empty() {
        return Ok(None);
    }

    let closest_to_half = |a: &&PoolEntry, b: &&PoolEntry| {
        (a.yes_mass - 0.5)
            .abs()
            .partial_cmp(&(b.yes_mass - 0.5).abs())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.attribute.id.cmp(&b.attribute.id))
    };

    let held_by_top = banded
        .iter()
        .filter(|e| e.holders.contains(&top))
        .min_by(closest_to_half);
    let pick = held_by_top.or_else(|| banded.iter().min_by(closest_to_half));

    Ok(pick.map(|entry| Question::SoftConfirm {
        attribute: entry.attribute.clone(),
        top_candidate: top,
    }))
}
