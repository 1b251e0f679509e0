//! Last resort: any attribute any remaining candidate holds that has not
//! been asked, ignoring coverage and p-band constraints.
//!
//! This is the guarantee that the engine never dead-ends while an askable
//! attribute remains; it only runs once every gated strategy came up empty.

use augur_core::errors::AugurResult;
use augur_core::models::{ExploreTarget, Question};

use crate::context::SelectionContext;
use crate::pool;

pub fn select(ctx: &SelectionContext<'_>) -> AugurResult<Option<Question>> {
    // attribute_entries without coverage still applies history exclusion
    // and only includes attributes with at least one link in the matrix
    // via holder computation — but holders may legitimately be empty or
    // universal here.
    let entries = pool::attribute_entries(ctx, false)?;

    let pick = entries.into_iter().find(|entry| {
        entry
            .holders
            .iter()
            .any(|id| ctx.weights.get(id) > 0.0)
    });

    Ok(pick.map(|entry| Question::Explore {
        target: ExploreTarget::Attribute {
            attribute: entry.attribute,
        },
    }))
}
