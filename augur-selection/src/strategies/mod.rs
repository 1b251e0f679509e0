//! Selection strategies and the ordered fallback chain.
//!
//! Every strategy has the same signature over `SelectionContext`, so the
//! chain itself is data: reorder or extend it without touching control
//! flow. A strategy that cannot form a question answers `None`; a strategy
//! whose providers come back empty surfaces `DataUnavailable`, which the
//! chain treats as `None` and descends past.

pub mod explore;
pub mod hard_confirm;
pub mod last_resort;
pub mod soft_confirm;

use tracing::{debug, warn};

use augur_core::errors::{AugurResult, EngineError};
use augur_core::models::{Question, QuestionKind};

use crate::context::SelectionContext;

/// One strategy: a pure function from the turn context to a question.
pub type StrategyFn = fn(&SelectionContext<'_>) -> AugurResult<Option<Question>>;

/// The explore fallback chain, evaluated in order until one entry yields.
pub const FALLBACK_CHAIN: &[(&str, StrategyFn)] = &[
    ("unified_explore", explore::unified),
    ("attribute_explore", explore::attributes_only),
    ("forced_hard_confirm", forced_hard_confirm),
    ("any_remaining", last_resort::select),
];

/// Run the fallback chain. `Ok(None)` means even the last resort found
/// nothing askable — the orchestration forces a terminal reveal.
pub fn run_fallback_chain(ctx: &SelectionContext<'_>) -> AugurResult<Option<Question>> {
    for (name, strategy) in FALLBACK_CHAIN {
        match strategy(ctx) {
            Ok(Some(question)) => {
                debug!(strategy = name, turn = ctx.turn_index, "strategy yielded a question");
                return Ok(Some(question));
            }
            Ok(None) => continue,
            Err(EngineError::DataUnavailable { what }) => {
                warn!(strategy = name, %what, "data unavailable, descending fallback chain");
                continue;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(None)
}

/// Hard confirm as a mid-chain fallback. Skipped when the previous question
/// was already a hard confirm — two may never run in direct succession.
fn forced_hard_confirm(ctx: &SelectionContext<'_>) -> AugurResult<Option<Question>> {
    if ctx.history.last_kind() == Some(QuestionKind::HardConfirm) {
        return Ok(None);
    }
    hard_confirm::select(ctx)
}
