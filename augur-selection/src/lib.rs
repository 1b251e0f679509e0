//! # augur-selection
//!
//! Chooses which attribute/fact to ask next. Three modes, picked by the
//! orchestration (never by the selector itself):
//!
//! | Mode | Policy |
//! |------|--------|
//! | Explore | minimize expected post-answer entropy over the gated pool |
//! | SoftConfirm | validate the leader via an inferred trait in the p-band |
//! | HardConfirm | probe a discriminating fact about the top-K candidates |
//!
//! The Explore fallback chain is an ordered list of strategy functions with
//! one shared signature, evaluated until one yields a question; the final
//! entry ignores every statistical constraint, so the engine never
//! dead-ends while any askable attribute remains.

pub mod cache;
pub mod context;
pub mod entropy;
pub mod pool;
pub mod strategies;

pub use cache::TaxonomyCache;
pub use context::SelectionContext;
pub use strategies::{run_fallback_chain, StrategyFn};
