//! # augur-session
//!
//! Per-turn orchestration of the guessing engine: decide confirm vs
//! explore, invoke the selector, apply the answer, check for a reveal,
//! handle reveal misses, and enforce the question budget.
//!
//! The engine holds no mutable shared state: every operation takes the
//! session state explicitly and many sessions may run concurrently (one
//! per end user) as long as states are not shared. `SessionManager` offers
//! a thread-safe map for exactly that.

pub mod engine;
pub mod manager;
pub mod state;

pub use engine::SessionEngine;
pub use manager::SessionManager;
pub use state::{NextAction, Outcome, RevealVerdict, SessionState, TurnOutcome, TurnPhase};
