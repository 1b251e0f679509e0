//! Engine configuration.
//!
//! Every numeric knob the algorithm uses is supplied here, per session;
//! nothing is hardcoded in the selection or update code. All structs are
//! `#[serde(default)]` so callers can override only what they need.

pub mod defaults;

mod confirm_config;
mod coverage_config;
mod engine_config;
mod reveal_config;
mod selection_config;
mod update_config;

pub use confirm_config::ConfirmConfig;
pub use coverage_config::{CoverageConfig, CoverageMode};
pub use engine_config::EngineConfig;
pub use reveal_config::RevealConfig;
pub use selection_config::SelectionConfig;
pub use update_config::{StrengthTable, UpdateConfig, UpdatePolicy};
