mod engine_error;

pub use engine_error::EngineError;

/// Convenience result alias used across the workspace.
pub type AugurResult<T> = Result<T, EngineError>;
