use crate::errors::AugurResult;
use crate::models::Candidate;

/// Source of the candidate set and its popularity signals.
///
/// Callers apply any inclusion rule (origin/category gates) before handing
/// the provider to a session; the engine asks once, at session start.
pub trait ICatalogProvider: Send + Sync {
    fn candidates(&self) -> AugurResult<Vec<Candidate>>;
}

/// A fixed, pre-filtered candidate list.
impl ICatalogProvider for Vec<Candidate> {
    fn candidates(&self) -> AugurResult<Vec<Candidate>> {
        Ok(self.clone())
    }
}
