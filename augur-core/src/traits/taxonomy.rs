use crate::errors::AugurResult;
use crate::models::{Attribute, Bundle};

/// Source of attribute and bundle records.
pub trait ITaxonomyProvider: Send + Sync {
    /// All askable attributes.
    fn attributes(&self) -> AugurResult<Vec<Attribute>>;

    /// All bundles.
    fn bundles(&self) -> AugurResult<Vec<Bundle>>;

    /// One attribute by id.
    fn attribute(&self, id: &str) -> AugurResult<Option<Attribute>> {
        Ok(self.attributes()?.into_iter().find(|a| a.id == id))
    }
}
