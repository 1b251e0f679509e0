//! Caller-owned read-through cache over a taxonomy provider.
//!
//! Sessions hit the taxonomy every turn for the same attribute and bundle
//! lists. This cache is an explicit object the caller constructs and owns —
//! not a module-level singleton — and invalidation is an explicit call, not
//! an implicit TTL expiry. Wraps any `ITaxonomyProvider` and is itself one,
//! so the engine does not know whether it reads through a cache.

use std::sync::Arc;

use moka::sync::Cache;

use augur_core::errors::{AugurResult, EngineError};
use augur_core::models::{Attribute, Bundle};
use augur_core::traits::ITaxonomyProvider;

pub struct TaxonomyCache<P> {
    inner: P,
    attributes: Cache<(), Arc<Vec<Attribute>>>,
    bundles: Cache<(), Arc<Vec<Bundle>>>,
}

impl<P: ITaxonomyProvider> TaxonomyCache<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            attributes: Cache::new(1),
            bundles: Cache::new(1),
        }
    }

    /// Drop all cached taxonomy data. Call after curation changes.
    pub fn invalidate_all(&self) {
        self.attributes.invalidate_all();
        self.bundles.invalidate_all();
    }
}

impl<P: ITaxonomyProvider> ITaxonomyProvider for TaxonomyCache<P> {
    fn attributes(&self) -> AugurResult<Vec<Attribute>> {
        let cached = self
            .attributes
            .try_get_with((), || self.inner.attributes().map(Arc::new))
            .map_err(|e: Arc<EngineError>| EngineError::DataUnavailable {
                what: format!("taxonomy attributes: {e}"),
            })?;
        Ok(cached.as_ref().clone())
    }

    fn bundles(&self) -> AugurResult<Vec<Bundle>> {
        let cached = self
            .bundles
            .try_get_with((), || self.inner.bundles().map(Arc::new))
            .map_err(|e: Arc<EngineError>| EngineError::DataUnavailable {
                what: format!("taxonomy bundles: {e}"),
            })?;
        Ok(cached.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTaxonomy {
        calls: AtomicUsize,
    }

    impl ITaxonomyProvider for CountingTaxonomy {
        fn attributes(&self) -> AugurResult<Vec<Attribute>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }

        fn bundles(&self) -> AugurResult<Vec<Bundle>> {
            Ok(vec![])
        }
    }

    #[test]
    fn reads_through_once_until_invalidated() {
        let cache = TaxonomyCache::new(CountingTaxonomy {
            calls: AtomicUsize::new(0),
        });

        cache.attributes().unwrap();
        cache.attributes().unwrap();
        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 1);

        cache.invalidate_all();
        cache.attributes().unwrap();
        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 2);
    }
}
