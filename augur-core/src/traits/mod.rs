//! External-collaborator interfaces.
//!
//! The engine consumes, and never owns, the catalog, the taxonomy, and the
//! candidate–attribute matrix. All three are read-only lookups; the caller
//! decides storage, caching, and any parallelism between them.

mod catalog;
mod matrix;
mod taxonomy;

pub use catalog::ICatalogProvider;
pub use matrix::{holds, DenseMatrix, IAttributeMatrix};
pub use taxonomy::ITaxonomyProvider;
