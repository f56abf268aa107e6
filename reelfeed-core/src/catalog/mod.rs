//! Catalog backends: the source port plus the simulated implementation.

pub mod mock;
pub mod port;

pub use mock::MockCatalog;
pub use port::CatalogSource;
