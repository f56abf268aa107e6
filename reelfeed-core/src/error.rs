use reelfeed_model::ItemId;
use thiserror::Error;

/// Failures surfaced by catalog backends.
///
/// Page-fetch failures are classified uniformly: the controller treats every
/// one as recoverable and folds it into its error flag rather than exposing
/// sub-kinds to presentation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("page fetch failed: {0}")]
    FetchFailed(String),

    #[error("item not found: {0}")]
    ItemNotFound(ItemId),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
