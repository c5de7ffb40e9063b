use star_catalog::CatalogError;
use thiserror::Error;

/// Errors that stop alert generation.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Catalog size must be at least 1")]
    EmptyCatalog,
}
