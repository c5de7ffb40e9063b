use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error reading catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Catalog record {index} has no '{field}' field")]
    MissingReference { index: usize, field: &'static str },

    #[error("Catalog record {index} has an unusable '{field}' value: {value}")]
    InvalidReference {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("Star {key} not found in collection '{collection}'")]
    NotFound { collection: String, key: String },

    #[error("Stored record for star {key} could not be decoded: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store error: {0}")]
    Store(#[from] redis::RedisError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
