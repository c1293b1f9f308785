//! Errors raised while reading or writing catalog documents.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by [`JsonCatalog`](crate::JsonCatalog) and
/// [`write_seed_catalog`](crate::write_seed_catalog).
#[derive(Debug, Error)]
pub enum JsonCatalogError {
    /// The catalog file could not be opened.
    #[error("failed to open catalog at {path:?}: {source}")]
    Open {
        /// Catalog location.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// The catalog file is not a valid attraction document.
    #[error("failed to parse catalog JSON at {path:?}: {source}")]
    Parse {
        /// Catalog location.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: serde_json::Error,
    },
    /// The parent directory for a new catalog could not be created.
    #[error("failed to create parent directory for {path:?}: {source}")]
    CreateParent {
        /// Catalog location.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing the catalog file failed.
    #[error("failed to write catalog to {path:?}: {source}")]
    Write {
        /// Catalog location.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// A catalog already exists at the target path.
    #[error("catalog {path:?} already exists; refusing to overwrite")]
    AlreadyExists {
        /// Catalog location.
        path: Utf8PathBuf,
    },
    /// Encoding the catalog as JSON failed.
    #[error("failed to serialise catalog for {path:?}: {source}")]
    Serialise {
        /// Catalog location.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: serde_json::Error,
    },
}
