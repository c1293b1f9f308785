//! Error types emitted by the Itinera CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use itinera_catalog::JsonCatalogError;
use itinera_core::PlanError;
use thiserror::Error;

/// Errors emitted by the Itinera CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that also sets it.
        env: &'static str,
    },
    /// Opening the plan request file failed.
    #[error("failed to open plan request at {path:?}: {source}")]
    OpenPlanRequest {
        /// Offending file.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Plan request JSON could not be decoded.
    #[error("failed to parse plan request JSON at {path:?}: {source}")]
    ParsePlanRequest {
        /// Offending file.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: serde_json::Error,
    },
    /// The planner rejected the request.
    #[error("plan request in {path:?} was rejected: {source}")]
    InvalidPlanRequest {
        /// Offending file.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: PlanError,
    },
    /// Reading or writing the catalog failed.
    #[error(transparent)]
    Catalog(#[from] JsonCatalogError),
    /// No attraction with the requested identifier exists.
    #[error("no attraction with id {id:?} in {path:?}")]
    UnknownAttraction {
        /// Identifier that was looked up.
        id: String,
        /// Catalog that was searched.
        path: Utf8PathBuf,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
