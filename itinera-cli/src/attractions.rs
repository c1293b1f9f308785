//! Attractions command: print the catalog or a single entry.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use itinera_catalog::JsonCatalog;
use itinera_core::CatalogProvider;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_ATTRACTION_ID, ARG_CATALOG, CliError, DEFAULT_CATALOG, write_json};

/// CLI arguments for the `attractions` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "attractions", about = "Show the attractions in the catalog")]
#[ortho_config(prefix = "ITINERA")]
pub(crate) struct AttractionsArgs {
    /// Path to the attraction catalog (defaults to `catalog.json`).
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Show only the attraction with this identifier.
    #[arg(long = ARG_ATTRACTION_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) id: Option<String>,
}

pub(super) fn run_attractions(
    args: AttractionsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    list_attractions(merged, writer)
}

pub(super) fn list_attractions(
    args: AttractionsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let path = args
        .catalog
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG));
    let catalog = JsonCatalog::new(path);
    let Some(id) = args.id else {
        return write_json(writer, &catalog.attractions()?);
    };
    let attraction = catalog
        .attraction(&id)?
        .ok_or_else(|| CliError::UnknownAttraction {
            id,
            path: catalog.path().to_path_buf(),
        })?;
    write_json(writer, &attraction)
}
