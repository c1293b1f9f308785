//! Seed command: install the default catalog.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use itinera_catalog::write_seed_catalog;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_CATALOG, CliError, DEFAULT_CATALOG};

/// CLI arguments for the `seed` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "seed",
    long_about = "Write the default attractions to a new catalog file. An \
                 existing catalog is never overwritten.",
    about = "Write the default attractions to a new catalog"
)]
#[ortho_config(prefix = "ITINERA")]
pub(crate) struct SeedArgs {
    /// Where to write the catalog (defaults to `catalog.json`).
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

pub(super) fn run_seed(args: SeedArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    seed_catalog(merged, writer)
}

pub(super) fn seed_catalog(args: SeedArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let path = args
        .catalog
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG));
    let catalog = write_seed_catalog(&path)?;
    writeln!(writer, "seeded catalog at {}", catalog.path()).map_err(CliError::WriteOutput)
}
