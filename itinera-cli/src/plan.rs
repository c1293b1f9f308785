//! Plan command implementation for the Itinera CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use itinera_catalog::JsonCatalog;
use itinera_core::{CatalogProvider, Itinerary, PlanRequest, Planner, Strategy};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOG, ARG_PLAN_REQUEST, ARG_STRATEGY, CliError, DEFAULT_CATALOG, ENV_PLAN_REQUEST,
    write_json,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Plan a day-by-day itinerary. The request is a JSON document \
                 with `days`, `preferences` and an optional `origin`; the \
                 catalog is read from a JSON file of attractions.",
    about = "Plan an itinerary for a JSON request"
)]
#[ortho_config(prefix = "ITINERA")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing the plan request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the attraction catalog (defaults to `catalog.json`).
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Allocation policy: `scored` or `preference-cycled`.
    #[arg(long = ARG_STRATEGY, value_name = "name")]
    #[serde(default)]
    pub(crate) strategy: Option<Strategy>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the catalog document.
    pub(crate) catalog: Utf8PathBuf,
    /// Allocation policy.
    pub(crate) strategy: Strategy,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        Ok(Self {
            request_path,
            catalog: args
                .catalog
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG)),
            strategy: args.strategy.unwrap_or_default(),
        })
    }
}

pub(super) fn run_plan(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let itinerary = execute_plan(&config)?;
    write_json(writer, &itinerary)
}

pub(super) fn execute_plan(config: &PlanConfig) -> Result<Itinerary, CliError> {
    let request = load_plan_request(&config.request_path)?;
    let attractions = JsonCatalog::new(config.catalog.clone()).attractions()?;
    log::info!(
        "planning {} days from {} ({} attractions, {})",
        request.days,
        config.catalog,
        attractions.len(),
        config.strategy
    );
    Planner::new(config.strategy)
        .plan(&attractions, &request)
        .map_err(|source| CliError::InvalidPlanRequest {
            path: config.request_path.clone(),
            source,
        })
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenPlanRequest {
            path: path.to_path_buf(),
            source,
        }
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
