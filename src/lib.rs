//! Facade crate for the Itinera itinerary planner.
//!
//! This crate re-exports the core domain types and exposes the file-backed
//! catalog behind the `catalog-json` feature.

#![forbid(unsafe_code)]

pub use itinera_core::{
    Allocator, Attraction, CatalogProvider, Day, Itinerary, Matcher, MemoryCatalog, PlanError,
    PlanRequest, PlanRequestError, Planner, PreferenceCycling, RatingScorer, ScoreWeights,
    ScoreWeightsError, ScoredAttraction, ScoredBucketing, Scorer, Slot, Strategy,
    SubstringMatcher, TimeWindow, UnknownStrategy, rank,
};

#[cfg(feature = "catalog-json")]
pub use itinera_catalog::{JsonCatalog, JsonCatalogError, seed_attractions, write_seed_catalog};
