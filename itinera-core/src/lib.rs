//! Core domain types and planning logic for the Itinera engine.
//!
//! A catalog of [`Attraction`]s and a traveler's [`PlanRequest`] go in; a
//! day-by-day [`Itinerary`] comes out. Two allocation policies are
//! available and selected through [`Strategy`]:
//!
//! - [`Strategy::Scored`] ranks the catalog with a [`Scorer`] and splits
//!   the ranking into day buckets ([`ScoredBucketing`]).
//! - [`Strategy::PreferenceCycled`] matches each preference with a
//!   [`Matcher`] and rotates picks across days ([`PreferenceCycling`]).
//!
//! Everything here is pure and synchronous; identical inputs give
//! identical itineraries.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod allocator;
pub mod attraction;
pub mod catalog;
pub mod itinerary;
pub mod matcher;
pub mod planner;
pub mod request;
pub mod scorer;
#[cfg(feature = "serde")]
mod wire;

pub use allocator::{Allocator, PreferenceCycling, ScoredBucketing};
pub use attraction::Attraction;
pub use catalog::{CatalogProvider, MemoryCatalog};
pub use itinerary::{Day, Itinerary, Slot, TimeWindow};
pub use matcher::{Matcher, SubstringMatcher};
pub use planner::{PlanError, Planner, Strategy, UnknownStrategy};
pub use request::{PlanRequest, PlanRequestError};
pub use scorer::{RatingScorer, ScoreWeights, ScoreWeightsError, ScoredAttraction, Scorer, rank};
