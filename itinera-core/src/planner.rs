//! The planning engine.
//!
//! [`Planner`] validates a [`PlanRequest`], hands the catalog to the
//! allocator selected by its [`Strategy`] and assembles the result into an
//! [`Itinerary`].

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    Allocator, Attraction, Itinerary, PlanRequest, PlanRequestError, PreferenceCycling,
    RatingScorer, ScoreWeights, ScoreWeightsError, ScoredBucketing, SubstringMatcher,
};

/// Which allocation policy the planner runs.
///
/// # Examples
/// ```
/// use itinera_core::Strategy;
///
/// assert_eq!("scored".parse::<Strategy>(), Ok(Strategy::Scored));
/// assert_eq!(Strategy::PreferenceCycled.to_string(), "preference-cycled");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Strategy {
    /// Score and rank the whole catalog, then bucket it by day.
    Scored,
    /// Pick one substring match per preference per day.
    #[default]
    PreferenceCycled,
}

impl Strategy {
    /// Return the strategy as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scored => "scored",
            Self::PreferenceCycled => "preference-cycled",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Strategy`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}' (expected 'scored' or 'preference-cycled')")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scored" => Ok(Self::Scored),
            "preference-cycled" => Ok(Self::PreferenceCycled),
            _ => Err(UnknownStrategy(s.to_owned())),
        }
    }
}

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Request parameters were invalid, e.g. zero days.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] PlanRequestError),
}

/// Turns a catalog snapshot and a request into an itinerary.
///
/// The planner holds no per-request state and never mutates the catalog,
/// so a single instance can be shared across threads.
///
/// # Examples
/// ```
/// use itinera_core::{Attraction, PlanRequest, Planner, Strategy};
///
/// # fn main() -> Result<(), itinera_core::PlanError> {
/// let catalog = vec![
///     Attraction::new("a1", "Sun Temple").with_category("heritage"),
///     Attraction::new("a2", "Dassam Falls").with_category("nature"),
/// ];
/// let planner = Planner::new(Strategy::PreferenceCycled);
/// let itinerary = planner.plan(&catalog, &PlanRequest::new(2).with_preference("heritage"))?;
/// assert_eq!(itinerary.days.len(), 2);
/// assert_eq!(itinerary.days[0].slots[0].title, "Sun Temple");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Planner {
    strategy: Strategy,
    bucketing: ScoredBucketing<RatingScorer>,
    cycling: PreferenceCycling<SubstringMatcher>,
}

impl Planner {
    /// Construct a planner for `strategy` with default score weights.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Replace the weights used by the scored strategy.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when a weight is negative or not
    /// finite.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Result<Self, ScoreWeightsError> {
        self.bucketing = ScoredBucketing::new(RatingScorer::new(weights.validate()?));
        Ok(self)
    }

    /// The strategy this planner runs.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    fn allocator(&self) -> &dyn Allocator {
        match self.strategy {
            Strategy::Scored => &self.bucketing,
            Strategy::PreferenceCycled => &self.cycling,
        }
    }

    /// Plan `request` against a catalog snapshot.
    ///
    /// # Errors
    /// Returns [`PlanError::InvalidRequest`] when the request fails
    /// validation. No partial itinerary is produced.
    pub fn plan(
        &self,
        catalog: &[Attraction],
        request: &PlanRequest,
    ) -> Result<Itinerary, PlanError> {
        log::debug!(
            "planning {} days over {} attractions with {} preferences ({})",
            request.days,
            catalog.len(),
            request.preferences.len(),
            self.strategy
        );
        let per_day = self.allocator().allocate(catalog, request)?;
        Ok(Itinerary::assemble(per_day))
    }
}
