//! Score attractions for a traveler.
//!
//! The [`Scorer`] trait assigns a desirability score to an [`Attraction`]
//! given the traveler's preference keywords and, optionally, where they
//! start from. [`rank`] orders a whole catalog by those scores.

use geo::Coord;
use thiserror::Error;

use crate::Attraction;

/// Calculate a desirability score for an attraction.
///
/// Higher scores rank earlier. Implementations must be pure and
/// thread-safe (`Send` + `Sync`) so one scorer can serve concurrent
/// requests. Return `0.0` when nothing is known about the attraction.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use itinera_core::{Attraction, Scorer};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(
///         &self,
///         _attraction: &Attraction,
///         _preferences: &[String],
///         _origin: Option<Coord<f64>>,
///     ) -> f64 {
///         1.0
///     }
/// }
///
/// let attraction = Attraction::new("a1", "Sun Temple");
/// assert_eq!(FlatScorer.score(&attraction, &[], None), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `attraction`.
    fn score(
        &self,
        attraction: &Attraction,
        preferences: &[String],
        origin: Option<Coord<f64>>,
    ) -> f64;
}

/// Constants used by [`RatingScorer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier applied to the rating.
    pub rating_multiplier: f64,
    /// Bonus when the category is one of the preferences.
    pub category_bonus: f64,
    /// Bonus for an attraction sitting exactly on the origin.
    pub proximity_bonus: f64,
    /// Bonus lost per degree of distance from the origin.
    pub proximity_decay: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            rating_multiplier: 10.0,
            category_bonus: 20.0,
            proximity_bonus: 10.0,
            proximity_decay: 5.0,
        }
    }
}

/// Errors returned by [`ScoreWeights::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreWeightsError {
    /// A weight was negative, NaN or infinite.
    #[error("score weight `{field}` must be finite and non-negative")]
    InvalidWeight {
        /// Name of the offending weight.
        field: &'static str,
    },
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError::InvalidWeight`] naming the first weight
    /// that is negative or not finite.
    pub fn validate(self) -> Result<Self, ScoreWeightsError> {
        let fields = [
            ("rating_multiplier", self.rating_multiplier),
            ("category_bonus", self.category_bonus),
            ("proximity_bonus", self.proximity_bonus),
            ("proximity_decay", self.proximity_decay),
        ];
        fields
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
            .map_or(Ok(self), |(field, _)| {
                Err(ScoreWeightsError::InvalidWeight { field })
            })
    }
}

/// Rating-led scorer with category and proximity bonuses.
///
/// - the rating times `rating_multiplier`;
/// - plus `category_bonus` when the stored category is non-empty and,
///   verbatim, one of the preferences (no case folding or substring
///   matching);
/// - plus `proximity_bonus - proximity_decay * d` floored at zero, where
///   `d` is the planar distance in degrees between the origin and the
///   attraction. Skipped when either location is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingScorer {
    weights: ScoreWeights,
}

impl RatingScorer {
    /// Construct a scorer using the given weights.
    #[must_use]
    pub const fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    fn category_bonus(&self, attraction: &Attraction, preferences: &[String]) -> f64 {
        if !attraction.category.is_empty() && preferences.contains(&attraction.category) {
            self.weights.category_bonus
        } else {
            0.0
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the bonus decays linearly with planar distance"
    )]
    fn proximity_bonus(&self, attraction: &Attraction, origin: Option<Coord<f64>>) -> f64 {
        let Some((location, origin_point)) = attraction.location.zip(origin) else {
            return 0.0;
        };
        let delta = location - origin_point;
        let distance = delta.x.hypot(delta.y);
        (self.weights.proximity_bonus - distance * self.weights.proximity_decay).max(0.0)
    }
}

impl Scorer for RatingScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "scores combine weighted rating with additive bonuses"
    )]
    fn score(
        &self,
        attraction: &Attraction,
        preferences: &[String],
        origin: Option<Coord<f64>>,
    ) -> f64 {
        let total = attraction.scoring_rating() * self.weights.rating_multiplier
            + self.category_bonus(attraction, preferences)
            + self.proximity_bonus(attraction, origin);
        if total.is_finite() { total } else { 0.0 }
    }
}

/// An attraction paired with the score it earned for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredAttraction<'a> {
    /// The catalog entry.
    pub attraction: &'a Attraction,
    /// Score assigned by the scorer.
    pub score: f64,
}

/// Score every attraction and sort them best first.
///
/// The sort is stable, so attractions with equal scores keep their
/// catalog order.
///
/// # Examples
/// ```
/// use itinera_core::{Attraction, RatingScorer, rank};
///
/// let catalog = vec![
///     Attraction::new("a1", "Sun Temple").with_rating(4.6),
///     Attraction::new("a2", "Dassam Falls").with_rating(4.8),
/// ];
/// let ranked = rank(&RatingScorer::default(), &catalog, &[], None);
/// assert_eq!(ranked[0].attraction.id, "a2");
/// ```
#[must_use]
pub fn rank<'a, S>(
    scorer: &S,
    catalog: &'a [Attraction],
    preferences: &[String],
    origin: Option<Coord<f64>>,
) -> Vec<ScoredAttraction<'a>>
where
    S: Scorer + ?Sized,
{
    let mut scored: Vec<ScoredAttraction<'a>> = catalog
        .iter()
        .map(|attraction| ScoredAttraction {
            attraction,
            score: scorer.score(attraction, preferences, origin),
        })
        .collect();
    scored.sort_by(|left, right| right.score.total_cmp(&left.score));
    scored
}
