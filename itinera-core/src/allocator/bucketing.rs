use crate::{
    Attraction, PlanRequest, PlanRequestError, RatingScorer, ScoredAttraction, Scorer, Slot,
    TimeWindow, rank,
};

use super::Allocator;

/// Rank the whole catalog and cut it into contiguous day buckets.
///
/// Every bucket holds `ceil(n / days)` attractions except the trailing
/// ones, which hold whatever is left and may be empty. Day 1 therefore
/// receives the best-scoring attractions. Within a day, attractions fill
/// consecutive two-hour blocks from 9:00 in rank order.
///
/// # Examples
/// ```
/// use itinera_core::{Allocator, Attraction, PlanRequest, RatingScorer, ScoredBucketing};
///
/// let catalog = vec![
///     Attraction::new("a1", "Sun Temple").with_rating(4.6),
///     Attraction::new("a2", "Dassam Falls").with_rating(4.8),
/// ];
/// let days = ScoredBucketing::<RatingScorer>::default()
///     .allocate(&catalog, &PlanRequest::new(2))
///     .expect("valid request");
/// assert_eq!(days[0][0].title, "Dassam Falls");
/// assert_eq!(days[1][0].title, "Sun Temple");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoredBucketing<S = RatingScorer> {
    scorer: S,
}

impl<S: Scorer> ScoredBucketing<S> {
    /// Construct the policy around `scorer`.
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Ranked attractions grouped by day, before rendering into slots.
    ///
    /// # Errors
    /// Returns [`PlanRequestError`] when the request fails validation.
    pub fn buckets<'a>(
        &self,
        catalog: &'a [Attraction],
        request: &PlanRequest,
    ) -> Result<Vec<Vec<ScoredAttraction<'a>>>, PlanRequestError> {
        request.validate()?;
        let ranked = rank(&self.scorer, catalog, &request.preferences, request.origin);
        let days = request.day_count();
        let per_day = ranked.len().div_ceil(days);
        log::debug!(
            "bucketing {} ranked attractions into {days} days of {per_day}",
            ranked.len()
        );
        let mut remaining = ranked.into_iter();
        Ok((0..days)
            .map(|_| remaining.by_ref().take(per_day).collect())
            .collect())
    }
}

impl<S: Scorer> Allocator for ScoredBucketing<S> {
    fn allocate(
        &self,
        catalog: &[Attraction],
        request: &PlanRequest,
    ) -> Result<Vec<Vec<Slot>>, PlanRequestError> {
        let buckets = self.buckets(catalog, request)?;
        Ok(buckets
            .into_iter()
            .map(|bucket| {
                bucket
                    .iter()
                    .enumerate()
                    .map(|(index, scored)| Slot::visit(scored.attraction, TimeWindow::block(index)))
                    .collect()
            })
            .collect())
    }
}
