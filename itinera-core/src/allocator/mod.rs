//! Allocation of attractions into days.
//!
//! Two policies turn a catalog into per-day slot lists:
//!
//! - [`ScoredBucketing`] scores and ranks the whole catalog, then cuts the
//!   ranking into equally sized contiguous buckets, one per day.
//! - [`PreferenceCycling`] walks the preferences for every day and picks one
//!   match per preference, rotating through the matches from day to day.
//!
//! The policies are not interchangeable: the first favours highly rated
//! attractions and uses exact category matches, the second follows the
//! traveler's keywords loosely and may repeat attractions across days.

mod bucketing;
mod cycling;

pub use bucketing::ScoredBucketing;
pub use cycling::PreferenceCycling;

use crate::{Attraction, PlanRequest, PlanRequestError, Slot};

/// Split a catalog into ordered per-day slot lists.
///
/// The outer vector has exactly `request.days` entries. Implementations
/// must be deterministic and must not mutate the catalog. They are
/// `Send + Sync` so one allocator can serve concurrent requests.
pub trait Allocator: Send + Sync {
    /// Allocate `catalog` across the days of `request`.
    ///
    /// # Errors
    /// Returns [`PlanRequestError`] when the request fails validation.
    fn allocate(
        &self,
        catalog: &[Attraction],
        request: &PlanRequest,
    ) -> Result<Vec<Vec<Slot>>, PlanRequestError>;
}

/// Pick the `day`-th element, wrapping around; `None` when `items` is empty.
fn round_robin<T>(items: &[T], day: usize) -> Option<&T> {
    day.checked_rem(items.len()).and_then(|index| items.get(index))
}

#[cfg(test)]
mod tests {
    use super::round_robin;
    use rstest::rstest;

    #[rstest]
    #[case(1, Some(&'b'))]
    #[case(2, Some(&'c'))]
    #[case(3, Some(&'a'))]
    fn round_robin_wraps(#[case] day: usize, #[case] expected: Option<&char>) {
        assert_eq!(round_robin(&['a', 'b', 'c'], day), expected);
    }

    #[rstest]
    fn round_robin_on_empty_is_none() {
        assert_eq!(round_robin::<char>(&[], 1), None);
    }
}
