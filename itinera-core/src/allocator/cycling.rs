use crate::{
    Attraction, Matcher, PlanRequest, PlanRequestError, Slot, SubstringMatcher, TimeWindow,
};

use super::{Allocator, round_robin};

/// Fill each day with one pick per preference, rotating picks across days.
///
/// For day `i` (1-based) and each preference in order, the policy takes
/// match number `i % matches` so successive days surface different
/// attractions from the same match set. Picks occupy consecutive two-hour
/// blocks from 9:00. A preference with no matches contributes nothing; a
/// day left without any slot gets a single fallback visit to catalog entry
/// `i % n` from 10:00 to 12:00, unless the catalog is empty.
///
/// # Examples
/// ```
/// use itinera_core::{Allocator, Attraction, PlanRequest, PreferenceCycling, SubstringMatcher};
///
/// let catalog = vec![
///     Attraction::new("a2", "Dassam Falls").with_category("nature"),
///     Attraction::new("a3", "Patratu Valley").with_category("nature"),
/// ];
/// let request = PlanRequest::new(2).with_preference("nature");
/// let days = PreferenceCycling::<SubstringMatcher>::default()
///     .allocate(&catalog, &request)
///     .expect("valid request");
/// assert_eq!(days[0][0].title, "Patratu Valley");
/// assert_eq!(days[1][0].title, "Dassam Falls");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferenceCycling<M = SubstringMatcher> {
    matcher: M,
}

impl<M: Matcher> PreferenceCycling<M> {
    /// Construct the policy around `matcher`.
    #[must_use]
    pub const fn new(matcher: M) -> Self {
        Self { matcher }
    }

    fn day_slots(catalog: &[Attraction], matches: &[Vec<&Attraction>], day: usize) -> Vec<Slot> {
        let mut slots = Vec::new();
        for pick in matches.iter().filter_map(|found| round_robin(found, day)) {
            slots.push(Slot::visit(pick, TimeWindow::block(slots.len())));
        }
        if slots.is_empty()
            && let Some(pick) = round_robin(catalog, day)
        {
            slots.push(Slot::fallback(pick));
        }
        slots
    }
}

impl<M: Matcher> Allocator for PreferenceCycling<M> {
    fn allocate(
        &self,
        catalog: &[Attraction],
        request: &PlanRequest,
    ) -> Result<Vec<Vec<Slot>>, PlanRequestError> {
        request.validate()?;
        // Matches do not depend on the day, so look them up once.
        let matches: Vec<Vec<&Attraction>> = request
            .preferences
            .iter()
            .map(|preference| self.matcher.matches(catalog, preference))
            .collect();
        for (preference, found) in request.preferences.iter().zip(&matches) {
            if found.is_empty() {
                log::debug!("no attraction matches preference {preference:?}");
            }
        }
        Ok((1..=request.day_count())
            .map(|day| Self::day_slots(catalog, &matches, day))
            .collect())
    }
}
