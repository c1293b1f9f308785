//! Match attractions against a single preference keyword.

use crate::Attraction;

/// Select the attractions that satisfy one preference.
///
/// Implementations must return matches in catalog order so that
/// round-robin picks stay deterministic.
pub trait Matcher: Send + Sync {
    /// Return the attractions in `catalog` matching `preference`.
    fn matches<'a>(&self, catalog: &'a [Attraction], preference: &str) -> Vec<&'a Attraction>;
}

/// Case-insensitive substring match on the category label.
///
/// Looser than the exact comparison [`RatingScorer`](crate::RatingScorer)
/// uses for its category bonus: `"fall"` matches `"Waterfalls"`, and an
/// empty preference matches everything.
///
/// # Examples
/// ```
/// use itinera_core::{Attraction, Matcher, SubstringMatcher};
///
/// let catalog = vec![
///     Attraction::new("w1", "Hundru").with_category("Waterfalls"),
///     Attraction::new("t1", "Sun Temple").with_category("heritage"),
/// ];
/// let found = SubstringMatcher.matches(&catalog, "fall");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].id, "w1");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstringMatcher;

impl Matcher for SubstringMatcher {
    fn matches<'a>(&self, catalog: &'a [Attraction], preference: &str) -> Vec<&'a Attraction> {
        let needle = preference.to_lowercase();
        catalog
            .iter()
            .filter(|attraction| attraction.category.to_lowercase().contains(&needle))
            .collect()
    }
}
