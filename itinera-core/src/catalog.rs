//! Read-only access to the attraction catalog.
//!
//! The planner never fetches data itself; a request-handling layer takes a
//! snapshot from a [`CatalogProvider`] and passes it to
//! [`Planner::plan`](crate::Planner::plan).

use std::convert::Infallible;

use crate::Attraction;

/// Source of attraction snapshots.
///
/// Each call to [`CatalogProvider::attractions`] returns one snapshot;
/// ordering must be stable within a snapshot because allocation picks by
/// position.
///
/// # Examples
///
/// ```rust
/// use itinera_core::{Attraction, CatalogProvider, MemoryCatalog};
///
/// let catalog = MemoryCatalog::with_attractions([Attraction::new("a1", "Sun Temple")]);
/// let found = catalog.attraction("a1").unwrap();
/// assert_eq!(found.map(|a| a.name), Some("Sun Temple".to_owned()));
/// ```
pub trait CatalogProvider {
    /// Error raised when the snapshot cannot be read.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return every attraction in catalog order.
    ///
    /// # Errors
    /// Implementations report storage failures through `Self::Error`.
    fn attractions(&self) -> Result<Vec<Attraction>, Self::Error>;

    /// Return the attraction with the given identifier, if any.
    ///
    /// The default implementation scans a fresh snapshot.
    ///
    /// # Errors
    /// Propagates failures from [`CatalogProvider::attractions`].
    fn attraction(&self, id: &str) -> Result<Option<Attraction>, Self::Error> {
        Ok(self
            .attractions()?
            .into_iter()
            .find(|attraction| attraction.id == id))
    }
}

/// In-memory catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryCatalog {
    attractions: Vec<Attraction>,
}

impl MemoryCatalog {
    /// Create a catalog from a collection of attractions.
    pub fn with_attractions<I>(attractions: I) -> Self
    where
        I: IntoIterator<Item = Attraction>,
    {
        Self {
            attractions: attractions.into_iter().collect(),
        }
    }
}

impl CatalogProvider for MemoryCatalog {
    type Error = Infallible;

    fn attractions(&self) -> Result<Vec<Attraction>, Self::Error> {
        Ok(self.attractions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn snapshot_preserves_order() {
        let catalog = MemoryCatalog::with_attractions([
            Attraction::new("a2", "Dassam Falls"),
            Attraction::new("a1", "Sun Temple"),
        ]);
        let ids: Vec<String> = catalog
            .attractions()
            .unwrap_or_default()
            .into_iter()
            .map(|attraction| attraction.id)
            .collect();
        assert_eq!(ids, vec!["a2", "a1"]);
    }

    #[rstest]
    #[case("a1", true)]
    #[case("zz", false)]
    fn lookup_by_id(#[case] id: &str, #[case] found: bool) {
        let catalog = MemoryCatalog::with_attractions([Attraction::new("a1", "Sun Temple")]);
        assert_eq!(catalog.attraction(id).ok().flatten().is_some(), found);
    }
}
