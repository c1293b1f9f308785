//! Default catalog contents.

use camino::Utf8Path;
use itinera_core::Attraction;

use crate::{JsonCatalog, JsonCatalogError};

/// The four attractions installed by `itinera seed`.
#[must_use]
pub fn seed_attractions() -> Vec<Attraction> {
    vec![
        Attraction::new("a1", "Sun Temple")
            .with_category("heritage")
            .at(23.4, 85.5)
            .with_duration_mins(120)
            .with_rating(4.6)
            .with_image(
                "https://images.pexels.com/photos/6133440/pexels-photo-6133440.jpeg?auto=compress&cs=tinysrgb&w=800",
            ),
        Attraction::new("a2", "Dassam Falls")
            .with_category("nature")
            .at(23.2, 85.6)
            .with_duration_mins(90)
            .with_rating(4.8)
            .with_image("https://images.unsplash.com/photo-1501785888041-af3ef285b470"),
        Attraction::new("a3", "Patratu Valley")
            .with_category("nature")
            .at(23.7, 85.0)
            .with_duration_mins(150)
            .with_rating(4.7)
            .with_image("https://superbcollections.com/wp-content/uploads/2023/08/me4.png"),
        Attraction::new("a4", "Hillview Fort")
            .with_category("heritage")
            .at(23.52, 85.45)
            .with_duration_mins(100)
            .with_rating(4.4)
            .with_image("https://images.unsplash.com/photo-1482192596544-9eb780fc7f66"),
    ]
}

/// Write [`seed_attractions`] to a new catalog at `path`.
///
/// An existing file is left untouched.
///
/// # Errors
/// Returns [`JsonCatalogError::AlreadyExists`] when `path` is already
/// present, or the IO error that stopped the write.
pub fn write_seed_catalog(path: &Utf8Path) -> Result<JsonCatalog, JsonCatalogError> {
    let catalog = JsonCatalog::new(path);
    match catalog.write_new(&seed_attractions()) {
        Ok(()) => Ok(catalog),
        Err(err @ JsonCatalogError::AlreadyExists { .. }) => {
            log::warn!("not seeding {path}: a catalog already exists there");
            Err(err)
        }
        Err(err) => Err(err),
    }
}
