//! Attractions supplied by a catalog.

use geo::Coord;

/// A point of interest that can be scheduled into an itinerary.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. A
/// location is only present when both latitude and longitude are known.
///
/// # Examples
/// ```
/// use itinera_core::Attraction;
///
/// let falls = Attraction::new("a2", "Dassam Falls")
///     .with_category("nature")
///     .with_rating(4.8)
///     .at(23.2, 85.6);
///
/// assert_eq!(falls.latitude(), Some(23.2));
/// assert_eq!(falls.longitude(), Some(85.6));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "crate::wire::AttractionRecord",
        into = "crate::wire::AttractionRecord"
    )
)]
pub struct Attraction {
    /// Identifier, unique within one catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text category label, empty when unknown.
    pub category: String,
    /// Geographic position, if known.
    pub location: Option<Coord<f64>>,
    /// Expected visit duration in minutes.
    pub duration_mins: Option<u32>,
    /// Quality rating in `0.0..=5.0`.
    pub rating: Option<f64>,
    /// Image reference shown alongside the attraction.
    pub img: Option<String>,
}

impl Attraction {
    /// Construct an attraction with an identifier and a display name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Place the attraction at `lat`/`lon` degrees.
    #[must_use]
    pub const fn at(mut self, lat: f64, lon: f64) -> Self {
        self.location = Some(Coord { x: lon, y: lat });
        self
    }

    /// Set the expected visit duration.
    #[must_use]
    pub const fn with_duration_mins(mut self, minutes: u32) -> Self {
        self.duration_mins = Some(minutes);
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, img: impl Into<String>) -> Self {
        self.img = Some(img.into());
        self
    }

    /// Latitude in degrees, if the location is known.
    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.location.map(|coord| coord.y)
    }

    /// Longitude in degrees, if the location is known.
    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.location.map(|coord| coord.x)
    }

    /// Rating usable as a scoring input.
    ///
    /// Missing, negative and non-finite ratings all read as `0.0`.
    #[must_use]
    pub fn scoring_rating(&self) -> f64 {
        self.rating
            .filter(|rating| rating.is_finite())
            .map_or(0.0, |rating| rating.max(0.0))
    }
}
