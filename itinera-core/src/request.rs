//! Traveler requests.

use geo::Coord;
use thiserror::Error;

/// What the traveler asked for.
///
/// Fields are public so request-handling layers can assemble requests
/// directly; [`PlanRequest::validate`] reports anything the planner cannot
/// work with.
///
/// # Examples
/// ```
/// use itinera_core::PlanRequest;
///
/// let request = PlanRequest::new(3)
///     .with_preference("nature")
///     .with_origin(23.4, 85.5);
/// assert_eq!(request.days, 3);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "crate::wire::PlanRequestRecord",
        into = "crate::wire::PlanRequestRecord"
    )
)]
pub struct PlanRequest {
    /// Trip length in days.
    pub days: u32,
    /// Category keywords in the order the traveler gave them.
    pub preferences: Vec<String>,
    /// Starting point (`x = longitude`, `y = latitude`).
    pub origin: Option<Coord<f64>>,
}

/// Reasons a [`PlanRequest`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanRequestError {
    /// The trip must last at least one day.
    #[error("days must be at least 1")]
    ZeroDays,
    /// The origin contained NaN or infinite coordinates.
    #[error("origin coordinates must be finite")]
    NonFiniteOrigin,
}

impl PlanRequest {
    /// A request for `days` days with no preferences and no origin.
    #[must_use]
    pub const fn new(days: u32) -> Self {
        Self {
            days,
            preferences: Vec::new(),
            origin: None,
        }
    }

    /// Append a preference keyword.
    #[must_use]
    pub fn with_preference(mut self, preference: impl Into<String>) -> Self {
        self.preferences.push(preference.into());
        self
    }

    /// Replace the preference list.
    #[must_use]
    pub fn with_preferences<I, S>(mut self, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferences = preferences.into_iter().map(Into::into).collect();
        self
    }

    /// Set the starting point from `lat`/`lon` degrees.
    #[must_use]
    pub const fn with_origin(mut self, lat: f64, lon: f64) -> Self {
        self.origin = Some(Coord { x: lon, y: lat });
        self
    }

    /// Check the request can be planned.
    ///
    /// # Errors
    /// Returns [`PlanRequestError::ZeroDays`] when `days` is zero and
    /// [`PlanRequestError::NonFiniteOrigin`] when the origin is not a finite
    /// coordinate.
    pub fn validate(&self) -> Result<(), PlanRequestError> {
        if self.days == 0 {
            return Err(PlanRequestError::ZeroDays);
        }
        if self
            .origin
            .is_some_and(|origin| !(origin.x.is_finite() && origin.y.is_finite()))
        {
            return Err(PlanRequestError::NonFiniteOrigin);
        }
        Ok(())
    }

    /// Trip length as a collection size.
    pub(crate) fn day_count(&self) -> usize {
        usize::try_from(self.days).unwrap_or(usize::MAX)
    }
}
