//! Day-by-day itineraries and their assembly.

use std::fmt;

use crate::Attraction;

/// First hour of the regular two-hour visiting blocks.
const FIRST_BLOCK_START_HOUR: u32 = 9;
/// Length of a visiting block in hours.
const BLOCK_HOURS: u32 = 2;

/// Hour range of a slot, rendered as `"9:00 - 11:00"`.
///
/// Hours are not zero padded and are not wrapped at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Start hour.
    pub start_hour: u32,
    /// End hour.
    pub end_hour: u32,
}

impl TimeWindow {
    /// Window used for a day's fallback pick.
    pub const FALLBACK: Self = Self {
        start_hour: 10,
        end_hour: 12,
    };

    /// The `index`-th two-hour block of a day, counted from 9:00.
    ///
    /// # Examples
    /// ```
    /// use itinera_core::TimeWindow;
    ///
    /// assert_eq!(TimeWindow::block(0).to_string(), "9:00 - 11:00");
    /// assert_eq!(TimeWindow::block(2).to_string(), "13:00 - 15:00");
    /// ```
    #[must_use]
    pub fn block(index: usize) -> Self {
        let offset = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(BLOCK_HOURS);
        let start_hour = FIRST_BLOCK_START_HOUR.saturating_add(offset);
        Self {
            start_hour,
            end_hour: start_hour.saturating_add(BLOCK_HOURS),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:00 - {}:00", self.start_hour, self.end_hour)
    }
}

/// One scheduled activity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    /// Time range such as `"9:00 - 11:00"`.
    pub time: String,
    /// Attraction name.
    pub title: String,
    /// Short description of the visit.
    pub desc: String,
    /// Latitude copied from the attraction.
    pub lat: Option<f64>,
    /// Longitude copied from the attraction.
    pub lon: Option<f64>,
    /// Image reference copied from the attraction.
    pub img: Option<String>,
}

impl Slot {
    /// A regular visit to `attraction` during `window`.
    #[must_use]
    pub fn visit(attraction: &Attraction, window: TimeWindow) -> Self {
        let desc = if attraction.category.is_empty() {
            format!("Visit {}.", attraction.name)
        } else {
            format!(
                "Visit {}, a popular {} attraction.",
                attraction.name, attraction.category
            )
        };
        Self::render(attraction, window, desc)
    }

    /// The catch-all visit used when nothing matched a day's preferences.
    #[must_use]
    pub fn fallback(attraction: &Attraction) -> Self {
        let desc = format!("Explore {}.", attraction.name);
        Self::render(attraction, TimeWindow::FALLBACK, desc)
    }

    fn render(attraction: &Attraction, window: TimeWindow, desc: String) -> Self {
        Self {
            time: window.to_string(),
            title: attraction.name.clone(),
            desc,
            lat: attraction.latitude(),
            lon: attraction.longitude(),
            img: attraction.img.clone(),
        }
    }
}

/// One day of the trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day {
    /// 1-based day number.
    pub day: u32,
    /// Heading such as `"Day 1"`.
    pub title: String,
    /// Activities in visiting order.
    pub slots: Vec<Slot>,
}

/// A complete trip plan.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    /// Days in order, numbered from 1.
    pub days: Vec<Day>,
}

impl Itinerary {
    /// Number the allocator's per-day slot lists and title them `"Day n"`.
    ///
    /// Order is preserved exactly; nothing is filtered.
    ///
    /// # Examples
    /// ```
    /// use itinera_core::Itinerary;
    ///
    /// let itinerary = Itinerary::assemble(vec![Vec::new(), Vec::new()]);
    /// assert_eq!(itinerary.days[1].day, 2);
    /// assert_eq!(itinerary.days[1].title, "Day 2");
    /// ```
    #[must_use]
    pub fn assemble(per_day: Vec<Vec<Slot>>) -> Self {
        let days = (1_u32..)
            .zip(per_day)
            .map(|(day, slots)| Day {
                day,
                title: format!("Day {day}"),
                slots,
            })
            .collect();
        Self { days }
    }
}
