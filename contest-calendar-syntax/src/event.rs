use std::str::FromStr;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

/// Number of colors a renderer is expected to provide for events.
pub const PALETTE_SIZE: u8 = 16;

// Event

/// A date-ranged event displayed on the calendar, usually a contest.
///
/// Both bounds are wall-clock times. The event is only considered at day
/// granularity when laid out on a calendar.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Event {
    pub begin_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub title: Arc<str>,
    /// Index in the palette of the renderer
    pub color_index: u8,
    /// Target of the event, may be empty
    pub link: Arc<str>,
}

impl Event {
    /// Create an event with default color and no link.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use contest_calendar_syntax::Event;
    ///
    /// let day = NaiveDate::from_ymd_opt(2017, 9, 27).unwrap();
    ///
    /// let event = Event::new(
    ///     day.and_hms_opt(14, 0, 0).unwrap(),
    ///     day.and_hms_opt(18, 0, 0).unwrap(),
    ///     "Weekly Contest",
    /// );
    ///
    /// assert_eq!(event.color_index, 0);
    /// assert!(event.link.is_empty());
    /// ```
    pub fn new(begin_at: NaiveDateTime, end_at: NaiveDateTime, title: impl Into<Arc<str>>) -> Self {
        Self {
            begin_at,
            end_at,
            title: title.into(),
            color_index: 0,
            link: Arc::from(""),
        }
    }

    /// Attach a palette color to this event.
    pub fn with_color(self, color_index: u8) -> Self {
        Self { color_index, ..self }
    }

    /// Attach a link to this event.
    pub fn with_link(self, link: impl Into<Arc<str>>) -> Self {
        Self { link: link.into(), ..self }
    }

    /// Day the event starts on.
    pub fn begin_date(&self) -> NaiveDate {
        self.begin_at.date()
    }

    /// Day the event ends on.
    pub fn end_date(&self) -> NaiveDate {
        self.end_at.date()
    }

    /// An event is valid if it doesn't end on a day before the day it begins.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use contest_calendar_syntax::Event;
    ///
    /// let day = NaiveDate::from_ymd_opt(2017, 9, 27).unwrap();
    /// let at = |hh| day.and_hms_opt(hh, 0, 0).unwrap();
    ///
    /// assert!(Event::new(at(14), at(18), "ok").is_valid());
    /// assert!(Event::new(at(18), at(14), "same day").is_valid());
    /// assert!(!Event::new(at(14), at(14) - chrono::Duration::days(1), "ko").is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        self.end_date() >= self.begin_date()
    }
}

// EventList

/// Ordered list of events, as found in a listing.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct EventList(Vec<Event>);

impl EventList {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn events(&self) -> &[Event] {
        &self.0
    }

    pub fn into_events(self) -> Vec<Event> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Event>> for EventList {
    fn from(events: Vec<Event>) -> Self {
        Self(events)
    }
}

impl FromIterator<Event> for EventList {
    fn from_iter<T: IntoIterator<Item = Event>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for EventList {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromStr for EventList {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
