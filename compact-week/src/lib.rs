#![doc = include_str!("../README.md")]

use std::fmt;
use std::ops::RangeInclusive;

use chrono::Weekday;

/// Number of days in a week.
pub const DAYS_IN_WEEK: u32 = 7;

fn span_mask(span: &RangeInclusive<u32>) -> u8 {
    assert!(span.start() <= span.end(), "empty span of days");
    assert!(*span.end() < DAYS_IN_WEEK);
    let upto_end = (1u16 << (span.end() + 1)) - 1;
    let before_start = (1u16 << span.start()) - 1;
    (upto_end & !before_start) as u8
}

/// A compact representation of a set of days in a week, using a u8-based bit array.
///
/// Days are indexed from 0 (Sunday) to 6 (Saturday).
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CompactWeek(u8);

impl CompactWeek {
    /// Create a new week that does not include any day.
    ///
    /// ```
    /// use compact_week::CompactWeek;
    ///
    /// let week = CompactWeek::new();
    /// assert_eq!(week.count(), 0);
    /// ```
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a week including all days of the given span.
    ///
    /// ```
    /// use compact_week::CompactWeek;
    ///
    /// let week = CompactWeek::from_span(2..=4);
    /// assert_eq!(week.iter().collect::<Vec<_>>(), [2, 3, 4]);
    /// ```
    pub fn from_span(span: RangeInclusive<u32>) -> Self {
        Self(span_mask(&span))
    }

    /// Include a day in this week.
    ///
    /// ```
    /// use compact_week::CompactWeek;
    ///
    /// let mut week = CompactWeek::new();
    /// week.insert(2);
    /// week.insert(2);
    /// week.insert(6);
    /// assert_eq!(week.count(), 2);
    /// ```
    pub fn insert(&mut self, day: u32) {
        assert!(day < DAYS_IN_WEEK);
        self.0 |= 1 << day
    }

    /// Include all days of a span in this week.
    ///
    /// ```
    /// use compact_week::CompactWeek;
    ///
    /// let mut week = CompactWeek::new();
    /// week.insert_span(0..=1);
    /// week.insert_span(5..=6);
    /// assert_eq!(format!("{week:?}"), "{Sun, Mon, Fri, Sat}");
    /// ```
    pub fn insert_span(&mut self, span: RangeInclusive<u32>) {
        self.0 |= span_mask(&span)
    }

    /// Check if this week includes the given day.
    ///
    /// ```
    /// use compact_week::CompactWeek;
    ///
    /// let mut week = CompactWeek::new();
    /// week.insert(0);
    /// week.insert(4);
    ///
    /// assert!(week.contains(0));
    /// assert!(week.contains(4));
    /// assert!(!week.contains(5));
    /// ```
    pub fn contains(self, day: u32) -> bool {
        assert!(day < DAYS_IN_WEEK);
        self.0 & (1 << day) != 0
    }

    /// Check if this week includes the given weekday.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use compact_week::CompactWeek;
    ///
    /// let week = CompactWeek::from_span(0..=1);
    /// assert!(week.contains_weekday(Weekday::Sun));
    /// assert!(!week.contains_weekday(Weekday::Sat));
    /// ```
    pub fn contains_weekday(self, weekday: Weekday) -> bool {
        self.contains(weekday.num_days_from_sunday())
    }

    /// Check if no day of the span is included in this week.
    ///
    /// ```
    /// use compact_week::CompactWeek;
    ///
    /// let week = CompactWeek::from_span(2..=3);
    /// assert!(week.is_free(4..=6));
    /// assert!(!week.is_free(3..=6));
    /// ```
    pub fn is_free(self, span: RangeInclusive<u32>) -> bool {
        self.0 & span_mask(&span) == 0
    }

    /// Iterate over the days included in this week.
    ///
    /// ```
    /// use compact_week::CompactWeek;
    ///
    /// let mut week = CompactWeek::new();
    /// week.insert(5);
    /// week.insert(1);
    ///
    /// let days: Vec<u32> = week.iter().collect();
    /// assert_eq!(days, [1, 5])
    /// ```
    pub fn iter(self) -> impl Iterator<Item = u32> {
        let mut val = self.0;

        std::iter::from_fn(move || {
            if val != 0 {
                let day = val.trailing_zeros();
                val ^= 1 << day;
                Some(day)
            } else {
                None
            }
        })
    }

    /// Get the first day included in this week if it is not empty.
    ///
    /// ```
    /// use compact_week::CompactWeek;
    ///
    /// let mut week = CompactWeek::new();
    /// assert_eq!(week.first(), None);
    ///
    /// week.insert(6);
    /// assert_eq!(week.first(), Some(6));
    ///
    /// week.insert(3);
    /// assert_eq!(week.first(), Some(3));
    /// ```
    pub fn first(self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros())
        }
    }

    /// Count number of days included for this week.
    ///
    /// ```
    /// use compact_week::CompactWeek;
    ///
    /// let week = CompactWeek::from_span(1..=5);
    /// assert_eq!(week.count(), 5);
    /// ```
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Debug for CompactWeek {
    /// ```
    /// use compact_week::CompactWeek;
    ///
    /// let mut week = CompactWeek::new();
    /// week.insert(6);
    /// week.insert(3);
    /// assert_eq!(format!("{week:?}"), "{Wed, Sat}");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugDay(u32);

        impl fmt::Debug for DebugDay {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let weekday = (0..self.0).fold(Weekday::Sun, |wd, _| wd.succ());
                write!(f, "{weekday}")
            }
        }

        f.debug_set().entries(self.iter().map(DebugDay)).finish()
    }
}

/// Occupancy of the vertical lanes of a week row: each lane is a [`CompactWeek`] holding the
/// days already taken in this lane.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct CompactLanes {
    lanes: Vec<CompactWeek>,
}

impl CompactLanes {
    /// Create an occupancy grid with no lane.
    ///
    /// ```
    /// use compact_week::CompactLanes;
    ///
    /// assert!(CompactLanes::new().is_empty());
    /// ```
    pub const fn new() -> Self {
        Self { lanes: Vec::new() }
    }

    /// Number of lanes tracked, up to the highest occupied one.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Check if no lane is occupied.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Get the occupied days of a lane, lanes above the last used one are empty.
    ///
    /// ```
    /// use compact_week::{CompactLanes, CompactWeek};
    ///
    /// let mut lanes = CompactLanes::new();
    /// lanes.occupy(1, 2..=3);
    /// assert_eq!(lanes.lane(0), CompactWeek::new());
    /// assert_eq!(lanes.lane(1), CompactWeek::from_span(2..=3));
    /// assert_eq!(lanes.lane(7), CompactWeek::new());
    /// ```
    pub fn lane(&self, lane: usize) -> CompactWeek {
        self.lanes.get(lane).copied().unwrap_or_default()
    }

    /// Get the highest lane used by any day of the span.
    ///
    /// ```
    /// use compact_week::CompactLanes;
    ///
    /// let mut lanes = CompactLanes::new();
    /// assert_eq!(lanes.max_used_lane(0..=6), None);
    ///
    /// lanes.occupy(0, 0..=2);
    /// lanes.occupy(1, 2..=2);
    /// lanes.occupy(3, 5..=6);
    ///
    /// assert_eq!(lanes.max_used_lane(0..=1), Some(0));
    /// assert_eq!(lanes.max_used_lane(1..=4), Some(1));
    /// assert_eq!(lanes.max_used_lane(4..=6), Some(3));
    /// assert_eq!(lanes.max_used_lane(3..=4), None);
    /// ```
    pub fn max_used_lane(&self, span: RangeInclusive<u32>) -> Option<usize> {
        self.lanes.iter().rposition(|lane| !lane.is_free(span.clone()))
    }

    /// Get the lowest lane where every day of the span is free. Only lanes up to one above the
    /// highest lane used by the span are scanned, the latest of them is always free.
    ///
    /// ```
    /// use compact_week::CompactLanes;
    ///
    /// let mut lanes = CompactLanes::new();
    /// assert_eq!(lanes.first_free_lane(0..=6), 0);
    ///
    /// lanes.occupy(0, 0..=2);
    /// lanes.occupy(1, 3..=4);
    ///
    /// assert_eq!(lanes.first_free_lane(3..=3), 0);
    /// assert_eq!(lanes.first_free_lane(2..=3), 2);
    /// assert_eq!(lanes.first_free_lane(5..=6), 0);
    /// ```
    pub fn first_free_lane(&self, span: RangeInclusive<u32>) -> usize {
        let bound = self.max_used_lane(span.clone()).map_or(0, |max| max + 1);

        (0..=bound)
            .find(|&lane| self.lane(lane).is_free(span.clone()))
            .unwrap_or(bound)
    }

    /// Mark all days of the span as occupied in given lane.
    ///
    /// ```
    /// use compact_week::CompactLanes;
    ///
    /// let mut lanes = CompactLanes::new();
    /// lanes.occupy(2, 4..=5);
    /// assert_eq!(lanes.len(), 3);
    /// assert!(!lanes.lane(2).is_free(5..=6));
    /// ```
    pub fn occupy(&mut self, lane: usize, span: RangeInclusive<u32>) {
        if self.lanes.len() <= lane {
            self.lanes.resize(lane + 1, CompactWeek::new());
        }

        self.lanes[lane].insert_span(span)
    }

    /// Iterate over the occupancy of each lane, from the lowest.
    pub fn iter(&self) -> impl Iterator<Item = CompactWeek> + '_ {
        self.lanes.iter().copied()
    }
}

impl fmt::Debug for CompactLanes {
    /// ```
    /// use compact_week::CompactLanes;
    ///
    /// let mut lanes = CompactLanes::new();
    /// lanes.occupy(0, 0..=1);
    /// lanes.occupy(1, 1..=1);
    /// assert_eq!(format!("{lanes:?}"), "[{Sun, Mon}, {Mon}]");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.lanes.iter()).finish()
    }
}
