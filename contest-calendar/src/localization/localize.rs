use std::fmt::Debug;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{Error, Result};

/// Specifies how instants are converted into the wall-clock time used to
/// place events on the calendar.
pub trait Localize: Clone + Debug {
    /// Convert an instant into local wall-clock time.
    fn naive(&self, instant: DateTime<Utc>) -> NaiveDateTime;

    /// Convert a timestamp in milliseconds since the epoch into local
    /// wall-clock time.
    ///
    /// ```
    /// use contest_calendar::localization::{Localize, NoLocation};
    ///
    /// let naive = NoLocation.naive_from_millis(1_506_520_800_000).unwrap();
    /// assert_eq!(naive.to_string(), "2017-09-27 14:00:00");
    /// assert!(NoLocation.naive_from_millis(i64::MAX).is_err());
    /// ```
    fn naive_from_millis(&self, millis: i64) -> Result<NaiveDateTime> {
        let instant =
            DateTime::from_timestamp_millis(millis).ok_or(Error::TimestampOutOfRange(millis))?;

        Ok(self.naive(instant))
    }

    /// Current date in this location.
    fn today(&self) -> NaiveDate {
        self.naive(Utc::now()).date()
    }
}

// --
// -- NoLocation
// --

/// Wall-clock time is UTC.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct NoLocation;

impl Localize for NoLocation {
    fn naive(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.naive_utc()
    }
}

// --
// -- TzLocation
// --

/// Wall-clock time is taken in a fixed timezone.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct TzLocation<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz: TimeZone> TzLocation<Tz> {
    /// Create a new location from a timezone.
    ///
    /// ```
    /// use chrono::FixedOffset;
    /// use contest_calendar::localization::{Localize, TzLocation};
    ///
    /// let tokyo = TzLocation::new(FixedOffset::east_opt(9 * 3600).unwrap());
    /// let naive = tokyo.naive_from_millis(1_506_520_800_000).unwrap();
    /// assert_eq!(naive.to_string(), "2017-09-27 23:00:00");
    /// ```
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Get the timezone for this location.
    pub fn get_timezone(&self) -> &Tz {
        &self.tz
    }
}

#[cfg(feature = "tz")]
impl TzLocation<chrono_tz::Tz> {
    /// Create a location from the name of a timezone of the IANA database.
    ///
    /// ```
    /// use contest_calendar::localization::TzLocation;
    ///
    /// assert!(TzLocation::from_name("Asia/Seoul").is_some());
    /// assert!(TzLocation::from_name("Middle/Earth").is_none());
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let tz = name.parse::<chrono_tz::Tz>().ok()?;
        Some(Self::new(tz))
    }
}

impl<Tz> Localize for TzLocation<Tz>
where
    Tz: TimeZone + Debug,
{
    fn naive(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.tz).naive_local()
    }
}
