use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};
use crate::utils::dates::{first_of_month, last_of_month, week_end, week_start};

/// A cell of the month grid.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    /// The day belongs to the displayed month
    pub active: bool,
    /// The day is today
    pub current: bool,
}

/// The days displayed for a month: whole weeks from the Sunday on or before
/// the first day of the month to the Saturday on or after its last day.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct MonthGrid {
    first_of_month: NaiveDate,
    /// Always a multiple of 7 days, starting on a Sunday
    days: Vec<Day>,
}

impl MonthGrid {
    /// Build the grid of a month.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use contest_calendar::MonthGrid;
    ///
    /// let today = NaiveDate::from_ymd_opt(2017, 9, 15).unwrap();
    /// let grid = MonthGrid::build(2017, 9, today).unwrap();
    ///
    /// assert_eq!(grid.week_count(), 5);
    /// assert_eq!(grid.begin_date(), NaiveDate::from_ymd_opt(2017, 8, 27).unwrap());
    /// assert_eq!(grid.end_date(), NaiveDate::from_ymd_opt(2017, 9, 30).unwrap());
    ///
    /// assert!(MonthGrid::build(2017, 13, today).is_err());
    /// ```
    pub fn build(year: i32, month: u32, today: NaiveDate) -> Result<Self> {
        let invalid = || Error::InvalidMonth { year, month };
        let first = first_of_month(year, month).ok_or_else(invalid)?;
        let last = last_of_month(first).ok_or_else(invalid)?;
        let begin = week_start(first).ok_or_else(invalid)?;
        let end = week_end(last).ok_or_else(invalid)?;

        let days = begin
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| Day {
                date,
                active: (first..=last).contains(&date),
                current: date == today,
            })
            .collect();

        Ok(Self { first_of_month: first, days })
    }

    /// First day of the displayed month.
    pub fn first_of_month(&self) -> NaiveDate {
        self.first_of_month
    }

    pub fn year(&self) -> i32 {
        self.first_of_month.year()
    }

    pub fn month(&self) -> u32 {
        self.first_of_month.month()
    }

    /// All the days of the grid, in order.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Iterate over the weeks of the grid, each of them holding 7 days.
    pub fn weeks(&self) -> impl ExactSizeIterator<Item = &[Day]> + '_ {
        self.days.chunks_exact(7)
    }

    pub fn week_count(&self) -> usize {
        self.days.len() / 7
    }

    /// First displayed day, always a Sunday.
    pub fn begin_date(&self) -> NaiveDate {
        self.days.first().expect("empty month grid").date
    }

    /// Last displayed day, always a Saturday.
    pub fn end_date(&self) -> NaiveDate {
        self.days.last().expect("empty month grid").date
    }

    /// Check if a date is displayed in the grid.
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.begin_date()..=self.end_date()).contains(&date)
    }

    /// Index of the week displaying given date.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use contest_calendar::MonthGrid;
    ///
    /// let date = |d| NaiveDate::from_ymd_opt(2017, 9, d).unwrap();
    /// let grid = MonthGrid::build(2017, 9, date(1)).unwrap();
    ///
    /// assert_eq!(grid.week_of(date(2)), Some(0));
    /// assert_eq!(grid.week_of(date(3)), Some(1));
    /// assert_eq!(grid.week_of(date(30)), Some(4));
    /// assert_eq!(grid.week_of(NaiveDate::from_ymd_opt(2017, 10, 1).unwrap()), None);
    /// ```
    pub fn week_of(&self, date: NaiveDate) -> Option<usize> {
        if !self.contains(date) {
            return None;
        }

        let offset = (date - self.begin_date()).num_days();
        usize::try_from(offset / 7).ok()
    }

    /// Range of dates displayed by a week.
    pub fn week_dates(&self, week: usize) -> Option<RangeInclusive<NaiveDate>> {
        let days = self.weeks().nth(week)?;
        Some(days[0].date..=days[6].date)
    }
}
