use std::cmp::{max, min, Ordering};
use std::ops::RangeInclusive;
use std::sync::Arc;

use chrono::NaiveDate;

use contest_calendar_syntax::Event;

use crate::grid::MonthGrid;
use crate::utils::dates::{day_of_week, week_end};

/// The portion of an event displayed within a single week.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Banner {
    /// First day covered by the banner, from the start of the day
    pub begin_at: NaiveDate,
    /// The event started before `begin_at`
    pub begin_trunc: bool,
    /// Last day covered by the banner, until the end of the day
    pub end_at: NaiveDate,
    /// The event continues after `end_at`
    pub end_trunc: bool,
    pub event: Arc<Event>,
}

impl Banner {
    /// Days covered by this banner.
    pub fn days(&self) -> RangeInclusive<NaiveDate> {
        self.begin_at..=self.end_at
    }

    /// Number of days covered by this banner.
    pub fn len_days(&self) -> u32 {
        (self.end_at - self.begin_at).num_days().clamp(0, 6) as u32 + 1
    }

    /// Columns of the week row covered by this banner, 0 being Sunday.
    ///
    /// A banner is never expected to cross a week boundary, if it does it is
    /// cut at the end of the row.
    pub fn columns(&self) -> RangeInclusive<u32> {
        let start = day_of_week(self.begin_at);
        start..=min(start + self.len_days() - 1, 6)
    }

    /// Order in which banners claim lanes of a week: earlier start first,
    /// then banners truncated at their start, then later end first.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use std::sync::Arc;
    ///
    /// use chrono::NaiveDate;
    /// use contest_calendar::{Banner, Event};
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(2017, 9, d).unwrap();
    /// let midnight = |d| day(d).and_hms_opt(0, 0, 0).unwrap();
    /// let event = Arc::new(Event::new(midnight(1), midnight(30), "Long contest"));
    ///
    /// let banner = |begin_at, begin_trunc, end_at| Banner {
    ///     begin_at: day(begin_at),
    ///     begin_trunc,
    ///     end_at: day(end_at),
    ///     end_trunc: false,
    ///     event: event.clone(),
    /// };
    ///
    /// assert_eq!(banner(3, false, 4).layout_order(&banner(4, true, 9)), Ordering::Less);
    /// assert_eq!(banner(3, true, 4).layout_order(&banner(3, false, 9)), Ordering::Less);
    /// assert_eq!(banner(3, false, 9).layout_order(&banner(3, false, 4)), Ordering::Less);
    /// ```
    pub fn layout_order(&self, other: &Self) -> Ordering {
        (self.begin_at.cmp(&other.begin_at))
            .then_with(|| other.begin_trunc.cmp(&self.begin_trunc))
            .then_with(|| other.end_at.cmp(&self.end_at))
    }
}

/// Cut an event into one banner per week it crosses within `[grid_begin, grid_end]`.
///
/// The grid must start on a Sunday and end on a Saturday.
fn cut_event(
    event: Arc<Event>,
    grid_begin: NaiveDate,
    grid_end: NaiveDate,
) -> impl Iterator<Item = Banner> {
    let event_begin = event.begin_date();
    let event_end = event.end_date();
    let visible = event.is_valid() && event_end >= grid_begin && event_begin <= grid_end;

    let mut cursor = visible.then(|| (max(event_begin, grid_begin), event_begin < grid_begin));

    std::iter::from_fn(move || {
        let (begin_at, begin_trunc) = cursor.take()?;
        let week_end = week_end(begin_at)?;
        let end_trunc = event_end > week_end;

        let end_at = {
            if end_trunc {
                if week_end < grid_end {
                    cursor = week_end.succ_opt().map(|next| (next, true));
                }

                week_end
            } else {
                event_end
            }
        };

        Some(Banner {
            begin_at,
            begin_trunc,
            end_at,
            end_trunc,
            event: event.clone(),
        })
    })
}

/// Cut events into banners, grouped by the index of the week of the grid
/// they are displayed in.
///
/// Events ending on a day before the day they start are silently skipped,
/// as well as events that are not visible in the grid.
///
/// ```
/// use std::sync::Arc;
///
/// use chrono::NaiveDate;
/// use contest_calendar::{cut_banners, Event, MonthGrid};
///
/// let at = |d, h| NaiveDate::from_ymd_opt(2017, 9, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
/// let grid = MonthGrid::build(2017, 9, at(1, 0).date()).unwrap();
///
/// let events = [
///     Arc::new(Event::new(at(1, 10), at(5, 18), "Crossing a week")),
///     Arc::new(Event::new(at(5, 10), at(1, 18), "Invalid")),
/// ];
///
/// let banners = cut_banners(&grid, &events);
/// assert_eq!(banners.len(), 5);
/// assert_eq!(banners[0].len(), 1);
/// assert_eq!(banners[1].len(), 1);
/// assert!(banners[0][0].end_trunc);
/// assert!(banners[1][0].begin_trunc);
/// ```
pub fn cut_banners(grid: &MonthGrid, events: &[Arc<Event>]) -> Vec<Vec<Banner>> {
    let grid_begin = grid.begin_date();
    let grid_end = grid.end_date();
    let mut weeks = vec![Vec::new(); grid.week_count()];

    for event in events {
        for banner in cut_event(event.clone(), grid_begin, grid_end) {
            let week = grid
                .week_of(banner.begin_at)
                .expect("banner starts outside of the grid");

            weeks[week].push(banner);
        }
    }

    weeks
}
