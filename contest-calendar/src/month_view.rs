use std::sync::Arc;

use chrono::{Datelike, Months, NaiveDate};

use contest_calendar_syntax::Event;

use crate::banner::cut_banners;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::grid::{Day, MonthGrid};
use crate::layout::{layout_week, Lane};
use crate::localization::{Localize, NoLocation};
use crate::utils::dates::first_of_month;

/// A move of the displayed month.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
    /// Back to the month of the current day
    Today,
}

// WeekView

/// Everything needed to render a row of the calendar.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct WeekView {
    /// The 7 days of the week, from Sunday
    pub days: Vec<Day>,
    /// Stacked banners, from top to bottom
    pub lanes: Vec<Lane>,
}

// MonthLayout

/// Layout of a whole month, ready to be rendered.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct MonthLayout {
    pub first_of_month: NaiveDate,
    pub weeks: Vec<WeekView>,
}

impl MonthLayout {
    /// Iterate over all displayed days.
    pub fn days(&self) -> impl Iterator<Item = &Day> + '_ {
        self.weeks.iter().flat_map(|week| &week.days)
    }

    /// Total number of lanes over all weeks.
    pub fn lane_count(&self) -> usize {
        self.weeks.iter().map(|week| week.lanes.len()).sum()
    }
}

// MonthView

/// A list of events displayed over a month.
///
/// Events are immutable and shared, so this is cheap to clone. Navigating
/// between months builds a new view while nothing derived from the events is
/// kept between two layouts.
#[derive(Clone, Debug)]
pub struct MonthView<L: Localize = NoLocation> {
    events: Arc<[Arc<Event>]>,
    /// Always the first day of the displayed month
    cursor: NaiveDate,
    pub(crate) ctx: Context<L>,
}

impl MonthView<NoLocation> {
    /// Display events over the current month.
    ///
    /// ```
    /// use contest_calendar::MonthView;
    ///
    /// let view = MonthView::new([]);
    /// assert!(view.events().is_empty());
    /// ```
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self::from_context(events, Context::default())
    }
}

impl<L: Localize> MonthView<L> {
    /// Display events over the month of the current day of a context.
    pub fn from_context(events: impl IntoIterator<Item = Event>, ctx: Context<L>) -> Self {
        let events = events.into_iter().map(Arc::new).collect();
        let cursor = ctx.today.with_day(1).expect("first of the month should always exist");
        Self { events, cursor, ctx }
    }

    // --
    // -- Builder Methods
    // --

    /// Set a new context for this view, the displayed month is kept.
    pub fn with_context<L2: Localize>(self, ctx: Context<L2>) -> MonthView<L2> {
        MonthView { events: self.events, cursor: self.cursor, ctx }
    }

    /// Display another month.
    ///
    /// ```
    /// use contest_calendar::MonthView;
    ///
    /// let view = MonthView::new([]).at(2017, 9).unwrap();
    /// assert_eq!((view.year(), view.month()), (2017, 9));
    ///
    /// assert!(MonthView::new([]).at(2017, 0).is_err());
    /// ```
    pub fn at(self, year: i32, month: u32) -> Result<Self> {
        let cursor = first_of_month(year, month).ok_or(Error::InvalidMonth { year, month })?;
        Ok(Self { cursor, ..self })
    }

    // --
    // -- Getters
    // --

    pub fn year(&self) -> i32 {
        self.cursor.year()
    }

    pub fn month(&self) -> u32 {
        self.cursor.month()
    }

    pub fn events(&self) -> &[Arc<Event>] {
        &self.events
    }

    pub fn context(&self) -> &Context<L> {
        &self.ctx
    }

    // --
    // -- Navigation
    // --

    /// Build the view of another month.
    ///
    /// ```
    /// use contest_calendar::{MonthView, Navigation};
    ///
    /// let view = MonthView::new([]).at(2017, 12).unwrap();
    ///
    /// let next = view.navigate(Navigation::Next).unwrap();
    /// assert_eq!((next.year(), next.month()), (2018, 1));
    ///
    /// let prev = next.navigate(Navigation::Previous).unwrap();
    /// assert_eq!((prev.year(), prev.month()), (2017, 12));
    /// ```
    pub fn navigate(&self, navigation: Navigation) -> Result<Self> {
        let cursor = match navigation {
            Navigation::Previous => self.cursor.checked_sub_months(Months::new(1)),
            Navigation::Next => self.cursor.checked_add_months(Months::new(1)),
            Navigation::Today => self.ctx.today.with_day(1),
        };

        let cursor = cursor.ok_or(Error::InvalidMonth {
            year: self.year(),
            month: self.month(),
        })?;

        #[cfg(feature = "log")]
        log::debug!(
            "Navigating calendar from {} to {}",
            self.cursor.format("%Y-%m"),
            cursor.format("%Y-%m"),
        );

        Ok(Self { cursor, ..self.clone() })
    }

    /// Build the view of the previous month.
    pub fn previous(&self) -> Result<Self> {
        self.navigate(Navigation::Previous)
    }

    /// Build the view of the next month.
    pub fn next(&self) -> Result<Self> {
        self.navigate(Navigation::Next)
    }

    // --
    // -- Layout
    // --

    /// Build the grid of days for the displayed month.
    pub fn grid(&self) -> Result<MonthGrid> {
        MonthGrid::build(self.year(), self.month(), self.ctx.today)
    }

    /// Build the whole layout of the displayed month.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use contest_calendar::{Context, Event, MonthView};
    ///
    /// let at = |d, h| NaiveDate::from_ymd_opt(2017, 9, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
    /// let ctx = Context::default().with_today(at(15, 0).date());
    ///
    /// let layout = MonthView::from_context([Event::new(at(27, 14), at(29, 18), "A")], ctx)
    ///     .layout()
    ///     .unwrap();
    ///
    /// assert_eq!(layout.weeks.len(), 5);
    /// assert_eq!(layout.weeks[4].lanes.len(), 1);
    /// assert_eq!(layout.days().filter(|day| day.current).count(), 1);
    /// ```
    pub fn layout(&self) -> Result<MonthLayout> {
        let grid = self.grid()?;
        let banners = cut_banners(&grid, &self.events);

        let weeks = grid
            .weeks()
            .zip(banners)
            .map(|(days, banners)| WeekView {
                days: days.to_vec(),
                lanes: layout_week(banners),
            })
            .collect();

        Ok(MonthLayout { first_of_month: grid.first_of_month(), weeks })
    }
}
