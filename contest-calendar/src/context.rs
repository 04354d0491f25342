use chrono::NaiveDate;

use crate::localization::{Localize, NoLocation};

/// All the context that can alter the way a calendar is displayed.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Context<L = NoLocation> {
    /// Date highlighted as the current day, it is not evaluated again after
    /// the context is built
    pub today: NaiveDate,
    pub locale: L,
}

impl<L: Localize> Context<L> {
    /// Create a context from a location, today's date is evaluated in this
    /// location.
    pub fn new(locale: L) -> Self {
        Self { today: locale.today(), locale }
    }
}

impl<L> Context<L> {
    /// Override the date of the current day.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use contest_calendar::Context;
    ///
    /// let today = NaiveDate::from_ymd_opt(2017, 9, 15).unwrap();
    /// assert_eq!(Context::default().with_today(today).today, today);
    /// ```
    pub fn with_today(self, today: NaiveDate) -> Self {
        Self { today, ..self }
    }

    /// Attach a new locale component to this context, today's date is
    /// evaluated again in this location.
    pub fn with_locale<L2: Localize>(self, locale: L2) -> Context<L2> {
        Context::new(locale)
    }
}

impl Default for Context<NoLocation> {
    fn default() -> Self {
        Self::new(NoLocation)
    }
}
