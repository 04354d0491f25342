use contest_calendar_syntax::Event;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::localization::{Localize, NoLocation};
use crate::month_view::{MonthLayout, MonthView, Navigation};
use crate::registry::{AttachedWidgetRegistry, ElementId};

/// State of a page, built when the page is initialized and torn down when
/// leaving it.
///
/// ```
/// use chrono::NaiveDate;
/// use contest_calendar::{Context, Navigation, PageController};
///
/// let today = NaiveDate::from_ymd_opt(2017, 9, 15).unwrap();
/// let mut page = PageController::from_context(Context::default().with_today(today));
///
/// page.attach_calendar("contests", []);
/// let layout = page.navigate("contests", Navigation::Next).unwrap();
/// assert_eq!(layout.first_of_month, NaiveDate::from_ymd_opt(2017, 10, 1).unwrap());
///
/// assert!(page.detach_calendar("contests").is_some());
/// assert!(page.navigate("contests", Navigation::Next).is_err());
/// ```
#[derive(Debug)]
pub struct PageController<L: Localize = NoLocation> {
    ctx: Context<L>,
    calendars: AttachedWidgetRegistry<MonthView<L>>,
}

impl PageController<NoLocation> {
    pub fn new() -> Self {
        Self::from_context(Context::default())
    }
}

impl Default for PageController<NoLocation> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Localize> PageController<L> {
    pub fn from_context(ctx: Context<L>) -> Self {
        Self { ctx, calendars: AttachedWidgetRegistry::new() }
    }

    pub fn context(&self) -> &Context<L> {
        &self.ctx
    }

    /// Attach a calendar displaying the current month to an element.
    pub fn attach_calendar(
        &mut self,
        id: impl Into<ElementId>,
        events: impl IntoIterator<Item = Event>,
    ) -> &MonthView<L> {
        let id = id.into();
        let view = MonthView::from_context(events, self.ctx.clone());
        self.calendars.attach(id.clone(), view);
        self.calendars.get(id.as_str()).expect("calendar was just attached")
    }

    pub fn calendar(&self, id: &str) -> Option<&MonthView<L>> {
        self.calendars.get(id)
    }

    /// Layout of the month displayed by a calendar.
    pub fn layout(&self, id: &str) -> Result<MonthLayout> {
        self.calendars
            .get(id)
            .ok_or_else(|| Error::UnknownElement(id.to_string()))?
            .layout()
    }

    /// Move a calendar to another month and return its new layout. The
    /// calendar is left untouched if the layout fails.
    pub fn navigate(&mut self, id: &str, navigation: Navigation) -> Result<MonthLayout> {
        let calendar = self
            .calendars
            .get_mut(id)
            .ok_or_else(|| Error::UnknownElement(id.to_string()))?;

        let next_view = calendar.navigate(navigation)?;
        let layout = next_view.layout()?;
        *calendar = next_view;
        Ok(layout)
    }

    pub fn detach_calendar(&mut self, id: &str) -> Option<MonthView<L>> {
        self.calendars.detach(id)
    }

    /// Identifiers of elements holding a calendar.
    pub fn calendar_ids(&self) -> impl Iterator<Item = &ElementId> + '_ {
        self.calendars.ids()
    }

    /// Detach all widgets of the page.
    pub fn teardown(mut self) -> usize {
        let detached = self.calendars.detach_all();

        #[cfg(feature = "log")]
        log::debug!("Page teardown detached {} calendar(s)", detached.len());

        detached.len()
    }
}
