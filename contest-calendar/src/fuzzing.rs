use std::sync::Arc;

use arbitrary::Arbitrary;
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};

use crate::utils::dates::last_of_month;
use crate::{cut_banners, Context, Event, MonthGrid, MonthLayout, MonthView};

/// An event placed relatively to the first day of the fuzzed month.
#[derive(Arbitrary, Clone, Debug)]
pub struct FuzzEvent {
    pub begin_minutes: i32,
    /// Negative values produce invalid events
    pub duration_minutes: i32,
}

#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub year: i16,
    pub month: u8,
    pub today_offset: i16,
    pub events: Vec<FuzzEvent>,
}

pub fn run_fuzz_layout(data: Data) -> bool {
    let year = i32::from(data.year);
    let month = u32::from(data.month);

    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return false;
    };

    let Some(today) = first.checked_add_signed(Duration::days(data.today_offset.into())) else {
        return false;
    };

    let anchor = first.and_time(NaiveTime::MIN);

    let events: Vec<_> = data
        .events
        .iter()
        .filter_map(|event| {
            let begin_at = anchor.checked_add_signed(Duration::minutes(event.begin_minutes.into()))?;
            let end_at = begin_at.checked_add_signed(Duration::minutes(event.duration_minutes.into()))?;
            Some(Event::new(begin_at, end_at, "fuzzed"))
        })
        .collect();

    let ctx = Context::default().with_today(today);

    let Ok(view) = MonthView::from_context(events, ctx).at(year, month) else {
        return false;
    };

    let (Ok(grid), Ok(layout)) = (view.grid(), view.layout()) else {
        return false;
    };

    check_grid(&grid, today);
    check_banners(&grid, view.events());
    check_layout(&layout);
    true
}

fn check_grid(grid: &MonthGrid, today: NaiveDate) {
    let days = grid.days();
    assert_eq!(days.len() % 7, 0);
    assert_eq!(grid.begin_date().weekday(), Weekday::Sun);
    assert_eq!(grid.end_date().weekday(), Weekday::Sat);

    let first = grid.first_of_month();
    let last = last_of_month(first).expect("grid was built for this month");
    let active: Vec<_> = days.iter().filter(|day| day.active).map(|day| day.date).collect();
    let expected: Vec<_> = first.iter_days().take_while(|date| *date <= last).collect();
    assert_eq!(active, expected);

    let current = days.iter().filter(|day| day.current).count();
    assert_eq!(current, usize::from(grid.contains(today)));
}

fn check_banners(grid: &MonthGrid, events: &[Arc<Event>]) {
    for event in events {
        let banners: Vec<_> = cut_banners(grid, std::slice::from_ref(event))
            .into_iter()
            .flatten()
            .collect();

        if !event.is_valid() {
            assert!(banners.is_empty());
        }

        for banner in &banners {
            assert!(banner.begin_at <= banner.end_at);
            assert_eq!(grid.week_of(banner.begin_at), grid.week_of(banner.end_at));
        }

        for pair in banners.windows(2) {
            assert!(pair[0].end_trunc);
            assert!(pair[1].begin_trunc);
            assert_eq!(pair[0].end_at.succ_opt(), Some(pair[1].begin_at));
        }
    }
}

fn check_layout(layout: &MonthLayout) {
    for week in &layout.weeks {
        assert_eq!(week.days.len(), 7);

        for lane in &week.lanes {
            assert_eq!(lane.total_span(), 7);
            let mut column = 0;

            for cell in lane.cells() {
                let Some(cell) = cell else {
                    column += 1;
                    continue;
                };

                // A cell is exactly where its banner is displayed
                assert_eq!(cell.banner.columns(), column..=column + cell.span - 1);
                column += cell.span;
            }
        }
    }
}
