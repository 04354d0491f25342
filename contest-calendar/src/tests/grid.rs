use chrono::{Datelike, Weekday};

use crate::{date, Error, MonthGrid};

#[test]
fn september_2017() {
    let grid = MonthGrid::build(2017, 9, date!("2017-09-15")).unwrap();
    assert_eq!(grid.week_count(), 5);
    assert_eq!(grid.days().len(), 35);
    assert_eq!(grid.begin_date(), date!("2017-08-27"));
    assert_eq!(grid.end_date(), date!("2017-09-30"));

    let inactive: Vec<_> = grid.days().iter().take_while(|day| !day.active).collect();
    assert_eq!(inactive.len(), 5);
    assert_eq!(inactive[4].date, date!("2017-08-31"));
    assert_eq!(grid.days().iter().filter(|day| day.active).count(), 30);
}

#[test]
fn month_without_overflow() {
    // February 2015 starts on a Sunday and ends on a Saturday
    let grid = MonthGrid::build(2015, 2, date!("2015-02-01")).unwrap();
    assert_eq!(grid.week_count(), 4);
    assert!(grid.days().iter().all(|day| day.active));
}

#[test]
fn month_starting_on_sunday() {
    let grid = MonthGrid::build(2017, 10, date!("2017-10-01")).unwrap();
    assert_eq!(grid.begin_date(), date!("2017-10-01"));
    assert_eq!(grid.end_date(), date!("2017-11-04"));
    assert!(grid.days()[0].active);
    assert!(grid.days()[0].current);
}

#[test]
fn six_weeks() {
    // December 2018 starts on a Saturday and has 31 days
    let grid = MonthGrid::build(2018, 12, date!("2018-12-01")).unwrap();
    assert_eq!(grid.week_count(), 6);
    assert_eq!(grid.begin_date(), date!("2018-11-25"));
    assert_eq!(grid.end_date(), date!("2019-01-05"));
}

#[test]
fn current_day() {
    let grid = MonthGrid::build(2017, 9, date!("2017-09-15")).unwrap();
    let current: Vec<_> = grid.days().iter().filter(|day| day.current).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].date, date!("2017-09-15"));
    assert!(current[0].active);

    // Overflow days can be the current day
    let grid = MonthGrid::build(2017, 9, date!("2017-08-28")).unwrap();
    let current = grid.days().iter().find(|day| day.current).unwrap();
    assert_eq!(current.date, date!("2017-08-28"));
    assert!(!current.active);

    let grid = MonthGrid::build(2017, 9, date!("2017-10-02")).unwrap();
    assert!(grid.days().iter().all(|day| !day.current));
}

#[test]
fn invalid_month() {
    let today = date!("2017-09-15");

    assert!(matches!(
        MonthGrid::build(2017, 0, today),
        Err(Error::InvalidMonth { year: 2017, month: 0 }),
    ));

    assert!(MonthGrid::build(2017, 13, today).is_err());
    assert!(MonthGrid::build(i32::MAX, 1, today).is_err());
}

#[test]
fn weeks() {
    let grid = MonthGrid::build(2017, 9, date!("2017-09-15")).unwrap();
    let weeks: Vec<_> = grid.weeks().collect();
    assert_eq!(weeks.len(), 5);

    for week in weeks {
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date.weekday(), Weekday::Sun);
        assert_eq!(week[6].date.weekday(), Weekday::Sat);
    }

    assert_eq!(
        grid.week_dates(1),
        Some(date!("2017-09-03")..=date!("2017-09-09")),
    );

    assert_eq!(grid.week_dates(5), None);
}

#[test]
fn all_months() {
    let today = date!("2000-01-01");

    for year in 1900..=2100 {
        for month in 1..=12 {
            let grid = MonthGrid::build(year, month, today).unwrap();
            let days = grid.days();

            assert_eq!(days.len() % 7, 0);
            assert!((4..=6).contains(&grid.week_count()));
            assert_eq!(grid.begin_date().weekday(), Weekday::Sun);
            assert_eq!(grid.end_date().weekday(), Weekday::Sat);

            // Days are consecutive
            for pair in days.windows(2) {
                assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
            }

            // Active days are exactly the days of the month
            let active: Vec<_> = days.iter().filter(|day| day.active).collect();
            assert_eq!(active[0].date, grid.first_of_month());
            assert!(active.iter().all(|day| day.date.month() == month));
            assert_ne!(active.last().unwrap().date.succ_opt().unwrap().month(), month);

            assert_eq!(
                days.iter().filter(|day| day.current).count(),
                usize::from(grid.contains(today)),
            );
        }
    }
}
