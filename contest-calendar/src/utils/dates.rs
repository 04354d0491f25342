use chrono::{Datelike, Days, Months, NaiveDate};

/// Index of the day in a week starting on Sunday.
pub(crate) fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Sunday on or before given date.
pub(crate) fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(day_of_week(date).into()))
}

/// Saturday on or after given date.
pub(crate) fn week_end(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_days(Days::new((6 - day_of_week(date)).into()))
}

pub(crate) fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub(crate) fn last_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let Some(date_next_month) = date.checked_add_months(Months::new(1)) else {
        // December of last supported year
        return date.with_day(31);
    };

    date_next_month.with_day(1)?.pred_opt()
}

#[cfg(test)]
mod test {
    use super::{last_of_month, week_end, week_start};
    use crate::date;

    #[test]
    fn test_week_bounds() {
        assert_eq!(week_start(date!("2017-09-01")), Some(date!("2017-08-27")));
        assert_eq!(week_start(date!("2017-09-03")), Some(date!("2017-09-03")));
        assert_eq!(week_end(date!("2017-09-30")), Some(date!("2017-09-30")));
        assert_eq!(week_end(date!("2017-10-01")), Some(date!("2017-10-07")));
    }

    #[test]
    fn test_last_of_month() {
        assert_eq!(last_of_month(date!("2017-09-01")), Some(date!("2017-09-30")));
        assert_eq!(last_of_month(date!("2016-02-01")), Some(date!("2016-02-29")));
        assert_eq!(last_of_month(date!("2017-02-14")), Some(date!("2017-02-28")));
        assert_eq!(last_of_month(date!("2017-12-01")), Some(date!("2017-12-31")));
    }
}
