use crate::localization::{NoLocation, TzLocation};
use crate::{date, Context};

#[test]
fn override_today() {
    let ctx = Context::default().with_today(date!("2017-09-15"));
    assert_eq!(ctx.today, date!("2017-09-15"));
}

#[test]
fn locale_resets_today() {
    let ctx = Context::default().with_today(date!("1900-01-01"));
    assert_ne!(ctx.clone().with_locale(NoLocation).today, date!("1900-01-01"));

    let tz = chrono_tz::Pacific::Kiritimati;
    let ctx = ctx.with_locale(TzLocation::new(tz));
    assert_ne!(ctx.today, date!("1900-01-01"));
    assert_eq!(*ctx.locale.get_timezone(), tz);
}
