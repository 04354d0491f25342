use crate::{date, Context, EventList, MonthView};

fn sample() -> EventList {
    include_str!("data/contests.txt")
        .parse()
        .expect("invalid sample listing")
}

fn sample_view() -> MonthView {
    let ctx = Context::default().with_today(date!("2017-09-15"));
    MonthView::from_context(sample(), ctx)
}

#[test]
fn parse_sample() {
    let events = sample();
    assert_eq!(events.len(), 7);
    assert_eq!(&*events.events()[4].title, "24h \"Lightning\" Round");
}

#[test]
fn sample_layout() -> Result<(), crate::Error> {
    let layout = sample_view().layout()?;
    assert_eq!(layout.weeks.len(), 5);

    let lane_counts: Vec<_> = layout.weeks.iter().map(|week| week.lanes.len()).collect();
    assert_eq!(lane_counts, [1, 1, 2, 2, 2]);

    // The marathon starts on a displayed day of August
    let first = layout.weeks[0].lanes[0].cell_at(3).unwrap();
    assert_eq!(&*first.banner.event.title, "Summer Marathon");
    assert_eq!(first.span, 4);
    assert!(!first.banner.begin_trunc);

    // The long challenge is continued in the third week before the weekly contest
    let third = &layout.weeks[2];
    assert_eq!(third.lanes[0].cell_at(0).unwrap().banner.event.title.as_ref(), "Long Challenge");
    assert_eq!(third.lanes[1].cell_at(0).unwrap().banner.event.title.as_ref(), "Weekly Contest 49");

    Ok(())
}

#[test]
fn sample_other_months() -> Result<(), crate::Error> {
    let view = sample_view();

    let august = view.previous()?.layout()?;
    assert_eq!(august.lane_count(), 1);

    let october = view.next()?.layout()?;
    assert_eq!(october.lane_count(), 1);
    let banner = &october.weeks[0].lanes[0].cells()[0].as_ref().unwrap().banner;
    assert_eq!(&*banner.event.title, "B");
    assert!(banner.begin_trunc);
    assert!(!banner.end_trunc);

    let november = view.next()?.next()?.layout()?;
    assert_eq!(november.lane_count(), 0);
    Ok(())
}
