use crate::{cut_banners, date, event, layout_week, Lane, MonthGrid};

/// Lay out the week of September 2017 that contains given date and render
/// each lane as a list of `(title, span)`, free days having an empty title.
fn render(week_date: &str, events: &[std::sync::Arc<crate::Event>]) -> Vec<Vec<(String, u32)>> {
    let grid = MonthGrid::build(2017, 9, date!("2017-09-15")).unwrap();
    let week = grid.week_of(date!(week_date)).unwrap();
    let banners = cut_banners(&grid, events).swap_remove(week);
    layout_week(banners).iter().map(render_lane).collect()
}

fn render_lane(lane: &Lane) -> Vec<(String, u32)> {
    lane.cells()
        .iter()
        .map(|cell| match cell {
            Some(cell) => (cell.banner.event.title.to_string(), cell.span),
            None => (String::new(), 1),
        })
        .collect()
}

fn free() -> (String, u32) {
    (String::new(), 1)
}

fn cell(title: &str, span: u32) -> (String, u32) {
    (title.to_string(), span)
}

#[test]
fn empty_week() {
    assert!(layout_week(Vec::new()).is_empty());
    assert!(render("2017-09-15", &[]).is_empty());
}

#[test]
fn overlapping_end_of_month() {
    let events = [
        event!("2017-09-27 14:00", "2017-09-29 18:00", "A"),
        event!("2017-09-28 14:00", "2017-10-01 18:00", "B"),
    ];

    assert_eq!(
        render("2017-09-27", &events),
        [
            vec![free(), free(), free(), cell("A", 3), free()],
            vec![free(), free(), free(), free(), cell("B", 3)],
        ],
    );

    let grid = MonthGrid::build(2017, 9, date!("2017-09-15")).unwrap();
    let lanes = layout_week(cut_banners(&grid, &events).swap_remove(4));
    let b = lanes[1].cell_at(6).unwrap();
    assert!(b.banner.end_trunc);
    assert!(!b.banner.begin_trunc);
    assert!(lanes[1].cell_at(3).is_none());
}

#[test]
fn lanes_are_reused() {
    let events = [
        event!("2017-09-03 10:00", "2017-09-04 10:00", "A"),
        event!("2017-09-06 10:00", "2017-09-08 10:00", "B"),
    ];

    assert_eq!(
        render("2017-09-03", &events),
        [vec![cell("A", 2), free(), cell("B", 3), free()]],
    );
}

#[test]
fn lowest_free_lane() {
    let events = [
        event!("2017-09-03 10:00", "2017-09-05 10:00", "A"),
        event!("2017-09-03 10:00", "2017-09-08 10:00", "B"),
        event!("2017-09-07 10:00", "2017-09-09 10:00", "C"),
        event!("2017-09-09 10:00", "2017-09-09 12:00", "D"),
    ];

    assert_eq!(
        render("2017-09-03", &events),
        [
            vec![cell("B", 6), cell("D", 1)],
            vec![cell("A", 3), free(), cell("C", 3)],
        ],
    );
}

#[test]
fn truncated_start_first() {
    let events = [
        event!("2017-09-10 10:00", "2017-09-15 10:00", "Starts here"),
        event!("2017-09-05 10:00", "2017-09-11 10:00", "Continued"),
    ];

    assert_eq!(
        render("2017-09-10", &events),
        [
            vec![cell("Continued", 2), free(), free(), free(), free(), free()],
            vec![cell("Starts here", 6), free()],
        ],
    );
}

#[test]
fn longest_first() {
    let events = [
        event!("2017-09-18 10:00", "2017-09-19 10:00", "Short"),
        event!("2017-09-18 10:00", "2017-09-22 10:00", "Long"),
    ];

    assert_eq!(
        render("2017-09-18", &events),
        [
            vec![free(), cell("Long", 5), free()],
            vec![free(), cell("Short", 2), free(), free(), free(), free()],
        ],
    );
}

#[test]
fn ties_keep_input_order() {
    let events = [
        event!("2017-09-18 10:00", "2017-09-19 10:00", "First"),
        event!("2017-09-18 12:00", "2017-09-19 20:00", "Second"),
    ];

    let lanes = render("2017-09-18", &events);
    assert_eq!(lanes[0][1], cell("First", 2));
    assert_eq!(lanes[1][1], cell("Second", 2));
}

#[test]
fn independent_from_input_order() {
    let events = [
        event!("2017-09-01 10:00", "2017-09-20 10:00", "Marathon"),
        event!("2017-09-05 10:00", "2017-09-06 10:00", "Sprint"),
        event!("2017-09-06 10:00", "2017-09-12 10:00", "Weekly"),
        event!("2017-09-09 10:00", "2017-09-09 12:00", "Round"),
    ];

    let mut reversed = events.clone();
    reversed.reverse();

    for week in ["2017-09-01", "2017-09-05", "2017-09-12", "2017-09-20"] {
        assert_eq!(render(week, &events), render(week, &reversed));
    }
}

#[test]
fn lanes_cover_the_week() {
    let events = [
        event!("2017-08-20 10:00", "2017-10-10 10:00", "Season"),
        event!("2017-09-01 10:00", "2017-09-20 10:00", "Marathon"),
        event!("2017-09-05 10:00", "2017-09-06 10:00", "Sprint"),
        event!("2017-09-06 10:00", "2017-09-12 10:00", "Weekly"),
        event!("2017-09-09 10:00", "2017-09-09 12:00", "Round"),
        event!("2017-09-13 10:00", "2017-09-12 10:00", "Invalid"),
    ];

    let grid = MonthGrid::build(2017, 9, date!("2017-09-15")).unwrap();

    for (banners, days) in cut_banners(&grid, &events).into_iter().zip(grid.weeks()) {
        let expected: usize = banners.len();
        let lanes = layout_week(banners);
        assert_eq!(lanes.iter().map(|lane| lane.banners().count()).sum::<usize>(), expected);

        for lane in &lanes {
            assert_eq!(lane.total_span(), 7);

            for (column, day) in days.iter().enumerate() {
                if let Some(cell) = lane.cell_at(column as u32) {
                    assert!(cell.banner.days().contains(&day.date));
                }
            }
        }
    }
}
