use std::env;
use std::fs;

use contest_calendar::constants::{banner_colors, ConstantValue};
use contest_calendar::{EventList, MonthView};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let path = args.next().ok_or("Usage: ./month <EVENTS_FILE> [YYYY-MM]")?;
    let events: EventList = fs::read_to_string(&path)?.parse()?;
    println!(" - events: {} ({path})", events.len());

    let mut view = MonthView::new(events);

    if let Some(month) = args.next() {
        let (year, month) = month.split_once('-').ok_or("month must be formatted as YYYY-MM")?;
        view = view.at(year.parse()?, month.parse()?)?;
    }

    let colors = banner_colors();
    let layout = view.layout()?;
    println!(" - month: {}", layout.first_of_month.format("%B %Y"));
    println!(" - today: {}", view.context().today);

    for (index, week) in layout.weeks.iter().enumerate() {
        println!("---");
        print!("week {index}:");

        for day in &week.days {
            let mark = if day.current { "*" } else { "" };

            if day.active {
                print!(" {}{mark}", day.date.format("%d"));
            } else {
                print!(" ({}){mark}", day.date.format("%d"));
            }
        }

        println!();

        if week.lanes.is_empty() {
            println!(" (empty)");
        }

        for (lane_index, lane) in week.lanes.iter().enumerate() {
            print!(" - lane {lane_index}: ");

            for cell in lane.cells() {
                let Some(cell) = cell else {
                    print!("[ ]");
                    continue;
                };

                let color = match colors.entries.get(usize::from(cell.banner.event.color_index)) {
                    Some((_, ConstantValue::Str(class))) => class.as_str(),
                    _ => "",
                };

                print!(
                    "[{}{} x{} .{color}{}]",
                    if cell.banner.begin_trunc { "<" } else { "" },
                    cell.banner.event.title,
                    cell.span,
                    if cell.banner.end_trunc { ">" } else { "" },
                );
            }

            println!();
        }
    }

    Ok(())
}
