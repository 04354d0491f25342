use compact_week::{CompactLanes, DAYS_IN_WEEK};

use crate::banner::Banner;

const WEEK_LEN: usize = DAYS_IN_WEEK as usize;

/// A banner rendered over `span` consecutive days of a lane.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Cell {
    /// Number of days covered, between 1 and 7
    pub span: u32,
    pub banner: Banner,
}

/// A vertical slot of a week row.
///
/// Days covered by a banner are merged into a single [`Cell`] while free
/// days are kept as one `None` each, so that the spans of a lane always sum
/// up to 7 when free days are counted as a span of 1.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Lane(Vec<Option<Cell>>);

impl Lane {
    pub fn cells(&self) -> &[Option<Cell>] {
        &self.0
    }

    /// Number of days covered by this lane, always 7 for a lane built by
    /// [`layout_week`].
    pub fn total_span(&self) -> u32 {
        self.0
            .iter()
            .map(|cell| cell.as_ref().map(|cell| cell.span).unwrap_or(1))
            .sum()
    }

    /// Iterate over the banners displayed in this lane, from left to right.
    pub fn banners(&self) -> impl Iterator<Item = &Banner> + '_ {
        self.0.iter().flatten().map(|cell| &cell.banner)
    }

    /// Get the cell covering a day of the week, 0 being Sunday.
    pub fn cell_at(&self, day: u32) -> Option<&Cell> {
        let mut column = 0;

        for cell in &self.0 {
            let span = cell.as_ref().map(|cell| cell.span).unwrap_or(1);

            if day < column + span {
                return cell.as_ref();
            }

            column += span;
        }

        None
    }
}

impl IntoIterator for Lane {
    type Item = Option<Cell>;
    type IntoIter = std::vec::IntoIter<Option<Cell>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Merge consecutive days owned by the same banner into a single cell.
fn merge_lane(owners: &[Option<usize>; WEEK_LEN], banners: &[Banner]) -> Lane {
    let mut cells = Vec::new();
    let mut day = 0;

    while day < WEEK_LEN {
        let Some(owner) = owners[day] else {
            cells.push(None);
            day += 1;
            continue;
        };

        let span = owners[day..]
            .iter()
            .take_while(|other| **other == Some(owner))
            .count();

        cells.push(Some(Cell {
            span: span as u32,
            banner: banners[owner].clone(),
        }));

        day += span;
    }

    Lane(cells)
}

/// Stack the banners of a week into lanes.
///
/// Banners are placed in [`Banner::layout_order`], each of them in the lowest
/// lane that is free on all of its days. There is no limit to the number of
/// lanes, an empty week has no lane at all.
///
/// ```
/// use std::sync::Arc;
///
/// use chrono::NaiveDate;
/// use contest_calendar::{cut_banners, layout_week, Event, MonthGrid};
///
/// let at = |d, h| NaiveDate::from_ymd_opt(2017, 9, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
/// let grid = MonthGrid::build(2017, 9, at(1, 0).date()).unwrap();
///
/// let events = [
///     Arc::new(Event::new(at(27, 14), at(29, 18), "A")),
///     Arc::new(Event::new(at(28, 14), at(30, 18), "B")),
/// ];
///
/// let mut weeks = cut_banners(&grid, &events);
/// let lanes = layout_week(weeks.pop().unwrap());
///
/// assert_eq!(lanes.len(), 2);
/// assert_eq!(&*lanes[0].banners().next().unwrap().event.title, "A");
/// assert_eq!(&*lanes[1].banners().next().unwrap().event.title, "B");
/// ```
pub fn layout_week(mut banners: Vec<Banner>) -> Vec<Lane> {
    // Stable so that equal banners keep the order of the input
    banners.sort_by(Banner::layout_order);

    let mut occupancy = CompactLanes::new();
    let mut owners: Vec<[Option<usize>; WEEK_LEN]> = Vec::new();

    for (index, banner) in banners.iter().enumerate() {
        let columns = banner.columns();
        let lane = occupancy.first_free_lane(columns.clone());
        occupancy.occupy(lane, columns.clone());

        if owners.len() <= lane {
            owners.resize(lane + 1, [None; WEEK_LEN]);
        }

        for day in columns {
            owners[lane][day as usize] = Some(index);
        }
    }

    owners
        .iter()
        .map(|lane_owners| merge_lane(lane_owners, &banners))
        .collect()
}
