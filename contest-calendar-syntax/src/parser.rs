use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use pest::error::ErrorVariant;
use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, Result};
use crate::event::{Event, EventList, PALETTE_SIZE};

#[cfg(feature = "log")]
static WARN_PALETTE: std::sync::Once = std::sync::Once::new();

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct ListingParser;

/// Parse a listing of events.
///
/// ```
/// use contest_calendar_syntax::parse;
///
/// let listing = parse(
///     r#"
///     # Two contests
///     2017-09-27 14:00 - 2017-09-29 18:00 [2] "Weekly Contest" <https://example.org/c/1>
///     2017-09-28 14:00 - 2017-10-01 18:00 "Marathon"
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(listing.len(), 2);
/// assert_eq!(listing.events()[0].color_index, 2);
/// assert_eq!(&*listing.events()[1].link, "");
/// ```
pub fn parse(data: &str) -> Result<EventList> {
    let listing_pair = ListingParser::parse(Rule::input_listing, data)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no listing found");

    build_listing(listing_pair)
}

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

fn custom_error(pair: &Pair<Rule>, message: String) -> Error {
    pest::error::Error::new_from_span(ErrorVariant::CustomError { message }, pair.as_span()).into()
}

// ---
// --- Listing
// ---

fn build_listing(pair: Pair<Rule>) -> Result<EventList> {
    assert_eq!(pair.as_rule(), Rule::listing);

    pair.into_inner()
        .map(|pair| match pair.as_rule() {
            Rule::event => build_event(pair),
            other => unexpected_token(other, Rule::listing),
        })
        .collect()
}

fn build_event(pair: Pair<Rule>) -> Result<Event> {
    assert_eq!(pair.as_rule(), Rule::event);
    let mut pairs = pair.into_inner();

    let begin_at = build_datetime(pairs.next().expect("missing event start"))?;
    let end_at = build_datetime(pairs.next().expect("missing event end"))?;

    let color_index = {
        if pairs.peek().map(|x| x.as_rule()) == Some(Rule::color) {
            build_color(pairs.next().expect("missing color"))?
        } else {
            0
        }
    };

    let title = build_title(pairs.next().expect("missing title"));
    let link = pairs.next().map(build_link).unwrap_or_default();

    Ok(Event {
        begin_at,
        end_at,
        title: Arc::from(title),
        color_index,
        link: Arc::from(link),
    })
}

// ---
// --- Dates and times
// ---

fn build_datetime(pair: Pair<Rule>) -> Result<NaiveDateTime> {
    assert_eq!(pair.as_rule(), Rule::datetime);
    let mut pairs = pair.into_inner();
    let date = build_date(pairs.next().expect("missing date"))?;
    let time = build_time(pairs.next().expect("missing time"))?;
    Ok(date.and_time(time))
}

fn build_date(pair: Pair<Rule>) -> Result<NaiveDate> {
    assert_eq!(pair.as_rule(), Rule::date);
    let mut pairs = pair.clone().into_inner();
    let year = build_number(pairs.next().expect("missing year"), Rule::year);
    let month = build_number(pairs.next().expect("missing month"), Rule::month);
    let day = build_number(pairs.next().expect("missing day"), Rule::day);

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| custom_error(&pair, format!("invalid date {}", pair.as_str())))
}

fn build_time(pair: Pair<Rule>) -> Result<NaiveTime> {
    assert_eq!(pair.as_rule(), Rule::time);
    let mut pairs = pair.clone().into_inner();
    let hour = build_number(pairs.next().expect("missing hour"), Rule::hour);
    let minute = build_number(pairs.next().expect("missing minute"), Rule::minute);

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| custom_error(&pair, format!("invalid time {}", pair.as_str())))
}

/// Fixed-width numbers of the grammar always fit in an `u32`.
fn build_number(pair: Pair<Rule>, rule: Rule) -> u32 {
    assert_eq!(pair.as_rule(), rule);
    pair.as_str().parse().expect("invalid number format")
}

// ---
// --- Decorations
// ---

fn build_color(pair: Pair<Rule>) -> Result<u8> {
    assert_eq!(pair.as_rule(), Rule::color);
    let pair = pair.into_inner().next().expect("empty color");
    assert_eq!(pair.as_rule(), Rule::color_index);

    let color_index: u8 = pair.as_str().parse().map_err(|_| Error::Overflow {
        value: pair.as_str().to_string(),
        expected: "a color index between 0 and 255".to_string(),
    })?;

    if color_index >= PALETTE_SIZE {
        #[cfg(feature = "log")]
        WARN_PALETTE.call_once(|| {
            log::warn!("Found color index {color_index} which is outside of the default palette")
        });
    }

    Ok(color_index)
}

fn build_title(pair: Pair<Rule>) -> String {
    assert_eq!(pair.as_rule(), Rule::title);
    let inner = pair.into_inner().next().expect("empty title");
    assert_eq!(inner.as_rule(), Rule::title_inner);

    let mut title = String::with_capacity(inner.as_str().len());
    let mut chars = inner.as_str().chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            title.extend(chars.next());
        } else {
            title.push(c);
        }
    }

    title
}

fn build_link(pair: Pair<Rule>) -> String {
    assert_eq!(pair.as_rule(), Rule::link);
    let inner = pair.into_inner().next().expect("empty link");
    assert_eq!(inner.as_rule(), Rule::link_inner);
    inner.as_str().trim().to_string()
}
