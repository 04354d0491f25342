mod constants;
mod context;
mod grid;
mod layout;
mod registry;
mod sample;


#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! datetime {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
    }};
    ( $date: expr, $tz: expr ) => {{
        use chrono::TimeZone;

        $tz.from_local_datetime(&datetime!($date))
            .single()
            .expect("ambiguous input datetime")
    }};
}

/// Build a shared event from two datetime literals.
#[macro_export]
macro_rules! event {
    ( $begin: expr, $end: expr, $title: expr $( , color = $color: expr )? $( , )? ) => {{
        use std::sync::Arc;
        use $crate::{datetime, Event};

        Arc::new(
            Event::new(datetime!($begin), datetime!($end), $title)
                $( .with_color($color) )?
        )
    }};
}
