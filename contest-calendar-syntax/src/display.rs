use std::fmt::Display;

use crate::event::{Event, EventList};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn write_quoted(f: &mut std::fmt::Formatter<'_>, text: &str) -> std::fmt::Result {
    write!(f, "\"")?;

    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            write!(f, "\\")?;
        }

        write!(f, "{c}")?;
    }

    write!(f, "\"")
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            self.begin_at.format(DATETIME_FORMAT),
            self.end_at.format(DATETIME_FORMAT),
        )?;

        if self.color_index != 0 {
            write!(f, " [{}]", self.color_index)?;
        }

        write!(f, " ")?;
        write_quoted(f, &self.title)?;

        if !self.link.is_empty() {
            write!(f, " <{}>", self.link)?;
        }

        Ok(())
    }
}

impl Display for EventList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in self.events() {
            writeln!(f, "{event}")?;
        }

        Ok(())
    }
}
