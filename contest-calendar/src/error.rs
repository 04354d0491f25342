use std::fmt;

pub use contest_calendar_syntax::error::Error as SyntaxError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub enum Error {
    /// The month can't be displayed: it doesn't exist or its grid exceeds supported dates.
    InvalidMonth { year: i32, month: u32 },
    /// A timestamp in milliseconds that can't be represented as a date.
    TimestampOutOfRange(i64),
    /// No widget is attached to this element.
    UnknownElement(String),
    /// A constant table declares integer keys but holds a key that is not an integer.
    InvalidConstantKey { table: &'static str, key: String },
    Syntax(SyntaxError),
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Self::Syntax(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMonth { year, month } => {
                write!(f, "invalid month {year:04}-{month:02}")
            }
            Self::TimestampOutOfRange(millis) => {
                write!(f, "timestamp {millis}ms is out of the supported range of dates")
            }
            Self::UnknownElement(id) => write!(f, "no widget attached to element `{id}`"),
            Self::InvalidConstantKey { table, key } => {
                write!(f, "key `{key}` of table {table} is not an integer")
            }
            Self::Syntax(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(err) => Some(err),
            _ => None,
        }
    }
}
