//! Constant tables shared with the backend.
//!
//! Each table states at definition time whether it is exported and whether
//! its keys are integers. Exported tables are rendered as Python source.

use std::fmt::{self, Display, Write};

use contest_calendar_syntax::PALETTE_SIZE;

use crate::error::{Error, Result};

/// Value of an entry of a [`ConstantTable`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum ConstantValue {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl From<i64> for ConstantValue {
    fn from(val: i64) -> Self {
        Self::Int(val)
    }
}

impl From<bool> for ConstantValue {
    fn from(val: bool) -> Self {
        Self::Bool(val)
    }
}

impl From<&str> for ConstantValue {
    fn from(val: &str) -> Self {
        Self::Str(val.to_string())
    }
}

impl From<String> for ConstantValue {
    fn from(val: String) -> Self {
        Self::Str(val)
    }
}

/// A Python string literal.
struct PyStr<'a>(&'a str);

impl Display for PyStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\'')?;

        for c in self.0.chars() {
            match c {
                '\'' => f.write_str("\\'")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                c => f.write_char(c)?,
            }
        }

        f.write_char('\'')
    }
}

impl Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(val) => write!(f, "{val}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Str(val) => write!(f, "{}", PyStr(val)),
        }
    }
}

/// A named mapping of constants.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ConstantTable {
    pub name: &'static str,
    /// Rendered by [`render_python`]
    pub export_to_python: bool,
    /// Keys are rendered as integers instead of strings
    pub int_key: bool,
    pub entries: Vec<(String, ConstantValue)>,
}

impl ConstantTable {
    /// Create an empty table which is not exported and has string keys.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            export_to_python: false,
            int_key: false,
            entries: Vec::new(),
        }
    }

    /// Mark this table for export.
    pub fn exported(self) -> Self {
        Self { export_to_python: true, ..self }
    }

    /// Render keys of this table as integers.
    pub fn with_int_key(self) -> Self {
        Self { int_key: true, ..self }
    }

    /// Append an entry to this table.
    pub fn entry(mut self, key: impl Display, value: impl Into<ConstantValue>) -> Self {
        self.entries.push((key.to_string(), value.into()));
        self
    }

    /// Render this table as a Python assignment.
    ///
    /// ```
    /// use contest_calendar::constants::ConstantTable;
    ///
    /// let table = ConstantTable::new("STATUS")
    ///     .with_int_key()
    ///     .entry(0, "pending")
    ///     .entry(1, "it's done");
    ///
    /// assert_eq!(
    ///     table.python_source().unwrap(),
    ///     "STATUS = {\n    0: 'pending',\n    1: 'it\\'s done',\n}\n",
    /// );
    /// ```
    pub fn python_source(&self) -> Result<String> {
        let mut source = format!("{} = {{\n", self.name);

        for (key, value) in &self.entries {
            let written = {
                if self.int_key {
                    let key: i64 = key.parse().map_err(|_| Error::InvalidConstantKey {
                        table: self.name,
                        key: key.clone(),
                    })?;

                    writeln!(source, "    {key}: {value},")
                } else {
                    writeln!(source, "    {}: {value},", PyStr(key))
                }
            };

            written.expect("writing into a String can't fail");
        }

        source.push_str("}\n");
        Ok(source)
    }
}

/// Render all tables marked for export as a Python module.
pub fn render_python<'a>(tables: impl IntoIterator<Item = &'a ConstantTable>) -> Result<String> {
    let mut source = String::from("# Generated by export_constants, do not edit.\n");

    for table in tables.into_iter().filter(|table| table.export_to_python) {
        source.push('\n');
        source.push_str(&table.python_source()?);
    }

    Ok(source)
}

/// CSS classes of the banner colors, indexed by [`contest_calendar_syntax::Event::color_index`].
pub fn banner_colors() -> ConstantTable {
    (0..PALETTE_SIZE).fold(
        ConstantTable::new("BANNER_COLORS").exported().with_int_key(),
        |table, index| table.entry(index, format!("banner-color-{index}")),
    )
}

/// Names of the columns of the calendar, starting on Sunday.
pub fn weekdays() -> ConstantTable {
    const NAMES: [&str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];

    (NAMES.iter().enumerate()).fold(
        ConstantTable::new("WEEKDAYS").with_int_key(),
        |table, (index, name)| table.entry(index, *name),
    )
}

/// All tables known by this crate.
pub fn builtin_tables() -> Vec<ConstantTable> {
    vec![banner_colors(), weekdays()]
}
