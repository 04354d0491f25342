use std::env;
use std::fs;

use contest_calendar::constants::{builtin_tables, render_python};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = render_python(&builtin_tables())?;

    match env::args().nth(1) {
        Some(path) => fs::write(path, source)?,
        None => print!("{source}"),
    }

    Ok(())
}
