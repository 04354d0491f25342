//! Fuzzing entry points, the checks themselves are shared with unit tests of
//! the main crate.
pub use contest_calendar::fuzzing::{run_fuzz_layout, Data, FuzzEvent};
