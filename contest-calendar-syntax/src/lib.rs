#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod event;

mod display;
mod parser;


pub use error::{Error, Result};
pub use event::{Event, EventList, PALETTE_SIZE};
pub use parser::parse;
