#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod banner;
pub mod constants;
pub mod context;
pub mod error;
pub mod grid;
pub mod layout;
pub mod localization;
pub mod month_view;
pub mod page;
pub mod registry;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

mod utils;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::banner::{cut_banners, Banner};
pub use crate::context::Context;
pub use crate::error::{Error, Result};
pub use crate::grid::{Day, MonthGrid};
pub use crate::layout::{layout_week, Cell, Lane};
pub use crate::month_view::{MonthLayout, MonthView, Navigation, WeekView};
pub use crate::page::PageController;
pub use crate::registry::{AttachedWidgetRegistry, ElementId};
pub use contest_calendar_syntax::{Event, EventList};
