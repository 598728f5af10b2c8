//! Table controller - sort state, filtering and body re-rendering.
//!
//! The controller provides:
//! - A three-state sort cycle per header button (neutral, descending, ascending)
//! - An optional row filter
//! - Full replacement of the body container on every rebuild

mod comparator;
mod controller;
mod events;
mod state;

pub use comparator::Comparator;
pub use controller::{PlasticTable, RowBuilder};
pub use state::SortState;
