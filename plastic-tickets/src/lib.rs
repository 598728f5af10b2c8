//! Client-side table sorting and filtering.
//!
//! A [`PlasticTable`] owns the sort state of one table: which header button
//! is active, in which direction, and with which comparator. Each
//! [`rebuild`](PlasticTable::rebuild) filters and sorts the caller's rows and
//! swaps a freshly rendered body container into the document.
//!
//! # Example
//!
//! ```ignore
//! use plasticdom::{Document, Element};
//! use plastic_tickets::{Comparator, PlasticTable};
//!
//! let table = PlasticTable::new(rows, "stock-body", |row: &Stock, doc, tr| {
//!     let cell = doc.insert_cell(tr).unwrap();
//!     doc.set_text(cell, row.name.clone()).unwrap();
//! });
//! table.register_sort_button(&mut doc, name_button, Comparator::by_key(|r: &Stock| Some(r.name.clone())))?;
//! table.rebuild(&mut doc)?;
//! ```

pub mod config;
pub mod error;
pub mod select;
pub mod sort;
pub mod table;

pub use config::{MissingBodyPolicy, TableConfig};
pub use error::TableError;
pub use select::{get_selected_values, populate_with_options};
pub use sort::{SortDirection, simple_sort_func};
pub use table::{Comparator, PlasticTable, SortState};
