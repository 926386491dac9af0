//! Data-table utilities for the `row-virtualizer` crate.
//!
//! The `row-virtualizer` crate only knows about row heights and viewports. This crate provides
//! the table layer that feeds it:
//!
//! - Row values with nested child rows, and client-side value ordering
//! - Column projection, expansion state and flattened display rows ([`TableModel`])
//! - Sort state cycling and in-memory sorting
//! - A viewport-driven [`TableController`] ("sample viewport, then recompute")
//!
//! This crate is framework-agnostic: it holds no UI objects and subscribes to no events.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod model;
mod sort;
mod value;


pub use controller::TableController;
pub use model::{DisplayRow, TableModel, TableOptions};
pub use sort::{ParseSortError, SortBy, SortChange, SortDirection, SortState, sort_rows};
pub use value::{Row, Value, compare_values};
