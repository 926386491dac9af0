//! Headless row windowing for virtualized tables.
//!
//! Given the rows of a table (where a row may own nested child rows that are shown when the row
//! is expanded) and a snapshot of the scroll viewport, this crate computes the contiguous range of
//! rows to render plus the spacer heights that keep the total scroll height correct.
//!
//! The math is a prefix sum over row heights and a lower-bound binary search over it:
//! `O(n)` to rebuild after the rows or the expansion set change, `O(log n)` per scroll update.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - the rows (implementing [`NestedRows`] when rows can expand)
//! - scroll offset, viewport height and the table's top offset (a [`Viewport`])
//!
//! For the data-table model and a viewport-driven controller, see the `row-virtualizer-table`
//! crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod error;
mod expansion;
mod prefix;
mod viewport;
mod virtualizer;
mod window;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_BUFFER, DEFAULT_ROW_HEIGHT, WindowConfig};
pub use error::{ConfigError, Result};
pub use expansion::{ExpansionSet, NestedRows, NestedValue, expanded_counts};
pub use prefix::{PrefixHeights, lower_bound};
pub use viewport::Viewport;
pub use virtualizer::RowVirtualizer;
pub use window::{RowWindow, WindowBounds, compute_window};
