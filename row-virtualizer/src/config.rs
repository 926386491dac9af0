use alloc::string::String;

use crate::{ConfigError, ExpansionSet, Result};

pub const DEFAULT_ROW_HEIGHT: u32 = 40;
pub const DEFAULT_BUFFER: usize = 5;

/// Configuration for [`crate::RowVirtualizer`] and [`crate::compute_window`].
///
/// Heights are in pixels. The configuration is validated once (see [`Self::validate`]) before any
/// window is computed, so a zero height never reaches the prefix table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowConfig {
    /// When disabled, every row is reported visible with zero padding and the
    /// `start_index`/`end_index` pair is left at the `0..0` sentinel.
    pub enabled: bool,

    /// Height of a top-level row.
    pub row_height: u32,

    /// Height of a nested child row. `None` falls back to `row_height`.
    pub child_row_height: Option<u32>,

    /// Extra rows rendered above and below the strict viewport.
    pub buffer: usize,

    /// Field holding a row's nested children. Without it, rows never expand.
    pub expanded_key: Option<String>,

    /// Rows currently expanded.
    ///
    /// `None` means "every row with nested children", `Some(set)` restricts expansion to the
    /// listed indexes.
    pub expanded_rows: Option<ExpansionSet>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            row_height: DEFAULT_ROW_HEIGHT,
            child_row_height: None,
            buffer: DEFAULT_BUFFER,
            expanded_key: None,
            expanded_rows: None,
        }
    }
}

impl WindowConfig {
    pub fn new(row_height: u32) -> Self {
        Self {
            row_height,
            ..Self::default()
        }
    }

    /// A configuration that reports every row as visible.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_child_row_height(mut self, child_row_height: Option<u32>) -> Self {
        self.child_row_height = child_row_height;
        self
    }

    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn with_expanded_key(mut self, expanded_key: impl Into<String>) -> Self {
        self.expanded_key = Some(expanded_key.into());
        self
    }

    pub fn with_expanded_rows(mut self, expanded_rows: Option<ExpansionSet>) -> Self {
        self.expanded_rows = expanded_rows;
        self
    }

    pub fn effective_child_row_height(&self) -> u32 {
        self.child_row_height.unwrap_or(self.row_height)
    }

    pub fn validate(&self) -> Result<()> {
        if self.row_height == 0 {
            return Err(ConfigError::InvalidRowHeight(self.row_height));
        }
        if let Some(0) = self.child_row_height {
            return Err(ConfigError::InvalidChildRowHeight(0));
        }
        Ok(())
    }

    /// Whether switching from `self` to `next` requires rebuilding the prefix table.
    pub(crate) fn layout_differs(&self, next: &Self) -> bool {
        self.row_height != next.row_height
            || self.effective_child_row_height() != next.effective_child_row_height()
            || self.expanded_key != next.expanded_key
            || self.expanded_rows != next.expanded_rows
    }
}
