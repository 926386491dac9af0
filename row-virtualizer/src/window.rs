use core::ops::Range;

use crate::prefix::PrefixHeights;
use crate::{NestedRows, Result, Viewport, WindowConfig};

/// The row range to render plus the spacer heights around it.
///
/// `start_index..end_index` is half-open. Rendering `top_padding`, the rows of that range, then
/// `bottom_padding` reproduces the full scroll height of the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowBounds {
    pub start_index: usize,
    pub end_index: usize, // exclusive
    pub top_padding: u64,
    pub bottom_padding: u64,
    /// Height of every row, expanded children included. `0` when virtualization is disabled.
    pub total_height: u64,
}

impl WindowBounds {
    /// The disabled-mode sentinel: `0..0`, no padding.
    pub const UNSET: Self = Self {
        start_index: 0,
        end_index: 0,
        top_padding: 0,
        bottom_padding: 0,
        total_height: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    pub(crate) fn compute(prefix: &PrefixHeights, buffer: usize, viewport: Viewport) -> Self {
        let count = prefix.row_count();
        let total = prefix.total();

        let first = prefix.lower_bound(viewport.relative_scroll()).min(count);
        let last = prefix.lower_bound(viewport.relative_bottom()).min(count);

        let start_index = first.saturating_sub(buffer);
        let end_index = last.saturating_add(buffer).min(count);
        debug_assert!(start_index <= end_index, "window start after end");

        Self {
            start_index,
            end_index,
            top_padding: prefix.offset_of_row(start_index).min(total),
            bottom_padding: total.saturating_sub(prefix.offset_of_row(end_index)),
            total_height: total,
        }
    }
}

/// The result of a window computation: bounds plus the borrowed slice of rows to render.
#[derive(Debug, PartialEq)]
pub struct RowWindow<'a, R> {
    pub bounds: WindowBounds,
    /// `rows[start_index..end_index]`, or every row when virtualization is disabled.
    pub visible_rows: &'a [R],
    /// `false` when the window was produced by a disabled configuration.
    pub virtualized: bool,
}

impl<R> Clone for RowWindow<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for RowWindow<'_, R> {}

impl<'a, R> RowWindow<'a, R> {
    pub(crate) fn disabled(rows: &'a [R]) -> Self {
        Self {
            bounds: WindowBounds::UNSET,
            visible_rows: rows,
            virtualized: false,
        }
    }

    pub(crate) fn slice(rows: &'a [R], bounds: WindowBounds) -> Self {
        Self {
            bounds,
            visible_rows: &rows[bounds.range()],
            virtualized: true,
        }
    }

    pub fn start_index(&self) -> usize {
        self.bounds.start_index
    }

    pub fn end_index(&self) -> usize {
        self.bounds.end_index
    }

    pub fn top_padding(&self) -> u64 {
        self.bounds.top_padding
    }

    pub fn bottom_padding(&self) -> u64 {
        self.bounds.bottom_padding
    }

    /// Iterates visible rows together with their index in the full row sequence.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &'a R)> + '_ {
        let offset = if self.virtualized {
            self.bounds.start_index
        } else {
            0
        };
        self.visible_rows
            .iter()
            .enumerate()
            .map(move |(i, row)| (offset + i, row))
    }
}

/// Computes the row window for one consistent snapshot of rows, configuration and viewport.
///
/// This is a pure function: the configuration is validated first, then expansion counts, prefix
/// heights and the window are derived in a single pass. For repeated calls over the same rows,
/// prefer [`crate::RowVirtualizer`], which caches the prefix table between scroll updates.
pub fn compute_window<'a, R: NestedRows>(
    rows: &'a [R],
    config: &WindowConfig,
    viewport: Viewport,
) -> Result<RowWindow<'a, R>> {
    config.validate()?;
    if !config.enabled {
        return Ok(RowWindow::disabled(rows));
    }

    let counts = crate::expanded_counts(
        rows,
        config.expanded_key.as_deref(),
        config.expanded_rows.as_ref(),
    );
    let prefix = PrefixHeights::build(
        &counts,
        config.row_height,
        config.effective_child_row_height(),
    );
    let bounds = WindowBounds::compute(&prefix, config.buffer, viewport);
    vtrace!(
        start = bounds.start_index,
        end = bounds.end_index,
        rows = rows.len(),
        "compute_window"
    );
    Ok(RowWindow::slice(rows, bounds))
}
