use alloc::vec::Vec;

use crate::prefix::PrefixHeights;
use crate::{
    ExpansionSet, NestedRows, Result, RowWindow, Viewport, WindowBounds, WindowConfig,
    expanded_counts,
};

/// A row virtualizer that caches the prefix-height table between scroll updates.
///
/// The virtualizer never holds the rows themselves: the table component owns them and passes a
/// slice on every query. Derived state is rebuilt lazily:
/// - scroll/resize only re-run the `O(log n)` window search,
/// - a different row count, different per-row child counts, a config/expansion change, or
///   [`Self::invalidate`] rebuild the `O(n)` prefix table first.
///
/// [`Self::window`] takes `&mut self`, so the rebuild and the query always happen as one step.
#[derive(Clone, Debug)]
pub struct RowVirtualizer {
    config: WindowConfig,
    counts: Vec<usize>,
    prefix: PrefixHeights,
    synced_rows: Option<usize>,
    generation: u64,
}

impl RowVirtualizer {
    pub fn new(config: WindowConfig) -> Result<Self> {
        config.validate()?;
        vdebug!(
            enabled = config.enabled,
            row_height = config.row_height,
            buffer = config.buffer,
            "RowVirtualizer::new"
        );
        Ok(Self {
            config,
            counts: Vec::new(),
            prefix: PrefixHeights::default(),
            synced_rows: None,
            generation: 0,
        })
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn enabled(&self) -> bool {
        self.config.enabled
    }

    /// Replaces the configuration. The prefix table is rebuilt on the next query only when a
    /// height, the expanded key or the expansion set changed.
    pub fn set_config(&mut self, config: WindowConfig) -> Result<()> {
        config.validate()?;
        if self.config.layout_differs(&config) || self.config.enabled != config.enabled {
            self.invalidate();
        }
        self.config = config;
        vtrace!(
            enabled = self.config.enabled,
            buffer = self.config.buffer,
            "RowVirtualizer::set_config"
        );
        Ok(())
    }

    /// Clones the current configuration, applies `f`, then delegates to [`Self::set_config`].
    pub fn update_config(&mut self, f: impl FnOnce(&mut WindowConfig)) -> Result<()> {
        let mut next = self.config.clone();
        f(&mut next);
        self.set_config(next)
    }

    pub fn set_buffer(&mut self, buffer: usize) {
        self.config.buffer = buffer;
    }

    pub fn expanded_rows(&self) -> Option<&ExpansionSet> {
        self.config.expanded_rows.as_ref()
    }

    pub fn set_expanded_rows(&mut self, expanded_rows: Option<ExpansionSet>) {
        if self.config.expanded_rows == expanded_rows {
            return;
        }
        self.config.expanded_rows = expanded_rows;
        self.invalidate();
    }

    /// Toggles one row in the expansion set and returns its new state.
    ///
    /// Without an explicit expansion set, one is created first.
    pub fn toggle_expanded(&mut self, index: usize) -> bool {
        let set = self
            .config
            .expanded_rows
            .get_or_insert_with(ExpansionSet::new);
        let expanded = set.toggle(index);
        self.invalidate();
        expanded
    }

    /// Marks the prefix table stale, forcing a rebuild on the next query.
    pub fn invalidate(&mut self) {
        self.synced_rows = None;
    }

    /// Rebuilds the prefix table if it is stale for `rows`.
    ///
    /// Expansion counts are recomputed on every call (`O(n)`) and compared with the cached ones,
    /// so a same-length slice with different nested rows is still picked up. The prefix table is
    /// only rebuilt when the counts, the row count or the configuration changed.
    ///
    /// Returns `true` when a rebuild happened.
    pub fn sync<R: NestedRows>(&mut self, rows: &[R]) -> bool {
        let counts = if self.config.enabled {
            expanded_counts(
                rows,
                self.config.expanded_key.as_deref(),
                self.config.expanded_rows.as_ref(),
            )
        } else {
            Vec::new()
        };
        if self.synced_rows == Some(rows.len()) && counts == self.counts {
            return false;
        }
        self.rebuild(rows.len(), counts);
        true
    }

    fn rebuild(&mut self, row_count: usize, counts: Vec<usize>) {
        self.prefix = if self.config.enabled {
            PrefixHeights::build(
                &counts,
                self.config.row_height,
                self.config.effective_child_row_height(),
            )
        } else {
            PrefixHeights::default()
        };
        self.counts = counts;
        self.synced_rows = Some(row_count);
        self.generation = self.generation.wrapping_add(1);
        vdebug!(
            rows = row_count,
            total_height = self.prefix.total(),
            generation = self.generation,
            "RowVirtualizer::rebuild"
        );
    }

    /// Computes the window for `rows` at `viewport`, rebuilding derived state first if needed.
    pub fn window<'a, R: NestedRows>(
        &mut self,
        rows: &'a [R],
        viewport: Viewport,
    ) -> RowWindow<'a, R> {
        if !self.config.enabled {
            return RowWindow::disabled(rows);
        }
        self.sync(rows);
        RowWindow::slice(rows, self.bounds_unchecked(viewport))
    }

    /// Window bounds from the cached prefix table, without touching the rows.
    ///
    /// Returns `None` when the table is stale (never synced, or invalidated since).
    pub fn window_bounds(&self, viewport: Viewport) -> Option<WindowBounds> {
        if !self.config.enabled {
            return Some(WindowBounds::UNSET);
        }
        self.synced_rows?;
        Some(self.bounds_unchecked(viewport))
    }

    fn bounds_unchecked(&self, viewport: Viewport) -> WindowBounds {
        let bounds = WindowBounds::compute(&self.prefix, self.config.buffer, viewport);
        vtrace!(
            scroll_offset = viewport.scroll_offset,
            viewport_height = viewport.viewport_height,
            container_top = viewport.container_top,
            start = bounds.start_index,
            end = bounds.end_index,
            "RowVirtualizer::window"
        );
        bounds
    }

    pub fn prefix_heights(&self) -> &PrefixHeights {
        &self.prefix
    }

    pub fn expanded_counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn total_height(&self) -> u64 {
        if !self.config.enabled {
            return 0;
        }
        self.prefix.total()
    }

    /// Index of the row at pixel `y` relative to the table top.
    pub fn row_at_offset(&self, y: u64) -> Option<usize> {
        if !self.config.enabled {
            return None;
        }
        self.prefix.row_at_offset(y)
    }

    /// Number of prefix-table rebuilds so far. Callers can memoize render output on it.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_synced(&self) -> bool {
        self.synced_rows.is_some()
    }
}
