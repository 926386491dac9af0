use alloc::string::String;
use alloc::vec::Vec;

use row_virtualizer::{ExpansionSet, Result, WindowConfig};

use crate::{Row, SortBy, SortChange, SortState, Value, sort_rows};

/// Options for a [`TableModel`].
///
/// Column projection applies the first non-empty rule of `pick`, `omit`, `columns_extra`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableOptions {
    /// Keep only these columns.
    pub pick: Vec<String>,
    /// Drop these columns.
    pub omit: Vec<String>,
    /// Add these columns (as nulls) to rows that lack them.
    pub columns_extra: Vec<String>,
    /// Column holding a row's nested child rows.
    pub expanded_key: Option<String>,
    /// Render only the rows near the viewport.
    pub virtual_rows: bool,
    /// Columns sorted by the data source.
    pub sort_by: Vec<String>,
    /// Columns sorted in memory.
    pub sort_by_client: Vec<String>,
    pub sort_by_initial: Option<SortBy>,
    /// Row heights and buffer used when `virtual_rows` is set.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub window: WindowConfig,
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pick<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.pick = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_omit<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.omit = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_columns_extra<S: Into<String>>(
        mut self,
        columns: impl IntoIterator<Item = S>,
    ) -> Self {
        self.columns_extra = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_expanded_key(mut self, key: impl Into<String>) -> Self {
        self.expanded_key = Some(key.into());
        self
    }

    pub fn with_virtual_rows(mut self, virtual_rows: bool) -> Self {
        self.virtual_rows = virtual_rows;
        self
    }

    pub fn with_sort_by<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.sort_by = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort_by_client<S: Into<String>>(
        mut self,
        columns: impl IntoIterator<Item = S>,
    ) -> Self {
        self.sort_by_client = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort_by_initial(mut self, sort: Option<SortBy>) -> Self {
        self.sort_by_initial = sort;
        self
    }

    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }
}

/// One rendered table line: a top-level row or a child of an expanded row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DisplayRow<'a> {
    Parent { index: usize, row: &'a Row },
    Nested { parent: usize, row: &'a Row },
}

impl<'a> DisplayRow<'a> {
    pub fn row(&self) -> &'a Row {
        match self {
            Self::Parent { row, .. } | Self::Nested { row, .. } => row,
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested { .. })
    }
}

/// The data side of a table: source rows, column projection, expansion and sort state.
///
/// Row indexes used by the expansion set refer to [`Self::rows`], which keeps the order of the
/// source data (client sorts reorder the source data itself).
#[derive(Clone, Debug)]
pub struct TableModel {
    options: TableOptions,
    data: Vec<Row>,
    rows: Vec<Row>,
    expanded: ExpansionSet,
    sort: SortState,
    revision: u64,
}

impl TableModel {
    pub fn new(data: Vec<Row>, options: TableOptions) -> Result<Self> {
        options.window.validate()?;
        let sort = SortState::new(options.sort_by.clone(), options.sort_by_client.clone())
            .with_initial(options.sort_by_initial.clone());
        let mut model = Self {
            options,
            data,
            rows: Vec::new(),
            expanded: ExpansionSet::new(),
            sort,
            revision: 0,
        };
        model.project();
        Ok(model)
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn data(&self) -> &[Row] {
        &self.data
    }

    /// Replaces the source rows. Expanded indexes past the new end are dropped.
    pub fn set_data(&mut self, data: Vec<Row>) {
        self.data = data;
        let dropped = self.expanded.retain_below(self.data.len());
        if dropped > 0 {
            vdebug!(dropped, "TableModel::set_data: dropped stale expanded rows");
        }
        self.project();
        self.bump();
    }

    /// Counter bumped whenever the rows or the expansion set change.
    ///
    /// [`TableController::sync_model`](crate::TableController::sync_model) compares it to decide
    /// whether the virtualizer must be reconfigured.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Projected rows, in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Column names to render: the keys of the first row, minus the expanded key and
    /// `_`-prefixed internal keys.
    pub fn cells(&self) -> Vec<&str> {
        let Some(first) = self.rows.first() else {
            return Vec::new();
        };
        let expanded_key = self.options.expanded_key.as_deref();
        first
            .keys()
            .map(String::as_str)
            .filter(|key| Some(*key) != expanded_key && !key.starts_with('_'))
            .collect()
    }

    /// Rows in render order: each top-level row followed by its children when expanded.
    pub fn display_rows(&self) -> Vec<DisplayRow<'_>> {
        let mut out = Vec::with_capacity(self.rows.len());
        let key = self.options.expanded_key.as_deref();
        for (index, row) in self.rows.iter().enumerate() {
            out.push(DisplayRow::Parent { index, row });
            let Some(key) = key else {
                continue;
            };
            if !self.expanded.contains(index) {
                continue;
            }
            if let Some(children) = row.get(key).and_then(Value::as_rows) {
                out.extend(children.iter().map(|row| DisplayRow::Nested { parent: index, row }));
            }
        }
        out
    }

    pub fn expanded_rows(&self) -> &ExpansionSet {
        &self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(index)
    }

    /// Flips the expansion of row `index` and returns the new state.
    pub fn toggle_row(&mut self, index: usize) -> bool {
        let expanded = self.expanded.toggle(index);
        self.bump();
        vtrace!(index, expanded, "TableModel::toggle_row");
        expanded
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn sort_mut(&mut self) -> &mut SortState {
        &mut self.sort
    }

    /// Advances the sort for `column` (see [`SortState::on_sort`]).
    ///
    /// Client-sorted columns reorder the source rows (and their nested rows) immediately; expanded
    /// rows follow their records to the new positions. Clearing a client sort keeps the current
    /// order.
    pub fn on_sort_by(&mut self, column: &str) -> Option<SortChange> {
        let change = self.sort.on_sort(column)?;
        if let (true, Some(sort)) = (change.client, change.current.as_ref()) {
            let order = sort_rows(&mut self.data, sort, self.options.expanded_key.as_deref());
            self.expanded = order
                .iter()
                .enumerate()
                .filter(|&(_, &old)| self.expanded.contains(old))
                .map(|(new, _)| new)
                .collect();
            self.project();
            self.bump();
            vdebug!(column, rows = self.data.len(), "TableModel::on_sort_by: client sort");
        }
        Some(change)
    }

    /// The virtualizer configuration for the current table state.
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            enabled: self.options.virtual_rows,
            expanded_key: self.options.expanded_key.clone(),
            expanded_rows: Some(self.expanded.clone()),
            ..self.options.window.clone()
        }
    }

    fn project(&mut self) {
        let TableOptions {
            pick,
            omit,
            columns_extra,
            ..
        } = &self.options;

        self.rows = self
            .data
            .iter()
            .map(|row| {
                if !pick.is_empty() {
                    return row
                        .iter()
                        .filter(|(k, _)| pick.contains(k))
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect();
                }
                if !omit.is_empty() {
                    return row
                        .iter()
                        .filter(|(k, _)| !omit.contains(k))
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect();
                }
                let mut row = row.clone();
                for key in columns_extra {
                    row.entry(key.clone()).or_insert(Value::Null);
                }
                row
            })
            .collect();
    }
}
