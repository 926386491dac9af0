use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::{Row, compare_values};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseSortError {
    #[error("sort key {0:?} is missing a `:asc` or `:desc` suffix")]
    MissingDirection(String),
    #[error("sort key has an empty column name")]
    EmptyColumn,
    #[error("unknown sort direction {0:?} (expected `asc` or `desc`)")]
    UnknownDirection(String),
}

/// A sort column and direction, written as `column:asc` / `column:desc`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortBy {
    pub column: String,
    pub direction: SortDirection,
}

impl SortBy {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Asc)
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Desc)
    }

    pub fn is(&self, column: &str, direction: SortDirection) -> bool {
        self.column == column && self.direction == direction
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column, self.direction.as_str())
    }
}

impl FromStr for SortBy {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((column, direction)) = s.rsplit_once(':') else {
            return Err(ParseSortError::MissingDirection(s.into()));
        };
        if column.is_empty() {
            return Err(ParseSortError::EmptyColumn);
        }
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            other => return Err(ParseSortError::UnknownDirection(other.into())),
        };
        Ok(Self::new(column, direction))
    }
}

/// The outcome of [`SortState::on_sort`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortChange {
    pub previous: Option<SortBy>,
    pub current: Option<SortBy>,
    /// `true` when the column is sorted in memory rather than by the data source.
    pub client: bool,
}

/// Which columns are sortable and how the table is currently sorted.
///
/// `sort_by` columns are sorted by the data source (the host refetches on change),
/// `sort_by_client` columns are sorted in memory with [`sort_rows`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    sort_by: Vec<String>,
    sort_by_client: Vec<String>,
    initial: Option<SortBy>,
    current: Option<SortBy>,
}

impl SortState {
    pub fn new(sort_by: Vec<String>, sort_by_client: Vec<String>) -> Self {
        Self {
            sort_by,
            sort_by_client,
            initial: None,
            current: None,
        }
    }

    /// Sets the sort applied when nothing else is selected.
    pub fn with_initial(mut self, initial: Option<SortBy>) -> Self {
        self.current = initial.clone();
        self.initial = initial;
        self
    }

    pub fn current(&self) -> Option<&SortBy> {
        self.current.as_ref()
    }

    /// Restores a sort (e.g. from a URL query), ignoring columns that are not sortable.
    pub fn set_current(&mut self, sort: Option<SortBy>) {
        if let Some(s) = &sort {
            if !self.can_sort_by(&s.column) {
                vwarn!(column = %s.column, "SortState::set_current: column is not sortable");
            }
        }
        self.current = match sort {
            Some(s) if self.can_sort_by(&s.column) => Some(s),
            _ => self.initial.clone(),
        };
    }

    pub fn is_enabled(&self) -> bool {
        !self.sort_by.is_empty() || !self.sort_by_client.is_empty()
    }

    pub fn can_sort_by(&self, column: &str) -> bool {
        self.sort_by.iter().chain(&self.sort_by_client).any(|c| c == column)
    }

    pub fn is_client_sorted(&self, column: &str) -> bool {
        self.sort_by_client.iter().any(|c| c == column)
    }

    pub fn is_sorted(&self, column: &str, direction: SortDirection) -> bool {
        self.current
            .as_ref()
            .is_some_and(|s| s.is(column, direction))
    }

    /// Advances the sort for `column`: unsorted → `asc` → `desc` → cleared.
    ///
    /// Clearing falls back to the initial sort; when that would leave the sort unchanged the cycle
    /// restarts at `asc`. Returns `None` for columns that are not sortable.
    pub fn on_sort(&mut self, column: &str) -> Option<SortChange> {
        if !self.can_sort_by(column) {
            return None;
        }

        let previous = self.current.clone();
        let next = match &previous {
            Some(s) if s.is(column, SortDirection::Asc) => Some(SortBy::desc(column)),
            Some(s) if s.is(column, SortDirection::Desc) => {
                if self.initial == previous {
                    Some(SortBy::asc(column))
                } else {
                    self.initial.clone()
                }
            }
            _ => Some(SortBy::asc(column)),
        };
        self.current = next.clone();

        Some(SortChange {
            previous,
            current: next,
            client: self.is_client_sorted(column),
        })
    }
}

/// Sorts rows in memory by `sort.column`, and the nested rows under `expanded_key` by the same
/// column.
///
/// The sort is stable. Returns the permutation applied to the top-level rows: `order[new] = old`.
pub fn sort_rows(rows: &mut Vec<Row>, sort: &SortBy, expanded_key: Option<&str>) -> Vec<usize> {
    let column = sort.column.as_str();
    let direction = sort.direction;

    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| compare_values(rows[a].get(column), rows[b].get(column), direction));

    let mut taken: Vec<Option<Row>> = core::mem::take(rows).into_iter().map(Some).collect();
    rows.extend(order.iter().filter_map(|&old| taken[old].take()));

    if let Some(key) = expanded_key {
        for row in rows.iter_mut() {
            if let Some(nested) = row.get_mut(key).and_then(crate::Value::as_rows_mut) {
                nested.sort_by(|a, b| compare_values(a.get(column), b.get(column), direction));
            }
        }
    }

    order
}
