use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;

/// A row record that may own a nested sequence of child rows.
///
/// `key` is the field configured as [`crate::WindowConfig::expanded_key`]. Implementations return
/// the number of nested rows stored under that field, or `None` when the field is absent or does
/// not hold a sequence.
pub trait NestedRows {
    fn nested_len(&self, key: &str) -> Option<usize>;
}

impl<T: NestedRows + ?Sized> NestedRows for &T {
    fn nested_len(&self, key: &str) -> Option<usize> {
        (**self).nested_len(key)
    }
}

/// A cell value of a map-shaped row that may hold nested child rows.
///
/// Implementing this for a cell type makes `BTreeMap<String, V>` (and `HashMap<String, V>` with
/// `feature = "std"`) usable as rows: the nested rows are looked up under the expanded key.
pub trait NestedValue {
    fn nested_len(&self) -> Option<usize>;
}

impl<V: NestedValue> NestedRows for BTreeMap<String, V> {
    fn nested_len(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(NestedValue::nested_len)
    }
}

#[cfg(feature = "std")]
impl<V, S> NestedRows for std::collections::HashMap<String, V, S>
where
    V: NestedValue,
    S: core::hash::BuildHasher,
{
    fn nested_len(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(NestedValue::nested_len)
    }
}

/// The set of row indexes currently showing their nested child rows.
///
/// Indexes are kept sorted. Entries pointing past the end of the row sequence are allowed: the
/// expansion set and the rows are usually updated through different paths, so a momentarily stale
/// entry simply contributes no extra height.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ExpansionSet {
    indexes: BTreeSet<usize>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indexes.contains(&index)
    }

    /// Returns `true` if the index was not expanded before.
    pub fn insert(&mut self, index: usize) -> bool {
        self.indexes.insert(index)
    }

    /// Returns `true` if the index was expanded before.
    pub fn remove(&mut self, index: usize) -> bool {
        self.indexes.remove(&index)
    }

    /// Flips the expansion state of `index` and returns the new state.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.indexes.remove(&index) {
            false
        } else {
            self.indexes.insert(index);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    pub fn clear(&mut self) {
        self.indexes.clear();
    }

    /// Iterates expanded indexes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indexes.iter().copied()
    }

    /// Drops every entry `>= len`. Returns the number of removed entries.
    pub fn retain_below(&mut self, len: usize) -> usize {
        let stale = self.indexes.split_off(&len);
        stale.len()
    }

    /// Number of entries that point past a row sequence of length `len`.
    pub fn out_of_range(&self, len: usize) -> usize {
        self.indexes.range(len..).count()
    }
}

impl FromIterator<usize> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indexes: iter.into_iter().collect(),
        }
    }
}

impl Extend<usize> for ExpansionSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        self.indexes.extend(iter);
    }
}

/// Computes how many nested child rows each row contributes.
///
/// - Without an `expanded_key`, every count is `0`.
/// - With a key and no expansion set, every row holding a nested sequence counts as expanded.
/// - With a key and an expansion set, only listed rows count; out-of-range entries are ignored.
pub fn expanded_counts<R: NestedRows>(
    rows: &[R],
    expanded_key: Option<&str>,
    expanded_rows: Option<&ExpansionSet>,
) -> Vec<usize> {
    let mut counts = alloc::vec![0usize; rows.len()];
    let Some(key) = expanded_key else {
        return counts;
    };

    match expanded_rows {
        None => {
            for (count, row) in counts.iter_mut().zip(rows) {
                *count = row.nested_len(key).unwrap_or(0);
            }
        }
        Some(set) => {
            let stale = set.out_of_range(rows.len());
            if stale > 0 {
                vwarn!(
                    stale,
                    rows = rows.len(),
                    "expanded_counts: ignoring out-of-range expanded rows"
                );
            }
            for index in set.iter().take_while(|&i| i < rows.len()) {
                counts[index] = rows[index].nested_len(key).unwrap_or(0);
            }
        }
    }

    counts
}
