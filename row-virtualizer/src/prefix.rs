use alloc::vec::Vec;

/// Cumulative row heights, one entry per row boundary.
///
/// `get(i)` is the pixel height of every row before index `i`, so the table holds
/// `row_count() + 1` entries, starts at `0`, and never decreases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixHeights {
    sums: Vec<u64>,
}

impl Default for PrefixHeights {
    fn default() -> Self {
        Self {
            sums: alloc::vec![0],
        }
    }
}

impl PrefixHeights {
    /// Builds the table in one pass:
    /// `prefix[i + 1] = prefix[i] + row_height + counts[i] * child_row_height`.
    pub fn build(counts: &[usize], row_height: u32, child_row_height: u32) -> Self {
        let mut sums = Vec::with_capacity(counts.len() + 1);
        sums.push(0u64);

        let base = row_height as u64;
        let child = child_row_height as u64;
        let mut total = 0u64;
        for &count in counts {
            let extra = (count as u64).saturating_mul(child);
            total = total.saturating_add(base).saturating_add(extra);
            sums.push(total);
        }

        Self { sums }
    }

    /// Builds the table for `row_count` rows without nested children.
    pub fn uniform(row_count: usize, row_height: u32) -> Self {
        let base = row_height as u64;
        let sums = (0..=row_count as u64)
            .map(|i| i.saturating_mul(base))
            .collect();
        Self { sums }
    }

    /// Number of boundaries (`row_count() + 1`).
    pub fn len(&self) -> usize {
        self.sums.len()
    }

    /// Always `false`: the table holds at least the leading `0`.
    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.sums.len().saturating_sub(1)
    }

    pub fn get(&self, boundary: usize) -> Option<u64> {
        self.sums.get(boundary).copied()
    }

    /// Total height of all rows (the last entry).
    pub fn total(&self) -> u64 {
        self.sums.last().copied().unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.sums
    }

    /// Pixel offset of the top edge of row `index`, clamped to the total height.
    pub fn offset_of_row(&self, index: usize) -> u64 {
        let boundary = index.min(self.row_count());
        self.sums[boundary]
    }

    /// Height of row `index` including its expanded children.
    pub fn height_of(&self, index: usize) -> Option<u64> {
        let start = self.sums.get(index)?;
        let end = self.sums.get(index + 1)?;
        Some(end - start)
    }

    /// Index of the row containing pixel `y`, or `None` when `y` is past the last row.
    pub fn row_at_offset(&self, y: u64) -> Option<usize> {
        if y >= self.total() {
            return None;
        }
        Some(self.sums.partition_point(|&h| h <= y).saturating_sub(1))
    }

    /// First boundary whose height is `>= target` (see [`lower_bound`]).
    pub fn lower_bound(&self, target: u64) -> usize {
        lower_bound(&self.sums, target)
    }
}

/// Returns the smallest index `i` with `arr[i] >= target`, or `arr.len()` if there is none.
///
/// `arr` must be sorted ascending.
pub fn lower_bound(arr: &[u64], target: u64) -> usize {
    let mut lo = 0usize;
    let mut hi = arr.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if arr[mid] < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}
