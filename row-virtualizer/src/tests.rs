use crate::*;

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

const CHILDREN: &str = "children";

#[derive(Clone, Debug, Default, PartialEq)]
struct Row {
    id: usize,
    children: Option<Vec<usize>>,
}

impl NestedRows for Row {
    fn nested_len(&self, key: &str) -> Option<usize> {
        if key != CHILDREN {
            return None;
        }
        self.children.as_ref().map(Vec::len)
    }
}

fn flat_rows(n: usize) -> Vec<Row> {
    (0..n).map(|id| Row { id, children: None }).collect()
}

fn with_children(mut rows: Vec<Row>, index: usize, count: usize) -> Vec<Row> {
    rows[index].children = Some((0..count).collect());
    rows
}

fn expected_heights(rows: &[Row], config: &WindowConfig) -> Vec<u64> {
    let child = config.effective_child_row_height() as u64;
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let expanded = config.expanded_key.as_deref() == Some(CHILDREN)
                && config
                    .expanded_rows
                    .as_ref()
                    .is_none_or(|set| set.contains(i));
            let extra = if expanded {
                row.children.as_ref().map_or(0, Vec::len) as u64 * child
            } else {
                0
            };
            config.row_height as u64 + extra
        })
        .collect()
}

fn expected_prefix(heights: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(heights.len() + 1);
    let mut acc = 0u64;
    out.push(acc);
    for h in heights {
        acc += h;
        out.push(acc);
    }
    out
}

fn expected_lower_bound(arr: &[u64], target: u64) -> usize {
    arr.iter().position(|&v| v >= target).unwrap_or(arr.len())
}

fn expected_bounds(rows: &[Row], config: &WindowConfig, viewport: Viewport) -> WindowBounds {
    let n = rows.len();
    let prefix = expected_prefix(&expected_heights(rows, config));
    let total = prefix[n];
    let relative = viewport
        .scroll_offset
        .saturating_sub(viewport.container_top);
    let bottom = relative + viewport.viewport_height as u64;

    let first = expected_lower_bound(&prefix, relative).min(n);
    let last = expected_lower_bound(&prefix, bottom).min(n);
    let start = first.saturating_sub(config.buffer);
    let end = (last + config.buffer).min(n);

    WindowBounds {
        start_index: start,
        end_index: end,
        top_padding: prefix[start].min(total),
        bottom_padding: total.saturating_sub(prefix[end]),
        total_height: total,
    }
}

#[test]
fn default_config_matches_documented_values() {
    let config = WindowConfig::default();
    assert!(config.enabled);
    assert_eq!(config.row_height, 40);
    assert_eq!(config.effective_child_row_height(), 40);
    assert_eq!(config.buffer, 5);
    assert_eq!(config.expanded_key, None);
    assert_eq!(config.expanded_rows, None);

    let config = config.with_row_height(24);
    assert_eq!(config.effective_child_row_height(), 24);
    let config = config.with_child_row_height(Some(18));
    assert_eq!(config.effective_child_row_height(), 18);
}

#[test]
fn fixed_rows_scenario() {
    let rows = flat_rows(100);
    let config = WindowConfig::default();
    let viewport = Viewport::new(800, 400, 0);

    let w = compute_window(&rows, &config, viewport).unwrap();
    assert!(w.virtualized);
    assert_eq!(w.start_index(), 15);
    assert_eq!(w.end_index(), 35);
    assert_eq!(w.top_padding(), 600);
    assert_eq!(w.bottom_padding(), 2600);
    assert_eq!(w.bounds.total_height, 4000);
    assert_eq!(w.visible_rows.len(), 20);
    assert_eq!(w.visible_rows[0].id, 15);
    assert_eq!(w.visible_rows[19].id, 34);
}

#[test]
fn expanded_row_shifts_pixels_not_rows() {
    let rows = with_children(flat_rows(100), 10, 3);
    let config = WindowConfig::default()
        .with_child_row_height(Some(20))
        .with_expanded_key(CHILDREN)
        .with_expanded_rows(Some([10].into_iter().collect()));

    let mut v = RowVirtualizer::new(config).unwrap();
    v.sync(&rows);
    let prefix = v.prefix_heights();
    assert_eq!(prefix.get(10), Some(400));
    assert_eq!(prefix.get(11), Some(400 + 40 + 60));
    assert_eq!(prefix.height_of(10), Some(100));
    assert_eq!(v.total_height(), 4000 + 60);
    assert_eq!(v.expanded_counts()[10], 3);

    let w = v.window(&rows, Viewport::new(800, 400, 0));
    assert_eq!(w.start_index(), 14);
    assert_eq!(w.end_index(), 34);
    assert_eq!(w.top_padding(), 620);
    assert_eq!(w.bottom_padding(), 4060 - 1420);
}

#[test]
fn empty_rows_yield_empty_window() {
    let rows: Vec<Row> = Vec::new();
    let w = compute_window(&rows, &WindowConfig::default(), Viewport::new(500, 300, 0)).unwrap();
    assert_eq!(w.bounds, WindowBounds::UNSET);
    assert!(w.visible_rows.is_empty());

    let prefix = PrefixHeights::build(&[], 40, 40);
    assert_eq!(prefix.as_slice(), &[0]);
    assert_eq!(prefix.total(), 0);
    assert_eq!(prefix.row_at_offset(0), None);
}

#[test]
fn disabled_config_reports_all_rows() {
    for n in [0usize, 1, 50] {
        let rows = flat_rows(n);
        let w = compute_window(&rows, &WindowConfig::disabled(), Viewport::new(1234, 10, 7))
            .unwrap();
        assert!(!w.virtualized);
        assert_eq!(w.start_index(), 0);
        assert_eq!(w.end_index(), 0);
        assert_eq!(w.top_padding(), 0);
        assert_eq!(w.bottom_padding(), 0);
        assert_eq!(w.visible_rows, rows.as_slice());

        let indexes: Vec<usize> = w.iter_indexed().map(|(i, _)| i).collect();
        assert_eq!(indexes, (0..n).collect::<Vec<_>>());
    }

    let mut v = RowVirtualizer::new(WindowConfig::disabled()).unwrap();
    let rows = flat_rows(10);
    let w = v.window(&rows, Viewport::new(100, 100, 0));
    assert_eq!(w.visible_rows.len(), 10);
    assert_eq!(v.total_height(), 0);
    assert_eq!(v.window_bounds(Viewport::default()), Some(WindowBounds::UNSET));
}

#[test]
fn scroll_above_table_clamps_to_start() {
    let rows = flat_rows(100);
    let config = WindowConfig::default();
    // The table body starts 1000px down the page and the page is scrolled 300px.
    let w = compute_window(&rows, &config, Viewport::new(300, 400, 1000)).unwrap();
    assert_eq!(w.start_index(), 0);
    assert_eq!(w.top_padding(), 0);
    // Relative scroll is clamped to 0, so the bottom edge sits at 400px.
    assert_eq!(w.end_index(), 15);
}

#[test]
fn buffer_larger_than_rows_clamps() {
    let rows = flat_rows(3);
    let config = WindowConfig::default().with_buffer(50);
    let w = compute_window(&rows, &config, Viewport::new(40, 10, 0)).unwrap();
    assert_eq!(w.start_index(), 0);
    assert_eq!(w.end_index(), 3);
    assert_eq!(w.top_padding(), 0);
    assert_eq!(w.bottom_padding(), 0);
}

#[test]
fn scrolled_past_bottom_reaches_row_count() {
    let rows = flat_rows(30);
    let config = WindowConfig::default().with_buffer(0);
    let total = 30 * 40;
    let container_top = 250;
    let viewport = Viewport::new(total + container_top - 100, 100, container_top);
    let w = compute_window(&rows, &config, viewport).unwrap();
    assert_eq!(w.end_index(), 30);
    assert_eq!(w.bottom_padding(), 0);

    let far = Viewport::new(100_000, 100, container_top);
    let w = compute_window(&rows, &config, far).unwrap();
    assert_eq!(w.start_index(), 30);
    assert_eq!(w.end_index(), 30);
    assert!(w.visible_rows.is_empty());
    assert_eq!(w.top_padding(), total);
    assert_eq!(w.bottom_padding(), 0);
}

#[test]
fn zero_heights_are_rejected() {
    let rows = flat_rows(5);
    let err = compute_window(&rows, &WindowConfig::new(0), Viewport::default()).unwrap_err();
    assert_eq!(err, ConfigError::InvalidRowHeight(0));

    let config = WindowConfig::default().with_child_row_height(Some(0));
    assert_eq!(
        RowVirtualizer::new(config).unwrap_err(),
        ConfigError::InvalidChildRowHeight(0)
    );

    // Validation also applies to disabled configurations.
    let config = WindowConfig::disabled().with_row_height(0);
    assert!(compute_window(&rows, &config, Viewport::default()).is_err());

    let mut v = RowVirtualizer::new(WindowConfig::default()).unwrap();
    assert!(v.update_config(|c| c.row_height = 0).is_err());
    assert_eq!(v.config().row_height, 40);
}

#[test]
fn error_messages_name_the_field() {
    let msg = std::format!("{}", ConfigError::InvalidRowHeight(0));
    assert!(msg.contains("row_height"));
    let msg = std::format!("{}", ConfigError::InvalidChildRowHeight(0));
    assert!(msg.contains("child_row_height"));
}

#[test]
fn out_of_range_expansion_is_ignored() {
    let rows = with_children(flat_rows(4), 1, 2);
    let set: ExpansionSet = [1, 7, 99].into_iter().collect();
    let counts = expanded_counts(&rows, Some(CHILDREN), Some(&set));
    assert_eq!(counts, [0, 2, 0, 0]);
    assert_eq!(set.out_of_range(rows.len()), 2);

    let config = WindowConfig::default()
        .with_expanded_key(CHILDREN)
        .with_expanded_rows(Some(set));
    let w = compute_window(&rows, &config, Viewport::new(0, 1000, 0)).unwrap();
    assert_eq!(w.bounds.total_height, 4 * 40 + 2 * 40);
}

#[test]
fn expansion_requires_key_and_nested_rows() {
    let rows = with_children(with_children(flat_rows(5), 0, 4), 3, 1);

    // No key: nothing expands.
    let counts = expanded_counts(&rows, None, None);
    assert_eq!(counts, [0; 5]);

    // Unknown key: nothing expands.
    let counts = expanded_counts(&rows, Some("items"), None);
    assert_eq!(counts, [0; 5]);

    // Key without an expansion set: every row with children counts.
    let counts = expanded_counts(&rows, Some(CHILDREN), None);
    assert_eq!(counts, [4, 0, 0, 1, 0]);

    // Key with an explicit set: only listed rows count, rows without children add nothing.
    let set: ExpansionSet = [2, 3].into_iter().collect();
    let counts = expanded_counts(&rows, Some(CHILDREN), Some(&set));
    assert_eq!(counts, [0, 0, 0, 1, 0]);

    // An empty set expands nothing.
    let counts = expanded_counts(&rows, Some(CHILDREN), Some(&ExpansionSet::new()));
    assert_eq!(counts, [0; 5]);
}

#[test]
fn expansion_set_operations() {
    let mut set = ExpansionSet::new();
    assert!(set.is_empty());
    assert!(set.toggle(3));
    assert!(set.contains(3));
    assert!(!set.toggle(3));
    assert!(!set.contains(3));

    set.extend([9, 1, 5, 12]);
    assert_eq!(set.iter().collect::<Vec<_>>(), [1, 5, 9, 12]);
    assert_eq!(set.retain_below(9), 2);
    assert_eq!(set.iter().collect::<Vec<_>>(), [1, 5]);
    assert!(set.remove(1));
    assert!(!set.insert(5));
    assert_eq!(set.len(), 1);
    set.clear();
    assert!(set.is_empty());
}

#[test]
fn lower_bound_finds_first_not_less() {
    assert_eq!(lower_bound(&[], 5), 0);
    let arr = [0u64, 40, 80, 80, 120];
    assert_eq!(lower_bound(&arr, 0), 0);
    assert_eq!(lower_bound(&arr, 1), 1);
    assert_eq!(lower_bound(&arr, 40), 1);
    assert_eq!(lower_bound(&arr, 80), 2);
    assert_eq!(lower_bound(&arr, 81), 4);
    assert_eq!(lower_bound(&arr, 120), 4);
    assert_eq!(lower_bound(&arr, 121), 5);

    let mut rng = Lcg::new(7);
    for _ in 0..200 {
        let len = rng.gen_range_usize(0, 40);
        let mut arr = Vec::with_capacity(len);
        let mut acc = 0u64;
        for _ in 0..len {
            acc += rng.gen_range_u64(0, 5);
            arr.push(acc);
        }
        let target = rng.gen_range_u64(0, acc + 3);
        assert_eq!(lower_bound(&arr, target), expected_lower_bound(&arr, target));
    }
}

#[test]
fn prefix_table_helpers() {
    let prefix = PrefixHeights::build(&[0, 2, 0], 10, 5);
    assert_eq!(prefix.as_slice(), &[0, 10, 30, 40]);
    assert_eq!(prefix.len(), 4);
    assert_eq!(prefix.row_count(), 3);
    assert_eq!(prefix.height_of(1), Some(20));
    assert_eq!(prefix.height_of(3), None);
    assert_eq!(prefix.offset_of_row(2), 30);
    assert_eq!(prefix.offset_of_row(99), 40);
    assert_eq!(prefix.row_at_offset(0), Some(0));
    assert_eq!(prefix.row_at_offset(9), Some(0));
    assert_eq!(prefix.row_at_offset(10), Some(1));
    assert_eq!(prefix.row_at_offset(29), Some(1));
    assert_eq!(prefix.row_at_offset(39), Some(2));
    assert_eq!(prefix.row_at_offset(40), None);

    assert_eq!(PrefixHeights::uniform(3, 10), PrefixHeights::build(&[0, 0, 0], 10, 99));
}

#[test]
fn randomized_windows_match_reference() {
    let mut rng = Lcg::new(0x5eed);

    for _ in 0..300 {
        let n = rng.gen_range_usize(0, 120);
        let mut rows = flat_rows(n);
        for row in rows.iter_mut() {
            if rng.gen_range_u32(0, 4) == 0 {
                let count = rng.gen_range_usize(0, 6);
                row.children = Some((0..count).collect());
            }
        }

        let mut config = WindowConfig::default()
            .with_row_height(rng.gen_range_u32(1, 60))
            .with_buffer(rng.gen_range_usize(0, 8));
        if rng.gen_bool() {
            config = config.with_child_row_height(Some(rng.gen_range_u32(1, 40)));
        }
        if rng.gen_bool() {
            config = config.with_expanded_key(CHILDREN);
            if rng.gen_bool() {
                let picks = rng.gen_range_usize(0, 10);
                let set = (0..picks).map(|_| rng.gen_range_usize(0, n + 5)).collect();
                config = config.with_expanded_rows(Some(set));
            }
        }

        let total = expected_prefix(&expected_heights(&rows, &config))[n];
        let container_top = rng.gen_range_u64(0, 500);
        let viewport = Viewport::new(
            rng.gen_range_u64(0, total + container_top + 600),
            rng.gen_range_u32(0, 900),
            container_top,
        );

        let expected = expected_bounds(&rows, &config, viewport);
        let w = compute_window(&rows, &config, viewport).unwrap();
        assert_eq!(w.bounds, expected);
        assert_eq!(w.visible_rows, &rows[expected.start_index..expected.end_index]);

        let mut v = RowVirtualizer::new(config.clone()).unwrap();
        assert_eq!(v.window(&rows, viewport), w);

        // Spacers plus rendered rows always add up to the full height.
        let heights = expected_heights(&rows, &config);
        let rendered: u64 = heights[w.bounds.range()].iter().sum();
        assert_eq!(
            w.top_padding() + rendered + w.bottom_padding(),
            w.bounds.total_height
        );
    }
}

#[test]
fn window_is_monotonic_in_scroll_offset() {
    let mut rng = Lcg::new(42);
    let mut rows = flat_rows(200);
    for row in rows.iter_mut().step_by(3) {
        row.children = Some((0..rng.gen_range_usize(0, 4)).collect());
    }
    let config = WindowConfig::default()
        .with_child_row_height(Some(12))
        .with_expanded_key(CHILDREN);
    let mut v = RowVirtualizer::new(config).unwrap();
    v.sync(&rows);
    let total = v.total_height();

    let mut prev = WindowBounds::UNSET;
    let mut offset = 0u64;
    while offset < total + 1000 {
        let b = v.window_bounds(Viewport::new(offset, 480, 120)).unwrap();
        assert!(b.start_index >= prev.start_index);
        assert!(b.end_index >= prev.end_index);
        prev = b;
        offset += rng.gen_range_u64(1, 90);
    }
    assert_eq!(prev.end_index, rows.len());
}

#[test]
fn identical_inputs_give_identical_windows() {
    let rows = with_children(flat_rows(64), 5, 9);
    let config = WindowConfig::default().with_expanded_key(CHILDREN);
    let viewport = Viewport::new(1337, 555, 21);

    let a = compute_window(&rows, &config, viewport).unwrap();
    let b = compute_window(&rows, &config, viewport).unwrap();
    assert_eq!(a, b);

    let mut v = RowVirtualizer::new(config).unwrap();
    let c = v.window(&rows, viewport);
    let d = v.window(&rows, viewport);
    assert_eq!(c, d);
    assert_eq!(a, c);
}

#[test]
fn virtualizer_rebuilds_only_when_stale() {
    let rows = with_children(flat_rows(50), 2, 3);
    let config = WindowConfig::default().with_expanded_key(CHILDREN);
    let mut v = RowVirtualizer::new(config).unwrap();
    assert!(!v.is_synced());
    assert_eq!(v.window_bounds(Viewport::default()), None);

    assert!(v.sync(&rows));
    let g = v.generation();
    assert!(!v.sync(&rows));

    // Scrolling only queries.
    v.window(&rows, Viewport::new(100, 300, 0));
    v.window(&rows, Viewport::new(900, 300, 0));
    assert_eq!(v.generation(), g);

    // Buffer does not affect the prefix table.
    v.update_config(|c| c.buffer = 1).unwrap();
    v.window(&rows, Viewport::new(900, 300, 0));
    assert_eq!(v.generation(), g);

    // Row count change.
    let more = flat_rows(60);
    v.window(&more, Viewport::new(900, 300, 0));
    assert_eq!(v.generation(), g + 1);

    // Expansion change.
    v.set_expanded_rows(Some(ExpansionSet::new()));
    assert!(!v.is_synced());
    v.window(&more, Viewport::new(900, 300, 0));
    assert_eq!(v.generation(), g + 2);

    // Same expansion set again is a no-op.
    v.set_expanded_rows(Some(ExpansionSet::new()));
    assert!(v.is_synced());

    // Invalidate forces a rebuild even when nothing changed.
    v.invalidate();
    assert!(v.sync(&more));
    assert_eq!(v.generation(), g + 3);
}

#[test]
fn same_length_rows_with_new_children_rebuild() {
    let config = WindowConfig::default()
        .with_buffer(0)
        .with_expanded_key(CHILDREN);
    let mut v = RowVirtualizer::new(config.clone()).unwrap();
    let viewport = Viewport::new(800, 400, 0);

    let flat = flat_rows(100);
    let w = v.window(&flat, viewport);
    assert_eq!((w.start_index(), w.end_index()), (20, 30));
    assert_eq!(w.bounds.total_height, 4000);
    let g = v.generation();

    // Same row count, but row 0 now carries 50 children.
    let nested = with_children(flat_rows(100), 0, 50);
    let cached = v.window(&nested, viewport).bounds;
    let fresh = compute_window(&nested, &config, viewport).unwrap().bounds;
    assert_eq!(cached, fresh);
    assert_eq!((cached.start_index, cached.end_index), (1, 1));
    assert_eq!(cached.total_height, 6000);
    assert_eq!(v.generation(), g + 1);

    // Reordering rows of the same length moves the extra height with the row.
    let mut reordered = nested.clone();
    reordered.swap(0, 99);
    let cached = v.window(&reordered, viewport).bounds;
    let fresh = compute_window(&reordered, &config, viewport).unwrap().bounds;
    assert_eq!(cached, fresh);
    assert_eq!((cached.start_index, cached.end_index), (20, 30));
    assert_eq!(v.generation(), g + 2);

    // Identical counts again: no rebuild.
    v.window(&reordered, Viewport::new(0, 400, 0));
    assert_eq!(v.generation(), g + 2);
}

#[test]
fn toggling_expansion_updates_heights() {
    let rows = with_children(flat_rows(10), 4, 2);
    let config = WindowConfig::default()
        .with_child_row_height(Some(30))
        .with_expanded_key(CHILDREN)
        .with_expanded_rows(Some(ExpansionSet::new()));
    let mut v = RowVirtualizer::new(config).unwrap();

    v.sync(&rows);
    assert_eq!(v.total_height(), 400);

    assert!(v.toggle_expanded(4));
    v.sync(&rows);
    assert_eq!(v.total_height(), 460);
    // Row 4 now spans 160..260.
    assert_eq!(v.row_at_offset(159), Some(3));
    assert_eq!(v.row_at_offset(160), Some(4));
    assert_eq!(v.row_at_offset(259), Some(4));
    assert_eq!(v.row_at_offset(260), Some(5));

    assert!(!v.toggle_expanded(4));
    v.sync(&rows);
    assert_eq!(v.total_height(), 400);
    assert_eq!(v.expanded_rows(), Some(&ExpansionSet::new()));
}

#[test]
fn toggling_without_a_set_creates_one() {
    let rows = with_children(with_children(flat_rows(4), 0, 1), 2, 1);
    let config = WindowConfig::default().with_expanded_key(CHILDREN);
    let mut v = RowVirtualizer::new(config).unwrap();
    v.sync(&rows);
    // Without a set, both rows with children are expanded.
    assert_eq!(v.total_height(), 6 * 40);

    // The first toggle creates an explicit set holding only the toggled row.
    assert!(v.toggle_expanded(2));
    v.sync(&rows);
    assert_eq!(v.total_height(), 5 * 40);
}

#[test]
fn disabling_and_enabling_rebuilds() {
    let rows = flat_rows(20);
    let mut v = RowVirtualizer::new(WindowConfig::default()).unwrap();
    v.sync(&rows);
    assert_eq!(v.total_height(), 800);

    v.update_config(|c| c.enabled = false).unwrap();
    assert!(!v.enabled());
    assert_eq!(v.window(&rows, Viewport::new(0, 100, 0)).visible_rows.len(), 20);

    v.update_config(|c| c.enabled = true).unwrap();
    let w = v.window(&rows, Viewport::new(0, 100, 0));
    assert!(w.virtualized);
    assert_eq!(w.end_index(), 8);
    assert_eq!(v.total_height(), 800);
}

#[test]
fn iter_indexed_reports_absolute_indexes() {
    let rows = flat_rows(100);
    let w = compute_window(&rows, &WindowConfig::default(), Viewport::new(800, 400, 0)).unwrap();
    for (i, row) in w.iter_indexed() {
        assert_eq!(i, row.id);
    }
    assert_eq!(w.iter_indexed().next().map(|(i, _)| i), Some(15));
}

#[test]
fn map_rows_expose_nested_values() {
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};

    #[derive(Debug)]
    enum Cell {
        Text,
        List(usize),
    }

    impl NestedValue for Cell {
        fn nested_len(&self) -> Option<usize> {
            match self {
                Cell::Text => None,
                Cell::List(n) => Some(*n),
            }
        }
    }

    let rows: Vec<BTreeMap<String, Cell>> = (0..4)
        .map(|i| {
            let mut row = BTreeMap::new();
            row.insert("name".to_string(), Cell::Text);
            row.insert("items".to_string(), Cell::List(i));
            row
        })
        .collect();

    assert_eq!(expanded_counts(&rows, Some("items"), None), [0, 1, 2, 3]);
    assert_eq!(expanded_counts(&rows, Some("name"), None), [0; 4]);

    let config = WindowConfig::new(10)
        .with_child_row_height(Some(5))
        .with_expanded_key("items");
    let w = compute_window(&rows, &config, Viewport::new(0, 1000, 0)).unwrap();
    assert_eq!(w.bounds.total_height, 4 * 10 + 6 * 5);

    #[cfg(feature = "std")]
    {
        let mut map = std::collections::HashMap::new();
        map.insert("items".to_string(), Cell::List(2));
        assert_eq!(NestedRows::nested_len(&map, "items"), Some(2));
    }
}
