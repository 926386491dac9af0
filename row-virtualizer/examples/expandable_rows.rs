// Example: expanded rows add their children's height to the prefix table.
use row_virtualizer::{ExpansionSet, NestedRows, RowVirtualizer, Viewport, WindowConfig};

struct Order {
    id: u32,
    lines: Vec<&'static str>,
}

impl NestedRows for Order {
    fn nested_len(&self, key: &str) -> Option<usize> {
        (key == "lines").then_some(self.lines.len())
    }
}

fn main() -> Result<(), row_virtualizer::ConfigError> {
    let orders: Vec<Order> = (0..500)
        .map(|id| Order {
            id,
            lines: vec!["item"; (id % 4) as usize],
        })
        .collect();

    let config = WindowConfig::default()
        .with_child_row_height(Some(24))
        .with_expanded_key("lines")
        .with_expanded_rows(Some(ExpansionSet::new()));
    let mut v = RowVirtualizer::new(config)?;
    let viewport = Viewport::new(2_000, 600, 80);

    let before = v.window(&orders, viewport).bounds;
    println!("collapsed: total={} range={:?}", before.total_height, before.range());

    for id in [3, 7, 11, 15] {
        v.toggle_expanded(id);
    }
    let w = v.window(&orders, viewport);
    println!("expanded:  total={} range={:?}", w.bounds.total_height, w.bounds.range());
    for (index, order) in w.iter_indexed().take(3) {
        println!("  row {index}: order #{} ({} lines)", order.id, order.lines.len());
    }
    Ok(())
}
