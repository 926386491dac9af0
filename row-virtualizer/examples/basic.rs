// Example: window a large flat table and print the spacer layout.
use row_virtualizer::{NestedRows, RowVirtualizer, Viewport, WindowConfig};

struct Row(u32);

impl NestedRows for Row {
    fn nested_len(&self, _key: &str) -> Option<usize> {
        None
    }
}

fn main() -> Result<(), row_virtualizer::ConfigError> {
    let rows: Vec<Row> = (0..1_000_000).map(Row).collect();
    let mut v = RowVirtualizer::new(WindowConfig::new(32))?;

    let w = v.window(&rows, Viewport::new(123_456, 720, 0));
    println!("total_height={}", v.total_height());
    println!("range={:?}", w.bounds.range());
    println!("top_padding={} bottom_padding={}", w.top_padding(), w.bottom_padding());
    println!("first_visible={:?}", w.visible_rows.first().map(|r| r.0));
    Ok(())
}
