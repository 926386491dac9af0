// Example: a sortable table with expandable rows, driven by simulated scroll events.
use row_virtualizer::WindowConfig;
use row_virtualizer_table::{Row, TableController, TableModel, TableOptions, Value};

fn invoice(id: u32) -> Row {
    let lines: Vec<Row> = (0..id % 5)
        .map(|n| Row::from([("line".to_string(), Value::from(n))]))
        .collect();
    Row::from([
        ("id".to_string(), Value::from(id)),
        ("customer".to_string(), Value::from(format!("customer-{}", id % 17))),
        ("lines".to_string(), Value::from(lines)),
    ])
}

fn main() -> Result<(), row_virtualizer::ConfigError> {
    let options = TableOptions::new()
        .with_expanded_key("lines")
        .with_virtual_rows(true)
        .with_sort_by_client(["customer"])
        .with_window(WindowConfig::new(36).with_child_row_height(Some(28)));
    let mut table = TableModel::new((0..10_000).map(invoice).collect(), options)?;
    let mut controller = TableController::new(table.window_config())?;
    controller.on_resize(720, 180);

    for offset in [0u64, 5_000, 5_020, 90_000] {
        controller.on_scroll(offset);
        match controller.poll(table.rows()) {
            Some(bounds) => println!("scroll={offset}: render {:?}", bounds.range()),
            None => println!("scroll={offset}: unchanged"),
        }
    }

    table.toggle_row(140);
    table.on_sort_by("customer");
    controller.on_expansion_changed(Some(table.expanded_rows().clone()));
    controller.on_rows_changed();
    let w = controller.window(table.rows());
    println!(
        "after sort: total_height={} top={} bottom={} columns={:?}",
        w.bounds.total_height,
        w.top_padding(),
        w.bottom_padding(),
        table.cells()
    );
    Ok(())
}
