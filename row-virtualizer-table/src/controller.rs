use crate::TableModel;

use row_virtualizer::{
    ExpansionSet, NestedRows, Result, RowVirtualizer, RowWindow, Viewport, WindowBounds,
    WindowConfig,
};

/// A framework-neutral controller that wraps a [`RowVirtualizer`] and the latest viewport sample.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` when the scroll container reports a new offset
/// - `on_resize` when the viewport or the content above the table changes size
/// - `on_rows_changed` / `on_expansion_changed` when the table data changes
///
/// and then `window(rows)` (or `poll(rows)`) to get the rows to render. Row and expansion changes
/// are folded into the prefix table before the next window query.
#[derive(Clone, Debug)]
pub struct TableController {
    v: RowVirtualizer,
    viewport: Viewport,
    last: Option<WindowBounds>,
    model_revision: Option<u64>,
}

impl TableController {
    pub fn new(config: WindowConfig) -> Result<Self> {
        Ok(Self::from_virtualizer(RowVirtualizer::new(config)?))
    }

    pub fn from_virtualizer(v: RowVirtualizer) -> Self {
        Self {
            v,
            viewport: Viewport::default(),
            last: None,
            model_revision: None,
        }
    }

    pub fn virtualizer(&self) -> &RowVirtualizer {
        &self.v
    }

    pub fn virtualizer_mut(&mut self) -> &mut RowVirtualizer {
        &mut self.v
    }

    pub fn into_virtualizer(self) -> RowVirtualizer {
        self.v
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The bounds returned by the last `window`/`poll` call.
    pub fn last_bounds(&self) -> Option<WindowBounds> {
        self.last
    }

    /// Call this when the UI reports a scroll offset change.
    pub fn on_scroll(&mut self, scroll_offset: u64) {
        vtrace!(scroll_offset, "TableController::on_scroll");
        self.viewport.scroll_offset = scroll_offset;
    }

    /// Call this when the viewport is resized. `container_top` must be re-measured at the same
    /// time: content above the table usually reflows with the viewport.
    pub fn on_resize(&mut self, viewport_height: u32, container_top: u64) {
        vtrace!(viewport_height, container_top, "TableController::on_resize");
        self.viewport.viewport_height = viewport_height;
        self.viewport.container_top = container_top;
    }

    /// Call this when the table body moved inside the scroll container without a viewport resize.
    pub fn on_container_top(&mut self, container_top: u64) {
        self.viewport.container_top = container_top;
    }

    /// Replaces the whole viewport sample.
    pub fn on_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Call this when rows were replaced or changed in place.
    pub fn on_rows_changed(&mut self) {
        self.v.invalidate();
    }

    pub fn on_expansion_changed(&mut self, expanded_rows: Option<ExpansionSet>) {
        self.v.set_expanded_rows(expanded_rows);
    }

    pub fn set_config(&mut self, config: WindowConfig) -> Result<()> {
        self.v.set_config(config)
    }

    /// Follows `model` when its rows or expansion set changed since the last call: the
    /// virtualizer takes the model's window configuration and its prefix table is marked stale.
    ///
    /// Returns `true` when the model had changed.
    pub fn sync_model(&mut self, model: &TableModel) -> Result<bool> {
        if self.model_revision == Some(model.revision()) {
            return Ok(false);
        }
        self.v.set_config(model.window_config())?;
        self.v.invalidate();
        self.model_revision = Some(model.revision());
        vtrace!(revision = model.revision(), "TableController::sync_model");
        Ok(true)
    }

    /// Computes the window for the current viewport sample.
    pub fn window<'a, R: NestedRows>(&mut self, rows: &'a [R]) -> RowWindow<'a, R> {
        let window = self.v.window(rows, self.viewport);
        self.last = Some(window.bounds);
        window
    }

    /// Like [`Self::window`], but returns the bounds only when they differ from the previous
    /// call, so the adapter can skip re-rendering.
    pub fn poll<R: NestedRows>(&mut self, rows: &[R]) -> Option<WindowBounds> {
        let prev = self.last;
        let bounds = self.window(rows).bounds;
        (prev != Some(bounds)).then_some(bounds)
    }
}
