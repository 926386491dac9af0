/// A snapshot of the host's scroll geometry, sampled on scroll/resize notifications.
///
/// All values are in pixels. `container_top` is the offset of the table body's top edge inside
/// the scroll container (or document), so `scroll_offset - container_top` is how far the table
/// itself has been scrolled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub scroll_offset: u64,
    pub viewport_height: u32,
    pub container_top: u64,
}

impl Viewport {
    pub fn new(scroll_offset: u64, viewport_height: u32, container_top: u64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
            container_top,
        }
    }

    /// Scroll distance into the table, clamped at `0` while the table is still below the top of
    /// the viewport.
    pub fn relative_scroll(&self) -> u64 {
        self.scroll_offset.saturating_sub(self.container_top)
    }

    /// Relative offset of the viewport's bottom edge.
    pub fn relative_bottom(&self) -> u64 {
        self.relative_scroll()
            .saturating_add(self.viewport_height as u64)
    }

    pub fn with_scroll_offset(mut self, scroll_offset: u64) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_container_top(mut self, container_top: u64) -> Self {
        self.container_top = container_top;
        self
    }
}
