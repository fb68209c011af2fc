//! Page scroll container.
//!
//! Keeps only the scroll offset; everything else (percentage, jump-to-top
//! visibility, active section) is derived per notification from
//! [`ScrollMetrics`] so a resize can never leave stale numbers behind.

use playbook_core::scroll::ScrollMetrics;

pub struct PageView {
    offset: usize,
    content_rows: usize,
    viewport_rows: usize,
    jump_threshold: usize,
    step: usize,
}

impl PageView {
    pub const fn new(jump_threshold: usize, step: usize) -> Self {
        Self {
            offset: 0,
            content_rows: 0,
            viewport_rows: 0,
            jump_threshold,
            step,
        }
    }

    /// Record the rendered document extent, clamping the offset into range.
    pub fn set_extent(&mut self, content_rows: usize, viewport_rows: usize) {
        self.content_rows = content_rows;
        self.viewport_rows = viewport_rows;
        self.offset = self.metrics().clamp_offset(self.offset);
    }

    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.offset, self.content_rows, self.viewport_rows)
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub fn percent(&self) -> f64 {
        self.metrics().percent()
    }

    /// Whether the jump-to-top control should be visible.
    pub const fn jump_top_visible(&self) -> bool {
        self.offset > self.jump_threshold
    }

    pub fn scroll_by(&mut self, delta: i64) {
        let cur = i64::try_from(self.offset).unwrap_or(0);
        let candidate = usize::try_from((cur + delta).max(0)).unwrap_or(0);
        self.offset = self.metrics().clamp_offset(candidate);
    }

    pub fn scroll_step(&mut self, direction: i64) {
        self.scroll_by(direction * i64::try_from(self.step).unwrap_or(1));
    }

    pub fn page_by(&mut self, direction: i64) {
        let page = i64::try_from(self.viewport_rows.max(1)).unwrap_or(1);
        self.scroll_by(direction * page);
    }

    pub fn jump_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to(&mut self, offset: usize) {
        self.offset = self.metrics().clamp_offset(offset);
    }
}
