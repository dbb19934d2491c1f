//! Viewport over the message list.
//!
//! The list keeps one row pinned into view (`visible_index`). The renderer
//! derives the first drawn row from it and writes back the drawn window
//! (`scroll_offset` and the number of rows that fit), so manual scrolling
//! can step from the rows the user actually sees.

/// Rows moved by PageUp / PageDown.
pub const PAGE_SCROLL_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageListState {
    visible_index: Option<usize>,
    scroll_offset: usize,
    drawn_rows: usize,
}

impl MessageListState {
    /// Row that the viewport keeps on screen.
    pub fn visible_index(&self) -> Option<usize> {
        self.visible_index
    }

    /// First row drawn during the last frame.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Records the window drawn by the last frame: `drawn_rows` rows from `offset`.
    pub fn set_viewport(&mut self, offset: usize, drawn_rows: usize) {
        self.scroll_offset = offset;
        self.drawn_rows = drawn_rows;
    }

    /// Brings `index` into view. Rows below the viewport end up at its bottom edge.
    pub fn scroll_to_row(&mut self, index: usize) {
        self.visible_index = Some(index);
    }

    /// Pins the row `rows` above the top of the drawn window.
    pub fn scroll_up(&mut self, rows: usize, row_count: usize) {
        if row_count == 0 {
            return;
        }
        let first = self.first_drawn(row_count);
        self.visible_index = Some(first.saturating_sub(rows));
    }

    /// Pins the row `rows` below the bottom of the drawn window.
    pub fn scroll_down(&mut self, rows: usize, row_count: usize) {
        if row_count == 0 {
            return;
        }
        let last = self.last_drawn(row_count);
        self.visible_index = Some(last.saturating_add(rows).min(row_count - 1));
    }

    pub fn scroll_to_top(&mut self, row_count: usize) {
        if row_count > 0 {
            self.visible_index = Some(0);
        }
    }

    pub fn scroll_to_end(&mut self, row_count: usize) {
        if row_count > 0 {
            self.visible_index = Some(row_count - 1);
        }
    }

    fn first_drawn(&self, row_count: usize) -> usize {
        self.scroll_offset.min(row_count - 1)
    }

    // A row taller than the viewport still counts as drawn.
    fn last_drawn(&self, row_count: usize) -> usize {
        let rows = self.drawn_rows.max(1);
        self.scroll_offset.saturating_add(rows - 1).min(row_count - 1)
    }
}
