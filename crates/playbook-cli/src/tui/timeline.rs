//! Drag-to-scroll horizontal timeline.
//!
//! Pointer-down opens a drag session recording where the pointer and the
//! strip were; while the session lives, the strip offset is locked to the
//! pointer at `start_offset - (x - start_x) * sensitivity`. Pointer-up or
//! leaving the strip ends the session. No momentum.

use playbook_core::content::Milestone;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Columns one milestone card occupies on the strip, gap included.
const CARD_COLS: usize = 26;

#[derive(Debug, Clone, Copy)]
struct DragSession {
    start_x: u16,
    start_offset: usize,
}

pub struct TimelineView {
    milestones: Vec<Milestone>,
    offset: usize,
    drag: Option<DragSession>,
    sensitivity: u16,
    /// Width of the last rendered window, for clamping.
    viewport_cols: usize,
}

impl TimelineView {
    pub fn new(milestones: Vec<Milestone>, sensitivity: u16) -> Self {
        Self {
            milestones,
            offset: 0,
            drag: None,
            sensitivity: sensitivity.max(1),
            viewport_cols: 0,
        }
    }

    /// Full strip width in columns.
    pub fn strip_cols(&self) -> usize {
        self.milestones.len() * CARD_COLS
    }

    fn max_offset(&self) -> usize {
        self.strip_cols().saturating_sub(self.viewport_cols.max(1))
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Begin a drag session at pointer column `x`.
    pub fn mouse_down(&mut self, x: u16) {
        self.drag = Some(DragSession {
            start_x: x,
            start_offset: self.offset,
        });
    }

    /// Pointer moved to column `x`; a no-op without a live session.
    pub fn drag_to(&mut self, x: u16) {
        let Some(session) = self.drag else {
            return;
        };
        let walk = (i64::from(x) - i64::from(session.start_x)) * i64::from(self.sensitivity);
        let target = i64::try_from(session.start_offset).unwrap_or(i64::MAX) - walk;
        let max = i64::try_from(self.max_offset()).unwrap_or(i64::MAX);
        self.offset = usize::try_from(target.clamp(0, max)).unwrap_or(0);
    }

    /// End the session (pointer-up, or the pointer left the strip).
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Keyboard fallback: nudge the strip by `delta` columns.
    pub fn scroll_by(&mut self, delta: i64) {
        let max = i64::try_from(self.max_offset()).unwrap_or(i64::MAX);
        let cur = i64::try_from(self.offset).unwrap_or(0);
        self.offset = usize::try_from((cur + delta).clamp(0, max)).unwrap_or(0);
    }

    pub fn lines(&mut self, width: usize) -> Vec<Line<'static>> {
        self.viewport_cols = width.max(1);
        self.offset = self.offset.min(self.max_offset());

        let mut week_row = String::new();
        let mut title_row = String::new();
        let mut note_row = String::new();
        for m in &self.milestones {
            push_cell(&mut week_row, &format!("Week {} ", m.week), CARD_COLS, '─');
            push_cell(&mut title_row, &m.title, CARD_COLS, ' ');
            push_cell(&mut note_row, &m.note, CARD_COLS, ' ');
        }

        let cue_style = if self.dragging() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        vec![
            Line::from(Span::styled("◂ drag to scroll ▸", cue_style)),
            Line::from(Span::styled(
                window(&week_row, self.offset, width),
                Style::default().fg(Color::Green),
            )),
            Line::from(Span::styled(
                window(&title_row, self.offset, width),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                window(&note_row, self.offset, width),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ]
    }
}

/// Append `text` truncated/padded to `cols` columns, padding with `pad`.
fn push_cell(row: &mut String, text: &str, cols: usize, pad: char) {
    let mut used = 0;
    for ch in text.chars().take(cols.saturating_sub(2)) {
        row.push(ch);
        used += 1;
    }
    while used < cols {
        row.push(pad);
        used += 1;
    }
}

/// The visible slice of a strip row, by character columns.
fn window(row: &str, offset: usize, width: usize) -> String {
    row.chars().skip(offset).take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestones(n: u8) -> Vec<Milestone> {
        (1..=n)
            .map(|week| Milestone {
                week,
                title: format!("Milestone {week}"),
                note: format!("note {week}"),
            })
            .collect()
    }

    fn view() -> TimelineView {
        let mut t = TimelineView::new(milestones(8), 2);
        let _ = t.lines(40); // 8 * 26 = 208 strip cols, viewport 40
        t
    }

    #[test]
    fn drag_moves_offset_by_walk_times_sensitivity() {
        let mut t = view();
        t.scroll_by(60);
        assert_eq!(t.offset(), 60);

        t.mouse_down(30);
        t.drag_to(20); // pointer moved -10, strip moves +20
        t.end_drag();
        assert_eq!(t.offset(), 80);

        t.mouse_down(10);
        t.drag_to(25); // pointer moved +15, strip moves -30
        t.end_drag();
        assert_eq!(t.offset(), 50);
    }

    #[test]
    fn move_without_mouse_down_does_nothing() {
        let mut t = view();
        t.drag_to(35);
        assert_eq!(t.offset(), 0);
        assert!(!t.dragging());
    }

    #[test]
    fn offset_clamps_at_both_ends() {
        let mut t = view();
        t.mouse_down(100);
        t.drag_to(0); // +200 requested, max is 208 - 40 = 168
        assert_eq!(t.offset(), 168);

        t.drag_to(u16::MAX);
        assert_eq!(t.offset(), 0);
    }

    #[test]
    fn ending_drag_freezes_position() {
        let mut t = view();
        t.mouse_down(50);
        t.drag_to(40);
        assert_eq!(t.offset(), 20);
        t.end_drag();
        t.drag_to(0);
        assert_eq!(t.offset(), 20, "no session, no movement");
    }

    #[test]
    fn grabbing_cue_follows_session() {
        let mut t = view();
        assert!(!t.dragging());
        t.mouse_down(12);
        assert!(t.dragging());
        t.end_drag();
        assert!(!t.dragging());
    }

    #[test]
    fn sensitivity_one_tracks_pointer_exactly() {
        let mut t = TimelineView::new(milestones(8), 1);
        let _ = t.lines(40);
        t.scroll_by(30);
        t.mouse_down(25);
        t.drag_to(10);
        assert_eq!(t.offset(), 45);
    }

    #[test]
    fn window_slices_by_character_columns() {
        assert_eq!(window("abcdefgh", 2, 3), "cde");
        assert_eq!(window("abc", 5, 3), "");
    }
}
