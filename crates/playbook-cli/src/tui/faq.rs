//! FAQ accordion.
//!
//! Each entry toggles independently; several can be open at once. An open
//! entry contributes its answer at natural height, i.e. the wrapped line
//! count at the current content width.

use playbook_core::content::FaqEntry;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::wrap_text;

pub struct FaqView {
    entries: Vec<FaqEntry>,
    expanded: Vec<bool>,
    selected: usize,
    /// Local row of each entry header, rebuilt on every `lines()` pass.
    header_rows: Vec<usize>,
}

impl FaqView {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        let expanded = vec![false; entries.len()];
        Self {
            entries,
            expanded,
            selected: 0,
            header_rows: Vec::new(),
        }
    }

    /// Toggle one entry; all others are untouched.
    pub fn toggle(&mut self, idx: usize) {
        if let Some(flag) = self.expanded.get_mut(idx) {
            *flag = !*flag;
        }
    }

    pub fn is_expanded(&self, idx: usize) -> bool {
        self.expanded.get(idx).copied().unwrap_or(false)
    }

    pub fn select_next(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected + 1 >= len {
            0
        } else {
            self.selected + 1
        };
    }

    pub fn select_prev(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
    }

    pub fn toggle_selected(&mut self) {
        self.toggle(self.selected);
    }

    /// Handle a click at a widget-local row; only header rows toggle.
    pub fn click(&mut self, local_row: usize) {
        if let Some(idx) = self.header_rows.iter().position(|&r| r == local_row) {
            self.selected = idx;
            self.toggle(idx);
        }
    }

    pub fn lines(&mut self, width: usize) -> Vec<Line<'static>> {
        let mut out = Vec::new();
        self.header_rows.clear();

        for (idx, entry) in self.entries.iter().enumerate() {
            self.header_rows.push(out.len());

            let open = self.expanded[idx];
            let marker = if open { "▾" } else { "▸" };
            let mut style = Style::default().fg(Color::Cyan);
            if open {
                style = style.add_modifier(Modifier::BOLD);
            }
            let pointer = if idx == self.selected { "›" } else { " " };
            out.push(Line::from(vec![
                Span::raw(pointer.to_string()),
                Span::styled(format!("{marker} {}", entry.question), style),
            ]));

            if open {
                for row in wrap_text(&entry.answer, width.saturating_sub(4)) {
                    out.push(Line::from(Span::styled(
                        format!("    {row}"),
                        Style::default().fg(Color::Gray),
                    )));
                }
            }
            out.push(Line::from(""));
        }
        out
    }
}
