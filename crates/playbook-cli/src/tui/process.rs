//! Process tab group.
//!
//! Exactly one step is active at a time. Buttons and panels are associated
//! by the step's declared id, never by position, so reordering the steps in
//! `playbook.toml` cannot mis-wire a button to someone else's panel.

use std::ops::Range;

use playbook_core::content::ProcessStep;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::wrap_text;

pub struct ProcessTabs {
    steps: Vec<ProcessStep>,
    active_id: Option<String>,
    /// Column range of each button on the tab bar, rebuilt per `lines()`.
    button_spans: Vec<(Range<usize>, String)>,
}

impl ProcessTabs {
    pub fn new(steps: Vec<ProcessStep>) -> Self {
        let active_id = steps.first().map(|s| s.id.clone());
        Self {
            steps,
            active_id,
            button_spans: Vec::new(),
        }
    }

    /// Activate the step with the given id; unknown ids are a no-op.
    pub fn activate(&mut self, id: &str) {
        if self.steps.iter().any(|s| s.id == id) {
            self.active_id = Some(id.to_string());
        }
    }

    /// Activate by position on the bar (digit keys).
    pub fn activate_index(&mut self, idx: usize) {
        if let Some(step) = self.steps.get(idx) {
            self.active_id = Some(step.id.clone());
        }
    }

    pub fn active_step(&self) -> Option<&ProcessStep> {
        let id = self.active_id.as_deref()?;
        self.steps.iter().find(|s| s.id == id)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Handle a click at widget-local coordinates; only the tab bar row
    /// responds, anywhere else is a no-op.
    pub fn click(&mut self, local_row: usize, col: usize) {
        if local_row != 0 {
            return;
        }
        let hit = self
            .button_spans
            .iter()
            .find(|(range, _)| range.contains(&col))
            .map(|(_, id)| id.clone());
        if let Some(id) = hit {
            self.activate(&id);
        }
    }

    pub fn lines(&mut self, width: usize) -> Vec<Line<'static>> {
        let mut out = Vec::new();
        self.button_spans.clear();

        let mut bar = Vec::new();
        let mut col = 0usize;
        for (idx, step) in self.steps.iter().enumerate() {
            if idx > 0 {
                bar.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
                col += 1;
            }
            let label = format!(" {} ", step.title);
            let active = self.active_id.as_deref() == Some(step.id.as_str());
            let style = if active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            let chars = label.chars().count();
            self.button_spans
                .push((col..col + chars, step.id.clone()));
            bar.push(Span::styled(label, style));
            col += chars;
        }
        out.push(Line::from(bar));
        out.push(Line::from(""));

        if let Some(step) = self.active_step() {
            for row in wrap_text(&step.detail, width.saturating_sub(2)) {
                out.push(Line::from(format!("  {row}")));
            }
        }
        out.push(Line::from(""));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps() -> Vec<ProcessStep> {
        ["align", "pilot", "rollout"]
            .iter()
            .map(|id| ProcessStep {
                id: (*id).to_string(),
                title: id.to_uppercase(),
                detail: format!("details for {id}"),
            })
            .collect()
    }

    #[test]
    fn first_step_starts_active() {
        let tabs = ProcessTabs::new(steps());
        assert_eq!(tabs.active_id(), Some("align"));
    }

    #[test]
    fn exactly_one_active_after_any_click_sequence() {
        let mut tabs = ProcessTabs::new(steps());
        for id in ["pilot", "rollout", "pilot", "align", "align"] {
            tabs.activate(id);
            assert_eq!(tabs.active_id(), Some(id));
            assert_eq!(tabs.active_step().map(|s| s.id.as_str()), Some(id));
        }
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut tabs = ProcessTabs::new(steps());
        tabs.activate("embed");
        assert_eq!(tabs.active_id(), Some("align"));
    }

    #[test]
    fn reactivating_active_tab_keeps_it_active() {
        let mut tabs = ProcessTabs::new(steps());
        tabs.activate("pilot");
        tabs.activate("pilot");
        assert_eq!(tabs.active_id(), Some("pilot"));
    }

    #[test]
    fn association_is_by_id_not_index() {
        let mut reordered = steps();
        reordered.reverse();
        let mut tabs = ProcessTabs::new(reordered);
        tabs.activate("pilot");
        let step = tabs.active_step().expect("active step");
        assert_eq!(step.detail, "details for pilot");
    }

    #[test]
    fn click_on_bar_activates_button_under_cursor() {
        let mut tabs = ProcessTabs::new(steps());
        let _ = tabs.lines(60);
        let (range, id) = tabs.button_spans[2].clone();
        tabs.click(0, range.start);
        assert_eq!(tabs.active_id(), Some(id.as_str()));
    }

    #[test]
    fn click_off_bar_is_a_no_op() {
        let mut tabs = ProcessTabs::new(steps());
        let _ = tabs.lines(60);
        tabs.click(2, 1);
        assert_eq!(tabs.active_id(), Some("align"));
    }

    #[test]
    fn panel_shows_active_detail() {
        let mut tabs = ProcessTabs::new(steps());
        tabs.activate("rollout");
        let text: Vec<String> = tabs
            .lines(60)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.clone()).collect())
            .collect();
        assert!(text.iter().any(|row| row.contains("details for rollout")));
        assert!(!text.iter().any(|row| row.contains("details for align")));
    }
}
