//! Resource library filter.
//!
//! Category buttons select which content panel shows. A category without
//! content falls back to the prompt panel, and the shared icon badge always
//! tracks the selected button. Exactly one panel is visible at any time.

use std::ops::Range;

use playbook_core::content::ResourceCategory;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::wrap_text;

const DEFAULT_ICON: &str = "✦";
const PROMPT: &str = "Pick a category above to see what's inside.";

/// The one panel currently visible.
#[derive(Debug, PartialEq, Eq)]
pub enum Panel<'a> {
    Category(&'a ResourceCategory),
    Prompt,
}

pub struct LibraryView {
    categories: Vec<ResourceCategory>,
    active_id: Option<String>,
    button_spans: Vec<(Range<usize>, String)>,
}

impl LibraryView {
    pub fn new(categories: Vec<ResourceCategory>) -> Self {
        Self {
            categories,
            active_id: None,
            button_spans: Vec::new(),
        }
    }

    /// Select a category button; unknown ids are a no-op.
    pub fn select(&mut self, id: &str) {
        if self.categories.iter().any(|c| c.id == id) {
            self.active_id = Some(id.to_string());
        }
    }

    /// Cycle to the next category (keyboard path).
    pub fn select_next(&mut self) {
        if self.categories.is_empty() {
            return;
        }
        let next = match self.active_idx() {
            Some(i) => (i + 1) % self.categories.len(),
            None => 0,
        };
        self.active_id = Some(self.categories[next].id.clone());
    }

    fn active_idx(&self) -> Option<usize> {
        let id = self.active_id.as_deref()?;
        self.categories.iter().position(|c| c.id == id)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// The single visible panel: the selected category's content, or the
    /// prompt when nothing is selected or the category has none.
    pub fn panel(&self) -> Panel<'_> {
        match self.active_idx() {
            Some(i) if !self.categories[i].blurb.is_empty() => Panel::Category(&self.categories[i]),
            _ => Panel::Prompt,
        }
    }

    /// Icon shown on the shared badge.
    pub fn icon(&self) -> &str {
        self.active_idx()
            .map_or(DEFAULT_ICON, |i| self.categories[i].icon.as_str())
    }

    /// Handle a click at widget-local coordinates; row 0 is the button bar.
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
            self.select(&id);
        }
    }

    pub fn lines(&mut self, width: usize) -> Vec<Line<'static>> {
        let mut out = Vec::new();
        self.button_spans.clear();

        let mut bar = Vec::new();
        let mut col = 0usize;
        for (idx, cat) in self.categories.iter().enumerate() {
            if idx > 0 {
                bar.push(Span::raw("  "));
                col += 2;
            }
            let active = self.active_id.as_deref() == Some(cat.id.as_str());
            let label = format!("[{} {}]", cat.icon, cat.title);
            let style = if active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Magenta)
            };
            let chars = label.chars().count();
            self.button_spans.push((col..col + chars, cat.id.clone()));
            bar.push(Span::styled(label, style));
            col += chars;
        }
        out.push(Line::from(bar));
        out.push(Line::from(""));

        // Shared icon badge plus the one visible panel.
        let badge = format!("  {}  ", self.icon());
        match self.panel() {
            Panel::Category(cat) => {
                out.push(Line::from(vec![
                    Span::styled(
                        badge,
                        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        cat.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]));
                for row in wrap_text(&cat.blurb, width.saturating_sub(2)) {
                    out.push(Line::from(format!("  {row}")));
                }
            }
            Panel::Prompt => {
                out.push(Line::from(vec![
                    Span::styled(badge, Style::default().fg(Color::DarkGray)),
                    Span::styled(PROMPT, Style::default().fg(Color::DarkGray)),
                ]));
            }
        }
        out.push(Line::from(""));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<ResourceCategory> {
        vec![
            ResourceCategory {
                id: "templates".into(),
                icon: "▣".into(),
                title: "Templates".into(),
                blurb: "Fill-in documents.".into(),
            },
            ResourceCategory {
                id: "videos".into(),
                icon: "▶".into(),
                title: "Videos".into(),
                blurb: String::new(),
            },
        ]
    }

    #[test]
    fn starts_on_prompt_panel() {
        let lib = LibraryView::new(categories());
        assert_eq!(lib.panel(), Panel::Prompt);
        assert_eq!(lib.icon(), DEFAULT_ICON);
    }

    #[test]
    fn selecting_a_category_shows_its_panel_and_icon() {
        let mut lib = LibraryView::new(categories());
        lib.select("templates");
        assert!(matches!(lib.panel(), Panel::Category(c) if c.id == "templates"));
        assert_eq!(lib.icon(), "▣");
    }

    #[test]
    fn category_without_content_falls_back_to_prompt() {
        let mut lib = LibraryView::new(categories());
        lib.select("videos");
        assert_eq!(lib.panel(), Panel::Prompt, "no blurb means prompt panel");
        assert_eq!(lib.icon(), "▶", "icon still follows the clicked button");
        assert_eq!(lib.active_id(), Some("videos"));
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut lib = LibraryView::new(categories());
        lib.select("templates");
        lib.select("podcasts");
        assert_eq!(lib.active_id(), Some("templates"));
    }

    #[test]
    fn click_on_button_bar_selects() {
        let mut lib = LibraryView::new(categories());
        let _ = lib.lines(60);
        let (range, id) = lib.button_spans[1].clone();
        lib.click(0, range.start + 1);
        assert_eq!(lib.active_id(), Some(id.as_str()));
    }

    #[test]
    fn click_between_buttons_is_a_no_op() {
        let mut lib = LibraryView::new(categories());
        let _ = lib.lines(60);
        let gap = lib.button_spans[0].0.end; // the separator column
        lib.click(0, gap);
        assert_eq!(lib.active_id(), None);
    }

    #[test]
    fn select_next_cycles_through_categories() {
        let mut lib = LibraryView::new(categories());
        lib.select_next();
        assert_eq!(lib.active_id(), Some("templates"));
        lib.select_next();
        assert_eq!(lib.active_id(), Some("videos"));
        lib.select_next();
        assert_eq!(lib.active_id(), Some("templates"));
    }
}
