//! Sidebar checklist with persisted progress.
//!
//! The sidebar is an overlay over the page; while it is open, page scrolling
//! is suspended (the caller routes scroll input here instead). Every toggle
//! rewrites the whole persisted set through [`ProgressStore::save`]; a save
//! failure is logged and the session continues unpersisted.

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent};
use playbook_core::content::Task;
use playbook_core::progress::ProgressStore;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

pub struct ChecklistSidebar {
    tasks: Vec<Task>,
    checked: BTreeSet<String>,
    store: ProgressStore,
    open: bool,
    state: ListState,
    /// Sidebar geometry from the last render, for mouse hit-testing.
    area: Rect,
}

impl ChecklistSidebar {
    /// Load persisted progress and reconcile it against the known tasks:
    /// ids that no longer exist in the playbook are dropped.
    pub fn new(tasks: Vec<Task>, store: ProgressStore) -> Self {
        let known: BTreeSet<String> = tasks.iter().map(|t| t.id.clone()).collect();
        let checked: BTreeSet<String> = store
            .load()
            .into_iter()
            .filter(|id| known.contains(id))
            .collect();

        let mut state = ListState::default();
        if !tasks.is_empty() {
            state.select(Some(0));
        }

        Self {
            tasks,
            checked,
            store,
            open: false,
            state,
            area: Rect::default(),
        }
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Open the sidebar; already-open is fine.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the sidebar; already-closed is fine.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    pub fn done_count(&self) -> usize {
        self.checked.len()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub const fn area(&self) -> Rect {
        self.area
    }

    /// Flip one task and persist the whole set.
    pub fn toggle(&mut self, id: &str) {
        if !self.tasks.iter().any(|t| t.id == id) {
            return;
        }
        if !self.checked.remove(id) {
            self.checked.insert(id.to_string());
        }
        if let Err(err) = self.store.save(&self.checked) {
            tracing::warn!("progress not saved: {err}");
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self
            .state
            .selected()
            .and_then(|i| self.tasks.get(i))
            .map(|t| t.id.clone())
        {
            self.toggle(&id);
        }
    }

    pub fn select_next(&mut self) {
        let len = self.tasks.len();
        if len == 0 {
            return;
        }
        let i = self
            .state
            .selected()
            .map_or(0, |i| if i + 1 >= len { 0 } else { i + 1 });
        self.state.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        let len = self.tasks.len();
        if len == 0 {
            return;
        }
        let i = self
            .state
            .selected()
            .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
        self.state.select(Some(i));
    }

    /// Keys routed here while the sidebar is open.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Esc | KeyCode::Char('c') => self.close(),
            _ => {}
        }
    }

    /// A click inside the sidebar toggles the row under the cursor.
    pub fn click(&mut self, x: u16, y: u16) {
        if !self.area.contains((x, y).into()) {
            return;
        }
        let row = y.saturating_sub(self.area.y.saturating_add(2));
        // The list may be scrolled; map the screen row through the window
        // offset to the task it actually shows.
        let idx = usize::from(row) + self.state.offset();
        if idx < self.tasks.len() {
            self.state.select(Some(idx));
            self.toggle_selected();
        }
    }

    pub fn render(&mut self, frame: &mut Frame<'_>, page_area: Rect) {
        if !self.open {
            self.area = Rect::default();
            return;
        }

        let width = 44.min(page_area.width);
        let sidebar = Rect {
            x: page_area.right().saturating_sub(width),
            y: page_area.y,
            width,
            height: page_area.height,
        };
        self.area = sidebar;

        frame.render_widget(Clear, sidebar);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Checklist ")
            .title_bottom(" space toggle · esc close ");
        let inner = block.inner(sidebar);
        frame.render_widget(block, sidebar);

        let summary = Paragraph::new(format!(
            " {}/{} done",
            self.done_count(),
            self.task_count()
        ))
        .style(Style::default().fg(Color::Green));
        let summary_area = Rect { height: 1, ..inner };
        frame.render_widget(summary, summary_area);

        let list_area = Rect {
            y: inner.y.saturating_add(1),
            height: inner.height.saturating_sub(1),
            ..inner
        };
        let items: Vec<ListItem<'_>> = self
            .tasks
            .iter()
            .map(|task| {
                let done = self.checked.contains(&task.id);
                let mark = if done { "[x]" } else { "[ ]" };
                let style = if done {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{mark} "), Style::default().fg(Color::Green)),
                    Span::styled(task.label.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
            .highlight_symbol("› ");
        frame.render_stateful_widget(list, list_area, &mut self.state);
    }
}
