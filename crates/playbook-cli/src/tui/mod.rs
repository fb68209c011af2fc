//! Terminal user interface for the playbook reader.
//!
//! One view struct per widget, each owning its own state and input handling:
//!
//! - [`page::PageView`] — scroll offset, progress percentage, jump-to-top.
//! - [`checklist::ChecklistSidebar`] — persisted checklist overlay.
//! - [`faq::FaqView`] — accordion.
//! - [`process::ProcessTabs`] — tab group.
//! - [`timeline::TimelineView`] — drag-to-scroll strip.
//! - [`tips::TipBanner`] — rotating tip line.
//! - [`library::LibraryView`] — resource category filter.
//!
//! The [`App`] assembles the widgets into one scrollable document and routes
//! events to whichever widget owns the hit region. Widgets stay independent:
//! none reads another's state, and a widget with no content contributes no
//! rows and receives no events.

pub mod checklist;
pub mod faq;
pub mod library;
pub mod page;
pub mod process;
pub mod timeline;
pub mod tips;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use playbook_core::config::Behavior;
use playbook_core::content::Playbook;
use playbook_core::progress::ProgressStore;
use playbook_core::scroll::{self, SectionSpan, offset_for_section};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, LineGauge, Paragraph};

use checklist::ChecklistSidebar;
use faq::FaqView;
use library::LibraryView;
use page::PageView;
use process::ProcessTabs;
use timeline::TimelineView;
use tips::TipBanner;

/// Greedy word wrap; long words are hard-split at the width.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut line = String::new();
    let mut cols = 0usize;

    for word in text.split_whitespace() {
        let wlen = word.chars().count();
        if cols > 0 && cols + 1 + wlen > width {
            out.push(std::mem::take(&mut line));
            cols = 0;
        }
        if cols > 0 {
            line.push(' ');
            cols += 1;
        }
        if wlen > width {
            for ch in word.chars() {
                if cols >= width {
                    out.push(std::mem::take(&mut line));
                    cols = 0;
                }
                line.push(ch);
                cols += 1;
            }
        } else {
            line.push_str(word);
            cols += wlen;
        }
    }
    if !line.is_empty() {
        out.push(line);
    }
    out
}

/// Document row range one widget occupies, in `(start, rows)` form.
type BlockSpan = Option<(usize, usize)>;

fn in_block(block: BlockSpan, doc_row: usize) -> Option<usize> {
    let (start, rows) = block?;
    (doc_row >= start && doc_row < start + rows).then(|| doc_row - start)
}

/// Where the interactive widgets landed in the assembled document.
#[derive(Debug, Default, Clone, Copy)]
struct DocBlocks {
    tabs: BlockSpan,
    timeline: BlockSpan,
    faq: BlockSpan,
    library: BlockSpan,
}

pub struct App {
    playbook: Playbook,
    page: PageView,
    checklist: ChecklistSidebar,
    faq: FaqView,
    tabs: ProcessTabs,
    timeline: TimelineView,
    tips: TipBanner,
    library: LibraryView,
    /// Assembled document from the last layout pass.
    doc: Vec<Line<'static>>,
    spans: Vec<SectionSpan>,
    blocks: DocBlocks,
    active_section: Option<usize>,
    nav_area: Rect,
    main_area: Rect,
    body_area: Rect,
    jump_area: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(playbook: Playbook, behavior: &Behavior, store: ProgressStore) -> Self {
        let page = PageView::new(behavior.jump_top_threshold, behavior.scroll_step);
        let checklist = ChecklistSidebar::new(playbook.tasks.clone(), store);
        let faq = FaqView::new(playbook.faq.clone());
        let tabs = ProcessTabs::new(playbook.steps.clone());
        let timeline = TimelineView::new(playbook.milestones.clone(), behavior.drag_sensitivity);
        let tips = TipBanner::new(
            playbook.tips.clone(),
            Duration::from_millis(behavior.tip_interval_ms),
            Duration::from_millis(behavior.tip_fade_ms),
        );
        let library = LibraryView::new(playbook.resources.clone());

        Self {
            playbook,
            page,
            checklist,
            faq,
            tabs,
            timeline,
            tips,
            library,
            doc: Vec::new(),
            spans: Vec::new(),
            blocks: DocBlocks::default(),
            active_section: None,
            nav_area: Rect::default(),
            main_area: Rect::default(),
            body_area: Rect::default(),
            jump_area: Rect::default(),
            should_quit: false,
        }
    }

    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Rebuild the rendered document at the given width, recording section
    /// spans and widget block positions for hit-testing.
    fn build_document(&mut self, width: usize) {
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut spans = Vec::new();
        let mut blocks = DocBlocks::default();

        for sec in &self.playbook.sections {
            let start = lines.len();

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("▌ {}", sec.title.to_uppercase()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            for row in wrap_text(&sec.body, width.saturating_sub(2)) {
                lines.push(Line::from(format!("  {row}")));
            }
            lines.push(Line::from(""));

            // Sections host widgets by id; unknown ids are plain text.
            match sec.id.as_str() {
                "process" => {
                    let widget = self.tabs.lines(width);
                    blocks.tabs = Some((lines.len(), widget.len()));
                    lines.extend(widget);
                }
                "timeline" => {
                    let widget = self.timeline.lines(width);
                    blocks.timeline = Some((lines.len(), widget.len()));
                    lines.extend(widget);
                }
                "faq" => {
                    let widget = self.faq.lines(width);
                    blocks.faq = Some((lines.len(), widget.len()));
                    lines.extend(widget);
                }
                "resources" => {
                    let widget = self.library.lines(width);
                    blocks.library = Some((lines.len(), widget.len()));
                    lines.extend(widget);
                }
                _ => {}
            }

            spans.push(SectionSpan {
                start,
                rows: lines.len() - start,
            });
        }

        self.doc = lines;
        self.spans = spans;
        self.blocks = blocks;
    }

    pub fn render(&mut self, frame: &mut ratatui::Frame<'_>) {
        let area = frame.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);
        let (header, body, tip_row, status_row) = (rows[0], rows[1], rows[2], rows[3]);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(0)])
            .split(body);
        self.nav_area = cols[0];
        self.main_area = cols[1];
        self.body_area = body;

        self.build_document(self.main_area.width.saturating_sub(1) as usize);
        self.page
            .set_extent(self.doc.len(), self.main_area.height as usize);
        self.active_section = scroll::active_section(
            &self.spans,
            self.page.offset(),
            self.main_area.height as usize,
        );

        self.render_header(frame, header);
        self.render_nav(frame, self.nav_area);

        let doc = Paragraph::new(Text::from(self.doc.clone()))
            .scroll((u16::try_from(self.page.offset()).unwrap_or(u16::MAX), 0));
        frame.render_widget(doc, self.main_area);

        frame.render_widget(Paragraph::new(self.tips.line()), tip_row);
        self.render_status(frame, status_row);

        self.checklist.render(frame, self.body_area);
    }

    fn render_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(30)])
            .split(area);

        let title = Paragraph::new(Span::styled(
            format!(" {}", self.playbook.title),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, parts[0]);

        let gauge = LineGauge::default()
            .ratio(self.page.percent() / 100.0)
            .label(format!("{:>3.0}%", self.page.percent()))
            .filled_style(Style::default().fg(Color::Green))
            .unfilled_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(gauge, parts[1]);
    }

    fn render_nav(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" Sections ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows: Vec<Line<'_>> = self
            .playbook
            .sections
            .iter()
            .enumerate()
            .map(|(idx, sec)| {
                if self.active_section == Some(idx) {
                    Line::from(Span::styled(
                        format!("▸ {}", sec.title),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(format!("  {}", sec.title))
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(rows), inner);
    }

    fn render_status(&mut self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut spans = vec![
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit  "),
            Span::styled("j/k", Style::default().fg(Color::Yellow)),
            Span::raw(" scroll  "),
            Span::styled("c", Style::default().fg(Color::Yellow)),
            Span::raw(" checklist  "),
            Span::styled("1-9", Style::default().fg(Color::Yellow)),
            Span::raw(" tabs  "),
            Span::raw(format!(
                "☑ {}/{}",
                self.checklist.done_count(),
                self.checklist.task_count()
            )),
        ];

        if self.page.jump_top_visible() {
            let width = 12u16.min(area.width);
            self.jump_area = Rect {
                x: area.right().saturating_sub(width),
                y: area.y,
                width,
                height: 1,
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                "↑ top (t)",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            self.jump_area = Rect::default();
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        // While the sidebar is open the page is scroll-locked and keys go
        // to the checklist.
        if self.checklist.is_open() {
            self.checklist.handle_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.page.scroll_step(1),
            KeyCode::Char('k') | KeyCode::Up => self.page.scroll_step(-1),
            KeyCode::PageDown => self.page.page_by(1),
            KeyCode::PageUp => self.page.page_by(-1),
            KeyCode::Char('g') | KeyCode::Home => self.page.jump_top(),
            KeyCode::Char('G') | KeyCode::End => self.page.jump_to(usize::MAX),
            KeyCode::Char('t') => {
                if self.page.jump_top_visible() {
                    self.page.jump_top();
                }
            }
            KeyCode::Char('c') => self.checklist.toggle_open(),
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (c as usize) - ('1' as usize);
                self.tabs.activate_index(idx);
            }
            KeyCode::Char('n') => self.faq.select_next(),
            KeyCode::Char('p') => self.faq.select_prev(),
            KeyCode::Enter => self.faq.toggle_selected(),
            KeyCode::Char('h') | KeyCode::Left => self.timeline.scroll_by(-8),
            KeyCode::Char('l') | KeyCode::Right => self.timeline.scroll_by(8),
            KeyCode::Char('r') => self.library.select_next(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                if self.checklist.is_open() {
                    self.checklist.select_next();
                } else {
                    self.page.scroll_step(1);
                }
            }
            MouseEventKind::ScrollUp => {
                if self.checklist.is_open() {
                    self.checklist.select_prev();
                } else {
                    self.page.scroll_step(-1);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.timeline.dragging() {
                    if self.doc_row_at(mouse.row).and_then(|row| in_block(self.blocks.timeline, row)).is_some()
                        && self.main_area.contains((mouse.column, mouse.row).into())
                    {
                        self.timeline.drag_to(mouse.column);
                    } else {
                        // Pointer left the strip: the session ends where it was.
                        self.timeline.end_drag();
                    }
                }
            }
            MouseEventKind::Up(_) => self.timeline.end_drag(),
            _ => {}
        }
    }

    fn doc_row_at(&self, y: u16) -> Option<usize> {
        if y < self.main_area.y || y >= self.main_area.bottom() {
            return None;
        }
        Some(self.page.offset() + usize::from(y - self.main_area.y))
    }

    fn handle_click(&mut self, x: u16, y: u16) {
        // Overlay first: clicks inside toggle rows, clicks outside close it.
        if self.checklist.is_open() {
            if self.checklist.area().contains((x, y).into()) {
                self.checklist.click(x, y);
            } else {
                self.checklist.close();
            }
            return;
        }

        if self.jump_area.contains((x, y).into()) {
            self.page.jump_top();
            return;
        }

        if self.nav_area.contains((x, y).into()) {
            // Only rows inside the border respond; the frame itself is inert.
            let top = self.nav_area.y.saturating_add(1);
            if y < top || y.saturating_add(1) >= self.nav_area.bottom() {
                return;
            }
            let row = usize::from(y - top);
            if let Some(span) = self.spans.get(row).copied() {
                self.page.jump_to(offset_for_section(span, self.page.metrics()));
            }
            return;
        }

        if !self.main_area.contains((x, y).into()) {
            return;
        }
        let Some(doc_row) = self.doc_row_at(y) else {
            return;
        };
        let col = usize::from(x.saturating_sub(self.main_area.x));

        if in_block(self.blocks.timeline, doc_row).is_some() {
            self.timeline.mouse_down(x);
        } else if let Some(local) = in_block(self.blocks.faq, doc_row) {
            self.faq.click(local);
        } else if let Some(local) = in_block(self.blocks.tabs, doc_row) {
            self.tabs.click(local, col);
        } else if let Some(local) = in_block(self.blocks.library, doc_row) {
            self.library.click(local, col);
        }
    }

    pub fn tick(&mut self) {
        self.tips.tick();
    }
}

/// Run the full-screen TUI until the user quits.
pub fn run_app(playbook: Playbook, behavior: &Behavior, store: ProgressStore) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alt screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let app = App::new(playbook, behavior, store);
    let result = run_loop(&mut terminal, app);

    disable_raw_mode().context("disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("leave alt screen")?;
    terminal.show_cursor().context("show cursor")?;
    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(100);
    loop {
        terminal.draw(|frame| app.render(frame)).context("draw")?;

        if event::poll(tick_rate).context("poll events")? {
            match event::read().context("read event")? {
                Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                // A resize lands on the next draw; extents are recomputed
                // there from the new frame size.
                _ => {}
            }
        }

        app.tick();
        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playbook_core::config::Behavior;
    use ratatui::backend::TestBackend;

    fn test_app(dir: &tempfile::TempDir) -> App {
        let store = ProgressStore::new(dir.path().join("progress.json"));
        App::new(Playbook::default(), &Behavior::default(), store)
    }

    fn draw(app: &mut App) {
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|frame| app.render(frame)).expect("draw");
    }

    #[test]
    fn wrap_text_respects_width() {
        let rows = wrap_text("one two three four five six seven", 10);
        assert!(rows.iter().all(|r| r.chars().count() <= 10));
        assert_eq!(rows.join(" "), "one two three four five six seven");
    }

    #[test]
    fn wrap_text_splits_overlong_words() {
        let rows = wrap_text("abcdefghijklmnop", 5);
        assert!(rows.iter().all(|r| r.chars().count() <= 5));
    }

    #[test]
    fn wrap_text_of_empty_string_is_empty() {
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn document_spans_cover_every_section() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = test_app(&dir);
        app.build_document(80);
        assert_eq!(app.spans.len(), app.playbook.sections.len());
        // Spans tile the document without gaps.
        let mut expected = 0;
        for span in &app.spans {
            assert_eq!(span.start, expected);
            expected = span.end();
        }
        assert_eq!(expected, app.doc.len());
    }

    #[test]
    fn widget_blocks_land_inside_their_sections() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = test_app(&dir);
        app.build_document(80);

        for (block, section_id) in [
            (app.blocks.tabs, "process"),
            (app.blocks.timeline, "timeline"),
            (app.blocks.faq, "faq"),
            (app.blocks.library, "resources"),
        ] {
            let (start, rows) = block.expect("block placed");
            let sec_idx = app
                .playbook
                .sections
                .iter()
                .position(|s| s.id == section_id)
                .expect("section exists");
            let span = app.spans[sec_idx];
            assert!(start >= span.start && start + rows <= span.end());
        }
    }

    #[test]
    fn render_smoke_test() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = test_app(&dir);
        draw(&mut app);
        assert!(app.page.metrics().content_rows > 0);
    }

    #[test]
    fn quit_key_sets_flag() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = test_app(&dir);
        app.handle_key(KeyEvent::from(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn sidebar_locks_page_scrolling() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = test_app(&dir);
        draw(&mut app);

        app.handle_key(KeyEvent::from(KeyCode::Char('j')));
        let scrolled = app.page.offset();
        assert!(scrolled > 0);

        app.handle_key(KeyEvent::from(KeyCode::Char('c')));
        assert!(app.checklist.is_open());
        app.handle_key(KeyEvent::from(KeyCode::Char('j')));
        assert_eq!(app.page.offset(), scrolled, "page did not move");

        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(!app.checklist.is_open());
    }

    #[test]
    fn digit_keys_switch_tabs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = test_app(&dir);
        app.handle_key(KeyEvent::from(KeyCode::Char('2')));
        assert_eq!(app.tabs.active_id(), Some("pilot"));
        // Out-of-range digit is a no-op.
        app.handle_key(KeyEvent::from(KeyCode::Char('9')));
        assert_eq!(app.tabs.active_id(), Some("pilot"));
    }

    #[test]
    fn nav_highlight_follows_scroll() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = test_app(&dir);
        draw(&mut app);

        // Put the third section at the top of the band; its link lights up.
        let span = app.spans[2];
        app.page.jump_to(offset_for_section(span, app.page.metrics()));
        draw(&mut app);
        assert_eq!(app.active_section, Some(2));

        // Scroll to the bottom; the last section must become active.
        app.handle_key(KeyEvent::from(KeyCode::End));
        draw(&mut app);
        assert_eq!(app.active_section, Some(app.playbook.sections.len() - 1));
    }

    #[test]
    fn nav_border_clicks_are_inert() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = test_app(&dir);
        draw(&mut app);

        app.handle_key(KeyEvent::from(KeyCode::End));
        draw(&mut app);
        let at_bottom = app.page.offset();
        assert!(at_bottom > 0);

        // Top and bottom border rows of the nav block do nothing.
        let x = app.nav_area.x + 2;
        for y in [app.nav_area.y, app.nav_area.bottom() - 1] {
            app.handle_mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: x,
                row: y,
                modifiers: crossterm::event::KeyModifiers::NONE,
            });
            assert_eq!(app.page.offset(), at_bottom, "border click did not jump");
        }

        // The first row inside the border still jumps to the first section.
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: app.nav_area.y + 1,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        assert_eq!(app.page.offset(), 0);
    }

    #[test]
    fn mouse_click_on_faq_header_toggles_entry() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = test_app(&dir);
        draw(&mut app);

        // Bring the FAQ block to the top of the viewport, then click its
        // first header row.
        let (faq_start, _) = app.blocks.faq.expect("faq block");
        app.page.jump_to(faq_start);
        draw(&mut app);

        // The jump may have clamped; compute where the header actually is.
        let y = app.main_area.y + u16::try_from(faq_start - app.page.offset()).expect("on screen");
        let x = app.main_area.x + 2;
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        assert!(app.faq.is_expanded(0));
    }

    #[test]
    fn timeline_drag_via_mouse_events() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = test_app(&dir);
        draw(&mut app);

        let (strip_start, _) = app.blocks.timeline.expect("timeline block");
        app.page.jump_to(strip_start);
        draw(&mut app);

        // A strip row, below the cue line.
        let y = app.main_area.y
            + u16::try_from(strip_start + 1 - app.page.offset()).expect("on screen");
        let x0 = app.main_area.x + 30;
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x0,
            row: y,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        assert!(app.timeline.dragging());

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: x0 - 10,
            row: y,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: x0 - 10,
            row: y,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        assert!(!app.timeline.dragging());
        assert_eq!(app.timeline.offset(), 20, "Δx * sensitivity");
    }
}
