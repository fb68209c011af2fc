//! Rotating tip banner.
//!
//! Cycles through the playbook's tip strings on a fixed interval with a
//! brief faded phase around each text swap, driven entirely by `tick()`.

use std::time::{Duration, Instant};

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

#[derive(Debug, Clone, Copy)]
enum Phase {
    Visible { since: Instant },
    Fading { since: Instant },
}

pub struct TipBanner {
    tips: Vec<String>,
    index: usize,
    phase: Phase,
    interval: Duration,
    fade: Duration,
}

impl TipBanner {
    pub fn new(tips: Vec<String>, interval: Duration, fade: Duration) -> Self {
        Self {
            tips,
            index: 0,
            phase: Phase::Visible {
                since: Instant::now(),
            },
            interval,
            fade,
        }
    }

    /// Advance the rotation clock.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        // Nothing to rotate with zero or one tips; stay visible.
        if self.tips.len() < 2 {
            return;
        }
        match self.phase {
            Phase::Visible { since } => {
                if now.saturating_duration_since(since) >= self.interval {
                    self.phase = Phase::Fading { since: now };
                }
            }
            Phase::Fading { since } => {
                if now.saturating_duration_since(since) >= self.fade {
                    self.index = (self.index + 1) % self.tips.len();
                    self.phase = Phase::Visible { since: now };
                }
            }
        }
    }

    /// The tip currently shown, or `None` while faded out / no tips.
    pub fn current(&self) -> Option<&str> {
        if self.tips.is_empty() {
            return None;
        }
        match self.phase {
            Phase::Visible { .. } => self.tips.get(self.index).map(String::as_str),
            Phase::Fading { .. } => None,
        }
    }

    pub fn line(&self) -> Line<'static> {
        match self.current() {
            Some(tip) => Line::from(vec![
                Span::styled(
                    " TIP ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(tip.to_string(), Style::default().fg(Color::Yellow)),
            ]),
            None => Line::from(""),
        }
    }
}
