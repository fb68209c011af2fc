//! `pb view` — run the full-screen TUI.

use anyhow::Result;
use playbook_core::config::Behavior;
use playbook_core::content::Playbook;
use playbook_core::progress::ProgressStore;

use crate::tui;

pub fn run_view(playbook: Playbook, behavior: &Behavior, store: ProgressStore) -> Result<()> {
    tracing::debug!(
        sections = playbook.sections.len(),
        tasks = playbook.tasks.len(),
        "starting TUI"
    );
    tui::run_app(playbook, behavior, store)
}
