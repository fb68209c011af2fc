//! `pb check` / `pb uncheck` — mutate the persisted checklist.

use anyhow::{Context, Result};
use playbook_core::content::Playbook;
use playbook_core::progress::ProgressStore;

use crate::output::{self, OutputMode};

pub fn run_check(
    playbook: &Playbook,
    store: &ProgressStore,
    id: &str,
    output: OutputMode,
) -> Result<()> {
    playbook.require_task(id)?;
    let mut checked = store.load();
    checked.insert(id.to_string());
    store.save(&checked).context("save progress")?;
    output::render_success(output, &format!("checked {id}"))
}

pub fn run_uncheck(
    playbook: &Playbook,
    store: &ProgressStore,
    id: &str,
    output: OutputMode,
) -> Result<()> {
    playbook.require_task(id)?;
    let mut checked = store.load();
    checked.remove(id);
    store.save(&checked).context("save progress")?;
    output::render_success(output, &format!("unchecked {id}"))
}
