//! `pb tasks` — list checklist tasks with completion state.

use anyhow::Result;
use playbook_core::content::Playbook;
use playbook_core::progress::ProgressStore;
use serde::Serialize;

use crate::output::{self, OutputMode};

#[derive(Debug, Serialize)]
pub struct TaskRow {
    pub id: String,
    pub label: String,
    pub done: bool,
}

#[must_use]
pub fn task_rows(playbook: &Playbook, store: &ProgressStore) -> Vec<TaskRow> {
    let checked = store.load();
    playbook
        .tasks
        .iter()
        .map(|task| TaskRow {
            id: task.id.clone(),
            label: task.label.clone(),
            done: checked.contains(&task.id),
        })
        .collect()
}

pub fn run_tasks(playbook: &Playbook, store: &ProgressStore, output: OutputMode) -> Result<()> {
    let rows = task_rows(playbook, store);
    let done = rows.iter().filter(|r| r.done).count();

    output::render_list(output, &rows, |row, w| {
        let mark = if row.done { "x" } else { " " };
        writeln!(w, "[{mark}] {:<18} {}", row.id, row.label)
    })?;

    if output == OutputMode::Human {
        println!("\n{done}/{} done", rows.len());
    }
    Ok(())
}
