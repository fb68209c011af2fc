//! `pb reset` — clear saved checklist progress.

use anyhow::{Context, Result};
use playbook_core::progress::ProgressStore;

use crate::output::{self, OutputMode};

pub fn run_reset(store: &ProgressStore, output: OutputMode) -> Result<()> {
    store.reset().context("remove progress state")?;
    output::render_success(output, "progress cleared")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn reset_clears_saved_progress() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ProgressStore::new(dir.path().join("progress.json"));
        store
            .save(&BTreeSet::from(["a".to_string()]))
            .expect("save");

        run_reset(&store, OutputMode::Human).expect("reset");
        assert!(store.load().is_empty());
    }
}
