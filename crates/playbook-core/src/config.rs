//! `playbook.toml` loading.
//!
//! The file is optional: a missing file yields full defaults, a present file
//! replaces whichever lists and tunables it names. Parse errors are real
//! errors (the user wrote the file), read errors on an existing path too.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::content::{FaqEntry, Milestone, Playbook, ProcessStep, ResourceCategory, Section, Task};
use crate::error::CoreError;

/// Behavior tunables for the TUI widgets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Behavior {
    /// Scroll offset (rows) past which the jump-to-top control shows.
    #[serde(default = "default_jump_top_threshold")]
    pub jump_top_threshold: usize,
    /// Milliseconds between tip rotations.
    #[serde(default = "default_tip_interval_ms")]
    pub tip_interval_ms: u64,
    /// Milliseconds the tip banner stays faded around a text swap.
    #[serde(default = "default_tip_fade_ms")]
    pub tip_fade_ms: u64,
    /// Columns the timeline moves per column of pointer travel.
    #[serde(default = "default_drag_sensitivity")]
    pub drag_sensitivity: u16,
    /// Rows moved per scroll key / wheel notch.
    #[serde(default = "default_scroll_step")]
    pub scroll_step: usize,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            jump_top_threshold: default_jump_top_threshold(),
            tip_interval_ms: default_tip_interval_ms(),
            tip_fade_ms: default_tip_fade_ms(),
            drag_sensitivity: default_drag_sensitivity(),
            scroll_step: default_scroll_step(),
        }
    }
}

const fn default_jump_top_threshold() -> usize {
    300
}

const fn default_tip_interval_ms() -> u64 {
    5000
}

const fn default_tip_fade_ms() -> u64 {
    300
}

const fn default_drag_sensitivity() -> u16 {
    2
}

const fn default_scroll_step() -> usize {
    3
}

/// On-disk shape of `playbook.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaybookConfig {
    #[serde(default)]
    pub behavior: Behavior,
    /// Override for the progress store location.
    #[serde(default)]
    pub state_file: Option<PathBuf>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "section")]
    pub sections: Vec<Section>,
    #[serde(default, rename = "task")]
    pub tasks: Vec<Task>,
    #[serde(default, rename = "faq")]
    pub faq: Vec<FaqEntry>,
    #[serde(default, rename = "step")]
    pub steps: Vec<ProcessStep>,
    #[serde(default, rename = "milestone")]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default, rename = "resource")]
    pub resources: Vec<ResourceCategory>,
}

impl PlaybookConfig {
    /// Merge the config over the built-in default playbook.
    ///
    /// Each list replaces the default wholesale when non-empty; empty lists
    /// keep the shipped content.
    #[must_use]
    pub fn into_playbook(self) -> Playbook {
        let mut pb = Playbook::default();
        if let Some(title) = self.title {
            pb.title = title;
        }
        if !self.sections.is_empty() {
            pb.sections = self.sections;
        }
        if !self.tasks.is_empty() {
            pb.tasks = self.tasks;
        }
        if !self.faq.is_empty() {
            pb.faq = self.faq;
        }
        if !self.steps.is_empty() {
            pb.steps = self.steps;
        }
        if !self.milestones.is_empty() {
            pb.milestones = self.milestones;
        }
        if !self.tips.is_empty() {
            pb.tips = self.tips;
        }
        if !self.resources.is_empty() {
            pb.resources = self.resources;
        }
        pb
    }
}

/// Load `playbook.toml` from the given path, or the default config when the
/// file does not exist.
pub fn load_config(path: &Path) -> Result<PlaybookConfig, CoreError> {
    if !path.exists() {
        return Ok(PlaybookConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| CoreError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str::<PlaybookConfig>(&content).map_err(|source| CoreError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}
