//! The playbook content model.
//!
//! A [`Playbook`] is everything the page renders: ordered sections, the
//! checklist tasks, FAQ entries, process steps, timeline milestones, rotating
//! tips, and the resource library categories. A complete default playbook
//! (a change-management rollout guide) ships in code so `pb view` works with
//! zero setup; `playbook.toml` can replace any of the lists wholesale.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A nav-addressable page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// One checklist entry. `id` is the stable key used in the progress store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub label: String,
}

/// One accordion item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// One process tab: button title plus the panel it reveals, associated by
/// `id` rather than position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub id: String,
    pub title: String,
    pub detail: String,
}

/// One card on the horizontal timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub week: u8,
    pub title: String,
    #[serde(default)]
    pub note: String,
}

/// A resource library category button.
///
/// A category with an empty `blurb` has no content panel of its own; the
/// library falls back to the prompt panel when it is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCategory {
    pub id: String,
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub blurb: String,
}

/// The full page content.
#[derive(Debug, Clone)]
pub struct Playbook {
    pub title: String,
    pub sections: Vec<Section>,
    pub tasks: Vec<Task>,
    pub faq: Vec<FaqEntry>,
    pub steps: Vec<ProcessStep>,
    pub milestones: Vec<Milestone>,
    pub tips: Vec<String>,
    pub resources: Vec<ResourceCategory>,
}

impl Playbook {
    /// Look up a task by id.
    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Look up a task by id, listing the valid ids on a miss.
    pub fn require_task(&self, id: &str) -> Result<&Task, CoreError> {
        self.task(id).ok_or_else(|| CoreError::UnknownTask {
            id: id.to_string(),
            valid: self
                .tasks
                .iter()
                .map(|t| t.id.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

impl Default for Playbook {
    fn default() -> Self {
        Self {
            title: "The Change Rollout Playbook".to_string(),
            sections: default_sections(),
            tasks: default_tasks(),
            faq: default_faq(),
            steps: default_steps(),
            milestones: default_milestones(),
            tips: default_tips(),
            resources: default_resources(),
        }
    }
}

fn section(id: &str, title: &str, body: &str) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
    }
}

fn default_sections() -> Vec<Section> {
    vec![
        section(
            "overview",
            "Why Change Fails",
            "Most rollouts stall for people reasons, not technical ones. \
             Teams adopt what they understand and what their managers \
             visibly back. This playbook walks the full arc: build the case, \
             prove it with a pilot, roll out in waves, then make the new way \
             the default way.",
        ),
        section(
            "process",
            "The Process",
            "Four phases, each with a clear exit condition. Switch tabs to \
             see what done looks like for each phase.",
        ),
        section(
            "timeline",
            "Eight-Week Timeline",
            "A reference schedule for a mid-sized team. Drag the strip \
             sideways to see later weeks.",
        ),
        section(
            "faq",
            "Questions Teams Ask",
            "The objections that come up in every rollout, and the answers \
             that hold up.",
        ),
        section(
            "resources",
            "Resource Library",
            "Templates, guides, and tools to copy instead of writing from \
             scratch. Pick a category.",
        ),
    ]
}

fn task(id: &str, label: &str) -> Task {
    Task {
        id: id.to_string(),
        label: label.to_string(),
    }
}

fn default_tasks() -> Vec<Task> {
    vec![
        task("secure-sponsor", "Secure an executive sponsor"),
        task("map-stakeholders", "Map stakeholders and their stakes"),
        task("draft-narrative", "Draft the one-page change narrative"),
        task("pick-pilot", "Pick a pilot team that wants to go first"),
        task("train-champions", "Train manager champions"),
        task("schedule-comms", "Schedule the comms cadence"),
        task("collect-feedback", "Stand up a feedback channel"),
        task("celebrate-wins", "Publish early wins"),
    ]
}

fn default_faq() -> Vec<FaqEntry> {
    let qa = [
        (
            "What if leadership support is lukewarm?",
            "Pause. A rollout without a sponsor who will spend political \
             capital on it fails slowly and expensively. Get one committed \
             sponsor before anything else on the checklist.",
        ),
        (
            "How do we handle vocal skeptics?",
            "Recruit them. Skeptics who are heard early become your most \
             credible advocates later, and their objections are free QA on \
             your plan.",
        ),
        (
            "Is eight weeks realistic for a large org?",
            "Treat it as the schedule per wave, not for the whole org. Run \
             the same eight-week arc for each rollout wave and overlap them.",
        ),
        (
            "When can we call it done?",
            "When the old way is harder than the new way and nobody asks \
             for an exception for a full cycle.",
        ),
    ];
    qa.iter()
        .map(|(q, a)| FaqEntry {
            question: (*q).to_string(),
            answer: (*a).to_string(),
        })
        .collect()
}

fn step(id: &str, title: &str, detail: &str) -> ProcessStep {
    ProcessStep {
        id: id.to_string(),
        title: title.to_string(),
        detail: detail.to_string(),
    }
}

fn default_steps() -> Vec<ProcessStep> {
    vec![
        step(
            "align",
            "Align",
            "Agree on the problem before the solution. Exit condition: the \
             sponsor, the managers, and the pilot team can all state why the \
             change is happening in one sentence, and it is the same \
             sentence.",
        ),
        step(
            "pilot",
            "Pilot",
            "One team, two weeks, real work. Exit condition: the pilot team \
             would not go back, and you have before/after numbers to show.",
        ),
        step(
            "rollout",
            "Rollout",
            "Wave by wave, managers announce it to their own teams. Exit \
             condition: every team has a trained champion and the support \
             channel answers within a day.",
        ),
        step(
            "embed",
            "Embed",
            "Make the new way the path of least resistance: defaults, \
             templates, onboarding. Exit condition: a new hire never learns \
             the old way existed.",
        ),
    ]
}

fn milestone(week: u8, title: &str, note: &str) -> Milestone {
    Milestone {
        week,
        title: title.to_string(),
        note: note.to_string(),
    }
}

fn default_milestones() -> Vec<Milestone> {
    vec![
        milestone(1, "Sponsor signed", "Narrative drafted and approved"),
        milestone(2, "Stakeholder map", "Skeptics identified and invited"),
        milestone(3, "Pilot kickoff", "Baseline metrics captured"),
        milestone(4, "Pilot review", "Go/no-go with real numbers"),
        milestone(5, "Champions trained", "One per team, named publicly"),
        milestone(6, "Wave one", "First teams switch over"),
        milestone(7, "Wave two", "Feedback loop tightened"),
        milestone(8, "Retrospective", "Wins published, defaults flipped"),
    ]
}

fn default_tips() -> Vec<String> {
    vec![
        "Always start with the 'Why'.".to_string(),
        "Empower managers; they are your change champions.".to_string(),
        "Over-communicate: clarity prevents anxiety.".to_string(),
    ]
}

fn category(id: &str, icon: &str, title: &str, blurb: &str) -> ResourceCategory {
    ResourceCategory {
        id: id.to_string(),
        icon: icon.to_string(),
        title: title.to_string(),
        blurb: blurb.to_string(),
    }
}

fn default_resources() -> Vec<ResourceCategory> {
    vec![
        category(
            "templates",
            "▣",
            "Templates",
            "Change narrative one-pager, stakeholder map grid, and the \
             week-by-week comms calendar, ready to fill in.",
        ),
        category(
            "guides",
            "◆",
            "Guides",
            "Longer reads: running a pilot retro, coaching a reluctant \
             manager, and writing announcements people actually read.",
        ),
        // No blurb yet; selecting this one exercises the prompt fallback.
        category("videos", "▶", "Videos", ""),
        category(
            "tools",
            "⚙",
            "Tools",
            "Pulse-survey question bank and a scoring sheet for picking \
             your pilot team.",
        ),
    ]
}
