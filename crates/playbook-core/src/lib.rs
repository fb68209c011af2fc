//! playbook-core library.
//!
//! Everything the `pb` binary needs that is not terminal-specific: the
//! playbook content model, the `playbook.toml` loader, the persisted
//! checklist progress store, and the scroll/band math shared by the page
//! view and the navigation highlight.

pub mod config;
pub mod content;
pub mod error;
pub mod progress;
pub mod scroll;

pub use error::CoreError;
