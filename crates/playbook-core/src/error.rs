use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by playbook-core.
///
/// Widget-facing reads (progress load, missing config file) never produce
/// these; they degrade to defaults instead. Only genuine write failures and
/// malformed user-supplied files reach the caller.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to read {path}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown task id `{id}` (valid ids: {valid})")]
    UnknownTask { id: String, valid: String },

    #[error("failed to write progress state to {path}")]
    WriteState {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no writable data directory available for progress state")]
    NoStateDir,
}
