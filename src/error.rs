//! Error types surfaced by the handlers.
//!
//! Both kinds end at the handler boundary as a 404; neither reaches the listener.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a telemetry snapshot from the power utility.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// The utility could not be started (missing binary, permissions).
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The utility ran but reported failure.
    #[error("`{program}` exited with {status}")]
    Exit {
        program: String,
        status: std::process::ExitStatus,
    },

    /// Standard output was not valid UTF-8 text.
    #[error("`{program}` produced unreadable output")]
    Decode { program: String },
}

/// A static file could not be read. Every I/O failure folds into this one kind.
#[derive(Debug, Error)]
#[error("file not found: {}", .path.display())]
pub struct NotFound {
    pub path: PathBuf,
}
