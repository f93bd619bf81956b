//! Error and outcome types for the simulation engine
//!
//! Two separate things live here:
//!
//! - [`SimError`]: a request the engine refuses (starting a second run, an
//!   unknown operation name, a failed snippet export). These are ordinary
//!   `Result` errors.
//! - [`Outcome`] / [`AbortReason`]: how an operation run ended. An aborted run
//!   is not an error; it is reported through the outcome and the narration and
//!   never propagates to the UI.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Requests the engine refuses
#[derive(Debug, Error)]
pub enum SimError {
    #[error("a run is already in progress")]
    RunInProgress,

    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("unknown language '{0}'")]
    UnknownLanguage(String),

    #[error("no {language} snippet for {operation}")]
    MissingSnippet {
        operation: &'static str,
        language: &'static str,
    },

    #[error("failed to write snippet to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a run stopped before completing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// Stopped at a suspension point by reset, regenerate, a new selection or an external cancel
    Cancelled,
    /// Missing or non-numeric input
    InvalidParameter,
    /// Insert position past the end of the list
    OutOfBounds,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Aborted(AbortReason),
}

impl Outcome {
    /// `true` when the operation ran to normal completion
    pub fn is_completed(self) -> bool {
        matches!(self, Outcome::Completed)
    }
}
