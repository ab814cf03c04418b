// Editor error types

use crate::validation::ValidationError;
use std::fmt;

/// Remote operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOp {
    Load,
    Save,
    Remove,
}

impl fmt::Display for RemoteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteOp::Load => f.write_str("load"),
            RemoteOp::Save => f.write_str("save"),
            RemoteOp::Remove => f.write_str("remove"),
        }
    }
}

/// Why an action could not run against the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Precondition {
    #[error("no slide selected")]
    NoSelection,

    #[error("slide has not been saved yet")]
    NotPersisted,
}

/// Editor action errors
///
/// By the time one is returned the controller has already updated the
/// status line or shown the matching dialog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("slide markup too long: {length} characters (max {max})")]
    MarkupTooLong { length: usize, max: usize },

    #[error("{op} failed: {message}")]
    Remote { op: RemoteOp, message: String },

    #[error(transparent)]
    Precondition(#[from] Precondition),
}

impl EditorError {
    pub fn remote(op: RemoteOp, err: impl fmt::Display) -> Self {
        EditorError::Remote {
            op,
            message: err.to_string(),
        }
    }
}
