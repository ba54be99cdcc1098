//! Error types for dal-model

use std::path::PathBuf;

use crate::Uid;

/// Result type for dal-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or validating a component graph
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} graph at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported graph format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Two objects (components or sessions) share one UID.
    #[error("Duplicate UID '{uid}'")]
    DuplicateUid { uid: Uid },

    /// An object references a UID that is not defined in the graph.
    #[error("'{from}' references unknown object '{to}'")]
    DanglingReference { from: Uid, to: Uid },

    /// A component record carries fields that its kind does not own.
    #[error("Invalid component '{uid}': {reason}")]
    InvalidComponent { uid: Uid, reason: String },

    #[error("Unknown component kind: {kind}")]
    UnknownKind { kind: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(uid: &Uid, reason: impl Into<String>) -> Self {
        Self::InvalidComponent {
            uid: uid.clone(),
            reason: reason.into(),
        }
    }
}
