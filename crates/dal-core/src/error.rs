//! Error types for dal-core

use dal_model::Uid;

/// Result type for dal-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised or reported by the resolver and the parent-path search
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A recursive graph walk nested deeper than the fuse allows.
    ///
    /// The configuration is malformed; retrying will not help.
    #[error(
        "Found circular dependency while computing {goal} (more than {limit} nested objects): {}",
        join_path(.path)
    )]
    CircularDependency {
        goal: String,
        limit: usize,
        path: Vec<Uid>,
    },

    /// The AND/OR auto-disabling loop did not converge.
    #[error(
        "Has exceeded the maximum of iterations allowed ({limit}) during calculation of disabled objects"
    )]
    IterationLimitExceeded { limit: usize },

    #[error("Cannot get parents of '{component}': {source}")]
    CannotGetParents {
        component: Uid,
        #[source]
        source: Box<Error>,
    },

    #[error("There is no session object with UID '{uid}'")]
    UnknownSession { uid: Uid },
}

fn join_path(path: &[Uid]) -> String {
    path.iter()
        .map(Uid::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
