//! Graph and session loading shared by every command

use std::path::Path;

use dal_core::Session;
use dal_model::{ComponentGraph, GraphStore, InMemoryGraph, ResolverSettings, Uid};

use crate::error::{CliError, Result};

/// Command-line overrides of the graph's resolver settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsOverride {
    pub max_iterations: Option<usize>,
    pub fuse_depth: Option<usize>,
}

impl SettingsOverride {
    pub fn apply(self, mut settings: ResolverSettings) -> ResolverSettings {
        if let Some(limit) = self.max_iterations {
            settings = settings.with_max_iterations(limit);
        }
        if let Some(depth) = self.fuse_depth {
            settings = settings.with_fuse_depth(depth);
        }
        settings
    }
}

/// A loaded graph together with a session handle over it.
pub struct GraphContext {
    pub graph: InMemoryGraph,
    pub session: Session,
}

impl GraphContext {
    /// Load `path` and open `session` in it.
    ///
    /// Fails with a user error when the session is not defined in the file.
    pub fn load(path: &Path, session: &str, overrides: SettingsOverride) -> Result<Self> {
        let graph = GraphStore::new().load(path)?;
        let uid = Uid::from(session);

        if graph.session(&uid).is_none() {
            return Err(CliError::user(format!(
                "Session '{session}' is not defined in {}",
                path.display()
            )));
        }

        let settings = overrides.apply(graph.settings());
        tracing::debug!(
            session = %uid,
            fuse_depth = settings.fuse_depth,
            max_iterations = settings.max_iterations,
            "Loaded graph with {} components",
            graph.len()
        );

        Ok(Self {
            session: Session::new(uid).with_settings(settings),
            graph,
        })
    }
}
