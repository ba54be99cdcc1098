//! Read-only navigation over a loaded component graph.
//!
//! [`ComponentGraph`] is the whole query surface the resolver depends on.
//! The graph store owns every component; callers only ever hold UIDs or
//! borrowed references into it.
//!
//! # Example
//!
//! ```
//! use dal_model::{Component, ComponentGraph, InMemoryGraph, SessionConfig, SetLogic};
//!
//! let mut session = SessionConfig::new("session");
//! session.applications.push("app".into());
//!
//! let graph = InMemoryGraph::builder()
//!     .session(session)
//!     .component(Component::daq_application("app", ["module"]))
//!     .component(Component::module("module"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.contained(&"app".into()).len(), 1);
//! ```

use std::collections::{BTreeMap, HashSet};

use crate::config::ResolverSettings;
use crate::error::{Error, Result};
use crate::{Component, ComponentKind, SessionConfig, SetLogic, Uid};

/// Typed, read-only queries over a component graph.
pub trait ComponentGraph {
    /// Look up a component by UID.
    fn component(&self, uid: &Uid) -> Option<&Component>;

    /// Look up a session by UID.
    fn session(&self, uid: &Uid) -> Option<&SessionConfig>;

    /// Limits to apply when walking this graph.
    fn settings(&self) -> ResolverSettings {
        ResolverSettings::default()
    }

    fn kind(&self, uid: &Uid) -> Option<ComponentKind> {
        self.component(uid).map(Component::kind)
    }

    /// Top-level segments of a session; empty for an unknown session.
    fn session_segments(&self, session: &Uid) -> &[Uid] {
        self.session(session)
            .map(|s| s.segments.as_slice())
            .unwrap_or_default()
    }

    /// Top-level applications of a session.
    fn session_applications(&self, session: &Uid) -> &[Uid] {
        self.session(session)
            .map(|s| s.applications.as_slice())
            .unwrap_or_default()
    }

    /// Components disabled by the session configuration itself.
    fn session_disabled(&self, session: &Uid) -> &[Uid] {
        self.session(session)
            .map(|s| s.disabled.as_slice())
            .unwrap_or_default()
    }

    /// Resource-set containment edges of `uid`; empty for anything that is
    /// not resource-set-like.
    fn contained(&self, uid: &Uid) -> &[Uid] {
        self.component(uid)
            .and_then(Component::as_resource_set)
            .map(|view| view.contains)
            .unwrap_or_default()
    }
}

/// Receiver of configuration lifecycle callbacks.
///
/// Whoever owns the store subscription forwards these to every session
/// built on the store.
pub trait ConfigObserver {
    /// A configuration was loaded.
    fn on_load(&mut self);

    /// The configuration was unloaded.
    fn on_unload(&mut self);

    /// An attribute or relationship of `changed` was modified.
    fn on_update(&mut self, changed: &Uid, attribute: &str);
}

/// Component graph held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGraph {
    components: BTreeMap<Uid, Component>,
    sessions: BTreeMap<Uid, SessionConfig>,
    settings: ResolverSettings,
}

impl InMemoryGraph {
    pub fn builder() -> InMemoryGraphBuilder {
        InMemoryGraphBuilder::default()
    }

    /// Build a graph, validating identity and references.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateUid`] if two objects share a UID
    /// - [`Error::DanglingReference`] if a session or component points at an
    ///   undefined component
    pub fn from_parts(
        settings: ResolverSettings,
        sessions: Vec<SessionConfig>,
        components: Vec<Component>,
    ) -> Result<Self> {
        let mut graph = Self {
            settings,
            ..Self::default()
        };
        let mut seen: HashSet<Uid> = HashSet::new();

        for component in components {
            if !seen.insert(component.uid().clone()) {
                return Err(Error::DuplicateUid {
                    uid: component.uid().clone(),
                });
            }
            if component
                .as_resource_set()
                .is_some_and(|view| view.logic == SetLogic::And && view.contains.is_empty())
            {
                tracing::warn!(
                    uid = %component.uid(),
                    "resource-set-AND has no children and is never disabled automatically"
                );
            }
            graph.components.insert(component.uid().clone(), component);
        }
        for session in sessions {
            if !seen.insert(session.uid.clone()) {
                return Err(Error::DuplicateUid {
                    uid: session.uid.clone(),
                });
            }
            graph.sessions.insert(session.uid.clone(), session);
        }

        graph.validate_references()?;
        tracing::debug!(
            components = graph.components.len(),
            sessions = graph.sessions.len(),
            "Loaded component graph"
        );
        Ok(graph)
    }

    fn validate_references(&self) -> Result<()> {
        for component in self.components.values() {
            for child in component.children() {
                self.require(component.uid(), child)?;
            }
        }
        for session in self.sessions.values() {
            for uid in session.references() {
                self.require(&session.uid, uid)?;
            }
        }
        Ok(())
    }

    fn require(&self, from: &Uid, to: &Uid) -> Result<()> {
        if self.components.contains_key(to) {
            Ok(())
        } else {
            Err(Error::DanglingReference {
                from: from.clone(),
                to: to.clone(),
            })
        }
    }

    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    pub fn sessions(&self) -> impl Iterator<Item = &SessionConfig> {
        self.sessions.values()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl ComponentGraph for InMemoryGraph {
    fn component(&self, uid: &Uid) -> Option<&Component> {
        self.components.get(uid)
    }

    fn session(&self, uid: &Uid) -> Option<&SessionConfig> {
        self.sessions.get(uid)
    }

    fn settings(&self) -> ResolverSettings {
        self.settings
    }
}

/// Incremental constructor for [`InMemoryGraph`].
#[derive(Debug, Default)]
pub struct InMemoryGraphBuilder {
    settings: ResolverSettings,
    sessions: Vec<SessionConfig>,
    components: Vec<Component>,
}

impl InMemoryGraphBuilder {
    pub fn settings(mut self, settings: ResolverSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn session(mut self, session: SessionConfig) -> Self {
        self.sessions.push(session);
        self
    }

    pub fn component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    pub fn components(mut self, components: impl IntoIterator<Item = Component>) -> Self {
        self.components.extend(components);
        self
    }

    pub fn build(self) -> Result<InMemoryGraph> {
        InMemoryGraph::from_parts(self.settings, self.sessions, self.components)
    }
}
