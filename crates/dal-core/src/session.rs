//! Session handle: the public entry point of the resolver.
//!
//! A [`Session`] names a session object in a graph and owns its
//! [`DisabledState`]. The graph itself is passed to every query, so a
//! reloaded graph can be used with the same session after the owner of
//! the store subscription forwards the [`ConfigObserver`] callbacks.
//!
//! Queries take `&mut self` because the first one after an invalidation
//! rebuilds the cache. Callers sharing a session across threads must
//! serialize access (for example with one mutex per session).
//!
//! # Example
//!
//! ```
//! use dal_core::Session;
//! use dal_model::{Component, InMemoryGraph, SessionConfig, SetLogic, Uid};
//!
//! let mut config = SessionConfig::new("s");
//! config.applications.push("or".into());
//! config.disabled.push("a".into());
//!
//! let graph = InMemoryGraph::builder()
//!     .session(config)
//!     .component(Component::resource_set("or", SetLogic::Or, ["a", "b"]))
//!     .component(Component::resource("a"))
//!     .component(Component::resource("b"))
//!     .build()
//!     .unwrap();
//!
//! let mut session = Session::new("s");
//! assert!(session.is_disabled(&graph, &Uid::from("or")));
//! assert!(!session.is_disabled(&graph, &Uid::from("b")));
//!
//! session.set_enabled(["a"]);
//! assert!(!session.is_disabled(&graph, &Uid::from("or")));
//! ```

use std::collections::BTreeSet;

use dal_model::{ComponentGraph, ConfigObserver, ResolverSettings, Uid};

use crate::apps::all_applications;
use crate::error::Error;
use crate::parents::{ParentPath, ParentPathFinder};
use crate::report::Report;
use crate::resolver::DisabledStateResolver;
use crate::state::DisabledState;

#[derive(Debug, Clone)]
pub struct Session {
    uid: Uid,
    state: DisabledState,
    settings: Option<ResolverSettings>,
}

impl Session {
    pub fn new(uid: impl Into<Uid>) -> Self {
        let uid = uid.into();
        tracing::debug!(session = %uid, "Construct session disabled-state cache");
        Self {
            uid,
            state: DisabledState::default(),
            settings: None,
        }
    }

    /// Override the limits carried by the graph.
    pub fn with_settings(mut self, settings: ResolverSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    fn settings<G: ComponentGraph + ?Sized>(&self, graph: &G) -> ResolverSettings {
        self.settings.unwrap_or_else(|| graph.settings())
    }

    /// Whether `component` is disabled in this session.
    ///
    /// Reported problems (circular configuration, iteration cap) are logged
    /// and the best-effort answer is returned.
    pub fn is_disabled<G: ComponentGraph + ?Sized>(&mut self, graph: &G, component: &Uid) -> bool {
        self.check_disabled(graph, component).log_warnings()
    }

    /// Like [`Session::is_disabled`] but returns the reported problems.
    pub fn check_disabled<G: ComponentGraph + ?Sized>(
        &mut self,
        graph: &G,
        component: &Uid,
    ) -> Report<bool> {
        let report = self.ensure_computed(graph);
        let disabled = self.state.contains(component);
        tracing::debug!("disabled({component}) returns {disabled}");
        report.map(|()| disabled)
    }

    /// Build the disabled set unless it is cached or provably empty.
    fn ensure_computed<G: ComponentGraph + ?Sized>(&mut self, graph: &G) -> Report<()> {
        if self.state.computed().is_some() {
            return Report::clean(());
        }

        let Some(config) = graph.session(&self.uid) else {
            return Report::with_warning(
                (),
                Error::UnknownSession {
                    uid: self.uid.clone(),
                },
            );
        };

        if !DisabledStateResolver::<G>::has_candidates(config, self.state.overrides()) {
            tracing::debug!(session = %self.uid, "Session has no disabled components");
            return Report::clean(());
        }

        let report = DisabledStateResolver::new(graph)
            .with_settings(self.settings(graph))
            .resolve(config, self.state.overrides());

        report.map(|computed| {
            if let Some(disabled) = computed {
                tracing::debug!(
                    session = %self.uid,
                    disabled = disabled.len(),
                    "Computed disabled components"
                );
                self.state.store(disabled);
            }
        })
    }

    /// Replace the user-disabled overrides and invalidate the cache.
    pub fn set_disabled<I, U>(&mut self, components: I)
    where
        I: IntoIterator<Item = U>,
        U: Into<Uid>,
    {
        self.state.overrides_mut().replace_disabled(components);
        self.reset();
    }

    /// Replace the user-enabled overrides and invalidate the cache.
    pub fn set_enabled<I, U>(&mut self, components: I)
    where
        I: IntoIterator<Item = U>,
        U: Into<Uid>,
    {
        self.state.overrides_mut().replace_enabled(components);
        self.reset();
    }

    /// Drop the computed set; overrides are kept.
    pub fn reset(&mut self) {
        tracing::debug!(session = %self.uid, "reset disabled by explicit user call");
        self.state.reset();
    }

    /// Number of user-disabled plus user-enabled overrides.
    pub fn disabled_count(&self) -> usize {
        self.state.overrides().count()
    }

    pub fn user_disabled(&self) -> &BTreeSet<Uid> {
        self.state.overrides().user_disabled()
    }

    pub fn user_enabled(&self) -> &BTreeSet<Uid> {
        self.state.overrides().user_enabled()
    }

    /// Whether the disabled set is currently cached.
    pub fn is_computed(&self) -> bool {
        self.state.computed().is_some()
    }

    /// Every parent path of `component`, reporting circular configuration.
    pub fn parents<G: ComponentGraph + ?Sized>(
        &self,
        graph: &G,
        component: &Uid,
    ) -> Report<Vec<ParentPath>> {
        ParentPathFinder::new(graph)
            .with_settings(self.settings(graph))
            .find(&self.uid, component)
    }

    /// Every parent path of `component`; problems are logged.
    pub fn get_parents<G: ComponentGraph + ?Sized>(&self, graph: &G, component: &Uid) -> Vec<ParentPath> {
        self.parents(graph, component).log_warnings()
    }

    /// All applications of the session, nested segments flattened.
    pub fn all_applications<G: ComponentGraph + ?Sized>(&self, graph: &G) -> Report<Vec<Uid>> {
        all_applications(graph, &self.uid, self.settings(graph))
    }
}

impl ConfigObserver for Session {
    fn on_load(&mut self) {
        tracing::debug!(session = %self.uid, "reset session components because of configuration load");
        self.state.reset();
    }

    fn on_unload(&mut self) {
        tracing::debug!(session = %self.uid, "reset session components because of configuration unload");
        self.state.reset();
    }

    fn on_update(&mut self, changed: &Uid, attribute: &str) {
        tracing::debug!(
            session = %self.uid,
            "reset session components because of configuration update (obj = {changed}, name = '{attribute}')"
        );
        self.state.reset();
    }
}
