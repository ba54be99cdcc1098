//! Disabled-state resolution.
//!
//! The disabled set of a session is built in three steps:
//!
//! 1. Walk the session once, under a [`CycleGuard`], collecting every
//!    AND-set and OR-set reachable through segments and resource sets.
//! 2. Seed the set with the user-disabled components and the session's
//!    configured disabled list (minus user-enabled components), disabling
//!    everything contained below each seed.
//! 3. Iterate the AND/OR rules until a pass disables nothing new. An OR-set
//!    is disabled when any child is disabled; a non-empty AND-set when all
//!    children are. A set disabled this way does not disable its other
//!    children. A pass that still disables something after
//!    `max_iterations` passes is reported and ends the loop.
//!
//! Only step 1 recurses. Downward propagation uses an explicit worklist and
//! never revisits a disabled component, so it terminates on cyclic input.

use std::collections::HashSet;

use dal_model::{ComponentGraph, ResolverSettings, SessionConfig, SetLogic, Uid};

use crate::error::{Error, Result};
use crate::fuse::CycleGuard;
use crate::overrides::SessionOverrides;
use crate::report::Report;

const GOAL: &str = "component 'is-disabled' status";

/// AND-sets and OR-sets of a session, in discovery order, without repeats.
#[derive(Debug, Default)]
struct Combinators {
    or_sets: Vec<Uid>,
    and_sets: Vec<Uid>,
    seen: HashSet<Uid>,
}

impl Combinators {
    fn record(&mut self, uid: &Uid, logic: SetLogic) {
        let list = match logic {
            SetLogic::Or => &mut self.or_sets,
            SetLogic::And => &mut self.and_sets,
            SetLogic::Containment => return,
        };
        if self.seen.insert(uid.clone()) {
            list.push(uid.clone());
        }
    }
}

/// Computes the full disabled set of a session.
pub struct DisabledStateResolver<'g, G: ComponentGraph + ?Sized> {
    graph: &'g G,
    settings: ResolverSettings,
}

impl<'g, G: ComponentGraph + ?Sized> DisabledStateResolver<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            settings: graph.settings(),
        }
    }

    pub fn with_settings(mut self, settings: ResolverSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Whether anything at all can be disabled in this session.
    pub fn has_candidates(session: &SessionConfig, overrides: &SessionOverrides) -> bool {
        !session.disabled.is_empty() || !overrides.user_disabled().is_empty()
    }

    /// Build the disabled set.
    ///
    /// Returns `None` (plus a `CircularDependency` warning) when the session
    /// walk hits the fuse; the set is then left uncomputed. Reaching the
    /// iteration cap is reported but still yields the set computed so far.
    pub fn resolve(
        &self,
        session: &SessionConfig,
        overrides: &SessionOverrides,
    ) -> Report<Option<HashSet<Uid>>> {
        let combinators = match self.collect(session) {
            Ok(combinators) => combinators,
            Err(err) => return Report::with_warning(None, err),
        };

        let mut disabled = HashSet::new();
        for seed in self.seeds(session, overrides) {
            self.disable_with_descendants(&seed, &mut disabled);
        }

        let mut report = Report::clean(());
        self.auto_disable(&combinators, &mut disabled, &mut report);
        report.map(|()| Some(disabled))
    }

    fn seeds(&self, session: &SessionConfig, overrides: &SessionOverrides) -> Vec<Uid> {
        let mut seeds: Vec<Uid> = Vec::new();

        for uid in overrides.user_disabled() {
            tracing::debug!("disable component {uid} because it is explicitly disabled by user");
            seeds.push(uid.clone());
        }

        for uid in &session.disabled {
            if overrides.is_user_enabled(uid) {
                tracing::debug!("skip component {uid} because it is enabled by user");
            } else {
                tracing::debug!(
                    "disable component {uid} because it is not explicitly enabled in session"
                );
                seeds.push(uid.clone());
            }
        }

        seeds
    }

    /// Disable `root` and everything contained below it. Returns the number
    /// of newly disabled components.
    fn disable_with_descendants(&self, root: &Uid, disabled: &mut HashSet<Uid>) -> usize {
        let mut added = 0;
        let mut stack = vec![root.clone()];

        while let Some(uid) = stack.pop() {
            if disabled.contains(&uid) {
                continue;
            }
            if let Some(component) = self.graph.component(&uid) {
                for child in component.children() {
                    if !disabled.contains(child) {
                        tracing::debug!("disable {child} because its parent {uid} is disabled");
                        stack.push(child.clone());
                    }
                }
            }
            disabled.insert(uid);
            added += 1;
        }

        added
    }

    fn auto_disable(
        &self,
        combinators: &Combinators,
        disabled: &mut HashSet<Uid>,
        report: &mut Report<()>,
    ) {
        tracing::debug!(
            "Session has {} resource-set-ORs and {} resource-set-ANDs",
            combinators.or_sets.len(),
            combinators.and_sets.len()
        );

        let mut pass = 1;
        loop {
            let before = disabled.len();
            tracing::debug!(
                "before auto-disabling iteration {pass} the number of disabled components is {before}"
            );

            for or_set in &combinators.or_sets {
                if disabled.contains(or_set) {
                    continue;
                }
                let children = self.graph.contained(or_set);
                if let Some(child) = children.iter().find(|c| disabled.contains(*c)) {
                    tracing::debug!(
                        "disable resource-set-OR {or_set} because its child {child} is disabled"
                    );
                    disabled.insert(or_set.clone());
                }
            }

            for and_set in &combinators.and_sets {
                if disabled.contains(and_set) {
                    continue;
                }
                let children = self.graph.contained(and_set);
                if !children.is_empty() && children.iter().all(|c| disabled.contains(c)) {
                    tracing::debug!(
                        "disable resource-set-AND {and_set} because all its children are disabled"
                    );
                    disabled.insert(and_set.clone());
                }
            }

            if disabled.len() == before {
                tracing::debug!(
                    "after {pass} iteration(s) auto-disabling algorithm found no newly disabled sets"
                );
                break;
            }

            if pass > self.settings.max_iterations {
                report.warn(Error::IterationLimitExceeded {
                    limit: self.settings.max_iterations,
                });
                break;
            }
            pass += 1;
        }
    }

    /// Collect the AND/OR sets of a session, testing every containment path
    /// against the fuse.
    fn collect(&self, session: &SessionConfig) -> Result<Combinators> {
        let mut fuse = CycleGuard::with_limit(GOAL, &session.uid, self.settings.fuse_depth);
        let mut out = Combinators::default();

        for segment in &session.segments {
            let mut scope = fuse.enter(segment)?;
            self.collect_segment(segment, &mut scope, &mut out)?;
        }

        for app in &session.applications {
            let mut scope = fuse.enter(app)?;
            self.collect_set(app, &mut scope, &mut out)?;
        }

        Ok(out)
    }

    fn collect_segment(&self, uid: &Uid, fuse: &mut CycleGuard, out: &mut Combinators) -> Result<()> {
        let Some(segment) = self.graph.component(uid).and_then(|c| c.as_segment()) else {
            return Ok(());
        };

        for member in segment
            .applications
            .iter()
            .chain(&segment.resources)
            .chain(&segment.controller)
        {
            let mut scope = fuse.enter(member)?;
            self.collect_set(member, &mut scope, out)?;
        }

        for nested in &segment.segments {
            let mut scope = fuse.enter(nested)?;
            self.collect_segment(nested, &mut scope, out)?;
        }

        Ok(())
    }

    /// Record `uid` if it is an AND/OR set and descend into nested sets.
    /// Components that are not resource-set-like are ignored.
    fn collect_set(&self, uid: &Uid, fuse: &mut CycleGuard, out: &mut Combinators) -> Result<()> {
        let Some(view) = self.graph.component(uid).and_then(|c| c.as_resource_set()) else {
            return Ok(());
        };
        out.record(uid, view.logic);

        for child in view.contains {
            let mut scope = fuse.enter(child)?;
            self.collect_set(child, &mut scope, out)?;
        }

        Ok(())
    }
}
