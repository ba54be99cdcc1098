//! Parent-path enumeration.
//!
//! A parent path lists the containing components of a target, from a
//! session root down to (but excluding) the target itself. A component
//! referenced from several containers has one path per reference, so the
//! search is exhaustive and never stops at the first match.

use dal_model::{ComponentGraph, ResolverSettings, Segment, SessionConfig, Uid};

use crate::error::{Error, Result};
use crate::fuse::CycleGuard;
use crate::report::Report;

const GOAL: &str = "component parents";

/// Ordered containers from a session root down to the target's direct parent.
pub type ParentPath = Vec<Uid>;

struct Search<'a> {
    target: &'a Uid,
    /// Segments only live in segments, so a segment target skips applications
    /// and resource sets.
    target_is_segment: bool,
    path: Vec<Uid>,
    found: Vec<ParentPath>,
}

impl Search<'_> {
    fn emit(&mut self) {
        self.found.push(self.path.clone());
    }
}

/// Enumerates every containment path between a session and a component.
pub struct ParentPathFinder<'g, G: ComponentGraph + ?Sized> {
    graph: &'g G,
    settings: ResolverSettings,
}

impl<'g, G: ComponentGraph + ?Sized> ParentPathFinder<'g, G> {
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

    /// Find every parent path of `target` in `session`.
    ///
    /// An empty list is a valid answer. A circular dependency is reported as
    /// `CannotGetParents` and the paths found before it are returned.
    pub fn find(&self, session: &Uid, target: &Uid) -> Report<Vec<ParentPath>> {
        let Some(config) = self.graph.session(session) else {
            return Report::with_warning(
                Vec::new(),
                Error::UnknownSession {
                    uid: session.clone(),
                },
            );
        };

        let mut search = Search {
            target,
            target_is_segment: self
                .graph
                .component(target)
                .is_some_and(|c| c.is_segment()),
            path: Vec::new(),
            found: Vec::new(),
        };
        let mut fuse = CycleGuard::with_limit(GOAL, session, self.settings.fuse_depth);

        let outcome = self.walk_session(config, &mut fuse, &mut search);
        let mut report = Report::clean(search.found);

        if let Err(source) = outcome {
            report.warn(Error::CannotGetParents {
                component: target.clone(),
                source: Box::new(source),
            });
        } else if report.value.is_empty() {
            tracing::debug!(
                "cannot find segment/resource path(s) between component {target} and session {session} \
                 (check this object is linked with the session as a segment or a resource)"
            );
        }

        report
    }

    fn walk_session(
        &self,
        config: &SessionConfig,
        fuse: &mut CycleGuard,
        search: &mut Search<'_>,
    ) -> Result<()> {
        for segment in &config.segments {
            let mut scope = fuse.enter(segment)?;
            if segment == search.target {
                search.emit();
            }
            self.walk_segment(segment, &mut scope, search)?;
        }

        for app in &config.applications {
            if app == search.target {
                search.emit();
            }
            if self.is_resource_set(app) {
                let mut scope = fuse.enter(app)?;
                self.walk_set(app, &mut scope, search)?;
            }
        }

        Ok(())
    }

    fn walk_segment(&self, uid: &Uid, fuse: &mut CycleGuard, search: &mut Search<'_>) -> Result<()> {
        let Some(segment) = self.graph.component(uid).and_then(|c| c.as_segment()) else {
            return Ok(());
        };

        search.path.push(uid.clone());
        let outcome = self.walk_segment_members(segment, fuse, search);
        search.path.pop();

        outcome
    }

    fn walk_segment_members(
        &self,
        segment: &Segment,
        fuse: &mut CycleGuard,
        search: &mut Search<'_>,
    ) -> Result<()> {
        for nested in &segment.segments {
            if nested == search.target {
                search.emit();
            } else {
                let mut scope = fuse.enter(nested)?;
                self.walk_segment(nested, &mut scope, search)?;
            }
        }

        if !search.target_is_segment {
            for member in segment
                .applications
                .iter()
                .chain(&segment.resources)
                .chain(&segment.controller)
            {
                self.visit_member(member, fuse, search)?;
            }
        }

        Ok(())
    }

    fn walk_set(&self, uid: &Uid, fuse: &mut CycleGuard, search: &mut Search<'_>) -> Result<()> {
        let Some(view) = self.graph.component(uid).and_then(|c| c.as_resource_set()) else {
            return Ok(());
        };

        search.path.push(uid.clone());
        let outcome = view
            .contains
            .iter()
            .try_for_each(|child| self.visit_member(child, fuse, search));
        search.path.pop();

        outcome
    }

    /// Emit a path if `member` is the target, otherwise descend into it when
    /// it is a resource set.
    fn visit_member(&self, member: &Uid, fuse: &mut CycleGuard, search: &mut Search<'_>) -> Result<()> {
        if member == search.target {
            search.emit();
            Ok(())
        } else if self.is_resource_set(member) {
            let mut scope = fuse.enter(member)?;
            self.walk_set(member, &mut scope, search)
        } else {
            Ok(())
        }
    }

    fn is_resource_set(&self, uid: &Uid) -> bool {
        self.graph
            .component(uid)
            .is_some_and(|c| c.as_resource_set().is_some())
    }
}
