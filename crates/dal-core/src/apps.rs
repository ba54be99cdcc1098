//! Flattened application listing for a session

use dal_model::{ComponentGraph, ResolverSettings, Uid};

use crate::error::{Error, Result};
use crate::fuse::CycleGuard;
use crate::report::Report;

/// Session-level applications followed by the applications of every
/// segment, nested segments flattened depth-first.
///
/// A circular segment nesting stops the walk; the applications found up to
/// that point are returned with the error attached.
pub fn all_applications<G: ComponentGraph + ?Sized>(
    graph: &G,
    session: &Uid,
    settings: ResolverSettings,
) -> Report<Vec<Uid>> {
    let Some(config) = graph.session(session) else {
        return Report::with_warning(
            Vec::new(),
            Error::UnknownSession {
                uid: session.clone(),
            },
        );
    };

    let mut apps = config.applications.clone();
    let mut fuse = CycleGuard::with_limit("session applications", session, settings.fuse_depth);

    let outcome = config.segments.iter().try_for_each(|segment| {
        let mut scope = fuse.enter(segment)?;
        segment_applications(graph, segment, &mut scope, &mut apps)
    });

    let mut report = Report::clean(apps);
    if let Err(err) = outcome {
        report.warn(err);
    }
    report
}

fn segment_applications<G: ComponentGraph + ?Sized>(
    graph: &G,
    uid: &Uid,
    fuse: &mut CycleGuard,
    apps: &mut Vec<Uid>,
) -> Result<()> {
    let Some(segment) = graph.component(uid).and_then(|c| c.as_segment()) else {
        return Ok(());
    };

    apps.extend(segment.applications.iter().cloned());
    for nested in &segment.segments {
        let mut scope = fuse.enter(nested)?;
        segment_applications(graph, nested, &mut scope, apps)?;
    }
    Ok(())
}
