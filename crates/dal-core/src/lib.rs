//! Disabled-state resolution for DAL sessions.
//!
//! Given a [`ComponentGraph`](dal_model::ComponentGraph) and a session, this
//! crate answers whether a component is disabled, taking into account the
//! session's configured disabled list, user overrides, containment and
//! AND/OR resource-set rules. It also enumerates the parent paths of a
//! component and lists the applications of a session.
//!
//! Start from [`Session`]; the lower-level pieces are public for callers that
//! manage caches themselves.

pub mod apps;
pub mod error;
pub mod fuse;
pub mod overrides;
pub mod parents;
pub mod report;
pub mod resolver;
pub mod session;
pub mod state;

pub use apps::all_applications;
pub use error::{Error, Result};
pub use fuse::{CycleGuard, FuseScope};
pub use overrides::SessionOverrides;
pub use parents::{ParentPath, ParentPathFinder};
pub use report::Report;
pub use resolver::DisabledStateResolver;
pub use session::Session;
pub use state::DisabledState;
