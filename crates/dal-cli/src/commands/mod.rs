//! Command implementations for dal-cli

pub mod list_apps;
pub mod parents;
pub mod status;

pub use disable_test::run_disable_test;
pub use list_apps::run_list_apps;
pub use parents::run_parents;
pub use status::run_status;

use colored::Colorize;
use dal_model::{ComponentGraph, ComponentKind, Uid};

use crate::context::GraphContext;
use crate::error::{CliError, Result};

/// Print reported problems to stderr, once per distinct message.
pub(crate) fn print_warnings(warnings: &[dal_core::Error]) {
    let mut seen = std::collections::HashSet::new();
    for warning in warnings {
        let message = warning.to_string();
        if seen.insert(message.clone()) {
            eprintln!("{}: {}", "warning".yellow().bold(), message);
        }
    }
}

/// Resolve a component argument, failing when the graph does not define it.
pub(crate) fn require_component(ctx: &GraphContext, component: &str) -> Result<(Uid, ComponentKind)> {
    let uid = Uid::from(component);
    match ctx.graph.kind(&uid) {
        Some(kind) => Ok((uid, kind)),
        None => Err(CliError::user(format!(
            "Component '{component}' is not defined in the graph"
        ))),
    }
}
