//! Parents command implementation

use colored::Colorize;
use dal_core::ParentPath;

use super::{print_warnings, require_component};
use crate::context::GraphContext;
use crate::error::Result;

/// Render one parent path; the empty path means the session itself.
pub fn format_path(path: &ParentPath, session: &str) -> String {
    if path.is_empty() {
        format!("<session {session}>")
    } else {
        path.iter()
            .map(|uid| uid.as_str())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Run the parents command
pub fn run_parents(ctx: &mut GraphContext, component: &str) -> Result<()> {
    let (uid, _) = require_component(ctx, component)?;
    let session = ctx.session.uid().to_string();

    let report = ctx.session.parents(&ctx.graph, &uid);
    print_warnings(&report.warnings);

    if report.value.is_empty() {
        println!(
            "{} is not linked with session {}",
            component.cyan(),
            session.cyan()
        );
        return Ok(());
    }

    println!("{}:", format!("Parents of {component}").bold());
    for path in &report.value {
        println!("  {} {}", "+".green(), format_path(path, &session));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use dal_core::Session;
    use dal_test_utils::{GraphFixture, uids};

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&uids(&["root", "app"]), "s"), "root -> app");
        assert_eq!(format_path(&Vec::new(), "s"), "<session s>");
    }

    #[test]
    fn test_unknown_component_is_a_user_error() {
        let mut ctx = GraphContext {
            graph: GraphFixture::new().session("s", &[], &[], &[]).build(),
            session: Session::new("s"),
        };
        let err = run_parents(&mut ctx, "ghost").unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }
}
