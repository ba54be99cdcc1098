//! Status command implementation

use colored::Colorize;
use dal_model::ComponentKind;
use serde_json::json;

use super::{print_warnings, require_component};
use crate::context::GraphContext;
use crate::error::Result;

/// Disabled state of one requested component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentStatus {
    pub uid: String,
    pub kind: ComponentKind,
    pub disabled: bool,
}

/// Query every component, failing on the first unknown UID.
pub fn collect_status(ctx: &mut GraphContext, components: &[String]) -> Result<Vec<ComponentStatus>> {
    let mut statuses = Vec::with_capacity(components.len());
    let mut warnings = Vec::new();

    for component in components {
        let (uid, kind) = require_component(ctx, component)?;

        let report = ctx.session.check_disabled(&ctx.graph, &uid);
        warnings.extend(report.warnings);
        statuses.push(ComponentStatus {
            uid: component.clone(),
            kind,
            disabled: report.value,
        });
    }

    print_warnings(&warnings);
    Ok(statuses)
}

/// Run the status command
pub fn run_status(ctx: &mut GraphContext, components: &[String], json: bool) -> Result<()> {
    let statuses = collect_status(ctx, components)?;

    if json {
        let mut map = serde_json::Map::new();
        for status in &statuses {
            map.insert(
                status.uid.clone(),
                json!({
                    "kind": status.kind.as_str(),
                    "disabled": status.disabled,
                }),
            );
        }
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    let width = statuses.iter().map(|s| s.uid.len()).max().unwrap_or(0);
    for status in &statuses {
        let state = if status.disabled {
            "disabled".red()
        } else {
            "enabled".green()
        };
        println!(
            "  {}  {}  {}",
            format!("{:width$}", status.uid).cyan(),
            format!("{:18}", status.kind.as_str()).dimmed(),
            state
        );
    }

    Ok(())
}
