//! List-apps command implementation

use colored::Colorize;
use dal_core::Report;
use dal_model::{Component, ComponentBody, ComponentGraph, Uid};

use super::print_warnings;
use crate::context::GraphContext;
use crate::error::Result;

/// An application and, when it is enabled, its contained modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub uid: Uid,
    pub disabled: bool,
    pub modules: Vec<(Uid, bool)>,
}

/// Query the disabled state of every application of the session.
pub fn collect_apps(ctx: &mut GraphContext) -> Report<Vec<AppState>> {
    let graph = &ctx.graph;
    let session = &mut ctx.session;

    let mut report = Report::clean(Vec::new());
    let apps = report.absorb(session.all_applications(graph));

    for uid in apps {
        let disabled = report.absorb(session.check_disabled(graph, &uid));
        let mut modules = Vec::new();

        if !disabled {
            if let Some(ComponentBody::Application {
                contains: Some(contains),
            }) = graph.component(&uid).map(Component::body)
            {
                for module in contains {
                    let state = report.absorb(session.check_disabled(graph, module));
                    modules.push((module.clone(), state));
                }
            }
        }

        report.value.push(AppState {
            uid,
            disabled,
            modules,
        });
    }

    report
}

pub(crate) fn print_apps(ctx: &mut GraphContext) {
    let report = collect_apps(ctx);
    print_warnings(&report.warnings);

    for app in &report.value {
        let mut line = format!("Application: {}", app.uid.as_str().cyan());
        if app.disabled {
            line.push_str(&"<disabled>".red().to_string());
        } else if !app.modules.is_empty() {
            line.push_str(" Modules:");
            for (module, disabled) in &app.modules {
                line.push(' ');
                line.push_str(module.as_str());
                if *disabled {
                    line.push_str(&"<disabled>".red().to_string());
                }
            }
        }
        println!("{line}");
    }
}

/// Run the list-apps command
pub fn run_list_apps(ctx: &mut GraphContext) -> Result<()> {
    print_apps(ctx);
    Ok(())
}
