//! DAL CLI
//!
//! Command-line inspection of the disabled state of session components.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use context::{GraphContext, SettingsOverride};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{}: tracing subscriber already set", "warning".yellow().bold());
        }
        tracing::debug!("Verbose mode enabled");
    }

    let overrides = SettingsOverride {
        max_iterations: cli.max_iterations,
        fuse_depth: cli.fuse_depth,
    };

    execute_command(cli.command, overrides)
}

fn execute_command(cmd: Commands, overrides: SettingsOverride) -> Result<()> {
    match cmd {
        Commands::ListApps { session, graph } => {
            let mut ctx = GraphContext::load(&graph, &session, overrides)?;
            commands::run_list_apps(&mut ctx)
        }
        Commands::DisableTest { session, graph } => {
            let mut ctx = GraphContext::load(&graph, &session, overrides)?;
            commands::run_disable_test(&mut ctx)
        }
        Commands::Parents {
            session,
            graph,
            component,
        } => {
            let mut ctx = GraphContext::load(&graph, &session, overrides)?;
            commands::run_parents(&mut ctx, &component)
        }
        Commands::Status {
            session,
            graph,
            components,
            json,
        } => {
            let mut ctx = GraphContext::load(&graph, &session, overrides)?;
            commands::run_status(&mut ctx, &components, json)
        }
    }
}
