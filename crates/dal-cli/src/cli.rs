//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// DAL - Inspect the disabled state of session components
#[derive(Parser, Debug)]
#[command(name = "dal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the graph's maximum number of auto-disabling passes
    #[arg(long, global = true, env = "DAL_MAX_ITERATIONS")]
    pub max_iterations: Option<usize>,

    /// Override the graph's maximum nesting depth
    #[arg(long, global = true, env = "DAL_FUSE_DEPTH")]
    pub fuse_depth: Option<usize>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every application of a session with its disabled state
    ListApps {
        /// Session UID
        session: String,

        /// Graph file (.toml, .json, .yaml)
        graph: PathBuf,
    },

    /// Exercise the enable/disable overrides against a session
    ///
    /// Lists the applications, then lists them again after enabling the
    /// configured disabled components, after clearing the enabled set and
    /// after clearing the disabled set.
    DisableTest {
        /// Session UID
        session: String,

        /// Graph file (.toml, .json, .yaml)
        graph: PathBuf,
    },

    /// Print every parent path of a component
    Parents {
        /// Session UID
        session: String,

        /// Graph file (.toml, .json, .yaml)
        graph: PathBuf,

        /// Component UID
        component: String,
    },

    /// Print the disabled state of components
    Status {
        /// Session UID
        session: String,

        /// Graph file (.toml, .json, .yaml)
        graph: PathBuf,

        /// Component UIDs
        #[arg(required = true)]
        components: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_apps() {
        let cli = Cli::parse_from(["dal", "list-apps", "s", "graph.toml"]);
        assert_eq!(
            cli.command,
            Commands::ListApps {
                session: "s".into(),
                graph: PathBuf::from("graph.toml"),
            }
        );
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_global_overrides_after_subcommand() {
        let cli = Cli::parse_from([
            "dal",
            "status",
            "s",
            "graph.yaml",
            "a",
            "b",
            "--json",
            "--max-iterations",
            "5",
            "-v",
        ]);
        assert_eq!(cli.max_iterations, Some(5));
        assert!(cli.verbose);
        match cli.command {
            Commands::Status {
                components, json, ..
            } => {
                assert_eq!(components, vec!["a".to_string(), "b".to_string()]);
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_status_requires_components() {
        assert!(Cli::try_parse_from(["dal", "status", "s", "graph.toml"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
