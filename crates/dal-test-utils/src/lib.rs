//! Shared test fixtures for the DAL disabled-state workspace.
//!
//! This crate is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixture`]: [`GraphFixture`] builder for component graphs
//! - [`file`]: [`GraphFile`], a graph document written to a temporary directory

pub mod file;
pub mod fixture;

pub use file::GraphFile;
pub use fixture::GraphFixture;

/// Convert string literals to UIDs.
pub fn uids(items: &[&str]) -> Vec<dal_model::Uid> {
    items.iter().map(|s| dal_model::Uid::from(*s)).collect()
}
