//! Component graph data model for the DAL disabled-state resolver.
//!
//! This crate provides the typed, read-only view of a system configuration
//! that the resolver walks:
//!
//! - [`Component`] and its closed set of kinds ([`ComponentKind`])
//! - [`SessionConfig`], the roots and explicit disabled list of a session
//! - [`ComponentGraph`], the query surface consumed by `dal-core`
//! - [`InMemoryGraph`] and [`GraphStore`] for loading graphs from TOML,
//!   JSON or YAML files

pub mod component;
pub mod config;
pub mod document;
pub mod error;
pub mod graph;
pub mod session;
pub mod store;
pub mod uid;

pub use component::{Component, ComponentBody, ComponentKind, ResourceSetView, Segment, SetLogic};
pub use config::{DEFAULT_FUSE_DEPTH, DEFAULT_MAX_ITERATIONS, ResolverSettings};
pub use document::{ComponentRecord, GraphDocument, SessionRecord};
pub use error::{Error, Result};
pub use graph::{ComponentGraph, ConfigObserver, InMemoryGraph, InMemoryGraphBuilder};
pub use session::SessionConfig;
pub use store::{GraphFormat, GraphStore};
pub use uid::Uid;
