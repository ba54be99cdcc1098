//! [`GraphFixture`] builder for resolver test scenarios.

use dal_model::{ComponentKind, ComponentRecord, GraphDocument, InMemoryGraph, SessionRecord, Uid};

use crate::file::GraphFile;
use crate::uids;

/// Fluent builder for a graph document.
///
/// The fixture keeps records in insertion order and performs no validation;
/// [`GraphFixture::build`] runs the same checks as loading a file.
///
/// # Example
///
/// ```rust
/// use dal_test_utils::GraphFixture;
///
/// let graph = GraphFixture::new()
///     .session("s", &["seg"], &[], &["a"])
///     .segment("seg", &[], &[], &["or"])
///     .or_set("or", &["a", "b"])
///     .resource("a")
///     .resource("b")
///     .build();
/// assert_eq!(graph.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphFixture {
    document: GraphDocument,
}

impl GraphFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_iterations(mut self, limit: usize) -> Self {
        self.document.resolver = self.document.resolver.with_max_iterations(limit);
        self
    }

    pub fn fuse_depth(mut self, depth: usize) -> Self {
        self.document.resolver = self.document.resolver.with_fuse_depth(depth);
        self
    }

    pub fn session(mut self, uid: &str, segments: &[&str], applications: &[&str], disabled: &[&str]) -> Self {
        self.document.sessions.push(SessionRecord {
            uid: uid.into(),
            segments: uids(segments),
            applications: uids(applications),
            disabled: uids(disabled),
        });
        self
    }

    pub fn segment(mut self, uid: &str, segments: &[&str], applications: &[&str], resources: &[&str]) -> Self {
        let mut record = record(uid, ComponentKind::Segment);
        record.segments = uids(segments);
        record.applications = uids(applications);
        record.resources = uids(resources);
        self.document.components.push(record);
        self
    }

    /// Attach a controller to a segment added earlier.
    ///
    /// # Panics
    ///
    /// Panics if `segment` has not been added.
    pub fn controller(mut self, segment: &str, controller: &str) -> Self {
        let record = self
            .document
            .components
            .iter_mut()
            .find(|r| r.uid == segment)
            .unwrap_or_else(|| panic!("GraphFixture::controller: no segment '{segment}'"));
        record.controller = Some(controller.into());
        self
    }

    pub fn application(mut self, uid: &str) -> Self {
        self.document.components.push(record(uid, ComponentKind::Application));
        self
    }

    /// An application that also contains modules or resources.
    pub fn daq_application(mut self, uid: &str, contains: &[&str]) -> Self {
        self.document
            .components
            .push(container(uid, ComponentKind::Application, contains));
        self
    }

    pub fn module(mut self, uid: &str) -> Self {
        self.document.components.push(record(uid, ComponentKind::Module));
        self
    }

    pub fn resource(mut self, uid: &str) -> Self {
        self.document.components.push(record(uid, ComponentKind::Resource));
        self
    }

    /// Add several plain resources at once.
    pub fn resources(self, uids: &[&str]) -> Self {
        uids.iter().fold(self, |fixture, uid| fixture.resource(uid))
    }

    pub fn resource_set(mut self, uid: &str, contains: &[&str]) -> Self {
        self.document
            .components
            .push(container(uid, ComponentKind::ResourceSet, contains));
        self
    }

    pub fn and_set(mut self, uid: &str, contains: &[&str]) -> Self {
        self.document
            .components
            .push(container(uid, ComponentKind::ResourceSetAnd, contains));
        self
    }

    pub fn or_set(mut self, uid: &str, contains: &[&str]) -> Self {
        self.document
            .components
            .push(container(uid, ComponentKind::ResourceSetOr, contains));
        self
    }

    /// Validate and build the in-memory graph.
    ///
    /// # Panics
    ///
    /// Panics if the fixture is not a valid graph.
    pub fn build(&self) -> InMemoryGraph {
        InMemoryGraph::try_from(self.document.clone())
            .unwrap_or_else(|err| panic!("GraphFixture::build: invalid fixture: {err}"))
    }

    /// The document serialized as TOML.
    pub fn to_toml(&self) -> String {
        toml::to_string(&self.document).expect("GraphFixture: serialize TOML")
    }

    /// Write the document as `graph.toml` in a fresh temporary directory.
    pub fn write_toml(&self) -> GraphFile {
        GraphFile::with_content("graph.toml", &self.to_toml())
    }

    /// Write the document as `graph.json` in a fresh temporary directory.
    pub fn write_json(&self) -> GraphFile {
        let content =
            serde_json::to_string_pretty(&self.document).expect("GraphFixture: serialize JSON");
        GraphFile::with_content("graph.json", &content)
    }

    /// Write the document as `graph.yaml` in a fresh temporary directory.
    pub fn write_yaml(&self) -> GraphFile {
        let content = serde_yaml::to_string(&self.document).expect("GraphFixture: serialize YAML");
        GraphFile::with_content("graph.yaml", &content)
    }
}

fn record(uid: &str, kind: ComponentKind) -> ComponentRecord {
    ComponentRecord {
        uid: Uid::from(uid),
        kind,
        contains: None,
        segments: Vec::new(),
        applications: Vec::new(),
        resources: Vec::new(),
        controller: None,
    }
}

fn container(uid: &str, kind: ComponentKind, contains: &[&str]) -> ComponentRecord {
    ComponentRecord {
        contains: Some(uids(contains)),
        ..record(uid, kind)
    }
}
