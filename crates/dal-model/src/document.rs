//! On-disk graph document.
//!
//! ```toml
//! [resolver]
//! max_iterations = 1000
//!
//! [[sessions]]
//! uid = "physics"
//! segments = ["root"]
//! disabled = ["hsi-app"]
//!
//! [[components]]
//! uid = "root"
//! kind = "segment"
//! applications = ["hsi-app"]
//! controller = "root-controller"
//!
//! [[components]]
//! uid = "hsi-app"
//! kind = "application"
//! contains = ["hsi-module"]
//! ```
//!
//! Records are flat; [`Component::try_from`] checks that each record only
//! carries the fields its kind owns.

use serde::{Deserialize, Serialize};

use crate::config::ResolverSettings;
use crate::error::{Error, Result};
use crate::{
    Component, ComponentBody, ComponentKind, InMemoryGraph, Segment, SessionConfig, SetLogic, Uid,
};

/// Top-level structure of a graph file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub resolver: ResolverSettings,
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub uid: Uid,
    #[serde(default)]
    pub segments: Vec<Uid>,
    #[serde(default)]
    pub applications: Vec<Uid>,
    #[serde(default)]
    pub disabled: Vec<Uid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub uid: Uid,
    pub kind: ComponentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<Vec<Uid>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<Uid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applications: Vec<Uid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Uid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<Uid>,
}

impl ComponentRecord {
    fn has_segment_fields(&self) -> bool {
        !self.segments.is_empty()
            || !self.applications.is_empty()
            || !self.resources.is_empty()
            || self.controller.is_some()
    }
}

impl From<SessionRecord> for SessionConfig {
    fn from(record: SessionRecord) -> Self {
        Self {
            uid: record.uid,
            segments: record.segments,
            applications: record.applications,
            disabled: record.disabled,
        }
    }
}

impl TryFrom<ComponentRecord> for Component {
    type Error = Error;

    fn try_from(record: ComponentRecord) -> Result<Self> {
        if record.kind != ComponentKind::Segment && record.has_segment_fields() {
            return Err(Error::invalid(
                &record.uid,
                format!(
                    "only segments may declare segments, applications, resources or a controller (kind is {})",
                    record.kind
                ),
            ));
        }

        let body = match record.kind {
            ComponentKind::Application => ComponentBody::Application {
                contains: record.contains,
            },
            ComponentKind::Module | ComponentKind::Resource => {
                if record.contains.is_some() {
                    return Err(Error::invalid(
                        &record.uid,
                        format!("a {} cannot contain other components", record.kind),
                    ));
                }
                if record.kind == ComponentKind::Module {
                    ComponentBody::Module
                } else {
                    ComponentBody::Resource
                }
            }
            ComponentKind::ResourceSet => set_body(SetLogic::Containment, record.contains),
            ComponentKind::ResourceSetAnd => set_body(SetLogic::And, record.contains),
            ComponentKind::ResourceSetOr => set_body(SetLogic::Or, record.contains),
            ComponentKind::Segment => {
                if record.contains.is_some() {
                    return Err(Error::invalid(
                        &record.uid,
                        "segments use segments/applications/resources instead of contains",
                    ));
                }
                ComponentBody::Segment(Segment {
                    segments: record.segments,
                    applications: record.applications,
                    resources: record.resources,
                    controller: record.controller,
                })
            }
        };

        Ok(Component::new(record.uid, body))
    }
}

fn set_body(logic: SetLogic, contains: Option<Vec<Uid>>) -> ComponentBody {
    ComponentBody::ResourceSet {
        logic,
        contains: contains.unwrap_or_default(),
    }
}

impl TryFrom<GraphDocument> for InMemoryGraph {
    type Error = Error;

    fn try_from(document: GraphDocument) -> Result<Self> {
        let components = document
            .components
            .into_iter()
            .map(Component::try_from)
            .collect::<Result<Vec<_>>>()?;
        let sessions = document.sessions.into_iter().map(SessionConfig::from).collect();
        InMemoryGraph::from_parts(document.resolver, sessions, components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComponentGraph;

    fn record(uid: &str, kind: ComponentKind) -> ComponentRecord {
        ComponentRecord {
            uid: uid.into(),
            kind,
            contains: None,
            segments: Vec::new(),
            applications: Vec::new(),
            resources: Vec::new(),
            controller: None,
        }
    }

    #[test]
    fn test_resource_set_without_contains_is_empty() {
        let component = Component::try_from(record("and", ComponentKind::ResourceSetAnd)).unwrap();
        let view = component.as_resource_set().unwrap();
        assert_eq!(view.logic, SetLogic::And);
        assert!(view.contains.is_empty());
    }

    #[test]
    fn test_resource_with_contains_rejected() {
        let mut rec = record("r", ComponentKind::Resource);
        rec.contains = Some(vec!["x".into()]);
        let err = Component::try_from(rec).unwrap_err();
        assert!(err.to_string().contains("cannot contain"));
    }

    #[test]
    fn test_segment_fields_on_application_rejected() {
        let mut rec = record("app", ComponentKind::Application);
        rec.controller = Some("ctrl".into());
        assert!(Component::try_from(rec).is_err());
    }

    #[test]
    fn test_segment_with_contains_rejected() {
        let mut rec = record("seg", ComponentKind::Segment);
        rec.contains = Some(Vec::new());
        assert!(Component::try_from(rec).is_err());
    }

    #[test]
    fn test_document_into_graph() {
        let document: GraphDocument = toml::from_str(
            r#"
[[sessions]]
uid = "s"
segments = ["seg"]

[[components]]
uid = "seg"
kind = "segment"
applications = ["app"]

[[components]]
uid = "app"
kind = "application"
contains = ["mod"]

[[components]]
uid = "mod"
kind = "module"
"#,
        )
        .unwrap();

        let graph = InMemoryGraph::try_from(document).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.contained(&"app".into()), &[Uid::from("mod")]);
        assert_eq!(graph.settings(), ResolverSettings::default());
    }
}
