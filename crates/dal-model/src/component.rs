//! Components of the configuration graph.
//!
//! A component is one of a closed set of kinds. Only two kinds own
//! containment edges: resource sets (including applications that act as
//! resource sets by containing modules) and segments. Every dispatch over
//! kinds in the resolver is an exhaustive `match` on [`ComponentBody`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Uid;
use crate::error::Error;

/// Kind tag of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Application,
    Module,
    Resource,
    /// Generic resource set: disablement flows downward only.
    ResourceSet,
    /// Disabled when all of its children are disabled.
    ResourceSetAnd,
    /// Disabled when any of its children is disabled.
    ResourceSetOr,
    Segment,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 7] = [
        ComponentKind::Application,
        ComponentKind::Module,
        ComponentKind::Resource,
        ComponentKind::ResourceSet,
        ComponentKind::ResourceSetAnd,
        ComponentKind::ResourceSetOr,
        ComponentKind::Segment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Application => "application",
            ComponentKind::Module => "module",
            ComponentKind::Resource => "resource",
            ComponentKind::ResourceSet => "resource-set",
            ComponentKind::ResourceSetAnd => "resource-set-and",
            ComponentKind::ResourceSetOr => "resource-set-or",
            ComponentKind::Segment => "segment",
        }
    }
}

impl FromStr for ComponentKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownKind {
                kind: s.to_string(),
            })
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a resource set derives its own state from its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetLogic {
    /// Plain containment, no upward derivation.
    Containment,
    And,
    Or,
}

/// Containment edges owned by a segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub segments: Vec<Uid>,
    pub applications: Vec<Uid>,
    pub resources: Vec<Uid>,
    /// Application controlling the segment, if any.
    pub controller: Option<Uid>,
}

/// Kind-specific payload of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentBody {
    /// An application. `Some(contains)` makes it resource-set-like.
    Application { contains: Option<Vec<Uid>> },
    Module,
    Resource,
    ResourceSet { logic: SetLogic, contains: Vec<Uid> },
    Segment(Segment),
}

/// Borrowed view of anything that behaves like a resource set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSetView<'a> {
    pub logic: SetLogic,
    pub contains: &'a [Uid],
}

/// A node of the configuration graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    uid: Uid,
    body: ComponentBody,
}

impl Component {
    pub fn new(uid: impl Into<Uid>, body: ComponentBody) -> Self {
        Self {
            uid: uid.into(),
            body,
        }
    }

    /// A plain application that contains nothing.
    pub fn application(uid: impl Into<Uid>) -> Self {
        Self::new(uid, ComponentBody::Application { contains: None })
    }

    /// An application acting as a resource set over its modules.
    pub fn daq_application<I, U>(uid: impl Into<Uid>, contains: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<Uid>,
    {
        Self::new(
            uid,
            ComponentBody::Application {
                contains: Some(contains.into_iter().map(Into::into).collect()),
            },
        )
    }

    pub fn module(uid: impl Into<Uid>) -> Self {
        Self::new(uid, ComponentBody::Module)
    }

    pub fn resource(uid: impl Into<Uid>) -> Self {
        Self::new(uid, ComponentBody::Resource)
    }

    pub fn resource_set<I, U>(uid: impl Into<Uid>, logic: SetLogic, contains: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<Uid>,
    {
        Self::new(
            uid,
            ComponentBody::ResourceSet {
                logic,
                contains: contains.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn segment(uid: impl Into<Uid>, segment: Segment) -> Self {
        Self::new(uid, ComponentBody::Segment(segment))
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn body(&self) -> &ComponentBody {
        &self.body
    }

    pub fn kind(&self) -> ComponentKind {
        match &self.body {
            ComponentBody::Application { .. } => ComponentKind::Application,
            ComponentBody::Module => ComponentKind::Module,
            ComponentBody::Resource => ComponentKind::Resource,
            ComponentBody::ResourceSet { logic, .. } => match logic {
                SetLogic::Containment => ComponentKind::ResourceSet,
                SetLogic::And => ComponentKind::ResourceSetAnd,
                SetLogic::Or => ComponentKind::ResourceSetOr,
            },
            ComponentBody::Segment(_) => ComponentKind::Segment,
        }
    }

    /// Returns the resource-set view if this component aggregates resources.
    pub fn as_resource_set(&self) -> Option<ResourceSetView<'_>> {
        match &self.body {
            ComponentBody::ResourceSet { logic, contains } => Some(ResourceSetView {
                logic: *logic,
                contains,
            }),
            ComponentBody::Application {
                contains: Some(contains),
            } => Some(ResourceSetView {
                logic: SetLogic::Containment,
                contains,
            }),
            ComponentBody::Application { contains: None }
            | ComponentBody::Module
            | ComponentBody::Resource
            | ComponentBody::Segment(_) => None,
        }
    }

    pub fn as_segment(&self) -> Option<&Segment> {
        match &self.body {
            ComponentBody::Segment(segment) => Some(segment),
            _ => None,
        }
    }

    pub fn is_segment(&self) -> bool {
        self.as_segment().is_some()
    }

    /// Every outgoing containment edge, in configuration order.
    ///
    /// For segments this is nested segments, applications, resources and
    /// finally the controller.
    pub fn children(&self) -> Vec<&Uid> {
        match &self.body {
            ComponentBody::ResourceSet { contains, .. }
            | ComponentBody::Application {
                contains: Some(contains),
            } => contains.iter().collect(),
            ComponentBody::Segment(segment) => segment
                .segments
                .iter()
                .chain(&segment.applications)
                .chain(&segment.resources)
                .chain(&segment.controller)
                .collect(),
            ComponentBody::Application { contains: None }
            | ComponentBody::Module
            | ComponentBody::Resource => Vec::new(),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.uid, self.kind())
    }
}
