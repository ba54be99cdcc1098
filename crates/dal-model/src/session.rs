//! Session configuration objects

use crate::Uid;

/// Configuration-time view of a session: the roots of every graph walk and
/// the explicit disabled list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub uid: Uid,
    /// Top-level segments.
    pub segments: Vec<Uid>,
    /// Top-level applications.
    pub applications: Vec<Uid>,
    /// Components disabled in the configuration itself.
    pub disabled: Vec<Uid>,
}

impl SessionConfig {
    pub fn new(uid: impl Into<Uid>) -> Self {
        Self {
            uid: uid.into(),
            segments: Vec::new(),
            applications: Vec::new(),
            disabled: Vec::new(),
        }
    }

    /// Every UID referenced by this session.
    pub fn references(&self) -> impl Iterator<Item = &Uid> {
        self.segments
            .iter()
            .chain(&self.applications)
            .chain(&self.disabled)
    }
}
