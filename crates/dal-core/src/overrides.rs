//! Explicit caller overrides of the configured disabled list

use std::collections::BTreeSet;

use dal_model::Uid;

/// Session-scoped user overrides.
///
/// User-disabled components are always disabled. User-enabled components
/// only cancel the session's configured disabled list; they never cancel a
/// user disable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOverrides {
    user_disabled: BTreeSet<Uid>,
    user_enabled: BTreeSet<Uid>,
    num_slr_disabled: usize,
    num_slr_enabled: usize,
}

impl SessionOverrides {
    /// Replace the user-disabled set wholesale.
    pub fn replace_disabled<I, U>(&mut self, components: I)
    where
        I: IntoIterator<Item = U>,
        U: Into<Uid>,
    {
        self.user_disabled = components.into_iter().map(Into::into).collect();
        self.num_slr_disabled = self.user_disabled.len();
    }

    /// Replace the user-enabled set wholesale.
    pub fn replace_enabled<I, U>(&mut self, components: I)
    where
        I: IntoIterator<Item = U>,
        U: Into<Uid>,
    {
        self.user_enabled = components.into_iter().map(Into::into).collect();
        self.num_slr_enabled = self.user_enabled.len();
    }

    pub fn user_disabled(&self) -> &BTreeSet<Uid> {
        &self.user_disabled
    }

    pub fn user_enabled(&self) -> &BTreeSet<Uid> {
        &self.user_enabled
    }

    pub fn is_user_disabled(&self, uid: &Uid) -> bool {
        self.user_disabled.contains(uid)
    }

    pub fn is_user_enabled(&self, uid: &Uid) -> bool {
        self.user_enabled.contains(uid)
    }

    /// Number of user-disabled plus user-enabled overrides.
    pub fn count(&self) -> usize {
        self.num_slr_disabled + self.num_slr_enabled
    }
}
