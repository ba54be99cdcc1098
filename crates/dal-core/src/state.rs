//! Per-session disabled-state cache

use std::collections::HashSet;

use dal_model::Uid;

use crate::overrides::SessionOverrides;

/// Explicit overrides plus the lazily computed disabled set.
///
/// `disabled` is `None` until the next state query rebuilds it. Resets and
/// configuration notifications only drop the computed set; the overrides
/// are caller intent and survive them.
#[derive(Debug, Clone, Default)]
pub struct DisabledState {
    overrides: SessionOverrides,
    disabled: Option<HashSet<Uid>>,
}

impl DisabledState {
    pub fn overrides(&self) -> &SessionOverrides {
        &self.overrides
    }

    pub fn overrides_mut(&mut self) -> &mut SessionOverrides {
        &mut self.overrides
    }

    pub fn computed(&self) -> Option<&HashSet<Uid>> {
        self.disabled.as_ref()
    }

    pub fn store(&mut self, disabled: HashSet<Uid>) {
        self.disabled = Some(disabled);
    }

    /// Drop the computed set, keeping the overrides.
    pub fn reset(&mut self) {
        self.disabled = None;
    }

    /// Membership in the computed set; `false` while uncomputed.
    pub fn contains(&self, uid: &Uid) -> bool {
        self.disabled.as_ref().is_some_and(|set| set.contains(uid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_keeps_overrides() {
        let mut state = DisabledState::default();
        state.overrides_mut().replace_disabled(["a"]);
        state.store(HashSet::from([Uid::from("a")]));
        assert!(state.contains(&"a".into()));

        state.reset();
        assert!(state.computed().is_none());
        assert!(!state.contains(&"a".into()));
        assert!(state.overrides().is_user_disabled(&"a".into()));
    }
}
