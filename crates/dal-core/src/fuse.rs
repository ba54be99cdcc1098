//! Recursion fuse for graph walks.
//!
//! Every recursive descent over the component graph enters each visited
//! node through [`CycleGuard::enter`]. The returned [`FuseScope`] pops the
//! node when it goes out of scope, so early returns and `?` propagation
//! keep the stack balanced. Once the stack holds `limit` objects the next
//! entry fails with [`Error::CircularDependency`], which turns a cyclic
//! configuration into a reported error instead of unbounded recursion.
//!
//! ```
//! use dal_core::CycleGuard;
//! use dal_model::Uid;
//!
//! let mut fuse = CycleGuard::with_limit("example", &Uid::from("session"), 3);
//! {
//!     let mut scope = fuse.enter(&Uid::from("a")).unwrap();
//!     let _inner = scope.enter(&Uid::from("b")).unwrap();
//! }
//! assert_eq!(fuse.depth(), 1);
//! ```

use std::ops::{Deref, DerefMut};

use dal_model::{DEFAULT_FUSE_DEPTH, Uid};

use crate::error::{Error, Result};

/// Bounded stack of the objects currently being visited.
#[derive(Debug, Clone)]
pub struct CycleGuard {
    goal: String,
    limit: usize,
    stack: Vec<Uid>,
}

impl CycleGuard {
    /// Create a fuse with the default depth limit. `root` is the first
    /// stacked object (usually the session).
    pub fn new(goal: impl Into<String>, root: &Uid) -> Self {
        Self::with_limit(goal, root, DEFAULT_FUSE_DEPTH)
    }

    pub fn with_limit(goal: impl Into<String>, root: &Uid, limit: usize) -> Self {
        let mut stack = Vec::with_capacity(limit.clamp(1, DEFAULT_FUSE_DEPTH));
        stack.push(root.clone());
        Self {
            goal: goal.into(),
            limit,
            stack,
        }
    }

    /// Record `uid` on the stack.
    ///
    /// # Errors
    ///
    /// Returns `Error::CircularDependency` carrying the goal and every
    /// stacked object when the stack is full.
    pub fn push(&mut self, uid: &Uid) -> Result<()> {
        if self.stack.len() < self.limit {
            self.stack.push(uid.clone());
            Ok(())
        } else {
            Err(Error::CircularDependency {
                goal: self.goal.clone(),
                limit: self.limit,
                path: self.stack.clone(),
            })
        }
    }

    /// Remove the most recently pushed object.
    pub fn pop(&mut self) -> Option<Uid> {
        self.stack.pop()
    }

    /// Push `uid` and return a scope that pops it on drop.
    pub fn enter(&mut self, uid: &Uid) -> Result<FuseScope<'_>> {
        self.push(uid)?;
        Ok(FuseScope { guard: self })
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn path(&self) -> &[Uid] {
        &self.stack
    }
}

/// Scoped entry on a [`CycleGuard`]; dereferences to the guard so nested
/// walks can keep entering through it.
#[derive(Debug)]
pub struct FuseScope<'a> {
    guard: &'a mut CycleGuard,
}

impl Deref for FuseScope<'_> {
    type Target = CycleGuard;

    fn deref(&self) -> &CycleGuard {
        self.guard
    }
}

impl DerefMut for FuseScope<'_> {
    fn deref_mut(&mut self) -> &mut CycleGuard {
        self.guard
    }
}

impl Drop for FuseScope<'_> {
    fn drop(&mut self) {
        self.guard.pop();
    }
}
