//! Resolver limits carried by a graph file
//!
//! Both limits bound the work done on malformed graphs. Well-formed
//! configurations never come close to either of them.

use serde::{Deserialize, Serialize};

/// Maximum nesting depth of a recursive graph walk before it is treated as
/// a circular dependency.
pub const DEFAULT_FUSE_DEPTH: usize = 64;

/// Maximum number of AND/OR auto-disabling passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Limits applied by the disabled-state resolver and the parent-path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    #[serde(default = "default_fuse_depth")]
    pub fuse_depth: usize,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_fuse_depth() -> usize {
    DEFAULT_FUSE_DEPTH
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            fuse_depth: default_fuse_depth(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl ResolverSettings {
    pub fn with_fuse_depth(mut self, depth: usize) -> Self {
        self.fuse_depth = depth;
        self
    }

    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ResolverSettings::default();
        assert_eq!(settings.fuse_depth, 64);
        assert_eq!(settings.max_iterations, 1000);
    }

    #[test]
    fn test_partial_table_uses_defaults() {
        let settings: ResolverSettings = toml::from_str("max_iterations = 5").unwrap();
        assert_eq!(settings.fuse_depth, DEFAULT_FUSE_DEPTH);
        assert_eq!(settings.max_iterations, 5);
    }
}
