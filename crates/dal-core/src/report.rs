//! Values that carry non-fatal diagnostics
//!
//! The resolver degrades instead of failing: a malformed subtree or a
//! non-converging AND/OR chain still yields a best-effort answer. The
//! conditions are attached to the answer so callers can inspect them.

use crate::Error;

/// A value together with the errors reported while computing it.
#[derive(Debug)]
#[must_use]
pub struct Report<T> {
    pub value: T,
    pub warnings: Vec<Error>,
}

impl<T> Report<T> {
    /// Create a report with no warnings
    pub fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Create a report carrying a single warning
    pub fn with_warning(value: T, warning: Error) -> Self {
        Self {
            value,
            warnings: vec![warning],
        }
    }

    pub fn warn(&mut self, warning: Error) {
        self.warnings.push(warning);
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Report<U> {
        Report {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    /// Merge another report's warnings into this one and return its value.
    pub fn absorb<U>(&mut self, other: Report<U>) -> U {
        self.warnings.extend(other.warnings);
        other.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Log every warning and return the value.
    pub fn log_warnings(self) -> T {
        for warning in &self.warnings {
            tracing::error!("{warning}");
        }
        self.value
    }
}
