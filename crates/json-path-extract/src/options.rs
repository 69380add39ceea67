//! Engine configuration.

use serde::Deserialize;

/// Options recognized when constructing a [`PathExtract`](crate::PathExtract).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Abort the whole call on the first format or bounds error. When off,
    /// the failing branch yields nothing and evaluation carries on.
    pub strict_on_failure: bool,
    /// Emit a step-by-step `tracing` trace of the walk.
    pub verbose_trace: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            strict_on_failure: true,
            verbose_trace: false,
        }
    }
}

impl ExtractOptions {
    /// Tolerant, quiet options.
    pub fn tolerant() -> Self {
        Self {
            strict_on_failure: false,
            ..Self::default()
        }
    }

    pub fn with_strict_on_failure(mut self, strict: bool) -> Self {
        self.strict_on_failure = strict;
        self
    }

    pub fn with_verbose_trace(mut self, verbose: bool) -> Self {
        self.verbose_trace = verbose;
        self
    }
}
