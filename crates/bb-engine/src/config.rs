//! Engine configuration.

use crate::{EngineError, EngineResult};

/// Default cap on cascade depth; far deeper than any acyclic factory needs.
pub const DEFAULT_MAX_CASCADE_DEPTH: u32 = 10_000;

/// Tunables for an [`Engine`][crate::Engine].
///
/// Typically built in code, or loaded from a file by the application crate
/// with the `serde` feature enabled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Maximum number of chained fires in one cascade.  A fire deeper than
    /// this aborts the run with [`EngineError::CycleSuspected`].
    pub max_cascade_depth: u32,
}

impl EngineConfig {
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_cascade_depth == 0 {
            return Err(EngineError::Config(
                "max_cascade_depth must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_cascade_depth: DEFAULT_MAX_CASCADE_DEPTH,
        }
    }
}
