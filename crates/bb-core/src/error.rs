//! Error type for directive parsing and loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("unknown destination kind {0:?}: expected \"bot\" or \"output\"")]
    UnknownTargetKind(String),

    #[error("line {line}: {source}")]
    Line {
        line:   usize,
        #[source]
        source: Box<CoreError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `bb-core`.
pub type CoreResult<T> = Result<T, CoreError>;
