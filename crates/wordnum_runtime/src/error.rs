//! Runtime errors.

use thiserror::Error;

/// Errors raised by the CLI and REPL.
///
/// Parse failures are carried unchanged; the other variants belong to the
/// interactive surface.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The tokens did not form a number.
    #[error(transparent)]
    Parse(#[from] wordnum_foundation::Error),

    /// The terminal could not be read or configured.
    #[error("line editor: {0}")]
    Editor(String),

    /// A command or option was malformed.
    #[error("{0}")]
    Usage(String),

    /// The self-test battery had failures.
    #[error("self-test: {failed} of {total} cases failed")]
    SelfTest {
        /// Cases that did not match.
        failed: usize,
        /// Cases run.
        total: usize,
    },
}

impl RuntimeError {
    /// Creates a usage error.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}

impl From<rustyline::error::ReadlineError> for RuntimeError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        Self::Editor(err.to_string())
    }
}

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
