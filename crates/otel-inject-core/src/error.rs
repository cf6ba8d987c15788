//! Error types for the injection engine
//!
//! Configuration errors abort the admission decision for the whole pod; a
//! variable that is already present on a container is a silent no-op, never
//! an error.

use crate::language::Language;
use thiserror::Error;

/// Errors surfaced to the caller as an admission rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InjectError {
    /// A language was requested but its runtime configuration carries no
    /// usable image reference.
    #[error("{language} instrumentation does not specify an image")]
    MissingImage { language: Language },
}

impl InjectError {
    /// Create a missing-image error for the given language.
    pub fn missing_image(language: Language) -> Self {
        InjectError::MissingImage { language }
    }
}

/// Result type alias for injection operations.
pub type InjectResult<T> = std::result::Result<T, InjectError>;
