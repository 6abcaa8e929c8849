//! Library error types.

use thiserror::Error;

/// Kind of entity a builder manages, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    ContentType,
    Taxonomy,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::ContentType => f.write_str("content type"),
            EntityKind::Taxonomy => f.write_str("taxonomy"),
        }
    }
}

/// Registration errors.
///
/// All three library failures surface synchronously at finalize time;
/// nothing is retried and no platform state is mutated on the error
/// paths.
#[derive(Debug, Error)]
pub enum RegistroError {
    /// Create-mode finalize found the name already registered.
    #[error("{kind} \"{name}\" is already registered")]
    AlreadyExists { kind: EntityKind, name: String },

    /// Extend-mode finalize found nothing registered under the name.
    #[error("{kind} \"{name}\" is not registered")]
    NotFound { kind: EntityKind, name: String },

    /// finalize was invoked a second time on one builder.
    #[error("\"{name}\" was already finalized")]
    AlreadyFinalized { name: String },

    /// The platform adapter reported a failure.
    #[error("platform error")]
    Platform(#[from] anyhow::Error),
}

/// Result type alias using RegistroError.
pub type RegistroResult<T> = Result<T, RegistroError>;
