use thiserror::Error;

/// Error contract shared by the folder/document use cases.
///
/// Existence and ownership are distinct failures: an id that resolves to no
/// row is `NotFound`, a row owned by another user is `Forbidden`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} belongs to another user")]
    Forbidden(String),

    #[error("storage backend failure")]
    Storage(#[source] anyhow::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn forbidden(what: impl Into<String>) -> Self {
        Self::Forbidden(what.into())
    }
}
