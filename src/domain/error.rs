use thiserror::Error;

/// Core domain errors
///
/// Expected conditions (failed validation checks, lookup misses) are
/// represented as return values, not as variants here. These errors cover the
/// storage collaborator and genuinely broken states only.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
