//! Application services sitting between HTTP handlers and repositories.
//!
//! Services are plain functions generic over the repository traits they need,
//! so they can be exercised against in-memory fakes.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod event_centres;
pub mod events;
pub mod tickets;

/// Errors surfaced to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("invalid submission: {0}")]
    Form(String),
    #[error("invalid value: {0}")]
    TypeConstraint(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("internal error")]
    Internal,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => ServiceError::NotFound(what.to_string()),
            RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            other if other.is_infrastructure() => {
                log::error!("Repository failure: {other}");
                ServiceError::Internal
            }
            other => {
                log::warn!("Stored data rejected: {other}");
                ServiceError::Internal
            }
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
