//! Request bodies accepted by the API and their conversion into domain input.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod event_centres;
pub mod events;
pub mod tickets;

#[derive(Debug, Error)]
/// Errors that can occur when processing submitted data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid value: {0}")]
    Constraint(#[from] TypeConstraintError),
}
