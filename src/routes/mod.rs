//! Actix handlers for the `/api/v1` JSON endpoints.

use actix_web::HttpResponse;
use serde::Serialize;

use crate::services::ServiceError;

pub mod event_centres;
pub mod events;
pub mod tickets;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps a service failure onto its HTTP status with a JSON error body.
pub fn error_response(err: ServiceError) -> HttpResponse {
    let body = ErrorBody {
        error: err.to_string(),
    };
    match err {
        ServiceError::NotFound(_) => HttpResponse::NotFound().json(body),
        ServiceError::Form(_) | ServiceError::TypeConstraint(_) => {
            HttpResponse::BadRequest().json(body)
        }
        ServiceError::Conflict(_) => HttpResponse::Conflict().json(body),
        ServiceError::Internal => HttpResponse::InternalServerError().json(body),
    }
}
