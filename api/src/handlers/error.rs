//! Mapping of gateway and extractor failures onto HTTP responses
//!
//! Every failure leaves the API as `{ "success": false, "message": ... }`.
//! Validation problems answer 400; anything from the upstream provider
//! answers 500 with the provider's message passed through unchanged.

use actix_web::error::{InternalError, JsonPayloadError, UrlencodedError};
use actix_web::{HttpRequest, HttpResponse};

use suvidha_core::errors::DomainError;
use suvidha_shared::ErrorResponse;

use crate::middleware::RequestIdExt;

/// Convert a gateway error into its HTTP response
pub fn handle_domain_error(error: &DomainError, request_id: &str) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            tracing::warn!(
                request_id = %request_id,
                error = %message,
                event = "request_rejected",
                "Rejected verification request"
            );
            HttpResponse::BadRequest().json(ErrorResponse::new(message.as_str()))
        }
        DomainError::Upstream { message } => {
            tracing::error!(
                request_id = %request_id,
                error = %message,
                event = "upstream_failure",
                "Verification provider call failed"
            );
            HttpResponse::InternalServerError().json(ErrorResponse::new(message.as_str()))
        }
    }
}

/// Malformed or oversized JSON bodies become a 400 envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    payload_error(err, req)
}

/// Malformed or oversized form bodies become a 400 envelope
pub fn form_error_handler(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    payload_error(err, req)
}

fn payload_error<E>(err: E, req: &HttpRequest) -> actix_web::Error
where
    E: std::fmt::Display + std::fmt::Debug + 'static,
{
    let message = err.to_string();
    tracing::debug!(
        request_id = %req.request_id(),
        path = %req.path(),
        error = %message,
        "Request body could not be parsed"
    );
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(message));
    InternalError::from_response(err, response).into()
}

/// Default handler for unmatched routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Not found"))
}
