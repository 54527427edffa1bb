//! Application wiring
//!
//! Registers state, body limits, the health check and the verification
//! routes. Middleware and the fallback handler are attached by the caller
//! so the same wiring serves both `main` and the route tests.

use actix_web::{web, HttpResponse};

use suvidha_core::services::VerificationProvider;
use suvidha_shared::HealthResponse;

use crate::handlers::{form_error_handler, json_error_handler};
use crate::routes::verification;
use crate::routes::AppState;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "suvidha-verify-api";

/// Build the service configuration for an `App`
pub fn configure<P>(
    state: web::Data<AppState<P>>,
    max_payload_size: usize,
) -> impl FnOnce(&mut web::ServiceConfig)
where
    P: VerificationProvider + ?Sized + 'static,
{
    move |cfg| {
        cfg.app_data(state)
            .app_data(
                web::JsonConfig::default()
                    .limit(max_payload_size)
                    .error_handler(json_error_handler),
            )
            .app_data(
                web::FormConfig::default()
                    .limit(max_payload_size)
                    .error_handler(form_error_handler),
            )
            .route("/health", web::get().to(health_check))
            .service(web::scope("/user/verify").configure(verification::configure::<P>));
    }
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
    ))
}
