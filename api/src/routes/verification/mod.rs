//! Verification route handlers
//!
//! Four thin endpoints under `/user/verify` that resolve the request body
//! into a target and delegate to the gateway:
//! - `POST /email-otp` and `POST /phone-otp` request a code
//! - `POST /verify-email` and `POST /verify-phone` check a code

pub mod send_code;
pub mod verify_code;

use std::sync::Arc;

use actix_web::web;

use suvidha_core::services::{VerificationProvider, VerificationService};

pub use send_code::{send_email_otp, send_phone_otp};
pub use verify_code::{verify_email, verify_phone};

/// Application state that holds shared services
pub struct AppState<P>
where
    P: VerificationProvider + ?Sized,
{
    pub verification_service: Arc<VerificationService<P>>,
}

impl<P> AppState<P>
where
    P: VerificationProvider + ?Sized,
{
    pub fn new(verification_service: Arc<VerificationService<P>>) -> Self {
        Self {
            verification_service,
        }
    }
}

/// Register the verification endpoints on a scope
pub fn configure<P>(cfg: &mut web::ServiceConfig)
where
    P: VerificationProvider + ?Sized + 'static,
{
    cfg.route("/email-otp", web::post().to(send_email_otp::<P>))
        .route("/verify-email", web::post().to(verify_email::<P>))
        .route("/phone-otp", web::post().to(send_phone_otp::<P>))
        .route("/verify-phone", web::post().to(verify_phone::<P>));
}
