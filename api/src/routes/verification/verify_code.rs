use actix_web::{web, HttpRequest, HttpResponse};

use suvidha_core::domain::Channel;
use suvidha_core::services::VerificationProvider;
use suvidha_shared::VerifiedResponse;

use crate::dto::{RequestBody, VerifyEmailRequest, VerifyPhoneRequest};
use crate::handlers::handle_domain_error;
use crate::middleware::RequestIdExt;

use super::AppState;

/// Handler for POST /user/verify/verify-email
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "otp": "123456" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true, "verified": true }
/// ```
///
/// A wrong or expired code is still a 200, with both flags `false`.
pub async fn verify_email<P>(
    req: HttpRequest,
    state: web::Data<AppState<P>>,
    body: RequestBody<VerifyEmailRequest>,
) -> HttpResponse
where
    P: VerificationProvider + ?Sized + 'static,
{
    let request = body.into_inner();
    verify_code(&req, &state, &request.target(), request.code(), Channel::Email).await
}

/// Handler for POST /user/verify/verify-phone
pub async fn verify_phone<P>(
    req: HttpRequest,
    state: web::Data<AppState<P>>,
    body: RequestBody<VerifyPhoneRequest>,
) -> HttpResponse
where
    P: VerificationProvider + ?Sized + 'static,
{
    let request = body.into_inner();
    verify_code(&req, &state, &request.target(), request.code(), Channel::Sms).await
}

async fn verify_code<P>(
    req: &HttpRequest,
    state: &AppState<P>,
    target: &str,
    code: &str,
    channel: Channel,
) -> HttpResponse
where
    P: VerificationProvider + ?Sized,
{
    let request_id = req.request_id();

    tracing::info!(
        request_id = %request_id,
        channel = %channel,
        event = "otp_check_requested",
        "Processing verify code request"
    );

    match state
        .verification_service
        .verify_code(target, channel, code)
        .await
    {
        Ok(result) => {
            tracing::info!(
                request_id = %request_id,
                channel = %channel,
                approved = result.approved,
                status = %result.status,
                "Verification code checked"
            );
            HttpResponse::Ok().json(VerifiedResponse::from_approval(result.approved))
        }
        Err(error) => handle_domain_error(&error, &request_id),
    }
}
