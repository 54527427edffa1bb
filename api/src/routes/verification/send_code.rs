use actix_web::{web, HttpRequest, HttpResponse};

use suvidha_core::domain::Channel;
use suvidha_core::services::VerificationProvider;
use suvidha_shared::MessageResponse;

use crate::dto::{EmailOtpRequest, PhoneOtpRequest, RequestBody};
use crate::handlers::handle_domain_error;
use crate::middleware::RequestIdExt;

use super::AppState;

/// Message returned once the provider has accepted a send request
pub const OTP_SENT_MESSAGE: &str = "OTP sent!";

/// Handler for POST /user/verify/email-otp
///
/// Requests an email code. The address is read from `email`, falling back
/// to `recipient`.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true, "message": "OTP sent!" }
/// ```
///
/// ## Errors
/// - 400 `{ "success": false, "message": "Email required" }`
/// - 500 with the provider's message
pub async fn send_email_otp<P>(
    req: HttpRequest,
    state: web::Data<AppState<P>>,
    body: RequestBody<EmailOtpRequest>,
) -> HttpResponse
where
    P: VerificationProvider + ?Sized + 'static,
{
    let target = body.into_inner().target();
    send_code(&req, &state, &target, Channel::Email).await
}

/// Handler for POST /user/verify/phone-otp
///
/// Requests an SMS code. The number is read from `phoneNumber`, falling
/// back to `phone`; numbers without a leading `+` get the default country
/// code.
pub async fn send_phone_otp<P>(
    req: HttpRequest,
    state: web::Data<AppState<P>>,
    body: RequestBody<PhoneOtpRequest>,
) -> HttpResponse
where
    P: VerificationProvider + ?Sized + 'static,
{
    let target = body.into_inner().target();
    send_code(&req, &state, &target, Channel::Sms).await
}

async fn send_code<P>(
    req: &HttpRequest,
    state: &AppState<P>,
    target: &str,
    channel: Channel,
) -> HttpResponse
where
    P: VerificationProvider + ?Sized,
{
    let request_id = req.request_id();

    tracing::info!(
        request_id = %request_id,
        channel = %channel,
        event = "otp_send_requested",
        "Processing send code request"
    );

    match state
        .verification_service
        .send_verification_code(target, channel)
        .await
    {
        Ok(result) => {
            tracing::info!(
                request_id = %request_id,
                channel = %result.channel,
                provider_reference = result.provider_reference.as_deref().unwrap_or("-"),
                "Verification code sent"
            );
            HttpResponse::Ok().json(MessageResponse::ok(OTP_SENT_MESSAGE))
        }
        Err(error) => handle_domain_error(&error, &request_id),
    }
}
