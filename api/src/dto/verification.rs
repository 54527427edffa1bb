//! Request bodies for the verification endpoints
//!
//! Each target can arrive under either of two field names. The DTOs keep
//! both and resolve them into one canonical target before the gateway sees
//! it.

use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::web::{Form, Json};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body accepted as JSON or as `application/x-www-form-urlencoded`
///
/// The `Content-Type` header picks the parser. A request without one is
/// read as an empty object, so a missing target still surfaces as the
/// usual "... required" message.
#[derive(Debug)]
pub struct RequestBody<T>(pub T);

impl<T> RequestBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for RequestBody<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match req.content_type() {
            "" => Box::pin(async { Ok(RequestBody(T::default())) }),
            FORM_CONTENT_TYPE => {
                let form = Form::<T>::from_request(req, payload);
                Box::pin(async move { form.await.map(|form| RequestBody(form.into_inner())) })
            }
            _ => {
                let json = Json::<T>::from_request(req, payload);
                Box::pin(async move { json.await.map(|json| RequestBody(json.into_inner())) })
            }
        }
    }
}

/// First alias holding a non-empty string, trimmed; empty when none does
///
/// Emptiness is judged before trimming, so a whitespace-only first alias
/// wins and resolves to an empty target.
pub fn resolve_alias(candidates: &[Option<&String>]) -> String {
    candidates
        .iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Body of `POST /user/verify/email-otp`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailOtpRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
}

impl EmailOtpRequest {
    pub fn target(&self) -> String {
        resolve_alias(&[self.email.as_ref(), self.recipient.as_ref()])
    }
}

/// Body of `POST /user/verify/verify-email`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default)]
    pub otp: Option<String>,
}

impl VerifyEmailRequest {
    pub fn target(&self) -> String {
        resolve_alias(&[self.email.as_ref(), self.recipient.as_ref()])
    }

    /// The submitted code, forwarded untouched; missing means empty
    pub fn code(&self) -> &str {
        self.otp.as_deref().unwrap_or_default()
    }
}

/// Body of `POST /user/verify/phone-otp`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhoneOtpRequest {
    #[serde(default, rename = "phoneNumber")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl PhoneOtpRequest {
    pub fn target(&self) -> String {
        resolve_alias(&[self.phone_number.as_ref(), self.phone.as_ref()])
    }
}

/// Body of `POST /user/verify/verify-phone`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyPhoneRequest {
    #[serde(default, rename = "phoneNumber")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub otp: Option<String>,
}

impl VerifyPhoneRequest {
    pub fn target(&self) -> String {
        resolve_alias(&[self.phone_number.as_ref(), self.phone.as_ref()])
    }

    pub fn code(&self) -> &str {
        self.otp.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use serde_json::json;

    #[actix_rt::test]
    async fn test_body_without_content_type_is_empty_request() {
        let (req, mut payload) = TestRequest::post().to_http_parts();
        let body = RequestBody::<EmailOtpRequest>::from_request(&req, &mut payload)
            .await
            .unwrap();
        assert_eq!(body.into_inner().target(), "");
    }

    #[actix_rt::test]
    async fn test_form_body_is_parsed_as_form() {
        let (req, mut payload) = TestRequest::post()
            .set_form([("phone", "9876543210"), ("otp", "123456")])
            .to_http_parts();
        let request = RequestBody::<VerifyPhoneRequest>::from_request(&req, &mut payload)
            .await
            .unwrap()
            .into_inner();
        assert_eq!(request.target(), "9876543210");
        assert_eq!(request.code(), "123456");
    }

    #[actix_rt::test]
    async fn test_json_body_is_parsed_as_json() {
        let (req, mut payload) = TestRequest::post()
            .set_json(json!({ "email": "user@example.com" }))
            .to_http_parts();
        let request = RequestBody::<EmailOtpRequest>::from_request(&req, &mut payload)
            .await
            .unwrap()
            .into_inner();
        assert_eq!(request.target(), "user@example.com");
    }

    #[test]
    fn test_resolve_alias_prefers_first_non_empty() {
        let email = "a@example.com".to_string();
        let recipient = "b@example.com".to_string();
        let empty = String::new();

        assert_eq!(resolve_alias(&[Some(&email), Some(&recipient)]), "a@example.com");
        assert_eq!(resolve_alias(&[Some(&empty), Some(&recipient)]), "b@example.com");
        assert_eq!(resolve_alias(&[None, Some(&recipient)]), "b@example.com");
        assert_eq!(resolve_alias(&[None, None]), "");
    }

    #[test]
    fn test_whitespace_alias_wins_and_trims_to_empty() {
        let blank = "   ".to_string();
        let recipient = "b@example.com".to_string();
        assert_eq!(resolve_alias(&[Some(&blank), Some(&recipient)]), "");
    }

    #[test]
    fn test_phone_request_reads_camel_case_alias() {
        let request: PhoneOtpRequest =
            serde_json::from_value(json!({ "phoneNumber": " 9876543210 " })).unwrap();
        assert_eq!(request.target(), "9876543210");

        let request: PhoneOtpRequest =
            serde_json::from_value(json!({ "phone": "+14155551234" })).unwrap();
        assert_eq!(request.target(), "+14155551234");
    }

    #[test]
    fn test_verify_request_missing_otp_is_empty_code() {
        let request: VerifyEmailRequest =
            serde_json::from_value(json!({ "recipient": "user@example.com" })).unwrap();
        assert_eq!(request.target(), "user@example.com");
        assert_eq!(request.code(), "");
    }

    #[test]
    fn test_null_fields_are_absent() {
        let request: VerifyPhoneRequest = serde_json::from_value(
            json!({ "phoneNumber": null, "phone": "9876543210", "otp": "123456" }),
        )
        .unwrap();
        assert_eq!(request.target(), "9876543210");
        assert_eq!(request.code(), "123456");
    }
}
