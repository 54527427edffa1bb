use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpRequest};
use tracing::Span;
use tracing_actix_web::{DefaultRootSpanBuilder, RequestId, RootSpanBuilder};
use uuid::Uuid;

/// Header clients may use to supply their own correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Id generated for a request seen without `TracingLogger` or a header
#[derive(Clone)]
struct FallbackRequestId(String);

/// Request id lookup for handlers
pub trait RequestIdExt {
    /// The caller's `X-Request-ID`, else the id `TracingLogger` assigned
    ///
    /// Repeated calls on the same request return the same id.
    fn request_id(&self) -> String;
}

impl RequestIdExt for HttpRequest {
    fn request_id(&self) -> String {
        if let Some(id) = client_request_id(self) {
            return id.to_string();
        }
        if let Some(id) = self.extensions().get::<RequestId>() {
            return id.to_string();
        }
        if let Some(id) = self.extensions().get::<FallbackRequestId>() {
            return id.0.clone();
        }

        let id = Uuid::new_v4().to_string();
        self.extensions_mut().insert(FallbackRequestId(id.clone()));
        id
    }
}

fn client_request_id<R: HttpMessage>(req: &R) -> Option<&str> {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Root span that also records the caller's `X-Request-ID`
pub struct RequestIdRootSpan;

impl RootSpanBuilder for RequestIdRootSpan {
    fn on_request_start(request: &ServiceRequest) -> Span {
        let client_request_id = client_request_id(request).unwrap_or("");
        tracing_actix_web::root_span!(request, client_request_id)
    }

    fn on_request_end<B: MessageBody>(span: Span, outcome: &Result<ServiceResponse<B>, Error>) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_uses_supplied_header() {
        let req = TestRequest::default()
            .insert_header((REQUEST_ID_HEADER, "abc-123"))
            .to_http_request();
        assert_eq!(req.request_id(), "abc-123");
    }

    #[test]
    fn test_generates_uuid_when_missing() {
        let req = TestRequest::default().to_http_request();
        let id = req.request_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_generated_id_is_stable_for_one_request() {
        let req = TestRequest::default().to_http_request();
        let first = req.request_id();
        let again = req.clone().request_id();
        assert_eq!(first, again);

        let other = TestRequest::default().to_http_request();
        assert_ne!(other.request_id(), first);
    }
}
