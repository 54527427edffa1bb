pub mod cors;
pub mod request_id;

pub use cors::create_cors;
pub use request_id::{RequestIdExt, RequestIdRootSpan, REQUEST_ID_HEADER};
