pub mod verification;

pub use verification::{
    resolve_alias, EmailOtpRequest, PhoneOtpRequest, RequestBody, VerifyEmailRequest,
    VerifyPhoneRequest,
};
