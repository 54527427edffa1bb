//! Common utility functions

pub mod email;
pub mod phone;

pub use email::*;
pub use phone::*;

/// Mask a provider recipient for logging, whichever channel it belongs to
pub fn mask_recipient(to: &str) -> String {
    if to.contains('@') {
        mask_email(to)
    } else {
        mask_phone_number(to)
    }
}
