use std::sync::{Arc, Mutex};

use suvidha_core::domain::Channel;
use suvidha_core::services::verification::VerificationProvider;

use crate::verify::mock_verify::{MockVerificationProvider, NOT_FOUND_MESSAGE};

#[tokio::test]
async fn test_random_codes_are_six_digits() {
    let provider = MockVerificationProvider::new();

    let created = provider
        .create_verification("+919876543210", Channel::Sms)
        .await
        .unwrap();
    assert_eq!(created.status, "pending");
    assert!(created.sid.is_some());

    let code = provider.outstanding_code("+919876543210").await.unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_matching_code_is_approved_once() {
    let provider = MockVerificationProvider::with_fixed_code("123456");
    provider
        .create_verification("user@example.com", Channel::Email)
        .await
        .unwrap();

    let wrong = provider
        .check_verification("user@example.com", "000000")
        .await
        .unwrap();
    assert_eq!(wrong.status, "pending");

    let right = provider
        .check_verification("user@example.com", "123456")
        .await
        .unwrap();
    assert_eq!(right.status, "approved");

    let replay = provider
        .check_verification("user@example.com", "123456")
        .await
        .unwrap_err();
    assert_eq!(replay.message, NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn test_new_code_replaces_previous_one() {
    let provider = MockVerificationProvider::with_fixed_code("111111");
    provider
        .create_verification("+14155551234", Channel::Sms)
        .await
        .unwrap();
    assert_eq!(
        provider.outstanding_code("+14155551234").await.as_deref(),
        Some("111111")
    );
    assert_eq!(provider.outstanding_code("+10000000000").await, None);
    assert_eq!(provider.provider_name(), "Mock");
}

/// Collects formatted log output in memory
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_issued_code_is_logged_with_masked_target() {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let provider = MockVerificationProvider::with_fixed_code("246810");
    provider
        .create_verification("+919876543210", Channel::Sms)
        .await
        .unwrap();

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("target_masked=+91****3210"), "{}", output);
    assert!(output.contains("code=246810"), "{}", output);
    assert!(!output.contains("+919876543210"), "{}", output);
}
