use suvidha_shared::config::VerificationConfig;

use crate::verify::create_verification_provider_from_lookup;
use crate::InfrastructureError;

fn config(provider: &str) -> VerificationConfig {
    VerificationConfig {
        provider: provider.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_mock_provider_needs_no_credentials() {
    let provider = create_verification_provider_from_lookup(&config("mock"), |_| None).unwrap();
    assert_eq!(provider.provider_name(), "Mock");
}

#[test]
fn test_twilio_provider_from_credentials() {
    let provider = create_verification_provider_from_lookup(&config("twilio"), |key| match key {
        "TWILIO_ACCOUNT_SID" => Some("ACtest".to_string()),
        "TWILIO_AUTH_TOKEN" => Some("token".to_string()),
        "TWILIO_VERIFY_SERVICE_SID" => Some("VAtest".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(provider.provider_name(), "Twilio");
}

#[test]
fn test_twilio_provider_without_credentials_fails() {
    let result = create_verification_provider_from_lookup(&config("twilio"), |_| None);
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_unknown_provider_fails() {
    match create_verification_provider_from_lookup(&config("carrier-pigeon"), |_| None) {
        Err(InfrastructureError::Config(message)) => {
            assert!(message.contains("carrier-pigeon"));
        }
        Err(other) => panic!("Expected config error, got {:?}", other),
        Ok(_) => panic!("Expected config error"),
    }
}
