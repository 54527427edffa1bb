//! Unit tests for verification providers

mod create_provider_tests;
mod mock_verify_tests;
