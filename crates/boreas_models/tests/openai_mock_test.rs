// Tests using MockTextGenerator.
//
// These tests validate TextGenerator behavior without making real API calls,
// using a mock implementation for fast, deterministic testing.

mod test_utils;

use boreas_error::ModelsErrorKind;
use boreas_interface::TextGenerator;
use test_utils::{MockReply, MockTextGenerator, create_test_request};

#[tokio::test]
async fn test_mock_basic_generate() -> anyhow::Result<()> {
    let mock = MockTextGenerator::new_success("Hello from mock!");

    let request = create_test_request("Say hello", Some(10));
    let response = mock.generate(&request).await?;

    assert_eq!(response.text(), "Hello from mock!");
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_mock_multiple_requests() -> anyhow::Result<()> {
    let mock = MockTextGenerator::new_success("Response");
    let request = create_test_request("Test", Some(10));

    let _response1 = mock.generate(&request).await?;
    assert_eq!(mock.call_count(), 1);

    let _response2 = mock.generate(&request).await?;
    assert_eq!(mock.call_count(), 2);

    let _response3 = mock.generate(&request).await?;
    assert_eq!(mock.call_count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_mock_api_error() -> anyhow::Result<()> {
    let mock = MockTextGenerator::new_error(ModelsErrorKind::Api {
        status: 503,
        message: "Model is overloaded".to_string(),
    });

    let request = create_test_request("Test", Some(10));
    let result = mock.generate(&request).await;
    assert!(result.is_err());
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_mock_rate_limit_error() -> anyhow::Result<()> {
    let mock = MockTextGenerator::new_error(ModelsErrorKind::Api {
        status: 429,
        message: "Rate limit exceeded".to_string(),
    });

    let request = create_test_request("Test", Some(10));
    assert!(mock.generate(&request).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_mock_sequence_mixed_responses() -> anyhow::Result<()> {
    let mock = MockTextGenerator::new_sequence(vec![
        MockReply::Success("First response".to_string()),
        MockReply::Error(ModelsErrorKind::Api {
            status: 503,
            message: "Temporary error".to_string(),
        }),
        MockReply::Success("Third response".to_string()),
    ]);

    let request = create_test_request("Test", Some(10));

    // First succeeds
    let response1 = mock.generate(&request).await?;
    assert_eq!(response1.text(), "First response");

    // Second fails
    assert!(mock.generate(&request).await.is_err());

    // Third succeeds
    let response3 = mock.generate(&request).await?;
    assert_eq!(response3.text(), "Third response");

    assert_eq!(mock.call_count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_mock_provider_name() {
    let mock = MockTextGenerator::new_success("test");
    assert_eq!(mock.provider_name(), "mock");
}

#[tokio::test]
async fn test_mock_model_name() {
    let mock = MockTextGenerator::new_success("test");
    assert_eq!(mock.model_name(), "mock-model");
}
