//! Provider and transport failures surface as errors with a probable cause.

use crate::integration::mock_server::{silent_body, MockServerFixture};
use speak_rs::{Error, TtsClient, TtsOptions};
use std::time::Duration;

#[tokio::test]
async fn test_forbidden_means_bad_token() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_response(403, "").await;

    let err = fixture
        .client()
        .synthesize("Hello world", &TtsOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert!(err.to_string().contains("Bad token or upstream API changes"));
}

#[tokio::test]
async fn test_server_error_is_upstream() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_response(503, "unavailable").await;

    let err = fixture
        .client()
        .synthesize("Hello world", &TtsOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("Upstream API error. Try again later."));
}

#[tokio::test]
async fn test_not_found_on_regional_tld() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_response(404, "").await;

    let err = fixture
        .client()
        .synthesize("Hello world", &TtsOptions::new("en", "co.uk"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Unsupported tld 'co.uk'"));
}

#[tokio::test]
async fn test_missing_audio_with_unchecked_lang() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_response(200, &silent_body()).await;

    let options = TtsOptions::new("xx", "com").with_lang_check(false);
    let err = fixture
        .client()
        .synthesize("Hello world", &options)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(200));
    assert!(err
        .to_string()
        .contains("No audio stream in response. Unsupported language 'xx'"));
}

#[tokio::test]
async fn test_unsupported_lang_never_reaches_provider() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_unreachable().await;

    let err = fixture
        .client()
        .synthesize("Hello world", &TtsOptions::new("xx", "com"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_failed_part_stops_synthesis() {
    let fixture = MockServerFixture::new().await;
    let _first = fixture.mock_audio("a{60}", b"first", 1).await;
    let second = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", speak_rs::tts::rpc::BATCHEXECUTE_PATH)
            .match_body(mockito::Matcher::Regex("b{60}".to_string()))
            .with_status(500)
            .expect(1)
            .create_async()
            .await
    };

    let text = format!("{}, {}", "a".repeat(60), "b".repeat(60));
    let err = fixture
        .client()
        .synthesize(&text, &TtsOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    second.assert_async().await;
}

#[tokio::test]
async fn test_connection_failure() {
    // Nothing listens on port 1.
    let client = TtsClient::builder()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let err = client
        .synthesize("Hello world", &TtsOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err
        .to_string()
        .contains("Failed to connect. Probable cause: Unknown"));

    let err = client
        .synthesize("Hello world", &TtsOptions::new("en", "co.uk"))
        .await
        .unwrap_err();
    assert!(err
        .to_string()
        .contains("Host 'https://translate.google.co.uk/' is not reachable"));
}
