//! Successful synthesis: request shape, part ordering and streaming.

use crate::integration::mock_server::MockServerFixture;
use futures::TryStreamExt;
use speak_rs::TtsOptions;

#[tokio::test]
async fn test_single_part_synthesis() {
    let fixture = MockServerFixture::new().await;
    // "Hello world" in lang "en" at normal speed, as it appears in the encoded form body.
    let mock = fixture
        .mock_audio(r"f\.req=.*Hello\+world.*en.*null.*generic", b"ID3 hello", 1)
        .await;

    let audio = fixture
        .client()
        .synthesize("Hello world", &TtsOptions::new("en", "com"))
        .await
        .expect("synthesis");

    assert_eq!(&audio.data[..], b"ID3 hello");
    assert_eq!(audio.parts, 1);
    assert_eq!(audio.mime_type(), "audio/mpeg");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_long_text_is_sent_in_order() {
    let fixture = MockServerFixture::new().await;
    let first = fixture.mock_audio("a{60}", b"first;", 1).await;
    let second = fixture.mock_audio("b{60}", b"second", 1).await;

    let text = format!("{}, {}", "a".repeat(60), "b".repeat(60));
    let audio = fixture
        .client()
        .synthesize(&text, &TtsOptions::default())
        .await
        .expect("synthesis");

    assert_eq!(&audio.data[..], b"first;second");
    assert_eq!(audio.parts, 2);
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_stream_yields_each_part() {
    let fixture = MockServerFixture::new().await;
    let _first = fixture.mock_audio("a{60}", b"one", 1).await;
    let _second = fixture.mock_audio("b{60}", b"two", 1).await;

    let client = fixture.client();
    let text = format!("{}. {}", "a".repeat(60), "b".repeat(60));
    let parts: Vec<_> = client
        .stream(&text, &TtsOptions::default())
        .expect("valid request")
        .try_collect()
        .await
        .expect("stream");

    assert_eq!(parts.len(), 2);
    assert_eq!(&parts[0][..], b"one");
    assert_eq!(&parts[1][..], b"two");
}

#[tokio::test]
async fn test_slow_speed_is_requested() {
    let fixture = MockServerFixture::new().await;
    // The speed slot holds `true` instead of `null`.
    let mock = fixture.mock_audio(r"%5C%22en%5C%22%2Ctrue", b"ID3", 1).await;

    fixture
        .client()
        .synthesize("Hello", &TtsOptions::new("en", "com").with_slow(true))
        .await
        .expect("synthesis");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_deprecated_lang_is_sent_canonical() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_audio(r"%5C%22en%5C%22%2Cnull", b"ID3", 1).await;

    fixture
        .client()
        .synthesize("Hello", &TtsOptions::new("en-us", "com"))
        .await
        .expect("synthesis");
    mock.assert_async().await;
}
