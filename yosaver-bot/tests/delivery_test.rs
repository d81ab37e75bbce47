//! Integration tests for [`yosaver_bot::pipeline::FetchAndDeliver`].
//!
//! Covers: temp storage exists while sending and is gone afterwards on success, fetch failure and
//! send failure; distinct requests for the same variant never share a path.

mod common;

use std::sync::Arc;

use common::{metadata, variant, MockBot, MockProvider};
use yosaver_bot::pipeline::{DeliveryError, FetchAndDeliver, SizeError};
use yosaver_bot::Chat;

const CEILING: u64 = 2 * 1024 * 1024 * 1024;

fn chat() -> Chat {
    Chat {
        id: 456,
        chat_type: "private".to_string(),
    }
}

fn dir_is_empty(dir: &std::path::Path) -> bool {
    std::fs::read_dir(dir).unwrap().next().is_none()
}

/// **Test: successful delivery sends the fetched file and removes temp storage.**
///
/// **Setup:** Provider writing fixed bytes; recording bot; empty download dir.
/// **Action:** `run(url, "My clip", 720p variant, chat)`.
/// **Expected:** one video with the fetched bytes and caption; download dir empty afterwards.
#[tokio::test]
async fn test_delivery_success_removes_temp_file() {
    let root = tempfile::tempdir().unwrap();
    let provider = Arc::new(MockProvider::new(metadata("My clip", Vec::new())));
    let bot = Arc::new(MockBot::new());
    let delivery = FetchAndDeliver::new(
        provider.clone(),
        bot.clone(),
        root.path().to_path_buf(),
        "tag".to_string(),
        CEILING,
    );

    let caption = delivery
        .run(common::VALID_URL, "My clip", &variant("22", true, 720, 100), &chat())
        .await
        .unwrap();

    assert_eq!(caption, "🎬 My clip\ntag");
    let videos = bot.videos();
    assert_eq!(videos.len(), 1);
    assert!(videos[0].file_existed);
    assert_eq!(videos[0].bytes, common::mock_provider::FETCHED_BYTES);
    assert_eq!(videos[0].caption, caption);
    assert!(!videos[0].path.exists());
    assert!(dir_is_empty(root.path()));
}

/// **Test: fetch failure removes the partial file and sends nothing.**
///
/// **Setup:** Provider that writes a partial file and then fails.
/// **Action:** `run(...)`.
/// **Expected:** FetchFailed; no video sent; download dir empty.
#[tokio::test]
async fn test_delivery_fetch_failure_removes_temp_file() {
    let root = tempfile::tempdir().unwrap();
    let provider = Arc::new(MockProvider::failing_fetch(metadata("x", Vec::new())));
    let bot = Arc::new(MockBot::new());
    let delivery = FetchAndDeliver::new(
        provider.clone(),
        bot.clone(),
        root.path().to_path_buf(),
        "tag".to_string(),
        CEILING,
    );

    let err = delivery
        .run(common::VALID_URL, "x", &variant("22", true, 720, 100), &chat())
        .await
        .unwrap_err();

    assert!(matches!(err, DeliveryError::FetchFailed(_)));
    assert!(bot.videos().is_empty());
    assert_eq!(provider.fetch_calls(), 1);
    assert!(dir_is_empty(root.path()));
}

/// **Test: send failure still removes temp storage.**
///
/// **Setup:** Bot whose send_video fails after observing the file.
/// **Action:** `run(...)`.
/// **Expected:** SendFailed; the file existed at send time; download dir empty.
#[tokio::test]
async fn test_delivery_send_failure_removes_temp_file() {
    let root = tempfile::tempdir().unwrap();
    let provider = Arc::new(MockProvider::new(metadata("x", Vec::new())));
    let bot = Arc::new(MockBot::failing_video());
    let delivery = FetchAndDeliver::new(
        provider,
        bot.clone(),
        root.path().to_path_buf(),
        "tag".to_string(),
        CEILING,
    );

    let err = delivery
        .run(common::VALID_URL, "x", &variant("22", true, 720, 100), &chat())
        .await
        .unwrap_err();

    assert!(matches!(err, DeliveryError::SendFailed(_)));
    assert!(bot.videos()[0].file_existed);
    assert!(dir_is_empty(root.path()));
}

/// **Test: missing download dir is a storage failure, not a panic.**
///
/// **Setup:** download dir pointing at a path that does not exist.
/// **Action:** `run(...)`.
/// **Expected:** Storage error; provider never fetches.
#[tokio::test]
async fn test_delivery_storage_failure() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("does-not-exist");
    let provider = Arc::new(MockProvider::new(metadata("x", Vec::new())));
    let bot = Arc::new(MockBot::new());
    let delivery = FetchAndDeliver::new(provider.clone(), bot, missing, "tag".to_string(), CEILING);

    let err = delivery
        .run(common::VALID_URL, "x", &variant("22", true, 720, 100), &chat())
        .await
        .unwrap_err();

    assert!(matches!(err, DeliveryError::Storage(_)));
    assert_eq!(provider.fetch_calls(), 0);
}

/// **Test: concurrent requests for the same variant use distinct paths.**
///
/// **Setup:** One delivery, two concurrent runs of format "22".
/// **Action:** `join!(run, run)`.
/// **Expected:** both succeed; the two fetch destinations differ.
#[tokio::test]
async fn test_concurrent_same_variant_uses_distinct_paths() {
    let root = tempfile::tempdir().unwrap();
    let provider = Arc::new(MockProvider::new(metadata("x", Vec::new())));
    let bot = Arc::new(MockBot::new());
    let delivery = FetchAndDeliver::new(
        provider.clone(),
        bot.clone(),
        root.path().to_path_buf(),
        "tag".to_string(),
        CEILING,
    );
    let v = variant("22", true, 720, 100);
    let c = chat();

    let (a, b) = tokio::join!(
        delivery.run(common::VALID_URL, "x", &v, &c),
        delivery.run(common::VALID_URL, "x", &v, &c)
    );

    assert!(a.is_ok() && b.is_ok());
    let fetched = provider.fetched();
    assert_eq!(fetched.len(), 2);
    assert_ne!(fetched[0].1, fetched[1].1);
    assert_eq!(bot.videos().len(), 2);
    assert!(dir_is_empty(root.path()));
}

/// **Test: a fetched file over the ceiling is not sent, even when its size was unknown upfront.**
///
/// **Setup:** 4-byte ceiling; variant with size 0; provider writing 16 bytes.
/// **Action:** `run(...)`.
/// **Expected:** Oversized carrying the measured size; no video sent; download dir empty.
#[tokio::test]
async fn test_delivery_rejects_oversized_fetched_file() {
    let root = tempfile::tempdir().unwrap();
    let provider = Arc::new(MockProvider::new(metadata("x", Vec::new())));
    let bot = Arc::new(MockBot::new());
    let delivery = FetchAndDeliver::new(
        provider.clone(),
        bot.clone(),
        root.path().to_path_buf(),
        "tag".to_string(),
        4,
    );

    let err = delivery
        .run(common::VALID_URL, "x", &variant("22", true, 720, 0), &chat())
        .await
        .unwrap_err();

    match err {
        DeliveryError::Oversized(SizeError::TooLarge { observed, ceiling }) => {
            assert_eq!(observed, common::mock_provider::FETCHED_BYTES.len() as u64);
            assert_eq!(ceiling, 4);
        }
        other => panic!("expected Oversized, got {other:?}"),
    }
    assert_eq!(provider.fetch_calls(), 1);
    assert!(bot.videos().is_empty());
    assert!(dir_is_empty(root.path()));
}
