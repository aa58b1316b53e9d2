//! Integration tests for cancellation and deadlines
//!
//! Slow ids in the memory store hang for a minute, so every test here
//! finishes only if the context interrupts the lookup.

mod common;

use std::time::{Duration, Instant};

use common::{MemoryStore, converter, image, local_account, remote_account, status, user};
use mastoview::{ConvertError, Context, Status};
use tokio_test::assert_err;

#[tokio::test]
async fn test_deadline_interrupts_slow_author_lookup() {
    let slow = remote_account("01SLOW", "slow", "remote.example");
    let mut post = status("s1", &slow);
    let store = MemoryStore::new().with_account(slow).with_slow_id("01SLOW");
    let (converter, _store) = converter(store);
    let ctx = Context::background().with_timeout(Duration::from_millis(50));

    let started = Instant::now();
    let err = assert_err!(converter.status_to_response(&ctx, &mut post, None).await);

    assert!(matches!(err, ConvertError::DeadlineExceeded), "got {err:?}");
    assert!(err.is_interrupted());
    assert!(started.elapsed() < Duration::from_secs(5));
    assert!(post.account.is_none());
}

#[tokio::test]
async fn test_cancel_from_another_task() {
    let alice = local_account("01ALICE", "alice");
    let mut post = Status {
        attachment_ids: vec!["a1".to_string(), "a2".to_string()],
        ..status("s1", &alice)
    };
    let store = MemoryStore::new()
        .with_account(alice)
        .with_user(user("01ALICE", false, false))
        .with_attachment(image("a1"))
        .with_attachment(image("a2"))
        .with_slow_id("a2");
    let (converter, store) = converter(store);
    let ctx = Context::background();

    let canceller = ctx.clone();
    let handle = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        canceller.cancel();
    });

    let err = assert_err!(converter.status_to_response(&ctx, &mut post, None).await);
    handle.await.unwrap();

    assert!(matches!(err, ConvertError::Cancelled), "got {err:?}");
    assert!(store.lookups().contains(&"get_attachment:a2".to_string()));
}

#[tokio::test]
async fn test_cancelled_context_issues_no_lookups() {
    let mut alice = local_account("01ALICE", "alice");
    let (converter, store) = converter(MemoryStore::new().with_user(user("01ALICE", true, false)));
    let ctx = Context::background();
    ctx.cancel();

    let err = assert_err!(converter.account_to_response(&ctx, &mut alice).await);

    assert!(matches!(err, ConvertError::Cancelled));
    assert!(store.lookups().is_empty());
}

#[tokio::test]
async fn test_batch_aborts_instead_of_skipping_on_deadline() {
    let store = MemoryStore::new()
        .with_attachment(image("a1"))
        .with_attachment(image("a2"))
        .with_attachment(image("a3"))
        .with_slow_id("a2");
    let (converter, store) = converter(store);
    let ids = vec!["a1".to_string(), "a2".to_string(), "a3".to_string()];
    let ctx = Context::background().with_timeout(Duration::from_millis(50));

    let err = assert_err!(converter.attachments_to_responses(&ctx, &[], &ids).await);

    assert!(matches!(err, ConvertError::DeadlineExceeded), "got {err:?}");
    assert!(!store.lookups().contains(&"get_attachment:a3".to_string()));
}

#[tokio::test]
async fn test_deadline_interrupts_account_counts() {
    let mut slow = remote_account("01SLOW", "slow", "remote.example");
    let (converter, _store) = converter(MemoryStore::new().with_slow_id("01SLOW"));
    let ctx = Context::background().with_timeout(Duration::from_millis(50));

    let err = assert_err!(converter.account_to_response(&ctx, &mut slow).await);

    assert!(err.is_interrupted());
}
