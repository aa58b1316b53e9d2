//! Schema validation tests for Mastodon API responses
//!
//! These tests validate that converted views conform to the Mastodon API
//! schema as described by GoToSocial's swagger.yaml

mod common;

use common::schema_validator::assert_matches_schema;
use common::{
    MemoryStore, converter, created_at, image, local_account, remote_account, status, user,
};
use mastoview::{Context, Instance, Notification, NotificationType, Status};
use tokio_test::{assert_err, assert_ok};

fn instance() -> Instance {
    Instance {
        id: "01INSTANCE".to_string(),
        domain: "test.example.com".to_string(),
        uri: "https://test.example.com".to_string(),
        title: "Test Instance".to_string(),
        description: "<p>A test instance</p>".to_string(),
        short_description: "test".to_string(),
        contact_email: "admin@test.example.com".to_string(),
        ..Default::default()
    }
}

fn instance_store() -> MemoryStore {
    let mut store = MemoryStore::new()
        .with_account(local_account("01ADMIN", "admin"))
        .with_user(user("01ADMIN", true, false))
        .with_count("instance_users", "test.example.com", 4)
        .with_count("instance_statuses", "test.example.com", 120)
        .with_count("instance_domains", "test.example.com", 9);
    store.instance_account = Some(local_account("01INSTANCE", "test.example.com"));
    store
}

#[tokio::test]
async fn test_account_schema() {
    let mut alice = local_account("01ALICE", "alice");
    let store = MemoryStore::new()
        .with_user(user("01ALICE", false, true))
        .with_count("followers", "01ALICE", 10);
    let (converter, _store) = converter(store);

    let response = assert_ok!(
        converter
            .account_to_response(&Context::background(), &mut alice)
            .await
    );

    let json = assert_matches_schema(&response, "account");
    assert_eq!(json["role"]["name"], "moderator");
}

#[tokio::test]
async fn test_status_schema_with_boost() {
    let alice = local_account("01ALICE", "alice");
    let bob = remote_account("01BOB", "bob", "remote.example");
    let store = MemoryStore::new()
        .with_account(alice.clone())
        .with_account(bob.clone())
        .with_user(user("01ALICE", false, false))
        .with_attachment(image("a1"))
        .with_status(Status {
            attachment_ids: vec!["a1".to_string()],
            ..status("s1", &bob)
        });
    let (converter, _store) = converter(store);
    let mut boost = Status {
        boost_of_id: Some("s1".to_string()),
        ..status("s2", &alice)
    };

    let response = assert_ok!(
        converter
            .status_to_response(&Context::background(), &mut boost, None)
            .await
    );

    let json = assert_matches_schema(&response, "status");
    assert_eq!(json["reblog"]["id"], "s1");
    assert_eq!(json["reblog"]["media_attachments"][0]["type"], "image");
}

#[tokio::test]
async fn test_notification_schema_unwraps_boost() {
    let alice = local_account("01ALICE", "alice");
    let bob = remote_account("01BOB", "bob", "remote.example");
    let store = MemoryStore::new()
        .with_account(alice.clone())
        .with_account(bob.clone())
        .with_user(user("01ALICE", false, false))
        .with_status(status("s1", &alice))
        .with_status(Status {
            boost_of_id: Some("s1".to_string()),
            ..status("s2", &bob)
        });
    let (converter, _store) = converter(store);
    let mut notification = Notification {
        id: "n1".to_string(),
        notification_type: NotificationType::Reblog,
        created_at: created_at(),
        target_account_id: alice.id.clone(),
        origin_account_id: bob.id.clone(),
        status_id: Some("s2".to_string()),
        ..Default::default()
    };

    let response = assert_ok!(
        converter
            .notification_to_response(&Context::background(), &mut notification)
            .await
    );

    let json = assert_matches_schema(&response, "notification");
    assert_eq!(json["type"], "reblog");
    assert_eq!(json["account"]["acct"], "bob@remote.example");
    assert_eq!(json["status"]["id"], "s1");
}

#[tokio::test]
async fn test_notification_schema_without_status() {
    let alice = local_account("01ALICE", "alice");
    let bob = remote_account("01BOB", "bob", "remote.example");
    let store = MemoryStore::new()
        .with_account(alice.clone())
        .with_account(bob.clone());
    let (converter, _store) = converter(store);
    let mut notification = Notification {
        id: "n2".to_string(),
        notification_type: NotificationType::Follow,
        created_at: created_at(),
        target_account_id: alice.id.clone(),
        origin_account_id: bob.id.clone(),
        ..Default::default()
    };

    let response = assert_ok!(
        converter
            .notification_to_response(&Context::background(), &mut notification)
            .await
    );

    let json = assert_matches_schema(&response, "notification");
    assert!(json.get("status").is_none());
}

#[tokio::test]
async fn test_instance_v1_schema() {
    let (converter, _store) = converter(instance_store());

    let response = assert_ok!(
        converter
            .instance_to_v1_response(&Context::background(), &mut instance())
            .await
    );

    let json = assert_matches_schema(&response, "instance_v1");
    assert_eq!(json["stats"]["user_count"], 4);
    assert_eq!(json["stats"]["status_count"], 120);
    assert_eq!(json["stats"]["domain_count"], 9);
    assert_eq!(json["thumbnail"], "https://test.example.com/assets/logo.png");
    assert_eq!(json["urls"]["streaming_api"], "wss://test.example.com");
    assert_eq!(json["registrations"], false);
}

#[tokio::test]
async fn test_instance_v2_schema() {
    let (converter, _store) = converter(instance_store());
    let mut instance = Instance {
        contact_account_id: Some("01ADMIN".to_string()),
        ..instance()
    };

    let response = assert_ok!(
        converter
            .instance_to_v2_response(&Context::background(), &mut instance)
            .await
    );

    let json = assert_matches_schema(&response, "instance_v2");
    assert_eq!(json["contact"]["account"]["acct"], "admin");
    assert_eq!(json["configuration"]["statuses"]["max_characters"], 5000);
    assert_eq!(json["configuration"]["urls"]["streaming"], "wss://test.example.com");
    assert_eq!(json["registrations"]["approval_required"], true);
    assert!(json["registrations"]["message"].is_null());
}

#[tokio::test]
async fn test_instance_without_instance_account_fails() {
    let (converter, _store) = converter(MemoryStore::new());

    let err = assert_err!(
        converter
            .instance_to_v2_response(&Context::background(), &mut instance())
            .await
    );
    assert!(err.is_not_found());
}
