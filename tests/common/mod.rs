//! Common test utilities for integration tests
//!
//! An in-memory [`Store`] that records every lookup, plus fixture builders.

#![allow(dead_code)]

pub mod schema_validator;

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mastoview::config::{
    AccountsConfig, AppConfig, InstanceConfig, LoggingConfig, MediaConfig, ServerConfig,
    StatusesConfig,
};
use mastoview::{
    Account, Application, Context, Converter, Emoji, EmojiCategory, EntityId, MediaAttachment,
    Mention, Status, Store, StoreError, StoreResult, Tag, User,
};

/// Test store backed by hash maps
///
/// Every call is appended to a lookup log as `"<method>:<key>"`. Ids listed
/// in `slow_ids` make the lookup hang for a minute.
#[derive(Default)]
pub struct MemoryStore {
    pub accounts: HashMap<String, Account>,
    /// Keyed by account id
    pub users: HashMap<String, User>,
    pub instance_account: Option<Account>,
    pub statuses: HashMap<String, Status>,
    pub attachments: HashMap<String, MediaAttachment>,
    pub emojis: HashMap<String, Emoji>,
    pub emoji_categories: HashMap<String, EmojiCategory>,
    pub mentions: HashMap<String, Mention>,
    pub tags: HashMap<String, Tag>,
    pub applications: HashMap<String, Application>,
    /// Keyed by (count name, id)
    pub counts: HashMap<(&'static str, String), u64>,
    pub last_posted: HashMap<String, DateTime<Utc>>,
    /// (status id, account id)
    pub faves: HashSet<(String, String)>,
    pub slow_ids: HashSet<String>,
    lookups: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts.insert(account.id.clone(), account);
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.account_id.clone(), user);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.statuses.insert(status.id.clone(), status);
        self
    }

    pub fn with_attachment(mut self, attachment: MediaAttachment) -> Self {
        self.attachments.insert(attachment.id.clone(), attachment);
        self
    }

    pub fn with_count(mut self, what: &'static str, id: &str, count: u64) -> Self {
        self.counts.insert((what, id.to_string()), count);
        self
    }

    pub fn with_slow_id(mut self, id: &str) -> Self {
        self.slow_ids.insert(id.to_string());
        self
    }

    /// Every lookup issued so far
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    /// Lookups issued for one method
    pub fn lookups_of(&self, method: &str) -> Vec<String> {
        let prefix = format!("{method}:");
        self.lookups()
            .into_iter()
            .filter(|entry| entry.starts_with(&prefix))
            .collect()
    }

    async fn record(&self, method: &str, key: &str) {
        self.lookups.lock().unwrap().push(format!("{method}:{key}"));
        if self.slow_ids.contains(key) {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
    }

    fn count(&self, what: &'static str, id: &str) -> u64 {
        self.counts
            .get(&(what, id.to_string()))
            .copied()
            .unwrap_or(0)
    }
}

fn found<T: Clone>(map: &HashMap<String, T>, id: &str) -> StoreResult<T> {
    map.get(id).cloned().ok_or(StoreError::NotFound)
}

#[async_trait]
impl Store for MemoryStore {
    async fn get_account(&self, _ctx: &Context, id: &str) -> StoreResult<Account> {
        self.record("get_account", id).await;
        found(&self.accounts, id)
    }

    async fn get_user_by_account_id(&self, _ctx: &Context, account_id: &str) -> StoreResult<User> {
        self.record("get_user_by_account_id", account_id).await;
        found(&self.users, account_id)
    }

    async fn get_instance_account(&self, _ctx: &Context, domain: &str) -> StoreResult<Account> {
        self.record("get_instance_account", domain).await;
        self.instance_account.clone().ok_or(StoreError::NotFound)
    }

    async fn get_status(&self, _ctx: &Context, id: &str) -> StoreResult<Status> {
        self.record("get_status", id).await;
        found(&self.statuses, id)
    }

    async fn get_statuses(&self, _ctx: &Context, ids: &[String]) -> StoreResult<Vec<Status>> {
        self.record("get_statuses", &ids.join(",")).await;
        Ok(ids
            .iter()
            .filter_map(|id| self.statuses.get(id).cloned())
            .collect())
    }

    async fn get_attachment(&self, _ctx: &Context, id: &str) -> StoreResult<MediaAttachment> {
        self.record("get_attachment", id).await;
        found(&self.attachments, id)
    }

    async fn get_emoji(&self, _ctx: &Context, id: &str) -> StoreResult<Emoji> {
        self.record("get_emoji", id).await;
        found(&self.emojis, id)
    }

    async fn get_emoji_category(&self, _ctx: &Context, id: &str) -> StoreResult<EmojiCategory> {
        self.record("get_emoji_category", id).await;
        found(&self.emoji_categories, id)
    }

    async fn get_mentions(&self, _ctx: &Context, ids: &[String]) -> StoreResult<Vec<Mention>> {
        self.record("get_mentions", &ids.join(",")).await;
        Ok(ids
            .iter()
            .filter_map(|id| self.mentions.get(id).cloned())
            .collect())
    }

    async fn get_tag(&self, _ctx: &Context, id: &str) -> StoreResult<Tag> {
        self.record("get_tag", id).await;
        found(&self.tags, id)
    }

    async fn get_application(&self, _ctx: &Context, id: &str) -> StoreResult<Application> {
        self.record("get_application", id).await;
        found(&self.applications, id)
    }

    async fn count_account_followers(&self, _ctx: &Context, account_id: &str) -> StoreResult<u64> {
        self.record("count_account_followers", account_id).await;
        Ok(self.count("followers", account_id))
    }

    async fn count_account_follows(&self, _ctx: &Context, account_id: &str) -> StoreResult<u64> {
        self.record("count_account_follows", account_id).await;
        Ok(self.count("following", account_id))
    }

    async fn count_account_statuses(&self, _ctx: &Context, account_id: &str) -> StoreResult<u64> {
        self.record("count_account_statuses", account_id).await;
        Ok(self.count("statuses", account_id))
    }

    async fn count_account_follow_requests(
        &self,
        _ctx: &Context,
        account_id: &str,
    ) -> StoreResult<u64> {
        self.record("count_account_follow_requests", account_id).await;
        match self.count("follow_requests", account_id) {
            0 => Err(StoreError::NotFound),
            n => Ok(n),
        }
    }

    async fn get_account_last_posted(
        &self,
        _ctx: &Context,
        account_id: &str,
    ) -> StoreResult<Option<DateTime<Utc>>> {
        self.record("get_account_last_posted", account_id).await;
        Ok(self.last_posted.get(account_id).copied())
    }

    async fn count_status_replies(&self, _ctx: &Context, status_id: &str) -> StoreResult<u64> {
        self.record("count_status_replies", status_id).await;
        Ok(self.count("replies", status_id))
    }

    async fn count_status_reblogs(&self, _ctx: &Context, status_id: &str) -> StoreResult<u64> {
        self.record("count_status_reblogs", status_id).await;
        Ok(self.count("reblogs", status_id))
    }

    async fn count_status_faves(&self, _ctx: &Context, status_id: &str) -> StoreResult<u64> {
        self.record("count_status_faves", status_id).await;
        Ok(self.count("faves", status_id))
    }

    async fn is_status_faved_by(
        &self,
        _ctx: &Context,
        status_id: &str,
        account_id: &str,
    ) -> StoreResult<bool> {
        self.record("is_status_faved_by", status_id).await;
        Ok(self
            .faves
            .contains(&(status_id.to_string(), account_id.to_string())))
    }

    async fn is_status_reblogged_by(
        &self,
        _ctx: &Context,
        status_id: &str,
        _account_id: &str,
    ) -> StoreResult<bool> {
        self.record("is_status_reblogged_by", status_id).await;
        Ok(false)
    }

    async fn is_status_muted_by(
        &self,
        _ctx: &Context,
        status_id: &str,
        _account_id: &str,
    ) -> StoreResult<bool> {
        self.record("is_status_muted_by", status_id).await;
        Ok(false)
    }

    async fn is_status_bookmarked_by(
        &self,
        _ctx: &Context,
        status_id: &str,
        _account_id: &str,
    ) -> StoreResult<bool> {
        self.record("is_status_bookmarked_by", status_id).await;
        Ok(false)
    }

    async fn count_instance_users(&self, _ctx: &Context, domain: &str) -> StoreResult<u64> {
        self.record("count_instance_users", domain).await;
        Ok(self.count("instance_users", domain))
    }

    async fn count_instance_statuses(&self, _ctx: &Context, domain: &str) -> StoreResult<u64> {
        self.record("count_instance_statuses", domain).await;
        Ok(self.count("instance_statuses", domain))
    }

    async fn count_instance_domains(&self, _ctx: &Context, domain: &str) -> StoreResult<u64> {
        self.record("count_instance_domains", domain).await;
        Ok(self.count("instance_domains", domain))
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            domain: "test.example.com".to_string(),
            account_domain: String::new(),
            protocol: "https".to_string(),
        },
        instance: InstanceConfig {
            software_version: "0.1.0-test".to_string(),
        },
        accounts: AccountsConfig {
            registration_open: false,
            approval_required: true,
            allow_custom_css: false,
        },
        statuses: StatusesConfig {
            max_chars: 5000,
            max_media_files: 6,
            poll_max_options: 6,
            poll_option_max_chars: 50,
        },
        media: MediaConfig {
            image_max_size: 10_485_760,
            video_max_size: 41_943_040,
            emoji_local_max_size: 51_200,
            supported_mime_types: vec!["image/jpeg".to_string(), "image/png".to_string()],
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
    }
}

/// Converter over `store`; the returned Arc lets the test read the lookup log
pub fn converter(store: MemoryStore) -> (Converter, Arc<MemoryStore>) {
    let store = Arc::new(store);
    let converter = Converter::new(store.clone(), Arc::new(test_config()));
    (converter, store)
}

pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 7, 1, 9, 30, 0).unwrap()
}

pub fn local_account(id: &str, username: &str) -> Account {
    Account {
        id: id.to_string(),
        username: username.to_string(),
        display_name: username.to_string(),
        note: format!("<p>{username}'s bio</p>"),
        url: format!("https://test.example.com/@{username}"),
        uri: format!("https://test.example.com/users/{username}"),
        created_at: created_at(),
        discoverable: true,
        ..Default::default()
    }
}

pub fn remote_account(id: &str, username: &str, domain: &str) -> Account {
    Account {
        domain: domain.to_string(),
        url: format!("https://{domain}/@{username}"),
        uri: format!("https://{domain}/users/{username}"),
        ..local_account(id, username)
    }
}

pub fn user(account_id: &str, admin: bool, moderator: bool) -> User {
    User {
        id: EntityId::new().0,
        account_id: account_id.to_string(),
        email: format!("{account_id}@test.example.com"),
        locale: "en".to_string(),
        admin,
        moderator,
        confirmed_at: Some(created_at()),
        approved: true,
        ..Default::default()
    }
}

pub fn status(id: &str, author: &Account) -> Status {
    Status {
        id: id.to_string(),
        uri: format!("{}/statuses/{id}", author.uri),
        url: format!("{}/{id}", author.url),
        content: format!("<p>status {id}</p>"),
        text: format!("status {id}"),
        language: "en".to_string(),
        created_at: created_at(),
        account_id: author.id.clone(),
        ..Default::default()
    }
}

pub fn image(id: &str) -> MediaAttachment {
    MediaAttachment {
        id: id.to_string(),
        kind: mastoview::FileType::Image,
        url: format!("https://test.example.com/media/{id}.jpg"),
        content_type: "image/jpeg".to_string(),
        created_at: created_at(),
        ..Default::default()
    }
}
