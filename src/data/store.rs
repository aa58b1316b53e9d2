//! Store collaborator
//!
//! The conversion layer never talks to a database directly. It reads through
//! this trait, which a persistence crate implements. Every lookup takes the
//! caller's [`Context`] and reports a missing entity as
//! [`StoreError::NotFound`], distinct from backend failures.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::context::Context;
use crate::data::models::*;
use crate::error::StoreError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only access to stored entities and live counts
///
/// Implementations must be safe to share across concurrent requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    // -------------------------------------------------------------------------
    // Point lookups
    // -------------------------------------------------------------------------

    async fn get_account(&self, ctx: &Context, id: &str) -> StoreResult<Account>;

    /// User record of a local account
    async fn get_user_by_account_id(&self, ctx: &Context, account_id: &str) -> StoreResult<User>;

    /// The instance actor account; empty `domain` means this instance
    async fn get_instance_account(&self, ctx: &Context, domain: &str) -> StoreResult<Account>;

    async fn get_status(&self, ctx: &Context, id: &str) -> StoreResult<Status>;

    /// Statuses for `ids`, in the same order; missing ids are skipped
    async fn get_statuses(&self, ctx: &Context, ids: &[String]) -> StoreResult<Vec<Status>>;

    async fn get_attachment(&self, ctx: &Context, id: &str) -> StoreResult<MediaAttachment>;

    async fn get_emoji(&self, ctx: &Context, id: &str) -> StoreResult<Emoji>;

    async fn get_emoji_category(&self, ctx: &Context, id: &str) -> StoreResult<EmojiCategory>;

    /// Mentions for `ids`, in the same order; missing ids are skipped
    async fn get_mentions(&self, ctx: &Context, ids: &[String]) -> StoreResult<Vec<Mention>>;

    async fn get_tag(&self, ctx: &Context, id: &str) -> StoreResult<Tag>;

    async fn get_application(&self, ctx: &Context, id: &str) -> StoreResult<Application>;

    // -------------------------------------------------------------------------
    // Account counts
    // -------------------------------------------------------------------------

    async fn count_account_followers(&self, ctx: &Context, account_id: &str) -> StoreResult<u64>;

    async fn count_account_follows(&self, ctx: &Context, account_id: &str) -> StoreResult<u64>;

    async fn count_account_statuses(&self, ctx: &Context, account_id: &str) -> StoreResult<u64>;

    /// Pending follow requests targeting the account; `NotFound` when none
    async fn count_account_follow_requests(
        &self,
        ctx: &Context,
        account_id: &str,
    ) -> StoreResult<u64>;

    /// Creation time of the account's most recent status
    async fn get_account_last_posted(
        &self,
        ctx: &Context,
        account_id: &str,
    ) -> StoreResult<Option<DateTime<Utc>>>;

    // -------------------------------------------------------------------------
    // Status counts and interactions
    // -------------------------------------------------------------------------

    async fn count_status_replies(&self, ctx: &Context, status_id: &str) -> StoreResult<u64>;

    async fn count_status_reblogs(&self, ctx: &Context, status_id: &str) -> StoreResult<u64>;

    async fn count_status_faves(&self, ctx: &Context, status_id: &str) -> StoreResult<u64>;

    async fn is_status_faved_by(
        &self,
        ctx: &Context,
        status_id: &str,
        account_id: &str,
    ) -> StoreResult<bool>;

    async fn is_status_reblogged_by(
        &self,
        ctx: &Context,
        status_id: &str,
        account_id: &str,
    ) -> StoreResult<bool>;

    async fn is_status_muted_by(
        &self,
        ctx: &Context,
        status_id: &str,
        account_id: &str,
    ) -> StoreResult<bool>;

    async fn is_status_bookmarked_by(
        &self,
        ctx: &Context,
        status_id: &str,
        account_id: &str,
    ) -> StoreResult<bool>;

    // -------------------------------------------------------------------------
    // Instance counts
    // -------------------------------------------------------------------------

    async fn count_instance_users(&self, ctx: &Context, domain: &str) -> StoreResult<u64>;

    async fn count_instance_statuses(&self, ctx: &Context, domain: &str) -> StoreResult<u64>;

    /// Number of other domains this instance knows about
    async fn count_instance_domains(&self, ctx: &Context, domain: &str) -> StoreResult<u64>;
}
