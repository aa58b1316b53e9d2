//! Derived view fields
//!
//! Pure helpers for values that are computed rather than stored: handles,
//! timestamps, visibility, roles and media stream descriptions.

use chrono::{DateTime, Utc};

use crate::api::dto::{AccountRole, ApiVisibility, RoleName};
use crate::data::{Account, User, Visibility};

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn format_iso8601(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Optional timestamps at or before the Unix epoch count as unset
pub fn nullable_timestamp(timestamp: Option<&DateTime<Utc>>) -> Option<String> {
    timestamp
        .filter(|t| t.timestamp_millis() > 0)
        .map(format_iso8601)
}

/// `username` for local accounts, `username@domain` for remote ones
pub fn acct(account: &Account) -> String {
    if account.is_local() {
        account.username.clone()
    } else {
        format!("{}@{}", account.username, account.domain)
    }
}

pub fn api_visibility(visibility: Visibility) -> ApiVisibility {
    match visibility {
        Visibility::Public => ApiVisibility::Public,
        Visibility::Unlocked => ApiVisibility::Unlisted,
        Visibility::FollowersOnly | Visibility::MutualsOnly => ApiVisibility::Private,
        Visibility::Direct => ApiVisibility::Direct,
    }
}

/// Admin beats moderator beats plain user
pub fn role_for_user(user: &User) -> AccountRole {
    let name = if user.admin {
        RoleName::Admin
    } else if user.moderator {
        RoleName::Moderator
    } else {
        RoleName::User
    };
    AccountRole { name }
}

/// Frames per second rounded to the nearest integer, as `"<n>/1"`
pub fn frame_rate_string(framerate: f32) -> String {
    format!("{}/1", framerate.round() as i64)
}

pub fn size_string(width: u32, height: u32) -> String {
    format!("{width}x{height}")
}
