//! Mastodon API response DTOs
//!
//! Data Transfer Objects for Mastodon-compatible API responses. Timestamps
//! are pre-formatted ISO-8601 strings (`YYYY-MM-DDTHH:MM:SS.mmmZ`).
//! `Option` fields without `skip_serializing_if` render as `null`.

use serde::{Deserialize, Serialize};

// =============================================================================
// Enums
// =============================================================================

/// Visibility as exposed by the API
///
/// Several stored visibilities collapse onto one of these; there is no
/// conversion back to the stored form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVisibility {
    Public,
    Unlisted,
    Private,
    Direct,
}

impl ApiVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Unlisted => "unlisted",
            Self::Private => "private",
            Self::Direct => "direct",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    Moderator,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRole {
    pub name: RoleName,
}

// =============================================================================
// Accounts
// =============================================================================

/// Account response (Mastodon API compatible)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub username: String,
    pub acct: String,
    pub display_name: String,
    pub locked: bool,
    pub discoverable: bool,
    pub bot: bool,
    pub created_at: String,
    pub note: String,
    pub url: String,
    pub avatar: String,
    pub avatar_static: String,
    pub header: String,
    pub header_static: String,
    pub followers_count: u64,
    pub following_count: u64,
    pub statuses_count: u64,
    pub last_status_at: Option<String>,
    pub emojis: Vec<EmojiResponse>,
    pub fields: Vec<FieldResponse>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub suspended: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub custom_css: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub enable_rss: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<AccountRole>,
    /// Only present on the account owner's own view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldResponse {
    pub name: String,
    pub value: String,
    pub verified_at: Option<String>,
}

/// Profile defaults visible to the account owner only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceResponse {
    pub privacy: ApiVisibility,
    pub sensitive: bool,
    pub language: String,
    pub status_format: String,
    /// Raw (unrendered) bio
    pub note: String,
    pub fields: Vec<FieldResponse>,
    pub follow_requests_count: u64,
}

/// Account as seen by moderators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminAccountResponse {
    pub id: String,
    pub username: String,
    /// Set only for remote accounts
    pub domain: Option<String>,
    pub created_at: String,
    pub email: String,
    pub ip: Option<String>,
    /// Sign-in history; not tracked, always empty
    pub ips: Vec<AdminAccountIp>,
    pub locale: String,
    pub invite_request: Option<String>,
    pub role: AccountRole,
    pub confirmed: bool,
    pub approved: bool,
    pub disabled: bool,
    pub silenced: bool,
    pub suspended: bool,
    pub account: AccountResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_application_id: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub invited_by_account_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAccountIp {
    pub ip: String,
    pub used_at: String,
}

/// Relationship response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipResponse {
    pub id: String,
    pub following: bool,
    pub showing_reblogs: bool,
    pub notifying: bool,
    pub followed_by: bool,
    pub blocking: bool,
    pub blocked_by: bool,
    pub muting: bool,
    pub muting_notifications: bool,
    pub requested: bool,
    pub domain_blocking: bool,
    pub endorsed: bool,
    pub note: String,
}

/// Application response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub website: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

// =============================================================================
// Statuses
// =============================================================================

/// Status response (Mastodon API compatible)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub id: String,
    pub created_at: String,
    pub in_reply_to_id: Option<String>,
    pub in_reply_to_account_id: Option<String>,
    pub sensitive: bool,
    pub spoiler_text: String,
    pub visibility: ApiVisibility,
    pub language: Option<String>,
    pub uri: String,
    pub url: String,
    pub replies_count: u64,
    pub reblogs_count: u64,
    pub favourites_count: u64,
    pub favourited: bool,
    pub bookmarked: bool,
    pub muted: bool,
    pub reblogged: bool,
    pub pinned: bool,
    pub content: String,
    pub reblog: Option<Box<StatusResponse>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationResponse>,
    pub account: AccountResponse,
    pub media_attachments: Vec<MediaAttachmentResponse>,
    pub mentions: Vec<MentionResponse>,
    pub tags: Vec<TagResponse>,
    pub emojis: Vec<EmojiResponse>,
    pub card: Option<serde_json::Value>,
    pub poll: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

/// Media attachment response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAttachmentResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: Option<String>,
    pub text_url: String,
    pub preview_url: String,
    pub remote_url: Option<String>,
    pub preview_remote_url: Option<String>,
    pub meta: MediaMeta,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub blurhash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaMeta {
    pub original: MediaDimensions,
    pub small: MediaDimensions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<MediaFocus>,
}

/// Dimensions plus type-specific stream info; zero values are omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaDimensions {
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub width: u32,
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub height: u32,
    /// `"<fps>/1"`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub frame_rate: String,
    #[serde(default, skip_serializing_if = "is_zero_f32")]
    pub duration: f32,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub bitrate: u64,
    /// `"<width>x<height>"`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub size: String,
    #[serde(default, skip_serializing_if = "is_zero_f32")]
    pub aspect: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaFocus {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionResponse {
    /// The mentioned account's ID
    pub id: String,
    pub username: String,
    pub url: String,
    pub acct: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagResponse {
    pub name: String,
    pub url: String,
}

// =============================================================================
// Emojis
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiResponse {
    pub shortcode: String,
    pub url: String,
    pub static_url: String,
    pub visible_in_picker: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
}

/// Emoji as seen by admins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminEmojiResponse {
    #[serde(flatten)]
    pub emoji: EmojiResponse,
    pub id: String,
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain: String,
    pub updated_at: String,
    pub total_file_size: u64,
    pub content_type: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCategoryResponse {
    pub id: String,
    pub name: String,
}

// =============================================================================
// Notifications
// =============================================================================

/// Notification response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub created_at: String,
    pub account: AccountResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusResponse>,
}

// =============================================================================
// Moderation
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainResponse {
    pub domain: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub public_comment: String,
}

/// Domain block; export form carries only the flattened [`DomainResponse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainBlockResponse {
    #[serde(flatten)]
    pub domain: DomainResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub obfuscate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Report as seen by the account that filed it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportResponse {
    pub id: String,
    pub created_at: String,
    pub action_taken: bool,
    pub action_taken_at: Option<String>,
    pub action_taken_comment: Option<String>,
    pub category: String,
    pub comment: String,
    pub forwarded: bool,
    pub status_ids: Vec<String>,
    /// Rules are not supported yet; always empty
    pub rule_ids: Vec<u32>,
    pub target_account: AccountResponse,
}

/// Report as seen by moderators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminReportResponse {
    pub id: String,
    pub action_taken: bool,
    pub action_taken_at: Option<String>,
    pub category: String,
    pub comment: String,
    pub forwarded: bool,
    pub created_at: String,
    pub updated_at: String,
    pub account: AdminAccountResponse,
    pub target_account: AdminAccountResponse,
    pub assigned_account: Option<AdminAccountResponse>,
    pub action_taken_by_account: Option<AdminAccountResponse>,
    pub action_taken_comment: Option<String>,
    pub statuses: Vec<StatusResponse>,
    /// Rules are not supported yet; always empty
    pub rules: Vec<InstanceRule>,
}

// =============================================================================
// Instance
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRule {
    pub id: String,
    pub text: String,
}

/// Instance response, API v1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceV1Response {
    pub uri: String,
    pub account_domain: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub email: String,
    pub version: String,
    pub languages: Vec<String>,
    pub registrations: bool,
    pub approval_required: bool,
    pub invites_enabled: bool,
    pub configuration: InstanceConfiguration,
    pub urls: InstanceV1Urls,
    pub stats: InstanceStats,
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub thumbnail_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub thumbnail_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_account: Option<AccountResponse>,
    pub max_toot_chars: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceV1Urls {
    pub streaming_api: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceStats {
    pub user_count: u64,
    pub status_count: u64,
    pub domain_count: u64,
}

/// Instance response, API v2
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceV2Response {
    pub domain: String,
    pub account_domain: String,
    pub title: String,
    pub version: String,
    pub source_url: String,
    pub description: String,
    pub usage: InstanceV2Usage,
    pub thumbnail: InstanceV2Thumbnail,
    pub languages: Vec<String>,
    pub configuration: InstanceV2Configuration,
    pub registrations: InstanceV2Registrations,
    pub contact: InstanceV2Contact,
    pub rules: Vec<InstanceRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceV2Usage {
    pub users: InstanceV2Users,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceV2Users {
    pub active_month: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceV2Thumbnail {
    pub url: String,
    #[serde(rename = "thumbnail_type", default, skip_serializing_if = "String::is_empty")]
    pub media_type: String,
    #[serde(
        rename = "thumbnail_description",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub blurhash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceV2Configuration {
    pub urls: InstanceV2Urls,
    #[serde(flatten)]
    pub limits: InstanceConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceV2Urls {
    pub streaming: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceV2Registrations {
    pub enabled: bool,
    pub approval_required: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceV2Contact {
    pub email: String,
    pub account: Option<AccountResponse>,
}

/// Limits shared by both instance API versions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceConfiguration {
    pub statuses: StatusesConfiguration,
    pub media_attachments: MediaConfiguration,
    pub polls: PollsConfiguration,
    pub accounts: AccountsConfiguration,
    pub emojis: EmojisConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusesConfiguration {
    pub max_characters: u32,
    pub max_media_attachments: u32,
    pub characters_reserved_per_url: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaConfiguration {
    pub supported_mime_types: Vec<String>,
    pub image_size_limit: u64,
    pub image_matrix_limit: u64,
    pub video_size_limit: u64,
    pub video_frame_rate_limit: u32,
    pub video_matrix_limit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollsConfiguration {
    pub max_options: u32,
    pub max_characters_per_option: u32,
    pub min_expiration: u32,
    pub max_expiration: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountsConfiguration {
    pub allow_custom_css: bool,
    pub max_featured_tags: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojisConfiguration {
    pub emoji_size_limit: u64,
}

fn is_zero_u32(value: &u32) -> bool {
    *value == 0
}

fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}

fn is_zero_f32(value: &f32) -> bool {
    *value == 0.0
}
