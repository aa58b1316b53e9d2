//! Data models
//!
//! Rust structs representing stored entities as the conversion layer sees
//! them. All models use ULID strings for IDs and chrono for timestamps.
//!
//! Relations come in pairs: an identifier field and a slot for the loaded
//! entity. A slot may be empty even when the identifier is set; converters
//! fill it on demand and leave it filled for the rest of the call.

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// ID Types
// =============================================================================

/// Entity ID wrapper (ULID format, 26 characters)
///
/// Example: "01ARZ3NDEKTSV4RRFFQ69G5FAV"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Generate a new ULID
    pub fn new() -> Self {
        Self(ulid::Ulid::new().to_string())
    }

    /// Create from existing string
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Visibility
// =============================================================================

/// Stored visibility of a status (or default privacy of an account)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible to everyone, shown on public timelines
    #[default]
    Public,
    /// Visible to everyone, kept off public timelines
    Unlocked,
    /// Visible to followers only
    FollowersOnly,
    /// Visible to mutual follows only
    MutualsOnly,
    /// Visible to mentioned accounts only
    Direct,
}

// =============================================================================
// Account
// =============================================================================

/// Profile field (name/value pair shown on a profile)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
    /// When the value link was verified
    pub verified_at: Option<DateTime<Utc>>,
}

/// A local or remote account
///
/// `domain` is empty for local accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    /// Empty for local accounts
    pub domain: String,
    pub display_name: String,
    /// Rendered HTML bio
    pub note: String,
    /// Bio as the user typed it
    pub note_raw: String,
    pub url: String,
    /// ActivityPub actor URI
    pub uri: String,
    pub created_at: DateTime<Utc>,
    pub locked: bool,
    pub discoverable: bool,
    pub bot: bool,
    /// Default sensitivity for new statuses
    pub sensitive: bool,
    pub enable_rss: bool,
    /// Default visibility for new statuses
    pub privacy: Visibility,
    /// Default language for new statuses
    pub language: String,
    /// Default status format ("plain" or "markdown"); empty means default
    pub status_format: String,
    pub custom_css: String,
    pub suspended_at: Option<DateTime<Utc>>,
    pub silenced_at: Option<DateTime<Utc>>,
    /// Sign-up reason given by a local user
    pub reason: String,
    pub fields: Vec<Field>,

    pub avatar_media_attachment_id: Option<String>,
    pub avatar_media_attachment: Option<Box<MediaAttachment>>,
    pub header_media_attachment_id: Option<String>,
    pub header_media_attachment: Option<Box<MediaAttachment>>,

    pub emoji_ids: Vec<String>,
    pub emojis: Vec<Emoji>,
}

impl Account {
    pub fn is_local(&self) -> bool {
        self.domain.is_empty()
    }
}

/// User record backing a local account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub account_id: String,
    pub email: String,
    pub unconfirmed_email: String,
    pub current_sign_in_ip: Option<IpAddr>,
    pub locale: String,
    pub admin: bool,
    pub moderator: bool,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub approved: bool,
    pub disabled: bool,
    pub created_by_application_id: Option<String>,
}

/// OAuth application that created statuses or tokens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub name: String,
    pub website: String,
    pub redirect_uri: String,
    pub client_id: String,
    pub client_secret: String,
}

// =============================================================================
// Status
// =============================================================================

/// A post/toot
///
/// A boost is a status whose `boost_of_id` points at another status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    /// ActivityPub URI (globally unique)
    pub uri: String,
    pub url: String,
    /// HTML content
    pub content: String,
    /// Source text as typed
    pub text: String,
    /// Content warning text
    pub content_warning: String,
    /// Language code (ISO 639-1); empty if unknown
    pub language: String,
    pub visibility: Visibility,
    pub sensitive: bool,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,

    pub account_id: String,
    pub account: Option<Box<Account>>,

    pub in_reply_to_id: Option<String>,
    pub in_reply_to_account_id: Option<String>,

    pub boost_of_id: Option<String>,
    pub boost_of: Option<Box<Status>>,

    pub created_with_application_id: Option<String>,

    pub attachment_ids: Vec<String>,
    pub attachments: Vec<MediaAttachment>,
    pub mention_ids: Vec<String>,
    pub mentions: Vec<Mention>,
    pub tag_ids: Vec<String>,
    pub tags: Vec<Tag>,
    pub emoji_ids: Vec<String>,
    pub emojis: Vec<Emoji>,
}

// =============================================================================
// Media Attachment
// =============================================================================

/// Kind of media file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    Gifv,
    Audio,
    Video,
    #[default]
    Unknown,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Gifv => "gifv",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Unknown => "unknown",
        }
    }
}

/// Dimensions and stream info of the original file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginalMeta {
    pub width: u32,
    pub height: u32,
    pub aspect: f64,
    /// Seconds; video/audio only
    pub duration: Option<f32>,
    /// Frames per second; video only
    pub framerate: Option<f32>,
    /// Bits per second; video/audio only
    pub bitrate: Option<u64>,
}

/// Dimensions of the generated thumbnail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmallMeta {
    pub width: u32,
    pub height: u32,
    pub aspect: f64,
}

/// Focal point, both axes in -1.0..=1.0
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Focus {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    pub original: OriginalMeta,
    pub small: SmallMeta,
    pub focus: Focus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub remote_url: String,
    pub content_type: String,
}

/// Media file attached to a status, or used as avatar/header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaAttachment {
    pub id: String,
    /// Owning status (None for avatars/headers and unattached uploads)
    pub status_id: Option<String>,
    pub account_id: String,
    pub kind: FileType,
    /// Local URL of the processed file
    pub url: String,
    /// Original URL for remote media
    pub remote_url: String,
    /// MIME type of the processed file
    pub content_type: String,
    pub thumbnail: Thumbnail,
    pub meta: FileMeta,
    /// Alt text description
    pub description: String,
    /// Blurhash for placeholder
    pub blurhash: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Emoji, Mention, Tag
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmojiCategory {
    pub id: String,
    pub name: String,
}

/// Custom emoji
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Emoji {
    pub id: String,
    pub shortcode: String,
    /// Empty for local emojis
    pub domain: String,
    pub uri: String,
    pub image_url: String,
    pub image_static_url: String,
    pub image_content_type: String,
    pub image_file_size: u64,
    pub image_static_file_size: u64,
    pub visible_in_picker: bool,
    pub disabled: bool,
    pub updated_at: DateTime<Utc>,

    pub category_id: Option<String>,
    pub category: Option<Box<EmojiCategory>>,
}

/// Mention of an account inside a status
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub id: String,
    pub status_id: String,
    pub origin_account_id: String,
    pub target_account_id: String,
    pub target_account: Option<Box<Account>>,
}

/// Hashtag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub url: String,
}

// =============================================================================
// Notifications
// =============================================================================

/// Notification types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Follow,
    FollowRequest,
    #[default]
    Mention,
    Reblog,
    Favourite,
    Poll,
    Status,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Follow => "follow",
            Self::FollowRequest => "follow_request",
            Self::Mention => "mention",
            Self::Reblog => "reblog",
            Self::Favourite => "favourite",
            Self::Poll => "poll",
            Self::Status => "status",
        }
    }
}

/// Notification delivered to `target_account` about `origin_account`'s action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub notification_type: NotificationType,
    pub created_at: DateTime<Utc>,

    pub target_account_id: String,
    pub target_account: Option<Box<Account>>,
    pub origin_account_id: String,
    pub origin_account: Option<Box<Account>>,

    pub status_id: Option<String>,
    pub status: Option<Box<Status>>,
}

// =============================================================================
// Moderation
// =============================================================================

/// Report filed by `account` against `target_account`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comment: String,
    pub forwarded: bool,

    pub account_id: String,
    pub account: Option<Box<Account>>,
    pub target_account_id: String,
    pub target_account: Option<Box<Account>>,

    pub status_ids: Vec<String>,
    pub statuses: Vec<Status>,

    /// Comment left by the moderator who handled the report
    pub action_taken: String,
    /// None while the report is unhandled
    pub action_taken_at: Option<DateTime<Utc>>,
    pub action_taken_by_account_id: Option<String>,
    pub action_taken_by_account: Option<Box<Account>>,
}

/// Blocked domain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainBlock {
    pub id: String,
    pub domain: String,
    pub created_at: DateTime<Utc>,
    pub created_by_account_id: String,
    pub private_comment: String,
    pub public_comment: String,
    pub obfuscate: bool,
    pub subscription_id: String,
}

// =============================================================================
// Instance
// =============================================================================

/// Instance metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub id: String,
    pub domain: String,
    pub uri: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub contact_email: String,
    pub contact_account_id: Option<String>,
    pub contact_account: Option<Box<Account>>,
}

/// Relationship between the requesting account and another account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// The other account's ID
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
