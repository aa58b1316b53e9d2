//! Instance metadata conversion (API v1 and v2)

use crate::api::converters::Converter;
use crate::api::converters::resolve::resolve;
use crate::api::dto::*;
use crate::context::Context;
use crate::data::{Account, Instance};
use crate::error::{ConvertError, Result};
use crate::metrics::{STORE_LOOKUPS_TOTAL, record_conversion};

const CHARACTERS_RESERVED_PER_URL: u32 = 25;
const IMAGE_MATRIX_LIMIT: u64 = 16_777_216; // 4096x4096
const VIDEO_MATRIX_LIMIT: u64 = 16_777_216; // 4096x4096
const VIDEO_FRAME_RATE_LIMIT: u32 = 60;
const POLL_MIN_EXPIRATION: u32 = 300; // seconds
const POLL_MAX_EXPIRATION: u32 = 2_629_746; // seconds
const MAX_FEATURED_TAGS: u32 = 10;
const SOURCE_URL: &str = env!("CARGO_PKG_REPOSITORY");
const DEFAULT_THUMBNAIL: &str = "logo.png";

/// Thumbnail taken from the instance account's avatar
#[derive(Debug, Default)]
struct Thumbnail {
    url: String,
    content_type: String,
    description: String,
    blurhash: String,
}

impl Converter {
    /// Instance information, API v1
    ///
    /// Includes live user, status and domain counts.
    pub async fn instance_to_v1_response(
        &self,
        ctx: &Context,
        instance: &mut Instance,
    ) -> Result<InstanceV1Response> {
        let result = self.instance_v1(ctx, instance).await;
        record_conversion("instance_v1", &result);
        result
    }

    /// Instance information, API v2
    pub async fn instance_to_v2_response(
        &self,
        ctx: &Context,
        instance: &mut Instance,
    ) -> Result<InstanceV2Response> {
        let result = self.instance_v2(ctx, instance).await;
        record_conversion("instance_v2", &result);
        result
    }

    async fn instance_v1(&self, ctx: &Context, instance: &mut Instance) -> Result<InstanceV1Response> {
        let config = self.config();

        let user_count = ctx
            .guard(self.store().count_instance_users(ctx, &instance.domain))
            .await
            .map_err(|e| ConvertError::count("instance users", &instance.domain, e))?;
        let status_count = ctx
            .guard(self.store().count_instance_statuses(ctx, &instance.domain))
            .await
            .map_err(|e| ConvertError::count("instance statuses", &instance.domain, e))?;
        let domain_count = ctx
            .guard(self.store().count_instance_domains(ctx, &instance.domain))
            .await
            .map_err(|e| ConvertError::count("instance domains", &instance.domain, e))?;

        let thumbnail = self.instance_thumbnail(ctx, &instance.domain).await?;
        let contact_account = self.contact_account(ctx, instance).await?;

        Ok(InstanceV1Response {
            uri: instance.uri.clone(),
            account_domain: config.server.account_domain().to_string(),
            title: instance.title.clone(),
            description: instance.description.clone(),
            short_description: instance.short_description.clone(),
            email: instance.contact_email.clone(),
            version: config.instance.software_version.clone(),
            languages: Vec::new(),
            registrations: config.accounts.registration_open,
            approval_required: config.accounts.approval_required,
            invites_enabled: false,
            configuration: self.instance_configuration(),
            urls: InstanceV1Urls {
                streaming_api: format!("wss://{}", instance.domain),
            },
            stats: InstanceStats {
                user_count,
                status_count,
                domain_count,
            },
            thumbnail: thumbnail.url,
            thumbnail_type: thumbnail.content_type,
            thumbnail_description: thumbnail.description,
            contact_account,
            max_toot_chars: config.statuses.max_chars,
        })
    }

    async fn instance_v2(&self, ctx: &Context, instance: &mut Instance) -> Result<InstanceV2Response> {
        let config = self.config();

        let thumbnail = self.instance_thumbnail(ctx, &instance.domain).await?;
        let contact_account = self.contact_account(ctx, instance).await?;

        Ok(InstanceV2Response {
            domain: instance.domain.clone(),
            account_domain: config.server.account_domain().to_string(),
            title: instance.title.clone(),
            version: config.instance.software_version.clone(),
            source_url: SOURCE_URL.to_string(),
            description: instance.description.clone(),
            usage: InstanceV2Usage::default(),
            thumbnail: InstanceV2Thumbnail {
                url: thumbnail.url,
                media_type: thumbnail.content_type,
                description: thumbnail.description,
                blurhash: thumbnail.blurhash,
            },
            languages: Vec::new(),
            configuration: InstanceV2Configuration {
                urls: InstanceV2Urls {
                    streaming: format!("wss://{}", instance.domain),
                },
                limits: self.instance_configuration(),
            },
            registrations: InstanceV2Registrations {
                enabled: config.accounts.registration_open,
                approval_required: config.accounts.approval_required,
                message: None,
            },
            contact: InstanceV2Contact {
                email: instance.contact_email.clone(),
                account: contact_account,
            },
            rules: Vec::new(),
        })
    }

    fn instance_configuration(&self) -> InstanceConfiguration {
        let config = self.config();
        InstanceConfiguration {
            statuses: StatusesConfiguration {
                max_characters: config.statuses.max_chars,
                max_media_attachments: config.statuses.max_media_files,
                characters_reserved_per_url: CHARACTERS_RESERVED_PER_URL,
            },
            media_attachments: MediaConfiguration {
                supported_mime_types: config.media.supported_mime_types.clone(),
                image_size_limit: config.media.image_max_size,
                image_matrix_limit: IMAGE_MATRIX_LIMIT,
                video_size_limit: config.media.video_max_size,
                video_frame_rate_limit: VIDEO_FRAME_RATE_LIMIT,
                video_matrix_limit: VIDEO_MATRIX_LIMIT,
            },
            polls: PollsConfiguration {
                max_options: config.statuses.poll_max_options,
                max_characters_per_option: config.statuses.poll_option_max_chars,
                min_expiration: POLL_MIN_EXPIRATION,
                max_expiration: POLL_MAX_EXPIRATION,
            },
            accounts: AccountsConfiguration {
                allow_custom_css: config.accounts.allow_custom_css,
                max_featured_tags: MAX_FEATURED_TAGS,
            },
            emojis: EmojisConfiguration {
                emoji_size_limit: config.media.emoji_local_max_size,
            },
        }
    }

    /// The instance account's avatar, or the bundled logo
    async fn instance_thumbnail(&self, ctx: &Context, domain: &str) -> Result<Thumbnail> {
        STORE_LOOKUPS_TOTAL
            .with_label_values(&["instance account"])
            .inc();
        let mut instance_account: Account = ctx
            .guard(self.store().get_instance_account(ctx, ""))
            .await
            .map_err(|e| ConvertError::lookup("instance account", domain, e))?;

        let Some(avatar_id) = instance_account.avatar_media_attachment_id.as_deref() else {
            return Ok(Thumbnail {
                url: format!(
                    "{}://{}/assets/{}",
                    self.config().server.protocol,
                    domain,
                    DEFAULT_THUMBNAIL
                ),
                ..Default::default()
            });
        };

        let avatar = resolve(
            self.store(),
            ctx,
            &mut instance_account.avatar_media_attachment,
            avatar_id,
        )
        .await?;

        Ok(Thumbnail {
            url: avatar.url.clone(),
            content_type: avatar.content_type.clone(),
            description: avatar.description.clone(),
            blurhash: avatar.blurhash.clone(),
        })
    }

    async fn contact_account(
        &self,
        ctx: &Context,
        instance: &mut Instance,
    ) -> Result<Option<AccountResponse>> {
        let Some(contact_id) = instance.contact_account_id.as_deref() else {
            return Ok(None);
        };

        let contact = resolve(self.store(), ctx, &mut instance.contact_account, contact_id).await?;
        let response = self
            .account_public(ctx, contact, None)
            .await
            .map_err(|e| ConvertError::nested("instance contact account", contact_id, e))?;
        Ok(Some(response))
    }
}
