//! Account conversion
//!
//! Four shapes of the same account:
//! - public: what anyone may see
//! - sensitive: public plus the owner's `source` defaults
//! - blocked: the bare minimum shown to an account that is blocked
//! - admin: public embedded in moderator-only user details

use crate::api::converters::Converter;
use crate::api::converters::resolve::resolve;
use crate::api::dto::*;
use crate::api::fields::{acct, api_visibility, format_iso8601, nullable_timestamp, role_for_user};
use crate::context::Context;
use crate::data::{Account, Field, MediaAttachment, User};
use crate::error::{ConvertError, Result};
use crate::metrics::{STORE_LOOKUPS_TOTAL, record_conversion};

const DEFAULT_AVATAR: &str = "default_avatar.png";
const DEFAULT_HEADER: &str = "default_header.png";
const DEFAULT_STATUS_FORMAT: &str = "plain";

impl Converter {
    /// Convert an Account to the public AccountResponse
    ///
    /// # Errors
    /// Fails if a count cannot be read or, for local accounts, the user
    /// record backing the role cannot be loaded. A missing avatar or header
    /// only falls back to the default image.
    pub async fn account_to_response(
        &self,
        ctx: &Context,
        account: &mut Account,
    ) -> Result<AccountResponse> {
        let result = self.account_public(ctx, account, None).await;
        record_conversion("account", &result);
        result
    }

    /// Convert an Account to AccountResponse including `source`
    ///
    /// Only for the account's owner.
    pub async fn account_to_sensitive_response(
        &self,
        ctx: &Context,
        account: &mut Account,
    ) -> Result<AccountResponse> {
        let result = self.account_sensitive(ctx, account).await;
        record_conversion("account_sensitive", &result);
        result
    }

    /// Minimal account shown to a viewer the account has blocked
    ///
    /// Performs no store lookups.
    pub fn account_to_blocked_response(&self, account: &Account) -> AccountResponse {
        AccountResponse {
            id: account.id.clone(),
            username: account.username.clone(),
            acct: acct(account),
            display_name: account.display_name.clone(),
            locked: false,
            discoverable: false,
            bot: account.bot,
            created_at: format_iso8601(&account.created_at),
            note: String::new(),
            url: account.url.clone(),
            avatar: String::new(),
            avatar_static: String::new(),
            header: String::new(),
            header_static: String::new(),
            followers_count: 0,
            following_count: 0,
            statuses_count: 0,
            last_status_at: None,
            emojis: Vec::new(),
            fields: Vec::new(),
            suspended: account.suspended_at.is_some(),
            custom_css: String::new(),
            enable_rss: false,
            role: None,
            source: None,
        }
    }

    /// Account as seen by moderators
    ///
    /// Remote accounts carry their domain and no user details; local
    /// accounts require their user record.
    pub async fn account_to_admin_response(
        &self,
        ctx: &Context,
        account: &mut Account,
    ) -> Result<AdminAccountResponse> {
        let result = self.account_admin(ctx, account).await;
        record_conversion("account_admin", &result);
        result
    }

    async fn account_admin(&self, ctx: &Context, account: &mut Account) -> Result<AdminAccountResponse> {
        let user = if account.is_local() {
            Some(self.user_for_account(ctx, &account.id).await?)
        } else {
            None
        };
        let public = self.account_public(ctx, account, user.as_ref()).await?;

        let mut response = AdminAccountResponse {
            id: account.id.clone(),
            username: account.username.clone(),
            domain: None,
            created_at: format_iso8601(&account.created_at),
            email: String::new(),
            ip: None,
            ips: Vec::new(),
            locale: String::new(),
            invite_request: None,
            role: AccountRole {
                name: RoleName::User,
            },
            confirmed: false,
            approved: false,
            disabled: false,
            silenced: false,
            suspended: false,
            account: public,
            created_by_application_id: None,
            invited_by_account_id: String::new(),
        };

        match user {
            None => response.domain = Some(account.domain.clone()),
            Some(user) => {
                response.role = role_for_user(&user);
                response.email = if user.email.is_empty() {
                    user.unconfirmed_email
                } else {
                    user.email
                };
                response.ip = user.current_sign_in_ip.map(|ip| ip.to_string());
                response.locale = user.locale;
                response.invite_request =
                    (!account.reason.is_empty()).then(|| account.reason.clone());
                response.confirmed = user.confirmed_at.is_some();
                response.approved = user.approved;
                response.disabled = user.disabled;
                response.silenced = account.silenced_at.is_some();
                response.suspended = account.suspended_at.is_some();
                response.created_by_application_id = user.created_by_application_id;
            }
        }

        Ok(response)
    }

    async fn account_sensitive(&self, ctx: &Context, account: &mut Account) -> Result<AccountResponse> {
        let mut response = self.account_public(ctx, account, None).await?;

        STORE_LOOKUPS_TOTAL
            .with_label_values(&["follow request count"])
            .inc();
        let follow_requests_count = match ctx
            .guard(self.store().count_account_follow_requests(ctx, &account.id))
            .await
        {
            Ok(count) => count,
            Err(e) if e.is_not_found() => 0,
            Err(e) => return Err(ConvertError::count("follow requests", &account.id, e)),
        };

        let status_format = if account.status_format.is_empty() {
            DEFAULT_STATUS_FORMAT.to_string()
        } else {
            account.status_format.clone()
        };

        response.source = Some(SourceResponse {
            privacy: api_visibility(account.privacy),
            sensitive: account.sensitive,
            language: account.language.clone(),
            status_format,
            note: account.note_raw.clone(),
            fields: fields_to_response(&account.fields),
            follow_requests_count,
        });

        Ok(response)
    }

    /// Public view; `user` is reused for the role when already loaded
    pub(crate) async fn account_public(
        &self,
        ctx: &Context,
        account: &mut Account,
        user: Option<&User>,
    ) -> Result<AccountResponse> {
        let followers_count = ctx
            .guard(self.store().count_account_followers(ctx, &account.id))
            .await
            .map_err(|e| ConvertError::count("followers", &account.id, e))?;
        let following_count = ctx
            .guard(self.store().count_account_follows(ctx, &account.id))
            .await
            .map_err(|e| ConvertError::count("following", &account.id, e))?;
        let statuses_count = ctx
            .guard(self.store().count_account_statuses(ctx, &account.id))
            .await
            .map_err(|e| ConvertError::count("statuses", &account.id, e))?;

        let last_status_at = match ctx
            .guard(self.store().get_account_last_posted(ctx, &account.id))
            .await
        {
            Ok(posted) => nullable_timestamp(posted.as_ref()),
            Err(e) if e.is_interrupted() => {
                return Err(ConvertError::lookup("last posted", &account.id, e));
            }
            Err(e) => {
                if !e.is_not_found() {
                    tracing::warn!(account_id = %account.id, error = %e, "error getting last posted time");
                }
                None
            }
        };

        let (avatar, avatar_static) = self
            .profile_image(
                ctx,
                "avatar",
                &account.id,
                account.avatar_media_attachment_id.as_deref(),
                &mut account.avatar_media_attachment,
            )
            .await?
            .unwrap_or_default();
        let (header, header_static) = self
            .profile_image(
                ctx,
                "header",
                &account.id,
                account.header_media_attachment_id.as_deref(),
                &mut account.header_media_attachment,
            )
            .await?
            .unwrap_or_default();

        let emojis = self
            .emojis_to_responses(ctx, &mut account.emojis, &account.emoji_ids)
            .await?
            .into_logged("emoji", &account.id);

        let role = if account.is_local() {
            match user {
                Some(user) => Some(role_for_user(user)),
                None => Some(role_for_user(&self.user_for_account(ctx, &account.id).await?)),
            }
        } else {
            None
        };

        Ok(AccountResponse {
            id: account.id.clone(),
            username: account.username.clone(),
            acct: acct(account),
            display_name: account.display_name.clone(),
            locked: account.locked,
            discoverable: account.discoverable,
            bot: account.bot,
            created_at: format_iso8601(&account.created_at),
            note: account.note.clone(),
            url: account.url.clone(),
            avatar: self.or_default_asset(avatar, DEFAULT_AVATAR),
            avatar_static: self.or_default_asset(avatar_static, DEFAULT_AVATAR),
            header: self.or_default_asset(header, DEFAULT_HEADER),
            header_static: self.or_default_asset(header_static, DEFAULT_HEADER),
            followers_count,
            following_count,
            statuses_count,
            last_status_at,
            emojis,
            fields: fields_to_response(&account.fields),
            suspended: account.suspended_at.is_some(),
            custom_css: account.custom_css.clone(),
            enable_rss: account.enable_rss,
            role,
            source: None,
        })
    }

    /// URL and static URL of an avatar or header, if one can be loaded
    async fn profile_image(
        &self,
        ctx: &Context,
        kind: &'static str,
        account_id: &str,
        attachment_id: Option<&str>,
        slot: &mut Option<Box<MediaAttachment>>,
    ) -> Result<Option<(String, String)>> {
        let Some(attachment_id) = attachment_id else {
            return Ok(None);
        };

        match resolve(self.store(), ctx, slot, attachment_id).await {
            Ok(attachment) => Ok(Some((
                attachment.url.clone(),
                attachment.thumbnail.url.clone(),
            ))),
            Err(e) if e.is_interrupted() => Err(e),
            Err(e) => {
                tracing::warn!(account_id, attachment_id, error = %e, "error getting {}", kind);
                Ok(None)
            }
        }
    }

    pub(crate) async fn user_for_account(&self, ctx: &Context, account_id: &str) -> Result<User> {
        STORE_LOOKUPS_TOTAL.with_label_values(&["user"]).inc();
        ctx.guard(self.store().get_user_by_account_id(ctx, account_id))
            .await
            .map_err(|e| ConvertError::lookup("user", account_id, e))
    }

    fn or_default_asset(&self, url: String, default: &str) -> String {
        if url.is_empty() {
            self.asset_url(default)
        } else {
            url
        }
    }
}

fn fields_to_response(fields: &[Field]) -> Vec<FieldResponse> {
    fields
        .iter()
        .map(|field| FieldResponse {
            name: field.name.clone(),
            value: field.value.clone(),
            verified_at: nullable_timestamp(field.verified_at.as_ref()),
        })
        .collect()
}
