//! Status conversion

use futures::future::BoxFuture;

use crate::api::converters::resolve::{self, resolve};
use crate::api::converters::{Converter, MAX_BOOST_DEPTH};
use crate::api::dto::StatusResponse;
use crate::api::fields::{api_visibility, format_iso8601};
use crate::context::Context;
use crate::data::{Account, Application, Status};
use crate::error::{ConvertError, Result, StoreError};
use crate::metrics::record_conversion;

/// The viewer's own interactions with a status
#[derive(Debug, Clone, Copy, Default)]
struct Interactions {
    favourited: bool,
    reblogged: bool,
    muted: bool,
    bookmarked: bool,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

impl Converter {
    /// Convert a Status to StatusResponse as seen by `viewer`
    ///
    /// The author and, for a boost, the boosted status and its author are
    /// fetched if absent and written back onto `status`. Without a viewer
    /// every interaction flag is false.
    ///
    /// # Errors
    /// Fails when counts, the author, the boosted status or the creating
    /// application cannot be loaded, or when the boost chain is deeper than
    /// [`MAX_BOOST_DEPTH`].
    pub async fn status_to_response(
        &self,
        ctx: &Context,
        status: &mut Status,
        viewer: Option<&Account>,
    ) -> Result<StatusResponse> {
        let result = self.status_at_depth(ctx, status, viewer, 0).await;
        record_conversion("status", &result);
        result
    }

    fn status_at_depth<'a>(
        &'a self,
        ctx: &'a Context,
        status: &'a mut Status,
        viewer: Option<&'a Account>,
        depth: usize,
    ) -> BoxFuture<'a, Result<StatusResponse>> {
        Box::pin(async move {
            let replies_count = ctx
                .guard(self.store().count_status_replies(ctx, &status.id))
                .await
                .map_err(|e| ConvertError::count("replies", &status.id, e))?;
            let reblogs_count = ctx
                .guard(self.store().count_status_reblogs(ctx, &status.id))
                .await
                .map_err(|e| ConvertError::count("reblogs", &status.id, e))?;
            let favourites_count = ctx
                .guard(self.store().count_status_faves(ctx, &status.id))
                .await
                .map_err(|e| ConvertError::count("faves", &status.id, e))?;

            let reblog = match status.boost_of_id.as_deref() {
                Some(boost_of_id) => {
                    if depth >= MAX_BOOST_DEPTH {
                        return Err(ConvertError::RecursionLimit {
                            status_id: status.id.clone(),
                            depth,
                        });
                    }
                    let boosted = resolve(self.store(), ctx, &mut status.boost_of, boost_of_id).await?;
                    let boosted_id = boosted.id.clone();
                    let response = self
                        .status_at_depth(ctx, boosted, viewer, depth + 1)
                        .await
                        .map_err(|e| match e {
                            ConvertError::RecursionLimit { .. } => e,
                            e => ConvertError::nested("boosted status", boosted_id, e),
                        })?;
                    Some(Box::new(response))
                }
                None => None,
            };

            let application = match status.created_with_application_id.as_deref() {
                Some(app_id) => {
                    let app = resolve::fetch::<Application>(self.store(), ctx, app_id)
                        .await
                        .map_err(|e| ConvertError::lookup("application", app_id, e))?;
                    Some(self.app_to_public_response(&app))
                }
                None => None,
            };

            let author = resolve(self.store(), ctx, &mut status.account, &status.account_id).await?;
            let account = self
                .account_public(ctx, author, None)
                .await
                .map_err(|e| ConvertError::nested("status author", &status.account_id, e))?;

            let media_attachments = self
                .attachments_to_responses(ctx, &status.attachments, &status.attachment_ids)
                .await?
                .into_logged("attachment", &status.id);
            let mentions = self
                .mentions_to_responses(ctx, &mut status.mentions, &status.mention_ids)
                .await?
                .into_logged("mention", &status.id);
            let tags = self
                .tags_to_responses(ctx, &status.tags, &status.tag_ids)
                .await?
                .into_logged("tag", &status.id);
            let emojis = self
                .emojis_to_responses(ctx, &mut status.emojis, &status.emoji_ids)
                .await?
                .into_logged("emoji", &status.id);

            let interactions = match viewer {
                None => Interactions::default(),
                Some(viewer) => match self.interactions(ctx, &status.id, &viewer.id).await {
                    Ok(interactions) => interactions,
                    Err(e) if e.is_interrupted() => {
                        return Err(ConvertError::lookup("status interactions", &status.id, e));
                    }
                    Err(e) => {
                        tracing::warn!(
                            status_id = %status.id,
                            viewer_id = %viewer.id,
                            error = %e,
                            "error getting status interactions; defaulting to false"
                        );
                        Interactions::default()
                    }
                },
            };

            Ok(StatusResponse {
                id: status.id.clone(),
                created_at: format_iso8601(&status.created_at),
                in_reply_to_id: non_empty(status.in_reply_to_id.as_deref()),
                in_reply_to_account_id: non_empty(status.in_reply_to_account_id.as_deref()),
                sensitive: status.sensitive,
                spoiler_text: status.content_warning.clone(),
                visibility: api_visibility(status.visibility),
                language: non_empty(Some(status.language.as_str())),
                uri: status.uri.clone(),
                url: status.url.clone(),
                replies_count,
                reblogs_count,
                favourites_count,
                favourited: interactions.favourited,
                bookmarked: interactions.bookmarked,
                muted: interactions.muted,
                reblogged: interactions.reblogged,
                pinned: status.pinned,
                content: status.content.clone(),
                reblog,
                application,
                account,
                media_attachments,
                mentions,
                tags,
                emojis,
                card: None,
                poll: None,
                text: status.text.clone(),
            })
        })
    }

    async fn interactions(
        &self,
        ctx: &Context,
        status_id: &str,
        viewer_id: &str,
    ) -> std::result::Result<Interactions, StoreError> {
        let store = self.store();
        Ok(Interactions {
            favourited: ctx.guard(store.is_status_faved_by(ctx, status_id, viewer_id)).await?,
            reblogged: ctx
                .guard(store.is_status_reblogged_by(ctx, status_id, viewer_id))
                .await?,
            muted: ctx.guard(store.is_status_muted_by(ctx, status_id, viewer_id)).await?,
            bookmarked: ctx
                .guard(store.is_status_bookmarked_by(ctx, status_id, viewer_id))
                .await?,
        })
    }
}
