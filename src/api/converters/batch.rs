//! Batch conversion of child lists
//!
//! A status or account carries its attachments, emojis, tags and mentions
//! either loaded or as ids. A batch uses the loaded list when it is
//! non-empty and otherwise fetches by id. Items that fail to fetch or convert
//! are skipped and described in [`Partial::error`]; the rest keep their input
//! order. Only an interrupted context aborts a batch.

use crate::api::converters::Converter;
use crate::api::converters::resolve::{self, Fetch};
use crate::api::dto::{EmojiResponse, MediaAttachmentResponse, MentionResponse, TagResponse};
use crate::context::Context;
use crate::data::{Emoji, MediaAttachment, Mention, Tag};
use crate::error::{ConvertError, MultiError, Result, StoreError};
use crate::metrics::{BATCH_ITEM_FAILURES_TOTAL, STORE_LOOKUPS_TOTAL};

/// Result of a batch conversion: what converted, plus what was skipped
#[derive(Debug, Clone, PartialEq)]
pub struct Partial<T> {
    pub items: Vec<T>,
    pub error: Option<MultiError>,
}

impl<T> Partial<T> {
    fn finish(kind: &str, items: Vec<T>, errs: MultiError) -> Self {
        if !errs.is_empty() {
            BATCH_ITEM_FAILURES_TOTAL
                .with_label_values(&[kind])
                .inc_by(errs.len() as u64);
        }
        Self {
            items,
            error: errs.combine(),
        }
    }

    /// True when no item was skipped
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Converted items; skipped ones are logged against `parent_id`
    pub(crate) fn into_logged(self, kind: &str, parent_id: &str) -> Vec<T> {
        if let Some(error) = &self.error {
            tracing::warn!(kind, parent_id, error = %error, "skipped items in child list");
        }
        self.items
    }
}

impl Converter {
    /// Fetch each id in order, recording and skipping failures
    async fn fetch_each<T: Fetch>(
        &self,
        ctx: &Context,
        ids: &[String],
        errs: &mut MultiError,
    ) -> Result<Vec<T>> {
        let mut fetched = Vec::with_capacity(ids.len());
        for id in ids {
            match resolve::fetch::<T>(self.store(), ctx, id).await {
                Ok(entity) => fetched.push(entity),
                Err(e) if e.is_interrupted() => {
                    return Err(ConvertError::lookup(T::ENTITY, id, e));
                }
                Err(e) => errs.append_fmt(format_args!("error fetching {} {}: {}", T::ENTITY, id, e)),
            }
        }
        Ok(fetched)
    }

    pub async fn attachments_to_responses(
        &self,
        ctx: &Context,
        attachments: &[MediaAttachment],
        ids: &[String],
    ) -> Result<Partial<MediaAttachmentResponse>> {
        let mut errs = MultiError::new();
        let fetched: Vec<MediaAttachment>;
        let attachments = if attachments.is_empty() {
            fetched = self.fetch_each(ctx, ids, &mut errs).await?;
            fetched.as_slice()
        } else {
            attachments
        };

        let items = attachments
            .iter()
            .map(|attachment| self.attachment_to_response(attachment))
            .collect();
        Ok(Partial::finish("attachment", items, errs))
    }

    pub async fn emojis_to_responses(
        &self,
        ctx: &Context,
        emojis: &mut [Emoji],
        ids: &[String],
    ) -> Result<Partial<EmojiResponse>> {
        let mut errs = MultiError::new();
        let mut fetched: Vec<Emoji>;
        let emojis = if emojis.is_empty() {
            fetched = self.fetch_each(ctx, ids, &mut errs).await?;
            fetched.as_mut_slice()
        } else {
            emojis
        };

        let mut items = Vec::with_capacity(emojis.len());
        for emoji in emojis.iter_mut() {
            match self.emoji_to_response(ctx, emoji).await {
                Ok(response) => items.push(response),
                Err(e) if e.is_interrupted() => return Err(e),
                Err(e) => errs.append_fmt(format_args!("error converting emoji {}: {}", emoji.id, e)),
            }
        }
        Ok(Partial::finish("emoji", items, errs))
    }

    pub async fn tags_to_responses(
        &self,
        ctx: &Context,
        tags: &[Tag],
        ids: &[String],
    ) -> Result<Partial<TagResponse>> {
        let mut errs = MultiError::new();
        let fetched: Vec<Tag>;
        let tags = if tags.is_empty() {
            fetched = self.fetch_each(ctx, ids, &mut errs).await?;
            fetched.as_slice()
        } else {
            tags
        };

        let items = tags.iter().map(|tag| self.tag_to_response(tag)).collect();
        Ok(Partial::finish("tag", items, errs))
    }

    /// Mentions are fetched with a single set lookup
    pub async fn mentions_to_responses(
        &self,
        ctx: &Context,
        mentions: &mut [Mention],
        ids: &[String],
    ) -> Result<Partial<MentionResponse>> {
        let mut errs = MultiError::new();
        let mut fetched: Vec<Mention>;
        let mentions = if mentions.is_empty() && !ids.is_empty() {
            fetched = self.fetch_mentions(ctx, ids, &mut errs).await?;
            fetched.as_mut_slice()
        } else {
            mentions
        };

        let mut items = Vec::with_capacity(mentions.len());
        for mention in mentions.iter_mut() {
            match self.mention_to_response(ctx, mention).await {
                Ok(response) => items.push(response),
                Err(e) if e.is_interrupted() => return Err(e),
                Err(e) => errs.append_fmt(format_args!(
                    "error converting mention {}: {}",
                    mention.id, e
                )),
            }
        }
        Ok(Partial::finish("mention", items, errs))
    }

    async fn fetch_mentions(
        &self,
        ctx: &Context,
        ids: &[String],
        errs: &mut MultiError,
    ) -> Result<Vec<Mention>> {
        STORE_LOOKUPS_TOTAL.with_label_values(&["mention"]).inc();
        match ctx.guard(self.store().get_mentions(ctx, ids)).await {
            Ok(found) => {
                for id in ids {
                    if !found.iter().any(|mention| &mention.id == id) {
                        errs.append_fmt(format_args!(
                            "error fetching mention {}: {}",
                            id,
                            StoreError::NotFound
                        ));
                    }
                }
                Ok(found)
            }
            Err(e) if e.is_interrupted() => Err(ConvertError::lookup("mentions", ids.join(","), e)),
            Err(e) => {
                errs.append_fmt(format_args!("error fetching mentions {}: {}", ids.join(","), e));
                Ok(Vec::new())
            }
        }
    }
}
