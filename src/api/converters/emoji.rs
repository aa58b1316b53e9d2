//! Custom emoji conversion

use crate::api::converters::Converter;
use crate::api::converters::resolve::resolve;
use crate::api::dto::{AdminEmojiResponse, EmojiCategoryResponse, EmojiResponse};
use crate::api::fields::format_iso8601;
use crate::context::Context;
use crate::data::{Emoji, EmojiCategory};
use crate::error::Result;

impl Converter {
    /// Convert an Emoji to EmojiResponse
    ///
    /// A set `category_id` whose category cannot be loaded fails the emoji.
    pub async fn emoji_to_response(&self, ctx: &Context, emoji: &mut Emoji) -> Result<EmojiResponse> {
        let category = match emoji.category_id.as_deref() {
            Some(category_id) => resolve(self.store(), ctx, &mut emoji.category, category_id)
                .await?
                .name
                .clone(),
            None => String::new(),
        };

        Ok(EmojiResponse {
            shortcode: emoji.shortcode.clone(),
            url: emoji.image_url.clone(),
            static_url: emoji.image_static_url.clone(),
            visible_in_picker: emoji.visible_in_picker,
            category,
        })
    }

    pub async fn emoji_to_admin_response(
        &self,
        ctx: &Context,
        emoji: &mut Emoji,
    ) -> Result<AdminEmojiResponse> {
        let response = self.emoji_to_response(ctx, emoji).await?;

        Ok(AdminEmojiResponse {
            emoji: response,
            id: emoji.id.clone(),
            disabled: emoji.disabled,
            domain: emoji.domain.clone(),
            updated_at: format_iso8601(&emoji.updated_at),
            total_file_size: emoji.image_file_size + emoji.image_static_file_size,
            content_type: emoji.image_content_type.clone(),
            uri: emoji.uri.clone(),
        })
    }

    pub fn emoji_category_to_response(&self, category: &EmojiCategory) -> EmojiCategoryResponse {
        EmojiCategoryResponse {
            id: category.id.clone(),
            name: category.name.clone(),
        }
    }
}
