//! Mentions, tags, relationships and applications

use crate::api::converters::Converter;
use crate::api::converters::resolve::resolve;
use crate::api::dto::{ApplicationResponse, MentionResponse, RelationshipResponse, TagResponse};
use crate::api::fields::acct;
use crate::context::Context;
use crate::data::{Application, Mention, Relationship, Tag};
use crate::error::Result;

impl Converter {
    /// Convert a Mention to MentionResponse describing its target account
    pub async fn mention_to_response(
        &self,
        ctx: &Context,
        mention: &mut Mention,
    ) -> Result<MentionResponse> {
        let target = resolve(
            self.store(),
            ctx,
            &mut mention.target_account,
            &mention.target_account_id,
        )
        .await?;

        Ok(MentionResponse {
            id: target.id.clone(),
            username: target.username.clone(),
            url: target.url.clone(),
            acct: acct(target),
        })
    }

    pub fn tag_to_response(&self, tag: &Tag) -> TagResponse {
        TagResponse {
            name: tag.name.clone(),
            url: tag.url.clone(),
        }
    }

    pub fn relationship_to_response(&self, relationship: &Relationship) -> RelationshipResponse {
        RelationshipResponse {
            id: relationship.id.clone(),
            following: relationship.following,
            showing_reblogs: relationship.showing_reblogs,
            notifying: relationship.notifying,
            followed_by: relationship.followed_by,
            blocking: relationship.blocking,
            blocked_by: relationship.blocked_by,
            muting: relationship.muting,
            muting_notifications: relationship.muting_notifications,
            requested: relationship.requested,
            domain_blocking: relationship.domain_blocking,
            endorsed: relationship.endorsed,
            note: relationship.note.clone(),
        }
    }

    /// Application as shown on statuses: name and website only
    pub fn app_to_public_response(&self, app: &Application) -> ApplicationResponse {
        ApplicationResponse {
            id: None,
            name: app.name.clone(),
            website: app.website.clone(),
            redirect_uri: None,
            client_id: None,
            client_secret: None,
        }
    }

    /// Application including its OAuth credentials, for the app's owner
    pub fn app_to_sensitive_response(&self, app: &Application) -> ApplicationResponse {
        ApplicationResponse {
            id: Some(app.id.clone()),
            name: app.name.clone(),
            website: app.website.clone(),
            redirect_uri: Some(app.redirect_uri.clone()),
            client_id: Some(app.client_id.clone()),
            client_secret: Some(app.client_secret.clone()),
        }
    }
}
