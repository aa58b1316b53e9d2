//! Notification conversion

use crate::api::converters::Converter;
use crate::api::converters::resolve::resolve;
use crate::api::dto::NotificationResponse;
use crate::api::fields::format_iso8601;
use crate::context::Context;
use crate::data::Notification;
use crate::error::{ConvertError, Result};
use crate::metrics::record_conversion;

impl Converter {
    /// Convert a Notification to NotificationResponse
    ///
    /// The status is rendered as seen by the notified account. When the
    /// status is a boost, the boosted status is carried instead.
    pub async fn notification_to_response(
        &self,
        ctx: &Context,
        notification: &mut Notification,
    ) -> Result<NotificationResponse> {
        let result = self.notification(ctx, notification).await;
        record_conversion("notification", &result);
        result
    }

    async fn notification(
        &self,
        ctx: &Context,
        notification: &mut Notification,
    ) -> Result<NotificationResponse> {
        let target = resolve(
            self.store(),
            ctx,
            &mut notification.target_account,
            &notification.target_account_id,
        )
        .await?;
        let origin = resolve(
            self.store(),
            ctx,
            &mut notification.origin_account,
            &notification.origin_account_id,
        )
        .await?;

        let account = self
            .account_public(ctx, origin, None)
            .await
            .map_err(|e| ConvertError::nested("notification origin account", &origin.id, e))?;

        let status = match notification.status_id.as_deref() {
            Some(status_id) => {
                let status = resolve(self.store(), ctx, &mut notification.status, status_id).await?;

                // Either party is usually the author; reuse it rather than refetch.
                if status.account.is_none() {
                    if status.account_id == target.id {
                        status.account = Some(Box::new(target.clone()));
                    } else if status.account_id == origin.id {
                        status.account = Some(Box::new(origin.clone()));
                    }
                }

                let mut response = self
                    .status_to_response(ctx, status, Some(&*target))
                    .await
                    .map_err(|e| ConvertError::nested("notification status", status_id, e))?;
                Some(match response.reblog.take() {
                    Some(reblog) => *reblog,
                    None => response,
                })
            }
            None => None,
        };

        Ok(NotificationResponse {
            id: notification.id.clone(),
            notification_type: notification.notification_type.as_str().to_string(),
            created_at: format_iso8601(&notification.created_at),
            account,
            status,
        })
    }
}
