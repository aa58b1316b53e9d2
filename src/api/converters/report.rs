//! Moderation: reports and domain blocks

use crate::api::converters::Converter;
use crate::api::converters::resolve::resolve;
use crate::api::dto::{AdminReportResponse, DomainBlockResponse, DomainResponse, ReportResponse};
use crate::api::fields::{format_iso8601, nullable_timestamp};
use crate::context::Context;
use crate::data::{Account, DomainBlock, Report};
use crate::error::{ConvertError, Result};
use crate::metrics::{STORE_LOOKUPS_TOTAL, record_conversion};

/// Reports carry no category of their own yet
const REPORT_CATEGORY: &str = "other";

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl Converter {
    /// Report as seen by the account that filed it
    pub async fn report_to_response(
        &self,
        ctx: &Context,
        report: &mut Report,
    ) -> Result<ReportResponse> {
        let result = self.report(ctx, report).await;
        record_conversion("report", &result);
        result
    }

    async fn report(&self, ctx: &Context, report: &mut Report) -> Result<ReportResponse> {
        let target = resolve(
            self.store(),
            ctx,
            &mut report.target_account,
            &report.target_account_id,
        )
        .await?;
        let target_account = self
            .account_public(ctx, target, None)
            .await
            .map_err(|e| ConvertError::nested("report target account", &report.target_account_id, e))?;

        let action_taken_at = nullable_timestamp(report.action_taken_at.as_ref());
        Ok(ReportResponse {
            id: report.id.clone(),
            created_at: format_iso8601(&report.created_at),
            action_taken: action_taken_at.is_some(),
            action_taken_at,
            action_taken_comment: non_empty(&report.action_taken),
            category: REPORT_CATEGORY.to_string(),
            comment: report.comment.clone(),
            forwarded: report.forwarded,
            status_ids: report.status_ids.clone(),
            rule_ids: Vec::new(),
            target_account,
        })
    }

    /// Report as seen by moderators
    ///
    /// Reported statuses are rendered for `viewer`. Any status that fails to
    /// convert fails the whole report.
    pub async fn report_to_admin_response(
        &self,
        ctx: &Context,
        report: &mut Report,
        viewer: Option<&Account>,
    ) -> Result<AdminReportResponse> {
        let result = self.admin_report(ctx, report, viewer).await;
        record_conversion("report_admin", &result);
        result
    }

    async fn admin_report(
        &self,
        ctx: &Context,
        report: &mut Report,
        viewer: Option<&Account>,
    ) -> Result<AdminReportResponse> {
        let reporter = resolve(self.store(), ctx, &mut report.account, &report.account_id).await?;
        let account = self
            .account_to_admin_response(ctx, reporter)
            .await
            .map_err(|e| ConvertError::nested("report account", &report.account_id, e))?;

        let target = resolve(
            self.store(),
            ctx,
            &mut report.target_account,
            &report.target_account_id,
        )
        .await?;
        let target_account = self
            .account_to_admin_response(ctx, target)
            .await
            .map_err(|e| ConvertError::nested("report target account", &report.target_account_id, e))?;

        let action_taken_by_account = match report.action_taken_by_account_id.as_deref() {
            Some(moderator_id) => {
                let moderator = resolve(
                    self.store(),
                    ctx,
                    &mut report.action_taken_by_account,
                    moderator_id,
                )
                .await?;
                let response = self
                    .account_to_admin_response(ctx, moderator)
                    .await
                    .map_err(|e| ConvertError::nested("report moderator account", moderator_id, e))?;
                Some(response)
            }
            None => None,
        };

        if report.statuses.is_empty() && !report.status_ids.is_empty() {
            STORE_LOOKUPS_TOTAL.with_label_values(&["status"]).inc();
            report.statuses = ctx
                .guard(self.store().get_statuses(ctx, &report.status_ids))
                .await
                .map_err(|e| ConvertError::lookup("statuses", report.status_ids.join(","), e))?;
        }

        let mut statuses = Vec::with_capacity(report.statuses.len());
        for status in report.statuses.iter_mut() {
            let response = self
                .status_to_response(ctx, status, viewer)
                .await
                .map_err(|e| ConvertError::nested("reported status", &status.id, e))?;
            statuses.push(response);
        }

        let action_taken_at = nullable_timestamp(report.action_taken_at.as_ref());
        Ok(AdminReportResponse {
            id: report.id.clone(),
            action_taken: action_taken_at.is_some(),
            action_taken_at,
            category: REPORT_CATEGORY.to_string(),
            comment: report.comment.clone(),
            forwarded: report.forwarded,
            created_at: format_iso8601(&report.created_at),
            updated_at: format_iso8601(&report.updated_at),
            account,
            target_account,
            assigned_account: action_taken_by_account.clone(),
            action_taken_by_account,
            action_taken_comment: non_empty(&report.action_taken),
            statuses,
            rules: Vec::new(),
        })
    }

    /// Convert a DomainBlock to DomainBlockResponse
    ///
    /// The export form carries only the domain and its public comment.
    pub fn domain_block_to_response(&self, block: &DomainBlock, export: bool) -> DomainBlockResponse {
        let domain = DomainResponse {
            domain: block.domain.clone(),
            public_comment: block.public_comment.clone(),
        };

        if export {
            return DomainBlockResponse {
                domain,
                id: None,
                obfuscate: false,
                private_comment: None,
                subscription_id: None,
                created_by: None,
                created_at: None,
            };
        }

        DomainBlockResponse {
            domain,
            id: Some(block.id.clone()),
            obfuscate: block.obfuscate,
            private_comment: non_empty(&block.private_comment),
            subscription_id: non_empty(&block.subscription_id),
            created_by: non_empty(&block.created_by_account_id),
            created_at: Some(format_iso8601(&block.created_at)),
        }
    }
}
