use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tracing::{error, info, warn};

use crate::core::Result;
use crate::modules::reports::models::{
    CreateReportRequest, CreateReportResponse, DailyReport, PeriodType, SummaryResponse,
    SHEET_NAME,
};
use crate::modules::reports::repositories::ReportRepository;
use crate::modules::reports::services::SummaryCalculator;
use crate::modules::sheets::SpreadsheetMirror;

/// Service for daily report business logic
pub struct ReportService {
    report_repo: Arc<dyn ReportRepository>,
    mirror: Arc<dyn SpreadsheetMirror>,
}

impl ReportService {
    pub fn new(report_repo: Arc<dyn ReportRepository>, mirror: Arc<dyn SpreadsheetMirror>) -> Self {
        Self {
            report_repo,
            mirror,
        }
    }

    /// Validate, store, then mirror a submitted report.
    ///
    /// The mirror outcome only sets `saved_to_sheets`; a failed append never
    /// undoes the stored report.
    pub async fn create_report(&self, request: CreateReportRequest) -> Result<CreateReportResponse> {
        self.create_report_at(request, Local::now().naive_local()).await
    }

    pub async fn create_report_at(
        &self,
        request: CreateReportRequest,
        now: NaiveDateTime,
    ) -> Result<CreateReportResponse> {
        let report = request.into_report(now)?;

        if let Err(e) = self.report_repo.save(&report).await {
            error!(report_id = %report.id, error = %e, "Failed to save daily report");
            return Err(e);
        }

        let saved_to_sheets = self
            .mirror
            .append_row(SHEET_NAME, &report.to_sheet_row())
            .await;

        info!(
            report_id = %report.id,
            date = %report.date,
            store = %report.store_name,
            saved_to_sheets,
            "Daily report created"
        );

        Ok(CreateReportResponse {
            success: true,
            id: report.id,
            saved_to_sheets,
        })
    }

    /// Reports inside the inclusive date range (both bounds or neither), newest first
    pub async fn list_reports(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<DailyReport>> {
        self.report_repo.list(start_date, end_date).await
    }

    /// Period summary over the reports inside the optional date bounds
    pub async fn summarize(
        &self,
        period_type: PeriodType,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<SummaryResponse> {
        let reports = self.report_repo.list(start_date, end_date).await?;
        let summary = SummaryCalculator::summarize(&reports, period_type);

        if summary.is_empty() {
            warn!(
                period_type = %period_type,
                start_date = ?start_date,
                end_date = ?end_date,
                "Empty summary generated"
            );
        }

        Ok(summary)
    }

    pub fn mirror_configured(&self) -> bool {
        self.mirror.is_configured()
    }

    pub async fn check_storage(&self) -> Result<()> {
        self.report_repo.ping().await
    }
}
