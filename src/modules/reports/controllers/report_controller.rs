use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::reports::models::{CreateReportRequest, PeriodType};
use crate::modules::reports::services::ReportService;

/// Query parameters for listing reports
#[derive(Debug, Default, Deserialize)]
pub struct ReportsQuery {
    /// Inclusive lower bound (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Inclusive upper bound (YYYY-MM-DD)
    pub end_date: Option<String>,
}

/// Query parameters for the summary endpoint
#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    /// daily | weekly | monthly (default daily)
    pub period_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// `?start_date=` is treated the same as leaving the parameter out
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Create a daily report
/// POST /api/reports
pub async fn create_report(
    service: web::Data<Arc<ReportService>>,
    request: web::Json<CreateReportRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_report(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// List reports, newest first
/// GET /api/reports
pub async fn list_reports(
    service: web::Data<Arc<ReportService>>,
    query: web::Query<ReportsQuery>,
) -> Result<HttpResponse, AppError> {
    let reports = service
        .list_reports(non_blank(&query.start_date), non_blank(&query.end_date))
        .await?;

    Ok(HttpResponse::Ok().json(reports))
}

/// Period summary
/// GET /api/summary
pub async fn get_summary(
    service: web::Data<Arc<ReportService>>,
    query: web::Query<SummaryQuery>,
) -> Result<HttpResponse, AppError> {
    let period_type = PeriodType::from_query(query.period_type.as_deref());
    let summary = service
        .summarize(
            period_type,
            non_blank(&query.start_date),
            non_blank(&query.end_date),
        )
        .await?;

    Ok(HttpResponse::Ok().json(summary))
}

/// Configure report routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/reports")
            .route(web::get().to(list_reports))
            .route(web::post().to(create_report)),
    )
    .service(web::resource("/summary").route(web::get().to(get_summary)));
}
