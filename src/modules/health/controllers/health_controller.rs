use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::reports::ReportService;

/// Which outbound integrations have credentials, fixed at startup
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IntegrationStatus {
    pub google_sheets_configured: bool,
    pub line_configured: bool,
}

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub google_sheets_configured: bool,
    pub line_configured: bool,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub database: bool,
    pub application: bool,
}

/// GET /api/health - Liveness probe
/// Reports integration configuration; does not touch storage
pub async fn health_check(status: web::Data<IntegrationStatus>) -> impl Responder {
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Local::now().to_rfc3339(),
        google_sheets_configured: status.google_sheets_configured,
        line_configured: status.line_configured,
    };

    HttpResponse::Ok().json(response)
}

/// GET /api/ready - Readiness probe
/// Returns 200 once the report store answers queries
pub async fn readiness_check(service: web::Data<Arc<ReportService>>) -> impl Responder {
    let mut checks = ReadinessChecks {
        database: false,
        application: true,
    };

    match service.check_storage().await {
        Ok(()) => checks.database = true,
        Err(e) => tracing::error!("Database readiness check failed: {}", e),
    }

    let ready = checks.database && checks.application;
    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
