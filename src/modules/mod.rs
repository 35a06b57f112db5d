pub mod health;
pub mod line;
pub mod reports;
pub mod sheets;

use actix_web::web;

use crate::middleware::{json_error_handler, query_error_handler};

/// Mount every `/api` route and the extractor error handlers.
///
/// Expects `web::Data<Arc<ReportService>>` and `web::Data<IntegrationStatus>`
/// to be registered on the `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api")
                .configure(health::configure)
                .configure(reports::configure)
                .configure(line::configure),
        );
}
