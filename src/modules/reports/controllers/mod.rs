mod report_controller;

pub use report_controller::{create_report, get_summary, list_reports, ReportsQuery, SummaryQuery};

// Re-export configure for the app router
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    report_controller::configure_routes(cfg);
}
