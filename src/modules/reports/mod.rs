pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{DailyReport, PeriodSummary, PeriodType, SummaryResponse};
pub use repositories::{ReportRepository, SqliteReportRepository};
pub use services::{ReportService, SummaryCalculator};
