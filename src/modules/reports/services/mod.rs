pub mod report_service;
pub mod summary_calculator;

pub use report_service::ReportService;
pub use summary_calculator::SummaryCalculator;
