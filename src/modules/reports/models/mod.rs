pub mod daily_report;
pub mod period_summary;

pub use daily_report::{
    generate_report_id, CreateReportRequest, CreateReportResponse, DailyReport, SHEET_NAME,
};
pub use period_summary::{PeriodSummary, PeriodType, SummaryResponse, SummaryTotals};
