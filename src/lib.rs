//! Restaurant daily report API
//!
//! Stores daily sales/expense reports, mirrors them to Google Sheets and
//! serves period profit summaries.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::health;
pub use modules::reports;
pub use modules::sheets;
