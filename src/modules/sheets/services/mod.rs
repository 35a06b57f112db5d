pub mod mirror_trait;
pub mod google_sheets;

pub use google_sheets::GoogleSheetsClient;
pub use mirror_trait::SpreadsheetMirror;
