pub mod services;

pub use services::{GoogleSheetsClient, SpreadsheetMirror};
