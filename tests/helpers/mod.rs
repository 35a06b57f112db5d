// Test Helper Modules
//
// Shared infrastructure for contract and integration tests:
// in-memory SQLite pools, app wiring, report fixtures and a fake
// Google Sheets API.
//
// Usage (from a test file under tests/<kind>/):
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code)]


// Re-export commonly used types and functions
pub use sheets_sandbox::*;
pub use test_data::*;
pub use test_database::*;
pub use test_server::*;
