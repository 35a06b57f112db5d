use async_trait::async_trait;

/// Best-effort replication of rows to an external spreadsheet
#[async_trait]
pub trait SpreadsheetMirror: Send + Sync {
    /// Append one row to `sheet_name`.
    ///
    /// Returns `false` when the mirror is unconfigured or the remote call
    /// fails. Never returns an error: callers treat mirroring as optional.
    async fn append_row(&self, sheet_name: &str, values: &[String]) -> bool;

    /// Whether credentials and a target are present
    fn is_configured(&self) -> bool;
}
