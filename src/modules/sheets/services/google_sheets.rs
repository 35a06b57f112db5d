use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::mirror_trait::SpreadsheetMirror;
use crate::config::SheetsConfig;
use crate::core::{AppError, Result};

/// Google Sheets `values:append` client
pub struct GoogleSheetsClient {
    client: Client,
    api_key: String,
    sheet_id: String,
    base_url: String,
    configured: bool,
}

#[derive(Serialize)]
struct AppendRequest<'a> {
    values: Vec<&'a [String]>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendResponse {
    #[serde(default)]
    updates: Option<AppendUpdates>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    #[serde(default)]
    updated_range: Option<String>,
}

impl GoogleSheetsClient {
    pub fn new(config: &SheetsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.trim().to_string(),
            sheet_id: config.sheet_id.trim().to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            configured: config.is_configured(),
        })
    }

    fn append_url(&self, sheet_name: &str) -> String {
        format!(
            "{}/{}/values/{}:append",
            self.base_url, self.sheet_id, sheet_name
        )
    }

    /// Single append call; returns the range the remote reports as updated
    async fn try_append(&self, sheet_name: &str, values: &[String]) -> Result<Option<String>> {
        // Sheets API: https://developers.google.com/sheets/api/reference/rest/v4/spreadsheets.values/append
        let url = self.append_url(sheet_name);

        let response = self
            .client
            .post(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("valueInputOption", "USER_ENTERED"),
            ])
            .json(&AppendRequest {
                values: vec![values],
            })
            .send()
            .await
            .map_err(|e| AppError::integration(format!("Sheets API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::integration(format!(
                "Sheets API error {}: {}",
                status, error_body
            )));
        }

        let body: AppendResponse = response.json().await.map_err(|e| {
            AppError::integration(format!("Failed to parse Sheets API response: {}", e))
        })?;

        Ok(body.updates.and_then(|u| u.updated_range))
    }
}

#[async_trait]
impl SpreadsheetMirror for GoogleSheetsClient {
    async fn append_row(&self, sheet_name: &str, values: &[String]) -> bool {
        if !self.is_configured() {
            warn!("Google Sheets mirror is not configured, skipping append");
            return false;
        }

        match self.try_append(sheet_name, values).await {
            Ok(updated_range) => {
                info!(
                    sheet = sheet_name,
                    updated_range = updated_range.as_deref().unwrap_or("unknown"),
                    "Google Sheets append succeeded"
                );
                true
            }
            Err(e) => {
                error!(sheet = sheet_name, error = %e, "Google Sheets append failed");
                false
            }
        }
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
