use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub sheets: SheetsConfig,
    pub line: LineConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
    pub allowed_origin: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Google Sheets mirror settings. Blank credentials disable the mirror.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetsConfig {
    pub api_key: String,
    pub sheet_id: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

/// LINE messaging channel settings. Only used to report configuration state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineConfig {
    pub channel_secret: String,
    pub channel_access_token: String,
}

pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

impl SheetsConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.sheet_id.trim().is_empty()
    }
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            sheet_id: String::new(),
            base_url: DEFAULT_SHEETS_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl LineConfig {
    pub fn is_configured(&self) -> bool {
        !self.channel_secret.trim().is_empty() && !self.channel_access_token.trim().is_empty()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let log_format = match env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "pretty".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            "pretty" | "text" => LogFormat::Pretty,
            other => {
                return Err(AppError::Configuration(format!(
                    "Invalid LOG_FORMAT '{}', expected 'pretty' or 'json'",
                    other
                )))
            }
        };

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format,
                allowed_origin: env::var("ALLOWED_ORIGIN")
                    .ok()
                    .filter(|origin| !origin.trim().is_empty()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            sheets: SheetsConfig {
                api_key: env::var("GOOGLE_SHEETS_API_KEY").unwrap_or_default(),
                sheet_id: env::var("GOOGLE_SHEET_ID").unwrap_or_default(),
                base_url: env::var("GOOGLE_SHEETS_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_SHEETS_BASE_URL.to_string()),
                timeout_secs: env::var("SHEETS_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid SHEETS_TIMEOUT_SECS".to_string())
                    })?,
            },
            line: LineConfig {
                channel_secret: env::var("LINE_CHANNEL_SECRET").unwrap_or_default(),
                channel_access_token: env::var("LINE_CHANNEL_ACCESS_TOKEN").unwrap_or_default(),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "PORT must be greater than 0".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }

        if self.sheets.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "SHEETS_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
