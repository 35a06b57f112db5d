use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopreport::config::{database::run_migrations, Config, LogFormat};
use shopreport::middleware::RequestId;
use shopreport::modules::{self, health::IntegrationStatus};
use shopreport::reports::{ReportService, SqliteReportRepository};
use shopreport::sheets::{GoogleSheetsClient, SpreadsheetMirror};

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("shopreport={},actix_web=info", config.app.log_level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting restaurant daily report API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;
    run_migrations(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!(
        "Database pool initialized ({} connections max)",
        config.database.pool_size()
    );

    let mirror = Arc::new(
        GoogleSheetsClient::new(&config.sheets).context("Failed to build Google Sheets client")?,
    );
    let status = IntegrationStatus {
        google_sheets_configured: mirror.is_configured(),
        line_configured: config.line.is_configured(),
    };
    if !status.google_sheets_configured {
        tracing::warn!("Google Sheets credentials missing, mirroring disabled");
    }
    if !status.line_configured {
        tracing::warn!("LINE credentials missing, messaging integration disabled");
    }

    let report_service = Arc::new(ReportService::new(
        Arc::new(SqliteReportRepository::new(db_pool)),
        mirror,
    ));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let allowed_origin = config.app.allowed_origin.clone();
    let server = HttpServer::new(move || {
        let cors = match &allowed_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(cors)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(report_service.clone()))
            .app_data(web::Data::new(status))
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
