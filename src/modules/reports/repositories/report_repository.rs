// Report Store: durable keyed storage for daily reports
//
// - Upsert by id (wholesale replace)
// - Date-range listing, newest business date first, then newest submission

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::core::Result;
use crate::modules::reports::models::DailyReport;

/// Storage contract for daily reports
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Insert the report, or replace every column of the existing row with the same id
    async fn save(&self, report: &DailyReport) -> Result<()>;

    /// List reports with `date` inside `[start_date, end_date]` when both bounds are given.
    /// Ordered by `date` then `created_at`, both descending.
    async fn list(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<DailyReport>>;

    /// Connectivity probe
    async fn ping(&self) -> Result<()>;
}

pub struct SqliteReportRepository {
    pool: SqlitePool,
}

impl SqliteReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for SqliteReportRepository {
    async fn save(&self, report: &DailyReport) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO daily_reports (
                id, date, store_name, staff_name, sales, purchase, labor_cost,
                utilities, promotion, cleaning, misc, communication, others,
                report_text, created_at, line_user_id
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                date = excluded.date,
                store_name = excluded.store_name,
                staff_name = excluded.staff_name,
                sales = excluded.sales,
                purchase = excluded.purchase,
                labor_cost = excluded.labor_cost,
                utilities = excluded.utilities,
                promotion = excluded.promotion,
                cleaning = excluded.cleaning,
                misc = excluded.misc,
                communication = excluded.communication,
                others = excluded.others,
                report_text = excluded.report_text,
                created_at = excluded.created_at,
                line_user_id = excluded.line_user_id
            "#,
        )
        .bind(&report.id)
        .bind(&report.date)
        .bind(&report.store_name)
        .bind(&report.staff_name)
        .bind(report.sales)
        .bind(report.purchase)
        .bind(report.labor_cost)
        .bind(report.utilities)
        .bind(report.promotion)
        .bind(report.cleaning)
        .bind(report.misc)
        .bind(report.communication)
        .bind(report.others)
        .bind(&report.report_text)
        .bind(&report.created_at)
        .bind(&report.line_user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<DailyReport>> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
            r#"
            SELECT
                id, date, store_name, staff_name, sales, purchase, labor_cost,
                utilities, promotion, cleaning, misc, communication, others,
                report_text, created_at, line_user_id
            FROM daily_reports
            WHERE 1 = 1
            "#,
        );

        // A lone bound is ignored; the range applies only when both are given
        if let (Some(start), Some(end)) = (start_date, end_date) {
            query
                .push(" AND date >= ")
                .push_bind(start)
                .push(" AND date <= ")
                .push_bind(end);
        }

        query.push(" ORDER BY date DESC, created_at DESC");

        let reports = query
            .build_query_as::<DailyReport>()
            .fetch_all(&self.pool)
            .await?;

        Ok(reports)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
