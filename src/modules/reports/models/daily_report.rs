use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Amount, Result};

/// Worksheet that receives mirrored reports
pub const SHEET_NAME: &str = "daily_reports";

/// Timestamp layout for `created_at`; fixed width so text order is time order
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One daily financial submission for a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DailyReport {
    pub id: String,
    /// Business date the figures belong to (YYYY-MM-DD)
    pub date: String,
    pub store_name: String,
    pub staff_name: String,
    pub sales: f64,
    pub purchase: f64,
    pub labor_cost: f64,
    pub utilities: f64,
    pub promotion: f64,
    pub cleaning: f64,
    pub misc: f64,
    pub communication: f64,
    pub others: f64,
    pub report_text: String,
    /// Submission time, independent of `date`
    pub created_at: String,
    pub line_user_id: Option<String>,
}

impl DailyReport {
    /// Sum of the eight expense categories
    pub fn total_expenses(&self) -> f64 {
        self.purchase
            + self.labor_cost
            + self.utilities
            + self.promotion
            + self.cleaning
            + self.misc
            + self.communication
            + self.others
    }

    /// Sales minus purchase cost only
    pub fn gross_profit(&self) -> f64 {
        self.sales - self.purchase
    }

    /// Sales minus every expense category
    pub fn operating_profit(&self) -> f64 {
        self.sales - self.total_expenses()
    }

    /// Row layout for the spreadsheet mirror: the stored columns from `date`
    /// to `created_at`, without `id` or `line_user_id`.
    pub fn to_sheet_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.store_name.clone(),
            self.staff_name.clone(),
            self.sales.to_string(),
            self.purchase.to_string(),
            self.labor_cost.to_string(),
            self.utilities.to_string(),
            self.promotion.to_string(),
            self.cleaning.to_string(),
            self.misc.to_string(),
            self.communication.to_string(),
            self.others.to_string(),
            self.report_text.clone(),
            self.created_at.clone(),
        ]
    }
}

/// Body of `POST /api/reports`.
///
/// Required: `date`, `store_name`, `sales`, `purchase`. Every other amount
/// defaults to 0 and text fields default to an empty string. `id` is only
/// sent when re-submitting an existing report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateReportRequest {
    pub id: Option<String>,
    pub date: Option<String>,
    pub store_name: Option<String>,
    pub staff_name: Option<String>,
    pub sales: Option<Amount>,
    pub purchase: Option<Amount>,
    pub labor_cost: Option<Amount>,
    pub utilities: Option<Amount>,
    pub promotion: Option<Amount>,
    pub cleaning: Option<Amount>,
    pub misc: Option<Amount>,
    pub communication: Option<Amount>,
    pub others: Option<Amount>,
    pub report_text: Option<String>,
    pub line_user_id: Option<String>,
}

fn required_amount(value: Option<Amount>, field: &'static str) -> Result<f64> {
    value
        .ok_or_else(|| AppError::invalid_field(field, "is required"))?
        .validate(field)
}

fn optional_amount(value: Option<Amount>, field: &'static str) -> Result<f64> {
    value.unwrap_or_default().validate(field)
}

impl CreateReportRequest {
    /// Validate the request and build the record to store.
    ///
    /// `now` becomes `created_at` and feeds the generated id.
    pub fn into_report(self, now: NaiveDateTime) -> Result<DailyReport> {
        let date = self
            .date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| AppError::invalid_field("date", "is required"))?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| {
                AppError::invalid_field(
                    "date",
                    format!("invalid date '{}', expected YYYY-MM-DD", date),
                )
            })?
            .format("%Y-%m-%d")
            .to_string();

        let store_name = self
            .store_name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::invalid_field("store_name", "is required"))?;

        let sales = required_amount(self.sales, "sales")?;
        let purchase = required_amount(self.purchase, "purchase")?;

        let id = match self.id {
            Some(id) if id.trim().is_empty() => {
                return Err(AppError::invalid_field("id", "cannot be blank"));
            }
            Some(id) => id.trim().to_string(),
            None => generate_report_id(&date, &store_name, now),
        };

        Ok(DailyReport {
            id,
            date,
            store_name,
            staff_name: self.staff_name.unwrap_or_default(),
            sales,
            purchase,
            labor_cost: optional_amount(self.labor_cost, "labor_cost")?,
            utilities: optional_amount(self.utilities, "utilities")?,
            promotion: optional_amount(self.promotion, "promotion")?,
            cleaning: optional_amount(self.cleaning, "cleaning")?,
            misc: optional_amount(self.misc, "misc")?,
            communication: optional_amount(self.communication, "communication")?,
            others: optional_amount(self.others, "others")?,
            report_text: self.report_text.unwrap_or_default(),
            created_at: now.format(CREATED_AT_FORMAT).to_string(),
            line_user_id: self.line_user_id.filter(|u| !u.trim().is_empty()),
        })
    }
}

/// `{date}_{store}_{HHMMSS}_{suffix}`; the random suffix keeps two
/// submissions in the same second from overwriting each other.
pub fn generate_report_id(date: &str, store_name: &str, now: NaiveDateTime) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}_{}_{}",
        date,
        store_name,
        now.format("%H%M%S"),
        &suffix[..8]
    )
}

/// Response for a successful create
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReportResponse {
    pub success: bool,
    pub id: String,
    pub saved_to_sheets: bool,
}
