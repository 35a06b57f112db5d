use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregation granularity for `GET /api/summary`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Daily,
    Weekly,
    Monthly,
}

impl PeriodType {
    /// Absent means daily. Matching is exact and case-sensitive; anything
    /// else falls back to monthly rather than failing the request.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None => PeriodType::Daily,
            Some("daily") => PeriodType::Daily,
            Some("weekly") => PeriodType::Weekly,
            Some(_) => PeriodType::Monthly,
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodType::Daily => write!(f, "daily"),
            PeriodType::Weekly => write!(f, "weekly"),
            PeriodType::Monthly => write!(f, "monthly"),
        }
    }
}

/// Totals for one period bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Day (`YYYY-MM-DD`), week start Monday (`YYYY-MM-DD`) or month (`YYYY-MM`)
    pub period: String,
    pub total_sales: f64,
    pub total_expenses: f64,
    pub total_purchase: f64,
    pub gross_profit: f64,
    pub operating_profit: f64,
    /// Operating profit as a percentage of sales; 0 when there were no sales
    pub profit_margin: f64,
}

impl PeriodSummary {
    pub fn new(period: String) -> Self {
        Self {
            period,
            total_sales: 0.0,
            total_expenses: 0.0,
            total_purchase: 0.0,
            gross_profit: 0.0,
            operating_profit: 0.0,
            profit_margin: 0.0,
        }
    }
}

/// Sums of the per-period figures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTotals {
    pub total_sales: f64,
    pub total_expenses: f64,
    pub gross_profit: f64,
    pub operating_profit: f64,
}

/// Response of `GET /api/summary`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResponse {
    pub periods: Vec<PeriodSummary>,
    /// `None` only for empty input; serialised as `{}`
    #[serde(serialize_with = "serialize_totals")]
    pub totals: Option<SummaryTotals>,
}

impl SummaryResponse {
    pub fn empty() -> Self {
        Self {
            periods: Vec::new(),
            totals: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

fn serialize_totals<S>(totals: &Option<SummaryTotals>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match totals {
        Some(totals) => totals.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
