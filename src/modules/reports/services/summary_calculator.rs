use std::borrow::Cow;
use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::modules::reports::models::{
    DailyReport, PeriodSummary, PeriodType, SummaryResponse, SummaryTotals,
};

/// Summary calculator: groups reports into period buckets and derives profit figures
///
/// Stateless; every call recomputes from the reports it is given.
pub struct SummaryCalculator;

impl SummaryCalculator {
    /// Group `reports` by period and compute totals.
    ///
    /// Periods appear in the order their key is first seen in `reports`.
    /// Empty input gives no periods and no totals.
    pub fn summarize(reports: &[DailyReport], period_type: PeriodType) -> SummaryResponse {
        if reports.is_empty() {
            return SummaryResponse::empty();
        }

        let mut periods: Vec<PeriodSummary> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for report in reports {
            let key = Self::period_key(&report.date, period_type);
            let slot = match index.get(key.as_ref()).copied() {
                Some(slot) => slot,
                None => {
                    periods.push(PeriodSummary::new(key.to_string()));
                    index.insert(key.into_owned(), periods.len() - 1);
                    periods.len() - 1
                }
            };

            let period = &mut periods[slot];
            period.total_sales += report.sales;
            period.total_expenses += report.total_expenses();
            period.total_purchase += report.purchase;
        }

        for period in &mut periods {
            period.gross_profit = period.total_sales - period.total_purchase;
            period.operating_profit = period.total_sales - period.total_expenses;
            period.profit_margin = Self::profit_margin(period.operating_profit, period.total_sales);
        }

        let totals = periods.iter().fold(SummaryTotals::default(), |mut acc, p| {
            acc.total_sales += p.total_sales;
            acc.total_expenses += p.total_expenses;
            acc.gross_profit += p.gross_profit;
            acc.operating_profit += p.operating_profit;
            acc
        });

        SummaryResponse {
            periods,
            totals: Some(totals),
        }
    }

    /// Bucket key for a report date
    ///
    /// Weekly keys are the Monday on or before the date. A date that does not
    /// parse keeps its own string as the key.
    pub fn period_key(date: &str, period_type: PeriodType) -> Cow<'_, str> {
        match period_type {
            PeriodType::Daily => Cow::Borrowed(date),
            PeriodType::Weekly => match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
                Ok(day) => {
                    let offset = day.weekday().num_days_from_monday() as i64;
                    Cow::Owned((day - Duration::days(offset)).format("%Y-%m-%d").to_string())
                }
                Err(_) => {
                    tracing::warn!(date = date, "Unparseable report date in weekly summary");
                    Cow::Borrowed(date)
                }
            },
            PeriodType::Monthly => Cow::Borrowed(date.get(..7).unwrap_or(date)),
        }
    }

    /// Operating profit as a percentage of sales, 0 without sales
    pub fn profit_margin(operating_profit: f64, total_sales: f64) -> f64 {
        if total_sales > 0.0 {
            operating_profit / total_sales * 100.0
        } else {
            0.0
        }
    }
}
