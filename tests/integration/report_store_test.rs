//! Integration tests for the SQLite report store
//!
//! Covers round-trip fidelity, upsert-by-id, ordering and date-range filtering.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use shopreport::reports::{ReportRepository, SqliteReportRepository};

#[tokio::test]
async fn test_round_trip_preserves_every_field() {
    let pool = create_test_pool().await;
    let repo = SqliteReportRepository::new(pool);

    let mut report = TestDataFactory::report("r1", "2024-01-10", "2024-01-10T21:15:00.000001");
    report.utilities = 1234.56;
    report.promotion = 0.1;
    report.cleaning = 10.0;
    report.misc = 20.25;
    report.communication = 3.5;
    report.others = 99.99;
    report.report_text = "雨で客足が少なめ".to_string();
    report.line_user_id = Some("U123".to_string());

    repo.save(&report).await.unwrap();

    let listed = repo
        .list(Some("2024-01-01"), Some("2024-01-31"))
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);

    let stored = &listed[0];
    assert_eq!(stored.id, report.id);
    assert_eq!(stored.date, report.date);
    assert_eq!(stored.store_name, report.store_name);
    assert_eq!(stored.staff_name, report.staff_name);
    assert_eq!(stored.report_text, report.report_text);
    assert_eq!(stored.created_at, report.created_at);
    assert_eq!(stored.line_user_id, report.line_user_id);
    assert_close(stored.sales, report.sales);
    assert_close(stored.purchase, report.purchase);
    assert_close(stored.labor_cost, report.labor_cost);
    assert_close(stored.utilities, report.utilities);
    assert_close(stored.promotion, report.promotion);
    assert_close(stored.cleaning, report.cleaning);
    assert_close(stored.misc, report.misc);
    assert_close(stored.communication, report.communication);
    assert_close(stored.others, report.others);
}

#[tokio::test]
async fn test_upsert_replaces_record_with_same_id() {
    let pool = create_test_pool().await;
    let repo = SqliteReportRepository::new(pool.clone());

    let first = TestDataFactory::report("same-id", "2024-01-10", "2024-01-10T20:00:00.000000");
    repo.save(&first).await.unwrap();

    let mut second = first.clone();
    second.sales = 5000.0;
    second.staff_name = "Suzuki".to_string();
    second.line_user_id = Some("U999".to_string());
    repo.save(&second).await.unwrap();

    assert_eq!(count_reports(&pool).await, 1);

    let listed = repo.list(None, None).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_close(listed[0].sales, 5000.0);
    assert_eq!(listed[0].staff_name, "Suzuki");
    assert_eq!(listed[0].line_user_id.as_deref(), Some("U999"));
}

#[tokio::test]
async fn test_upsert_leaves_other_records_untouched() {
    let pool = create_test_pool().await;
    let repo = SqliteReportRepository::new(pool);

    let other = TestDataFactory::report("other", "2024-01-09", "2024-01-09T20:00:00.000000");
    repo.save(&other).await.unwrap();

    let mut target = TestDataFactory::report("target", "2024-01-10", "2024-01-10T20:00:00.000000");
    repo.save(&target).await.unwrap();
    target.sales = 1.0;
    repo.save(&target).await.unwrap();

    let listed = repo.list(None, None).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[1], other);
}

#[tokio::test]
async fn test_list_orders_by_date_descending() {
    let pool = create_test_pool().await;
    let repo = SqliteReportRepository::new(pool);

    // Created in this order
    repo.save(&TestDataFactory::report("a", "2024-01-01", "2024-01-05T10:00:00.000000"))
        .await
        .unwrap();
    repo.save(&TestDataFactory::report("b", "2024-01-03", "2024-01-05T10:00:01.000000"))
        .await
        .unwrap();
    repo.save(&TestDataFactory::report("c", "2024-01-02", "2024-01-05T10:00:02.000000"))
        .await
        .unwrap();

    let dates: Vec<String> = repo
        .list(None, None)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.date)
        .collect();
    assert_eq!(dates, vec!["2024-01-03", "2024-01-02", "2024-01-01"]);
}

#[tokio::test]
async fn test_late_submission_sorts_by_business_date() {
    let pool = create_test_pool().await;
    let repo = SqliteReportRepository::new(pool);

    // Submitted on the 12th for the 9th
    repo.save(&TestDataFactory::report("late", "2024-01-09", "2024-01-12T09:00:00.000000"))
        .await
        .unwrap();
    repo.save(&TestDataFactory::report("ontime", "2024-01-10", "2024-01-10T22:00:00.000000"))
        .await
        .unwrap();

    let ids: Vec<String> = repo
        .list(None, None)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["ontime", "late"]);
}

#[tokio::test]
async fn test_date_range_is_inclusive() {
    let pool = create_test_pool().await;
    let repo = SqliteReportRepository::new(pool);

    for (id, date) in [
        ("before", "2023-12-31"),
        ("start", "2024-01-01"),
        ("middle", "2024-01-15"),
        ("end", "2024-01-31"),
        ("after", "2024-02-01"),
    ] {
        repo.save(&TestDataFactory::report(id, date, "2024-02-01T00:00:00.000000"))
            .await
            .unwrap();
    }

    let ids: Vec<String> = repo
        .list(Some("2024-01-01"), Some("2024-01-31"))
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["end", "middle", "start"]);

    assert_eq!(repo.list(None, None).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    let pool = create_test_pool().await;
    let repo = SqliteReportRepository::new(pool);

    assert!(repo.list(None, None).await.unwrap().is_empty());
    assert!(repo
        .list(Some("2024-01-01"), Some("2024-01-31"))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_closed_pool_surfaces_database_error() {
    let pool = create_test_pool().await;
    let repo = SqliteReportRepository::new(pool.clone());
    pool.close().await;

    let report = TestDataFactory::report("r1", "2024-01-10", "2024-01-10T21:15:00.000000");
    let result = repo.save(&report).await;
    assert!(matches!(result, Err(shopreport::core::AppError::Database(_))));
    assert!(repo.ping().await.is_err());
}
