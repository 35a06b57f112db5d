// Contract tests for the report API response shapes
//
// POST /api/reports, GET /api/reports, GET /api/summary, GET /api/health,
// POST /api/line/webhook

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, web, App};
use serde_json::{json, Value};
use shopreport::middleware::{json_error_handler, RequestId, REQUEST_ID_HEADER};
use shopreport::reports::controllers::{create_report, get_summary, list_reports};

use helpers::*;

fn assert_keys(body: &Value, keys: &[&str]) {
    let object = body.as_object().expect("expected a JSON object");
    let mut actual: Vec<&str> = object.keys().map(String::as_str).collect();
    actual.sort();
    let mut expected = keys.to_vec();
    expected.sort();
    assert_eq!(actual, expected);
}

/// Test POST /api/reports returns exactly success, id and saved_to_sheets
#[actix_web::test]
async fn test_create_report_contract() {
    let pool = create_test_pool().await;
    let (service, _) = unconfigured_app_parts(pool);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/api/reports", web::post().to(create_report)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/reports")
        .set_json(TestDataFactory::report_payload("2024-01-10", "Shibuya", 1000.0, 300.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_keys(&body, &["success", "id", "saved_to_sheets"]);
    assert!(body["success"].is_boolean());
    assert!(body["id"].is_string());
    assert!(body["saved_to_sheets"].is_boolean());
}

/// Test error responses carry success=false and an error message
#[actix_web::test]
async fn test_create_report_error_contract() {
    let pool = create_test_pool().await;
    let (service, _) = unconfigured_app_parts(pool);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/api/reports", web::post().to(create_report)),
    )
    .await;

    // Missing date names the field
    let req = test::TestRequest::post()
        .uri("/api/reports")
        .set_json(json!({ "store_name": "Shibuya", "sales": 1, "purchase": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_keys(&body, &["success", "error", "field"]);
    assert_eq!(body["field"], "date");

    // Unparseable JSON has no field
    let req = test::TestRequest::post()
        .uri("/api/reports")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"date\":")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_keys(&body, &["success", "error"]);
    assert_eq!(body["success"], false);
}

/// Test GET /api/reports returns an array of full stored records
#[actix_web::test]
async fn test_list_reports_contract() {
    let pool = create_test_pool().await;
    let (service, _) = unconfigured_app_parts(pool);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/api/reports", web::post().to(create_report))
            .route("/api/reports", web::get().to(list_reports)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/reports")
        .set_json(TestDataFactory::report_payload("2024-01-10", "Shibuya", 1000.0, 300.0))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::get().uri("/api/reports").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let reports = body.as_array().expect("list must be a JSON array");
    assert_eq!(reports.len(), 1);

    let report = &reports[0];
    assert_keys(
        report,
        &[
            "id",
            "date",
            "store_name",
            "staff_name",
            "sales",
            "purchase",
            "labor_cost",
            "utilities",
            "promotion",
            "cleaning",
            "misc",
            "communication",
            "others",
            "report_text",
            "created_at",
            "line_user_id",
        ],
    );

    // Omitted optional fields come back as defaults
    assert_eq!(report["staff_name"], "");
    assert_eq!(report["report_text"], "");
    assert!(report["line_user_id"].is_null());
    assert_eq!(report["utilities"].as_f64(), Some(0.0));
}

/// Test GET /api/summary returns periods and totals with numeric fields
#[actix_web::test]
async fn test_summary_contract() {
    let pool = create_test_pool().await;
    let (service, _) = unconfigured_app_parts(pool);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/api/reports", web::post().to(create_report))
            .route("/api/summary", web::get().to(get_summary)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/reports")
        .set_json(TestDataFactory::full_report_payload())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::get()
        .uri("/api/summary?period_type=daily")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_keys(&body, &["periods", "totals"]);

    let period = &body["periods"][0];
    assert_keys(
        period,
        &[
            "period",
            "total_sales",
            "total_expenses",
            "total_purchase",
            "gross_profit",
            "operating_profit",
            "profit_margin",
        ],
    );
    assert_eq!(period["period"], "2024-01-10");

    assert_keys(
        &body["totals"],
        &["total_sales", "total_expenses", "gross_profit", "operating_profit"],
    );
    assert!(body["totals"]["total_sales"].is_number());
}

/// Test GET /api/health reports status, timestamp and integration flags
#[actix_web::test]
async fn test_health_contract() {
    let pool = create_test_pool().await;
    let (service, status) = unconfigured_app_parts(pool);
    let app = test::init_service(App::new().configure(configure_test_app(service, status))).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_keys(
        &body,
        &["status", "timestamp", "google_sheets_configured", "line_configured"],
    );
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

/// Test POST /api/line/webhook accepts any body
#[actix_web::test]
async fn test_line_webhook_contract() {
    let pool = create_test_pool().await;
    let (service, status) = unconfigured_app_parts(pool);
    let app = test::init_service(App::new().configure(configure_test_app(service, status))).await;

    let req = test::TestRequest::post()
        .uri("/api/line/webhook")
        .set_payload("not even json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "status": "received" }));
}

/// Test every response carries a request id, echoing the caller's when given
#[actix_web::test]
async fn test_request_id_header_contract() {
    let pool = create_test_pool().await;
    let (service, status) = unconfigured_app_parts(pool);
    let app = test::init_service(
        App::new()
            .wrap(RequestId)
            .configure(configure_test_app(service, status)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key(REQUEST_ID_HEADER));

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header((REQUEST_ID_HEADER, "abc-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap(),
        "abc-123"
    );
}
