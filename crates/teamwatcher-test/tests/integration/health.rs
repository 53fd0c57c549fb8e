//! Tests for the health endpoint.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn health_reports_ok() {
    let service = create_test_service(None);
    let res = get(&service, "/health").await;

    assert_eq!(res.status, StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_str(&res.body).expect("health body should be JSON");
    assert_eq!(body, serde_json::json!({"ok": true}));
}

#[test_log::test(tokio::test)]
async fn unknown_route_is_not_found() {
    let service = create_test_service(None);
    let res = get(&service, "/ics/jets").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
}
