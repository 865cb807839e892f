//! HTTP-level integration tests for the `/queries` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener, over the in-memory demo catalog.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post, post_json, put_json};
use serde_json::json;

fn new_query(id: &str, system_id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "systemId": system_id,
        "name": "Open Invoices",
        "dataSource": "SQLServer_Reporting",
        "dataQuery": "SELECT id, total FROM invoices WHERE paid = 0",
        "dataColumns": "id, total",
        "maxResults": 250,
        "isActive": 1
    })
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_annotates_usage_counts() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/queries").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "QRY001");
    assert_eq!(rows[0]["scheduleCount"], 1);
    assert_eq!(rows[0]["distributionCount"], 1);
}

#[tokio::test]
async fn list_filters_by_embedded_system_name() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/queries?q=warehouse").await).await;

    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "QRY002");
}

#[tokio::test]
async fn data_sources_are_listed() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/queries/data-sources").await).await;
    assert_eq!(
        json["data"],
        json!(["Oracle_Prod", "SQLServer_Reporting", "Postgres_Analytics"])
    );
}

#[tokio::test]
async fn databases_alias_lists_the_same_sources() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/queries/databases").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        json!(["Oracle_Prod", "SQLServer_Reporting", "Postgres_Analytics"])
    );
}

// ---------------------------------------------------------------------------
// Detail and usage
// ---------------------------------------------------------------------------

#[tokio::test]
async fn detail_includes_system_and_usage() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/queries/QRY001").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    assert_eq!(data["query"]["name"], "Active Customers");
    assert_eq!(data["lineage"]["system"]["source"], "snapshot");
    assert_eq!(data["lineage"]["system"]["value"]["name"], "CRM Core");
    assert_eq!(data["usage"]["schedules"][0]["id"], "SCH001");
    assert_eq!(data["usage"]["distributions"][0]["id"], "DST001");
}

#[tokio::test]
async fn detail_of_unknown_query_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/queries/QRY404").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn usage_of_unknown_id_is_empty_not_an_error() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/queries/QRY404/usage").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    assert_eq!(data["schedules"], json!([]));
    assert_eq!(data["distributions"], json!([]));
}

// ---------------------------------------------------------------------------
// Test stub
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_stub_returns_sample_rows() {
    let app = common::build_test_app();
    let response = post(app, "/api/v1/queries/QRY001/test").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    assert_eq!(data["success"], true);
    assert_eq!(data["columns"], json!(["id", "name", "email", "last_login"]));
    assert_eq!(data["rows"].as_array().unwrap().len(), 3);
    assert_eq!(data["rows"][0]["email"], "email_1");
    assert!(data["executionTimeMs"].is_u64());
}

#[tokio::test]
async fn test_stub_of_unknown_query_returns_404() {
    let app = common::build_test_app();
    let response = post(app, "/api/v1/queries/QRY404/test").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_embeds_current_system_and_stamps_create_ts() {
    let app = common::build_test_app();

    let response = post_json(app.clone(), "/api/v1/queries", new_query("QRY003", "SYS002")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let data = &body_json(response).await["data"];
    assert_eq!(data["system"]["name"], "Legacy Billing");
    assert!(data["createTs"].is_string());

    let json = body_json(get(app, "/api/v1/queries").await).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["id"], "QRY003");
    assert_eq!(rows[2]["scheduleCount"], 0);
}

#[tokio::test]
async fn create_with_existing_id_returns_409() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/queries", new_query("QRY001", "SYS001")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_with_unknown_system_returns_400() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/queries", new_query("QRY003", "SYS999")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "unknown system 'SYS999'");
}

#[tokio::test]
async fn create_with_padded_id_is_rejected_and_not_stored() {
    let app = common::build_test_app();
    let response = post_json(app.clone(), "/api/v1/queries", new_query("QRY001 ", "SYS001")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "id must not start or end with whitespace");

    let json = body_json(get(app.clone(), "/api/v1/queries").await).await;
    let ids: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["QRY001", "QRY002"]);

    let response = get(app, "/api/v1/queries/QRY001%20").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_with_non_positive_max_results_returns_400() {
    let app = common::build_test_app();
    let mut body = new_query("QRY003", "SYS001");
    body["maxResults"] = json!(0);

    let response = post_json(app, "/api/v1/queries", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_keeps_original_create_ts() {
    let app = common::build_test_app();
    let mut body = new_query("QRY001", "SYS001");
    body["createTs"] = json!("2030-06-01T00:00:00Z");

    let response = put_json(app.clone(), "/api/v1/queries/QRY001", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    assert_eq!(data["name"], "Open Invoices");
    assert_eq!(data["createTs"], "2024-01-01T00:00:00Z");

    let detail = body_json(get(app, "/api/v1/queries/QRY001").await).await;
    assert_eq!(detail["data"]["query"]["dataSource"], "SQLServer_Reporting");
}

#[tokio::test]
async fn update_with_mismatched_ids_returns_400() {
    let app = common::build_test_app();
    let response = put_json(app, "/api/v1/queries/QRY001", new_query("QRY002", "SYS001")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn update_of_unknown_query_returns_404() {
    let app = common::build_test_app();
    let response = put_json(app, "/api/v1/queries/QRY404", new_query("QRY404", "SYS001")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
