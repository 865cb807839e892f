//! HTTP-level integration tests for the `/distributions` endpoints,
//! including the lineage chain over complete and dangling catalogs.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, patch, post_json, put_json};
use disthub_db::{fixtures, MemoryEntityRepository};
use serde_json::json;

fn new_distribution(id: &str, schedule_id: &str, type_id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "scheduleId": schedule_id,
        "distributionType": {"id": type_id, "name": "whatever"},
        "parameters": "{\"topic\": \"alerts\"}",
        "isActive": 1
    })
}

/// Demo catalog with SCH001 and SYS003 removed, leaving DST001 without a
/// schedule and QRY002 without a live system.
fn dangling_app() -> axum::Router {
    let mut catalog = fixtures::catalog();
    catalog.schedules.retain(|s| s.id != "SCH001");
    catalog.systems.retain(|s| s.id != "SYS003");
    common::build_test_app_with(Arc::new(MemoryEntityRepository::new(
        catalog,
        fixtures::data_sources(),
    )))
}

// ---------------------------------------------------------------------------
// List and detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_all_distributions() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/distributions").await).await;

    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["distributionType"]["name"], "Email");
}

#[tokio::test]
async fn list_filters_by_type_name() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/distributions?q=sftp").await).await;

    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "DST002");
}

#[tokio::test]
async fn detail_joins_schedule_and_query() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/distributions/DST001").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    assert_eq!(data["distribution"]["id"], "DST001");
    assert_eq!(data["schedule"]["id"], "SCH001");
    assert_eq!(data["query"]["id"], "QRY001");
}

#[tokio::test]
async fn detail_with_missing_schedule_reports_nulls() {
    let app = dangling_app();
    let data = &body_json(get(app, "/api/v1/distributions/DST001").await).await["data"];
    assert_eq!(data["distribution"]["id"], "DST001");
    assert!(data["schedule"].is_null());
    assert!(data["query"].is_null());
}

#[tokio::test]
async fn detail_of_unknown_distribution_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/distributions/DST404").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Lineage chain
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lineage_chain_marks_node_sources() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/distributions/DST002/lineage").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    assert_eq!(data["distribution"]["id"], "DST002");
    assert_eq!(data["distributionType"]["source"], "snapshot");
    assert_eq!(data["distributionType"]["value"]["name"], "SFTP");
    assert_eq!(data["schedule"]["source"], "live");
    assert_eq!(data["schedule"]["value"]["id"], "SCH002");
    assert_eq!(data["group"]["source"], "live");
    assert_eq!(data["group"]["value"]["name"], "Monthly Audits");
    assert_eq!(data["query"]["value"]["id"], "QRY002");
    assert_eq!(data["system"]["source"], "live");
    assert_eq!(data["system"]["value"]["name"], "Data Warehouse");
}

#[tokio::test]
async fn lineage_chain_with_missing_schedule_stops_at_the_gap() {
    let app = dangling_app();
    let data = &body_json(get(app, "/api/v1/distributions/DST001/lineage").await).await["data"];

    assert_eq!(data["distributionType"]["source"], "snapshot");
    assert_eq!(data["schedule"], json!({"source": "missing"}));
    assert_eq!(data["group"], json!({"source": "missing"}));
    assert_eq!(data["query"], json!({"source": "missing"}));
    assert_eq!(data["system"], json!({"source": "missing"}));
}

#[tokio::test]
async fn lineage_chain_falls_back_to_embedded_system() {
    let app = dangling_app();
    let data = &body_json(get(app, "/api/v1/distributions/DST002/lineage").await).await["data"];

    assert_eq!(data["query"]["source"], "live");
    assert_eq!(data["system"]["source"], "snapshot");
    assert_eq!(data["system"]["value"]["id"], "SYS003");
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_refreshes_type_embed() {
    let app = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/api/v1/distributions",
        new_distribution("DST003", "SCH001", "TYPE003"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let data = &body_json(response).await["data"];
    assert_eq!(data["distributionType"]["name"], "Kafka");
    assert_eq!(data["distributionType"]["description"], "Push to topic");

    let json = body_json(get(app, "/api/v1/queries/QRY001/usage").await).await;
    let ids: Vec<_> = json["data"]["distributions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["DST001", "DST003"]);
}

#[tokio::test]
async fn create_with_non_object_parameters_returns_400() {
    let app = common::build_test_app();
    let mut body = new_distribution("DST003", "SCH001", "TYPE001");
    body["parameters"] = json!("[\"not\", \"an\", \"object\"]");

    let response = post_json(app, "/api/v1/distributions", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_with_unknown_type_returns_400() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/distributions",
        new_distribution("DST003", "SCH001", "TYPE404"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_can_move_to_another_schedule() {
    let app = common::build_test_app();
    let response = put_json(
        app.clone(),
        "/api/v1/distributions/DST002",
        new_distribution("DST002", "SCH001", "TYPE002"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/api/v1/schedules/SCH001/usage").await).await;
    assert_eq!(json["data"]["distributions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn deactivate_clears_active_flag() {
    let app = common::build_test_app();
    let response = patch(app.clone(), "/api/v1/distributions/DST001/deactivate").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    assert_eq!(data["isActive"], 0);

    let detail = body_json(get(app, "/api/v1/distributions/DST001").await).await;
    assert_eq!(detail["data"]["distribution"]["isActive"], 0);
}

#[tokio::test]
async fn deactivate_unknown_distribution_returns_404() {
    let app = common::build_test_app();
    let response = patch(app, "/api/v1/distributions/DST404/deactivate").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
