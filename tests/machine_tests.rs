mod common;

use axum::http::StatusCode;
use common::create_logged_in_app;
use serde_json::json;

#[tokio::test]
async fn test_rename_updates_cached_names() {
    let app = create_logged_in_app().await;

    let response = app.put("/api/machines/1", json!({ "name": "Prassi II" })).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json()["data"]["plate"], "ABC-1234");

    let log = app.get("/api/machines/1/maintenance").await;
    assert_eq!(log.json()["machine"]["name"], "Prassi II");
    assert_eq!(log.json()["records"][0]["machine_name"], "Prassi II");

    let ledger = app.get("/api/machines/1/fuel").await;
    assert_eq!(ledger.json()["records"][0]["machine_name"], "Prassi II");
}

#[tokio::test]
async fn test_fuel_ledger_totals() {
    let app = create_logged_in_app().await;

    let created = app
        .post(
            "/api/machines/2/fuel",
            json!({
                "date": "2025-11-25",
                "liters": 50,
                "total_value": 250,
                "odometer": 60500
            }),
        )
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    assert_eq!(created.json()["data"]["payment_status"], "paid");

    let ledger = app.get("/api/machines/2/fuel").await;
    let totals = &ledger.json()["totals"];
    assert_eq!(totals["record_count"], 2);
    assert_eq!(totals["liters"], "200");
    assert_eq!(totals["total_value"], "1000");
}

#[tokio::test]
async fn test_negative_liters_are_rejected() {
    let app = create_logged_in_app().await;
    let response = app
        .post(
            "/api/machines/3/fuel",
            json!({ "date": "2025-11-25", "liters": -1, "total_value": 10 }),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_maintenance_lifecycle() {
    let app = create_logged_in_app().await;

    let created = app
        .post(
            "/api/machines/3/maintenance",
            json!({
                "type": "corretiva",
                "description": "Troca de cabo de aço",
                "scheduled_date": "2025-12-03"
            }),
        )
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let id = created.json()["data"]["id"].as_u64().unwrap();
    assert_eq!(created.json()["data"]["status"], "scheduled");
    assert_eq!(created.json()["data"]["type"], "corretiva");

    let done = app
        .post(
            &format!("/api/machines/3/maintenance/{}/complete", id),
            json!({ "completed_date": "2025-12-04" }),
        )
        .await;
    assert_eq!(done.status_code(), StatusCode::OK);
    assert_eq!(done.json()["data"]["status"], "completed");
    assert_eq!(done.json()["data"]["completed_date"], "2025-12-04");

    let refused = app.delete(&format!("/api/machines/3/maintenance/{}", id)).await;
    assert_eq!(refused.status_code(), StatusCode::PRECONDITION_REQUIRED);

    let deleted = app
        .delete(&format!("/api/machines/3/maintenance/{}?confirm=true", id))
        .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);
    let log = app.get("/api/machines/3/maintenance").await;
    assert_eq!(log.json()["records"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_records_of_unknown_machine_are_not_found() {
    let app = create_logged_in_app().await;
    assert_eq!(
        app.get("/api/machines/99/fuel").await.status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.get("/api/machines/99/maintenance").await.status_code(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_completion_without_body_uses_today() {
    let app = create_logged_in_app().await;

    let created = app
        .post(
            "/api/machines/2/maintenance",
            json!({ "type": "preventiva", "description": "Graxa", "scheduled_date": "2025-12-05" }),
        )
        .await;
    let id = created.json()["data"]["id"].as_u64().unwrap();

    let done = app
        .post_empty(&format!("/api/machines/2/maintenance/{}/complete", id))
        .await;
    assert_eq!(done.status_code(), StatusCode::OK);
    assert_eq!(done.json()["data"]["status"], "completed");
    assert!(done.json()["data"]["completed_date"].is_string());
}

#[tokio::test]
async fn test_malformed_completion_date_is_bad_request() {
    let app = create_logged_in_app().await;

    let created = app
        .post(
            "/api/machines/2/maintenance",
            json!({ "type": "preventiva", "description": "Graxa", "scheduled_date": "2025-12-05" }),
        )
        .await;
    let id = created.json()["data"]["id"].as_u64().unwrap();

    let response = app
        .post(
            &format!("/api/machines/2/maintenance/{}/complete", id),
            json!({ "completed_date": "not-a-date" }),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "BAD_REQUEST");

    let log = app.get("/api/machines/2/maintenance").await;
    let record = log.json()["records"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == id)
        .unwrap()
        .clone();
    assert_eq!(record["status"], "scheduled");
    assert_eq!(record["completed_date"], json!(null));
}

#[tokio::test]
async fn test_maintenance_update_keeps_unspecified_fields() {
    let app = create_logged_in_app().await;
    let before = app.get("/api/machines/1/maintenance").await.json()["records"][0].clone();

    let response = app
        .put(
            "/api/machines/1/maintenance/1",
            json!({ "status": "scheduled", "completed_date": null }),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let mut expected = before;
    expected["status"] = json!("scheduled");
    expected["completed_date"] = json!(null);
    assert_eq!(response.json()["data"], expected);
}

#[tokio::test]
async fn test_fuel_update_keeps_unspecified_fields() {
    let app = create_logged_in_app().await;
    let before = app.get("/api/machines/1/fuel").await.json()["records"][0].clone();

    let response = app
        .put("/api/machines/1/fuel/1", json!({ "total_value": "520.00", "odometer": null }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let data = &response.json()["data"];
    assert_eq!(data["odometer"], json!(null));
    assert_eq!(data["liters"], before["liters"]);
    assert_eq!(data["description"], before["description"]);
    assert_eq!(data["date"], before["date"]);

    let ledger = app.get("/api/machines/1/fuel").await;
    assert_eq!(ledger.json()["totals"]["total_value"], "520.00");
}

#[tokio::test]
async fn test_updates_do_not_cross_machines() {
    let app = create_logged_in_app().await;

    let maintenance = app
        .put("/api/machines/2/maintenance/1", json!({ "description": "Outra" }))
        .await;
    assert_eq!(maintenance.status_code(), StatusCode::NOT_FOUND);

    let fuel = app.put("/api/machines/2/fuel/1", json!({ "liters": 1 })).await;
    assert_eq!(fuel.status_code(), StatusCode::NOT_FOUND);

    let ledger = app.get("/api/machines/1/fuel").await;
    assert_eq!(ledger.json()["records"][0]["liters"], "100");
}

