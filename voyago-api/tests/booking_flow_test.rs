use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use voyago_api::{app, AppState};
use voyago_inventory::MockProvider;
use voyago_store::app_config::BookingRules;

fn test_app() -> Router {
    let rules = BookingRules {
        reference_length: 8,
        max_passengers: 9,
    };
    app(AppState::new(Arc::new(MockProvider::new()), rules))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn flight_criteria(passengers: u32) -> Value {
    json!({
        "kind": "FLIGHT",
        "origin": "DEL",
        "destination": "BOM",
        "travel_date": "2026-09-15",
        "passengers": passengers,
        "class": "Economy"
    })
}

/// Ids of units currently classified as selectable, in grid order.
fn selectable_units(seat_map: &Value) -> Vec<String> {
    seat_map["rows"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|row| row.as_array().unwrap())
        .filter(|unit| unit["status"] == "SELECTABLE")
        .map(|unit| unit["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_full_select_and_confirm_flow() {
    let app = test_app();

    let (status, session) = send(&app, "POST", "/v1/sessions", Some(flight_criteria(2))).await;
    assert_eq!(status, StatusCode::OK);
    let session_id = session["session_id"].as_str().unwrap().to_string();
    let itinerary_id = session["itineraries"][0]["id"].as_str().unwrap().to_string();
    assert!(!session["seat_map"].is_null());

    // Select two seats.
    let open = selectable_units(&session["seat_map"]);
    assert!(open.len() >= 3);
    let toggle_uri = format!("/v1/sessions/{}/toggle", session_id);
    let (status, body) = send(
        &app,
        "POST",
        &toggle_uri,
        Some(json!({ "unit_id": open[0] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "SELECTED");

    let (_, body) = send(
        &app,
        "POST",
        &toggle_uri,
        Some(json!({ "unit_id": open[1] })),
    )
    .await;
    assert_eq!(body["outcome"], "SELECTED");
    assert_eq!(body["seat_map"]["remaining"], 0);

    // Third pick is over capacity and must be a no-op.
    let (status, body) = send(
        &app,
        "POST",
        &toggle_uri,
        Some(json!({ "unit_id": open[2] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], json!({ "REJECTED": "CAPACITY_REACHED" }));

    // Confirm with valid passenger and contact data.
    let confirm_uri = format!("/v1/sessions/{}/confirm", session_id);
    let (status, booking) = send(
        &app,
        "POST",
        &confirm_uri,
        Some(json!({
            "itinerary_id": itinerary_id,
            "passengers": [
                { "name": "Jane Doe", "age": 34, "gender": "FEMALE" },
                { "name": "John Doe", "age": 36, "gender": "MALE" }
            ],
            "contact": { "email": "jane@example.com", "phone": "9876543210" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(booking["reference"].as_str().unwrap().len(), 8);
    assert_eq!(booking["assignments"][0]["passenger"]["name"], "Jane Doe");
    assert_eq!(booking["assignments"][0]["unit_id"], open[0]);
    assert_eq!(booking["assignments"][1]["unit_id"], open[1]);
    assert_eq!(booking["route"], "DEL → BOM");

    // History holds the booking; bulk clear empties it.
    let bookings_uri = format!("/v1/sessions/{}/bookings", session_id);
    let (status, history) = send(&app, "GET", &bookings_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "DELETE", &bookings_uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, history) = send(&app, "GET", &bookings_uri, None).await;
    assert!(history.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_validation_failure_reports_all_violations() {
    let app = test_app();

    let (_, session) = send(&app, "POST", "/v1/sessions", Some(flight_criteria(2))).await;
    let session_id = session["session_id"].as_str().unwrap().to_string();
    let itinerary_id = session["itineraries"][0]["id"].as_str().unwrap().to_string();

    let open = selectable_units(&session["seat_map"]);
    let toggle_uri = format!("/v1/sessions/{}/toggle", session_id);
    for unit in &open[..2] {
        send(&app, "POST", &toggle_uri, Some(json!({ "unit_id": unit }))).await;
    }

    // Empty name + bad email + bad phone, units are satisfied.
    let confirm_uri = format!("/v1/sessions/{}/confirm", session_id);
    let (status, body) = send(
        &app,
        "POST",
        &confirm_uri,
        Some(json!({
            "itinerary_id": itinerary_id,
            "passengers": [
                { "name": "", "age": 34, "gender": "FEMALE" },
                { "name": "Jane", "age": 36, "gender": "FEMALE" }
            ],
            "contact": { "email": "bad", "phone": "123" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["messages"].as_array().unwrap().len(), 3);

    // No booking was created and the selection survived for a retry.
    let bookings_uri = format!("/v1/sessions/{}/bookings", session_id);
    let (_, history) = send(&app, "GET", &bookings_uri, None).await;
    assert!(history.as_array().unwrap().is_empty());

    let seatmap_uri = format!("/v1/sessions/{}/seatmap", session_id);
    let (_, seat_map) = send(&app, "GET", &seatmap_uri, None).await;
    assert_eq!(seat_map["remaining"], 0);
}

#[tokio::test]
async fn test_hotel_session_has_no_seat_map() {
    let app = test_app();

    let criteria = json!({
        "kind": "HOTEL",
        "origin": "Delhi",
        "destination": "Goa",
        "travel_date": "2026-12-01",
        "passengers": 1,
        "class": "Deluxe"
    });
    let (status, session) = send(&app, "POST", "/v1/sessions", Some(criteria)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(session["seat_map"].is_null());
    let session_id = session["session_id"].as_str().unwrap().to_string();
    let itinerary_id = session["itineraries"][0]["id"].as_str().unwrap().to_string();

    // Selection is disabled entirely.
    let toggle_uri = format!("/v1/sessions/{}/toggle", session_id);
    let (status, _) = send(&app, "POST", &toggle_uri, Some(json!({ "unit_id": "1A" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Hotels confirm without unit assignments.
    let confirm_uri = format!("/v1/sessions/{}/confirm", session_id);
    let (status, booking) = send(
        &app,
        "POST",
        &confirm_uri,
        Some(json!({
            "itinerary_id": itinerary_id,
            "passengers": [{ "name": "Jane Doe", "age": 34, "gender": "FEMALE" }],
            "contact": { "email": "jane@example.com", "phone": "9876543210" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(booking["assignments"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_train_session_renders_coach_grid() {
    let app = test_app();

    let criteria = json!({
        "kind": "TRAIN",
        "origin": "NDLS",
        "destination": "BCT",
        "travel_date": "2026-10-02",
        "passengers": 2,
        "class": "Sleeper (SL)"
    });
    let (status, session) = send(&app, "POST", "/v1/sessions", Some(criteria)).await;
    assert_eq!(status, StatusCode::OK);

    let rows = session["seat_map"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.as_array().unwrap().len() == 4));
}

#[tokio::test]
async fn test_invalid_iata_codes_rejected() {
    let app = test_app();

    let criteria = json!({
        "kind": "FLIGHT",
        "origin": "DELHI",
        "destination": "BOM",
        "travel_date": "2026-09-15",
        "passengers": 1,
        "class": "Economy"
    });
    let (status, body) = send(&app, "POST", "/v1/sessions", Some(criteria)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("IATA"));
}

#[tokio::test]
async fn test_unknown_session_is_404() {
    let app = test_app();
    let uri = format!("/v1/sessions/{}/seatmap", uuid::Uuid::new_v4());
    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_zero_passengers_rejected() {
    let app = test_app();
    let (status, _) = send(&app, "POST", "/v1/sessions", Some(flight_criteria(0))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_plan_endpoint() {
    let app = test_app();
    let (status, plan) = send(
        &app,
        "POST",
        "/v1/plan",
        Some(json!({
            "destination": "Goa",
            "days": 4,
            "month": "December",
            "budget": "Mid-range",
            "travel_type": "Leisure",
            "accommodation": "Resort",
            "pace": "Relaxed",
            "interests": ["Beach"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan["days"].as_array().unwrap().len(), 4);
    assert_eq!(plan["days"][0]["theme"], "Grand Arrival");
    assert!(!plan["local_dishes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_recommendations_endpoint() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/v1/recommendations/Goa", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["local_dishes"][0]["dish"], "Fish Curry Rice");
    assert_eq!(body["cuisines"].as_array().unwrap().len(), 4);

    // Unknown destinations still get the cuisine guide.
    let (status, body) = send(&app, "GET", "/v1/recommendations/Reykjavik", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["local_dishes"].as_array().unwrap().is_empty());
    assert!(!body["cuisines"].as_array().unwrap().is_empty());
}
