use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::{AppState, Session};
use voyago_booking::store::BookingStore;
use voyago_booking::{
    Booking, BookingAssembler, BookingError, ContactInfo, ItineraryQuote, Passenger,
    SeatMapView, SelectionState, ToggleOutcome,
};
use voyago_core::validation::is_valid_iata;
use voyago_core::SessionId;
use voyago_inventory::{
    AddonSelection, InventoryError, InventoryMap, Itinerary, SearchCriteria, TravelKind,
};
use voyago_store::MemoryBookingStore;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/sessions", post(create_session))
        .route("/v1/sessions/{id}/seatmap", get(get_seat_map))
        .route("/v1/sessions/{id}/toggle", post(toggle_unit))
        .route("/v1/sessions/{id}/confirm", post(confirm_booking))
        .route(
            "/v1/sessions/{id}/bookings",
            get(list_bookings).delete(clear_bookings),
        )
}

#[derive(Debug, Serialize)]
struct CreateSessionResponse {
    session_id: SessionId,
    itineraries: Vec<Itinerary>,
    seat_map: Option<SeatMapView>,
}

/// Run a provider search and open a session around the result. An empty
/// result or a hotel search yields a session without a unit map, with
/// selection disabled.
async fn create_session(
    State(state): State<AppState>,
    Json(criteria): Json<SearchCriteria>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    if criteria.passengers == 0 {
        return Err(AppError::BadRequest(
            "At least one passenger is required".to_string(),
        ));
    }
    if criteria.passengers > state.booking_rules.max_passengers {
        return Err(AppError::BadRequest(format!(
            "At most {} passengers per booking",
            state.booking_rules.max_passengers
        )));
    }
    if criteria.kind == TravelKind::Flight
        && (!is_valid_iata(&criteria.origin) || !is_valid_iata(&criteria.destination))
    {
        return Err(AppError::BadRequest(
            "Please enter valid IATA airport codes".to_string(),
        ));
    }

    let response = state.provider.search(&criteria).await.map_err(|e| match e {
        InventoryError::InvalidConfiguration(msg) => AppError::BadRequest(msg),
        other => AppError::Anyhow(other.into()),
    })?;

    let map = match response.layout {
        Some(params) => Some(
            InventoryMap::build(params.layout, params.rows, params.units_per_row, response.taken_ids)
                .map_err(|e| AppError::BadRequest(e.to_string()))?,
        ),
        None => None,
    };

    let selection = SelectionState::new(criteria.passengers);
    let seat_map = map.as_ref().map(|m| SeatMapView::render(m, &selection));

    let session_id = SessionId::new();
    tracing::info!(%session_id, kind = ?criteria.kind, results = response.itineraries.len(), "Session created");

    let session = Session {
        criteria,
        itineraries: response.itineraries.clone(),
        pricing: response.pricing,
        map,
        selection,
        store: MemoryBookingStore::new(),
    };
    state.sessions.write().await.insert(session_id, session);

    Ok(Json(CreateSessionResponse {
        session_id,
        itineraries: response.itineraries,
        seat_map,
    }))
}

async fn get_seat_map(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<SeatMapView>, AppError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;
    let map = session
        .map
        .as_ref()
        .ok_or_else(|| AppError::NotFound("This session has no seat map".to_string()))?;
    Ok(Json(SeatMapView::render(map, &session.selection)))
}

#[derive(Debug, Deserialize)]
struct ToggleRequest {
    unit_id: String,
}

#[derive(Debug, Serialize)]
struct ToggleResponse {
    outcome: ToggleOutcome,
    seat_map: SeatMapView,
}

/// The only mutating selection entry point. Illegal toggles (taken unit,
/// capacity reached, unknown id) come back as rejected outcomes with the
/// selection unchanged, never as errors.
async fn toggle_unit(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;
    let map = session
        .map
        .as_ref()
        .ok_or_else(|| AppError::NotFound("This session has no seat map".to_string()))?;

    let outcome = session.selection.toggle(map, &request.unit_id);
    Ok(Json(ToggleResponse {
        outcome,
        seat_map: SeatMapView::render(map, &session.selection),
    }))
}

#[derive(Debug, Deserialize)]
struct ConfirmRequest {
    itinerary_id: Uuid,
    passengers: Vec<Passenger>,
    contact: ContactInfo,
    #[serde(default)]
    addons: AddonSelection,
}

/// Finalize a booking for the chosen itinerary. On validation failure the
/// full violation list is returned and the selection stays intact so the
/// user can correct the form and resubmit.
async fn confirm_booking(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(request): Json<ConfirmRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

    let itinerary = session
        .itineraries
        .iter()
        .find(|i| i.id == request.itinerary_id)
        .ok_or_else(|| AppError::NotFound("Itinerary not found in this session".to_string()))?;

    let quote = ItineraryQuote {
        kind: session.criteria.kind,
        itinerary: itinerary.label.clone(),
        route: format!(
            "{} → {}",
            session.criteria.origin.to_uppercase(),
            session.criteria.destination.to_uppercase()
        ),
        travel_date: session.criteria.travel_date,
        base_fare: itinerary.base_fare,
    };

    let assembler = BookingAssembler::new(state.booking_rules.reference_length);
    let booking = assembler
        .confirm(
            &session.selection,
            &request.passengers,
            &request.contact,
            &request.addons,
            &quote,
            &session.pricing,
            &mut session.store,
        )
        .map_err(|BookingError::ValidationFailed(violations)| {
            AppError::Validation(violations)
        })?;

    Ok((StatusCode::CREATED, Json(booking)))
}

async fn list_bookings(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;
    Ok(Json(session.store.list().to_vec()))
}

async fn clear_bookings(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, AppError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;
    session.store.clear();
    Ok(StatusCode::NO_CONTENT)
}
