use axum::{
    extract::Path,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;
use voyago_plan::{food, CuisineSection, FoodRecommendation};
use voyago_plan::{PlanGenerator, TravelPlan, TripParameters};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/plan", post(generate_plan))
        .route("/v1/recommendations/{destination}", get(get_recommendations))
}

async fn generate_plan(
    Json(params): Json<TripParameters>,
) -> Result<Json<TravelPlan>, AppError> {
    if params.destination.trim().is_empty() {
        return Err(AppError::BadRequest("Destination is required".to_string()));
    }
    Ok(Json(PlanGenerator::new().generate(&params)))
}

#[derive(Debug, Serialize)]
struct RecommendationsResponse {
    local_dishes: &'static [FoodRecommendation],
    cuisines: &'static [CuisineSection],
}

/// Curated dining guide for a destination. `local_dishes` is empty for
/// destinations without a table; the cuisine guide is always present.
async fn get_recommendations(Path(destination): Path<String>) -> Json<RecommendationsResponse> {
    Json(RecommendationsResponse {
        local_dishes: food::local_dishes(&destination),
        cuisines: food::cuisine_guide(),
    })
}
