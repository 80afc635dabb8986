use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::flight_controller::FlightController;
use crate::dto::flight_dto::{
    CreateFlightRequest, FlightFilters, FlightListResponse, FlightRetrieveResponse,
    UpdateFlightRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_flight_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_flight))
        .route("/", get(list_flights))
        .route("/:id", get(get_flight))
        .route("/:id", put(update_flight))
        .route("/:id", delete(delete_flight))
}

async fn create_flight(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Json(request): Json<CreateFlightRequest>,
) -> Result<Json<ApiResponse<FlightListResponse>>, AppError> {
    let controller = FlightController::new(&state);
    let response = controller.create(user.as_deref(), request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Flight created successfully".to_string(),
    )))
}

async fn list_flights(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Query(filters): Query<FlightFilters>,
) -> Result<Json<Vec<FlightListResponse>>, AppError> {
    let controller = FlightController::new(&state);
    let response = controller.list(user.as_deref(), filters).await?;
    Ok(Json(response))
}

async fn get_flight(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<FlightRetrieveResponse>, AppError> {
    let controller = FlightController::new(&state);
    let response = controller.get_by_id(user.as_deref(), id).await?;
    Ok(Json(response))
}

async fn update_flight(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFlightRequest>,
) -> Result<Json<ApiResponse<FlightListResponse>>, AppError> {
    let controller = FlightController::new(&state);
    let response = controller.update(user.as_deref(), id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_flight(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = FlightController::new(&state);
    controller.delete(user.as_deref(), id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Flight deleted successfully"
    })))
}
