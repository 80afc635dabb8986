use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::airport_controller::AirportController;
use crate::dto::airplane_dto::{ImageResponse, UploadImageRequest};
use crate::dto::airport_dto::{
    AirportListResponse, AirportRetrieveResponse, CreateAirportRequest, UpdateAirportRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_airport_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_airport))
        .route("/", get(list_airports))
        .route("/:id", get(get_airport))
        .route("/:id", put(update_airport))
        .route("/:id", delete(delete_airport))
        .route("/:id/upload-image", post(upload_airport_image))
}

async fn create_airport(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Json(request): Json<CreateAirportRequest>,
) -> Result<Json<ApiResponse<AirportListResponse>>, AppError> {
    let controller = AirportController::new(&state);
    let response = controller.create(user.as_deref(), request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Airport created successfully".to_string(),
    )))
}

async fn list_airports(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
) -> Result<Json<Vec<AirportListResponse>>, AppError> {
    let controller = AirportController::new(&state);
    let response = controller.list(user.as_deref()).await?;
    Ok(Json(response))
}

async fn get_airport(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AirportRetrieveResponse>, AppError> {
    let controller = AirportController::new(&state);
    let response = controller.get_by_id(user.as_deref(), id).await?;
    Ok(Json(response))
}

async fn update_airport(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAirportRequest>,
) -> Result<Json<ApiResponse<AirportListResponse>>, AppError> {
    let controller = AirportController::new(&state);
    let response = controller.update(user.as_deref(), id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_airport(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AirportController::new(&state);
    controller.delete(user.as_deref(), id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Airport deleted successfully"
    })))
}

async fn upload_airport_image(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UploadImageRequest>,
) -> Result<Json<ApiResponse<ImageResponse>>, AppError> {
    let controller = AirportController::new(&state);
    let response = controller.upload_image(user.as_deref(), id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}
