use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::airplane_controller::AirplaneController;
use crate::dto::airplane_dto::{
    AirplaneListResponse, AirplaneTypeListResponse, AirplaneTypeRetrieveResponse,
    CreateAirplaneRequest, CreateAirplaneTypeRequest, CreateSeatConfigurationRequest,
    ImageResponse, SeatConfigurationListResponse, SeatConfigurationRetrieveResponse,
    UpdateAirplaneRequest, UpdateAirplaneTypeRequest, UpdateSeatConfigurationRequest,
    UploadImageRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_airplane_type_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_airplane_type))
        .route("/", get(list_airplane_types))
        .route("/:id", get(get_airplane_type))
        .route("/:id", put(update_airplane_type))
        .route("/:id", delete(delete_airplane_type))
}

pub fn create_airplane_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_airplane))
        .route("/", get(list_airplanes))
        .route("/:id", get(get_airplane))
        .route("/:id", put(update_airplane))
        .route("/:id", delete(delete_airplane))
        .route("/:id/upload-image", post(upload_airplane_image))
}

pub fn create_seat_configuration_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_seat_configuration))
        .route("/", get(list_seat_configurations))
        .route("/:id", get(get_seat_configuration))
        .route("/:id", put(update_seat_configuration))
        .route("/:id", delete(delete_seat_configuration))
}

// ----------- AirplaneType -----------

async fn create_airplane_type(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Json(request): Json<CreateAirplaneTypeRequest>,
) -> Result<Json<ApiResponse<AirplaneTypeListResponse>>, AppError> {
    let controller = AirplaneController::new(&state);
    let response = controller.create_type(user.as_deref(), request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Airplane type created successfully".to_string(),
    )))
}

async fn list_airplane_types(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
) -> Result<Json<Vec<AirplaneTypeListResponse>>, AppError> {
    let controller = AirplaneController::new(&state);
    let response = controller.list_types(user.as_deref()).await?;
    Ok(Json(response))
}

async fn get_airplane_type(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AirplaneTypeRetrieveResponse>, AppError> {
    let controller = AirplaneController::new(&state);
    let response = controller.get_type(user.as_deref(), id).await?;
    Ok(Json(response))
}

async fn update_airplane_type(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAirplaneTypeRequest>,
) -> Result<Json<ApiResponse<AirplaneTypeListResponse>>, AppError> {
    let controller = AirplaneController::new(&state);
    let response = controller.update_type(user.as_deref(), id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_airplane_type(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AirplaneController::new(&state);
    controller.delete_type(user.as_deref(), id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Airplane type deleted successfully"
    })))
}

// ----------- Airplane -----------

async fn create_airplane(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Json(request): Json<CreateAirplaneRequest>,
) -> Result<Json<ApiResponse<AirplaneListResponse>>, AppError> {
    let controller = AirplaneController::new(&state);
    let response = controller.create(user.as_deref(), request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Airplane created successfully".to_string(),
    )))
}

async fn list_airplanes(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
) -> Result<Json<Vec<AirplaneListResponse>>, AppError> {
    let controller = AirplaneController::new(&state);
    let response = controller.list(user.as_deref()).await?;
    Ok(Json(response))
}

async fn get_airplane(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AirplaneListResponse>, AppError> {
    let controller = AirplaneController::new(&state);
    let response = controller.get_by_id(user.as_deref(), id).await?;
    Ok(Json(response))
}

async fn update_airplane(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAirplaneRequest>,
) -> Result<Json<ApiResponse<AirplaneListResponse>>, AppError> {
    let controller = AirplaneController::new(&state);
    let response = controller.update(user.as_deref(), id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_airplane(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AirplaneController::new(&state);
    controller.delete(user.as_deref(), id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Airplane deleted successfully"
    })))
}

async fn upload_airplane_image(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UploadImageRequest>,
) -> Result<Json<ApiResponse<ImageResponse>>, AppError> {
    let controller = AirplaneController::new(&state);
    let response = controller.upload_image(user.as_deref(), id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

// ----------- AirplaneSeatConfiguration -----------

async fn create_seat_configuration(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Json(request): Json<CreateSeatConfigurationRequest>,
) -> Result<Json<ApiResponse<SeatConfigurationListResponse>>, AppError> {
    let controller = AirplaneController::new(&state);
    let response = controller
        .create_configuration(user.as_deref(), request)
        .await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Seat configuration created successfully".to_string(),
    )))
}

async fn list_seat_configurations(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
) -> Result<Json<Vec<SeatConfigurationListResponse>>, AppError> {
    let controller = AirplaneController::new(&state);
    let response = controller.list_configurations(user.as_deref()).await?;
    Ok(Json(response))
}

async fn get_seat_configuration(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SeatConfigurationRetrieveResponse>, AppError> {
    let controller = AirplaneController::new(&state);
    let response = controller.get_configuration(user.as_deref(), id).await?;
    Ok(Json(response))
}

async fn update_seat_configuration(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateSeatConfigurationRequest>,
) -> Result<Json<ApiResponse<SeatConfigurationListResponse>>, AppError> {
    let controller = AirplaneController::new(&state);
    let response = controller
        .update_configuration(user.as_deref(), id, request)
        .await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_seat_configuration(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AirplaneController::new(&state);
    controller.delete_configuration(user.as_deref(), id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Seat configuration deleted successfully"
    })))
}
