use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::crew_controller::CrewController;
use crate::dto::airplane_dto::{ImageResponse, UploadImageRequest};
use crate::dto::crew_dto::{
    CreateCrewMemberRequest, CreateCrewPositionRequest, CrewMemberResponse,
    CrewPositionListResponse, CrewPositionRetrieveResponse, UpdateCrewMemberRequest,
    UpdateCrewPositionRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_crew_position_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_crew_position))
        .route("/", get(list_crew_positions))
        .route("/:id", get(get_crew_position))
        .route("/:id", put(update_crew_position))
        .route("/:id", delete(delete_crew_position))
}

pub fn create_crew_member_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_crew_member))
        .route("/", get(list_crew_members))
        .route("/:id", get(get_crew_member))
        .route("/:id", put(update_crew_member))
        .route("/:id", delete(delete_crew_member))
        .route("/:id/upload-image", post(upload_crew_member_image))
}

// ----------- CrewMemberPosition -----------

async fn create_crew_position(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Json(request): Json<CreateCrewPositionRequest>,
) -> Result<Json<ApiResponse<CrewPositionListResponse>>, AppError> {
    let controller = CrewController::new(&state);
    let response = controller.create_position(user.as_deref(), request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Crew member position created successfully".to_string(),
    )))
}

async fn list_crew_positions(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
) -> Result<Json<Vec<CrewPositionListResponse>>, AppError> {
    let controller = CrewController::new(&state);
    let response = controller.list_positions(user.as_deref()).await?;
    Ok(Json(response))
}

async fn get_crew_position(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CrewPositionRetrieveResponse>, AppError> {
    let controller = CrewController::new(&state);
    let response = controller.get_position(user.as_deref(), id).await?;
    Ok(Json(response))
}

async fn update_crew_position(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCrewPositionRequest>,
) -> Result<Json<ApiResponse<CrewPositionListResponse>>, AppError> {
    let controller = CrewController::new(&state);
    let response = controller
        .update_position(user.as_deref(), id, request)
        .await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_crew_position(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CrewController::new(&state);
    controller.delete_position(user.as_deref(), id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Crew member position deleted successfully"
    })))
}

// ----------- CrewMember -----------

async fn create_crew_member(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Json(request): Json<CreateCrewMemberRequest>,
) -> Result<Json<ApiResponse<CrewMemberResponse>>, AppError> {
    let controller = CrewController::new(&state);
    let response = controller.create_member(user.as_deref(), request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Crew member created successfully".to_string(),
    )))
}

async fn list_crew_members(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
) -> Result<Json<Vec<CrewMemberResponse>>, AppError> {
    let controller = CrewController::new(&state);
    let response = controller.list_members(user.as_deref()).await?;
    Ok(Json(response))
}

async fn get_crew_member(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CrewMemberResponse>, AppError> {
    let controller = CrewController::new(&state);
    let response = controller.get_member(user.as_deref(), id).await?;
    Ok(Json(response))
}

async fn update_crew_member(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCrewMemberRequest>,
) -> Result<Json<ApiResponse<CrewMemberResponse>>, AppError> {
    let controller = CrewController::new(&state);
    let response = controller
        .update_member(user.as_deref(), id, request)
        .await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_crew_member(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CrewController::new(&state);
    controller.delete_member(user.as_deref(), id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Crew member deleted successfully"
    })))
}

async fn upload_crew_member_image(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UploadImageRequest>,
) -> Result<Json<ApiResponse<ImageResponse>>, AppError> {
    let controller = CrewController::new(&state);
    let response = controller
        .upload_member_image(user.as_deref(), id, request)
        .await?;
    Ok(Json(ApiResponse::success(response)))
}
