use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::route_controller::RouteController;
use crate::dto::airport_dto::{
    CreateRouteRequest, RouteListResponse, RouteRetrieveResponse, UpdateRouteRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_route))
        .route("/", get(list_routes))
        .route("/:id", get(get_route))
        .route("/:id", put(update_route))
        .route("/:id", delete(delete_route))
}

async fn create_route(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Json(request): Json<CreateRouteRequest>,
) -> Result<Json<ApiResponse<RouteListResponse>>, AppError> {
    let controller = RouteController::new(&state);
    let response = controller.create(user.as_deref(), request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Route created successfully".to_string(),
    )))
}

async fn list_routes(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
) -> Result<Json<Vec<RouteListResponse>>, AppError> {
    let controller = RouteController::new(&state);
    let response = controller.list(user.as_deref()).await?;
    Ok(Json(response))
}

async fn get_route(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<RouteRetrieveResponse>, AppError> {
    let controller = RouteController::new(&state);
    let response = controller.get_by_id(user.as_deref(), id).await?;
    Ok(Json(response))
}

async fn update_route(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRouteRequest>,
) -> Result<Json<ApiResponse<RouteListResponse>>, AppError> {
    let controller = RouteController::new(&state);
    let response = controller.update(user.as_deref(), id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_route(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = RouteController::new(&state);
    controller.delete(user.as_deref(), id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Route deleted successfully"
    })))
}
