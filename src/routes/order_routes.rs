use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::order_controller::OrderController;
use crate::dto::order_dto::{
    CreateOrderRequest, OrderFilters, OrderPayResponse, OrderResponse, UpdateOrderRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/", get(list_orders))
        .route("/:id", get(get_order))
        .route("/:id", put(update_order))
        .route("/:id", delete(delete_order))
        .route("/:id/pay", post(pay_order))
}

async fn create_order(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<ApiResponse<OrderResponse>>, AppError> {
    let controller = OrderController::new(&state);
    let response = controller.create(user.as_deref(), request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Order created successfully".to_string(),
    )))
}

async fn list_orders(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Query(filters): Query<OrderFilters>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let controller = OrderController::new(&state);
    let response = controller.list(user.as_deref(), filters).await?;
    Ok(Json(response))
}

async fn get_order(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>, AppError> {
    let controller = OrderController::new(&state);
    let response = controller.get_by_id(user.as_deref(), id).await?;
    Ok(Json(response))
}

async fn update_order(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateOrderRequest>,
) -> Result<Json<ApiResponse<OrderResponse>>, AppError> {
    let controller = OrderController::new(&state);
    let response = controller.update(user.as_deref(), id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn delete_order(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = OrderController::new(&state);
    controller.delete(user.as_deref(), id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Order deleted successfully"
    })))
}

async fn pay_order(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrderPayResponse>>, AppError> {
    let controller = OrderController::new(&state);
    let response = controller.pay(user.as_deref(), id).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Order paid successfully".to_string(),
    )))
}
