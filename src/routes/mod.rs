//! Rutas de la API
//!
//! Cada recurso tiene su propio sub-router montado bajo `/api/...`.
//! Los recursos (menos auth) pasan por el middleware opcional de
//! autenticación: si llega un bearer token válido se inyecta el usuario
//! y los controllers deciden con la política de acceso del recurso.

pub mod airplane_routes;
pub mod airport_routes;
pub mod auth_routes;
pub mod crew_routes;
pub mod flight_routes;
pub mod order_routes;
pub mod route_routes;
pub mod ticket_routes;

use axum::{middleware as axum_middleware, Router};

use crate::middleware::auth::optional_auth_middleware;
use crate::state::AppState;

/// Router completo de la API montado bajo `/api`
pub fn create_api_router(state: AppState) -> Router<AppState> {
    let resources = Router::new()
        .nest(
            "/airplane-types",
            airplane_routes::create_airplane_type_router(),
        )
        .nest("/airplanes", airplane_routes::create_airplane_router())
        .nest(
            "/airplane-seat-configurations",
            airplane_routes::create_seat_configuration_router(),
        )
        .nest(
            "/crew-member-positions",
            crew_routes::create_crew_position_router(),
        )
        .nest("/crew-members", crew_routes::create_crew_member_router())
        .nest("/airports", airport_routes::create_airport_router())
        .nest("/routes", route_routes::create_route_router())
        .nest("/flights", flight_routes::create_flight_router())
        .nest("/tickets", ticket_routes::create_ticket_router())
        .nest("/orders", order_routes::create_order_router())
        .layer(axum_middleware::from_fn_with_state(
            state,
            optional_auth_middleware,
        ));

    Router::new()
        .nest("/auth", auth_routes::create_auth_router())
        .merge(resources)
}
