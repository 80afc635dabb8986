//! DTOs de Airport y Route

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ----------- Airport -----------

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAirportRequest {
    #[validate(length(min = 1, max = 63))]
    pub name: String,

    #[validate(length(min = 1, max = 63))]
    pub closest_big_city: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAirportRequest {
    #[validate(length(min = 1, max = 63))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 63))]
    pub closest_big_city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AirportListResponse {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub closest_big_city: String,
    pub source_routes_total: i64,
    pub destination_routes_total: i64,
}

#[derive(Debug, Serialize)]
pub struct AirportRetrieveResponse {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub closest_big_city: String,
    pub source_routes_total: i64,
    pub source_route_ids: Vec<Uuid>,
    pub destination_routes_total: i64,
    pub destination_route_ids: Vec<Uuid>,
}

// ----------- Route -----------

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    pub source_id: Uuid,
    pub destination_id: Uuid,

    #[validate(range(min = 1))]
    pub distance: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRouteRequest {
    pub source_id: Option<Uuid>,
    pub destination_id: Option<Uuid>,

    #[validate(range(min = 1))]
    pub distance: Option<i32>,
}

/// Proyección de lista: solo las ciudades de los extremos
#[derive(Debug, Serialize)]
pub struct RouteListResponse {
    pub id: Uuid,
    pub source: String,
    pub destination: String,
    pub distance: i32,
    pub source_id: Uuid,
    pub destination_id: Uuid,
}

/// Proyección de detalle: aeropuertos completos
#[derive(Debug, Serialize)]
pub struct RouteRetrieveResponse {
    pub id: Uuid,
    pub source: AirportListResponse,
    pub destination: AirportListResponse,
    pub distance: i32,
}
