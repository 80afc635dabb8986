//! DTOs de Flight

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::airplane_dto::AirplaneListResponse;
use crate::dto::crew_dto::CrewMemberResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFlightRequest {
    pub route_id: Uuid,
    pub airplane_id: Uuid,
    pub crew_ids: Vec<Uuid>,
    pub base_price: Decimal,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFlightRequest {
    pub route_id: Option<Uuid>,
    pub airplane_id: Option<Uuid>,
    pub crew_ids: Option<Vec<Uuid>>,
    pub base_price: Option<Decimal>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
}

/// Proyección de lista: la ruta como string legible
#[derive(Debug, Serialize)]
pub struct FlightListResponse {
    pub id: Uuid,
    pub route_id: Uuid,
    pub airplane_id: Uuid,
    pub base_price: Decimal,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub route: String,
}

/// Proyección de detalle: avión y tripulación completos
#[derive(Debug, Serialize)]
pub struct FlightRetrieveResponse {
    pub id: Uuid,
    pub base_price: Decimal,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub route_id: Uuid,
    pub route: String,
    pub airplane: AirplaneListResponse,
    pub crew: Vec<CrewMemberResponse>,
}

/// Filtros de búsqueda de vuelos
#[derive(Debug, Default, Deserialize)]
pub struct FlightFilters {
    #[serde(rename = "airplane-id")]
    pub airplane_id: Option<Uuid>,

    #[serde(rename = "route-id")]
    pub route_id: Option<Uuid>,

    /// Lista separada por comas de ids de tripulantes
    #[serde(rename = "crew-ids")]
    pub crew_ids: Option<String>,

    /// Día de salida (YYYY-MM-DD), filtrado como intervalo semiabierto
    #[serde(rename = "departure-day")]
    pub departure_day: Option<String>,
}
