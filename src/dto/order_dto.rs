//! DTOs de Order y Ticket

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::flight_dto::FlightListResponse;
use crate::models::airplane::SeatClass;

// ----------- Ticket -----------

/// Ticket embebido en el payload de creación de una orden
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TicketPayload {
    #[validate(range(min = 1))]
    pub row: i32,

    #[validate(range(min = 1))]
    pub seat: i32,

    pub seat_class: SeatClass,
    pub flight_id: Uuid,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTicketRequest {
    #[validate(range(min = 1))]
    pub row: i32,

    #[validate(range(min = 1))]
    pub seat: i32,

    pub seat_class: SeatClass,
    pub flight_id: Uuid,
    pub order_id: Uuid,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTicketRequest {
    #[validate(range(min = 1))]
    pub row: Option<i32>,

    #[validate(range(min = 1))]
    pub seat: Option<i32>,

    pub seat_class: Option<SeatClass>,
    pub flight_id: Option<Uuid>,
}

/// Ticket con su precio calculado (nunca almacenado)
#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub id: Uuid,
    pub row: i32,
    pub seat: i32,
    pub seat_class: SeatClass,
    pub flight_id: Uuid,
    pub route_string: String,
    pub price: Decimal,
}

#[derive(Debug, Serialize)]
pub struct TicketListResponse {
    pub id: Uuid,
    pub row: i32,
    pub seat: i32,
    pub seat_class: SeatClass,
    pub owner_email: String,
    pub route_string: String,
    pub price: Decimal,
}

#[derive(Debug, Serialize)]
pub struct TicketRetrieveResponse {
    pub id: Uuid,
    pub row: i32,
    pub seat: i32,
    pub seat_class: SeatClass,
    pub price: Decimal,
    pub order: OrderResponse,
    pub flight: FlightListResponse,
}

// ----------- Order -----------

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    /// No puede ser vacío; el controller lo verifica con mensaje de campo
    #[validate]
    pub tickets: Vec<TicketPayload>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub is_paid: Option<bool>,
}

/// Orden con su precio derivado: suma de los precios calculados
/// de sus tickets
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub order_price: Decimal,
    pub tickets: Vec<TicketResponse>,
}

/// Response de la acción pay
#[derive(Debug, Serialize)]
pub struct OrderPayResponse {
    pub id: Uuid,
    pub is_paid: bool,
}

/// Filtros de búsqueda de órdenes
#[derive(Debug, Default, Deserialize)]
pub struct OrderFilters {
    /// Día de creación (YYYY-MM-DD), filtrado como intervalo semiabierto
    #[serde(rename = "order-day")]
    pub order_day: Option<String>,
}
