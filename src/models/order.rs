//! Modelos de Order y Ticket
//!
//! Una orden agrupa tickets de un usuario. El precio de la orden nunca
//! se almacena: se recalcula a partir del estado actual de vuelos y rutas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::airplane::SeatClass;

/// Order - mapea exactamente a la tabla orders
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
}

/// Ticket - mapea exactamente a la tabla tickets
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    pub id: Uuid,
    pub row: i32,
    pub seat: i32,
    pub seat_class: SeatClass,
    pub flight_id: Uuid,
    pub order_id: Uuid,
}
