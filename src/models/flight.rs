//! Modelo de Flight
//!
//! Un vuelo ata una ruta, un avión y un roster de tripulación a una
//! ventana horaria. La relación con la tripulación vive en flight_crew.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Flight - mapea exactamente a la tabla flights
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Flight {
    pub id: Uuid,
    pub route_id: Uuid,
    pub airplane_id: Uuid,
    pub base_price: Decimal,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}
