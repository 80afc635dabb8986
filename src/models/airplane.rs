//! Modelos de Airplane, AirplaneType y AirplaneSeatConfiguration
//!
//! Un avión pertenece a un tipo y posee sus configuraciones de asientos
//! (una por clase). La capacidad es siempre derivada: rows × seats_in_row.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Clase de asiento - mapea al ENUM seat_class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "seat_class", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SeatClass {
    Economy,
    Business,
}

impl std::fmt::Display for SeatClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeatClass::Economy => write!(f, "economy"),
            SeatClass::Business => write!(f, "business"),
        }
    }
}

/// AirplaneType - mapea exactamente a la tabla airplane_types
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AirplaneType {
    pub id: Uuid,
    pub name: String,
}

/// Airplane - mapea exactamente a la tabla airplanes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Airplane {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub airplane_type_id: Uuid,
}

/// AirplaneSeatConfiguration - mapea exactamente a la tabla
/// airplane_seat_configurations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AirplaneSeatConfiguration {
    pub id: Uuid,
    pub airplane_id: Uuid,
    pub seat_class: SeatClass,
    pub rows: i32,
    pub seats_in_row: i32,
}

impl AirplaneSeatConfiguration {
    /// Capacidad total de la configuración
    pub fn capacity(&self) -> i32 {
        self.rows * self.seats_in_row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_is_rows_times_seats() {
        let config = AirplaneSeatConfiguration {
            id: Uuid::new_v4(),
            airplane_id: Uuid::new_v4(),
            seat_class: SeatClass::Economy,
            rows: 10,
            seats_in_row: 6,
        };
        assert_eq!(config.capacity(), 60);
    }

    #[test]
    fn test_seat_class_display() {
        assert_eq!(SeatClass::Economy.to_string(), "economy");
        assert_eq!(SeatClass::Business.to_string(), "business");
    }
}
