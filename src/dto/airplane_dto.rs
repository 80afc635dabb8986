//! DTOs de AirplaneType, Airplane y AirplaneSeatConfiguration

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::airplane::{AirplaneSeatConfiguration, SeatClass};

// ----------- AirplaneType -----------

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAirplaneTypeRequest {
    #[validate(length(min = 1, max = 63))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAirplaneTypeRequest {
    #[validate(length(min = 1, max = 63))]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AirplaneTypeListResponse {
    pub id: Uuid,
    pub name: String,
    pub airplanes_total: i64,
}

#[derive(Debug, Serialize)]
pub struct AirplaneTypeRetrieveResponse {
    pub id: Uuid,
    pub name: String,
    pub airplanes_total: i64,
    pub airplane_ids: Vec<Uuid>,
}

// ----------- AirplaneSeatConfiguration -----------

/// Configuración de asientos embebida en el payload de un avión
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SeatConfigurationPayload {
    pub seat_class: SeatClass,

    #[validate(range(min = 1, max = 500))]
    pub rows: i32,

    #[validate(range(min = 1, max = 500))]
    pub seats_in_row: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSeatConfigurationRequest {
    pub airplane_id: Uuid,
    pub seat_class: SeatClass,

    #[validate(range(min = 1, max = 500))]
    pub rows: i32,

    #[validate(range(min = 1, max = 500))]
    pub seats_in_row: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSeatConfigurationRequest {
    #[validate(range(min = 1, max = 500))]
    pub rows: Option<i32>,

    #[validate(range(min = 1, max = 500))]
    pub seats_in_row: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct SeatConfigurationResponse {
    pub id: Uuid,
    pub seat_class: SeatClass,
    pub rows: i32,
    pub seats_in_row: i32,
    pub capacity: i32,
}

impl From<AirplaneSeatConfiguration> for SeatConfigurationResponse {
    fn from(config: AirplaneSeatConfiguration) -> Self {
        let capacity = config.capacity();
        Self {
            id: config.id,
            seat_class: config.seat_class,
            rows: config.rows,
            seats_in_row: config.seats_in_row,
            capacity,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SeatConfigurationListResponse {
    pub id: Uuid,
    pub airplane_id: Uuid,
    pub seat_class: SeatClass,
    pub rows: i32,
    pub seats_in_row: i32,
    pub capacity: i32,
}

#[derive(Debug, Serialize)]
pub struct SeatConfigurationRetrieveResponse {
    pub id: Uuid,
    pub airplane: AirplaneListResponse,
    pub seat_class: SeatClass,
    pub rows: i32,
    pub seats_in_row: i32,
    pub capacity: i32,
}

// ----------- Airplane -----------

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAirplaneRequest {
    #[validate(length(min = 1, max = 63))]
    pub name: String,

    pub airplane_type_id: Uuid,

    #[validate]
    pub seat_configurations: Vec<SeatConfigurationPayload>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAirplaneRequest {
    #[validate(length(min = 1, max = 63))]
    pub name: Option<String>,

    pub airplane_type_id: Option<Uuid>,

    #[validate]
    pub seat_configurations: Option<Vec<SeatConfigurationPayload>>,
}

#[derive(Debug, Serialize)]
pub struct AirplaneListResponse {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub airplane_type_id: Uuid,
    pub airplane_type_name: String,
    pub total_seats: i32,
    pub seat_configurations: Vec<SeatConfigurationResponse>,
}

/// Request para subir una imagen (base64)
#[derive(Debug, Deserialize, Validate)]
pub struct UploadImageRequest {
    #[validate(length(min = 1))]
    pub image: String,

    pub filename: Option<String>,
}

/// Response de los endpoints upload-image
#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub id: Uuid,
    pub image: Option<String>,
}
