//! Modelos de Airport y Route
//!
//! Una ruta es una arista dirigida entre dos aeropuertos distintos,
//! única por par ordenado (source, destination).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Airport - mapea exactamente a la tabla airports
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Airport {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub closest_big_city: String,
}

/// Route - mapea exactamente a la tabla routes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub id: Uuid,
    pub source_id: Uuid,
    pub destination_id: Uuid,
    pub distance: i32,
}
