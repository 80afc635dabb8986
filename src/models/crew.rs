//! Modelo de CrewMemberPosition
//!
//! Los tripulantes se leen siempre con su posición resuelta, así que su
//! proyección vive junto al repositorio de tripulación.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// CrewMemberPosition - mapea exactamente a la tabla crew_member_positions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CrewMemberPosition {
    pub id: Uuid,
    pub name: String,
}
