use sqlx::PgPool;
use uuid::Uuid;

use crate::models::airport::Route;
use crate::services::routing_service::RouteEndpoints;
use crate::utils::errors::{map_unique_violation, AppError};

/// Route con las ciudades de sus extremos para la proyección de lista
#[derive(Debug, sqlx::FromRow)]
pub struct RouteWithCities {
    pub id: Uuid,
    pub source_id: Uuid,
    pub destination_id: Uuid,
    pub distance: i32,
    pub source_city: String,
    pub destination_city: String,
}

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        source_id: Uuid,
        destination_id: Uuid,
        distance: i32,
    ) -> Result<Route, AppError> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (id, source_id, destination_id, distance)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(source_id)
        .bind(destination_id)
        .bind(distance)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "route", "This route already exists."))?;

        Ok(route)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Route>, AppError> {
        let route = sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(route)
    }

    pub async fn list(&self) -> Result<Vec<RouteWithCities>, AppError> {
        let routes = sqlx::query_as::<_, RouteWithCities>(
            r#"
            SELECT r.id, r.source_id, r.destination_id, r.distance,
                   s.closest_big_city AS source_city,
                   d.closest_big_city AS destination_city
            FROM routes r
            JOIN airports s ON s.id = r.source_id
            JOIN airports d ON d.id = r.destination_id
            ORDER BY s.name, d.name, r.distance
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    /// Extremos de las rutas que parten de este aeropuerto, para el
    /// chequeo advisory de par duplicado; la constraint
    /// unique_source_destination es el árbitro final.
    pub async fn endpoints_for_source(
        &self,
        source_id: Uuid,
    ) -> Result<Vec<RouteEndpoints>, AppError> {
        let rows: Vec<(Uuid, Uuid, Uuid)> =
            sqlx::query_as("SELECT id, source_id, destination_id FROM routes WHERE source_id = $1")
                .bind(source_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(route_id, source_id, destination_id)| RouteEndpoints {
                route_id,
                source_id,
                destination_id,
            })
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        source_id: Option<Uuid>,
        destination_id: Option<Uuid>,
        distance: Option<i32>,
    ) -> Result<Route, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route not found".to_string()))?;

        let route = sqlx::query_as::<_, Route>(
            r#"
            UPDATE routes
            SET source_id = $2, destination_id = $3, distance = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(source_id.unwrap_or(current.source_id))
        .bind(destination_id.unwrap_or(current.destination_id))
        .bind(distance.unwrap_or(current.distance))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "route", "This route already exists."))?;

        Ok(route)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
