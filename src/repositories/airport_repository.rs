use sqlx::PgPool;
use uuid::Uuid;

use crate::models::airport::Airport;
use crate::utils::errors::{map_unique_violation, AppError};

/// Airport con los totales de rutas que lo usan como origen y destino
#[derive(Debug, sqlx::FromRow)]
pub struct AirportWithRouteCounts {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub closest_big_city: String,
    pub source_routes_total: i64,
    pub destination_routes_total: i64,
}

pub struct AirportRepository {
    pool: PgPool,
}

impl AirportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, closest_big_city: &str) -> Result<Airport, AppError> {
        let airport = sqlx::query_as::<_, Airport>(
            r#"
            INSERT INTO airports (id, name, image_url, closest_big_city)
            VALUES ($1, $2, NULL, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(closest_big_city)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "name", "Airport with this name already exists."))?;

        Ok(airport)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Airport>, AppError> {
        let airport = sqlx::query_as::<_, Airport>("SELECT * FROM airports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(airport)
    }

    pub async fn find_with_counts(
        &self,
        id: Uuid,
    ) -> Result<Option<AirportWithRouteCounts>, AppError> {
        let airport = sqlx::query_as::<_, AirportWithRouteCounts>(
            r#"
            SELECT a.*,
                (SELECT COUNT(*) FROM routes r WHERE r.source_id = a.id) AS source_routes_total,
                (SELECT COUNT(*) FROM routes r WHERE r.destination_id = a.id) AS destination_routes_total
            FROM airports a
            WHERE a.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(airport)
    }

    pub async fn list(&self) -> Result<Vec<AirportWithRouteCounts>, AppError> {
        let airports = sqlx::query_as::<_, AirportWithRouteCounts>(
            r#"
            SELECT a.*,
                (SELECT COUNT(*) FROM routes r WHERE r.source_id = a.id) AS source_routes_total,
                (SELECT COUNT(*) FROM routes r WHERE r.destination_id = a.id) AS destination_routes_total
            FROM airports a
            ORDER BY a.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(airports)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        closest_big_city: Option<&str>,
    ) -> Result<Airport, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Airport not found".to_string()))?;

        let airport = sqlx::query_as::<_, Airport>(
            r#"
            UPDATE airports
            SET name = $2, closest_big_city = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(&current.name))
        .bind(closest_big_city.unwrap_or(&current.closest_big_city))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "name", "Airport with this name already exists."))?;

        Ok(airport)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM airports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn set_image(&self, id: Uuid, image_url: &str) -> Result<Airport, AppError> {
        let airport = sqlx::query_as::<_, Airport>(
            "UPDATE airports SET image_url = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(airport)
    }

    /// Ids de rutas que parten de este aeropuerto
    pub async fn source_route_ids(&self, id: Uuid) -> Result<Vec<Uuid>, AppError> {
        let ids: Vec<(Uuid,)> = sqlx::query_as("SELECT id FROM routes WHERE source_id = $1")
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        Ok(ids.into_iter().map(|(id,)| id).collect())
    }

    /// Ids de rutas que llegan a este aeropuerto
    pub async fn destination_route_ids(&self, id: Uuid) -> Result<Vec<Uuid>, AppError> {
        let ids: Vec<(Uuid,)> = sqlx::query_as("SELECT id FROM routes WHERE destination_id = $1")
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        Ok(ids.into_iter().map(|(id,)| id).collect())
    }
}
