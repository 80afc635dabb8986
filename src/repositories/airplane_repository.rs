use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::airplane_dto::SeatConfigurationPayload;
use crate::models::airplane::{Airplane, AirplaneSeatConfiguration, AirplaneType, SeatClass};
use crate::utils::errors::{map_unique_violation, AppError};

/// AirplaneType con el total de aviones asociados
#[derive(Debug, sqlx::FromRow)]
pub struct AirplaneTypeWithCount {
    pub id: Uuid,
    pub name: String,
    pub airplanes_total: i64,
}

pub struct AirplaneRepository {
    pool: PgPool,
}

impl AirplaneRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ----------- AirplaneType -----------

    pub async fn create_type(&self, name: &str) -> Result<AirplaneType, AppError> {
        let airplane_type = sqlx::query_as::<_, AirplaneType>(
            "INSERT INTO airplane_types (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, "name", "Airplane type with this name already exists.")
        })?;

        Ok(airplane_type)
    }

    pub async fn find_type_by_id(&self, id: Uuid) -> Result<Option<AirplaneType>, AppError> {
        let airplane_type =
            sqlx::query_as::<_, AirplaneType>("SELECT * FROM airplane_types WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(airplane_type)
    }

    pub async fn list_types(&self) -> Result<Vec<AirplaneTypeWithCount>, AppError> {
        let types = sqlx::query_as::<_, AirplaneTypeWithCount>(
            r#"
            SELECT t.id, t.name, COUNT(a.id) AS airplanes_total
            FROM airplane_types t
            LEFT JOIN airplanes a ON a.airplane_type_id = t.id
            GROUP BY t.id, t.name
            ORDER BY t.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(types)
    }

    pub async fn update_type(&self, id: Uuid, name: &str) -> Result<AirplaneType, AppError> {
        let airplane_type = sqlx::query_as::<_, AirplaneType>(
            "UPDATE airplane_types SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, "name", "Airplane type with this name already exists.")
        })?;

        Ok(airplane_type)
    }

    pub async fn delete_type(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM airplane_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn airplane_ids_for_type(&self, type_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        let ids: Vec<(Uuid,)> =
            sqlx::query_as("SELECT id FROM airplanes WHERE airplane_type_id = $1 ORDER BY name")
                .bind(type_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(ids.into_iter().map(|(id,)| id).collect())
    }

    // ----------- Airplane -----------

    /// Crear un avión junto con sus configuraciones de asientos en una
    /// sola transacción.
    pub async fn create(
        &self,
        name: &str,
        airplane_type_id: Uuid,
        seat_configurations: &[SeatConfigurationPayload],
    ) -> Result<Airplane, AppError> {
        let mut tx = self.pool.begin().await?;

        let airplane = sqlx::query_as::<_, Airplane>(
            r#"
            INSERT INTO airplanes (id, name, image_url, airplane_type_id)
            VALUES ($1, $2, NULL, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(airplane_type_id)
        .fetch_one(&mut *tx)
        .await?;

        for config in seat_configurations {
            sqlx::query(
                r#"
                INSERT INTO airplane_seat_configurations
                    (id, airplane_id, seat_class, rows, seats_in_row)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(airplane.id)
            .bind(config.seat_class)
            .bind(config.rows)
            .bind(config.seats_in_row)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                map_unique_violation(
                    e,
                    "seat_configurations",
                    "Duplicate seat_class for this airplane.",
                )
            })?;
        }

        tx.commit().await?;

        Ok(airplane)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Airplane>, AppError> {
        let airplane = sqlx::query_as::<_, Airplane>("SELECT * FROM airplanes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(airplane)
    }

    pub async fn list(&self) -> Result<Vec<Airplane>, AppError> {
        let airplanes = sqlx::query_as::<_, Airplane>("SELECT * FROM airplanes ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(airplanes)
    }

    /// Actualizar un avión; las configuraciones recibidas se insertan o
    /// actualizan por seat_class dentro de la misma transacción.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        airplane_type_id: Option<Uuid>,
        seat_configurations: Option<&[SeatConfigurationPayload]>,
    ) -> Result<Airplane, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Airplane not found".to_string()))?;

        let mut tx = self.pool.begin().await?;

        let airplane = sqlx::query_as::<_, Airplane>(
            r#"
            UPDATE airplanes
            SET name = $2, airplane_type_id = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(&current.name))
        .bind(airplane_type_id.unwrap_or(current.airplane_type_id))
        .fetch_one(&mut *tx)
        .await?;

        if let Some(configs) = seat_configurations {
            for config in configs {
                sqlx::query(
                    r#"
                    INSERT INTO airplane_seat_configurations
                        (id, airplane_id, seat_class, rows, seats_in_row)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT ON CONSTRAINT unique_seat_class_per_airplane
                    DO UPDATE SET rows = EXCLUDED.rows, seats_in_row = EXCLUDED.seats_in_row
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(id)
                .bind(config.seat_class)
                .bind(config.rows)
                .bind(config.seats_in_row)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        Ok(airplane)
    }

    /// Borrado explícito en cascada: primero las configuraciones que el
    /// avión posee, después el avión, en una transacción.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM airplane_seat_configurations WHERE airplane_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM airplanes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn set_image(&self, id: Uuid, image_url: &str) -> Result<Airplane, AppError> {
        let airplane = sqlx::query_as::<_, Airplane>(
            "UPDATE airplanes SET image_url = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(airplane)
    }

    // ----------- AirplaneSeatConfiguration -----------

    pub async fn list_configurations_for(
        &self,
        airplane_id: Uuid,
    ) -> Result<Vec<AirplaneSeatConfiguration>, AppError> {
        let configs = sqlx::query_as::<_, AirplaneSeatConfiguration>(
            r#"
            SELECT * FROM airplane_seat_configurations
            WHERE airplane_id = $1
            ORDER BY seat_class, rows, seats_in_row
            "#,
        )
        .bind(airplane_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(configs)
    }

    /// Configuración de un avión para una clase concreta; None significa
    /// que el avión no tiene esa clase de asiento.
    pub async fn find_configuration(
        &self,
        airplane_id: Uuid,
        seat_class: SeatClass,
    ) -> Result<Option<AirplaneSeatConfiguration>, AppError> {
        let config = sqlx::query_as::<_, AirplaneSeatConfiguration>(
            "SELECT * FROM airplane_seat_configurations WHERE airplane_id = $1 AND seat_class = $2",
        )
        .bind(airplane_id)
        .bind(seat_class)
        .fetch_optional(&self.pool)
        .await?;

        Ok(config)
    }

    pub async fn list_configurations(&self) -> Result<Vec<AirplaneSeatConfiguration>, AppError> {
        let configs = sqlx::query_as::<_, AirplaneSeatConfiguration>(
            "SELECT * FROM airplane_seat_configurations ORDER BY seat_class, rows, seats_in_row",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(configs)
    }

    pub async fn find_configuration_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<AirplaneSeatConfiguration>, AppError> {
        let config = sqlx::query_as::<_, AirplaneSeatConfiguration>(
            "SELECT * FROM airplane_seat_configurations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(config)
    }

    pub async fn create_configuration(
        &self,
        airplane_id: Uuid,
        seat_class: SeatClass,
        rows: i32,
        seats_in_row: i32,
    ) -> Result<AirplaneSeatConfiguration, AppError> {
        let config = sqlx::query_as::<_, AirplaneSeatConfiguration>(
            r#"
            INSERT INTO airplane_seat_configurations
                (id, airplane_id, seat_class, rows, seats_in_row)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(airplane_id)
        .bind(seat_class)
        .bind(rows)
        .bind(seats_in_row)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, "seat_class", "Duplicate seat_class for this airplane.")
        })?;

        Ok(config)
    }

    pub async fn update_configuration(
        &self,
        id: Uuid,
        rows: Option<i32>,
        seats_in_row: Option<i32>,
    ) -> Result<AirplaneSeatConfiguration, AppError> {
        let current = self
            .find_configuration_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Seat configuration not found".to_string()))?;

        let config = sqlx::query_as::<_, AirplaneSeatConfiguration>(
            r#"
            UPDATE airplane_seat_configurations
            SET rows = $2, seats_in_row = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(rows.unwrap_or(current.rows))
        .bind(seats_in_row.unwrap_or(current.seats_in_row))
        .fetch_one(&self.pool)
        .await?;

        Ok(config)
    }

    pub async fn delete_configuration(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM airplane_seat_configurations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
