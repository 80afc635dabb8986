use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::models::flight::Flight;
use crate::services::scheduling_service::ScheduledDeparture;
use crate::utils::errors::{map_unique_violation, AppError};

/// Flight con los datos de su ruta resueltos para las proyecciones
#[derive(Debug, sqlx::FromRow)]
pub struct FlightWithRoute {
    pub id: Uuid,
    pub route_id: Uuid,
    pub airplane_id: Uuid,
    pub base_price: Decimal,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub source_name: String,
    pub source_city: String,
    pub destination_name: String,
    pub destination_city: String,
    pub distance: i32,
}

impl FlightWithRoute {
    /// Representación legible de la ruta del vuelo
    pub fn route_display(&self) -> String {
        format!(
            "{}({}) -> {}({})",
            self.source_name, self.source_city, self.destination_name, self.destination_city
        )
    }
}

const FLIGHT_WITH_ROUTE_SELECT: &str = r#"
    SELECT f.id, f.route_id, f.airplane_id, f.base_price,
           f.departure_time, f.arrival_time,
           s.name AS source_name, s.closest_big_city AS source_city,
           d.name AS destination_name, d.closest_big_city AS destination_city,
           r.distance
    FROM flights f
    JOIN routes r ON r.id = f.route_id
    JOIN airports s ON s.id = r.source_id
    JOIN airports d ON d.id = r.destination_id
"#;

pub struct FlightRepository {
    pool: PgPool,
}

impl FlightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear el vuelo y su roster de tripulación en una sola transacción.
    pub async fn create(
        &self,
        route_id: Uuid,
        airplane_id: Uuid,
        base_price: Decimal,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
        crew_ids: &[Uuid],
    ) -> Result<Flight, AppError> {
        let mut tx = self.pool.begin().await?;

        let flight = sqlx::query_as::<_, Flight>(
            r#"
            INSERT INTO flights (id, route_id, airplane_id, base_price, departure_time, arrival_time)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(route_id)
        .bind(airplane_id)
        .bind(base_price)
        .bind(departure_time)
        .bind(arrival_time)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                "departure_time",
                "This airplane already has a flight at this departure time.",
            )
        })?;

        for crew_member_id in crew_ids {
            sqlx::query("INSERT INTO flight_crew (flight_id, crew_member_id) VALUES ($1, $2)")
                .bind(flight.id)
                .bind(crew_member_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    map_unique_violation(e, "crew_ids", "Duplicate crew member in roster.")
                })?;
        }

        tx.commit().await?;

        Ok(flight)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Flight>, AppError> {
        let flight = sqlx::query_as::<_, Flight>("SELECT * FROM flights WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(flight)
    }

    pub async fn find_with_route(&self, id: Uuid) -> Result<Option<FlightWithRoute>, AppError> {
        let query = format!("{} WHERE f.id = $1", FLIGHT_WITH_ROUTE_SELECT);

        let flight = sqlx::query_as::<_, FlightWithRoute>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(flight)
    }

    /// Listar vuelos aplicando los filtros opcionales. Cada filtro agrega
    /// su propia cláusula; los filtros ausentes no tocan la query.
    pub async fn list(
        &self,
        airplane_id: Option<Uuid>,
        route_id: Option<Uuid>,
        crew_ids: Option<&[Uuid]>,
        departure_bounds: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<FlightWithRoute>, AppError> {
        let mut builder = QueryBuilder::new(FLIGHT_WITH_ROUTE_SELECT);
        builder.push(" WHERE 1 = 1");

        if let Some(airplane_id) = airplane_id {
            builder.push(" AND f.airplane_id = ").push_bind(airplane_id);
        }

        if let Some(route_id) = route_id {
            builder.push(" AND f.route_id = ").push_bind(route_id);
        }

        if let Some(crew_ids) = crew_ids {
            builder
                .push(
                    " AND EXISTS (SELECT 1 FROM flight_crew fc \
                     WHERE fc.flight_id = f.id AND fc.crew_member_id = ANY(",
                )
                .push_bind(crew_ids.to_vec())
                .push("))");
        }

        if let Some((start, end)) = departure_bounds {
            builder.push(" AND f.departure_time >= ").push_bind(start);
            builder.push(" AND f.departure_time < ").push_bind(end);
        }

        builder.push(" ORDER BY f.departure_time");

        let flights = builder
            .build_query_as::<FlightWithRoute>()
            .fetch_all(&self.pool)
            .await?;

        Ok(flights)
    }

    /// Actualizar el vuelo; si llega un roster nuevo reemplaza al anterior
    /// dentro de la misma transacción.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        route_id: Option<Uuid>,
        airplane_id: Option<Uuid>,
        base_price: Option<Decimal>,
        departure_time: Option<DateTime<Utc>>,
        arrival_time: Option<DateTime<Utc>>,
        crew_ids: Option<&[Uuid]>,
    ) -> Result<Flight, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Flight not found".to_string()))?;

        let mut tx = self.pool.begin().await?;

        let flight = sqlx::query_as::<_, Flight>(
            r#"
            UPDATE flights
            SET route_id = $2, airplane_id = $3, base_price = $4,
                departure_time = $5, arrival_time = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(route_id.unwrap_or(current.route_id))
        .bind(airplane_id.unwrap_or(current.airplane_id))
        .bind(base_price.unwrap_or(current.base_price))
        .bind(departure_time.unwrap_or(current.departure_time))
        .bind(arrival_time.unwrap_or(current.arrival_time))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                "departure_time",
                "This airplane already has a flight at this departure time.",
            )
        })?;

        if let Some(crew_ids) = crew_ids {
            sqlx::query("DELETE FROM flight_crew WHERE flight_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            for crew_member_id in crew_ids {
                sqlx::query("INSERT INTO flight_crew (flight_id, crew_member_id) VALUES ($1, $2)")
                    .bind(id)
                    .bind(crew_member_id)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| {
                        map_unique_violation(e, "crew_ids", "Duplicate crew member in roster.")
                    })?;
            }
        }

        tx.commit().await?;

        Ok(flight)
    }

    /// Borrado explícito en cascada: tickets del vuelo primero, después el
    /// vuelo (flight_crew cae por ON DELETE CASCADE).
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM tickets WHERE flight_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM flights WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn crew_ids_for(&self, flight_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        let ids: Vec<(Uuid,)> =
            sqlx::query_as("SELECT crew_member_id FROM flight_crew WHERE flight_id = $1")
                .bind(flight_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(ids.into_iter().map(|(id,)| id).collect())
    }

    /// Salidas programadas de un avión, para el chequeo de conflictos.
    pub async fn departures_by_airplane(
        &self,
        airplane_id: Uuid,
    ) -> Result<Vec<ScheduledDeparture>, AppError> {
        let rows: Vec<(Uuid, DateTime<Utc>)> =
            sqlx::query_as("SELECT id, departure_time FROM flights WHERE airplane_id = $1")
                .bind(airplane_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(flight_id, departure_time)| ScheduledDeparture {
                flight_id,
                departure_time,
            })
            .collect())
    }

    /// Salidas programadas de cualquiera de los tripulantes dados.
    pub async fn departures_by_crew(
        &self,
        crew_ids: &[Uuid],
    ) -> Result<Vec<ScheduledDeparture>, AppError> {
        let rows: Vec<(Uuid, DateTime<Utc>)> = sqlx::query_as(
            r#"
            SELECT DISTINCT f.id, f.departure_time
            FROM flights f
            JOIN flight_crew fc ON fc.flight_id = f.id
            WHERE fc.crew_member_id = ANY($1)
            "#,
        )
        .bind(crew_ids.to_vec())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(flight_id, departure_time)| ScheduledDeparture {
                flight_id,
                departure_time,
            })
            .collect())
    }

    /// Verificar que todos los ids de tripulantes existan; devuelve los
    /// que no se encontraron.
    pub async fn missing_crew_ids(&self, crew_ids: &[Uuid]) -> Result<Vec<Uuid>, AppError> {
        let found: Vec<(Uuid,)> =
            sqlx::query_as("SELECT id FROM crew_members WHERE id = ANY($1)")
                .bind(crew_ids.to_vec())
                .fetch_all(&self.pool)
                .await?;

        let found: Vec<Uuid> = found.into_iter().map(|(id,)| id).collect();

        Ok(crew_ids
            .iter()
            .copied()
            .filter(|id| !found.contains(id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_display_format() {
        let flight = FlightWithRoute {
            id: Uuid::new_v4(),
            route_id: Uuid::new_v4(),
            airplane_id: Uuid::new_v4(),
            base_price: Decimal::new(10, 2),
            departure_time: Utc::now(),
            arrival_time: Utc::now(),
            source_name: "JFK".to_string(),
            source_city: "New York".to_string(),
            destination_name: "LAX".to_string(),
            destination_city: "Los Angeles".to_string(),
            distance: 3983,
        };

        assert_eq!(
            flight.route_display(),
            "JFK(New York) -> LAX(Los Angeles)"
        );
    }
}
