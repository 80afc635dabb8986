use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::airplane::SeatClass;
use crate::models::order::Ticket;
use crate::services::seating_service::SeatAssignment;
use crate::utils::errors::{map_unique_violation, AppError};

/// Ticket con todo el contexto que las proyecciones necesitan: dueño,
/// ruta y los insumos del cálculo de precio (base_price y distance).
#[derive(Debug, sqlx::FromRow)]
pub struct TicketWithContext {
    pub id: Uuid,
    pub row: i32,
    pub seat: i32,
    pub seat_class: SeatClass,
    pub flight_id: Uuid,
    pub order_id: Uuid,
    pub owner_id: Uuid,
    pub owner_email: String,
    pub base_price: Decimal,
    pub distance: i32,
    pub source_name: String,
    pub source_city: String,
    pub destination_name: String,
    pub destination_city: String,
}

impl TicketWithContext {
    pub fn route_display(&self) -> String {
        format!(
            "{}({}) -> {}({})",
            self.source_name, self.source_city, self.destination_name, self.destination_city
        )
    }
}

const TICKET_WITH_CONTEXT_SELECT: &str = r#"
    SELECT t.id, t."row", t.seat, t.seat_class, t.flight_id, t.order_id,
           o.user_id AS owner_id, u.email AS owner_email,
           f.base_price, r.distance,
           s.name AS source_name, s.closest_big_city AS source_city,
           d.name AS destination_name, d.closest_big_city AS destination_city
    FROM tickets t
    JOIN orders o ON o.id = t.order_id
    JOIN users u ON u.id = o.user_id
    JOIN flights f ON f.id = t.flight_id
    JOIN routes r ON r.id = f.route_id
    JOIN airports s ON s.id = r.source_id
    JOIN airports d ON d.id = r.destination_id
"#;

pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        row: i32,
        seat: i32,
        seat_class: SeatClass,
        flight_id: Uuid,
        order_id: Uuid,
    ) -> Result<Ticket, AppError> {
        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (id, "row", seat, seat_class, flight_id, order_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(row)
        .bind(seat)
        .bind(seat_class)
        .bind(flight_id)
        .bind(order_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "seat", "This seat is already taken."))?;

        Ok(ticket)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, AppError> {
        let ticket = sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(ticket)
    }

    pub async fn find_with_context(&self, id: Uuid) -> Result<Option<TicketWithContext>, AppError> {
        let query = format!("{} WHERE t.id = $1", TICKET_WITH_CONTEXT_SELECT);

        let ticket = sqlx::query_as::<_, TicketWithContext>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(ticket)
    }

    /// Listar tickets; `owner` restringe a las órdenes de ese usuario
    /// (None lista todo, reservado al staff).
    pub async fn list(&self, owner: Option<Uuid>) -> Result<Vec<TicketWithContext>, AppError> {
        let query = format!(
            "{} WHERE ($1::uuid IS NULL OR o.user_id = $1) ORDER BY t.id",
            TICKET_WITH_CONTEXT_SELECT
        );

        let tickets = sqlx::query_as::<_, TicketWithContext>(&query)
            .bind(owner)
            .fetch_all(&self.pool)
            .await?;

        Ok(tickets)
    }

    /// Asientos ya reservados de un vuelo, insumo del escaneo de colisiones.
    pub async fn list_seats_for_flight(
        &self,
        flight_id: Uuid,
    ) -> Result<Vec<SeatAssignment>, AppError> {
        let rows: Vec<(Uuid, i32, i32, SeatClass)> = sqlx::query_as(
            r#"SELECT id, "row", seat, seat_class FROM tickets WHERE flight_id = $1"#,
        )
        .bind(flight_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(ticket_id, row, seat, seat_class)| SeatAssignment {
                ticket_id,
                row,
                seat,
                seat_class,
            })
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        row: Option<i32>,
        seat: Option<i32>,
        seat_class: Option<SeatClass>,
        flight_id: Option<Uuid>,
    ) -> Result<Ticket, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            UPDATE tickets
            SET "row" = $2, seat = $3, seat_class = $4, flight_id = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(row.unwrap_or(current.row))
        .bind(seat.unwrap_or(current.seat))
        .bind(seat_class.unwrap_or(current.seat_class))
        .bind(flight_id.unwrap_or(current.flight_id))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "seat", "This seat is already taken."))?;

        Ok(ticket)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
