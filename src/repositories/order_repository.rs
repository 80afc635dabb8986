use chrono::{DateTime, Utc};
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::order_dto::TicketPayload;
use crate::models::order::Order;
use crate::repositories::ticket_repository::TicketWithContext;
use crate::utils::errors::{map_unique_violation, AppError};

/// Order con el email de su dueño resuelto
#[derive(Debug, sqlx::FromRow)]
pub struct OrderWithEmail {
    pub id: Uuid,
    pub user_id: Uuid,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
    pub email: String,
}

pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear la orden con todos sus tickets en una sola transacción: si
    /// algún asiento choca con la constraint de unicidad, nada persiste.
    pub async fn create_with_tickets(
        &self,
        user_id: Uuid,
        tickets: &[TicketPayload],
    ) -> Result<Order, AppError> {
        let mut tx = self.pool.begin().await?;

        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (id, user_id, is_paid, created_at)
            VALUES ($1, $2, FALSE, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        for ticket in tickets {
            sqlx::query(
                r#"
                INSERT INTO tickets (id, "row", seat, seat_class, flight_id, order_id)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(ticket.row)
            .bind(ticket.seat)
            .bind(ticket.seat_class)
            .bind(ticket.flight_id)
            .bind(order.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_unique_violation(e, "seat", "This seat is already taken."))?;
        }

        tx.commit().await?;

        Ok(order)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, AppError> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(order)
    }

    pub async fn find_with_email(&self, id: Uuid) -> Result<Option<OrderWithEmail>, AppError> {
        let order = sqlx::query_as::<_, OrderWithEmail>(
            r#"
            SELECT o.id, o.user_id, o.is_paid, o.created_at, u.email
            FROM orders o
            JOIN users u ON u.id = o.user_id
            WHERE o.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Listar órdenes; `owner` restringe a las del usuario (None lista
    /// todo, reservado al staff) y `created_bounds` filtra por día de
    /// creación como intervalo semiabierto.
    pub async fn list(
        &self,
        owner: Option<Uuid>,
        created_bounds: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<OrderWithEmail>, AppError> {
        let mut builder = QueryBuilder::new(
            "SELECT o.id, o.user_id, o.is_paid, o.created_at, u.email \
             FROM orders o JOIN users u ON u.id = o.user_id WHERE 1 = 1",
        );

        if let Some(owner) = owner {
            builder.push(" AND o.user_id = ").push_bind(owner);
        }

        if let Some((start, end)) = created_bounds {
            builder.push(" AND o.created_at >= ").push_bind(start);
            builder.push(" AND o.created_at < ").push_bind(end);
        }

        builder.push(" ORDER BY o.created_at DESC");

        let orders = builder
            .build_query_as::<OrderWithEmail>()
            .fetch_all(&self.pool)
            .await?;

        Ok(orders)
    }

    /// Tickets de una orden con su contexto de precio y ruta
    pub async fn tickets_for_order(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<TicketWithContext>, AppError> {
        let tickets = sqlx::query_as::<_, TicketWithContext>(
            r#"
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
            WHERE t.order_id = $1
            ORDER BY t.id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tickets)
    }

    pub async fn set_paid(&self, id: Uuid, is_paid: bool) -> Result<Order, AppError> {
        let order = sqlx::query_as::<_, Order>(
            "UPDATE orders SET is_paid = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(is_paid)
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    /// Borrado explícito en cascada: tickets primero, después la orden.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM tickets WHERE order_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
