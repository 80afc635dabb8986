use sqlx::PgPool;
use uuid::Uuid;

use crate::models::crew::CrewMemberPosition;
use crate::utils::errors::{map_unique_violation, AppError};

/// CrewMemberPosition con el total de tripulantes asociados
#[derive(Debug, sqlx::FromRow)]
pub struct CrewPositionWithCount {
    pub id: Uuid,
    pub name: String,
    pub crew_members_total: i64,
}

/// CrewMember con el nombre de su posición
#[derive(Debug, sqlx::FromRow)]
pub struct CrewMemberWithPosition {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub photo_url: Option<String>,
    pub position_id: Uuid,
    pub position_name: String,
}

pub struct CrewRepository {
    pool: PgPool,
}

impl CrewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ----------- CrewMemberPosition -----------

    pub async fn create_position(&self, name: &str) -> Result<CrewMemberPosition, AppError> {
        let position = sqlx::query_as::<_, CrewMemberPosition>(
            "INSERT INTO crew_member_positions (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "name", "Position with this name already exists."))?;

        Ok(position)
    }

    pub async fn find_position_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<CrewMemberPosition>, AppError> {
        let position = sqlx::query_as::<_, CrewMemberPosition>(
            "SELECT * FROM crew_member_positions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(position)
    }

    pub async fn list_positions(&self) -> Result<Vec<CrewPositionWithCount>, AppError> {
        let positions = sqlx::query_as::<_, CrewPositionWithCount>(
            r#"
            SELECT p.id, p.name, COUNT(c.id) AS crew_members_total
            FROM crew_member_positions p
            LEFT JOIN crew_members c ON c.position_id = p.id
            GROUP BY p.id, p.name
            ORDER BY p.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(positions)
    }

    pub async fn update_position(
        &self,
        id: Uuid,
        name: &str,
    ) -> Result<CrewMemberPosition, AppError> {
        let position = sqlx::query_as::<_, CrewMemberPosition>(
            "UPDATE crew_member_positions SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "name", "Position with this name already exists."))?;

        Ok(position)
    }

    pub async fn delete_position(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM crew_member_positions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn crew_member_ids_for_position(
        &self,
        position_id: Uuid,
    ) -> Result<Vec<Uuid>, AppError> {
        let ids: Vec<(Uuid,)> = sqlx::query_as(
            "SELECT id FROM crew_members WHERE position_id = $1 ORDER BY first_name, last_name",
        )
        .bind(position_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids.into_iter().map(|(id,)| id).collect())
    }

    // ----------- CrewMember -----------

    pub async fn create_member(
        &self,
        first_name: &str,
        last_name: &str,
        position_id: Uuid,
    ) -> Result<CrewMemberWithPosition, AppError> {
        let id: (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO crew_members (id, first_name, last_name, photo_url, position_id)
            VALUES ($1, $2, $3, NULL, $4)
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(first_name)
        .bind(last_name)
        .bind(position_id)
        .fetch_one(&self.pool)
        .await?;

        self.find_member_by_id(id.0)
            .await?
            .ok_or_else(|| AppError::Internal("crew member vanished after insert".to_string()))
    }

    pub async fn find_member_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<CrewMemberWithPosition>, AppError> {
        let member = sqlx::query_as::<_, CrewMemberWithPosition>(
            r#"
            SELECT c.id, c.first_name, c.last_name, c.photo_url, c.position_id,
                   p.name AS position_name
            FROM crew_members c
            JOIN crew_member_positions p ON p.id = c.position_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(member)
    }

    pub async fn list_members(&self) -> Result<Vec<CrewMemberWithPosition>, AppError> {
        let members = sqlx::query_as::<_, CrewMemberWithPosition>(
            r#"
            SELECT c.id, c.first_name, c.last_name, c.photo_url, c.position_id,
                   p.name AS position_name
            FROM crew_members c
            JOIN crew_member_positions p ON p.id = c.position_id
            ORDER BY c.first_name, c.last_name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    pub async fn update_member(
        &self,
        id: Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
        position_id: Option<Uuid>,
    ) -> Result<CrewMemberWithPosition, AppError> {
        let current = self
            .find_member_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Crew member not found".to_string()))?;

        sqlx::query(
            r#"
            UPDATE crew_members
            SET first_name = $2, last_name = $3, position_id = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(first_name.unwrap_or(&current.first_name))
        .bind(last_name.unwrap_or(&current.last_name))
        .bind(position_id.unwrap_or(current.position_id))
        .execute(&self.pool)
        .await?;

        self.find_member_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal("crew member vanished after update".to_string()))
    }

    pub async fn delete_member(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM crew_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn set_member_photo(
        &self,
        id: Uuid,
        photo_url: &str,
    ) -> Result<CrewMemberWithPosition, AppError> {
        sqlx::query("UPDATE crew_members SET photo_url = $2 WHERE id = $1")
            .bind(id)
            .bind(photo_url)
            .execute(&self.pool)
            .await?;

        self.find_member_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Crew member not found".to_string()))
    }
}
