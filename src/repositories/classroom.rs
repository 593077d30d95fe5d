//! Classroom repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder};

use crate::entities::classroom;

/// Repository for classroom-related database operations.
pub struct ClassroomRepository;

impl ClassroomRepository {
    /// Get all classrooms ordered by code.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<classroom::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(classroom::Entity::find()
            .order_by_asc(classroom::Column::Code)
            .all(conn)
            .await?)
    }

    /// Get a single classroom by code.
    pub async fn get_by_code<C>(conn: &C, code: &str) -> Result<Option<classroom::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(classroom::Entity::find_by_id(code.to_string()).one(conn).await?)
    }

    /// Count stored classrooms.
    pub async fn count<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(classroom::Entity::find().count(conn).await?)
    }

    /// Insert a new classroom.
    pub async fn insert<C>(conn: &C, classroom: classroom::ActiveModel) -> Result<()>
    where
        C: ConnectionTrait,
    {
        classroom::Entity::insert(classroom).exec(conn).await?;
        Ok(())
    }

    /// Update a classroom in the database.
    pub async fn update<C>(conn: &C, classroom: classroom::ActiveModel) -> Result<classroom::Model>
    where
        C: ConnectionTrait,
    {
        Ok(classroom.update(conn).await?)
    }

    /// Delete a classroom by code, returning the number of removed rows.
    pub async fn delete_by_code<C>(conn: &C, code: &str) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = classroom::Entity::delete_by_id(code.to_string()).exec(conn).await?;
        Ok(result.rows_affected)
    }

    /// Delete every classroom.
    pub async fn delete_all<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = classroom::Entity::delete_many().exec(conn).await?;
        Ok(result.rows_affected)
    }
}
