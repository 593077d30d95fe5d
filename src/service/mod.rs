//! Data-access layer for classroom records.
//!
//! The listing screen only talks to a [`ClassroomService`]. It never owns the
//! authoritative data: every mutation goes through the service and is followed
//! by a fresh [`ClassroomService::list`].

use async_trait::async_trait;

use crate::classroom::Classroom;

pub mod local;

pub use local::LocalClassroomService;

/// Common error types for service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Classroom not found: {0}")]
    NotFound(String),

    #[error("Classroom already exists: {0}")]
    Conflict(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        ServiceError::Storage(format!("{:#}", err))
    }
}

/// Service trait that every classroom data source implements.
#[async_trait]
pub trait ClassroomService: Send + Sync {
    /// All classrooms, ordered by code.
    async fn list(&self) -> Result<Vec<Classroom>, ServiceError>;

    async fn get_by_code(&self, code: &str) -> Result<Option<Classroom>, ServiceError>;

    async fn create(&self, classroom: Classroom) -> Result<(), ServiceError>;

    async fn update(&self, classroom: Classroom) -> Result<(), ServiceError>;

    /// Remove a classroom. Deleting an unknown code is not an error.
    async fn delete_by_code(&self, code: &str) -> Result<(), ServiceError>;
}
