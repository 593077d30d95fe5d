//! SQLite-backed classroom service.

use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use super::{ClassroomService, ServiceError};
use crate::classroom::Classroom;
use crate::entities::classroom;
use crate::repositories::ClassroomRepository;
use crate::storage::LocalStorage;

/// [`ClassroomService`] over the local SQLite store.
#[derive(Clone)]
pub struct LocalClassroomService {
    storage: Arc<LocalStorage>,
}

impl LocalClassroomService {
    pub fn new(storage: Arc<LocalStorage>) -> Self {
        Self { storage }
    }

    fn to_classroom(model: classroom::Model) -> Result<Classroom, ServiceError> {
        let code = model.code.clone();
        Classroom::try_from(model).map_err(|e| ServiceError::InvalidData(format!("{} ({})", e, code)))
    }
}

#[async_trait]
impl ClassroomService for LocalClassroomService {
    async fn list(&self) -> Result<Vec<Classroom>, ServiceError> {
        let models = ClassroomRepository::get_all(&self.storage.conn).await?;
        models.into_iter().map(Self::to_classroom).collect()
    }

    async fn get_by_code(&self, code: &str) -> Result<Option<Classroom>, ServiceError> {
        ClassroomRepository::get_by_code(&self.storage.conn, code)
            .await?
            .map(Self::to_classroom)
            .transpose()
    }

    async fn create(&self, classroom: Classroom) -> Result<(), ServiceError> {
        if ClassroomRepository::get_by_code(&self.storage.conn, &classroom.code)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict(classroom.code));
        }

        ClassroomRepository::insert(&self.storage.conn, classroom::ActiveModel::from(&classroom)).await?;
        info!("Created classroom {}", classroom.code);
        Ok(())
    }

    async fn update(&self, classroom: Classroom) -> Result<(), ServiceError> {
        if ClassroomRepository::get_by_code(&self.storage.conn, &classroom.code)
            .await?
            .is_none()
        {
            return Err(ServiceError::NotFound(classroom.code));
        }

        ClassroomRepository::update(&self.storage.conn, classroom::ActiveModel::from(&classroom)).await?;
        info!("Updated classroom {}", classroom.code);
        Ok(())
    }

    async fn delete_by_code(&self, code: &str) -> Result<(), ServiceError> {
        let removed = ClassroomRepository::delete_by_code(&self.storage.conn, code).await?;
        if removed == 0 {
            warn!("Delete requested for unknown classroom {}", code);
        } else {
            info!("Deleted classroom {}", code);
        }
        Ok(())
    }
}
