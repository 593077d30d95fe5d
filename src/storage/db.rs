use anyhow::{Context, Result};
use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema, TransactionTrait};
use std::path::Path;

use crate::classroom::Classroom;
use crate::config::StorageConfig;
use crate::entities::classroom;
use crate::repositories::ClassroomRepository;

/// Local storage manager for classroom data
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open the database described by the storage configuration
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        if config.in_memory {
            return Self::in_memory().await;
        }

        let path = config.resolve_database_path()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
            }
        }

        let database_url = format!("sqlite://{}?mode=rwc", path.display());
        Self::connect(&database_url).await
    }

    /// Open a private in-memory database
    pub async fn in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:").await
    }

    async fn connect(database_url: &str) -> Result<Self> {
        let mut options = ConnectOptions::new(database_url.to_string());
        // A single long-lived connection: an in-memory SQLite database only
        // exists for the connection that created it.
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to open database: {}", database_url))?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut create_classrooms = schema.create_table_from_entity(classroom::Entity);
        create_classrooms.if_not_exists();
        self.conn.execute(backend.build(&create_classrooms)).await?;

        Ok(())
    }

    /// Check if the database has any data
    pub async fn has_data(&self) -> Result<bool> {
        Ok(ClassroomRepository::count(&self.conn).await? > 0)
    }

    /// Clear all data from the database
    pub async fn clear_all_data(&self) -> Result<()> {
        ClassroomRepository::delete_all(&self.conn).await?;
        Ok(())
    }

    /// Insert records in a single transaction. Any failure rolls back the batch.
    pub async fn import(&self, classrooms: &[Classroom]) -> Result<usize> {
        let txn = self.conn.begin().await?;
        for classroom in classrooms {
            ClassroomRepository::insert(&txn, classroom::ActiveModel::from(classroom))
                .await
                .with_context(|| format!("Failed to import classroom {}", classroom.code))?;
        }
        txn.commit().await?;
        Ok(classrooms.len())
    }

    /// Import a JSON array of classrooms when the database is still empty.
    ///
    /// Returns the number of imported records (0 when data already exists).
    pub async fn seed_from_file<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        if self.has_data().await? {
            return Ok(0);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read seed file: {}", path.as_ref().display()))?;
        let classrooms: Vec<Classroom> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse seed file: {}", path.as_ref().display()))?;

        let count = self.import(&classrooms).await?;
        info!("Seeded {} classrooms from {}", count, path.as_ref().display());
        Ok(count)
    }
}
