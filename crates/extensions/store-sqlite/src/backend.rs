//! SQLite job definition store implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{ErrorCode, OptionalExtension, Row, params};
use std::path::Path;
use tokio_rusqlite::Connection;
use tracing::debug;

use cronit_protocols::{
    JobDefinition, JobDefinitionStore, JobId, RegisteredJobDefinition, ScheduleInfo, StoreError,
};

use crate::schema::init_schema;

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;

const SELECT_COLUMNS: &str =
    "SELECT id, tenant_id, name, job_group, expression, description, created_at FROM job_definitions";

/// SQLite-based job definition store.
pub struct SqliteJobDefinitionStore {
    conn: Connection,
}

impl SqliteJobDefinitionStore {
    /// Create a new in-memory database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Self::with_connection(conn).await
    }

    /// Create a new file-backed database.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(path)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Self::with_connection(conn).await
    }

    async fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.call(|conn| Ok(init_schema(conn)?))
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(Self { conn })
    }
}

fn row_to_job(row: &Row<'_>) -> rusqlite::Result<RegisteredJobDefinition> {
    let id: String = row.get(0)?;
    let tenant_id: String = row.get(1)?;
    let name: String = row.get(2)?;
    let group: String = row.get(3)?;
    let expression: String = row.get(4)?;
    let description: Option<String> = row.get(5)?;
    let created_str: String = row.get(6)?;

    let created_at = DateTime::parse_from_rfc3339(&created_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
        })?;

    let mut definition = JobDefinition::new(name, group, ScheduleInfo::cron(expression));
    definition.description = description;

    Ok(RegisteredJobDefinition::restored(
        JobId::new(id),
        tenant_id,
        definition,
        created_at,
    ))
}

#[async_trait]
impl JobDefinitionStore for SqliteJobDefinitionStore {
    async fn find_by_id(&self, id: &JobId) -> Result<Option<RegisteredJobDefinition>, StoreError> {
        let id = id.to_string();
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;
                let job = stmt.query_row([&id], row_to_job).optional()?;
                Ok(job)
            })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn save(&self, job: &RegisteredJobDefinition) -> Result<(), StoreError> {
        let id = job.id().to_string();
        let tenant_id = job.tenant_id().to_string();
        let definition = job.definition().clone();
        let created_at = job.created_at().to_rfc3339();

        let inserted = self
            .conn
            .call(move |conn| {
                let result = conn.execute(
                    "INSERT INTO job_definitions (id, tenant_id, name, job_group, expression, description, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                    params![
                        id,
                        tenant_id,
                        definition.name,
                        definition.group,
                        definition.schedule_info.expression(),
                        definition.description,
                        created_at
                    ],
                );
                match result {
                    Ok(_) => Ok(true),
                    Err(rusqlite::Error::SqliteFailure(err, _))
                        if err.code == ErrorCode::ConstraintViolation =>
                    {
                        Ok(false)
                    }
                    Err(e) => Err(e.into()),
                }
            })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        if !inserted {
            return Err(StoreError::Conflict(job.id().clone()));
        }

        debug!(job.id = %job.id(), "Stored job definition in sqlite");
        Ok(())
    }

    async fn find_by_tenant(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<RegisteredJobDefinition>, StoreError> {
        let tenant_id = tenant_id.to_string();
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&format!(
                    "{SELECT_COLUMNS} WHERE tenant_id = ?1 ORDER BY created_at"
                ))?;
                let jobs = stmt
                    .query_map([&tenant_id], row_to_job)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(jobs)
            })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}
