//! File system based job definition store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use cronit_protocols::{JobDefinitionStore, JobId, RegisteredJobDefinition, StoreError};

static STAGING_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Stores each definition as `<root>/jobs/<id>.json`.
///
/// A definition is written to a staging file first and then hard-linked to
/// its final name. The link fails when the name is taken, so two writers
/// racing on the same identity cannot both succeed, and readers only ever
/// see complete files.
pub struct FileJobDefinitionStore {
    storage_path: PathBuf,
}

impl FileJobDefinitionStore {
    /// Create a new file-based store rooted at `storage_path`.
    pub async fn new(storage_path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let storage_path = storage_path.into();
        let jobs_dir = storage_path.join("jobs");

        fs::create_dir_all(&jobs_dir).await.map_err(|e| {
            StoreError::Backend(format!("Failed to create jobs directory: {}", e))
        })?;

        debug!("FileJobDefinitionStore initialized at {:?}", storage_path);

        Ok(Self { storage_path })
    }

    fn jobs_dir(&self) -> PathBuf {
        self.storage_path.join("jobs")
    }

    fn job_path(&self, id: &JobId) -> PathBuf {
        self.jobs_dir()
            .join(format!("{}.json", Self::sanitize_id(id.as_str())))
    }

    /// Unique scratch file next to the final location, so the link stays on
    /// one file system. The `.tmp` extension keeps it out of listings.
    fn staging_path(&self, id: &JobId) -> PathBuf {
        let sequence = STAGING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        self.jobs_dir().join(format!(
            ".{}.{}.{}.tmp",
            Self::sanitize_id(id.as_str()),
            std::process::id(),
            sequence
        ))
    }

    async fn write_staged(path: &Path, content: &[u8]) -> std::io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await?;
        file.write_all(content).await?;
        file.sync_all().await
    }

    async fn discard(path: &Path) {
        if let Err(e) = fs::remove_file(path).await {
            if e.kind() != ErrorKind::NotFound {
                warn!("Failed to remove staging file {:?}: {}", path, e);
            }
        }
    }

    fn sanitize_id(id: &str) -> String {
        id.chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}

#[async_trait]
impl JobDefinitionStore for FileJobDefinitionStore {
    async fn find_by_id(&self, id: &JobId) -> Result<Option<RegisteredJobDefinition>, StoreError> {
        let path = self.job_path(id);

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Backend(format!(
                    "Failed to read job file: {}",
                    e
                )));
            }
        };

        let job: RegisteredJobDefinition = serde_json::from_str(&content)?;
        Ok(Some(job))
    }

    async fn save(&self, job: &RegisteredJobDefinition) -> Result<(), StoreError> {
        let path = self.job_path(job.id());
        let staging = self.staging_path(job.id());
        let content = serde_json::to_string_pretty(job)?;

        if let Err(e) = Self::write_staged(&staging, content.as_bytes()).await {
            Self::discard(&staging).await;
            return Err(StoreError::Backend(format!(
                "Failed to write job file: {}",
                e
            )));
        }

        // Linking fails if the target exists and never exposes a partial file.
        let linked = fs::hard_link(&staging, &path).await;
        Self::discard(&staging).await;

        match linked {
            Ok(()) => {
                debug!("Saved job '{}' to {:?}", job.id(), path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(StoreError::Conflict(job.id().clone()))
            }
            Err(e) => Err(StoreError::Backend(format!(
                "Failed to publish job file: {}",
                e
            ))),
        }
    }

    async fn find_by_tenant(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<RegisteredJobDefinition>, StoreError> {
        let jobs_dir = self.jobs_dir();

        let mut jobs = Vec::new();
        let mut entries = fs::read_dir(&jobs_dir).await.map_err(|e| {
            StoreError::Backend(format!("Failed to read jobs directory: {}", e))
        })?;

        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            StoreError::Backend(format!("Failed to read directory entry: {}", e))
        })? {
            let path = entry.path();

            if path.extension().is_some_and(|ext| ext == "json") {
                match fs::read_to_string(&path).await {
                    Ok(content) => match serde_json::from_str::<RegisteredJobDefinition>(&content) {
                        Ok(job) if job.tenant_id() == tenant_id => jobs.push(job),
                        Ok(_) => {}
                        Err(e) => {
                            warn!("Failed to deserialize job from {:?}: {}", path, e);
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read job file {:?}: {}", path, e);
                    }
                }
            }
        }

        jobs.sort_by_key(|job| job.created_at());
        debug!("Loaded {} jobs of tenant {} from {:?}", jobs.len(), tenant_id, jobs_dir);
        Ok(jobs)
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
