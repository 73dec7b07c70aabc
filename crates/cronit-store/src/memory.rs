//! In-memory job definition store.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use cronit_protocols::{JobDefinitionStore, JobId, RegisteredJobDefinition, StoreError};

/// In-memory store, for tests and single-process use.
pub struct MemoryJobDefinitionStore {
    jobs: RwLock<HashMap<JobId, RegisteredJobDefinition>>,
}

impl MemoryJobDefinitionStore {
    /// Create a new memory store.
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryJobDefinitionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobDefinitionStore for MemoryJobDefinitionStore {
    async fn find_by_id(&self, id: &JobId) -> Result<Option<RegisteredJobDefinition>, StoreError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.get(id).cloned())
    }

    async fn save(&self, job: &RegisteredJobDefinition) -> Result<(), StoreError> {
        let mut jobs = self.jobs.write().await;
        match jobs.entry(job.id().clone()) {
            Entry::Occupied(entry) => Err(StoreError::Conflict(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!(job.id = %job.id(), "Stored job definition in memory");
                entry.insert(job.clone());
                Ok(())
            }
        }
    }

    async fn find_by_tenant(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<RegisteredJobDefinition>, StoreError> {
        let jobs = self.jobs.read().await;
        let mut owned: Vec<_> = jobs
            .values()
            .filter(|job| job.tenant_id() == tenant_id)
            .cloned()
            .collect();
        owned.sort_by_key(|job| job.created_at());
        Ok(owned)
    }
}
