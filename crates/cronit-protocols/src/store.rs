//! Job definition store protocol.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::job::{JobId, RegisteredJobDefinition};

/// Persistence of registered job definitions, keyed by [`JobId`].
///
/// `save` is insert-only: an implementation must refuse to overwrite an
/// existing identity and report it as [`StoreError::Conflict`]. This is the
/// authoritative uniqueness check; lookups done before saving are only a
/// fast path.
#[async_trait]
pub trait JobDefinitionStore: Send + Sync {
    /// Look up a definition by identity.
    async fn find_by_id(&self, id: &JobId) -> Result<Option<RegisteredJobDefinition>, StoreError>;

    /// Persist a new definition.
    async fn save(&self, job: &RegisteredJobDefinition) -> Result<(), StoreError>;

    /// Load the definitions registered by `tenant_id`, oldest first.
    async fn find_by_tenant(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<RegisteredJobDefinition>, StoreError>;
}
