//! Tenant context protocol.

use async_trait::async_trait;

use crate::error::TenantError;

/// Supplies the tenant (company) identifier of the calling principal.
#[async_trait]
pub trait TenantContextProvider: Send + Sync {
    /// Returns the current tenant id, or [`TenantError::Unauthenticated`]
    /// when there is no authenticated context.
    async fn current_tenant_id(&self) -> Result<String, TenantError>;
}
