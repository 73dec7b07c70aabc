//! Tenant context providers.

use async_trait::async_trait;

use cronit_protocols::{TenantContextProvider, TenantError};

/// Tenant provider bound to a fixed tenant, e.g. one resolved once by the
/// transport layer or taken from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticTenantProvider {
    tenant_id: Option<String>,
}

impl StaticTenantProvider {
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: Some(tenant_id.into()),
        }
    }

    /// A provider with no authenticated context.
    pub fn unauthenticated() -> Self {
        Self { tenant_id: None }
    }
}

#[async_trait]
impl TenantContextProvider for StaticTenantProvider {
    async fn current_tenant_id(&self) -> Result<String, TenantError> {
        match self.tenant_id.as_deref() {
            Some(id) if !id.trim().is_empty() => Ok(id.to_string()),
            _ => Err(TenantError::Unauthenticated),
        }
    }
}
