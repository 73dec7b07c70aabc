//! Tenant context errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TenantError {
    #[error("No authenticated tenant context")]
    Unauthenticated,

    #[error("Tenant resolution failed: {0}")]
    Resolution(String),
}
