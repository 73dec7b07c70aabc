//! Job registration errors.
//!
//! Every variant carries an error code and positional arguments so the
//! transport layer can render a localized message (see [`super::render`]).

use thiserror::Error;

use super::{StoreError, TenantError};

/// Error code of [`RegistrationError::DuplicateJob`].
pub const JOB_ALREADY_EXISTS: &str = "job.already.exists";
/// Error code of [`RegistrationError::InvalidSchedule`].
pub const EXPRESSION_NOT_VALID: &str = "expression.not.valid";
/// Error code of [`RegistrationError::Tenant`] without an authenticated tenant.
pub const TENANT_CONTEXT_MISSING: &str = "tenant.context.missing";
/// Error code of [`RegistrationError::Tenant`] when resolution itself failed.
pub const TENANT_RESOLUTION_FAILED: &str = "tenant.resolution.failed";
/// Error code of [`RegistrationError::Store`].
pub const STORE_FAILURE: &str = "store.failure";

/// Whether a failure stems from caller input or from infrastructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Business,
    System,
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The derived identity is already registered for this tenant.
    #[error("Job '{name}' already exists")]
    DuplicateJob { name: String },

    /// The schedule expression failed validation.
    #[error("Schedule expression of job '{name}' is not valid: {reason}")]
    InvalidSchedule { name: String, reason: String },

    #[error("Tenant context error: {0}")]
    Tenant(#[from] TenantError),

    #[error("Store error: {0}")]
    Store(StoreError),
}

impl RegistrationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateJob { .. } => JOB_ALREADY_EXISTS,
            Self::InvalidSchedule { .. } => EXPRESSION_NOT_VALID,
            Self::Tenant(TenantError::Unauthenticated) => TENANT_CONTEXT_MISSING,
            Self::Tenant(TenantError::Resolution(_)) => TENANT_RESOLUTION_FAILED,
            Self::Store(_) => STORE_FAILURE,
        }
    }

    /// Positional formatting arguments; the job name comes first.
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::DuplicateJob { name } => vec![name.clone()],
            Self::InvalidSchedule { name, reason } => vec![name.clone(), reason.clone()],
            Self::Tenant(err) => vec![err.to_string()],
            Self::Store(err) => vec![err.to_string()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateJob { .. } => ErrorCategory::Business,
            // Reported as a system error, like the service this registry replaces.
            Self::InvalidSchedule { .. } => ErrorCategory::System,
            Self::Tenant(_) | Self::Store(_) => ErrorCategory::System,
        }
    }

    /// Whether the caller can fix the failure by changing its request.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DuplicateJob { .. } | Self::InvalidSchedule { .. })
    }
}
