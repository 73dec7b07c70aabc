//! Tenant-scoped job identity derivation.

use std::sync::Arc;

use cronit_protocols::{DigestFunction, JobId};

use crate::digest::Sha256Digest;

/// Derives job identities as `digest(name, tenant_id)`.
///
/// Identities need no central allocator: the same (name, tenant) pair always
/// maps to the same id, and the tenant id keeps equal names in different
/// tenants apart.
#[derive(Clone)]
pub struct IdentityDeriver {
    digest: Arc<dyn DigestFunction>,
}

impl IdentityDeriver {
    pub fn new(digest: Arc<dyn DigestFunction>) -> Self {
        Self { digest }
    }

    pub fn algorithm(&self) -> &'static str {
        self.digest.algorithm()
    }

    /// Derive the identity of job `name` owned by `tenant_id`.
    pub fn derive(&self, name: &str, tenant_id: &str) -> JobId {
        JobId::new(self.digest.digest(&[name, tenant_id]))
    }
}

impl Default for IdentityDeriver {
    fn default() -> Self {
        Self::new(Arc::new(Sha256Digest))
    }
}

impl std::fmt::Debug for IdentityDeriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityDeriver")
            .field("algorithm", &self.digest.algorithm())
            .finish()
    }
}
