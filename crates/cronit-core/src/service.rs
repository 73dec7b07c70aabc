//! Job registration orchestrator.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use cronit_protocols::{
    DigestFunction, JobDefinition, JobDefinitionStore, JobId, RegisteredJobDefinition,
    RegistrationError, StoreError, TenantContextProvider,
};

use crate::identity::IdentityDeriver;
use crate::schedule::{ScheduleValidator, ValidationResult};

/// Registers job definitions for the calling tenant.
///
/// The service keeps no state of its own and can be shared across tasks.
///
/// The lookup done before saving is best effort: two concurrent
/// registrations of the same (name, tenant) pair can both pass it. The store
/// rejects the second `save` with [`StoreError::Conflict`], which is reported
/// as the same [`RegistrationError::DuplicateJob`] as a lookup hit.
pub struct JobDefinitionService {
    store: Arc<dyn JobDefinitionStore>,
    tenants: Arc<dyn TenantContextProvider>,
    identity: IdentityDeriver,
    validator: ScheduleValidator,
}

impl JobDefinitionService {
    /// Create a new service.
    pub fn new(
        store: Arc<dyn JobDefinitionStore>,
        tenants: Arc<dyn TenantContextProvider>,
        digest: Arc<dyn DigestFunction>,
    ) -> Self {
        Self {
            store,
            tenants,
            identity: IdentityDeriver::new(digest),
            validator: ScheduleValidator::new(),
        }
    }

    /// Register a job definition.
    ///
    /// Fails with `DuplicateJob` when the derived identity is already stored
    /// and with `InvalidSchedule` when the expression does not validate.
    /// Nothing is persisted in either case.
    #[instrument(skip(self, job), fields(job.name = %job.name, job.group = %job.group))]
    pub async fn register(
        &self,
        job: JobDefinition,
    ) -> Result<RegisteredJobDefinition, RegistrationError> {
        let tenant_id = self.tenants.current_tenant_id().await?;
        let id = self.identity.derive(&job.name, &tenant_id);

        let existing = self
            .store
            .find_by_id(&id)
            .await
            .map_err(RegistrationError::Store)?;
        if existing.is_some() {
            warn!(job.id = %id, "Job already registered");
            return Err(RegistrationError::DuplicateJob { name: job.name });
        }

        if let ValidationResult::Invalid(reason) =
            self.validator.validate(job.schedule_info.expression())
        {
            warn!(
                expression = job.schedule_info.expression(),
                %reason,
                "Rejected schedule expression"
            );
            return Err(RegistrationError::InvalidSchedule {
                name: job.name,
                reason: reason.to_string(),
            });
        }

        let registered = RegisteredJobDefinition::new(id, tenant_id, job);
        match self.store.save(&registered).await {
            Ok(()) => {
                info!(job.id = %registered.id(), "Registered job definition");
                Ok(registered)
            }
            Err(StoreError::Conflict(id)) => {
                warn!(job.id = %id, "Job registered concurrently");
                Err(RegistrationError::DuplicateJob {
                    name: registered.into_definition().name,
                })
            }
            Err(e) => Err(RegistrationError::Store(e)),
        }
    }

    /// Identity `name` has, or would have, for the calling tenant.
    pub async fn identity_of(&self, name: &str) -> Result<JobId, RegistrationError> {
        let tenant_id = self.tenants.current_tenant_id().await?;
        Ok(self.identity.derive(name, &tenant_id))
    }

    /// Look up a job of the calling tenant by name.
    pub async fn find(
        &self,
        name: &str,
    ) -> Result<Option<RegisteredJobDefinition>, RegistrationError> {
        let id = self.identity_of(name).await?;
        debug!(job.name = name, job.id = %id, "Looking up job definition");
        self.store
            .find_by_id(&id)
            .await
            .map_err(RegistrationError::Store)
    }

    /// Job definitions registered by the calling tenant.
    pub async fn list(&self) -> Result<Vec<RegisteredJobDefinition>, RegistrationError> {
        let tenant_id = self.tenants.current_tenant_id().await?;
        debug!(tenant.id = %tenant_id, "Listing job definitions");
        self.store
            .find_by_tenant(&tenant_id)
            .await
            .map_err(RegistrationError::Store)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
