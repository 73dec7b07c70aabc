//! Tests for the registration orchestrator.

use super::*;
use async_trait::async_trait;
use cronit_protocols::{DEFAULT_GROUP, ErrorCategory, ScheduleInfo, TenantError};
use cronit_store::MemoryJobDefinitionStore;
use mockall::mock;

use crate::digest::Sha256Digest;
use crate::tenant::StaticTenantProvider;

mock! {
    pub Store {}

    #[async_trait]
    impl JobDefinitionStore for Store {
        async fn find_by_id(&self, id: &JobId) -> Result<Option<RegisteredJobDefinition>, StoreError>;
        async fn save(&self, job: &RegisteredJobDefinition) -> Result<(), StoreError>;
        async fn find_by_tenant(&self, tenant_id: &str) -> Result<Vec<RegisteredJobDefinition>, StoreError>;
    }
}

mock! {
    pub Tenants {}

    #[async_trait]
    impl TenantContextProvider for Tenants {
        async fn current_tenant_id(&self) -> Result<String, TenantError>;
    }
}

const COMPANY_ID: &str = "5f0c1a52-company";

fn job(expression: &str) -> JobDefinition {
    JobDefinition::new("JobName", DEFAULT_GROUP, ScheduleInfo::cron(expression))
}

fn company_tenants() -> MockTenants {
    let mut tenants = MockTenants::new();
    tenants
        .expect_current_tenant_id()
        .returning(|| Ok(COMPANY_ID.to_string()));
    tenants
}

fn hashed_id() -> JobId {
    IdentityDeriver::default().derive("JobName", COMPANY_ID)
}

fn service(store: MockStore, tenants: MockTenants) -> JobDefinitionService {
    JobDefinitionService::new(Arc::new(store), Arc::new(tenants), Arc::new(Sha256Digest))
}

#[tokio::test]
async fn test_rejects_job_with_same_name_already_defined() {
    let mut store = MockStore::new();
    let expected_id = hashed_id();
    store
        .expect_find_by_id()
        .withf(move |id| *id == expected_id)
        .times(1)
        .returning(|id| {
            Ok(Some(RegisteredJobDefinition::new(
                id.clone(),
                COMPANY_ID,
                job("* * * * *"),
            )))
        });
    store.expect_save().never();

    let err = service(store, company_tenants())
        .register(job("* * * * *"))
        .await
        .unwrap_err();

    assert!(matches!(err, RegistrationError::DuplicateJob { .. }));
    assert_eq!(err.code(), "job.already.exists");
    assert_eq!(err.args()[0], "JobName");
    assert_eq!(err.category(), ErrorCategory::Business);
}

#[tokio::test]
async fn test_rejects_invalid_cron_expression() {
    let mut store = MockStore::new();
    store.expect_find_by_id().times(1).returning(|_| Ok(None));
    store.expect_save().never();

    let err = service(store, company_tenants())
        .register(job("not valid expression"))
        .await
        .unwrap_err();

    assert!(matches!(err, RegistrationError::InvalidSchedule { .. }));
    assert_eq!(err.code(), "expression.not.valid");
    assert_eq!(err.args()[0], "JobName");
    assert_eq!(err.category(), ErrorCategory::System);
}

#[tokio::test]
async fn test_saves_job_not_defined_before() {
    let mut store = MockStore::new();
    let expected_id = hashed_id();
    let lookup_id = expected_id.clone();
    store
        .expect_find_by_id()
        .withf(move |id| *id == lookup_id)
        .times(1)
        .returning(|_| Ok(None));
    let saved_id = expected_id.clone();
    store
        .expect_save()
        .withf(move |job| {
            *job.id() == saved_id && job.name() == "JobName" && job.tenant_id() == COMPANY_ID
        })
        .times(1)
        .returning(|_| Ok(()));

    let registered = service(store, company_tenants())
        .register(job("* * * * *"))
        .await
        .unwrap();

    assert_eq!(registered.id(), &expected_id);
    assert_eq!(registered.tenant_id(), COMPANY_ID);
    assert_eq!(registered.definition().group, DEFAULT_GROUP);
    assert_eq!(registered.definition().schedule_info.expression(), "* * * * *");
}

#[tokio::test]
async fn test_duplicate_check_runs_before_validation() {
    let mut store = MockStore::new();
    store.expect_find_by_id().times(1).returning(|id| {
        Ok(Some(RegisteredJobDefinition::new(
            id.clone(),
            COMPANY_ID,
            job("* * * * *"),
        )))
    });
    store.expect_save().never();

    let err = service(store, company_tenants())
        .register(job("not valid expression"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "job.already.exists");
}

#[tokio::test]
async fn test_store_conflict_reported_as_duplicate() {
    let mut store = MockStore::new();
    store.expect_find_by_id().returning(|_| Ok(None));
    store
        .expect_save()
        .times(1)
        .returning(|job| Err(StoreError::Conflict(job.id().clone())));

    let err = service(store, company_tenants())
        .register(job("* * * * *"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "job.already.exists");
    assert_eq!(err.args(), vec!["JobName".to_string()]);
}

#[tokio::test]
async fn test_store_failure_is_propagated() {
    let mut store = MockStore::new();
    store.expect_find_by_id().returning(|_| Ok(None));
    store
        .expect_save()
        .times(1)
        .returning(|_| Err(StoreError::Backend("disk full".to_string())));

    let err = service(store, company_tenants())
        .register(job("* * * * *"))
        .await
        .unwrap_err();

    assert!(matches!(err, RegistrationError::Store(StoreError::Backend(_))));
    assert!(!err.is_recoverable());
}

#[tokio::test]
async fn test_lookup_failure_is_propagated() {
    let mut store = MockStore::new();
    store
        .expect_find_by_id()
        .returning(|_| Err(StoreError::Backend("connection reset".to_string())));
    store.expect_save().never();

    let err = service(store, company_tenants())
        .register(job("* * * * *"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "store.failure");
}

#[tokio::test]
async fn test_missing_tenant_touches_no_store() {
    let mut store = MockStore::new();
    store.expect_find_by_id().never();
    store.expect_save().never();
    let mut tenants = MockTenants::new();
    tenants
        .expect_current_tenant_id()
        .returning(|| Err(TenantError::Unauthenticated));

    let err = service(store, tenants)
        .register(job("* * * * *"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RegistrationError::Tenant(TenantError::Unauthenticated)
    ));
}

fn memory_service(tenant: &str, store: Arc<dyn JobDefinitionStore>) -> JobDefinitionService {
    JobDefinitionService::new(
        store,
        Arc::new(StaticTenantProvider::new(tenant)),
        Arc::new(Sha256Digest),
    )
}

#[tokio::test]
async fn test_same_name_in_other_tenant_is_not_duplicate() {
    let store: Arc<dyn JobDefinitionStore> = Arc::new(MemoryJobDefinitionStore::new());
    let tenant_a = memory_service("tenant-a", store.clone());
    let tenant_b = memory_service("tenant-b", store.clone());

    let a = tenant_a.register(job("* * * * *")).await.unwrap();
    let b = tenant_b.register(job("* * * * *")).await.unwrap();
    assert_ne!(a.id(), b.id());

    let err = tenant_a.register(job("0 0 * * *")).await.unwrap_err();
    assert_eq!(err.code(), "job.already.exists");

    assert_eq!(tenant_a.list().await.unwrap(), vec![a]);
    assert_eq!(tenant_b.list().await.unwrap(), vec![b]);
}

#[tokio::test]
async fn test_list_hides_other_tenants_jobs() {
    let store: Arc<dyn JobDefinitionStore> = Arc::new(MemoryJobDefinitionStore::new());
    let tenant_a = memory_service("tenant-a", store.clone());
    let tenant_b = memory_service("tenant-b", store.clone());

    tenant_b
        .register(JobDefinition::new(
            "secret-b",
            DEFAULT_GROUP,
            ScheduleInfo::cron("0 3 * * *"),
        ))
        .await
        .unwrap();

    assert!(tenant_a.list().await.unwrap().is_empty());
    let names: Vec<_> = tenant_b
        .list()
        .await
        .unwrap()
        .iter()
        .map(|job| job.name().to_string())
        .collect();
    assert_eq!(names, vec!["secret-b".to_string()]);
}

#[tokio::test]
async fn test_list_requires_tenant() {
    let mut store = MockStore::new();
    store.expect_find_by_tenant().never();
    let mut tenants = MockTenants::new();
    tenants
        .expect_current_tenant_id()
        .returning(|| Err(TenantError::Unauthenticated));

    let err = service(store, tenants).list().await.unwrap_err();
    assert_eq!(err.code(), "tenant.context.missing");
}

#[tokio::test]
async fn test_list_queries_calling_tenant() {
    let mut store = MockStore::new();
    store
        .expect_find_by_tenant()
        .withf(|tenant_id| tenant_id == COMPANY_ID)
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let jobs = service(store, company_tenants()).list().await.unwrap();
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn test_find_by_name() {
    let store: Arc<dyn JobDefinitionStore> = Arc::new(MemoryJobDefinitionStore::new());
    let service = memory_service("tenant-a", store.clone());

    assert!(service.find("JobName").await.unwrap().is_none());
    let registered = service.register(job("*/5 * * * *")).await.unwrap();

    let found = service.find("JobName").await.unwrap().unwrap();
    assert_eq!(found.id(), registered.id());
    assert_eq!(service.identity_of("JobName").await.unwrap(), *registered.id());

    let other_tenant = memory_service("tenant-b", store);
    assert!(other_tenant.find("JobName").await.unwrap().is_none());
}

/// Store whose lookup never sees existing definitions, so every caller
/// reaches `save` as in a check-then-act race.
struct BlindLookupStore {
    inner: MemoryJobDefinitionStore,
}

#[async_trait]
impl JobDefinitionStore for BlindLookupStore {
    async fn find_by_id(
        &self,
        _id: &JobId,
    ) -> Result<Option<RegisteredJobDefinition>, StoreError> {
        Ok(None)
    }

    async fn save(&self, job: &RegisteredJobDefinition) -> Result<(), StoreError> {
        self.inner.save(job).await
    }

    async fn find_by_tenant(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<RegisteredJobDefinition>, StoreError> {
        self.inner.find_by_tenant(tenant_id).await
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_store_once() {
    let store: Arc<dyn JobDefinitionStore> = Arc::new(BlindLookupStore {
        inner: MemoryJobDefinitionStore::new(),
    });
    let service = Arc::new(memory_service("tenant-a", store.clone()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.register(job("* * * * *")).await })
        })
        .collect();

    let mut registered = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => registered += 1,
            Err(err) => {
                assert_eq!(err.code(), "job.already.exists");
                duplicates += 1;
            }
        }
    }

    assert_eq!(registered, 1);
    assert_eq!(duplicates, 7);
    assert_eq!(store.find_by_tenant("tenant-a").await.unwrap().len(), 1);
}
