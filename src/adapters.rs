//! Construction of the registry's collaborators from configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use tracing::info;

use cronit_config::{Config, StoreConfig};
use cronit_core::{DigestAlgorithm, JobDefinitionService, StaticTenantProvider};
use cronit_protocols::JobDefinitionStore;
use cronit_store::{FileJobDefinitionStore, MemoryJobDefinitionStore};
use cronit_store_sqlite::SqliteJobDefinitionStore;

const SQLITE_FILE: &str = "cronit.db";

/// Database file for the sqlite backend: `path` itself when it names a file,
/// `path/cronit.db` when it names a directory.
pub(crate) fn sqlite_path(path: &Path) -> PathBuf {
    if path.extension().is_some() && !path.is_dir() {
        path.to_path_buf()
    } else {
        path.join(SQLITE_FILE)
    }
}

/// Build the configured job definition store.
pub(crate) async fn build_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn JobDefinitionStore>> {
    let store: Arc<dyn JobDefinitionStore> = match config.backend.as_str() {
        "memory" => Arc::new(MemoryJobDefinitionStore::new()),
        "file" => Arc::new(
            FileJobDefinitionStore::new(&config.path)
                .await
                .with_context(|| format!("Failed to open file store at {:?}", config.path))?,
        ),
        "sqlite" => {
            let path = sqlite_path(&config.path);
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {:?}", parent))?;
            }
            Arc::new(
                SqliteJobDefinitionStore::open(&path)
                    .await
                    .with_context(|| format!("Failed to open sqlite store at {:?}", path))?,
            )
        }
        other => bail!("Unknown store backend: {}", other),
    };

    info!(backend = %config.backend, path = ?config.path, "Job definition store ready");
    Ok(store)
}

/// Build the registration service for the configured tenant, digest and store.
pub(crate) async fn build_service(config: &Config) -> anyhow::Result<JobDefinitionService> {
    let algorithm: DigestAlgorithm = config.identity.algorithm.parse()?;
    let store = build_store(&config.store).await?;
    let tenants = match config.tenant.id.as_deref() {
        Some(id) => StaticTenantProvider::new(id),
        None => StaticTenantProvider::unauthenticated(),
    };

    Ok(JobDefinitionService::new(
        store,
        Arc::new(tenants),
        algorithm.into_digest(),
    ))
}
