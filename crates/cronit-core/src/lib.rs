//! # Cronit Core
//!
//! Registration decision logic for the Cronit job registry.
//!
//! - [`IdentityDeriver`] - tenant-scoped, content-addressed job identities
//! - [`ScheduleValidator`] - 5-field cron expression validation
//! - [`JobDefinitionService`] - the registration orchestrator

pub mod digest;
pub mod identity;
pub mod schedule;
pub mod service;
pub mod tenant;

pub use digest::{DigestAlgorithm, Md5Digest, Sha256Digest, UnknownAlgorithm};
pub use identity::IdentityDeriver;
pub use schedule::{CronSchedule, Field, InvalidReason, ScheduleValidator, ValidationResult};
pub use service::JobDefinitionService;
pub use tenant::StaticTenantProvider;
