//! # Cronit Protocols
//!
//! Core protocol definitions for the Cronit job registry.
//! Contains the data model, the collaborator traits and the error taxonomy,
//! no implementations.
//!
//! ## Core Traits
//!
//! - [`JobDefinitionStore`] - Persistence of registered job definitions
//! - [`TenantContextProvider`] - Resolution of the calling tenant
//! - [`DigestFunction`] - One-way digest used for identity derivation

pub mod digest;
pub mod error;
pub mod job;
pub mod store;
pub mod tenant;

pub use digest::DigestFunction;
pub use error::{ErrorCategory, RegistrationError, StoreError, TenantError};
pub use job::{JobDefinition, JobId, RegisteredJobDefinition, ScheduleInfo, DEFAULT_GROUP};
pub use store::JobDefinitionStore;
pub use tenant::TenantContextProvider;
