//! Job definition data model.
//!
//! A [`JobDefinition`] is what a caller submits. Registration turns it into a
//! [`RegisteredJobDefinition`], the only form that carries a [`JobId`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Group used when the caller does not name one.
pub const DEFAULT_GROUP: &str = "Default";

/// Content-derived job identity.
///
/// The lowercase hex digest of (job name, tenant id). It is the sole primary
/// key of a registered definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Schedule of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInfo {
    /// Raw 5-field cron expression.
    expression: String,
}

impl ScheduleInfo {
    pub fn cron(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }
}

/// Job definition as submitted for registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDefinition {
    /// Human-chosen label.
    pub name: String,
    /// Logical namespace of the job.
    #[serde(default = "default_group")]
    pub group: String,
    /// Embedded schedule.
    pub schedule_info: ScheduleInfo,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_group() -> String {
    DEFAULT_GROUP.to_string()
}

impl JobDefinition {
    /// Create a new job definition.
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        schedule_info: ScheduleInfo,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            schedule_info,
            description: None,
        }
    }

    /// Add a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A job definition that passed registration.
///
/// The identity and owning tenant are fixed at construction and cannot be
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredJobDefinition {
    id: JobId,
    tenant_id: String,
    #[serde(flatten)]
    definition: JobDefinition,
    created_at: DateTime<Utc>,
}

impl RegisteredJobDefinition {
    pub fn new(id: JobId, tenant_id: impl Into<String>, definition: JobDefinition) -> Self {
        Self {
            id,
            tenant_id: tenant_id.into(),
            definition,
            created_at: Utc::now(),
        }
    }

    /// Rebuild a definition loaded from storage.
    pub fn restored(
        id: JobId,
        tenant_id: impl Into<String>,
        definition: JobDefinition,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tenant_id: tenant_id.into(),
            definition,
            created_at,
        }
    }

    pub fn id(&self) -> &JobId {
        &self.id
    }

    /// Tenant that registered the job.
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn definition(&self) -> &JobDefinition {
        &self.definition
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn into_definition(self) -> JobDefinition {
        self.definition
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
