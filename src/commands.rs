//! Command handlers.

use std::collections::BTreeSet;

use anyhow::{anyhow, bail};

use cronit_core::{Field, JobDefinitionService, ScheduleValidator};
use cronit_protocols::error::render;
use cronit_protocols::{JobDefinition, ScheduleInfo};

/// Register a job and print the stored definition.
pub(crate) async fn register(
    service: &JobDefinitionService,
    name: String,
    group: String,
    expression: String,
    description: Option<String>,
) -> anyhow::Result<()> {
    let mut job = JobDefinition::new(name, group, ScheduleInfo::cron(expression));
    if let Some(description) = description {
        job = job.with_description(description);
    }

    match service.register(job).await {
        Ok(registered) => {
            println!("{}", serde_json::to_string_pretty(&registered)?);
            Ok(())
        }
        Err(err) => {
            let message = render(err.code(), &err.args());
            Err(anyhow!(err).context(message))
        }
    }
}

/// Validate an expression and print the values matched by each field.
pub(crate) fn validate(expression: &str) -> anyhow::Result<()> {
    let schedule = ScheduleValidator::new()
        .parse(expression)
        .map_err(|reason| anyhow!("Schedule expression '{}' is not valid: {}", expression, reason))?;

    for field in Field::ALL {
        println!("{:<13} {}", field.name(), format_values(schedule.values(field)));
    }
    Ok(())
}

/// Print the job registered under `name` for the tenant.
pub(crate) async fn show(service: &JobDefinitionService, name: &str) -> anyhow::Result<()> {
    match service.find(name).await? {
        Some(job) => {
            println!("{}", serde_json::to_string_pretty(&job)?);
            Ok(())
        }
        None => bail!("Job '{}' is not registered", name),
    }
}

/// Print the jobs registered by the tenant.
pub(crate) async fn list(service: &JobDefinitionService) -> anyhow::Result<()> {
    let jobs = service.list().await?;
    println!("{}", serde_json::to_string_pretty(&jobs)?);
    Ok(())
}

fn format_values(values: &BTreeSet<u32>) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
