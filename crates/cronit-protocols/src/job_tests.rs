use super::*;

#[test]
fn test_job_definition_new() {
    let def = JobDefinition::new("JobName", DEFAULT_GROUP, ScheduleInfo::cron("* * * * *"));
    assert_eq!(def.name, "JobName");
    assert_eq!(def.group, "Default");
    assert_eq!(def.schedule_info.expression(), "* * * * *");
    assert!(def.description.is_none());
}

#[test]
fn test_job_definition_with_description() {
    let def = JobDefinition::new("job", "reports", ScheduleInfo::cron("0 0 * * *"))
        .with_description("Nightly report");
    assert_eq!(def.description, Some("Nightly report".to_string()));
}

#[test]
fn test_job_id_display() {
    let id = JobId::new("abc123");
    assert_eq!(id.to_string(), "abc123");
    assert_eq!(id.as_str(), "abc123");
    assert_eq!(id.as_ref(), "abc123");
}

#[test]
fn test_registered_definition_keeps_identity() {
    let def = JobDefinition::new("JobName", DEFAULT_GROUP, ScheduleInfo::cron("* * * * *"));
    let registered = RegisteredJobDefinition::new(JobId::new("hashed"), "company-1", def.clone());

    assert_eq!(registered.id(), &JobId::new("hashed"));
    assert_eq!(registered.tenant_id(), "company-1");
    assert_eq!(registered.name(), "JobName");
    assert_eq!(registered.definition(), &def);
    assert!(registered.created_at() <= Utc::now());
    assert_eq!(registered.into_definition(), def);
}

#[test]
fn test_registered_definition_json_layout() {
    let def = JobDefinition::new("JobName", DEFAULT_GROUP, ScheduleInfo::cron("*/5 * * * *"));
    let registered = RegisteredJobDefinition::new(JobId::new("hashed"), "company-1", def);

    let value = serde_json::to_value(&registered).unwrap();
    assert_eq!(value["id"], "hashed");
    assert_eq!(value["tenantId"], "company-1");
    assert_eq!(value["name"], "JobName");
    assert_eq!(value["group"], "Default");
    assert_eq!(value["scheduleInfo"]["expression"], "*/5 * * * *");
    assert!(value.get("description").is_none());
    assert!(value["createdAt"].is_string());

    let parsed: RegisteredJobDefinition = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, registered);
}

#[test]
fn test_group_defaults_when_missing() {
    let json = serde_json::json!({
        "name": "JobName",
        "scheduleInfo": { "expression": "* * * * *" }
    });
    let def: JobDefinition = serde_json::from_value(json).unwrap();
    assert_eq!(def.group, DEFAULT_GROUP);
}
