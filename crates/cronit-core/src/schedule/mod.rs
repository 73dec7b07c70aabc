//! Cron schedule expression validation.
//!
//! Expressions have exactly five whitespace-separated fields: minute, hour,
//! day-of-month, month and day-of-week. Each field is a comma-separated list
//! of `*`, `*/n`, `v`, `v/n`, `a-b` or `a-b/n` items. Month and weekday
//! fields also accept three-letter names (`JAN`, `MON`, ...).

mod field;

use std::collections::BTreeSet;

use thiserror::Error;

pub use field::Field;

/// Why an expression was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("expression is empty")]
    Empty,

    #[error("expected 5 fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid {field} token '{token}'")]
    InvalidToken { field: Field, token: String },

    #[error("{field} value {value} is outside {min}-{max}")]
    OutOfRange {
        field: Field,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("{field} step must be at least 1")]
    ZeroStep { field: Field },

    #[error("{field} range {start}-{end} is descending")]
    DescendingRange { field: Field, start: u32, end: u32 },
}

/// Outcome of validating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn reason(&self) -> Option<&InvalidReason> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(reason) => Some(reason),
        }
    }
}

/// A parsed expression with every field expanded to the values it matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronSchedule {
    expression: String,
    fields: [BTreeSet<u32>; 5],
}

impl CronSchedule {
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Values matched by `field`. Sunday is always reported as 0.
    pub fn values(&self, field: Field) -> &BTreeSet<u32> {
        let index = Field::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or_default();
        &self.fields[index]
    }
}

/// Stateless validator for 5-field cron expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleValidator;

impl ScheduleValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate an expression. Malformed input is reported, never raised.
    pub fn validate(&self, expression: &str) -> ValidationResult {
        match self.parse(expression) {
            Ok(_) => ValidationResult::Valid,
            Err(reason) => ValidationResult::Invalid(reason),
        }
    }

    /// Parse an expression into its expanded field values.
    pub fn parse(&self, expression: &str) -> Result<CronSchedule, InvalidReason> {
        let parts: Vec<&str> = expression.split_whitespace().collect();
        if parts.is_empty() {
            return Err(InvalidReason::Empty);
        }
        if parts.len() != Field::ALL.len() {
            return Err(InvalidReason::FieldCount { found: parts.len() });
        }

        let [minute, hour, day_of_month, month, day_of_week] = Field::ALL;
        Ok(CronSchedule {
            expression: parts.join(" "),
            fields: [
                minute.parse(parts[0])?,
                hour.parse(parts[1])?,
                day_of_month.parse(parts[2])?,
                month.parse(parts[3])?,
                day_of_week.parse(parts[4])?,
            ],
        })
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
