//! Cron fields and their value domains.

use std::collections::BTreeSet;
use std::fmt;

use super::InvalidReason;

const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];
const WEEKDAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// One of the five fields of a cron expression, in expression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day-of-month",
            Field::Month => "month",
            Field::DayOfWeek => "day-of-week",
        }
    }

    pub fn min(self) -> u32 {
        match self {
            Field::Minute | Field::Hour | Field::DayOfWeek => 0,
            Field::DayOfMonth | Field::Month => 1,
        }
    }

    /// Largest accepted value. Day-of-week accepts 7 as an alias of Sunday.
    pub fn max(self) -> u32 {
        match self {
            Field::Minute => 59,
            Field::Hour => 23,
            Field::DayOfMonth => 31,
            Field::Month => 12,
            Field::DayOfWeek => 7,
        }
    }

    fn name_value(self, token: &str) -> Option<u32> {
        let (names, offset) = match self {
            Field::Month => (&MONTH_NAMES[..], 1),
            Field::DayOfWeek => (&WEEKDAY_NAMES[..], 0),
            _ => return None,
        };
        names
            .iter()
            .position(|name| name.eq_ignore_ascii_case(token))
            .map(|i| i as u32 + offset)
    }

    fn value(self, token: &str) -> Result<u32, InvalidReason> {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            let value: u32 = token.parse().map_err(|_| self.invalid_token(token))?;
            if value < self.min() || value > self.max() {
                return Err(InvalidReason::OutOfRange {
                    field: self,
                    value,
                    min: self.min(),
                    max: self.max(),
                });
            }
            return Ok(value);
        }
        self.name_value(token).ok_or_else(|| self.invalid_token(token))
    }

    fn step(self, token: &str) -> Result<u32, InvalidReason> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.invalid_token(token));
        }
        match token.parse::<u32>() {
            Ok(0) => Err(InvalidReason::ZeroStep { field: self }),
            Ok(step) => Ok(step),
            Err(_) => Err(self.invalid_token(token)),
        }
    }

    fn invalid_token(self, token: &str) -> InvalidReason {
        InvalidReason::InvalidToken {
            field: self,
            token: token.to_string(),
        }
    }

    /// Expand one field of an expression into the set of values it matches.
    pub(crate) fn parse(self, text: &str) -> Result<BTreeSet<u32>, InvalidReason> {
        let mut values = BTreeSet::new();
        for item in text.split(',') {
            let (start, end, step) = self.parse_item(item)?;
            values.extend((start..=end).step_by(step as usize).map(|v| self.normalize(v)));
        }
        Ok(values)
    }

    fn parse_item(self, item: &str) -> Result<(u32, u32, u32), InvalidReason> {
        if item.is_empty() {
            return Err(self.invalid_token(item));
        }

        let (range, step) = match item.split_once('/') {
            Some((range, step)) => (range, Some(self.step(step)?)),
            None => (item, None),
        };

        let (start, end) = if range == "*" {
            (self.min(), self.max())
        } else if let Some((start, end)) = range.split_once('-') {
            let (start, end) = (self.value(start)?, self.value(end)?);
            if start > end {
                return Err(InvalidReason::DescendingRange {
                    field: self,
                    start,
                    end,
                });
            }
            (start, end)
        } else {
            let value = self.value(range)?;
            match step {
                Some(_) => (value, self.max()),
                None => (value, value),
            }
        };

        Ok((start, end, step.unwrap_or(1)))
    }

    fn normalize(self, value: u32) -> u32 {
        match (self, value) {
            (Field::DayOfWeek, 7) => 0,
            _ => value,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
