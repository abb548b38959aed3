//! Record definitions
//!
//! The employee record and the plain date value embedded in it.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RosterError};

/// A calendar date stored as three raw integers
///
/// No calendar validation is done and values are never normalized:
/// `2024.13.40` is a perfectly good `Date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Date {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl Date {
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = RosterError;

    /// Parse `<year>.<month>.<day>`
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split('.');
        let mut next = |what: &str| -> Result<i32> {
            let part = parts
                .next()
                .ok_or_else(|| RosterError::Parse(format!("date {:?}: missing {}", s, what)))?;
            part.parse::<i32>()
                .map_err(|e| RosterError::Parse(format!("date {:?}: bad {}: {}", s, what, e)))
        };

        let year = next("year")?;
        let month = next("month")?;
        let day = next("day")?;

        if parts.next().is_some() {
            return Err(RosterError::Parse(format!(
                "date {:?}: expected exactly three components",
                s
            )));
        }

        Ok(Date { year, month, day })
    }
}

/// Check that `value` can be stored as a single `dept`/`name` token
///
/// The core never calls this; the file format would silently lose a record
/// whose token is empty or contains whitespace, so callers that take text
/// from users check it up front.
pub fn check_token(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RosterError::Parse(format!("{} must not be empty", field)));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(RosterError::Parse(format!(
            "{} {:?} must not contain whitespace",
            field, value
        )));
    }
    Ok(())
}

/// One employee's stored data
///
/// `dept` and `name` are single non-empty, whitespace-free tokens; the file
/// format is whitespace-delimited and does not escape anything. Neither is
/// validated here: an empty token or one with embedded whitespace is saved
/// as-is, and loading stops at that line, dropping it and every record
/// after it. See [`check_token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Employee id. Not required to be unique within a collection.
    pub id: i32,
    pub dept: String,
    pub name: String,
    pub salary: i32,
    /// Hire date
    pub begin: Date,
    /// Termination date
    pub end: Date,
}

impl Record {
    pub fn new(
        id: i32,
        dept: impl Into<String>,
        name: impl Into<String>,
        salary: i32,
        begin: Date,
        end: Date,
    ) -> Self {
        Self {
            id,
            dept: dept.into(),
            name: name.into(),
            salary,
            begin,
            end,
        }
    }

    /// Build a record from an id plus the editable fields
    pub fn from_fields(id: i32, fields: RecordFields) -> Self {
        let RecordFields {
            dept,
            name,
            salary,
            begin,
            end,
        } = fields;
        Self {
            id,
            dept,
            name,
            salary,
            begin,
            end,
        }
    }

    /// Overwrite every field except `id`
    pub fn apply(&mut self, fields: RecordFields) {
        self.dept = fields.dept;
        self.name = fields.name;
        self.salary = fields.salary;
        self.begin = fields.begin;
        self.end = fields.end;
    }

    /// Copy out the editable part of this record
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            dept: self.dept.clone(),
            name: self.name.clone(),
            salary: self.salary,
            begin: self.begin,
            end: self.end,
        }
    }
}

impl fmt::Display for Record {
    /// Same layout as a line in the data file (without the newline)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.id, self.dept, self.name, self.salary, self.begin, self.end
        )
    }
}

/// Everything about a record except its id (the payload of an edit)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    pub dept: String,
    pub name: String,
    pub salary: i32,
    pub begin: Date,
    pub end: Date,
}

impl RecordFields {
    pub fn new(
        dept: impl Into<String>,
        name: impl Into<String>,
        salary: i32,
        begin: Date,
        end: Date,
    ) -> Self {
        Self {
            dept: dept.into(),
            name: name.into(),
            salary,
            begin,
            end,
        }
    }
}
