//! Sort Module
//!
//! Reorders a collection in place by one of three keys.
//!
//! ## Keys
//! - `Id`     - integer, ascending
//! - `Name`   - byte-wise lexicographic, ascending
//! - `Salary` - integer, ascending
//!
//! All three go through the same selection sort. There is no descending
//! order and no stable alternative.

mod selection;

use std::fmt;
use std::str::FromStr;

use crate::collection::Collection;
use crate::error::{Result, RosterError};
use crate::record::Record;

pub use selection::{selection_sort_by, selection_sort_by_key};

/// Which field to order records by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SortKey {
    Id,
    Name,
    Salary,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Salary => "salary",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "salary" => Ok(SortKey::Salary),
            other => Err(RosterError::Parse(format!(
                "unknown sort key {:?}; expected id|name|salary",
                other
            ))),
        }
    }
}

/// Sort a slice of records in place by `key`
pub fn sort_records(records: &mut [Record], key: SortKey) {
    match key {
        SortKey::Id => selection_sort_by_key(records, |r| r.id),
        SortKey::Name => selection_sort_by(records, |a, b| a.name.as_bytes() < b.name.as_bytes()),
        SortKey::Salary => selection_sort_by_key(records, |r| r.salary),
    }
}

/// Sort a collection in place by `key`
pub fn sort(collection: &mut Collection, key: SortKey) {
    collection.sort(key);
}
