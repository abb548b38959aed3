//! Command definitions
//!
//! Already-parsed requests against a store. Whatever drives the store
//! (the CLI, a menu loop, a test) turns its input into one of these.

use crate::record::{Record, RecordFields};
use crate::sort::SortKey;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Append,
    Remove,
    Edit,
    Sort,
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a record at the end
    Append(Record),

    /// Remove the first record with this id (swap-with-last)
    Remove { id: i32 },

    /// Overwrite everything but the id of the first record with this id
    Edit { id: i32, fields: RecordFields },

    /// Reorder all records
    Sort(SortKey),
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Append(_) => CommandType::Append,
            Command::Remove { .. } => CommandType::Remove,
            Command::Edit { .. } => CommandType::Edit,
            Command::Sort(_) => CommandType::Sort,
        }
    }
}

/// What executing a command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command was applied to the collection
    Applied,

    /// Remove/edit found no record with the requested id; nothing changed
    NotFound,
}

impl Outcome {
    /// Whether the collection may differ from what is on disk afterwards
    pub fn changed(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}
