//! # rosterdb
//!
//! A small employee record store with:
//! - A growable record collection with an explicit doubling growth law
//! - Swap-with-last removal and first-match lookup by id
//! - Selection sort by id, name or salary
//! - A line-oriented text format that loads up to the first corrupt line
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 CLI / menu loop (caller)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Store                                 │
//! │              (collection + data file path)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Collection  │◄─────────│    Sort     │
//!   │ (Vec, grow) │          │ (selection) │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │    Codec    │
//!   │ (text file) │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod collection;
pub mod sort;
pub mod codec;
pub mod command;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError};
pub use config::Config;
pub use record::{Date, Record, RecordFields};
pub use collection::Collection;
pub use sort::SortKey;
pub use command::{Command, Outcome};
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rosterdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
