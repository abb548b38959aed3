//! Codec Module
//!
//! Maps a collection to and from its on-disk text form.
//!
//! ## File Format
//! One record per line, six whitespace-separated tokens carrying ten
//! fields. No header, no footer, no escaping.
//! ```text
//! ┌──────┬────────┬────────┬──────────┬──────────────┬──────────────┐
//! │  id  │  dept  │  name  │  salary  │ y.m.d (hire) │ y.m.d (term) │
//! └──────┴────────┴────────┴──────────┴──────────────┴──────────────┘
//! 7 sales Ivanov 52000 2019.3.1 2024.11.30
//! ```
//!
//! ## Load Policy
//! Loading reads until the first corrupt line. Records before it are kept;
//! the corrupt line and everything after it are dropped without an error.
//! [`LoadReport::truncated_at`] tells the caller where that happened.

mod file;
mod line;

pub use file::{
    load, load_into, load_with_report, read_into, read_records, save, write_records, LoadReport,
};
pub use line::{decode_record, encode_record, TOKENS_PER_LINE};
