//! Collection Module
//!
//! In-memory, growable sequence of employee records.
//!
//! ## Responsibilities
//! - Amortized O(1) append with an explicit growth law
//! - Report allocation failure without touching existing records
//! - Remove and edit by id using a first-match scan
//! - Expose indexed read access for rendering
//!
//! ## Growth Law
//! ```text
//! capacity:  0 ──► 10 ──► 20 ──► 40 ──► 80 ──► ...
//!            new capacity = max(10, capacity * 2), only when count == capacity
//! ```
//!
//! ## Removal
//! Deletion is swap-with-last: the last record is moved into the hole, so
//! removal is O(1) after the scan but does NOT preserve order.
//! ```text
//!   [1, 2, 3, 4]  remove 2  ──►  [1, 4, 3]
//! ```

mod table;

pub use table::Collection;

/// Capacity of the first allocation
pub const MIN_CAPACITY: usize = 10;

/// Next capacity to grow to from `current`
///
/// Saturates instead of overflowing; an impossible request is then reported
/// as an allocation failure by the caller.
pub fn next_capacity(current: usize) -> usize {
    current.saturating_mul(2).max(MIN_CAPACITY)
}
