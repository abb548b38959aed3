//! Collection implementation
//!
//! Vec-backed record table with an explicitly tracked capacity.

use std::slice;

use crate::error::{Result, RosterError};
use crate::record::{Record, RecordFields};
use crate::sort::{self, SortKey};

use super::next_capacity;

/// Growable, ordered table of employee records
///
/// `capacity` is the logical capacity dictated by the growth law, not
/// whatever the allocator happened to hand back. The backing `Vec` always
/// has room for at least `capacity` records, so appends between growth
/// points never reallocate.
///
/// There is no internal synchronization; all mutation goes through
/// `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Live records, `records.len()` is the logical count
    records: Vec<Record>,
    /// Logical capacity (0, 10, 20, 40, ...)
    capacity: usize,
    /// Growth beyond this many slots is refused
    capacity_limit: Option<usize>,
}

impl Collection {
    /// Create an empty collection with capacity 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection that refuses to grow past `limit` slots
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            capacity_limit: Some(limit),
            ..Self::default()
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Append a record at index `len()`
    ///
    /// Grows the table first when it is full. If growing fails the call
    /// returns `AllocationFailure` and the collection is left exactly as it
    /// was.
    pub fn append(&mut self, record: Record) -> Result<()> {
        if self.records.len() == self.capacity {
            self.grow()?;
        }
        self.records.push(record);
        Ok(())
    }

    /// Remove the first record (in current order) whose id matches
    ///
    /// The last record is moved into the vacated slot, so the relative
    /// order of the remaining records is not preserved. Returns `false`
    /// and leaves the collection untouched when no record matches.
    pub fn remove_by_id(&mut self, id: i32) -> bool {
        match self.position_of(id) {
            Some(index) => {
                self.records.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Overwrite every field except `id` of the first record whose id matches
    ///
    /// Returns `false` and leaves the collection untouched when no record
    /// matches.
    pub fn edit_by_id(&mut self, id: i32, fields: RecordFields) -> bool {
        match self.position_of(id) {
            Some(index) => {
                self.records[index].apply(fields);
                true
            }
            None => false,
        }
    }

    /// Reorder the records in place by `key`
    pub fn sort(&mut self, key: SortKey) {
        sort::sort_records(&mut self.records, key);
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Index of the first record with this id, scanning from index 0
    ///
    /// Ids are not unique; with duplicates, whichever comes first in the
    /// current physical order wins. Remove and edit both go through here.
    pub fn position_of(&self, id: i32) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    /// First record with this id, see [`Collection::position_of`]
    pub fn find_by_id(&self, id: i32) -> Option<&Record> {
        self.position_of(id).map(|index| &self.records[index])
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of live records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Logical capacity (see the growth law in the module docs)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    /// Record at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Roll back to an earlier `(len, capacity)` snapshot
    ///
    /// Only valid for a snapshot taken from this collection with nothing but
    /// appends in between; the backing storage already has room for it.
    pub(crate) fn restore(&mut self, len: usize, capacity: usize) {
        debug_assert!(len <= self.records.len() && capacity <= self.capacity);
        self.records.truncate(len);
        self.capacity = capacity;
    }

    /// Move to the next capacity step, or fail without side effects
    fn grow(&mut self) -> Result<()> {
        let requested = next_capacity(self.capacity);

        if let Some(limit) = self.capacity_limit {
            if requested > limit {
                return Err(RosterError::AllocationFailure { requested });
            }
        }

        let additional = requested - self.records.len();
        self.records
            .try_reserve_exact(additional)
            .map_err(|_| RosterError::AllocationFailure { requested })?;

        tracing::trace!("Collection grew from {} to {} slots", self.capacity, requested);
        self.capacity = requested;
        Ok(())
    }
}

/// Two collections are equal when they hold the same records in the same
/// order; capacity is not compared.
impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for Collection {}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
