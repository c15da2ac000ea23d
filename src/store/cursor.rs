//! Snapshot Cursor
//!
//! Forward-only, fail-fast traversal over a point-in-time copy of a store.

use crate::error::{Result, StoreError};

use super::GroupedStore;

/// Cursor over a snapshot of a [`GroupedStore`]
///
/// ## Contract
/// - `has_next` never fails and never checks for drift
/// - `advance` fails with `StaleCursor` if the store changed since the
///   stamp, then with `ExhaustedCursor` if nothing is left
/// - `remove_last` needs a preceding `advance` whose value was not removed
///   yet (`IllegalCursorState`), then checks drift like `advance`
/// - a successful `remove_last` removes the value from the snapshot and the
///   store, and moves the stamp to the new generation
///
/// The cursor borrows the store; it never owns it.
pub struct SnapshotCursor<'a, K, V> {
    store: &'a GroupedStore<K, V>,

    /// Private working sequence, with each value's key for removal
    items: Vec<(K, V)>,

    /// Index of the next element to yield
    position: usize,

    /// Set by `advance`, cleared by `remove_last`
    last_removable: bool,

    /// Store generation this cursor is in sync with
    expected_generation: u64,

    /// Iterator adapter already yielded a StaleCursor error
    stale_reported: bool,
}

impl<'a, K, V> SnapshotCursor<'a, K, V>
where
    K: Ord + Clone,
    V: Ord + Clone,
{
    pub(super) fn new(store: &'a GroupedStore<K, V>, items: Vec<(K, V)>, generation: u64) -> Self {
        Self {
            store,
            items,
            position: 0,
            last_removable: false,
            expected_generation: generation,
            stale_reported: false,
        }
    }

    /// True if `advance` has an element to return (ignoring drift)
    pub fn has_next(&self) -> bool {
        self.position < self.items.len()
    }

    /// Return the next value of the snapshot
    pub fn advance(&mut self) -> Result<V> {
        self.check_generation()?;

        let (_, value) = self
            .items
            .get(self.position)
            .ok_or(StoreError::ExhaustedCursor)?;
        let value = value.clone();

        self.position += 1;
        self.last_removable = true;
        Ok(value)
    }

    /// Remove the value returned by the last `advance`
    ///
    /// Removes it from the working sequence and from its bucket in the store.
    pub fn remove_last(&mut self) -> Result<()> {
        if !self.last_removable {
            return Err(StoreError::IllegalCursorState);
        }
        self.check_generation()?;

        let index = self.position - 1;
        let (key, value) = &self.items[index];

        // Re-checked under the store's write lock
        let generation = self
            .store
            .remove_entry(key, value, self.expected_generation)
            .map_err(|e| {
                tracing::warn!(error = %e, "cursor removal raced with another writer");
                e
            })?;

        self.items.remove(index);
        self.position = index;
        self.expected_generation = generation;
        self.last_removable = false;

        tracing::debug!(
            position = self.position,
            generation = self.expected_generation,
            "cursor removed value"
        );
        Ok(())
    }

    /// Number of elements not yet returned
    pub fn remaining(&self) -> usize {
        self.items.len() - self.position
    }

    /// Generation the cursor is currently in sync with
    pub fn stamp(&self) -> u64 {
        self.expected_generation
    }

    /// Fail if the store was mutated outside this cursor
    fn check_generation(&self) -> Result<()> {
        let actual = self.store.generation();
        if actual != self.expected_generation {
            tracing::warn!(
                expected = self.expected_generation,
                actual,
                "cursor detected concurrent modification"
            );
            return Err(StoreError::StaleCursor {
                expected: self.expected_generation,
                actual,
            });
        }
        Ok(())
    }
}

impl<'a, K, V> Iterator for SnapshotCursor<'a, K, V>
where
    K: Ord + Clone,
    V: Ord + Clone,
{
    /// Err(StaleCursor) is yielded once, then the iterator ends
    type Item = Result<V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stale_reported || !self.has_next() {
            return None;
        }

        let result = self.advance();
        if result.is_err() {
            self.stale_reported = true;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stale_reported {
            (0, Some(0))
        } else {
            (0, Some(self.remaining()))
        }
    }
}

impl<'a, K, V> std::fmt::Debug for SnapshotCursor<'a, K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotCursor")
            .field("len", &self.items.len())
            .field("position", &self.position)
            .field("last_removable", &self.last_removable)
            .field("expected_generation", &self.expected_generation)
            .finish()
    }
}
