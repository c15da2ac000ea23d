//! GroupedStore implementation
//!
//! BTreeMap of BTreeSets with a generation counter for drift detection.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::error::{Result, StoreError};

use super::{Scope, SnapshotCursor};

/// Sorted map from keys to sorted, deduplicated buckets of values
///
/// ## Generation counter
/// - Bumped on every insert (bucket creation included) and every removal
/// - Never decreases
/// - Cursors stamp it when opened and compare before each `advance` /
///   `remove_last`
///
/// Values leave the store only through [`SnapshotCursor::remove_last`].
#[derive(Debug)]
pub struct GroupedStore<K, V> {
    /// Key-ordered buckets; a bucket exists only while it holds values
    buckets: RwLock<BTreeMap<K, BTreeSet<V>>>,

    /// Structural mutation count
    generation: AtomicU64,
}

impl<K, V> GroupedStore<K, V>
where
    K: Ord + Clone,
    V: Ord + Clone,
{
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            buckets: RwLock::new(BTreeMap::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// Insert a value under a key
    ///
    /// Creates the key's bucket on first use. An equal value already in the
    /// bucket is kept as is. The generation is bumped either way, so every
    /// open cursor goes stale.
    ///
    /// Returns `true` if the value was not already present.
    pub fn insert(&self, key: K, value: V) -> bool {
        let mut buckets = self.buckets.write();

        let bucket = buckets.entry(key).or_insert_with(|| {
            tracing::debug!("creating bucket");
            BTreeSet::new()
        });
        let inserted = bucket.insert(value);

        self.generation.fetch_add(1, Ordering::SeqCst);
        inserted
    }

    /// Get the bucket for a key, in value order
    ///
    /// Returns an empty vector if the key was never inserted.
    pub fn lookup(&self, key: &K) -> Vec<V> {
        self.buckets
            .read()
            .get(key)
            .map(|bucket| bucket.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Open a cursor over a snapshot of the given scope
    ///
    /// A key with no bucket yields an empty cursor.
    pub fn open_cursor(&self, scope: Scope<K>) -> SnapshotCursor<'_, K, V> {
        let buckets = self.buckets.read();

        let items: Vec<(K, V)> = match &scope {
            Scope::Key(key) => buckets
                .get(key)
                .map(|bucket| {
                    bucket
                        .iter()
                        .map(|value| (key.clone(), value.clone()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default(),
            Scope::All => buckets
                .iter()
                .flat_map(|(key, bucket)| {
                    bucket.iter().map(move |value| (key.clone(), value.clone()))
                })
                .collect(),
        };

        // Stamp while the read lock is held so no insert can slip in between
        let generation = self.generation();
        tracing::debug!(
            scope = scope_label(&scope),
            snapshot_len = items.len(),
            generation,
            "opening cursor"
        );

        SnapshotCursor::new(self, items, generation)
    }

    /// Open a cursor that yields nothing but still watches for drift
    pub fn empty_cursor(&self) -> SnapshotCursor<'_, K, V> {
        SnapshotCursor::new(self, Vec::new(), self.generation())
    }

    /// Remove one value from a key's bucket (cursor removal path)
    ///
    /// The generation is compared with `expected` under the write lock, so
    /// an insert from another thread can never be folded into the new stamp.
    /// Prunes the bucket if it becomes empty. Returns the new generation.
    pub(super) fn remove_entry(&self, key: &K, value: &V, expected: u64) -> Result<u64> {
        let mut buckets = self.buckets.write();

        let actual = self.generation();
        if actual != expected {
            return Err(StoreError::StaleCursor { expected, actual });
        }

        if let Some(bucket) = buckets.get_mut(key) {
            bucket.remove(value);
            if bucket.is_empty() {
                buckets.remove(key);
            }
        }

        Ok(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current generation (number of structural mutations so far)
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Check whether a key currently has a bucket
    pub fn contains_key(&self, key: &K) -> bool {
        self.buckets.read().contains_key(key)
    }

    /// All keys with a bucket, in key order
    pub fn keys(&self) -> Vec<K> {
        self.buckets.read().keys().cloned().collect()
    }

    /// Number of buckets
    pub fn key_count(&self) -> usize {
        self.buckets.read().len()
    }

    /// Total number of values across all buckets
    pub fn len(&self) -> usize {
        self.buckets.read().values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.read().is_empty()
    }
}

impl<K, V> Default for GroupedStore<K, V>
where
    K: Ord + Clone,
    V: Ord + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

fn scope_label<K>(scope: &Scope<K>) -> &'static str {
    match scope {
        Scope::Key(_) => "key",
        Scope::All => "all",
    }
}
