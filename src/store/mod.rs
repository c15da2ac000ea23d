//! Store Module
//!
//! Generic sorted map of sorted sets with fail-fast snapshot cursors.
//!
//! ## Responsibilities
//! - Group values by key, keys in key order, values in value order
//! - Collapse duplicate values within a bucket
//! - Count structural mutations in a generation counter
//! - Hand out cursors over a point-in-time copy of one bucket or all buckets
//!
//! ## Data Structure Choice
//! `BTreeMap<K, BTreeSet<V>>` behind a `parking_lot::RwLock`:
//! - Ordered keys (report and export output order depend on it)
//! - Ordered, deduplicated buckets
//! - `&self` everywhere, so a cursor can borrow the store while its owner
//!   keeps inserting; the generation counter turns that into a `StaleCursor`

mod cursor;
mod grouped;

pub use cursor::SnapshotCursor;
pub use grouped::GroupedStore;

/// What a cursor traverses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope<K> {
    /// One key's bucket, in value order
    Key(K),

    /// Every bucket flattened: key order, then value order within a key
    All,
}
