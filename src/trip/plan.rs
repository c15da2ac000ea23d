//! Activity plan: destination -> sorted activities.

use std::fmt;

use crate::model::{Activity, Destination};
use crate::store::{GroupedStore, Scope, SnapshotCursor};

/// Activities planned for each destination
///
/// Traversal goes through the *current destination*; with none selected,
/// [`ActivityPlan::cursor`] is empty.
#[derive(Debug, Default)]
pub struct ActivityPlan {
    store: GroupedStore<Destination, Activity>,
    current: Option<Destination>,
}

impl ActivityPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan an activity at a destination
    pub fn add_activity(&self, destination: Destination, activity: Activity) -> bool {
        self.store.insert(destination, activity)
    }

    /// Activities planned at a destination, in order
    pub fn activities(&self, destination: &Destination) -> Vec<Activity> {
        self.store.lookup(destination)
    }

    /// Select the destination [`ActivityPlan::cursor`] traverses
    pub fn set_current_destination(&mut self, destination: Option<Destination>) {
        self.current = destination;
    }

    pub fn current_destination(&self) -> Option<&Destination> {
        self.current.as_ref()
    }

    /// Cursor over the current destination's activities
    pub fn cursor(&self) -> SnapshotCursor<'_, Destination, Activity> {
        match &self.current {
            Some(destination) => self.store.open_cursor(Scope::Key(destination.clone())),
            None => self.store.empty_cursor(),
        }
    }

    /// Cursor over one destination's activities
    pub fn cursor_for(&self, destination: &Destination) -> SnapshotCursor<'_, Destination, Activity> {
        self.store.open_cursor(Scope::Key(destination.clone()))
    }

    /// Underlying store
    pub fn store(&self) -> &GroupedStore<Destination, Activity> {
        &self.store
    }
}

impl fmt::Display for ActivityPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActivityPlan{{")?;
        for (i, destination) in self.store.keys().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}=[", destination)?;
            for (j, activity) in self.store.lookup(destination).iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", activity)?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}
