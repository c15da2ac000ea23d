//! Site tour: destination -> sorted sites.

use std::fmt;

use crate::model::{Destination, Site};
use crate::store::{GroupedStore, Scope, SnapshotCursor};

/// Sites to visit at each destination
#[derive(Debug, Default)]
pub struct SiteTour {
    store: GroupedStore<Destination, Site>,
}

impl SiteTour {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a site to visit at a destination
    pub fn add_site(&self, destination: Destination, site: Site) -> bool {
        self.store.insert(destination, site)
    }

    /// Sites at a destination, in order
    pub fn sites(&self, destination: &Destination) -> Vec<Site> {
        self.store.lookup(destination)
    }

    /// Cursor over every site, destination by destination
    pub fn cursor(&self) -> SnapshotCursor<'_, Destination, Site> {
        self.store.open_cursor(Scope::All)
    }

    /// Underlying store
    pub fn store(&self) -> &GroupedStore<Destination, Site> {
        &self.store
    }
}

impl fmt::Display for SiteTour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SiteTour{{")?;
        for (i, destination) in self.store.keys().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let sites: Vec<String> = self
                .store
                .lookup(destination)
                .iter()
                .map(Site::to_string)
                .collect();
            write!(f, "{}=[{}]", destination, sites.join(", "))?;
        }
        write!(f, "}}")
    }
}
