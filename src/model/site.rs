//! Site: a place to visit at a destination.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A site to visit, ordered by (name, distance from the city center)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    name: String,
    distance_from_center: f64,
}

impl Site {
    pub fn new(name: impl Into<String>, distance_from_center: f64) -> Self {
        Self {
            name: name.into(),
            distance_from_center,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distance from the city center, in kilometers
    pub fn distance_from_center(&self) -> f64 {
        self.distance_from_center
    }
}

impl Ord for Site {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.distance_from_center.total_cmp(&other.distance_from_center))
    }
}

impl PartialOrd for Site {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Site {}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Site{{name='{}', distance={}}}",
            self.name,
            super::format_decimal(self.distance_from_center)
        )
    }
}
