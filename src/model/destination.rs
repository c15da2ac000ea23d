//! Destination: the composite key of both trip stores.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A travel destination
///
/// Ordered by (country, city, duration, budget). Fields are private so a
/// destination cannot change once it sits inside a map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    country: String,
    city: String,
    duration_days: i32,
    budget: f64,
}

impl Destination {
    pub fn new(
        country: impl Into<String>,
        city: impl Into<String>,
        duration_days: i32,
        budget: f64,
    ) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
            duration_days,
            budget,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Trip length in days
    pub fn duration_days(&self) -> i32 {
        self.duration_days
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }
}

impl Ord for Destination {
    fn cmp(&self, other: &Self) -> Ordering {
        self.country
            .cmp(&other.country)
            .then_with(|| self.city.cmp(&other.city))
            .then_with(|| self.duration_days.cmp(&other.duration_days))
            .then_with(|| self.budget.total_cmp(&other.budget))
    }
}

impl PartialOrd for Destination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Destination {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Destination {}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Destination{{country='{}', city='{}', duration={} days, budget={}}}",
            self.country,
            self.city,
            self.duration_days,
            super::format_decimal(self.budget)
        )
    }
}
