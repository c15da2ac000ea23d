//! Activity: something planned at a destination.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A planned activity, ordered by (description, price)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    description: String,
    price: f64,
}

impl Activity {
    pub fn new(description: impl Into<String>, price: f64) -> Self {
        Self {
            description: description.into(),
            price,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl Ord for Activity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.description
            .cmp(&other.description)
            .then_with(|| self.price.total_cmp(&other.price))
    }
}

impl PartialOrd for Activity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Activity {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Activity {}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Activity{{description='{}', price={}}}",
            self.description,
            super::format_decimal(self.price)
        )
    }
}
