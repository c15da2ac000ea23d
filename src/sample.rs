//! Sample dataset: a Paris and Rome trip.

use crate::config::Config;
use crate::error::Result;
use crate::model::{Activity, Destination, Site};
use crate::planner::TripPlanner;

pub fn paris() -> Destination {
    Destination::new("France", "Paris", 5, 1000.0)
}

pub fn rome() -> Destination {
    Destination::new("Italie", "Rome", 7, 1500.0)
}

/// Planner seeded with the Paris/Rome activities and sites
pub fn demo_planner(config: Config) -> Result<TripPlanner> {
    let mut planner = TripPlanner::new(config)?;

    planner.add_activity(paris(), Activity::new("Visite de la Tour Eiffel", 25.0));
    planner.add_activity(paris(), Activity::new("Visite du Louvre", 15.0));
    planner.add_activity(rome(), Activity::new("Visite du Colisée", 30.0));
    planner.add_activity(rome(), Activity::new("Balade en bateau", 40.0));

    planner.add_site(paris(), Site::new("Tour Eiffel", 1.0));
    planner.add_site(rome(), Site::new("Colisée", 2.5));
    planner.add_site(rome(), Site::new("Vatican", 3.0));

    Ok(planner)
}
