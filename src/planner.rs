//! Planner Module
//!
//! Facade that coordinates both trip stores.
//!
//! ## Responsibilities
//! - Own the activity plan and the site tour
//! - Remember destinations in registration order (the export order)
//! - Route report and export requests

use std::path::Path;

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::export;
use crate::model::{Activity, Destination, Site};
use crate::report;
use crate::trip::{ActivityPlan, SiteTour};

/// Trip planner over an activity plan and a site tour
pub struct TripPlanner {
    /// Planner configuration
    config: Config,

    /// Activities per destination
    plan: ActivityPlan,

    /// Sites per destination
    tour: SiteTour,

    /// Registered destinations, first registration first
    destinations: Vec<Destination>,
}

impl TripPlanner {
    /// Create an empty planner
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            plan: ActivityPlan::new(),
            tour: SiteTour::new(),
            destinations: Vec::new(),
        })
    }

    /// Register a destination for reports and export
    ///
    /// Registering the same destination twice keeps its first position.
    pub fn register(&mut self, destination: Destination) {
        if !self.destinations.contains(&destination) {
            tracing::debug!(%destination, "registering destination");
            self.destinations.push(destination);
        }
    }

    /// Plan an activity (registers the destination)
    pub fn add_activity(&mut self, destination: Destination, activity: Activity) -> bool {
        self.register(destination.clone());
        self.plan.add_activity(destination, activity)
    }

    /// Add a site to visit (registers the destination)
    pub fn add_site(&mut self, destination: Destination, site: Site) -> bool {
        self.register(destination.clone());
        self.tour.add_site(destination, site)
    }

    /// Find a registered destination by country and city
    pub fn find(&self, country: &str, city: &str) -> Result<&Destination> {
        self.destinations
            .iter()
            .find(|d| d.country() == country && d.city() == city)
            .ok_or_else(|| StoreError::UnknownDestination(format!("{}/{}", country, city)))
    }

    /// Render the report for a destination
    pub fn report(&self, destination: &Destination) -> String {
        report::render(destination, &self.plan, &self.tour, &self.config.currency_symbol)
    }

    /// Export every registered destination to the configured path
    pub fn export(&self) -> Result<usize> {
        self.export_to(&self.config.export_path)
    }

    /// Export every registered destination to `path`
    pub fn export_to(&self, path: &Path) -> Result<usize> {
        export::export_to_path(path, &self.destinations, &self.plan, &self.tour)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn plan(&self) -> &ActivityPlan {
        &self.plan
    }

    /// Mutable access, for selecting the current destination
    pub fn plan_mut(&mut self) -> &mut ActivityPlan {
        &mut self.plan
    }

    pub fn tour(&self) -> &SiteTour {
        &self.tour
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
