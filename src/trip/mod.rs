//! Trip Module
//!
//! The two domain stores built on [`GroupedStore`](crate::store::GroupedStore):
//! - [`ActivityPlan`]: activities planned per destination, traversed one
//!   destination at a time
//! - [`SiteTour`]: sites to visit per destination, traversed across every
//!   destination at once

mod plan;
mod tour;

pub use plan::ActivityPlan;
pub use tour::SiteTour;
