//! Report Module
//!
//! Human-readable summary of one destination: its fields, planned
//! activities and sites to visit.

use crate::model::{format_decimal, Destination};
use crate::trip::{ActivityPlan, SiteTour};

/// Render the report for a destination
///
/// Read-only: lookups never disturb open cursors.
pub fn render(
    destination: &Destination,
    plan: &ActivityPlan,
    tour: &SiteTour,
    currency_symbol: &str,
) -> String {
    let mut lines = vec![
        format!("Information for destination: {}", destination.city()),
        format!("Country: {}", destination.country()),
        format!("Trip duration: {} days", destination.duration_days()),
        format!("Budget: {} {}", format_decimal(destination.budget()), currency_symbol),
        String::new(),
        "Activities:".to_string(),
    ];
    lines.extend(plan.activities(destination).iter().map(ToString::to_string));

    lines.push(String::new());
    lines.push("Sites to visit:".to_string());
    lines.extend(tour.sites(destination).iter().map(ToString::to_string));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
