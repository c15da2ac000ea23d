//! Export Module
//!
//! Writes destinations and both stores as delimited text.
//!
//! ## Layout
//! ```text
//! Country,City,Duration,Budget
//! <one row per destination>
//!
//! Description,Price
//! <activities, destination by destination>
//!
//! Name,Distance
//! <sites, destination by destination>
//! ```
//! Floats render through [`format_decimal`]: they keep their fractional part
//! (`1000.0`, not `1000`) and switch to scientific notation from 1e7
//! upwards (`1.0E7`).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::model::{format_decimal, Destination};
use crate::trip::{ActivityPlan, SiteTour};

pub const DESTINATION_HEADER: &str = "Country,City,Duration,Budget";
pub const ACTIVITY_HEADER: &str = "Description,Price";
pub const SITE_HEADER: &str = "Name,Distance";

/// Write the three sections to `writer`
///
/// Destinations are written in the given order, each bucket in value order.
/// Returns the number of data rows written (headers excluded).
pub fn write_csv<W: Write>(
    writer: &mut W,
    destinations: &[Destination],
    plan: &ActivityPlan,
    tour: &SiteTour,
) -> Result<usize> {
    let mut rows = 0;

    // Section 1: destinations
    writeln!(writer, "{}", DESTINATION_HEADER)?;
    for destination in destinations {
        writeln!(
            writer,
            "{},{},{},{}",
            destination.country(),
            destination.city(),
            destination.duration_days(),
            format_decimal(destination.budget())
        )?;
        rows += 1;
    }

    // Section 2: activities
    writeln!(writer, "\n{}", ACTIVITY_HEADER)?;
    for destination in destinations {
        for activity in plan.activities(destination) {
            writeln!(
                writer,
                "{},{}",
                activity.description(),
                format_decimal(activity.price())
            )?;
            rows += 1;
        }
    }

    // Section 3: sites
    writeln!(writer, "\n{}", SITE_HEADER)?;
    for destination in destinations {
        for site in tour.sites(destination) {
            writeln!(
                writer,
                "{},{}",
                site.name(),
                format_decimal(site.distance_from_center())
            )?;
            rows += 1;
        }
    }

    Ok(rows)
}

/// Create (or truncate) `path` and write the export into it
pub fn export_to_path(
    path: &Path,
    destinations: &[Destination],
    plan: &ActivityPlan,
    tour: &SiteTour,
) -> Result<usize> {
    let file = File::create(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to open export file");
        e
    })?;

    let mut writer = BufWriter::new(file);
    let rows = write_csv(&mut writer, destinations, plan, tour)?;
    writer.flush()?;

    tracing::info!(path = %path.display(), rows, "export complete");
    Ok(rows)
}
