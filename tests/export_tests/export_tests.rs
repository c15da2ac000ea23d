//! Export Tests
//!
//! Tests verify:
//! - Section order and headers
//! - Destination order follows the given sequence, buckets their value order
//! - Float rendering
//! - I/O failures surface as errors and leave the stores usable

use tempfile::TempDir;
use tripstore::error::StoreError;
use tripstore::export::{export_to_path, write_csv};
use tripstore::model::{Activity, Destination, Site};
use tripstore::store::Scope;
use tripstore::trip::{ActivityPlan, SiteTour};

// =============================================================================
// Helper Functions
// =============================================================================

fn paris() -> Destination {
    Destination::new("France", "Paris", 5, 1000.0)
}

fn rome() -> Destination {
    Destination::new("Italie", "Rome", 7, 1500.0)
}

fn setup_stores() -> (ActivityPlan, SiteTour) {
    let plan = ActivityPlan::new();
    plan.add_activity(paris(), Activity::new("Visite de la Tour Eiffel", 25.0));
    plan.add_activity(paris(), Activity::new("Visite du Louvre", 15.0));
    plan.add_activity(rome(), Activity::new("Visite du Colisée", 30.0));
    plan.add_activity(rome(), Activity::new("Balade en bateau", 40.0));

    let tour = SiteTour::new();
    tour.add_site(paris(), Site::new("Tour Eiffel", 1.0));
    tour.add_site(rome(), Site::new("Colisée", 2.5));
    tour.add_site(rome(), Site::new("Vatican", 3.0));

    (plan, tour)
}

const EXPECTED: &str = "\
Country,City,Duration,Budget
France,Paris,5,1000.0
Italie,Rome,7,1500.0

Description,Price
Visite de la Tour Eiffel,25.0
Visite du Louvre,15.0
Balade en bateau,40.0
Visite du Colisée,30.0

Name,Distance
Tour Eiffel,1.0
Colisée,2.5
Vatican,3.0
";

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_write_csv_full_layout() {
    let (plan, tour) = setup_stores();
    let mut out = Vec::new();

    let rows = write_csv(&mut out, &[paris(), rome()], &plan, &tour).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
    assert_eq!(rows, 9);
}

#[test]
fn test_write_csv_follows_given_destination_order() {
    let (plan, tour) = setup_stores();
    let mut out = Vec::new();

    write_csv(&mut out, &[rome(), paris()], &plan, &tour).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[1], "Italie,Rome,7,1500.0");
    assert_eq!(lines[2], "France,Paris,5,1000.0");
    assert_eq!(lines[5], "Balade en bateau,40.0");
}

#[test]
fn test_write_csv_with_no_destinations() {
    let (plan, tour) = setup_stores();
    let mut out = Vec::new();

    let rows = write_csv(&mut out, &[], &plan, &tour).unwrap();

    assert_eq!(rows, 0);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Country,City,Duration,Budget\n\nDescription,Price\n\nName,Distance\n"
    );
}

#[test]
fn test_destination_without_entries_still_gets_a_row() {
    let (plan, tour) = setup_stores();
    let london = Destination::new("Royaume-Uni", "Londres", 3, 800.5);
    let mut out = Vec::new();

    let rows = write_csv(&mut out, &[london], &plan, &tour).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(rows, 1);
    assert!(text.contains("Royaume-Uni,Londres,3,800.5\n"));
}

#[test]
fn test_large_and_tiny_numbers_use_scientific_notation() {
    let plan = ActivityPlan::new();
    let tour = SiteTour::new();
    let grand_tour = Destination::new("Monde", "Partout", 365, 25_000_000.0);
    plan.add_activity(grand_tour.clone(), Activity::new("Croisière", 1e7));
    tour.add_site(grand_tour.clone(), Site::new("Borne", 0.0005));
    let mut out = Vec::new();

    write_csv(&mut out, &[grand_tour], &plan, &tour).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Monde,Partout,365,2.5E7\n"));
    assert!(text.contains("Croisière,1.0E7\n"));
    assert!(text.contains("Borne,5.0E-4\n"));
}

// =============================================================================
// File Tests
// =============================================================================

#[test]
fn test_export_to_path_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.csv");
    let (plan, tour) = setup_stores();

    let rows = export_to_path(&path, &[paris(), rome()], &plan, &tour).unwrap();

    assert_eq!(rows, 9);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), EXPECTED);
}

#[test]
fn test_export_to_missing_directory_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("data.csv");
    let (plan, tour) = setup_stores();

    let result = export_to_path(&path, &[paris(), rome()], &plan, &tour);

    assert!(matches!(result, Err(StoreError::Io(_))));
    assert!(!path.exists());
}

#[test]
fn test_stores_usable_after_failed_export() {
    let temp_dir = TempDir::new().unwrap();
    let (plan, tour) = setup_stores();

    let _ = export_to_path(temp_dir.path(), &[paris()], &plan, &tour);

    let mut cursor = tour.store().open_cursor(Scope::All);
    assert!(cursor.advance().is_ok());
    assert_eq!(plan.activities(&paris()).len(), 2);
}

#[test]
fn test_export_does_not_invalidate_cursors() {
    let (plan, tour) = setup_stores();
    let mut cursor = tour.cursor();
    let mut out = Vec::new();

    write_csv(&mut out, &[paris(), rome()], &plan, &tour).unwrap();

    assert!(cursor.advance().is_ok());
}
