//! Tests for TripPlanner
//!
//! These tests verify:
//! - Destination registration order
//! - Report rendering
//! - Export through the configured path
//! - Configuration validation

use tempfile::TempDir;
use tripstore::config::Config;
use tripstore::error::StoreError;
use tripstore::model::{Activity, Destination, Site};
use tripstore::planner::TripPlanner;
use tripstore::sample;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_planner() -> (TempDir, TripPlanner) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .export_path(temp_dir.path().join("data.csv"))
        .build();
    let planner = sample::demo_planner(config).unwrap();
    (temp_dir, planner)
}

// =============================================================================
// Registration Tests
// =============================================================================

#[test]
fn test_destinations_keep_registration_order() {
    let mut planner = TripPlanner::new(Config::default()).unwrap();
    let rome = sample::rome();
    let paris = sample::paris();

    planner.add_site(rome.clone(), Site::new("Vatican", 3.0));
    planner.add_activity(paris.clone(), Activity::new("Visite du Louvre", 15.0));
    planner.add_activity(rome.clone(), Activity::new("Balade en bateau", 40.0));

    assert_eq!(planner.destinations(), &[rome, paris]);
}

#[test]
fn test_find_destination() {
    let (_temp, planner) = setup_temp_planner();

    let rome = planner.find("Italie", "Rome").unwrap();
    assert_eq!(rome, &sample::rome());

    assert!(matches!(
        planner.find("Italie", "Milan"),
        Err(StoreError::UnknownDestination(_))
    ));
}

// =============================================================================
// Report Tests
// =============================================================================

#[test]
fn test_report_for_rome() {
    let (_temp, planner) = setup_temp_planner();

    let report = planner.report(&sample::rome());

    let expected = "\
Information for destination: Rome
Country: Italie
Trip duration: 7 days
Budget: 1500.0 €

Activities:
Activity{description='Balade en bateau', price=40.0}
Activity{description='Visite du Colisée', price=30.0}

Sites to visit:
Site{name='Colisée', distance=2.5}
Site{name='Vatican', distance=3.0}
";
    assert_eq!(report, expected);
}

#[test]
fn test_report_uses_configured_currency() {
    let config = Config::builder().currency_symbol("EUR").build();
    let planner = sample::demo_planner(config).unwrap();

    let report = planner.report(&sample::paris());

    assert!(report.contains("Budget: 1000.0 EUR\n"));
}

#[test]
fn test_report_prints_large_budget_in_scientific_notation() {
    let mut planner = TripPlanner::new(Config::default()).unwrap();
    let world = Destination::new("Monde", "Partout", 365, 12_000_000.0);
    planner.add_site(world.clone(), Site::new("Everest", 150.5));

    let report = planner.report(&world);

    assert!(report.contains("Budget: 1.2E7 €\n"));
    assert!(report.ends_with("Sites to visit:\nSite{name='Everest', distance=150.5}\n"));
}

#[test]
fn test_report_for_unknown_destination_has_empty_sections() {
    let (_temp, planner) = setup_temp_planner();
    let london = Destination::new("Royaume-Uni", "Londres", 3, 800.0);

    let report = planner.report(&london);

    assert!(report.ends_with("Activities:\n\nSites to visit:\n"));
}

// =============================================================================
// Export Tests
// =============================================================================

#[test]
fn test_export_to_configured_path() {
    let (temp, planner) = setup_temp_planner();

    let rows = planner.export().unwrap();
    let text = std::fs::read_to_string(temp.path().join("data.csv")).unwrap();

    assert_eq!(rows, 9);
    assert!(text.starts_with("Country,City,Duration,Budget\nFrance,Paris,5,1000.0\n"));
}

#[test]
fn test_export_after_cursor_removal() {
    let (temp, mut planner) = setup_temp_planner();
    planner.plan_mut().set_current_destination(Some(sample::paris()));

    {
        let mut cursor = planner.plan().cursor();
        cursor.advance().unwrap();
        cursor.remove_last().unwrap();
    }

    let path = temp.path().join("after.csv");
    let rows = planner.export_to(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();

    assert_eq!(rows, 8);
    assert!(!text.contains("Visite de la Tour Eiffel"));
    assert!(text.contains("Visite du Louvre,15.0"));
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_empty_export_path_is_rejected() {
    let config = Config::builder().export_path("").build();

    assert!(matches!(TripPlanner::new(config), Err(StoreError::Config(_))));
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.export_path, std::path::PathBuf::from("data.csv"));
    assert_eq!(config.currency_symbol, "€");
    assert!(config.validate().is_ok());
}
