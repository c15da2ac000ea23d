//! # tripstore
//!
//! An in-memory ordered trip store with:
//! - Destinations mapped to sorted, deduplicated activities and sites
//! - Snapshot cursors with in-traversal removal
//! - Fail-fast detection of any mutation made outside the cursor
//! - Text reports and delimited-text export
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TripPlanner                             │
//! │              (report / export / registration)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ActivityPlan │          │  SiteTour   │
//!   │(per-key cur)│          │ (all cursor)│
//!   └──────┬──────┘          └──────┬──────┘
//!          └────────────┬────────────┘
//!                       ▼
//!              ┌─────────────────┐
//!              │ GroupedStore<K,V>│──── SnapshotCursor
//!              │ BTreeMap<K, Set> │     (generation stamp)
//!              └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod store;
pub mod trip;
pub mod report;
pub mod export;
pub mod planner;
pub mod sample;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StoreError, Result};
pub use config::Config;
pub use model::{Activity, Destination, Site};
pub use planner::TripPlanner;
pub use store::{GroupedStore, Scope, SnapshotCursor};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of tripstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
