//! # desk-reconcile
//!
//! Turns one snapshot of raw collections into the dashboard views.
//!
//! The pipeline is synchronous and rebuilt from scratch every cycle:
//! - [`normalize`]: alias-table field extraction into canonical records
//! - [`matcher`]: guest to room attribution from ranked evidence
//! - [`merger`]: per-room latest state and the activity feed
//! - [`dedup`]: hotel deduplication on a composite key
//! - [`views`]: presentation rows, summary and notices
//!
//! [`build_views`] runs all of it in one call.

pub mod dedup;
pub mod matcher;
pub mod merger;
pub mod normalize;
pub mod snapshot;
pub mod views;

pub use snapshot::SourceSnapshot;
pub use views::{ReconcileOptions, build_views};
