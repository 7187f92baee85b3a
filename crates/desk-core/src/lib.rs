//! # desk-core
//!
//! Core types shared across all Frontdesk crates.
//!
//! This crate provides:
//! - The untyped [`entities::RawRecord`] wrapper every source delivers
//! - Canonical entity structs produced by the field normalizer (rooms, guests,
//!   reservations, activity events, hotels)
//! - Status and kind enums with their string forms
//! - Presentation-ready view rows bound directly by the dashboard
//! - The explicit [`session::SessionContext`] passed into each reconciliation cycle
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod session;
pub mod views;
