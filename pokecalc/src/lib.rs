//! Stat and damage calculations.
//!
//! All calculations are pure functions over caller-owned records and read-only data tables.

extern crate alloc;

pub mod common;
pub mod damage;
pub mod effectiveness;
pub mod state;
pub mod stats;
