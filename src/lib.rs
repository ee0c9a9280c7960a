//! # zonepointer
//! This crate recommends taxi pickup zones from map clicks and weekday/hour time slots.
//!
//! ## Usage
//! The crate works over two precomputed tables: a catalog of cluster centers (one coordinate per zone)
//! and a table of trip counts per zone, weekday, and hour. Both are loaded once and queried read-only.
//!
//! [`recommend::find_nearest`] answers "where is the closest pickup zone to this map click?" and
//! [`recommend::find_busiest`] answers "which zone has the most pickups at this weekday and hour?".
//! Absence of trip data for a slot is an ordinary `None`, not an error.
//!
//! [`datasets`] provides helpers for loading both tables from the CSV files produced upstream.
//! See the demo binary and the `zone_queries` example for full code performing loads and lookups.

pub mod catalog;
pub mod datasets;
pub mod recommend;
