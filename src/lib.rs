//! Budget and HR allowance engine.
//!
//! This crate computes the yearly allowance budget lines of a Thai
//! organisation (long-service travel, family visits, special assistance,
//! company trips, manager rotation, and overtime) from employee records,
//! a master rate table, and the public holiday calendar, and serves the
//! records and calculators over a JSON API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
