//! Delivery Pricing Engine for catering logistics
//!
//! This crate provides the delivery-cost and driver-pay calculation model used by
//! the dispatch platform: tiered pricing by headcount/food cost, mileage surcharges,
//! bridge tolls, multi-stop charges, daily-drive discounts, and capped driver pay.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod policy;
