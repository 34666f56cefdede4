//! Configuration management for the Delivery Pricing Engine.
//!
//! This module provides the client configuration data model (pricing tiers,
//! toll and discount settings, driver pay parameters), the preset store,
//! structural validation, and JSON import/export.

mod io;
mod store;
mod types;
mod validate;

pub use io::{clone_configuration, export_configuration, import_configuration};
pub use store::ConfigStore;
pub use types::{
    BridgeTollSettings, ClientConfig, DailyDriveDiscounts, DriverPaySettings, PricingTier,
};
pub use validate::{ValidationReport, validate_configuration};
