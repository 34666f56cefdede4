//! Core data models for the Delivery Pricing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod history;
mod input;

pub use breakdown::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, CustomerCharges, DriverPayments,
};
pub use history::CalculationRecord;
pub use input::{CalculationInput, max_supported_amount};
