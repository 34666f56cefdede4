//! Request types for the Delivery Pricing Engine API.
//!
//! This module defines the JSON request structures for the calculator
//! endpoints. Field names follow the persistence API contract (camelCase).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CalculationInput, CalculationResult};

/// Request body for the `/api/calculator/calculate` endpoint.
///
/// Names the configuration to price against; when absent, the active
/// configuration is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// The per-delivery calculation input.
    pub input: CalculationInput,
    /// The configuration to run against; `None` selects the active one.
    #[serde(default)]
    pub configuration_id: Option<Uuid>,
}

/// Request body for the `/api/calculator/save` endpoint.
///
/// Carries a previously computed result back for explicit persistence; the
/// server assigns the record id and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCalculationRequest {
    /// The configuration the calculation ran against.
    pub configuration_id: Uuid,
    /// The input the calculation was run with.
    pub input: CalculationInput,
    /// The full calculation result to save.
    pub result: CalculationResult,
}
