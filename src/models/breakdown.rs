//! Calculation result models for the Delivery Pricing Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs from a delivery calculation: the
//! customer-side charge breakdown, the driver-side payment breakdown,
//! profit figures, and an audit trace of every rule applied.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// The customer-facing charge breakdown for a delivery.
///
/// Field names mirror the persistence API contract exactly. The
/// `headcountCharge` field is carried at zero for wire compatibility and
/// `foodCost` is echoed for display; neither participates in `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCharges {
    /// The flat tier rate for the delivery.
    pub base_fee: Decimal,
    /// Mileage surcharge for miles beyond the distance threshold.
    pub long_distance_charge: Decimal,
    /// Bridge toll charged to the customer, if any.
    pub bridge_toll: Decimal,
    /// Charge for stops beyond the first.
    pub extra_stops_charge: Decimal,
    /// Per-head charge; always zero in the current model.
    pub headcount_charge: Decimal,
    /// Food cost of the order, echoed from the input.
    pub food_cost: Decimal,
    /// Daily-drive discount subtracted from the total.
    pub daily_drive_discount: Decimal,
    /// Vendor-specific line items, echoed from the input.
    pub custom_charges: BTreeMap<String, Decimal>,
    /// Total delivery charge, clamped at zero.
    pub total: Decimal,
}

/// The driver-facing payment breakdown for a drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPayments {
    /// Base pay for the drop.
    pub base_pay: Decimal,
    /// Qualified bonus for the drop; zero when the driver did not qualify.
    pub bonus_pay: Decimal,
    /// Pay for the full mileage driven.
    pub mileage_pay: Decimal,
    /// Bridge toll reimbursed to the driver.
    pub bridge_toll: Decimal,
    /// Bonus for stops beyond the first.
    pub extra_stops_bonus: Decimal,
    /// Tips passed through to the driver.
    pub tips: Decimal,
    /// Manual adjustments (may be negative).
    pub adjustments: Decimal,
    /// Vendor-specific line items, echoed from the input.
    pub custom_payments: BTreeMap<String, Decimal>,
    /// Total driver pay after the labor-portion cap, clamped at zero.
    pub total: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process so that
/// historical calculations remain reproducible and explainable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a delivery calculation.
///
/// Combines the customer and driver breakdowns with profit figures and the
/// audit trace. The breakdowns themselves are pure functions of the input
/// and configuration; only the envelope (id, timestamp, duration) varies
/// between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The configuration the calculation ran against.
    pub configuration_id: Uuid,
    /// The customer-side charge breakdown.
    pub customer_charges: CustomerCharges,
    /// The driver-side payment breakdown.
    pub driver_payments: DriverPayments,
    /// Customer total minus driver total.
    pub profit: Decimal,
    /// Profit as a percentage of the customer total (zero when the total is zero).
    pub profit_margin: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
