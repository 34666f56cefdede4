//! Calculation input model for the Delivery Pricing Engine.
//!
//! This module contains the [`CalculationInput`] type that carries all
//! per-delivery figures a calculation is run against. Inputs are transient:
//! one is constructed per calculation request and never persisted on its own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};

/// The largest monetary, rate, or mileage figure the engine accepts.
///
/// Every decimal input and configuration amount is bounded here so the
/// arithmetic downstream stays far from `Decimal`'s overflow range; values
/// beyond the bound are rejected as input or validation errors, never
/// carried into a calculation.
pub fn max_supported_amount() -> Decimal {
    Decimal::from(10_000_000)
}

/// The per-delivery input to both the delivery-cost and driver-pay calculators.
///
/// Field names serialize in camelCase to match the persistence API contract.
/// Headcount and stop counts are unsigned by construction, so negative values
/// are rejected at the deserialization boundary; the remaining numeric fields
/// are checked by [`CalculationInput::validate`].
///
/// # Example
///
/// ```
/// use delivery_engine::models::CalculationInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = CalculationInput {
///     headcount: 30,
///     food_cost: Decimal::from_str("400.00").unwrap(),
///     mileage: Decimal::from_str("15.0").unwrap(),
///     requires_bridge: false,
///     number_of_stops: 2,
///     ..CalculationInput::default()
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    /// Number of people the order feeds.
    pub headcount: u32,
    /// Total food cost of the order.
    pub food_cost: Decimal,
    /// Total miles driven for the delivery.
    pub mileage: Decimal,
    /// Whether the route crosses a tolled bridge.
    #[serde(default)]
    pub requires_bridge: bool,
    /// Number of stops on the delivery, including the final drop.
    pub number_of_stops: u32,
    /// Tips received by the driver.
    #[serde(default)]
    pub tips: Decimal,
    /// Manual pay adjustments (may be negative for corrections).
    #[serde(default)]
    pub adjustments: Decimal,
    /// Per-delivery override for the configured mileage rate.
    #[serde(default)]
    pub mileage_rate: Option<Decimal>,
    /// Delivery area name, matched against toll auto-apply areas.
    #[serde(default)]
    pub delivery_area: Option<String>,
    /// How many drives the driver has completed today, this one included.
    /// Absent counts as a single drive (no daily-drive discount).
    #[serde(default)]
    pub drives_today: Option<u32>,
    /// Whether the driver met the bonus criteria for this drop.
    #[serde(default)]
    pub bonus_qualified: bool,
    /// Optional bonus scaling percentage (0-100); absent means 100.
    #[serde(default)]
    pub bonus_qualified_percent: Option<Decimal>,
    /// Vendor-specific customer line items (key to non-negative amount).
    #[serde(default)]
    pub custom_charges: BTreeMap<String, Decimal>,
    /// Vendor-specific driver line items (key to non-negative amount).
    #[serde(default)]
    pub custom_payments: BTreeMap<String, Decimal>,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            headcount: 0,
            food_cost: Decimal::ZERO,
            mileage: Decimal::ZERO,
            requires_bridge: false,
            number_of_stops: 1,
            tips: Decimal::ZERO,
            adjustments: Decimal::ZERO,
            mileage_rate: None,
            delivery_area: None,
            drives_today: None,
            bonus_qualified: false,
            bonus_qualified_percent: None,
            custom_charges: BTreeMap::new(),
            custom_payments: BTreeMap::new(),
        }
    }
}

impl CalculationInput {
    /// Checks that every numeric field is inside its domain.
    ///
    /// Out-of-domain values abort the calculation with an [`EngineError::InvalidInput`]
    /// naming the offending field; values are never silently clamped. The
    /// domain is bounded on both sides: negative amounts are rejected, and so
    /// are amounts beyond [`max_supported_amount`], which keeps the decimal
    /// arithmetic in the calculators from ever overflowing.
    pub fn validate(&self) -> EngineResult<()> {
        let max = max_supported_amount();

        if self.food_cost < Decimal::ZERO {
            return Err(invalid("foodCost", "must not be negative"));
        }
        if self.food_cost > max {
            return Err(invalid("foodCost", "exceeds the maximum supported amount"));
        }
        if self.mileage < Decimal::ZERO {
            return Err(invalid("mileage", "must not be negative"));
        }
        if self.mileage > max {
            return Err(invalid("mileage", "exceeds the maximum supported amount"));
        }
        if self.number_of_stops == 0 {
            return Err(invalid("numberOfStops", "must be at least 1"));
        }
        if self.tips < Decimal::ZERO {
            return Err(invalid("tips", "must not be negative"));
        }
        if self.tips > max {
            return Err(invalid("tips", "exceeds the maximum supported amount"));
        }
        if self.adjustments.abs() > max {
            return Err(invalid("adjustments", "exceeds the maximum supported amount"));
        }
        if let Some(rate) = self.mileage_rate {
            if rate < Decimal::ZERO {
                return Err(invalid("mileageRate", "must not be negative"));
            }
            if rate > max {
                return Err(invalid("mileageRate", "exceeds the maximum supported amount"));
            }
        }
        if let Some(percent) = self.bonus_qualified_percent {
            if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
                return Err(invalid("bonusQualifiedPercent", "must be between 0 and 100"));
            }
        }
        for (key, amount) in &self.custom_charges {
            if *amount < Decimal::ZERO {
                return Err(invalid(
                    &format!("customCharges.{key}"),
                    "must not be negative",
                ));
            }
            if *amount > max {
                return Err(invalid(
                    &format!("customCharges.{key}"),
                    "exceeds the maximum supported amount",
                ));
            }
        }
        for (key, amount) in &self.custom_payments {
            if *amount < Decimal::ZERO {
                return Err(invalid(
                    &format!("customPayments.{key}"),
                    "must not be negative",
                ));
            }
            if *amount > max {
                return Err(invalid(
                    &format!("customPayments.{key}"),
                    "exceeds the maximum supported amount",
                ));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message: message.to_string(),
    }
}
