//! Structural validation for client configurations.
//!
//! Validation collects every violation found rather than failing fast; the
//! accumulated messages are surfaced to the user and block saving an invalid
//! configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::ClientConfig;
use crate::models::max_supported_amount;

/// The outcome of validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Whether the configuration passed every check.
    pub valid: bool,
    /// Human-readable descriptions of every violation found.
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validates a client configuration, returning all violations found.
///
/// Checks performed:
/// - the tier table is non-empty, starts at zero on both axes, has no gaps
///   or overlaps (each tier's minimum equals the previous tier's maximum),
///   has no empty brackets (each bounded maximum exceeds its minimum),
///   and ends with a tier unbounded on both axes
/// - every monetary field is non-negative and within the maximum supported
///   amount
/// - `maxPayPerDrop >= basePayPerDrop`
/// - `distanceThreshold > 0`
///
/// # Example
///
/// ```
/// use delivery_engine::config::{validate_configuration, ClientConfig};
///
/// let report = validate_configuration(&ClientConfig::standard());
/// assert!(report.valid);
/// assert!(report.errors.is_empty());
/// ```
pub fn validate_configuration(config: &ClientConfig) -> ValidationReport {
    let mut errors = Vec::new();

    validate_tiers(config, &mut errors);
    validate_rates(config, &mut errors);
    validate_driver_pay(config, &mut errors);

    ValidationReport::from_errors(errors)
}

fn validate_tiers(config: &ClientConfig, errors: &mut Vec<String>) {
    let tiers = &config.pricing_tiers;

    if tiers.is_empty() {
        errors.push("pricing tiers must not be empty".to_string());
        return;
    }

    let first = &tiers[0];
    if first.headcount_min != 0 {
        errors.push(format!(
            "first tier must start at headcount 0, starts at {}",
            first.headcount_min
        ));
    }
    if first.food_cost_min != Decimal::ZERO {
        errors.push(format!(
            "first tier must start at food cost 0, starts at {}",
            first.food_cost_min
        ));
    }

    for (index, pair) in tiers.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);

        match prev.headcount_max {
            Some(max) if max == next.headcount_min => {}
            Some(max) => errors.push(format!(
                "headcount gap or overlap between tier {} (max {}) and tier {} (min {})",
                index,
                max,
                index + 1,
                next.headcount_min
            )),
            None => errors.push(format!(
                "tier {} has unbounded headcount but is not the last tier",
                index
            )),
        }

        match prev.food_cost_max {
            Some(max) if max == next.food_cost_min => {}
            Some(max) => errors.push(format!(
                "food cost gap or overlap between tier {} (max {}) and tier {} (min {})",
                index,
                max,
                index + 1,
                next.food_cost_min
            )),
            None => errors.push(format!(
                "tier {} has unbounded food cost but is not the last tier",
                index
            )),
        }
    }

    if let Some(last) = tiers.last() {
        if last.headcount_max.is_some() {
            errors.push("last tier must have an unbounded headcount maximum".to_string());
        }
        if last.food_cost_max.is_some() {
            errors.push("last tier must have an unbounded food cost maximum".to_string());
        }
    }

    let max = max_supported_amount();
    for (index, tier) in tiers.iter().enumerate() {
        if tier.regular_rate < Decimal::ZERO {
            errors.push(format!("tier {} regularRate must not be negative", index));
        }
        if tier.within_ten_miles < Decimal::ZERO {
            errors.push(format!("tier {} within10Miles must not be negative", index));
        }
        if tier.food_cost_min < Decimal::ZERO {
            errors.push(format!("tier {} foodCostMin must not be negative", index));
        }
        if tier.regular_rate > max || tier.within_ten_miles > max {
            errors.push(format!(
                "tier {} rates exceed the maximum supported amount",
                index
            ));
        }
        if tier.headcount_max.is_some_and(|max| max <= tier.headcount_min) {
            errors.push(format!(
                "tier {} headcountMax must be greater than headcountMin",
                index
            ));
        }
        if tier.food_cost_max.is_some_and(|max| max <= tier.food_cost_min) {
            errors.push(format!(
                "tier {} foodCostMax must be greater than foodCostMin",
                index
            ));
        }
    }
}

fn validate_rates(config: &ClientConfig, errors: &mut Vec<String>) {
    let max = max_supported_amount();

    if config.mileage_rate < Decimal::ZERO {
        errors.push("mileageRate must not be negative".to_string());
    }
    if config.mileage_rate > max {
        errors.push("mileageRate exceeds the maximum supported amount".to_string());
    }
    if config.distance_threshold <= Decimal::ZERO {
        errors.push("distanceThreshold must be greater than zero".to_string());
    }
    if config.distance_threshold > max {
        errors.push("distanceThreshold exceeds the maximum supported amount".to_string());
    }
    if config.bridge_toll_settings.default_toll_amount < Decimal::ZERO {
        errors.push("defaultTollAmount must not be negative".to_string());
    }
    if config.bridge_toll_settings.default_toll_amount > max {
        errors.push("defaultTollAmount exceeds the maximum supported amount".to_string());
    }

    let discounts = &config.daily_drive_discounts;
    for (name, amount) in [
        ("twoDrivers", discounts.two_drivers),
        ("threeDrivers", discounts.three_drivers),
        ("fourPlusDrivers", discounts.four_plus_drivers),
    ] {
        if amount < Decimal::ZERO {
            errors.push(format!("dailyDriveDiscounts.{} must not be negative", name));
        }
        if amount > max {
            errors.push(format!(
                "dailyDriveDiscounts.{} exceeds the maximum supported amount",
                name
            ));
        }
    }
}

fn validate_driver_pay(config: &ClientConfig, errors: &mut Vec<String>) {
    let pay = &config.driver_pay_settings;

    let max = max_supported_amount();
    for (name, amount) in [
        ("basePayPerDrop", pay.base_pay_per_drop),
        ("maxPayPerDrop", pay.max_pay_per_drop),
        ("bonusPay", pay.bonus_pay),
        ("readySetFee", pay.ready_set_fee),
    ] {
        if amount < Decimal::ZERO {
            errors.push(format!("driverPaySettings.{} must not be negative", name));
        }
        if amount > max {
            errors.push(format!(
                "driverPaySettings.{} exceeds the maximum supported amount",
                name
            ));
        }
    }

    if pay.max_pay_per_drop < pay.base_pay_per_drop {
        errors.push(format!(
            "maxPayPerDrop ({}) must be at least basePayPerDrop ({})",
            pay.max_pay_per_drop, pay.base_pay_per_drop
        ));
    }
}
