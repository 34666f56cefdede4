//! Pricing tier selection.
//!
//! This module resolves which pricing tier a delivery is billed under. The
//! headcount and food-cost brackets are looked up independently and the tier
//! with the lower regular rate wins, biasing conservatively toward not
//! overcharging the customer.

use crate::config::PricingTier;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;
use rust_decimal::Decimal;

/// The result of a tier selection, including the tier and audit step.
#[derive(Debug, Clone)]
pub struct TierSelectionResult {
    /// The selected pricing tier.
    pub tier: PricingTier,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Selects the pricing tier for a delivery.
///
/// The headcount bracket and the food-cost bracket are resolved
/// independently; the tier with the **lower** `regular_rate` is selected
/// (the "lesser of headcount or food cost" rule, with the headcount tier
/// winning ties). A value beyond every bounded bracket falls back to the
/// last (unbounded) tier.
///
/// # Arguments
///
/// * `headcount` - Number of people the order feeds
/// * `food_cost` - Total food cost of the order
/// * `tiers` - The ordered tier table from the client configuration
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns `CalculationError` if the tier table is empty (a configuration
/// that passed validation can never trigger this).
///
/// # Examples
///
/// ```
/// use delivery_engine::calculation::select_tier;
/// use delivery_engine::config::ClientConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ClientConfig::standard();
/// let result = select_tier(30, Decimal::from_str("400").unwrap(), &config.pricing_tiers, 1).unwrap();
/// assert_eq!(result.tier.regular_rate, Decimal::from_str("45.00").unwrap());
/// ```
pub fn select_tier(
    headcount: u32,
    food_cost: Decimal,
    tiers: &[PricingTier],
    step_number: u32,
) -> EngineResult<TierSelectionResult> {
    let last = tiers.last().ok_or_else(|| EngineError::CalculationError {
        message: "configuration has no pricing tiers".to_string(),
    })?;

    let headcount_tier = tiers
        .iter()
        .find(|t| t.contains_headcount(headcount))
        .unwrap_or(last);
    let food_cost_tier = tiers
        .iter()
        .find(|t| t.contains_food_cost(food_cost))
        .unwrap_or(last);

    let (tier, selected_by) = if food_cost_tier.regular_rate < headcount_tier.regular_rate {
        (food_cost_tier, "food_cost")
    } else {
        (headcount_tier, "headcount")
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tier_selection".to_string(),
        rule_name: "Pricing Tier Selection".to_string(),
        input: serde_json::json!({
            "headcount": headcount,
            "food_cost": food_cost.normalize().to_string()
        }),
        output: serde_json::json!({
            "headcount_tier_rate": headcount_tier.regular_rate.normalize().to_string(),
            "food_cost_tier_rate": food_cost_tier.regular_rate.normalize().to_string(),
            "selected_rate": tier.regular_rate.normalize().to_string(),
            "selected_by": selected_by
        }),
        reasoning: format!(
            "Headcount {} maps to ${}, food cost ${} maps to ${}; taking the lesser (${}, by {})",
            headcount,
            headcount_tier.regular_rate.normalize(),
            food_cost.normalize(),
            food_cost_tier.regular_rate.normalize(),
            tier.regular_rate.normalize(),
            selected_by
        ),
    };

    Ok(TierSelectionResult {
        tier: tier.clone(),
        audit_step,
    })
}
