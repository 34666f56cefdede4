//! Customer-side delivery cost calculation.
//!
//! Composes the individual pricing rules into the full customer charge
//! breakdown: tier base fee, long-distance mileage surcharge, bridge toll,
//! multi-stop surcharge, custom line items, and the daily-drive discount.

use rust_decimal::Decimal;

use crate::calculation::bridge_toll::determine_bridge_toll;
use crate::calculation::daily_discount::calculate_daily_discount;
use crate::calculation::extra_stops::calculate_extra_stops;
use crate::calculation::tier_selection::select_tier;
use crate::config::ClientConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, CalculationInput, CustomerCharges};

/// The customer charge breakdown plus the audit steps that produced it.
#[derive(Debug, Clone)]
pub struct DeliveryCostResult {
    /// The customer-side charge breakdown.
    pub charges: CustomerCharges,
    /// Audit steps for every rule applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the full customer-side charge breakdown.
///
/// The base fee comes from the selected pricing tier: the within-threshold
/// rate when the mileage is at or below the distance threshold, otherwise
/// the regular rate plus a per-mile surcharge on the miles beyond the
/// threshold. A per-request mileage rate override takes precedence over the
/// configured rate. The total is clamped at zero so a large discount can
/// never produce a negative invoice.
///
/// # Errors
///
/// Returns `InvalidInput` if the input fails validation and
/// `CalculationError` if the configuration has no pricing tiers.
pub fn calculate_delivery_cost(
    input: &CalculationInput,
    config: &ClientConfig,
) -> EngineResult<DeliveryCostResult> {
    input.validate()?;

    let mut audit_steps = Vec::new();
    let mut step_number = 1u32;

    let tier_result = select_tier(input.headcount, input.food_cost, &config.pricing_tiers, step_number)?;
    audit_steps.push(tier_result.audit_step);
    step_number += 1;

    let over_threshold = input.mileage > config.distance_threshold;
    let base_fee = if over_threshold {
        tier_result.tier.regular_rate
    } else {
        tier_result.tier.within_ten_miles
    };

    let mileage_rate = input.mileage_rate.unwrap_or(config.mileage_rate);
    let long_distance_charge = if over_threshold {
        (input.mileage - config.distance_threshold) * mileage_rate
    } else {
        Decimal::ZERO
    };

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "base_fee_and_mileage".to_string(),
        rule_name: "Base Fee and Mileage Surcharge".to_string(),
        input: serde_json::json!({
            "mileage": input.mileage.normalize().to_string(),
            "distance_threshold": config.distance_threshold.normalize().to_string(),
            "mileage_rate": mileage_rate.normalize().to_string(),
            "rate_overridden": input.mileage_rate.is_some()
        }),
        output: serde_json::json!({
            "base_fee": base_fee.normalize().to_string(),
            "long_distance_charge": long_distance_charge.normalize().to_string()
        }),
        reasoning: if over_threshold {
            format!(
                "{} miles exceeds the {}-mile threshold: regular rate ${} plus {} extra miles × ${}/mile = ${}",
                input.mileage.normalize(),
                config.distance_threshold.normalize(),
                base_fee.normalize(),
                (input.mileage - config.distance_threshold).normalize(),
                mileage_rate.normalize(),
                long_distance_charge.normalize()
            )
        } else {
            format!(
                "{} miles is within the {}-mile threshold: flat rate ${}",
                input.mileage.normalize(),
                config.distance_threshold.normalize(),
                base_fee.normalize()
            )
        },
    });
    step_number += 1;

    let toll_result = determine_bridge_toll(
        input.requires_bridge,
        input.delivery_area.as_deref(),
        &config.bridge_toll_settings,
        step_number,
    );
    audit_steps.push(toll_result.audit_step);
    step_number += 1;

    let stops_result = calculate_extra_stops(input.number_of_stops, step_number);
    let extra_stops_charge = stops_result.charge;
    audit_steps.push(stops_result.audit_step);
    step_number += 1;

    let discount_result =
        calculate_daily_discount(input.drives_today, &config.daily_drive_discounts, step_number);
    audit_steps.push(discount_result.audit_step);
    step_number += 1;

    let custom_total: Decimal = input.custom_charges.values().copied().sum();

    // Food cost is echoed for display but the client pays the caterer for it
    // directly, so it never enters the delivery total.
    let gross = base_fee
        + long_distance_charge
        + toll_result.toll
        + extra_stops_charge
        + custom_total;
    let total = (gross - discount_result.discount).max(Decimal::ZERO);

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "customer_total".to_string(),
        rule_name: "Customer Total".to_string(),
        input: serde_json::json!({
            "base_fee": base_fee.normalize().to_string(),
            "long_distance_charge": long_distance_charge.normalize().to_string(),
            "bridge_toll": toll_result.toll.normalize().to_string(),
            "extra_stops_charge": extra_stops_charge.normalize().to_string(),
            "custom_charges": custom_total.normalize().to_string(),
            "daily_drive_discount": discount_result.discount.normalize().to_string()
        }),
        output: serde_json::json!({ "total": total.normalize().to_string() }),
        reasoning: format!(
            "${} charges − ${} discount = ${} (floored at zero)",
            gross.normalize(),
            discount_result.discount.normalize(),
            total.normalize()
        ),
    });

    let charges = CustomerCharges {
        base_fee,
        long_distance_charge,
        bridge_toll: toll_result.toll,
        extra_stops_charge,
        headcount_charge: Decimal::ZERO,
        food_cost: input.food_cost,
        daily_drive_discount: discount_result.discount,
        custom_charges: input.custom_charges.clone(),
        total,
    };

    Ok(DeliveryCostResult {
        charges,
        audit_steps,
    })
}
