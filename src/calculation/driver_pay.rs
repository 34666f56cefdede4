//! Driver-side pay calculation.
//!
//! Composes the driver payment breakdown: base pay, full-mileage pay,
//! qualified bonus, multi-stop bonus, toll reimbursement, tips, manual
//! adjustments, and custom line items. The per-drop maximum caps the labor
//! portion only; reimbursements and pass-throughs sit outside the cap.

use rust_decimal::Decimal;

use crate::calculation::bridge_toll::determine_bridge_toll;
use crate::calculation::extra_stops::calculate_extra_stops;
use crate::config::ClientConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditWarning, CalculationInput, DriverPayments};

/// The driver payment breakdown plus the audit steps that produced it.
#[derive(Debug, Clone)]
pub struct DriverPayResult {
    /// The driver-side payment breakdown.
    pub payments: DriverPayments,
    /// Whether the labor cap reduced the pay.
    pub cap_applied: bool,
    /// Warning emitted when the cap reduced the pay.
    pub warning: Option<AuditWarning>,
    /// Audit steps for every rule applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the full driver-side payment breakdown.
///
/// The labor portion is base pay plus pay for the full mileage driven plus
/// the qualified bonus plus the multi-stop bonus, and is capped at the
/// configured maximum per drop. The bridge toll reimbursement, tips,
/// adjustments, and custom payments are added after the cap; a driver is
/// never shorted a reimbursement because the labor cap was hit. Adjustments
/// may be negative, so the final total is clamped at zero.
///
/// # Errors
///
/// Returns `InvalidInput` if the input fails validation.
pub fn calculate_driver_pay(
    input: &CalculationInput,
    config: &ClientConfig,
) -> EngineResult<DriverPayResult> {
    input.validate()?;

    let pay = &config.driver_pay_settings;
    let mut audit_steps = Vec::new();
    let mut step_number = 1u32;

    let mileage_rate = input.mileage_rate.unwrap_or(config.mileage_rate);
    let mileage_pay = input.mileage * mileage_rate;

    let bonus = if input.bonus_qualified {
        match input.bonus_qualified_percent {
            Some(percent) => pay.bonus_pay * percent / Decimal::ONE_HUNDRED,
            None => pay.bonus_pay,
        }
    } else {
        Decimal::ZERO
    };

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "driver_labor".to_string(),
        rule_name: "Driver Labor Pay".to_string(),
        input: serde_json::json!({
            "mileage": input.mileage.normalize().to_string(),
            "mileage_rate": mileage_rate.normalize().to_string(),
            "bonus_qualified": input.bonus_qualified,
            "bonus_qualified_percent": input
                .bonus_qualified_percent
                .map(|p| p.normalize().to_string())
        }),
        output: serde_json::json!({
            "base_pay": pay.base_pay_per_drop.normalize().to_string(),
            "mileage_pay": mileage_pay.normalize().to_string(),
            "bonus": bonus.normalize().to_string()
        }),
        reasoning: format!(
            "Base ${} + {} miles × ${}/mile = ${} mileage + ${} bonus",
            pay.base_pay_per_drop.normalize(),
            input.mileage.normalize(),
            mileage_rate.normalize(),
            mileage_pay.normalize(),
            bonus.normalize()
        ),
    });
    step_number += 1;

    let stops_result = calculate_extra_stops(input.number_of_stops, step_number);
    let extra_stops_bonus = stops_result.bonus;
    audit_steps.push(stops_result.audit_step);
    step_number += 1;

    let labor = pay.base_pay_per_drop + mileage_pay + bonus + extra_stops_bonus;
    let cap_applied = labor > pay.max_pay_per_drop;
    let capped_labor = if cap_applied {
        pay.max_pay_per_drop
    } else {
        labor
    };

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "labor_cap".to_string(),
        rule_name: "Labor Pay Cap".to_string(),
        input: serde_json::json!({
            "labor": labor.normalize().to_string(),
            "max_pay_per_drop": pay.max_pay_per_drop.normalize().to_string()
        }),
        output: serde_json::json!({
            "capped_labor": capped_labor.normalize().to_string(),
            "cap_applied": cap_applied
        }),
        reasoning: if cap_applied {
            format!(
                "Labor ${} exceeds the ${} per-drop maximum: capped",
                labor.normalize(),
                pay.max_pay_per_drop.normalize()
            )
        } else {
            format!(
                "Labor ${} is within the ${} per-drop maximum",
                labor.normalize(),
                pay.max_pay_per_drop.normalize()
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

    let custom_total: Decimal = input.custom_payments.values().copied().sum();
    let total = (capped_labor + toll_result.toll + input.tips + input.adjustments + custom_total)
        .max(Decimal::ZERO);

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "driver_total".to_string(),
        rule_name: "Driver Total".to_string(),
        input: serde_json::json!({
            "capped_labor": capped_labor.normalize().to_string(),
            "bridge_toll": toll_result.toll.normalize().to_string(),
            "tips": input.tips.normalize().to_string(),
            "adjustments": input.adjustments.normalize().to_string(),
            "custom_payments": custom_total.normalize().to_string()
        }),
        output: serde_json::json!({ "total": total.normalize().to_string() }),
        reasoning: format!(
            "${} labor + ${} toll + ${} tips + ${} adjustments + ${} custom = ${} (floored at zero)",
            capped_labor.normalize(),
            toll_result.toll.normalize(),
            input.tips.normalize(),
            input.adjustments.normalize(),
            custom_total.normalize(),
            total.normalize()
        ),
    });

    let warning = cap_applied.then(|| AuditWarning {
        code: "CAP_APPLIED".to_string(),
        message: format!(
            "Driver labor pay ${} capped at the ${} per-drop maximum",
            labor.normalize(),
            pay.max_pay_per_drop.normalize()
        ),
        severity: "low".to_string(),
    });

    let payments = DriverPayments {
        base_pay: pay.base_pay_per_drop,
        bonus_pay: bonus,
        mileage_pay,
        bridge_toll: toll_result.toll,
        extra_stops_bonus,
        tips: input.tips,
        adjustments: input.adjustments,
        custom_payments: input.custom_payments.clone(),
        total,
    };

    Ok(DriverPayResult {
        payments,
        cap_applied,
        warning,
        audit_steps,
    })
}
