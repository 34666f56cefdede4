//! Profit calculation.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The profit figures for a delivery, including the audit step.
#[derive(Debug, Clone)]
pub struct ProfitResult {
    /// Customer total minus driver total.
    pub profit: Decimal,
    /// Profit as a percentage of the customer total, rounded to two places.
    pub profit_margin: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates profit and margin from the two totals.
///
/// Margin is zero when the customer total is zero so a fully discounted
/// delivery never divides by zero. Profit may be negative when driver pay
/// exceeds the delivery charge.
pub fn calculate_profit(
    customer_total: Decimal,
    driver_total: Decimal,
    step_number: u32,
) -> ProfitResult {
    let profit = customer_total - driver_total;
    let profit_margin = if customer_total.is_zero() {
        Decimal::ZERO
    } else {
        (profit / customer_total * Decimal::ONE_HUNDRED).round_dp(2)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "profit".to_string(),
        rule_name: "Profit".to_string(),
        input: serde_json::json!({
            "customer_total": customer_total.normalize().to_string(),
            "driver_total": driver_total.normalize().to_string()
        }),
        output: serde_json::json!({
            "profit": profit.normalize().to_string(),
            "profit_margin": profit_margin.normalize().to_string()
        }),
        reasoning: format!(
            "${} charged − ${} paid = ${} profit ({}% margin)",
            customer_total.normalize(),
            driver_total.normalize(),
            profit.normalize(),
            profit_margin.normalize()
        ),
    };

    ProfitResult {
        profit,
        profit_margin,
        audit_step,
    }
}
