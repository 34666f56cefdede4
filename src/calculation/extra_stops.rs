//! Multi-stop surcharge and bonus calculation.
//!
//! Every stop beyond the first adds a flat charge on the customer side and a
//! smaller flat bonus on the driver side.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Returns the customer charge per stop beyond the first ($5.00).
pub fn extra_stop_charge_rate() -> Decimal {
    Decimal::new(500, 2)
}

/// Returns the driver bonus per stop beyond the first ($2.50).
pub fn extra_stop_bonus_rate() -> Decimal {
    Decimal::new(250, 2)
}

/// The result of the multi-stop calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ExtraStopsResult {
    /// Customer-side surcharge for stops beyond the first.
    pub charge: Decimal,
    /// Driver-side bonus for stops beyond the first.
    pub bonus: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the multi-stop surcharge and bonus.
///
/// Both scale linearly in the number of stops beyond the first: a single-stop
/// delivery yields zero on both sides.
///
/// # Examples
///
/// ```
/// use delivery_engine::calculation::calculate_extra_stops;
/// use rust_decimal::Decimal;
///
/// let result = calculate_extra_stops(3, 1);
/// assert_eq!(result.charge, Decimal::new(1000, 2));
/// assert_eq!(result.bonus, Decimal::new(500, 2));
/// ```
pub fn calculate_extra_stops(number_of_stops: u32, step_number: u32) -> ExtraStopsResult {
    let extra_stops = number_of_stops.saturating_sub(1);
    let units = Decimal::from(extra_stops);
    let charge = units * extra_stop_charge_rate();
    let bonus = units * extra_stop_bonus_rate();

    let audit_step = AuditStep {
        step_number,
        rule_id: "extra_stops".to_string(),
        rule_name: "Extra Stops".to_string(),
        input: serde_json::json!({ "number_of_stops": number_of_stops }),
        output: serde_json::json!({
            "extra_stops": extra_stops,
            "charge": charge.normalize().to_string(),
            "bonus": bonus.normalize().to_string()
        }),
        reasoning: format!(
            "{} extra stop(s) × ${} charge / ${} bonus",
            extra_stops,
            extra_stop_charge_rate().normalize(),
            extra_stop_bonus_rate().normalize()
        ),
    };

    ExtraStopsResult {
        charge,
        bonus,
        audit_step,
    }
}
