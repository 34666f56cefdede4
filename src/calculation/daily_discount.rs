//! Daily-drive discount calculation.
//!
//! Clients get a per-drive discount when a driver completes multiple drives
//! in one day. The per-drive amount is looked up from the configuration's
//! discount schedule by the day's drive count, then multiplied by that count.

use rust_decimal::Decimal;

use crate::config::DailyDriveDiscounts;
use crate::models::AuditStep;

/// The result of the daily-drive discount lookup, including the audit step.
#[derive(Debug, Clone)]
pub struct DailyDiscountResult {
    /// Total discount to subtract from the customer total.
    pub discount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Looks up the per-drive discount for a drive count.
///
/// Zero or one drive earns no discount; two and three map to their schedule
/// entries; four or more map to the four-plus entry.
pub fn per_drive_discount(drives_today: u32, discounts: &DailyDriveDiscounts) -> Decimal {
    match drives_today {
        0 | 1 => Decimal::ZERO,
        2 => discounts.two_drivers,
        3 => discounts.three_drivers,
        _ => discounts.four_plus_drivers,
    }
}

/// Calculates the total daily-drive discount.
///
/// The drive count is a separate input (it is operational state about the
/// driver's day, not derivable from the stop count); when absent it defaults
/// to a single drive and no discount.
pub fn calculate_daily_discount(
    drives_today: Option<u32>,
    discounts: &DailyDriveDiscounts,
    step_number: u32,
) -> DailyDiscountResult {
    let drives = drives_today.unwrap_or(1);
    let per_drive = per_drive_discount(drives, discounts);
    let discount = per_drive * Decimal::from(drives);

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_drive_discount".to_string(),
        rule_name: "Daily Drive Discount".to_string(),
        input: serde_json::json!({ "drives_today": drives }),
        output: serde_json::json!({
            "per_drive_discount": per_drive.normalize().to_string(),
            "discount": discount.normalize().to_string()
        }),
        reasoning: if discount.is_zero() {
            format!("{} drive(s) today: no discount", drives)
        } else {
            format!(
                "{} drives today × ${} per drive = ${}",
                drives,
                per_drive.normalize(),
                discount.normalize()
            )
        },
    };

    DailyDiscountResult {
        discount,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn discounts() -> DailyDriveDiscounts {
        DailyDriveDiscounts {
            two_drivers: dec("5.00"),
            three_drivers: dec("7.50"),
            four_plus_drivers: dec("10.00"),
        }
    }

    /// DD-001: single drive, no discount
    #[test]
    fn test_single_drive_no_discount() {
        let result = calculate_daily_discount(Some(1), &discounts(), 1);
        assert_eq!(result.discount, Decimal::ZERO);
    }

    /// DD-002: absent count defaults to no discount
    #[test]
    fn test_absent_count_no_discount() {
        let result = calculate_daily_discount(None, &discounts(), 1);
        assert_eq!(result.discount, Decimal::ZERO);
    }

    /// DD-003: two drives
    #[test]
    fn test_two_drives() {
        let result = calculate_daily_discount(Some(2), &discounts(), 1);
        assert_eq!(result.discount, dec("10.00")); // 2 × 5.00
    }

    /// DD-004: three drives
    #[test]
    fn test_three_drives() {
        let result = calculate_daily_discount(Some(3), &discounts(), 1);
        assert_eq!(result.discount, dec("22.50")); // 3 × 7.50
    }

    /// DD-005: four and more drives use the four-plus entry
    #[test]
    fn test_four_plus_drives() {
        let result = calculate_daily_discount(Some(4), &discounts(), 1);
        assert_eq!(result.discount, dec("40.00")); // 4 × 10.00

        let result = calculate_daily_discount(Some(6), &discounts(), 1);
        assert_eq!(result.discount, dec("60.00")); // 6 × 10.00
    }

    #[test]
    fn test_zero_drives_no_discount() {
        let result = calculate_daily_discount(Some(0), &discounts(), 1);
        assert_eq!(result.discount, Decimal::ZERO);
    }

    #[test]
    fn test_audit_records_per_drive_amount() {
        let result = calculate_daily_discount(Some(3), &discounts(), 5);
        assert_eq!(result.audit_step.step_number, 5);
        assert_eq!(
            result.audit_step.output["per_drive_discount"]
                .as_str()
                .unwrap(),
            "7.5"
        );
    }
}
