//! Bridge toll determination.
//!
//! The toll is applied when the caller flags a bridge crossing or when the
//! delivery area is one the configuration auto-applies the toll for. The same
//! amount is charged to the customer and reimbursed to the driver.

use rust_decimal::Decimal;

use crate::config::BridgeTollSettings;
use crate::models::AuditStep;

/// The result of determining the bridge toll, including the audit step.
#[derive(Debug, Clone)]
pub struct BridgeTollResult {
    /// The toll amount; zero when no toll applies.
    pub toll: Decimal,
    /// Whether a toll was applied.
    pub applied: bool,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Determines whether the bridge toll applies and for how much.
///
/// The toll applies when `requires_bridge` is set OR the delivery area
/// matches one of the configured auto-apply areas. Area matching is
/// explicit: both sides are trimmed and compared ASCII-case-insensitively.
pub fn determine_bridge_toll(
    requires_bridge: bool,
    delivery_area: Option<&str>,
    settings: &BridgeTollSettings,
    step_number: u32,
) -> BridgeTollResult {
    let area_match = delivery_area.is_some_and(|area| {
        settings
            .auto_apply_for_areas
            .iter()
            .any(|candidate| candidate.trim().eq_ignore_ascii_case(area.trim()))
    });

    let applied = requires_bridge || area_match;
    let toll = if applied {
        settings.default_toll_amount
    } else {
        Decimal::ZERO
    };

    let reasoning = if requires_bridge {
        format!("Bridge crossing requested: toll ${}", toll.normalize())
    } else if area_match {
        format!(
            "Delivery area '{}' auto-applies the toll: ${}",
            delivery_area.unwrap_or_default().trim(),
            toll.normalize()
        )
    } else {
        "No bridge crossing and no auto-apply area match".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "bridge_toll".to_string(),
        rule_name: "Bridge Toll".to_string(),
        input: serde_json::json!({
            "requires_bridge": requires_bridge,
            "delivery_area": delivery_area,
            "auto_apply_for_areas": settings.auto_apply_for_areas
        }),
        output: serde_json::json!({
            "applied": applied,
            "toll": toll.normalize().to_string()
        }),
        reasoning,
    };

    BridgeTollResult {
        toll,
        applied,
        audit_step,
    }
}
