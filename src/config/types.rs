//! Configuration types for the Delivery Pricing Engine.
//!
//! This module contains the strongly-typed client configuration structures.
//! Configurations are named presets selectable per client/vendor; field names
//! serialize in camelCase to match the persistence API contract.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single pricing bracket row.
///
/// A tier matches a headcount range and a food-cost range and maps them to a
/// flat delivery rate. Bracket semantics are inclusive-minimum and
/// exclusive-maximum; a `None` maximum means the bracket is unbounded above.
/// Tiers are kept non-overlapping and ordered by ascending minimums, with the
/// last tier unbounded on both axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    /// Lowest headcount this tier applies to (inclusive).
    pub headcount_min: u32,
    /// Headcount upper bound (exclusive); `None` means unbounded.
    #[serde(default)]
    pub headcount_max: Option<u32>,
    /// Lowest food cost this tier applies to (inclusive).
    pub food_cost_min: Decimal,
    /// Food-cost upper bound (exclusive); `None` means unbounded.
    #[serde(default)]
    pub food_cost_max: Option<Decimal>,
    /// Rate when mileage exceeds the distance threshold.
    pub regular_rate: Decimal,
    /// Rate when mileage is at or below the distance threshold.
    #[serde(rename = "within10Miles")]
    pub within_ten_miles: Decimal,
}

impl PricingTier {
    /// Whether this tier's headcount bracket contains `headcount`.
    pub fn contains_headcount(&self, headcount: u32) -> bool {
        headcount >= self.headcount_min && self.headcount_max.is_none_or(|max| headcount < max)
    }

    /// Whether this tier's food-cost bracket contains `food_cost`.
    pub fn contains_food_cost(&self, food_cost: Decimal) -> bool {
        food_cost >= self.food_cost_min && self.food_cost_max.is_none_or(|max| food_cost < max)
    }
}

/// Bridge toll settings for a client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeTollSettings {
    /// The toll amount applied when a bridge crossing is required.
    pub default_toll_amount: Decimal,
    /// Delivery areas for which the toll is applied automatically.
    #[serde(default)]
    pub auto_apply_for_areas: Vec<String>,
}

/// Per-drive discount schedule keyed by the number of drives in a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDriveDiscounts {
    /// Discount per drive when the driver completes two drives in a day.
    pub two_drivers: Decimal,
    /// Discount per drive when the driver completes three drives in a day.
    pub three_drivers: Decimal,
    /// Discount per drive when the driver completes four or more drives in a day.
    pub four_plus_drivers: Decimal,
}

/// Driver compensation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPaySettings {
    /// Flat base pay per completed drop.
    pub base_pay_per_drop: Decimal,
    /// Maximum labor pay per drop; tips and reimbursements sit outside the cap.
    pub max_pay_per_drop: Decimal,
    /// Bonus amount for bonus-qualified drops.
    pub bonus_pay: Decimal,
    /// Platform fee per delivery; retained for configuration compatibility,
    /// not part of any pay formula.
    pub ready_set_fee: Decimal,
}

/// A complete named client/vendor delivery configuration.
///
/// Configurations are created and edited through the management UI, persisted
/// externally, and loaded by id; the active configuration is the default used
/// when a calculation names none explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Unique identifier for the configuration.
    pub id: Uuid,
    /// The client this configuration belongs to.
    pub client_name: String,
    /// The vendor fulfilling orders under this configuration.
    pub vendor_name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Whether this is the default configuration.
    #[serde(default)]
    pub is_active: bool,
    /// Dollars per mile beyond the distance threshold.
    pub mileage_rate: Decimal,
    /// Miles bundled into the within-threshold flat rate.
    pub distance_threshold: Decimal,
    /// Bridge toll settings.
    pub bridge_toll_settings: BridgeTollSettings,
    /// Daily-drive discount schedule.
    pub daily_drive_discounts: DailyDriveDiscounts,
    /// Driver compensation parameters.
    pub driver_pay_settings: DriverPaySettings,
    /// Ordered pricing tier table.
    pub pricing_tiers: Vec<PricingTier>,
    /// When the configuration was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the configuration was last modified.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ClientConfig {
    /// Returns the built-in standard configuration.
    ///
    /// Used as the fallback whenever no preset directory is available, so a
    /// calculation can always run (configuration load failures are recoverable
    /// by falling back to this default).
    pub fn standard() -> Self {
        fn dec(units: i64, scale: u32) -> Decimal {
            Decimal::new(units, scale)
        }

        Self {
            id: Uuid::new_v4(),
            client_name: "Standard".to_string(),
            vendor_name: "Ready Set".to_string(),
            description: "Default tiered delivery pricing".to_string(),
            is_active: true,
            mileage_rate: dec(70, 2),
            distance_threshold: dec(10, 0),
            bridge_toll_settings: BridgeTollSettings {
                default_toll_amount: dec(800, 2),
                auto_apply_for_areas: vec!["San Francisco".to_string(), "Marin".to_string()],
            },
            daily_drive_discounts: DailyDriveDiscounts {
                two_drivers: dec(500, 2),
                three_drivers: dec(750, 2),
                four_plus_drivers: dec(1000, 2),
            },
            driver_pay_settings: DriverPaySettings {
                base_pay_per_drop: dec(2000, 2),
                max_pay_per_drop: dec(4000, 2),
                bonus_pay: dec(500, 2),
                ready_set_fee: dec(350, 2),
            },
            pricing_tiers: vec![
                PricingTier {
                    headcount_min: 0,
                    headcount_max: Some(25),
                    food_cost_min: dec(0, 0),
                    food_cost_max: Some(dec(300, 0)),
                    regular_rate: dec(3500, 2),
                    within_ten_miles: dec(2500, 2),
                },
                PricingTier {
                    headcount_min: 25,
                    headcount_max: Some(50),
                    food_cost_min: dec(300, 0),
                    food_cost_max: Some(dec(600, 0)),
                    regular_rate: dec(4500, 2),
                    within_ten_miles: dec(3500, 2),
                },
                PricingTier {
                    headcount_min: 50,
                    headcount_max: Some(75),
                    food_cost_min: dec(600, 0),
                    food_cost_max: Some(dec(900, 0)),
                    regular_rate: dec(5500, 2),
                    within_ten_miles: dec(4500, 2),
                },
                PricingTier {
                    headcount_min: 75,
                    headcount_max: Some(100),
                    food_cost_min: dec(900, 0),
                    food_cost_max: Some(dec(1200, 0)),
                    regular_rate: dec(6500, 2),
                    within_ten_miles: dec(5500, 2),
                },
                PricingTier {
                    headcount_min: 100,
                    headcount_max: None,
                    food_cost_min: dec(1200, 0),
                    food_cost_max: None,
                    regular_rate: dec(7500, 2),
                    within_ten_miles: dec(6500, 2),
                },
            ],
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_tier_bracket_inclusive_min_exclusive_max() {
        let tier = PricingTier {
            headcount_min: 25,
            headcount_max: Some(50),
            food_cost_min: dec("300"),
            food_cost_max: Some(dec("600")),
            regular_rate: dec("45.00"),
            within_ten_miles: dec("35.00"),
        };

        assert!(tier.contains_headcount(25));
        assert!(tier.contains_headcount(49));
        assert!(!tier.contains_headcount(50));
        assert!(!tier.contains_headcount(24));

        assert!(tier.contains_food_cost(dec("300")));
        assert!(tier.contains_food_cost(dec("599.99")));
        assert!(!tier.contains_food_cost(dec("600")));
    }

    #[test]
    fn test_unbounded_tier_contains_large_values() {
        let tier = PricingTier {
            headcount_min: 100,
            headcount_max: None,
            food_cost_min: dec("1200"),
            food_cost_max: None,
            regular_rate: dec("75.00"),
            within_ten_miles: dec("65.00"),
        };

        assert!(tier.contains_headcount(100));
        assert!(tier.contains_headcount(10_000));
        assert!(tier.contains_food_cost(dec("999999.99")));
        assert!(!tier.contains_food_cost(dec("1199.99")));
    }

    #[test]
    fn test_standard_config_tiers_cover_from_zero() {
        let config = ClientConfig::standard();
        let first = &config.pricing_tiers[0];
        assert_eq!(first.headcount_min, 0);
        assert_eq!(first.food_cost_min, Decimal::ZERO);
        let last = config.pricing_tiers.last().unwrap();
        assert!(last.headcount_max.is_none());
        assert!(last.food_cost_max.is_none());
    }

    #[test]
    fn test_tier_serializes_with_wire_field_names() {
        let tier = ClientConfig::standard().pricing_tiers[0].clone();
        let json = serde_json::to_string(&tier).unwrap();
        assert!(json.contains("\"headcountMin\":0"));
        assert!(json.contains("\"headcountMax\":25"));
        assert!(json.contains("\"foodCostMin\":\"0\""));
        assert!(json.contains("\"regularRate\":\"35.00\""));
        assert!(json.contains("\"within10Miles\":\"25.00\""));
    }

    #[test]
    fn test_config_serializes_with_wire_field_names() {
        let config = ClientConfig::standard();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"clientName\":\"Standard\""));
        assert!(json.contains("\"isActive\":true"));
        assert!(json.contains("\"mileageRate\":\"0.70\""));
        assert!(json.contains("\"distanceThreshold\":\"10\""));
        assert!(json.contains("\"defaultTollAmount\":\"8.00\""));
        assert!(json.contains("\"autoApplyForAreas\""));
        assert!(json.contains("\"twoDrivers\":\"5.00\""));
        assert!(json.contains("\"fourPlusDrivers\":\"10.00\""));
        assert!(json.contains("\"basePayPerDrop\":\"20.00\""));
        assert!(json.contains("\"maxPayPerDrop\":\"40.00\""));
        assert!(json.contains("\"readySetFee\":\"3.50\""));
        assert!(json.contains("\"pricingTiers\":["));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = ClientConfig::standard();
        let json = serde_json::to_string(&config).unwrap();
        let back: ClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_tier_deserializes_null_max_as_unbounded() {
        let json = r#"{
            "headcountMin": 100,
            "headcountMax": null,
            "foodCostMin": "1200",
            "foodCostMax": null,
            "regularRate": "75.00",
            "within10Miles": "65.00"
        }"#;

        let tier: PricingTier = serde_json::from_str(json).unwrap();
        assert!(tier.headcount_max.is_none());
        assert!(tier.food_cost_max.is_none());
    }
}
