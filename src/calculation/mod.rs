//! Calculation logic for the Delivery Pricing Engine.
//!
//! This module contains all the calculation functions for pricing a delivery,
//! including pricing tier selection, the base fee and long-distance mileage
//! surcharge, bridge toll determination, multi-stop surcharges and bonuses,
//! daily-drive discounts, capped driver pay, and profit.

mod bridge_toll;
mod daily_discount;
mod delivery_cost;
mod driver_pay;
mod extra_stops;
mod profit;
mod tier_selection;

pub use bridge_toll::{BridgeTollResult, determine_bridge_toll};
pub use daily_discount::{DailyDiscountResult, calculate_daily_discount, per_drive_discount};
pub use delivery_cost::{DeliveryCostResult, calculate_delivery_cost};
pub use driver_pay::{DriverPayResult, calculate_driver_pay};
pub use extra_stops::{
    ExtraStopsResult, calculate_extra_stops, extra_stop_bonus_rate, extra_stop_charge_rate,
};
pub use profit::{ProfitResult, calculate_profit};
pub use tier_selection::{TierSelectionResult, select_tier};
