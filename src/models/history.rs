//! Saved calculation history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CalculationInput, CalculationResult};

/// A calculation the user explicitly chose to save.
///
/// Results are derived data and are only persisted when saved; the record
/// keeps the original input alongside the result so the calculation can be
/// re-run and audited later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    /// Unique identifier for the saved record.
    pub id: Uuid,
    /// When the record was saved.
    pub timestamp: DateTime<Utc>,
    /// The configuration the calculation ran against.
    pub configuration_id: Uuid,
    /// The input the calculation was run with.
    pub input: CalculationInput,
    /// The full calculation result.
    pub result: CalculationResult,
}
