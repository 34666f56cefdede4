//! Configuration import, export, and cloning.
//!
//! Configurations travel as JSON documents whose field names match the
//! persistence API exactly, so an exported file can be re-imported here or
//! uploaded through the management UI interchangeably.

use chrono::Utc;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::types::ClientConfig;
use super::validate::validate_configuration;

/// Serializes a configuration to a pretty-printed JSON document.
pub fn export_configuration(config: &ClientConfig) -> EngineResult<String> {
    serde_json::to_string_pretty(config).map_err(|e| EngineError::InvalidFormat {
        message: e.to_string(),
    })
}

/// Parses a configuration from a JSON document.
///
/// Malformed documents fail with a single [`EngineError::InvalidFormat`]
/// error; well-formed documents that fail structural validation return
/// [`EngineError::InvalidConfiguration`] with every violation. The
/// `updatedAt` timestamp is refreshed on import (and `createdAt` backfilled
/// when absent), which is why timestamps are excluded from the export/import
/// round-trip law.
pub fn import_configuration(json: &str) -> EngineResult<ClientConfig> {
    let mut config: ClientConfig =
        serde_json::from_str(json).map_err(|e| EngineError::InvalidFormat {
            message: e.to_string(),
        })?;

    let report = validate_configuration(&config);
    if !report.valid {
        return Err(EngineError::InvalidConfiguration {
            errors: report.errors,
        });
    }

    let now = Utc::now();
    config.created_at.get_or_insert(now);
    config.updated_at = Some(now);
    Ok(config)
}

/// Clones a configuration under a new name.
///
/// The clone receives a fresh id and timestamps and is never active, so
/// cloning can't silently displace the default configuration.
pub fn clone_configuration(config: &ClientConfig, new_name: &str) -> ClientConfig {
    let now = Utc::now();
    ClientConfig {
        id: Uuid::new_v4(),
        client_name: new_name.to_string(),
        is_active: false,
        created_at: Some(now),
        updated_at: Some(now),
        ..config.clone()
    }
}
