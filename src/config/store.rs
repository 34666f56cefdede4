//! In-memory configuration store.
//!
//! The [`ConfigStore`] holds the named configuration presets the engine can
//! calculate against. Presets load from a directory of YAML files (one
//! configuration per file); when no directory is available the built-in
//! standard configuration is used so calculations always have a fallback.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::io::clone_configuration;
use super::types::ClientConfig;
use super::validate::validate_configuration;

/// Holds all known client configurations, keyed by id.
///
/// # Directory Structure
///
/// The preset directory holds one YAML document per configuration:
/// ```text
/// config/presets/
/// ├── standard.yaml
/// └── express_catering.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use delivery_engine::config::ConfigStore;
///
/// let store = ConfigStore::load("./config/presets").unwrap();
/// let active = store.active().unwrap();
/// println!("Active configuration: {}", active.client_name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    configs: HashMap<Uuid, ClientConfig>,
}

impl ConfigStore {
    /// Creates a store holding only the built-in standard configuration.
    pub fn builtin() -> Self {
        let config = ClientConfig::standard();
        let mut configs = HashMap::new();
        configs.insert(config.id, config);
        Self { configs }
    }

    /// Loads every `*.yaml` and `*.yml` preset from the given directory.
    ///
    /// Each file must hold exactly one configuration; every configuration is
    /// structurally validated before it is admitted. Fails if the directory
    /// is missing, unreadable, or contains no presets.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| EngineError::PresetNotFound {
            path: dir_str.clone(),
        })?;

        let mut configs = HashMap::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::PresetNotFound {
                path: dir_str.clone(),
            })?;

            let file = entry.path();
            let is_preset = file
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == "yaml" || ext == "yml");
            if is_preset {
                let config = Self::load_preset(&file)?;
                configs.insert(config.id, config);
            }
        }

        if configs.is_empty() {
            return Err(EngineError::PresetNotFound {
                path: format!("{} (no preset files found)", dir_str),
            });
        }

        Ok(Self { configs })
    }

    /// Loads, parses, and validates a single preset file.
    fn load_preset(path: &Path) -> EngineResult<ClientConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::PresetNotFound {
            path: path_str.clone(),
        })?;

        let config: ClientConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::PresetParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let report = validate_configuration(&config);
        if !report.valid {
            return Err(EngineError::PresetParseError {
                path: path_str,
                message: report.errors.join("; "),
            });
        }

        Ok(config)
    }

    /// Gets a configuration by id.
    pub fn get(&self, id: Uuid) -> EngineResult<&ClientConfig> {
        self.configs
            .get(&id)
            .ok_or(EngineError::ConfigNotFound { id })
    }

    /// Returns the active configuration, the default when none is named.
    ///
    /// Falls back to an arbitrary-but-deterministic configuration (lowest id)
    /// when none is flagged active.
    pub fn active(&self) -> EngineResult<&ClientConfig> {
        if let Some(config) = self.configs.values().find(|c| c.is_active) {
            return Ok(config);
        }
        self.configs
            .values()
            .min_by_key(|c| c.id)
            .ok_or(EngineError::ConfigNotFound { id: Uuid::nil() })
    }

    /// Returns all configurations sorted by client name.
    pub fn list(&self) -> Vec<&ClientConfig> {
        let mut configs: Vec<&ClientConfig> = self.configs.values().collect();
        configs.sort_by(|a, b| a.client_name.cmp(&b.client_name).then(a.id.cmp(&b.id)));
        configs
    }

    /// Inserts or replaces a configuration after validating it.
    ///
    /// Validation failures block the save and surface every violation.
    /// Activating a configuration deactivates the previous default.
    pub fn upsert(&mut self, config: ClientConfig) -> EngineResult<()> {
        let report = validate_configuration(&config);
        if !report.valid {
            return Err(EngineError::InvalidConfiguration {
                errors: report.errors,
            });
        }

        if config.is_active {
            for existing in self.configs.values_mut() {
                existing.is_active = false;
            }
        }
        self.configs.insert(config.id, config);
        Ok(())
    }

    /// Clones the configuration with the given id under a new name and
    /// stores the clone.
    pub fn clone_into(&mut self, id: Uuid, new_name: &str) -> EngineResult<ClientConfig> {
        let clone = clone_configuration(self.get(id)?, new_name);
        self.configs.insert(clone.id, clone.clone());
        Ok(clone)
    }

    /// Number of configurations in the store.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Whether the store holds no configurations.
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
