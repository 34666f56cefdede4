//! Application state for the Delivery Pricing Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigStore;
use crate::models::CalculationRecord;

/// Shared application state.
///
/// The configuration store is mutable (presets can be upserted and cloned at
/// runtime) and the history grows as calculations are saved, so both sit
/// behind an `RwLock`. Reads vastly outnumber writes.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<ConfigStore>>,
    history: Arc<RwLock<Vec<CalculationRecord>>>,
}

impl AppState {
    /// Creates a new application state around the given configuration store.
    pub fn new(store: ConfigStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            history: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// The configuration store.
    pub fn store(&self) -> &RwLock<ConfigStore> {
        &self.store
    }

    /// The saved calculation history, newest last.
    pub fn history(&self) -> &RwLock<Vec<CalculationRecord>> {
        &self.history
    }
}
