//! HTTP API module for the Delivery Pricing Engine.
//!
//! This module provides the REST API endpoints for running delivery
//! calculations and managing client configurations and saved history.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, SaveCalculationRequest};
pub use response::ApiError;
pub use state::AppState;
