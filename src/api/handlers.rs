//! HTTP request handlers for the Delivery Pricing Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_delivery_cost, calculate_driver_pay, calculate_profit};
use crate::config::ClientConfig;
use crate::models::{AuditTrace, CalculationInput, CalculationRecord, CalculationResult};

use super::request::{CalculationRequest, SaveCalculationRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/calculator/calculate", post(calculate_handler))
        .route(
            "/api/calculator/configurations",
            get(list_configurations_handler).post(upsert_configuration_handler),
        )
        .route("/api/calculator/save", post(save_calculation_handler))
        .route("/api/calculator/history", get(history_handler))
        .with_state(state)
}

/// Maps an axum JSON rejection to the API error body.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn error_response(error: crate::error::EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for POST /api/calculator/calculate.
///
/// Runs both calculators against the named (or active) configuration and
/// returns the full calculation result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    // Resolve the configuration while holding the read lock, then release it
    // before the calculation runs.
    let config = {
        let store = state.store().read().await;
        let resolved = match request.configuration_id {
            Some(id) => store.get(id),
            None => store.active(),
        };
        match resolved {
            Ok(config) => config.clone(),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    configuration_id = ?request.configuration_id,
                    "Configuration lookup failed"
                );
                return error_response(err);
            }
        }
    };

    let start_time = Instant::now();
    match perform_calculation(&request.input, &config) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                configuration_id = %config.id,
                customer_total = %result.customer_charges.total,
                driver_total = %result.driver_payments.total,
                profit = %result.profit,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            error_response(err)
        }
    }
}

/// Handler for GET /api/calculator/configurations.
async fn list_configurations_handler(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store().read().await;
    let configs: Vec<ClientConfig> = store.list().into_iter().cloned().collect();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(configs),
    )
}

/// Handler for POST /api/calculator/configurations.
///
/// Upserts a configuration; a configuration that fails structural validation
/// is rejected with 422 and the accumulated violation list.
async fn upsert_configuration_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClientConfig>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let config = match payload {
        Ok(Json(config)) => config,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let mut store = state.store().write().await;
    match store.upsert(config.clone()) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                configuration_id = %config.id,
                client_name = %config.client_name,
                "Configuration saved"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(config),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                configuration_id = %config.id,
                error = %err,
                "Configuration rejected"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /api/calculator/save.
///
/// Appends a calculation record to history. Results are derived data; only
/// explicitly saved calculations are kept.
async fn save_calculation_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    // The record must reference a configuration the store knows about.
    {
        let store = state.store().read().await;
        if let Err(err) = store.get(request.configuration_id) {
            warn!(
                correlation_id = %correlation_id,
                configuration_id = %request.configuration_id,
                "Save rejected: unknown configuration"
            );
            return error_response(err);
        }
    }

    let record = CalculationRecord {
        id: Uuid::new_v4(),
        timestamp: Utc::now(),
        configuration_id: request.configuration_id,
        input: request.input,
        result: request.result,
    };

    let mut history = state.history().write().await;
    history.push(record.clone());
    info!(
        correlation_id = %correlation_id,
        record_id = %record.id,
        history_len = history.len(),
        "Calculation saved to history"
    );

    (
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json")],
        Json(record),
    )
        .into_response()
}

/// Handler for GET /api/calculator/history.
async fn history_handler(State(state): State<AppState>) -> impl IntoResponse {
    let history = state.history().read().await;
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(history.clone()),
    )
}

/// Runs both calculators and assembles the full result.
///
/// The breakdowns are pure functions of `(input, config)`; only the envelope
/// (id, timestamp, duration) varies between runs.
fn perform_calculation(
    input: &CalculationInput,
    config: &ClientConfig,
) -> Result<CalculationResult, crate::error::EngineError> {
    let start_time = Instant::now();

    let cost = calculate_delivery_cost(input, config)?;
    let pay = calculate_driver_pay(input, config)?;
    let profit = calculate_profit(cost.charges.total, pay.payments.total, 0);

    // Each calculator numbers its own steps from 1; renumber into a single
    // sequence for the combined trace.
    let mut steps = cost.audit_steps;
    steps.extend(pay.audit_steps);
    steps.push(profit.audit_step);
    for (index, step) in steps.iter_mut().enumerate() {
        step.step_number = (index + 1) as u32;
    }

    let warnings = pay.warning.into_iter().collect();
    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        configuration_id: config.id,
        customer_charges: cost.charges,
        driver_payments: pay.payments,
        profit: profit.profit,
        profit_margin: profit.profit_margin,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigStore::builtin())
    }

    async fn active_config_id(state: &AppState) -> Uuid {
        state.store().read().await.active().unwrap().id
    }

    fn valid_body() -> String {
        json!({
            "input": {
                "headcount": 30,
                "foodCost": "400.00",
                "mileage": "15",
                "numberOfStops": 2
            }
        })
        .to_string()
    }

    async fn post_json(router: Router, uri: &str, body: String) -> axum::response::Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let response = post_json(router, "/api/calculator/calculate", valid_body()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResult = serde_json::from_slice(&body).unwrap();

        // 30 heads / $400 food, 15 miles, 2 stops against the standard preset:
        // $45 regular rate + 5 extra miles × $0.70 + $5 extra stop
        assert_eq!(result.customer_charges.base_fee, Decimal::from_str("45.00").unwrap());
        assert_eq!(
            result.customer_charges.long_distance_charge,
            Decimal::from_str("3.50").unwrap()
        );
        assert_eq!(
            result.customer_charges.extra_stops_charge,
            Decimal::from_str("5.00").unwrap()
        );
        assert_eq!(result.customer_charges.total, Decimal::from_str("53.50").unwrap());
        assert!(!result.audit_trace.steps.is_empty());
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = post_json(
            router,
            "/api/calculator/calculate",
            "{invalid json".to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_input_returns_400() {
        let router = create_router(create_test_state());

        let response = post_json(
            router,
            "/api/calculator/calculate",
            json!({"configurationId": null}).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert!(
            error.message.contains("missing field"),
            "Expected missing-field message, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_unknown_configuration_returns_404() {
        let router = create_router(create_test_state());

        let body = json!({
            "input": {
                "headcount": 30,
                "foodCost": "400.00",
                "mileage": "15",
                "numberOfStops": 2
            },
            "configurationId": "12345678-1234-1234-1234-123456789012"
        })
        .to_string();

        let response = post_json(router, "/api/calculator/calculate", body).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "CONFIG_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_api_005_out_of_domain_input_returns_400() {
        let router = create_router(create_test_state());

        let body = json!({
            "input": {
                "headcount": 30,
                "foodCost": "400.00",
                "mileage": "-5",
                "numberOfStops": 2
            }
        })
        .to_string();

        let response = post_json(router, "/api/calculator/calculate", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_INPUT");
        assert!(error.message.contains("mileage"));
    }

    #[tokio::test]
    async fn test_api_006_invalid_configuration_upsert_returns_422() {
        let state = create_test_state();
        let router = create_router(state);

        let mut config = ClientConfig::standard();
        config.driver_pay_settings.max_pay_per_drop = Decimal::from_str("1.00").unwrap();
        let body = serde_json::to_string(&config).unwrap();

        let response = post_json(router, "/api/calculator/configurations", body).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.errors.unwrap().iter().any(|e| e.contains("maxPayPerDrop")));
    }

    #[tokio::test]
    async fn test_save_then_history_round_trip() {
        let state = create_test_state();
        let config_id = active_config_id(&state).await;
        let router = create_router(state);

        let calc_response =
            post_json(router.clone(), "/api/calculator/calculate", valid_body()).await;
        let calc_body = axum::body::to_bytes(calc_response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResult = serde_json::from_slice(&calc_body).unwrap();

        let save_body = json!({
            "configurationId": config_id,
            "input": {
                "headcount": 30,
                "foodCost": "400.00",
                "mileage": "15",
                "numberOfStops": 2
            },
            "result": result
        })
        .to_string();

        let save_response = post_json(router.clone(), "/api/calculator/save", save_body).await;
        assert_eq!(save_response.status(), StatusCode::CREATED);

        let history_response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/calculator/history")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(history_response.status(), StatusCode::OK);

        let history_body = axum::body::to_bytes(history_response.into_body(), usize::MAX)
            .await
            .unwrap();
        let records: Vec<CalculationRecord> = serde_json::from_slice(&history_body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].configuration_id, config_id);
    }

    #[test]
    fn test_audit_steps_renumbered_into_one_sequence() {
        let input = CalculationInput {
            headcount: 30,
            food_cost: Decimal::from_str("400").unwrap(),
            mileage: Decimal::from_str("15").unwrap(),
            number_of_stops: 2,
            ..CalculationInput::default()
        };

        let result = perform_calculation(&input, &ClientConfig::standard()).unwrap();
        for (i, step) in result.audit_trace.steps.iter().enumerate() {
            assert_eq!(step.step_number, (i + 1) as u32);
        }
        assert_eq!(result.audit_trace.steps.last().unwrap().rule_id, "profit");
    }

    #[test]
    fn test_perform_calculation_breakdowns_are_deterministic() {
        let input = CalculationInput {
            headcount: 30,
            food_cost: Decimal::from_str("400").unwrap(),
            mileage: Decimal::from_str("15").unwrap(),
            number_of_stops: 2,
            ..CalculationInput::default()
        };
        let config = ClientConfig::standard();

        let first = perform_calculation(&input, &config).unwrap();
        let second = perform_calculation(&input, &config).unwrap();
        assert_eq!(first.customer_charges, second.customer_charges);
        assert_eq!(first.driver_payments, second.driver_payments);
        assert_eq!(first.profit, second.profit);
        assert_eq!(first.profit_margin, second.profit_margin);
    }
}
