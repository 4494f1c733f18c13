//! Health endpoint reporting service and fee-engine readiness.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use gavel_core::FeeCalculationEngine;
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    engine: Arc<FeeCalculationEngine>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub engine: HealthCheck,
    pub checked_at: String,
}

pub fn router(engine: Arc<FeeCalculationEngine>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { engine })
}

async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    respond(engine_check(state.engine.strategy_count()))
}

fn respond(engine: HealthCheck) -> (StatusCode, Json<HealthResponse>) {
    let ready = engine.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "gavel-server runtime initialized".to_string(),
        },
        engine,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn engine_check(strategy_count: usize) -> HealthCheck {
    if strategy_count > 0 {
        HealthCheck {
            status: "ready",
            detail: format!("fee engine serving {strategy_count} strategies"),
        }
    } else {
        HealthCheck { status: "unavailable", detail: "fee engine has no strategies".to_string() }
    }
}
