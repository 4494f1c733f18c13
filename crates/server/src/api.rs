//! Bid calculation API.
//!
//! JSON endpoints backing the auction frontend:
//! - `POST /api/v1/bid-calculations` computes the fee breakdown and total
//!   cost for one bid
//! - `GET /api/v1/vehicle-types` lists the selectable vehicle types

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use gavel_core::domain::bid::{BidRequest, BidResponse};
use gavel_core::domain::vehicle::{vehicle_type_options, VehicleType, VehicleTypeOption};
use gavel_core::FeeCalculationEngine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct ApiState {
    engine: Arc<FeeCalculationEngine>,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Inbound calculation payload. The vehicle type arrives as a raw string and
/// is parsed here so the caller gets a 400 naming the bad value instead of a
/// generic deserialization error.
#[derive(Debug, Deserialize)]
pub struct BidCalculationRequest {
    #[serde(rename = "vehiclePrice")]
    pub vehicle_price: Decimal,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: String,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(engine: Arc<FeeCalculationEngine>) -> Router {
    Router::new()
        .route("/api/v1/bid-calculations", post(calculate_bid))
        .route("/api/v1/vehicle-types", get(list_vehicle_types))
        .with_state(ApiState { engine })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn calculate_bid(
    State(state): State<ApiState>,
    Json(body): Json<BidCalculationRequest>,
) -> Result<Json<BidResponse>, (StatusCode, Json<ApiError>)> {
    let correlation_id = uuid_v4();

    info!(
        event_name = "api.bid.received",
        correlation_id = %correlation_id,
        vehicle_price = %body.vehicle_price,
        vehicle_type = %body.vehicle_type,
        "bid calculation received"
    );

    let vehicle_type = VehicleType::parse(&body.vehicle_type).map_err(|error| {
        warn!(
            event_name = "api.bid.rejected",
            correlation_id = %correlation_id,
            vehicle_type = %body.vehicle_type,
            error = %error,
            "bid calculation rejected: unparseable vehicle type"
        );
        (StatusCode::BAD_REQUEST, Json(ApiError { error: error.to_string() }))
    })?;

    let request = BidRequest { vehicle_price: body.vehicle_price, vehicle_type };
    let response = state.engine.compute_total(&request).map_err(|error| {
        warn!(
            event_name = "api.bid.rejected",
            correlation_id = %correlation_id,
            vehicle_price = %request.vehicle_price,
            vehicle_type = %request.vehicle_type,
            error = %error,
            "bid calculation rejected by fee strategy"
        );
        (StatusCode::BAD_REQUEST, Json(ApiError { error: error.to_string() }))
    })?;

    info!(
        event_name = "api.bid.computed",
        correlation_id = %correlation_id,
        vehicle_price = %response.vehicle_price,
        vehicle_type = %response.vehicle_type,
        total_cost = %response.total_cost,
        "bid calculation computed"
    );

    Ok(Json(response))
}

async fn list_vehicle_types() -> Json<Vec<VehicleTypeOption>> {
    Json(vehicle_type_options())
}

fn uuid_v4() -> String {
    Uuid::new_v4().simple().to_string()
}
