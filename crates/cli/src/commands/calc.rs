use std::str::FromStr;

use gavel_core::domain::bid::{BidRequest, BidResponse};
use gavel_core::domain::vehicle::VehicleType;
use gavel_core::fees::default_strategies;
use gavel_core::FeeCalculationEngine;
use rust_decimal::Decimal;

use crate::commands::CommandResult;

/// Exit codes: 2 invalid request, 3 engine construction, 4 calculation
/// rejected, 5 serialization.
pub fn run(price: &str, vehicle_type: &str, json_output: bool) -> CommandResult {
    let vehicle_price = match Decimal::from_str(price.trim()) {
        Ok(value) => value,
        Err(_) => {
            return CommandResult::failure(
                "calc",
                "invalid_request",
                format!("invalid price `{price}`: expected a decimal amount such as 398.00"),
                2,
            );
        }
    };

    let vehicle_type = match VehicleType::parse(vehicle_type) {
        Ok(value) => value,
        Err(error) => return CommandResult::failure("calc", "invalid_request", error.to_string(), 2),
    };

    let engine = match FeeCalculationEngine::new(default_strategies()) {
        Ok(engine) => engine,
        Err(error) => {
            return CommandResult::failure("calc", "engine_construction", error.to_string(), 3)
        }
    };

    let response = match engine.compute_total(&BidRequest { vehicle_price, vehicle_type }) {
        Ok(response) => response,
        Err(error) => {
            return CommandResult::failure("calc", "calculation_rejected", error.to_string(), 4)
        }
    };

    if json_output {
        return match serde_json::to_string_pretty(&response) {
            Ok(output) => CommandResult { exit_code: 0, output },
            Err(error) => CommandResult::failure("calc", "serialization", error.to_string(), 5),
        };
    }

    CommandResult::success("calc", render_breakdown(&response))
}

fn render_breakdown(response: &BidResponse) -> String {
    let mut lines = vec![format!(
        "bid calculation for {} vehicle at {}:",
        response.vehicle_type, response.vehicle_price
    )];

    for item in &response.fee_breakdown {
        lines.push(format!("  - {}: {}", item.display_name, item.amount.round_dp(2)));
    }

    lines.push(format!("total cost: {}", response.total_cost.round_dp(2)));
    lines.join("\n")
}
