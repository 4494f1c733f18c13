use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::vehicle::VehicleType;

/// Input to a single bid calculation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    pub vehicle_price: Decimal,
    pub vehicle_type: VehicleType,
}

/// One fee line in a calculation result, in strategy registration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdownItem {
    /// Stable machine key provided by the strategy.
    pub name: String,
    /// Human-readable label for display.
    pub display_name: String,
    pub amount: Decimal,
    pub description: Option<String>,
}

/// Full calculation result: the echoed inputs, one breakdown line per
/// registered strategy, and the grand total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidResponse {
    pub vehicle_price: Decimal,
    pub vehicle_type: VehicleType,
    pub fee_breakdown: Vec<FeeBreakdownItem>,
    pub total_cost: Decimal,
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::vehicle::VehicleType;

    use super::{BidRequest, BidResponse, FeeBreakdownItem};

    #[test]
    fn response_serializes_with_camel_case_keys() {
        let response = BidResponse {
            vehicle_price: Decimal::new(39_800, 2),
            vehicle_type: VehicleType::Common,
            fee_breakdown: vec![FeeBreakdownItem {
                name: "StorageFee".to_string(),
                display_name: "Storage Fee".to_string(),
                amount: Decimal::new(10_000, 2),
                description: None,
            }],
            total_cost: Decimal::new(55_076, 2),
        };

        let json = serde_json::to_string(&response).expect("serialize");
        assert!(json.contains("\"vehiclePrice\""), "unexpected json: {json}");
        assert!(json.contains("\"vehicleType\":\"Common\""), "unexpected json: {json}");
        assert!(json.contains("\"feeBreakdown\""), "unexpected json: {json}");
        assert!(json.contains("\"displayName\""), "unexpected json: {json}");
        assert!(json.contains("\"totalCost\""), "unexpected json: {json}");
        assert!(json.contains("\"description\":null"), "unexpected json: {json}");
        assert!(!json.contains("vehicle_price"), "unexpected json: {json}");
    }

    #[test]
    fn amounts_travel_as_json_numbers_not_strings() {
        let item = FeeBreakdownItem {
            name: "BasicBuyerFee".to_string(),
            display_name: "Basic Buyer Fee".to_string(),
            amount: Decimal::new(3_980, 2),
            description: None,
        };

        let json = serde_json::to_string(&item).expect("serialize");
        assert!(json.contains("\"amount\":39.80"), "unexpected json: {json}");
    }

    #[test]
    fn request_deserializes_case_insensitive_vehicle_type() {
        let request: BidRequest =
            serde_json::from_str(r#"{"vehiclePrice": 398.00, "vehicleType": "common"}"#)
                .expect("deserialize");

        assert_eq!(request.vehicle_price, Decimal::new(39_800, 2));
        assert_eq!(request.vehicle_type, VehicleType::Common);
    }
}
