use rust_decimal::Decimal;

use crate::domain::vehicle::VehicleType;
use crate::errors::FeeError;
use crate::fees::FeeStrategy;

/// Ten percent of the vehicle price, clamped to a per-type band.
///
/// Well-defined for any price; out-of-range inputs clamp instead of failing.
#[derive(Default)]
pub struct BasicBuyerFee;

impl FeeStrategy for BasicBuyerFee {
    fn fee_name(&self) -> &str {
        "BasicBuyerFee"
    }

    fn display_name(&self) -> &str {
        "Basic Buyer Fee"
    }

    fn description(&self) -> Option<&str> {
        Some("10% of vehicle price with minimum and maximum limits based on vehicle type")
    }

    fn calculate(
        &self,
        vehicle_price: Decimal,
        vehicle_type: VehicleType,
    ) -> Result<Decimal, FeeError> {
        let base = vehicle_price * Decimal::new(10, 2); // 10%

        let (min, max) = match vehicle_type {
            VehicleType::Common => (Decimal::new(1_000, 2), Decimal::new(5_000, 2)), // $10..$50
            VehicleType::Luxury => (Decimal::new(2_500, 2), Decimal::new(20_000, 2)), // $25..$200
        };

        Ok(base.clamp(min, max))
    }
}
