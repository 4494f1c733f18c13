use rust_decimal::Decimal;

use crate::domain::vehicle::VehicleType;
use crate::errors::FeeError;
use crate::fees::FeeStrategy;

/// Flat storage charge applied to every auction.
#[derive(Default)]
pub struct FixedStorageFee;

impl FeeStrategy for FixedStorageFee {
    fn fee_name(&self) -> &str {
        "StorageFee"
    }

    fn display_name(&self) -> &str {
        "Storage Fee"
    }

    fn description(&self) -> Option<&str> {
        Some("Fixed storage fee applied to all vehicle auctions")
    }

    fn calculate(
        &self,
        _vehicle_price: Decimal,
        _vehicle_type: VehicleType,
    ) -> Result<Decimal, FeeError> {
        Ok(Decimal::new(10_000, 2)) // $100 flat
    }
}
