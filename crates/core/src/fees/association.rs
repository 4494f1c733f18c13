use rust_decimal::Decimal;

use crate::domain::vehicle::VehicleType;
use crate::errors::FeeError;
use crate::fees::FeeStrategy;

struct FeeTier {
    upper_bound: Decimal,
    fee: Decimal,
}

/// Flat association charge drawn from a price-tier table.
///
/// This is the one strategy that validates the price range: non-positive
/// prices and prices above the top tier are rejected, and that rejection is
/// what fails a whole calculation.
#[derive(Default)]
pub struct AssociationFee;

impl AssociationFee {
    /// Tier table; each row covers prices up to and including its bound.
    fn tiers() -> [FeeTier; 4] {
        [
            FeeTier { upper_bound: Decimal::new(50_000, 2), fee: Decimal::new(500, 2) }, // <=$500: $5
            FeeTier { upper_bound: Decimal::new(100_000, 2), fee: Decimal::new(1_000, 2) }, // <=$1000: $10
            FeeTier { upper_bound: Decimal::new(300_000, 2), fee: Decimal::new(1_500, 2) }, // <=$3000: $15
            FeeTier { upper_bound: Decimal::new(1_000_000_000, 2), fee: Decimal::new(2_000, 2) }, // <=$10M: $20
        ]
    }
}

impl FeeStrategy for AssociationFee {
    fn fee_name(&self) -> &str {
        "AssociationFee"
    }

    fn display_name(&self) -> &str {
        "Association Fee"
    }

    fn description(&self) -> Option<&str> {
        Some("Tiered fee based on vehicle price. Applies to all vehicle types.")
    }

    fn calculate(
        &self,
        vehicle_price: Decimal,
        _vehicle_type: VehicleType,
    ) -> Result<Decimal, FeeError> {
        if vehicle_price <= Decimal::ZERO {
            return Err(FeeError::NonPositivePrice { price: vehicle_price });
        }

        Self::tiers()
            .iter()
            .find(|tier| vehicle_price <= tier.upper_bound)
            .map(|tier| tier.fee)
            .ok_or(FeeError::NoTierForPrice { price: vehicle_price })
    }
}
