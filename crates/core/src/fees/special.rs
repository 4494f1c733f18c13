use rust_decimal::Decimal;

use crate::domain::vehicle::VehicleType;
use crate::errors::FeeError;
use crate::fees::FeeStrategy;

/// Seller's surcharge as a flat percentage of the price, rate by vehicle type.
#[derive(Default)]
pub struct SellerSpecialFee;

impl FeeStrategy for SellerSpecialFee {
    fn fee_name(&self) -> &str {
        "SpecialFee"
    }

    fn display_name(&self) -> &str {
        "Seller's Special Fee"
    }

    fn description(&self) -> Option<&str> {
        Some("Percentage-based fee: 2% for Common vehicles, 4% for Luxury vehicles")
    }

    fn calculate(
        &self,
        vehicle_price: Decimal,
        vehicle_type: VehicleType,
    ) -> Result<Decimal, FeeError> {
        let rate = match vehicle_type {
            VehicleType::Common => Decimal::new(2, 2), // 2%
            VehicleType::Luxury => Decimal::new(4, 2), // 4%
        };

        Ok(vehicle_price * rate)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::vehicle::VehicleType;
    use crate::fees::FeeStrategy;

    use super::SellerSpecialFee;

    fn fee(price: Decimal, vehicle_type: VehicleType) -> Decimal {
        SellerSpecialFee.calculate(price, vehicle_type).expect("special fee never fails")
    }

    #[test]
    fn common_vehicles_pay_two_percent() {
        assert_eq!(fee(Decimal::new(39_800, 2), VehicleType::Common), Decimal::new(796, 2));
        assert_eq!(fee(Decimal::new(50_100, 2), VehicleType::Common), Decimal::new(1_002, 2));
    }

    #[test]
    fn luxury_vehicles_pay_four_percent() {
        assert_eq!(fee(Decimal::new(180_000, 2), VehicleType::Luxury), Decimal::new(7_200, 2));
        assert_eq!(
            fee(Decimal::new(100_000_000, 2), VehicleType::Luxury),
            Decimal::new(4_000_000, 2)
        );
    }

    #[test]
    fn grows_with_the_price() {
        let low = fee(Decimal::new(10_000, 2), VehicleType::Common);
        let high = fee(Decimal::new(10_001, 2), VehicleType::Common);
        assert!(low < high, "expected {low} < {high}");
    }
}
