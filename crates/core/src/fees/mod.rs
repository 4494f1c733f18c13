//! Fee strategies and the engine that composes them.
//!
//! Each fee rule is a self-contained [`FeeStrategy`]; the
//! [`engine::FeeCalculationEngine`] runs a registry of them in order and sums
//! the results. Adding an auction fee means adding a strategy and registering
//! it, nothing else changes.

pub mod association;
pub mod basic_buyer;
pub mod engine;
pub mod special;
pub mod storage;

pub use association::AssociationFee;
pub use basic_buyer::BasicBuyerFee;
pub use special::SellerSpecialFee;
pub use storage::FixedStorageFee;

use rust_decimal::Decimal;

use crate::domain::vehicle::VehicleType;
use crate::errors::FeeError;

/// A single auction fee rule.
///
/// Implementations must be pure: same inputs, same output, no interior
/// state. Price-range validation is deliberately local to each strategy;
/// a rule that is well-defined for any price simply never fails.
pub trait FeeStrategy: Send + Sync {
    /// Stable machine key, unique within a registry.
    fn fee_name(&self) -> &str;

    /// Human-readable label for breakdown rows.
    fn display_name(&self) -> &str;

    /// Optional explanatory text for display next to the fee.
    fn description(&self) -> Option<&str>;

    /// Compute this fee for one bid.
    fn calculate(
        &self,
        vehicle_price: Decimal,
        vehicle_type: VehicleType,
    ) -> Result<Decimal, FeeError>;
}

/// The standard auction fee registry, in display order.
pub fn default_strategies() -> Vec<Box<dyn FeeStrategy>> {
    vec![
        Box::new(BasicBuyerFee),
        Box::new(SellerSpecialFee),
        Box::new(AssociationFee),
        Box::new(FixedStorageFee),
    ]
}
