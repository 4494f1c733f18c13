use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::domain::bid::{BidRequest, BidResponse, FeeBreakdownItem};
use crate::errors::{FeeError, RegistryError};
use crate::fees::FeeStrategy;

/// Composes an ordered registry of fee strategies into bid totals.
///
/// The registry is fixed at construction and the engine holds no other
/// state, so a single instance can serve concurrent calculations.
pub struct FeeCalculationEngine {
    strategies: Vec<Box<dyn FeeStrategy>>,
}

impl FeeCalculationEngine {
    /// Build an engine over `strategies`.
    ///
    /// Rejects an empty registry and duplicate fee names; both are wiring
    /// mistakes that should stop the process at startup.
    pub fn new(strategies: Vec<Box<dyn FeeStrategy>>) -> Result<Self, RegistryError> {
        if strategies.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::new();
        for strategy in &strategies {
            if !seen.insert(strategy.fee_name().to_string()) {
                return Err(RegistryError::DuplicateFeeName {
                    name: strategy.fee_name().to_string(),
                });
            }
        }

        Ok(Self { strategies })
    }

    /// Number of strategies in the registry.
    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Compute the full cost breakdown for one bid.
    ///
    /// Strategies run in registration order. The first failure propagates
    /// unchanged and no partial breakdown is returned.
    pub fn compute_total(&self, request: &BidRequest) -> Result<BidResponse, FeeError> {
        let mut fee_breakdown = Vec::with_capacity(self.strategies.len());
        let mut total_cost = request.vehicle_price;

        for strategy in &self.strategies {
            let amount = strategy.calculate(request.vehicle_price, request.vehicle_type)?;
            total_cost = total_cost
                .checked_add(amount)
                .ok_or_else(|| overflow_rejection(request.vehicle_price))?;
            fee_breakdown.push(FeeBreakdownItem {
                name: strategy.fee_name().to_string(),
                display_name: strategy.display_name().to_string(),
                amount,
                description: strategy.description().map(str::to_string),
            });
        }

        Ok(BidResponse {
            vehicle_price: request.vehicle_price,
            vehicle_type: request.vehicle_type,
            fee_breakdown,
            total_cost,
        })
    }
}

/// Accumulation can only overflow when the price is already outside every
/// tier; the rejection mirrors what the tier lookup returns for that price.
fn overflow_rejection(price: Decimal) -> FeeError {
    if price <= Decimal::ZERO {
        FeeError::NonPositivePrice { price }
    } else {
        FeeError::NoTierForPrice { price }
    }
}
