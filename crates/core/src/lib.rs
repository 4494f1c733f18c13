pub mod config;
pub mod domain;
pub mod errors;
pub mod fees;

pub use domain::bid::{BidRequest, BidResponse, FeeBreakdownItem};
pub use domain::vehicle::{vehicle_type_options, VehicleType, VehicleTypeOption};
pub use errors::{FeeError, RegistryError, VehicleTypeParseError};
pub use fees::engine::FeeCalculationEngine;
pub use fees::{default_strategies, FeeStrategy};
