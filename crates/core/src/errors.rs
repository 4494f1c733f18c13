//! Error taxonomy for bid calculation.
//!
//! Strategy failures ([`FeeError`]) carry the offending price so callers can
//! surface actionable messages. Registry assembly failures ([`RegistryError`])
//! are configuration mistakes and abort startup rather than being retried.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by an individual fee strategy while computing its amount.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FeeError {
    /// The vehicle price was zero or below, which no tier covers.
    #[error("vehicle price cannot be negative or zero (got {price})")]
    NonPositivePrice { price: Decimal },

    /// The vehicle price exceeded every configured tier.
    #[error("no fee tier found for vehicle price {price}")]
    NoTierForPrice { price: Decimal },
}

/// Errors raised while assembling the fee strategy registry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("fee strategy registry must contain at least one strategy")]
    Empty,

    #[error("fee strategy registry contains duplicate fee name `{name}`")]
    DuplicateFeeName { name: String },
}

/// Errors raised when parsing an externally supplied vehicle type string.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VehicleTypeParseError {
    #[error("vehicle type must not be empty")]
    Empty,

    #[error("unknown vehicle type `{value}` (expected `Common` or `Luxury`)")]
    Unknown { value: String },
}
