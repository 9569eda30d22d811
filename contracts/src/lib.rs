#![no_std]
//! # Recurring Rate Bet
//!
//! Two players each escrow a stake with a predicted exchange rate. Once the
//! round's result time passes, a price oracle is read and the player whose
//! prediction was closer takes the pot.
//!
//! ## Key Features
//! - Two-slot rounds that roll over after a 24 hour betting window
//! - Abandoned rounds refund their stakes before a new round opens
//! - Oracle readings older than the configured bound are rejected
//! - Checked arithmetic on stakes, rates and timestamps

mod contract;
mod errors;
mod escrow;
mod oracle;
mod types;

#[cfg(test)]
mod tests;

pub use contract::{RateBetContract, MAX_ORACLE_AGE, ROUND_WINDOW, SETTLEMENT_DELAY};
pub use errors::ContractError;
pub use oracle::{PriceOracle, PriceOracleClient};
pub use types::{Config, DataKey, RateObservation, Round, SettlementOutcome, SettlementRecord};
