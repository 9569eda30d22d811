//! Contract error types for the recurring rate bet.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Config not set - call initialize first
    NotInitialized = 2,
    /// Stake must be greater than zero
    InvalidStake = 3,
    /// Predicted or observed rate must be greater than zero
    InvalidRate = 4,
    /// Both slots are taken and the round is still open
    RoundFull = 5,
    /// Player already holds the first slot of this round
    AlreadyBet = 6,
    /// Settlement needs two players
    RoundIncomplete = 7,
    /// Result time has not been reached
    NotYetSettleable = 8,
    /// Oracle observation is older than the configured bound
    OracleStale = 9,
    /// Oracle call failed
    OracleUnavailable = 10,
    /// Arithmetic overflow occurred
    Overflow = 11,
    /// Invalid duration value
    InvalidDuration = 12,
}
