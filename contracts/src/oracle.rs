//! Price oracle interface and the freshness check applied at settlement.

use soroban_sdk::{contractclient, Env};

use crate::errors::ContractError;
use crate::types::{Config, RateObservation};

/// Interface the reference-rate oracle contract must expose.
#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracle {
    /// Current reference rate and the ledger time it was observed
    fn rate(env: Env) -> RateObservation;
}

/// Reads the oracle once and rejects readings that are unusable.
///
/// An observation stamped in the future counts as age zero.
pub(crate) fn fresh_rate(env: &Env, config: &Config) -> Result<i128, ContractError> {
    let client = PriceOracleClient::new(env, &config.oracle);
    let observation = match client.try_rate() {
        Ok(Ok(observation)) => observation,
        _ => return Err(ContractError::OracleUnavailable),
    };

    let now = env.ledger().timestamp();
    let age = now.saturating_sub(observation.observed_at);
    if age > config.max_oracle_age {
        return Err(ContractError::OracleStale);
    }

    if observation.rate <= 0 {
        return Err(ContractError::InvalidRate);
    }

    Ok(observation.rate)
}
