//! Core contract implementation for the recurring rate bet.

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env};

use crate::errors::ContractError;
use crate::escrow;
use crate::oracle;
use crate::types::{Config, DataKey, Round, SettlementOutcome, SettlementRecord};

/// Default seconds a round accepts a second bet (24 hours)
pub const ROUND_WINDOW: u64 = 86_400;
/// Default seconds between betting deadline and result time. Zero is safe:
/// a stale full round is settled against the oracle by the bet that replaces it.
pub const SETTLEMENT_DELAY: u64 = 0;
/// Default oldest oracle observation accepted at settlement
pub const MAX_ORACLE_AGE: u64 = 3_600;

#[contract]
pub struct RateBetContract;

#[contractimpl]
impl RateBetContract {
    /// Sets admin, oracle and stake token (one-time only)
    pub fn initialize(
        env: Env,
        admin: Address,
        oracle: Address,
        token: Address,
    ) -> Result<(), ContractError> {
        admin.require_auth();

        if env.storage().persistent().has(&DataKey::Config) {
            return Err(ContractError::AlreadyInitialized);
        }

        let config = Config {
            admin,
            oracle,
            token,
            round_window: ROUND_WINDOW,
            settlement_delay: SETTLEMENT_DELAY,
            max_oracle_age: MAX_ORACLE_AGE,
        };
        env.storage().persistent().set(&DataKey::Config, &config);

        Ok(())
    }

    /// Retunes round timing (admin only). An open round keeps its deadlines.
    pub fn set_timing(
        env: Env,
        round_window: u64,
        settlement_delay: u64,
        max_oracle_age: u64,
    ) -> Result<(), ContractError> {
        let mut config = Self::_config(&env)?;
        config.admin.require_auth();

        if round_window == 0 || max_oracle_age == 0 {
            return Err(ContractError::InvalidDuration);
        }

        config.round_window = round_window;
        config.settlement_delay = settlement_delay;
        config.max_oracle_age = max_oracle_age;
        env.storage().persistent().set(&DataKey::Config, &config);

        #[allow(deprecated)]
        env.events().publish(
            (symbol_short!("timing"), symbol_short!("updated")),
            (round_window, settlement_delay, max_oracle_age),
        );

        Ok(())
    }

    pub fn get_config(env: Env) -> Option<Config> {
        env.storage().persistent().get(&DataKey::Config)
    }

    /// Escrows `stake` with a rate prediction.
    ///
    /// Joins the open round as second player, or opens a fresh round when
    /// none exists or the current one is stale. A stale full round is
    /// settled against the oracle first; a lone stake left in a stale round
    /// is refunded. Both happen in the same call.
    pub fn place_bet(
        env: Env,
        player: Address,
        predicted_rate: i128,
        stake: i128,
    ) -> Result<(), ContractError> {
        player.require_auth();

        if stake <= 0 {
            return Err(ContractError::InvalidStake);
        }

        if predicted_rate <= 0 {
            return Err(ContractError::InvalidRate);
        }

        let config = Self::_config(&env)?;
        let now = env.ledger().timestamp();

        let stored: Option<Round> = env.storage().persistent().get(&DataKey::Round);
        let (mut round, stale) = match stored {
            Some(round) if !round.is_stale(now) => (round, None),
            stale => (Self::_open_round(&config, now)?, stale),
        };

        // Oracle failure rejects the bet and leaves the old pot for settle_bet
        let settlement = match &stale {
            Some(previous) if previous.is_full() => Some(Self::_resolve(&env, &config, previous)?),
            _ => None,
        };

        let slot: u32 = if round.player1.is_none() {
            round.player1 = Some(player.clone());
            round.amount1 = stake;
            round.predicted_rate1 = predicted_rate;
            1
        } else if round.player2.is_some() || now >= round.betting_deadline {
            return Err(ContractError::RoundFull);
        } else if round.player1.as_ref() == Some(&player) {
            return Err(ContractError::AlreadyBet);
        } else {
            round.player2 = Some(player.clone());
            round.amount2 = stake;
            round.predicted_rate2 = predicted_rate;
            2
        };

        round.pot().ok_or(ContractError::Overflow)?;
        env.storage().persistent().set(&DataKey::Round, &round);

        match (stale, settlement) {
            (_, Some(record)) => Self::_pay_settlement(&env, &config, &record),
            (Some(abandoned), None) => {
                let refunds = escrow::refund_round(&env, &config.token, &abandoned);
                #[allow(deprecated)]
                env.events().publish(
                    (symbol_short!("round"), symbol_short!("rollover")),
                    refunds,
                );
            }
            (None, None) => {}
        }

        if slot == 1 {
            #[allow(deprecated)]
            env.events().publish(
                (symbol_short!("round"), symbol_short!("opened")),
                (round.betting_deadline, round.result_time),
            );
        }

        escrow::take_stake(&env, &config.token, &player, stake);

        #[allow(deprecated)]
        env.events().publish(
            (symbol_short!("bet"), symbol_short!("placed")),
            (player, predicted_rate, stake, slot),
        );

        Ok(())
    }

    /// Settles a full round once its result time is reached (callable by anyone).
    ///
    /// The closer prediction takes the whole pot; equal distances refund each
    /// stake. Round storage is cleared before any value leaves the contract.
    pub fn settle_bet(env: Env) -> Result<SettlementOutcome, ContractError> {
        let config = Self::_config(&env)?;

        let round: Round = env
            .storage()
            .persistent()
            .get(&DataKey::Round)
            .unwrap_or_else(Round::empty);

        let record = Self::_resolve(&env, &config, &round)?;

        env.storage().persistent().remove(&DataKey::Round);
        Self::_pay_settlement(&env, &config, &record);

        Ok(record.outcome)
    }

    /// Returns the current round verbatim; an empty round when none is open
    pub fn get_contract_state(env: Env) -> Round {
        env.storage()
            .persistent()
            .get(&DataKey::Round)
            .unwrap_or_else(Round::empty)
    }

    pub fn betting_deadline(env: Env) -> u64 {
        Self::get_contract_state(env).betting_deadline
    }

    pub fn result_time(env: Env) -> u64 {
        Self::get_contract_state(env).result_time
    }

    /// Value currently held for the open round
    pub fn escrowed(env: Env) -> i128 {
        Self::get_contract_state(env).pot().unwrap_or(0)
    }

    fn _config(env: &Env) -> Result<Config, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Config)
            .ok_or(ContractError::NotInitialized)
    }

    /// Reads the oracle and splits the pot of a full round. Writes nothing.
    fn _resolve(env: &Env, config: &Config, round: &Round) -> Result<SettlementRecord, ContractError> {
        let (player1, player2) = match (&round.player1, &round.player2) {
            (Some(player1), Some(player2)) => (player1.clone(), player2.clone()),
            _ => return Err(ContractError::RoundIncomplete),
        };

        if env.ledger().timestamp() < round.result_time {
            return Err(ContractError::NotYetSettleable);
        }

        let actual_rate = oracle::fresh_rate(env, config)?;
        let (outcome, payout1, payout2) = escrow::compute_payouts(round, actual_rate)?;

        Ok(SettlementRecord {
            outcome,
            actual_rate,
            player1,
            payout1,
            player2,
            payout2,
        })
    }

    /// Round storage must already be cleared or replaced
    fn _pay_settlement(env: &Env, config: &Config, record: &SettlementRecord) {
        escrow::pay_out(env, &config.token, &record.player1, record.payout1);
        escrow::pay_out(env, &config.token, &record.player2, record.payout2);

        #[allow(deprecated)]
        env.events().publish(
            (symbol_short!("bet"), symbol_short!("settled")),
            record.clone(),
        );
    }

    fn _open_round(config: &Config, now: u64) -> Result<Round, ContractError> {
        let betting_deadline = now
            .checked_add(config.round_window)
            .ok_or(ContractError::Overflow)?;
        let result_time = betting_deadline
            .checked_add(config.settlement_delay)
            .ok_or(ContractError::Overflow)?;

        let mut round = Round::empty();
        round.betting_deadline = betting_deadline;
        round.result_time = result_time;
        Ok(round)
    }
}
