//! Type definitions for the recurring rate bet.

use soroban_sdk::{contracttype, Address};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Round,
}

/// Deployment configuration, written once by `initialize`
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub oracle: Address,
    pub token: Address,       // Asset escrowed as stake
    pub round_window: u64,    // Seconds a round accepts its second bet
    pub settlement_delay: u64, // Seconds between betting deadline and result time
    pub max_oracle_age: u64,  // Oldest oracle observation accepted at settlement
}

/// One cycle of the game. Slot order is admission order.
///
/// A slot is either fully empty (`None`, `0`, `0`) or fully set. The empty
/// round has `betting_deadline == 0`.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Round {
    pub player1: Option<Address>,
    pub amount1: i128,
    pub predicted_rate1: i128,
    pub player2: Option<Address>,
    pub amount2: i128,
    pub predicted_rate2: i128,
    pub betting_deadline: u64,
    pub result_time: u64,
}

impl Round {
    pub fn empty() -> Self {
        Round {
            player1: None,
            amount1: 0,
            predicted_rate1: 0,
            player2: None,
            amount2: 0,
            predicted_rate2: 0,
            betting_deadline: 0,
            result_time: 0,
        }
    }

    pub fn is_full(&self) -> bool {
        self.player1.is_some() && self.player2.is_some()
    }

    /// A round is stale once nobody can join it and nobody is waiting on it:
    /// an unfilled round after its deadline, or a full round that has also
    /// reached its result time without being settled.
    pub fn is_stale(&self, now: u64) -> bool {
        if self.betting_deadline == 0 {
            return true;
        }
        if now < self.betting_deadline {
            return false;
        }
        !self.is_full() || now >= self.result_time
    }

    /// Total value held in escrow for this round
    pub fn pot(&self) -> Option<i128> {
        self.amount1.checked_add(self.amount2)
    }
}

/// Reading returned by the price oracle
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RateObservation {
    pub rate: i128,
    pub observed_at: u64, // Ledger timestamp of the observation
}

/// Who took the pot
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(u32)]
pub enum SettlementOutcome {
    Player1 = 1,
    Player2 = 2,
    Tie = 3, // Each player refunded their own stake
}

/// Payload of the settlement event
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct SettlementRecord {
    pub outcome: SettlementOutcome,
    pub actual_rate: i128,
    pub player1: Address,
    pub payout1: i128,
    pub player2: Address,
    pub payout2: i128,
}
