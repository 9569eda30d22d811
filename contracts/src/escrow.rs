//! Stake custody: payout arithmetic and token movements.
//!
//! `compute_payouts` is pure; the transfer helpers are the only code that
//! moves value. Callers clear round storage before calling `pay_out`.

use soroban_sdk::{token, Address, Env};

use crate::errors::ContractError;
use crate::types::{Round, SettlementOutcome};

/// Splits the pot of a full round given the observed rate.
/// Closer prediction takes `amount1 + amount2`; equal distance refunds each stake.
/// Returns `(outcome, payout1, payout2)`.
pub(crate) fn compute_payouts(
    round: &Round,
    actual_rate: i128,
) -> Result<(SettlementOutcome, i128, i128), ContractError> {
    let distance1 = distance(round.predicted_rate1, actual_rate)?;
    let distance2 = distance(round.predicted_rate2, actual_rate)?;
    let pot = round.pot().ok_or(ContractError::Overflow)?;

    let payouts = if distance1 < distance2 {
        (SettlementOutcome::Player1, pot, 0)
    } else if distance2 < distance1 {
        (SettlementOutcome::Player2, 0, pot)
    } else {
        (SettlementOutcome::Tie, round.amount1, round.amount2)
    };

    Ok(payouts)
}

fn distance(predicted: i128, actual: i128) -> Result<i128, ContractError> {
    predicted
        .checked_sub(actual)
        .and_then(i128::checked_abs)
        .ok_or(ContractError::Overflow)
}

/// Moves a stake from the player into the contract
pub(crate) fn take_stake(env: &Env, token: &Address, from: &Address, amount: i128) {
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), &amount);
}

/// Pays escrowed value out of the contract; zero amounts are skipped
pub(crate) fn pay_out(env: &Env, token: &Address, to: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, &amount);
}

/// Returns every stake held by an abandoned round. Returns `(refund1, refund2)`.
pub(crate) fn refund_round(env: &Env, token: &Address, round: &Round) -> (i128, i128) {
    let mut refunds = (0, 0);
    if let Some(player) = &round.player1 {
        pay_out(env, token, player, round.amount1);
        refunds.0 = round.amount1;
    }
    if let Some(player) = &round.player2 {
        pay_out(env, token, player, round.amount2);
        refunds.1 = round.amount2;
    }
    refunds
}
