//! Test modules for the recurring rate bet contract.


use crate::contract::{RateBetContract, RateBetContractClient};
use oracle_mock::{MockOracle, MockOracleClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, IntoVal, Symbol, Val, Vec,
};

/// 1.0 units of the stake asset (7 decimals)
pub(crate) const STAKE: i128 = 1_0000000;
/// Balance every funded player starts with
pub(crate) const FUNDING: i128 = 100_0000000;
/// Ledger time the tests start at
pub(crate) const START: u64 = 1_700_000_000;
pub(crate) const DAY: u64 = 86_400;

pub(crate) struct Setup<'a> {
    pub env: &'a Env,
    pub contract_id: Address,
    pub client: RateBetContractClient<'a>,
    pub oracle_id: Address,
    pub oracle: MockOracleClient<'a>,
    pub token: TokenClient<'a>,
    pub asset: StellarAssetClient<'a>,
    pub admin: Address,
}

/// Registers the contract, a mock oracle and a stake asset, then initializes.
pub(crate) fn setup(env: &Env) -> Setup<'_> {
    env.mock_all_auths();
    set_time(env, START);

    let contract_id = env.register(RateBetContract, ());
    let client = RateBetContractClient::new(env, &contract_id);

    let oracle_id = env.register(MockOracle, ());
    let oracle = MockOracleClient::new(env, &oracle_id);

    let admin = Address::generate(env);
    let sac = env.register_stellar_asset_contract_v2(admin.clone());
    let token = TokenClient::new(env, &sac.address());
    let asset = StellarAssetClient::new(env, &sac.address());

    client.initialize(&admin, &oracle_id, &sac.address());

    Setup {
        env,
        contract_id,
        client,
        oracle_id,
        oracle,
        token,
        asset,
        admin,
    }
}

impl Setup<'_> {
    /// New address holding `FUNDING` of the stake asset
    pub fn player(&self) -> Address {
        let player = Address::generate(self.env);
        self.asset.mint(&player, &FUNDING);
        player
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    pub fn advance(&self, seconds: u64) {
        set_time(self.env, self.now() + seconds);
    }

    /// Oracle reports `rate`, observed at the current ledger time
    pub fn report(&self, rate: i128) {
        self.oracle.set_rate(&rate, &self.now());
    }

    /// Data of the latest event this contract published under `topics`
    pub fn last_event(&self, topics: (Symbol, Symbol)) -> Option<Val> {
        let topics: Vec<Val> = topics.into_val(self.env);
        let mut found = None;
        for (contract, event_topics, data) in self.env.events().all().iter() {
            if contract == self.contract_id && event_topics == topics {
                found = Some(data);
            }
        }
        found
    }
}

pub(crate) fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp = timestamp;
    });
}
