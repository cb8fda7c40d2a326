//! Round trips between the canonical lockbox and the satellite bridge token.

use anyhow::Result as AnyResult;
use common::AssetInfo;
use cosmwasm_std::{coins, Addr, Empty, Uint128};
use cw20::{BalanceResponse, MinterResponse, TokenInfoResponse};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use bridge_token::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, QueuedTransfersResponse};
use testing::transport::{self, deliver_all, mesh, pending};

const CANONICAL: u64 = 1;
const SATELLITE: u64 = 2;
const DENOM: &str = "uluna";
const DELAY: u64 = 3_600;

fn contract_bridge_token() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge_token::contract::execute,
        bridge_token::contract::instantiate,
        bridge_token::contract::query,
    );
    Box::new(contract)
}

fn contract_lockbox() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        lockbox::contract::execute,
        lockbox::contract::instantiate,
        lockbox::contract::query,
    );
    Box::new(contract)
}

struct TestEnv {
    app: App,
    owner: Addr,
    user: Addr,
    sat_user: Addr,
    lockbox: Addr,
    token: Addr,
    canonical_endpoint: Addr,
    satellite_endpoint: Addr,
}

fn setup(token_limit: u128) -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let user = Addr::unchecked("terra1user");
    let sat_user = Addr::unchecked("terra1satuser");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &user, coins(1_000_000, DENOM))
            .unwrap();
    });

    let endpoints = mesh(&mut app, &owner, &[CANONICAL, SATELLITE]);

    let lockbox_code = app.store_code(contract_lockbox());
    let lockbox = app
        .instantiate_contract(
            lockbox_code,
            owner.clone(),
            &lockbox::msg::InstantiateMsg {
                owner: owner.to_string(),
                sudo: owner.to_string(),
                asset: AssetInfo::native(DENOM),
                transport: endpoints[0].to_string(),
                inflow_limit: Uint128::new(100_000),
                queue_delay: Some(DELAY),
                epoch_duration: None,
            },
            &[],
            "lockbox",
            None,
        )
        .unwrap();

    let token_code = app.store_code(contract_bridge_token());
    let token = app
        .instantiate_contract(
            token_code,
            owner.clone(),
            &InstantiateMsg {
                name: "Wrapped Luna".to_string(),
                symbol: "WLUNA".to_string(),
                decimals: 6,
                owner: owner.to_string(),
                transport: endpoints[1].to_string(),
                canonical_chain_id: CANONICAL,
                inflow_limit: Uint128::new(token_limit),
                queue_delay: Some(DELAY),
                epoch_duration: None,
            },
            &[],
            "bridge-token",
            None,
        )
        .unwrap();

    app.execute_contract(
        owner.clone(),
        lockbox.clone(),
        &lockbox::msg::ExecuteMsg::SetTrustedRemote {
            chain_id: SATELLITE,
            remote: token.to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        token.clone(),
        &ExecuteMsg::SetTrustedRemote {
            chain_id: CANONICAL,
            remote: lockbox.to_string(),
        },
        &[],
    )
    .unwrap();

    TestEnv {
        app,
        owner,
        user,
        sat_user,
        lockbox,
        token,
        canonical_endpoint: endpoints[0].clone(),
        satellite_endpoint: endpoints[1].clone(),
    }
}

impl TestEnv {
    fn lock(&mut self, amount: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            self.user.clone(),
            self.lockbox.clone(),
            &lockbox::msg::ExecuteMsg::BridgeOut {
                dest_chain_id: SATELLITE,
                recipient: self.sat_user.to_string(),
            },
            &coins(amount, DENOM),
        )
    }

    fn burn_back(&mut self, amount: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            self.sat_user.clone(),
            self.token.clone(),
            &ExecuteMsg::BridgeOut {
                recipient: self.user.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    fn deliver(&mut self, endpoint: &Addr, seq: u64) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked("relayer"),
            endpoint.clone(),
            &transport::ExecuteMsg::Deliver { seq },
            &[],
        )
    }

    fn supply(&self) -> Uint128 {
        let info: TokenInfoResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.token, &QueryMsg::TokenInfo {})
            .unwrap();
        info.total_supply
    }

    fn sat_balance(&self) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.token,
                &QueryMsg::Balance {
                    address: self.sat_user.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    fn escrowed(&self) -> Uint128 {
        let res: lockbox::msg::BackingResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.lockbox, &lockbox::msg::QueryMsg::Backing {})
            .unwrap();
        res.amount
    }

    fn assert_solvent(&self) {
        assert!(
            self.supply() <= self.escrowed(),
            "supply {} exceeds escrow {}",
            self.supply(),
            self.escrowed()
        );
    }

    // The lockbox and the token share the `pause {}` / `unpause {}` shape.
    fn pause(&mut self, contract: &Addr) {
        let owner = self.owner.clone();
        self.app
            .execute_contract(owner, contract.clone(), &ExecuteMsg::Pause {}, &[])
            .unwrap();
    }

    fn unpause(&mut self, contract: &Addr) {
        let owner = self.owner.clone();
        self.app
            .execute_contract(owner, contract.clone(), &ExecuteMsg::Unpause {}, &[])
            .unwrap();
    }
}

#[test]
fn test_minter_is_the_contract() {
    let env = setup(100_000);
    let minter: MinterResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.token, &QueryMsg::Minter {})
        .unwrap();
    assert_eq!(minter.minter, env.token.to_string());
    assert_eq!(env.supply(), Uint128::zero());
}

#[test]
fn test_round_trip_keeps_supply_within_escrow() {
    let mut env = setup(100_000);

    env.lock(1_000).unwrap();
    env.assert_solvent();
    assert_eq!(env.supply(), Uint128::zero());

    let canonical = env.canonical_endpoint.clone();
    deliver_all(&mut env.app, &canonical);
    assert_eq!(env.sat_balance(), Uint128::new(1_000));
    assert_eq!(env.supply(), env.escrowed());

    env.burn_back(400).unwrap();
    // In flight: burned on the satellite, still escrowed on the canonical chain
    assert_eq!(env.supply(), Uint128::new(600));
    env.assert_solvent();

    let satellite = env.satellite_endpoint.clone();
    deliver_all(&mut env.app, &satellite);
    assert_eq!(
        env.app.wrap().query_balance(&env.user, DENOM).unwrap().amount,
        Uint128::new(1_000_000 - 1_000 + 400)
    );
    assert_eq!(env.supply(), Uint128::new(600));
    assert_eq!(env.escrowed(), Uint128::new(600));
}

#[test]
fn test_holders_can_transfer() {
    let mut env = setup(100_000);
    env.lock(500).unwrap();
    let canonical = env.canonical_endpoint.clone();
    deliver_all(&mut env.app, &canonical);

    let friend = Addr::unchecked("terra1friend");
    env.app
        .execute_contract(
            env.sat_user.clone(),
            env.token.clone(),
            &ExecuteMsg::Transfer {
                recipient: friend.to_string(),
                amount: Uint128::new(200),
            },
            &[],
        )
        .unwrap();
    assert_eq!(env.sat_balance(), Uint128::new(300));

    // Cannot bridge out more than the balance
    assert!(env.burn_back(301).is_err());
    env.assert_solvent();
}

#[test]
fn test_over_limit_credit_is_queued_on_satellite() {
    let mut env = setup(500);

    env.lock(501).unwrap();
    let canonical = env.canonical_endpoint.clone();
    deliver_all(&mut env.app, &canonical);

    assert_eq!(env.sat_balance(), Uint128::zero());
    let queued: QueuedTransfersResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.token,
            &QueryMsg::QueuedTransfers {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(queued.transfers.len(), 1);
    let entry = queued.transfers[0].transfer.clone();
    assert_eq!(entry.chain_id, CANONICAL);
    assert_eq!(entry.amount, Uint128::new(501));

    let process = ExecuteMsg::ProcessQueued {
        epoch: entry.epoch,
        chain_id: entry.chain_id,
        recipient: entry.recipient,
        amount: entry.amount,
        queued_at: entry.queued_at,
    };

    let err = env
        .app
        .execute_contract(env.user.clone(), env.token.clone(), &process, &[])
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("!timestamp"));

    env.app
        .update_block(|block| block.time = block.time.plus_seconds(DELAY + 1));
    env.app
        .execute_contract(env.user.clone(), env.token.clone(), &process, &[])
        .unwrap();
    assert_eq!(env.sat_balance(), Uint128::new(501));
    env.assert_solvent();

    let err = env
        .app
        .execute_contract(env.user.clone(), env.token.clone(), &process, &[])
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("!root"));
    assert_eq!(env.sat_balance(), Uint128::new(501));
}

#[test]
fn test_pause_flags_are_independent() {
    let mut env = setup(100_000);
    env.lock(1_000).unwrap();
    let canonical = env.canonical_endpoint.clone();
    let satellite = env.satellite_endpoint.clone();
    deliver_all(&mut env.app, &canonical);

    // Lockbox paused: the token still burns, delivery waits
    let lockbox = env.lockbox.clone();
    env.pause(&lockbox);
    env.burn_back(100).unwrap();
    let seq = pending(&env.app, &satellite)[0];
    let err = env.deliver(&satellite, seq).unwrap_err();
    assert!(err.root_cause().to_string().contains("!paused"));
    env.assert_solvent();

    env.unpause(&lockbox);
    env.deliver(&satellite, seq).unwrap();

    // Token paused: bridge out refused, inbound credits wait
    let token = env.token.clone();
    env.pause(&token);
    let err = env.burn_back(100).unwrap_err();
    assert!(err.root_cause().to_string().contains("!paused"));

    env.lock(50).unwrap();
    let seq = *pending(&env.app, &canonical).last().unwrap();
    let err = env.deliver(&canonical, seq).unwrap_err();
    assert!(err.root_cause().to_string().contains("!paused"));
    env.assert_solvent();

    env.unpause(&token);
    env.deliver(&canonical, seq).unwrap();
    assert_eq!(env.sat_balance(), Uint128::new(950));
    assert_eq!(env.supply(), env.escrowed());
}

#[test]
fn test_duplicate_delivery_mints_once() {
    let mut env = setup(100_000);
    env.lock(700).unwrap();
    let canonical = env.canonical_endpoint.clone();
    deliver_all(&mut env.app, &canonical);

    let err = env
        .app
        .execute_contract(
            Addr::unchecked("relayer"),
            canonical,
            &transport::ExecuteMsg::Redeliver { seq: 1 },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("!nonce"));
    assert_eq!(env.sat_balance(), Uint128::new(700));
    env.assert_solvent();
}

#[test]
fn test_bridge_config_is_owner_only() {
    let mut env = setup(100_000);

    let err = env
        .app
        .execute_contract(
            env.sat_user.clone(),
            env.token.clone(),
            &ExecuteMsg::SetInflowLimit {
                limit: Uint128::zero(),
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("!owner"));

    let err = env
        .app
        .execute_contract(
            env.sat_user.clone(),
            env.token.clone(),
            &ExecuteMsg::Pause {},
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("!owner"));
}
