//! Fee debt and emission between the canonical and a satellite coordinator.
//!
//! Emission travels through a canonical lockbox to a satellite bridge token,
//! the notice through the coordinators' own channel.

use anyhow::Result as AnyResult;
use common::message::CoordinatorPayload;
use common::AssetInfo;
use cosmwasm_std::{to_json_binary, Addr, Decimal, Empty, Uint128};
use cw20::Cw20ExecuteMsg;
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use canonical_coordinator::msg::{ExecuteMsg, FeeDebtResponse, InstantiateMsg, QueryMsg, ReceiveMsg};
use satellite_coordinator::msg::AccountingResponse;
use satellite_coordinator::rate::RATE_SCALE;
use testing::token::{cw20_balance, instantiate_cw20};
use testing::transport::{self, deliver_all, mesh, pending};

const CANONICAL: u64 = 1;
const SATELLITE: u64 = 2;
const OTHER: u64 = 3;

fn contract_canonical() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        canonical_coordinator::contract::execute,
        canonical_coordinator::contract::instantiate,
        canonical_coordinator::contract::query,
    );
    Box::new(contract)
}

fn contract_satellite() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        satellite_coordinator::contract::execute,
        satellite_coordinator::contract::instantiate,
        satellite_coordinator::contract::query,
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

fn contract_bridge_token() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge_token::contract::execute,
        bridge_token::contract::instantiate,
        bridge_token::contract::query,
    );
    Box::new(contract)
}

struct TestEnv {
    app: App,
    owner: Addr,
    distributor: Addr,
    delegate: Addr,
    registry: Addr,
    user: Addr,
    fee_token: Addr,
    emission_token: Addr,
    sat_emission: Addr,
    canonical: Addr,
    satellite: Addr,
    endpoints: Vec<Addr>,
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let distributor = Addr::unchecked("terra1distributor");
    let delegate = Addr::unchecked("terra1delegate");
    let registry = Addr::unchecked("terra1registry");
    let user = Addr::unchecked("terra1user");

    let endpoints = mesh(&mut app, &owner, &[CANONICAL, SATELLITE]);

    // Canonical chain
    let fee_token = instantiate_cw20(&mut app, &owner, "FEE", &[(&delegate, 1_000)], None);
    let emission_token = instantiate_cw20(&mut app, &owner, "EMS", &[], Some(&owner));

    let lockbox_code = app.store_code(contract_lockbox());
    let emission_lockbox = app
        .instantiate_contract(
            lockbox_code,
            owner.clone(),
            &lockbox::msg::InstantiateMsg {
                owner: owner.to_string(),
                sudo: owner.to_string(),
                asset: AssetInfo::cw20(emission_token.clone()),
                transport: endpoints[0].to_string(),
                inflow_limit: Uint128::new(1_000_000),
                queue_delay: None,
                epoch_duration: None,
            },
            &[],
            "emission-lockbox",
            None,
        )
        .unwrap();

    let canonical_code = app.store_code(contract_canonical());
    let canonical = app
        .instantiate_contract(
            canonical_code,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                emission_token: emission_token.to_string(),
                emission_lockbox: emission_lockbox.to_string(),
                fee_asset: AssetInfo::cw20(fee_token.clone()),
                transport: endpoints[0].to_string(),
                emission_ratio: Decimal::from_ratio(2u128, 1u128),
            },
            &[],
            "canonical-coordinator",
            None,
        )
        .unwrap();

    app.execute_contract(
        owner.clone(),
        emission_token.clone(),
        &Cw20ExecuteMsg::UpdateMinter {
            new_minter: Some(canonical.to_string()),
        },
        &[],
    )
    .unwrap();

    // Satellite chain
    let token_code = app.store_code(contract_bridge_token());
    let sat_emission = app
        .instantiate_contract(
            token_code,
            owner.clone(),
            &bridge_token::msg::InstantiateMsg {
                name: "Bridged Emission".to_string(),
                symbol: "BEMS".to_string(),
                decimals: 6,
                owner: owner.to_string(),
                transport: endpoints[1].to_string(),
                canonical_chain_id: CANONICAL,
                inflow_limit: Uint128::new(1_000_000),
                queue_delay: None,
                epoch_duration: None,
            },
            &[],
            "bridged-emission",
            None,
        )
        .unwrap();

    let satellite_code = app.store_code(contract_satellite());
    let satellite = app
        .instantiate_contract(
            satellite_code,
            owner.clone(),
            &satellite_coordinator::msg::InstantiateMsg {
                owner: owner.to_string(),
                emission_token: sat_emission.to_string(),
                reward_registry: registry.to_string(),
                transport: endpoints[1].to_string(),
                canonical_chain_id: CANONICAL,
            },
            &[],
            "satellite-coordinator",
            None,
        )
        .unwrap();

    // Wiring
    app.execute_contract(
        owner.clone(),
        emission_lockbox.clone(),
        &lockbox::msg::ExecuteMsg::SetTrustedRemote {
            chain_id: SATELLITE,
            remote: sat_emission.to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        sat_emission.clone(),
        &bridge_token::msg::ExecuteMsg::SetTrustedRemote {
            chain_id: CANONICAL,
            remote: emission_lockbox.to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        satellite.clone(),
        &satellite_coordinator::msg::ExecuteMsg::SetTrustedRemote {
            chain_id: CANONICAL,
            remote: canonical.to_string(),
        },
        &[],
    )
    .unwrap();

    let canonical_msgs = vec![
        ExecuteMsg::SetTrustedRemote {
            chain_id: SATELLITE,
            remote: satellite.to_string(),
        },
        ExecuteMsg::SetDistributor {
            address: distributor.to_string(),
            authorized: true,
        },
        ExecuteMsg::SetBridgeDelegate {
            chain_id: SATELLITE,
            delegate: delegate.to_string(),
        },
    ];
    for msg in canonical_msgs {
        app.execute_contract(owner.clone(), canonical.clone(), &msg, &[])
            .unwrap();
    }

    TestEnv {
        app,
        owner,
        distributor,
        delegate,
        registry,
        user,
        fee_token,
        emission_token,
        sat_emission,
        canonical,
        satellite,
        endpoints,
    }
}

impl TestEnv {
    /// Satellite fees reported and delivered to the canonical chain
    fn report_fees(&mut self, fee_amount: u128, reward_amount: u128) {
        self.app
            .execute_contract(
                self.registry.clone(),
                self.satellite.clone(),
                &satellite_coordinator::msg::ExecuteMsg::QueueNewRewards {
                    fee_amount: Uint128::new(fee_amount),
                    reward_amount: Uint128::new(reward_amount),
                },
                &[],
            )
            .unwrap();
        deliver_all(&mut self.app, &self.endpoints[1]);
    }

    fn distribute(&mut self, chain_id: u64, fee_amount: Option<u128>) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            self.distributor.clone(),
            self.canonical.clone(),
            &ExecuteMsg::DistributeEmission {
                dest_chain_id: chain_id,
                fee_amount: fee_amount.map(Uint128::new),
                extra_payload: None,
            },
            &[],
        )
    }

    fn settle(&mut self, sender: &Addr, token: &Addr, amount: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            token.clone(),
            &Cw20ExecuteMsg::Send {
                contract: self.canonical.to_string(),
                amount: Uint128::new(amount),
                msg: to_json_binary(&ReceiveMsg::SettleFeeDebt {
                    chain_id: SATELLITE,
                })
                .unwrap(),
            },
            &[],
        )
    }

    fn fee_debt(&self, chain_id: u64) -> FeeDebtResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.canonical, &QueryMsg::FeeDebt { chain_id })
            .unwrap()
    }

    fn sat_accounting(&self) -> AccountingResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                &self.satellite,
                &satellite_coordinator::msg::QueryMsg::Accounting {},
            )
            .unwrap()
    }
}

fn reason(err: anyhow::Error) -> String {
    err.root_cause().to_string()
}

// ============================================================================
// Fee debt
// ============================================================================

#[test]
fn test_fee_notice_accrues_debt() {
    let mut env = setup();

    env.report_fees(100, 400);
    env.report_fees(20, 80);

    let debt = env.fee_debt(SATELLITE);
    assert_eq!(debt.fee_debt, Uint128::new(120));
    assert_eq!(debt.distributed_fee_debt, Uint128::zero());
    assert_eq!(debt.settled_fee_debt, Uint128::zero());
}

#[test]
fn test_fee_notice_from_untrusted_source() {
    let mut env = setup();

    env.app
        .execute_contract(
            Addr::unchecked("terra1impostor"),
            env.endpoints[1].clone(),
            &transport::ExecuteMsg::Send {
                dest_chain_id: CANONICAL,
                dest_contract: env.canonical.to_string(),
                payload: to_json_binary(&CoordinatorPayload::NotifyFees {
                    amount: Uint128::new(1_000),
                })
                .unwrap(),
            },
            &[],
        )
        .unwrap();
    let err = env
        .app
        .execute_contract(
            Addr::unchecked("relayer"),
            env.endpoints[1].clone(),
            &transport::ExecuteMsg::DeliverAll {},
            &[],
        )
        .unwrap_err();
    assert!(reason(err).contains("!remote"));
    assert_eq!(env.fee_debt(SATELLITE).fee_debt, Uint128::zero());
}

// ============================================================================
// Emission
// ============================================================================

#[test]
fn test_emission_round_trip_keeps_satellite_solvent() {
    let mut env = setup();
    env.report_fees(100, 400);

    env.distribute(SATELLITE, None).unwrap();

    let debt = env.fee_debt(SATELLITE);
    assert_eq!(debt.distributed_fee_debt, Uint128::new(100));
    assert!(debt.distributed_fee_debt <= debt.fee_debt);
    // Credit and notice are both in flight
    assert_eq!(pending(&env.app, &env.endpoints[0]).len(), 2);

    deliver_all(&mut env.app, &env.endpoints[0]);

    let accounting = env.sat_accounting();
    assert_eq!(accounting.balance, Uint128::new(200));
    assert_eq!(accounting.reported_emission, Uint128::new(200));
    assert_eq!(accounting.mint_rate, Uint128::new(RATE_SCALE / 2));
    assert!(accounting.owed <= accounting.balance);

    env.app
        .execute_contract(
            env.registry.clone(),
            env.satellite.clone(),
            &satellite_coordinator::msg::ExecuteMsg::Mint {
                recipient: env.user.to_string(),
                amount: Uint128::new(100),
            },
            &[],
        )
        .unwrap();
    assert_eq!(
        cw20_balance(&env.app, &env.sat_emission, &env.user),
        Uint128::new(50)
    );

    // Nothing is left to distribute for this chain
    let err = env.distribute(SATELLITE, None).unwrap_err();
    assert!(reason(err).contains("!debt"));
}

#[test]
fn test_reordered_delivery_never_overpromises() {
    let mut env = setup();
    env.report_fees(100, 400);
    env.distribute(SATELLITE, None).unwrap();

    let seqs = pending(&env.app, &env.endpoints[0]);
    let (credit, notice) = (seqs[0], seqs[1]);

    env.app
        .execute_contract(
            Addr::unchecked("relayer"),
            env.endpoints[0].clone(),
            &transport::ExecuteMsg::Deliver { seq: notice },
            &[],
        )
        .unwrap();
    let accounting = env.sat_accounting();
    assert_eq!(accounting.mint_rate, Uint128::zero());
    assert!(accounting.owed <= accounting.balance);

    env.app
        .execute_contract(
            Addr::unchecked("relayer"),
            env.endpoints[0].clone(),
            &transport::ExecuteMsg::Deliver { seq: credit },
            &[],
        )
        .unwrap();
    env.app
        .execute_contract(
            env.user.clone(),
            env.satellite.clone(),
            &satellite_coordinator::msg::ExecuteMsg::SyncMintRate {},
            &[],
        )
        .unwrap();

    let accounting = env.sat_accounting();
    assert_eq!(accounting.mint_rate, Uint128::new(RATE_SCALE / 2));
    assert!(accounting.owed <= accounting.balance);
}

#[test]
fn test_partial_distribution() {
    let mut env = setup();
    env.report_fees(100, 400);

    let err = env.distribute(SATELLITE, Some(150)).unwrap_err();
    assert!(reason(err).contains("!debt"));

    env.distribute(SATELLITE, Some(40)).unwrap();
    assert_eq!(env.fee_debt(SATELLITE).distributed_fee_debt, Uint128::new(40));

    env.distribute(SATELLITE, None).unwrap();
    assert_eq!(env.fee_debt(SATELLITE).distributed_fee_debt, Uint128::new(100));

    let minted: canonical_coordinator::msg::TotalMintedResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.canonical, &QueryMsg::TotalMinted {})
        .unwrap();
    assert_eq!(minted.amount, Uint128::new(200));
    // Everything minted sits in the emission lockbox
    assert_eq!(
        cw20_balance(&env.app, &env.emission_token, &env.canonical),
        Uint128::zero()
    );
}

#[test]
fn test_distribution_fails_closed() {
    let mut env = setup();
    env.report_fees(100, 400);

    let err = env
        .app
        .execute_contract(
            env.user.clone(),
            env.canonical.clone(),
            &ExecuteMsg::DistributeEmission {
                dest_chain_id: SATELLITE,
                fee_amount: None,
                extra_payload: None,
            },
            &[],
        )
        .unwrap_err();
    assert!(reason(err).contains("!distributor"));

    let err = env.distribute(OTHER, None).unwrap_err();
    assert!(reason(err).contains("!delegate"));

    env.app
        .execute_contract(
            env.owner.clone(),
            env.canonical.clone(),
            &ExecuteMsg::SetBridgeDelegate {
                chain_id: OTHER,
                delegate: env.delegate.to_string(),
            },
            &[],
        )
        .unwrap();
    let err = env.distribute(OTHER, None).unwrap_err();
    assert!(reason(err).contains("!remote"));
}

// ============================================================================
// Settlement
// ============================================================================

#[test]
fn test_settlement_is_independent_of_distribution() {
    let mut env = setup();
    env.report_fees(100, 400);

    let (delegate, fee_token) = (env.delegate.clone(), env.fee_token.clone());
    env.settle(&delegate, &fee_token, 70).unwrap();

    let debt = env.fee_debt(SATELLITE);
    assert_eq!(debt.settled_fee_debt, Uint128::new(70));
    assert_eq!(debt.distributed_fee_debt, Uint128::zero());
    assert_eq!(
        cw20_balance(&env.app, &fee_token, &env.canonical),
        Uint128::new(70)
    );

    // Distribution may run ahead of settlement
    env.distribute(SATELLITE, None).unwrap();
    let debt = env.fee_debt(SATELLITE);
    assert_eq!(debt.distributed_fee_debt, Uint128::new(100));
    assert_eq!(debt.settled_fee_debt, Uint128::new(70));

    env.app
        .execute_contract(
            env.owner.clone(),
            env.canonical.clone(),
            &ExecuteMsg::Withdraw {
                recipient: env.owner.to_string(),
                amount: Uint128::new(30),
            },
            &[],
        )
        .unwrap();
    assert_eq!(
        cw20_balance(&env.app, &fee_token, &env.owner),
        Uint128::new(30)
    );
}

#[test]
fn test_settlement_authorization() {
    let mut env = setup();
    let (user, delegate, fee_token) = (env.user.clone(), env.delegate.clone(), env.fee_token.clone());

    env.app
        .execute_contract(
            delegate.clone(),
            fee_token.clone(),
            &Cw20ExecuteMsg::Transfer {
                recipient: user.to_string(),
                amount: Uint128::new(10),
            },
            &[],
        )
        .unwrap();
    let err = env.settle(&user, &fee_token, 10).unwrap_err();
    assert!(reason(err).contains("!delegate"));

    // Only the fee asset settles debt
    let wrong = instantiate_cw20(&mut env.app, &env.owner.clone(), "BAD", &[(&delegate, 10)], None);
    let err = env.settle(&delegate, &wrong, 10).unwrap_err();
    assert!(reason(err).contains("!asset"));

    let err = env
        .app
        .execute_contract(
            user,
            env.canonical.clone(),
            &ExecuteMsg::SetDistributor {
                address: env.distributor.to_string(),
                authorized: false,
            },
            &[],
        )
        .unwrap_err();
    assert!(reason(err).contains("!owner"));
}
