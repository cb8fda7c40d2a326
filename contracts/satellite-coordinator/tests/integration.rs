//! Satellite coordinator driven by a mock reward registry and a canonical
//! coordinator impersonated on the canonical transport endpoint.

use anyhow::Result as AnyResult;
use common::message::CoordinatorPayload;
use cosmwasm_std::{from_json, to_json_binary, Addr, Binary, Empty, Uint128};
use cw20::Cw20ExecuteMsg;
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use satellite_coordinator::msg::{
    AccountingResponse, ExecuteMsg, InstantiateMsg, MintRateResponse, PreviewMintResponse,
    QueryMsg,
};
use satellite_coordinator::rate::RATE_SCALE;
use testing::token::{cw20_balance, instantiate_cw20};
use testing::transport::{self, deliver_all, mesh, pending, Packet};

const CANONICAL: u64 = 1;
const SATELLITE: u64 = 2;
const CANONICAL_COORDINATOR: &str = "terra1canonical";

fn contract_coordinator() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        satellite_coordinator::contract::execute,
        satellite_coordinator::contract::instantiate,
        satellite_coordinator::contract::query,
    );
    Box::new(contract)
}

struct TestEnv {
    app: App,
    owner: Addr,
    registry: Addr,
    user: Addr,
    emission_token: Addr,
    coordinator: Addr,
    canonical_endpoint: Addr,
    satellite_endpoint: Addr,
}

fn instantiate_coordinator(app: &mut App, owner: &Addr, token: &Addr, transport: &Addr) -> Addr {
    let code = app.store_code(contract_coordinator());
    app.instantiate_contract(
        code,
        owner.clone(),
        &InstantiateMsg {
            owner: owner.to_string(),
            emission_token: token.to_string(),
            reward_registry: "terra1registry".to_string(),
            transport: transport.to_string(),
            canonical_chain_id: CANONICAL,
        },
        &[],
        "satellite-coordinator",
        None,
    )
    .unwrap()
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let registry = Addr::unchecked("terra1registry");
    let user = Addr::unchecked("terra1user");

    let endpoints = mesh(&mut app, &owner, &[CANONICAL, SATELLITE]);
    let emission_token = instantiate_cw20(&mut app, &owner, "EMS", &[], Some(&owner));
    let coordinator = instantiate_coordinator(&mut app, &owner, &emission_token, &endpoints[1]);

    app.execute_contract(
        owner.clone(),
        coordinator.clone(),
        &ExecuteMsg::SetTrustedRemote {
            chain_id: CANONICAL,
            remote: CANONICAL_COORDINATOR.to_string(),
        },
        &[],
    )
    .unwrap();

    TestEnv {
        app,
        owner,
        registry,
        user,
        emission_token,
        coordinator,
        canonical_endpoint: endpoints[0].clone(),
        satellite_endpoint: endpoints[1].clone(),
    }
}

impl TestEnv {
    fn queue(&mut self, fee_amount: u128, reward_amount: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            self.registry.clone(),
            self.coordinator.clone(),
            &ExecuteMsg::QueueNewRewards {
                fee_amount: Uint128::new(fee_amount),
                reward_amount: Uint128::new(reward_amount),
            },
            &[],
        )
    }

    fn mint(&mut self, amount: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            self.registry.clone(),
            self.coordinator.clone(),
            &ExecuteMsg::Mint {
                recipient: self.user.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    /// Emission tokens arriving over the bridge
    fn land(&mut self, amount: u128) {
        self.app
            .execute_contract(
                self.owner.clone(),
                self.emission_token.clone(),
                &Cw20ExecuteMsg::Mint {
                    recipient: self.coordinator.to_string(),
                    amount: Uint128::new(amount),
                },
                &[],
            )
            .unwrap();
    }

    /// Notice sent by `sender` on the canonical chain, left pending
    fn send_notice(&mut self, sender: &str, emission_amount: u128, fee_amount: u128) {
        self.app
            .execute_contract(
                Addr::unchecked(sender),
                self.canonical_endpoint.clone(),
                &transport::ExecuteMsg::Send {
                    dest_chain_id: SATELLITE,
                    dest_contract: self.coordinator.to_string(),
                    payload: to_json_binary(&CoordinatorPayload::EmissionDistributed {
                        emission_amount: Uint128::new(emission_amount),
                        fee_amount: Uint128::new(fee_amount),
                        extra_payload: Some(Binary::from(b"epoch-7".to_vec())),
                    })
                    .unwrap(),
                },
                &[],
            )
            .unwrap();
    }

    fn rate(&self) -> Uint128 {
        let res: MintRateResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.coordinator, &QueryMsg::MintRate {})
            .unwrap();
        res.mint_rate
    }

    fn accounting(&self) -> AccountingResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.coordinator, &QueryMsg::Accounting {})
            .unwrap()
    }
}

fn reason(err: anyhow::Error) -> String {
    err.root_cause().to_string()
}

// ============================================================================
// Fee reporting
// ============================================================================

#[test]
fn test_queue_new_rewards_reports_fees() {
    let mut env = setup();

    env.queue(100, 400).unwrap();

    let seqs = pending(&env.app, &env.satellite_endpoint);
    assert_eq!(seqs.len(), 1);
    let packet: Packet = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.satellite_endpoint,
            &transport::QueryMsg::Packet { seq: seqs[0] },
        )
        .unwrap();
    assert_eq!(packet.dest_chain_id, CANONICAL);
    assert_eq!(packet.dest_contract, CANONICAL_COORDINATOR);
    let payload: CoordinatorPayload = from_json(&packet.message.payload).unwrap();
    assert_eq!(
        payload,
        CoordinatorPayload::NotifyFees {
            amount: Uint128::new(100)
        }
    );

    let accounting = env.accounting();
    assert_eq!(accounting.fee_basis, Uint128::new(400));
    assert_eq!(accounting.fees_notified, Uint128::new(100));
    assert_eq!(accounting.mint_rate, Uint128::zero());
}

#[test]
fn test_rewards_without_fees_send_nothing() {
    let mut env = setup();

    env.queue(0, 50).unwrap();
    assert!(pending(&env.app, &env.satellite_endpoint).is_empty());

    let err = env.queue(0, 0).unwrap_err();
    assert!(reason(err).contains("!amount"));
}

#[test]
fn test_registry_only() {
    let mut env = setup();

    let err = env
        .app
        .execute_contract(
            env.user.clone(),
            env.coordinator.clone(),
            &ExecuteMsg::QueueNewRewards {
                fee_amount: Uint128::new(1),
                reward_amount: Uint128::new(1),
            },
            &[],
        )
        .unwrap_err();
    assert!(reason(err).contains("!registry"));

    let err = env
        .app
        .execute_contract(
            env.user.clone(),
            env.coordinator.clone(),
            &ExecuteMsg::Mint {
                recipient: env.user.to_string(),
                amount: Uint128::new(1),
            },
            &[],
        )
        .unwrap_err();
    assert!(reason(err).contains("!registry"));
}

#[test]
fn test_fee_report_requires_canonical_remote() {
    let mut env = setup();
    let token = env.emission_token.clone();
    let endpoint = env.satellite_endpoint.clone();
    let owner = env.owner.clone();
    let bare = instantiate_coordinator(&mut env.app, &owner, &token, &endpoint);

    let err = env
        .app
        .execute_contract(
            env.registry.clone(),
            bare,
            &ExecuteMsg::QueueNewRewards {
                fee_amount: Uint128::new(10),
                reward_amount: Uint128::new(10),
            },
            &[],
        )
        .unwrap_err();
    assert!(reason(err).contains("!remote"));
}

// ============================================================================
// Mint rate
// ============================================================================

#[test]
fn test_emission_sets_rate_and_pays_out() {
    let mut env = setup();
    env.queue(100, 400).unwrap();

    env.land(200);
    env.send_notice(CANONICAL_COORDINATOR, 200, 100);
    deliver_all(&mut env.app, &env.canonical_endpoint);

    assert_eq!(env.rate(), Uint128::new(RATE_SCALE / 2));

    env.mint(100).unwrap();
    assert_eq!(
        cw20_balance(&env.app, &env.emission_token, &env.user),
        Uint128::new(50)
    );

    let accounting = env.accounting();
    assert_eq!(accounting.reported_emission, Uint128::new(200));
    assert_eq!(accounting.covered_fees, Uint128::new(100));
    assert_eq!(accounting.paid_out, Uint128::new(50));
    assert_eq!(accounting.balance, Uint128::new(150));
    assert!(accounting.owed <= accounting.balance);
}

#[test]
fn test_unlanded_emission_is_not_promised() {
    let mut env = setup();
    env.queue(100, 400).unwrap();

    // Notice overtakes the tokens
    env.send_notice(CANONICAL_COORDINATOR, 200, 100);
    deliver_all(&mut env.app, &env.canonical_endpoint);
    assert_eq!(env.rate(), Uint128::zero());

    let preview: PreviewMintResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.coordinator,
            &QueryMsg::PreviewMint {
                amount: Uint128::new(100),
            },
        )
        .unwrap();
    assert_eq!(preview.payout, Uint128::zero());

    env.land(200);
    env.app
        .execute_contract(
            env.user.clone(),
            env.coordinator.clone(),
            &ExecuteMsg::SyncMintRate {},
            &[],
        )
        .unwrap();
    assert_eq!(env.rate(), Uint128::new(RATE_SCALE / 2));
}

#[test]
fn test_rate_lags_when_rewards_outrun_emission() {
    let mut env = setup();
    env.queue(100, 400).unwrap();
    env.land(200);
    env.send_notice(CANONICAL_COORDINATOR, 200, 100);
    deliver_all(&mut env.app, &env.canonical_endpoint);
    env.mint(100).unwrap();

    // New rewards before their emission arrives
    env.queue(50, 200).unwrap();

    let accounting = env.accounting();
    assert_eq!(accounting.balance, Uint128::new(150));
    // min(200 / 600, 150 / 500)
    assert_eq!(accounting.mint_rate, Uint128::new(RATE_SCALE * 3 / 10));
    assert!(accounting.owed <= accounting.balance);

    // Every outstanding accrual can still be paid
    env.mint(500).unwrap();
    let accounting = env.accounting();
    assert_eq!(accounting.balance, Uint128::zero());
    assert_eq!(
        cw20_balance(&env.app, &env.emission_token, &env.user),
        Uint128::new(200)
    );
}

#[test]
fn test_mint_bounded_by_queued_rewards() {
    let mut env = setup();
    env.queue(10, 40).unwrap();

    let err = env.mint(41).unwrap_err();
    assert!(reason(err).contains("!amount"));

    // A zero rate pays nothing but still consumes the accrual
    env.mint(40).unwrap();
    assert_eq!(
        cw20_balance(&env.app, &env.emission_token, &env.user),
        Uint128::zero()
    );
    assert_eq!(env.accounting().claimed_basis, Uint128::new(40));
}

// ============================================================================
// Transport
// ============================================================================

#[test]
fn test_untrusted_notice_rejected() {
    let mut env = setup();
    env.queue(100, 400).unwrap();
    env.land(200);

    env.send_notice("terra1impostor", 1_000, 100);
    let err = env
        .app
        .execute_contract(
            Addr::unchecked("relayer"),
            env.canonical_endpoint.clone(),
            &transport::ExecuteMsg::DeliverAll {},
            &[],
        )
        .unwrap_err();
    assert!(reason(err).contains("!remote"));
    assert_eq!(env.accounting().reported_emission, Uint128::zero());
}

#[test]
fn test_duplicate_notice_rejected() {
    let mut env = setup();
    env.queue(100, 400).unwrap();
    env.land(200);
    env.send_notice(CANONICAL_COORDINATOR, 200, 100);
    deliver_all(&mut env.app, &env.canonical_endpoint);

    let err = env
        .app
        .execute_contract(
            Addr::unchecked("relayer"),
            env.canonical_endpoint.clone(),
            &transport::ExecuteMsg::Redeliver { seq: 1 },
            &[],
        )
        .unwrap_err();
    assert!(reason(err).contains("!nonce"));
    assert_eq!(env.accounting().reported_emission, Uint128::new(200));
}

#[test]
fn test_owner_only_configuration() {
    let mut env = setup();

    let err = env
        .app
        .execute_contract(
            env.user.clone(),
            env.coordinator.clone(),
            &ExecuteMsg::SetRewardRegistry {
                registry: env.user.to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert!(reason(err).contains("!owner"));

    env.app
        .execute_contract(
            env.owner.clone(),
            env.coordinator.clone(),
            &ExecuteMsg::SetRewardRegistry {
                registry: env.user.to_string(),
            },
            &[],
        )
        .unwrap();
    let err = env.queue(1, 1).unwrap_err();
    assert!(reason(err).contains("!registry"));
}
