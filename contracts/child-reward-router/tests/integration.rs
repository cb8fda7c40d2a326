//! Child router fed by a canonical router impersonated on the canonical
//! transport endpoint.

use anyhow::Result as AnyResult;
use common::message::{GaugeDistribution, RouterPayload};
use common::EpochStatus;
use cosmwasm_std::{to_json_binary, Addr, Empty, Uint128};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use child_reward_router::msg::{
    ConfigResponse, DistributionResponse, EpochStatusResponse, ExecuteMsg, InstantiateMsg,
    PoolIdResponse, QueryMsg,
};
use testing::registry::contract_registry;
use testing::stash::{contract_stash, funded};
use testing::token::{cw20_balance, instantiate_cw20};
use testing::transport::{self, mesh};

const CANONICAL: u64 = 1;
const CHILD: u64 = 2;
const CANONICAL_ROUTER: &str = "terra1router";
const EPOCH: u64 = 7;

fn contract_child() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        child_reward_router::contract::execute,
        child_reward_router::contract::instantiate,
        child_reward_router::contract::query,
    );
    Box::new(contract)
}

struct TestEnv {
    app: App,
    owner: Addr,
    distributor: Addr,
    reward_token: Addr,
    stash: Addr,
    child: Addr,
    canonical_endpoint: Addr,
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let distributor = Addr::unchecked("terra1distributor");

    let endpoints = mesh(&mut app, &owner, &[CANONICAL, CHILD]);
    let reward_token = instantiate_cw20(&mut app, &owner, "BRWD", &[], Some(&owner));

    let stash_code = app.store_code(contract_stash());
    let stash = app
        .instantiate_contract(
            stash_code,
            owner.clone(),
            &testing::stash::InstantiateMsg {},
            &[],
            "stash",
            None,
        )
        .unwrap();
    let registry_code = app.store_code(contract_registry());
    let registry = app
        .instantiate_contract(
            registry_code,
            owner.clone(),
            &testing::registry::InstantiateMsg {
                gauges: vec!["gauge-c".to_string(), "gauge-d".to_string()],
            },
            &[],
            "registry",
            None,
        )
        .unwrap();

    let child_code = app.store_code(contract_child());
    let child = app
        .instantiate_contract(
            child_code,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                reward_token: reward_token.to_string(),
                stash: stash.to_string(),
                registry: registry.to_string(),
                transport: endpoints[1].to_string(),
                canonical_chain_id: CANONICAL,
                epoch_duration: None,
                stash_periods: Some(4),
            },
            &[],
            "child-reward-router",
            None,
        )
        .unwrap();

    let msgs = vec![
        ExecuteMsg::SetTrustedRemote {
            chain_id: CANONICAL,
            remote: CANONICAL_ROUTER.to_string(),
        },
        ExecuteMsg::SetDistributor {
            address: distributor.to_string(),
            authorized: true,
        },
        ExecuteMsg::SetPoolIds { start: 0, end: 1 },
    ];
    for msg in msgs {
        app.execute_contract(owner.clone(), child.clone(), &msg, &[])
            .unwrap();
    }

    // Bridged rewards already landed
    app.execute_contract(
        owner.clone(),
        reward_token.clone(),
        &cw20::Cw20ExecuteMsg::Mint {
            recipient: child.to_string(),
            amount: Uint128::new(1_000),
        },
        &[],
    )
    .unwrap();

    TestEnv {
        app,
        owner,
        distributor,
        reward_token,
        stash,
        child,
        canonical_endpoint: endpoints[0].clone(),
    }
}

impl TestEnv {
    /// Distributions sent by `sender` on the canonical chain and delivered
    fn distribute(&mut self, sender: &str, distributions: &[(&str, u128)]) -> AnyResult<AppResponse> {
        let payload = RouterPayload::SetDistributions {
            epoch: EPOCH,
            distributions: distributions
                .iter()
                .map(|(gauge, amount)| GaugeDistribution {
                    gauge: gauge.to_string(),
                    amount: Uint128::new(*amount),
                })
                .collect(),
        };
        self.app
            .execute_contract(
                Addr::unchecked(sender),
                self.canonical_endpoint.clone(),
                &transport::ExecuteMsg::Send {
                    dest_chain_id: CHILD,
                    dest_contract: self.child.to_string(),
                    payload: to_json_binary(&payload).unwrap(),
                },
                &[],
            )
            .unwrap();
        self.app.execute_contract(
            Addr::unchecked("relayer"),
            self.canonical_endpoint.clone(),
            &transport::ExecuteMsg::DeliverAll {},
            &[],
        )
    }

    fn process(&mut self, gauges: &[&str]) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            self.distributor.clone(),
            self.child.clone(),
            &ExecuteMsg::ProcessRewards {
                epoch: EPOCH,
                gauges: gauges.iter().map(|g| g.to_string()).collect(),
            },
            &[],
        )
    }

    fn status(&self) -> EpochStatusResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.child, &QueryMsg::EpochStatus { epoch: EPOCH })
            .unwrap()
    }

    fn distribution(&self, gauge: &str) -> DistributionResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                &self.child,
                &QueryMsg::Distribution {
                    epoch: EPOCH,
                    gauge: gauge.to_string(),
                },
            )
            .unwrap()
    }
}

fn reason(err: anyhow::Error) -> String {
    err.root_cause().to_string()
}

#[test]
fn test_distributions_recorded_then_funded() {
    let mut env = setup();
    assert_eq!(env.status().status, EpochStatus::Closed);

    env.distribute(CANONICAL_ROUTER, &[("gauge-c", 600), ("gauge-d", 0)])
        .unwrap();
    let status = env.status();
    assert_eq!(status.status, EpochStatus::Queued);
    assert_eq!(status.gauges, 2);
    assert_eq!(status.total, Uint128::new(600));
    assert_eq!(env.distribution("gauge-c").amount, Uint128::new(600));

    env.process(&["gauge-c"]).unwrap();
    let stash = funded(&env.app, &env.stash, 0);
    assert_eq!(stash.amount, Uint128::new(600));
    assert_eq!(stash.periods, 4);
    assert!(env.distribution("gauge-c").funded);
    assert_eq!(
        cw20_balance(&env.app, &env.reward_token, &env.child),
        Uint128::new(400)
    );
    assert_eq!(env.status().status, EpochStatus::Queued);

    // gauge-d has no pool on this chain
    let err = env.process(&["gauge-d"]).unwrap_err();
    assert!(reason(err).contains("!pool"));

    env.app
        .execute_contract(
            env.owner.clone(),
            env.child.clone(),
            &ExecuteMsg::SetPoolIds { start: 1, end: 2 },
            &[],
        )
        .unwrap();
    let pool: PoolIdResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.child,
            &QueryMsg::PoolId {
                gauge: "gauge-d".to_string(),
            },
        )
        .unwrap();
    assert_eq!(pool.pool_id, Some(1));

    // Zero share is marked funded without a transfer
    env.process(&["gauge-d"]).unwrap();
    assert_eq!(funded(&env.app, &env.stash, 1).fundings, 0);
    assert_eq!(env.status().status, EpochStatus::Distributed);
}

#[test]
fn test_process_rejections() {
    let mut env = setup();
    env.distribute(CANONICAL_ROUTER, &[("gauge-c", 600)]).unwrap();

    let err = env
        .app
        .execute_contract(
            env.owner.clone(),
            env.child.clone(),
            &ExecuteMsg::ProcessRewards {
                epoch: EPOCH,
                gauges: vec!["gauge-c".to_string()],
            },
            &[],
        )
        .unwrap_err();
    assert!(reason(err).contains("!distributor"));

    let err = env.process(&["gauge-x"]).unwrap_err();
    assert!(reason(err).contains("!gauge"));

    let err = env.process(&[]).unwrap_err();
    assert!(reason(err).contains("!config"));

    env.process(&["gauge-c"]).unwrap();
    let err = env.process(&["gauge-c"]).unwrap_err();
    assert!(reason(err).contains("!processed"));
}

#[test]
fn test_untrusted_distributions_rejected() {
    let mut env = setup();

    let err = env
        .distribute("terra1impostor", &[("gauge-c", 1_000)])
        .unwrap_err();
    assert!(reason(err).contains("!remote"));
    assert_eq!(env.distribution("gauge-c").amount, Uint128::zero());
}

#[test]
fn test_duplicate_distribution_rejected() {
    let mut env = setup();
    env.distribute(CANONICAL_ROUTER, &[("gauge-c", 600)]).unwrap();

    // Same gauge again in a later message
    let err = env
        .distribute(CANONICAL_ROUTER, &[("gauge-c", 600)])
        .unwrap_err();
    assert!(reason(err).contains("!gauge"));

    // Replay of the first message
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
    assert_eq!(env.status().total, Uint128::new(600));
}

#[test]
fn test_only_canonical_router_trusted() {
    let mut env = setup();

    let err = env
        .app
        .execute_contract(
            env.owner.clone(),
            env.child.clone(),
            &ExecuteMsg::SetTrustedRemote {
                chain_id: 5,
                remote: "terra1other".to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert!(reason(err).contains("!config"));

    let config: ConfigResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.child, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.canonical_router.as_deref(), Some(CANONICAL_ROUTER));
    assert_eq!(config.stash_periods, 4);
}
