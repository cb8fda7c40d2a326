//! Mock share-based yield vault.
//!
//! Depositors receive shares against the vault's accounted underlying. Yield
//! arrives as underlying sent straight to the vault and only counts once
//! `Harvest` folds it into the accounting. If an extra reward token is
//! configured, `Harvest` also pays the vault's whole balance of it to the
//! caller.

use common::interfaces::{UnderlyingBalanceResponse, VaultHookMsg, VaultQueryMsg};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdError, StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, Cw20ReceiveMsg};
use cw_multi_test::ContractWrapper;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct InstantiateMsg {
    pub underlying: String,
    pub reward_token: Option<String>,
}

/// Superset of `common::interfaces::VaultExecuteMsg` with the deposit hook
#[cw_serde]
pub enum ExecuteMsg {
    Receive(Cw20ReceiveMsg),
    Harvest { min_out_bps: u64 },
    WithdrawUnderlying { amount: Uint128, recipient: String },
}

#[cw_serde]
struct State {
    underlying: Addr,
    reward_token: Option<Addr>,
    accounted: Uint128,
    total_shares: Uint128,
}

const STATE: Item<State> = Item::new("state");
const SHARES: Map<&Addr, Uint128> = Map::new("shares");

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    let state = State {
        underlying: deps.api.addr_validate(&msg.underlying)?,
        reward_token: msg
            .reward_token
            .map(|t| deps.api.addr_validate(&t))
            .transpose()?,
        accounted: Uint128::zero(),
        total_shares: Uint128::zero(),
    };
    STATE.save(deps.storage, &state)?;
    Ok(Response::new())
}

pub fn execute(deps: DepsMut, env: Env, info: MessageInfo, msg: ExecuteMsg) -> StdResult<Response> {
    let mut state = STATE.load(deps.storage)?;
    match msg {
        ExecuteMsg::Receive(wrapper) => {
            if info.sender != state.underlying {
                return Err(StdError::generic_err("vault only accepts its underlying"));
            }
            let VaultHookMsg::Deposit {} = from_json(&wrapper.msg)?;
            let depositor = deps.api.addr_validate(&wrapper.sender)?;

            let minted = if state.total_shares.is_zero() || state.accounted.is_zero() {
                wrapper.amount
            } else {
                wrapper
                    .amount
                    .multiply_ratio(state.total_shares, state.accounted)
            };
            state.total_shares += minted;
            state.accounted += wrapper.amount;
            SHARES.update(deps.storage, &depositor, |s| -> StdResult<_> {
                Ok(s.unwrap_or_default() + minted)
            })?;
            STATE.save(deps.storage, &state)?;

            Ok(Response::new()
                .add_attribute("action", "vault_deposit")
                .add_attribute("shares", minted))
        }
        ExecuteMsg::Harvest { min_out_bps } => {
            let balance = cw20_balance(deps.as_ref(), &state.underlying, &env.contract.address)?;
            let realized = balance.saturating_sub(state.accounted);
            state.accounted = balance;
            STATE.save(deps.storage, &state)?;

            let mut response = Response::new()
                .add_attribute("action", "vault_harvest")
                .add_attribute("realized", realized)
                .add_attribute("min_out_bps", min_out_bps.to_string());

            if let Some(reward_token) = &state.reward_token {
                let rewards = cw20_balance(deps.as_ref(), reward_token, &env.contract.address)?;
                if !rewards.is_zero() {
                    response = response.add_message(WasmMsg::Execute {
                        contract_addr: reward_token.to_string(),
                        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                            recipient: info.sender.to_string(),
                            amount: rewards,
                        })?,
                        funds: vec![],
                    });
                }
            }
            Ok(response)
        }
        ExecuteMsg::WithdrawUnderlying { amount, recipient } => {
            if state.accounted.is_zero() {
                return Err(StdError::generic_err("vault is empty"));
            }
            // Round shares up so a withdrawal never takes more than it burns.
            let burned = amount.multiply_ratio(state.total_shares, state.accounted);
            let burned = if burned.multiply_ratio(state.accounted, state.total_shares) < amount {
                burned + Uint128::one()
            } else {
                burned
            };
            let held = SHARES.may_load(deps.storage, &info.sender)?.unwrap_or_default();
            let remaining = held
                .checked_sub(burned)
                .map_err(|_| StdError::generic_err("insufficient vault shares"))?;
            SHARES.save(deps.storage, &info.sender, &remaining)?;
            state.total_shares -= burned;
            state.accounted = state.accounted.checked_sub(amount)?;
            STATE.save(deps.storage, &state)?;

            Ok(Response::new()
                .add_attribute("action", "vault_withdraw")
                .add_message(WasmMsg::Execute {
                    contract_addr: state.underlying.to_string(),
                    msg: to_json_binary(&Cw20ExecuteMsg::Transfer { recipient, amount })?,
                    funds: vec![],
                }))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: VaultQueryMsg) -> StdResult<Binary> {
    match msg {
        VaultQueryMsg::BalanceOfUnderlying { holder } => {
            let state = STATE.load(deps.storage)?;
            let holder = deps.api.addr_validate(&holder)?;
            let shares = SHARES.may_load(deps.storage, &holder)?.unwrap_or_default();
            let amount = if state.total_shares.is_zero() {
                Uint128::zero()
            } else {
                shares.multiply_ratio(state.accounted, state.total_shares)
            };
            to_json_binary(&UnderlyingBalanceResponse { amount })
        }
    }
}

fn cw20_balance(deps: Deps, token: &Addr, holder: &Addr) -> StdResult<Uint128> {
    let res: BalanceResponse = deps.querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: holder.to_string(),
        },
    )?;
    Ok(res.balance)
}

pub fn contract_vault() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}
