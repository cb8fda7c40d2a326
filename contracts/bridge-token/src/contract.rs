//! Bridge Token - Entry Points
//!
//! CW20 messages are delegated to `cw20-base`; bridge messages are handled in
//! `execute/`.

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;
use cw20::MinterResponse;
use cw20_base::allowances::{
    execute_decrease_allowance, execute_increase_allowance, execute_transfer_from,
    query_allowance,
};
use cw20_base::contract::{
    execute_burn, execute_send, execute_transfer, query_balance, query_minter, query_token_info,
};
use cw20_base::enumerable::query_all_accounts;

use common::DEFAULT_EPOCH_DURATION;

use crate::error::ContractError;
use crate::execute::{
    execute_bridge_out, execute_pause, execute_process_queued, execute_receive_message,
    execute_set_guardian, execute_set_inflow_limit, execute_set_queue_delay,
    execute_set_transport, execute_set_trusted_remote, execute_unpause,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_epoch_flow, query_queued_transfers, query_stats, query_trusted_remote,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_QUEUE_DELAY,
    MAX_QUEUE_DELAY, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    // The contract is its own minter; supply only moves through the bridge.
    cw20_base::contract::instantiate(
        deps.branch(),
        env.clone(),
        info,
        cw20_base::msg::InstantiateMsg {
            name: msg.name,
            symbol: msg.symbol,
            decimals: msg.decimals,
            initial_balances: vec![],
            mint: Some(MinterResponse {
                minter: env.contract.address.to_string(),
                cap: None,
            }),
            marketing: None,
        },
    )?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let epoch_duration = msg.epoch_duration.unwrap_or(DEFAULT_EPOCH_DURATION);
    if epoch_duration == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "epoch duration must be greater than zero".to_string(),
        });
    }

    let queue_delay = msg.queue_delay.unwrap_or(DEFAULT_QUEUE_DELAY);
    if queue_delay > MAX_QUEUE_DELAY {
        return Err(ContractError::InvalidConfig {
            reason: format!("queue delay cannot exceed {} seconds", MAX_QUEUE_DELAY),
        });
    }

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        guardian: None,
        paused: false,
        transport: deps.api.addr_validate(&msg.transport)?,
        canonical_chain_id: msg.canonical_chain_id,
        epoch_duration,
        inflow_limit: msg.inflow_limit,
        queue_delay,
    };
    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("canonical_chain_id", config.canonical_chain_id.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // CW20
        ExecuteMsg::Transfer { recipient, amount } => {
            Ok(execute_transfer(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => Ok(execute_send(deps, env, info, contract, amount, msg)?),
        ExecuteMsg::Burn { amount } => Ok(execute_burn(deps, env, info, amount)?),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => Ok(execute_transfer_from(
            deps, env, info, owner, recipient, amount,
        )?),

        // Bridge
        ExecuteMsg::BridgeOut { recipient, amount } => {
            execute_bridge_out(deps, env, info, recipient, amount)
        }
        ExecuteMsg::ReceiveMessage(msg) => execute_receive_message(deps, env, info, msg),
        ExecuteMsg::ProcessQueued {
            epoch,
            chain_id,
            recipient,
            amount,
            queued_at,
        } => execute_process_queued(deps, env, epoch, chain_id, recipient, amount, queued_at),

        // Configuration
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::SetInflowLimit { limit } => execute_set_inflow_limit(deps, info, limit),
        ExecuteMsg::SetQueueDelay { delay_seconds } => {
            execute_set_queue_delay(deps, info, delay_seconds)
        }
        ExecuteMsg::SetTrustedRemote { chain_id, remote } => {
            execute_set_trusted_remote(deps, info, chain_id, remote)
        }
        ExecuteMsg::SetTransport { transport } => execute_set_transport(deps, info, transport),
        ExecuteMsg::SetGuardian { guardian } => execute_set_guardian(deps, info, guardian),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Minter {} => to_json_binary(&query_minter(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::AllAccounts { start_after, limit } => {
            to_json_binary(&query_all_accounts(deps, start_after, limit)?)
        }
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::EpochFlow { epoch } => to_json_binary(&query_epoch_flow(deps, env, epoch)?),
        QueryMsg::QueuedTransfers { start_after, limit } => {
            to_json_binary(&query_queued_transfers(deps, start_after, limit)?)
        }
        QueryMsg::TrustedRemote { chain_id } => {
            to_json_binary(&query_trusted_remote(deps, chain_id)?)
        }
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
