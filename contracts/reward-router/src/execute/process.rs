use std::collections::BTreeMap;

use common::interfaces::fund_msg;
use common::message::{GaugeDistribution, RouterPayload};
use common::transport::send_msg;
use common::{epoch_of, AssetInfo};
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};
use lockbox::msg::bridge_out_msg;

use super::assert_distributor;
use crate::error::ContractError;
use crate::state::{CONFIG, EPOCHS, POOL_IDS, PROCESSED, REMOTES, WEIGHTS};

pub fn execute_process_rewards(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    epoch: u64,
    gauges: Vec<String>,
) -> Result<Response, ContractError> {
    assert_distributor(deps.storage, &info)?;
    let config = CONFIG.load(deps.storage)?;

    if epoch >= epoch_of(env.block.time.seconds(), config.epoch_duration) {
        return Err(ContractError::EpochNotClosed { epoch });
    }
    let mut record = EPOCHS
        .may_load(deps.storage, epoch)?
        .ok_or(ContractError::NoVotes { epoch })?;

    let mut response = Response::new()
        .add_attribute("method", "process_rewards")
        .add_attribute("epoch", epoch.to_string());

    let mut remote: BTreeMap<u64, Vec<GaugeDistribution>> = BTreeMap::new();
    for gauge in gauges {
        let vote = WEIGHTS
            .may_load(deps.storage, (epoch, gauge.as_str()))?
            .ok_or_else(|| ContractError::UnknownGauge {
                epoch,
                gauge: gauge.clone(),
            })?;
        if PROCESSED.has(deps.storage, (epoch, gauge.as_str())) {
            return Err(ContractError::AlreadyProcessed { epoch, gauge });
        }

        let amount = record
            .reward
            .checked_multiply_ratio(vote.weight, record.total_weight)?;
        PROCESSED.save(deps.storage, (epoch, gauge.as_str()), &amount)?;
        record.processed += 1;

        if vote.dst_chain_id == config.chain_id {
            let pool_id = POOL_IDS
                .may_load(deps.storage, gauge.as_str())?
                .ok_or_else(|| ContractError::PoolNotConfigured {
                    gauge: gauge.clone(),
                })?;
            if !amount.is_zero() {
                response = response.add_message(fund_msg(
                    &config.reward_token,
                    &config.stash,
                    pool_id,
                    config.stash_periods,
                    amount,
                )?);
            }
            response = response.add_attribute("funded", format!("{}:{}", gauge, amount));
        } else {
            remote
                .entry(vote.dst_chain_id)
                .or_default()
                .push(GaugeDistribution { gauge, amount });
        }
    }
    EPOCHS.save(deps.storage, epoch, &record)?;

    let reward_asset = AssetInfo::cw20(config.reward_token.clone());
    for (chain_id, distributions) in remote {
        let child = REMOTES
            .trusted(deps.storage, chain_id)?
            .ok_or(ContractError::RemoteNotConfigured { chain_id })?;
        let total = distributions
            .iter()
            .try_fold(Uint128::zero(), |total, d| total.checked_add(d.amount))?;

        if !total.is_zero() {
            response = response.add_message(bridge_out_msg(
                &config.reward_lockbox,
                &reward_asset,
                chain_id,
                &child,
                total,
            )?);
        }
        response = response
            .add_message(send_msg(
                &config.transport,
                chain_id,
                &child,
                &RouterPayload::SetDistributions {
                    epoch,
                    distributions,
                },
            )?)
            .add_attribute("bridged", format!("{}:{}", chain_id, total));
    }

    Ok(response.add_attribute("processed", record.processed.to_string()))
}
