use std::collections::HashSet;

use common::epoch_of;
use common::interfaces::GaugeVoterExecuteMsg;
use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Storage, Uint128, WasmMsg,
};

use super::assert_distributor;
use crate::error::ContractError;
use crate::state::{
    Config, EpochRecord, GaugeVote, CONFIG, DST_CHAIN_IDS, EPOCHS, NO_DEPOSIT_GAUGES, POOL_IDS,
    WEIGHTS,
};

/// Where `gauge` is funded, if it can be funded at all
fn eligible_chain(
    storage: &dyn Storage,
    config: &Config,
    gauge: &str,
) -> Result<Option<u64>, ContractError> {
    if NO_DEPOSIT_GAUGES.may_load(storage, gauge)?.unwrap_or(false) {
        return Ok(None);
    }
    let Some(chain_id) = DST_CHAIN_IDS.may_load(storage, gauge)? else {
        return Ok(None);
    };
    if chain_id == config.chain_id && !POOL_IDS.has(storage, gauge) {
        return Ok(None);
    }
    Ok(Some(chain_id))
}

pub fn execute_vote_gauge_weight(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    gauges: Vec<String>,
    weights: Vec<u64>,
) -> Result<Response, ContractError> {
    assert_distributor(deps.storage, &info)?;
    let config = CONFIG.load(deps.storage)?;

    if gauges.is_empty() || gauges.len() != weights.len() {
        return Err(ContractError::InvalidVote {
            reason: format!(
                "{} gauges and {} weights",
                gauges.len(),
                weights.len()
            ),
        });
    }
    let mut seen = HashSet::new();
    if let Some(dup) = gauges.iter().find(|gauge| !seen.insert(gauge.as_str())) {
        return Err(ContractError::InvalidVote {
            reason: format!("duplicate gauge {}", dup),
        });
    }

    let epoch = epoch_of(env.block.time.seconds(), config.epoch_duration);
    if EPOCHS.has(deps.storage, epoch) {
        return Err(ContractError::AlreadyVoted { epoch });
    }

    let mut record = EpochRecord {
        reward: config.reward_per_epoch,
        ..EpochRecord::default()
    };
    let mut excluded = 0u32;
    for (gauge, weight) in gauges.iter().zip(weights.iter()) {
        let dst_chain_id = match eligible_chain(deps.storage, &config, gauge)? {
            Some(chain_id) if *weight > 0 => chain_id,
            _ => {
                excluded += 1;
                continue;
            }
        };
        WEIGHTS.save(
            deps.storage,
            (epoch, gauge.as_str()),
            &GaugeVote {
                weight: *weight,
                dst_chain_id,
            },
        )?;
        record.total_weight = record.total_weight.checked_add(Uint128::from(*weight))?;
        record.eligible += 1;
    }
    EPOCHS.save(deps.storage, epoch, &record)?;

    let mut response = Response::new()
        .add_attribute("method", "vote_gauge_weight")
        .add_attribute("epoch", epoch.to_string())
        .add_attribute("eligible", record.eligible.to_string())
        .add_attribute("excluded", excluded.to_string())
        .add_attribute("total_weight", record.total_weight.to_string());

    if let Some(voter) = config.voter {
        response = response.add_message(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: voter.to_string(),
            msg: to_json_binary(&GaugeVoterExecuteMsg::VoteGaugeWeight { gauges, weights })?,
            funds: vec![],
        }));
    }

    Ok(response)
}
