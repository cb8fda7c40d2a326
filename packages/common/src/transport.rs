//! Messaging transport boundary.
//!
//! The transport itself is external. Contracts hand it outbound payloads with
//! [`TransportExecuteMsg::Send`] and receive inbound ones as an
//! [`InboundMessage`] delivered by their configured endpoint. Delivery is
//! at-least-once and may be reordered, so every receiver runs
//! [`Remotes::accept`] before touching state: the caller must be the
//! endpoint, the source must be the trusted remote for its chain, and the
//! transport nonce must not have been seen before.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, CosmosMsg, Order, StdError, StdResult, Storage,
    WasmMsg,
};
use cw_storage_plus::Map;
use serde::{de::DeserializeOwned, Serialize};

/// Message accepted by a transport endpoint
#[cw_serde]
pub enum TransportExecuteMsg {
    /// Deliver `payload` to `dest_contract` on `dest_chain_id`
    Send {
        dest_chain_id: u64,
        dest_contract: String,
        payload: Binary,
    },
}

/// Envelope the endpoint delivers to the destination contract
#[cw_serde]
pub struct InboundMessage {
    pub src_chain_id: u64,
    /// Sending contract on the source chain
    pub src_contract: String,
    /// Transport-assigned sequence number, unique per source chain
    pub nonce: u64,
    pub payload: Binary,
}

impl InboundMessage {
    pub fn decode<T: DeserializeOwned>(&self) -> StdResult<T> {
        from_json(&self.payload)
    }
}

/// Build the message that hands `payload` to the local transport endpoint.
pub fn send_msg<T: Serialize>(
    transport: &Addr,
    dest_chain_id: u64,
    dest_contract: &str,
    payload: &T,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: transport.to_string(),
        msg: to_json_binary(&TransportExecuteMsg::Send {
            dest_chain_id,
            dest_contract: dest_contract.to_string(),
            payload: to_json_binary(payload)?,
        })?,
        funds: vec![],
    }))
}

/// Why an inbound message was refused
#[derive(Debug, PartialEq)]
pub enum InboundRejection {
    /// Caller is not the configured transport endpoint
    NotTransport,
    /// Source contract is not the trusted remote for its chain
    UntrustedRemote { chain_id: u64 },
    /// Nonce already delivered from this chain
    Replayed { chain_id: u64, nonce: u64 },
    Std(StdError),
}

impl From<StdError> for InboundRejection {
    fn from(err: StdError) -> Self {
        InboundRejection::Std(err)
    }
}

/// Trusted remote allow-list and inbound replay guard of one contract.
pub struct Remotes<'a> {
    trusted: Map<'a, u64, String>,
    received: Map<'a, (u64, u64), bool>,
}

impl<'a> Remotes<'a> {
    pub const fn new(trusted_namespace: &'a str, received_namespace: &'a str) -> Self {
        Remotes {
            trusted: Map::new(trusted_namespace),
            received: Map::new(received_namespace),
        }
    }

    pub fn set_trusted(&self, storage: &mut dyn Storage, chain_id: u64, remote: &str) -> StdResult<()> {
        self.trusted.save(storage, chain_id, &remote.to_string())
    }

    pub fn remove_trusted(&self, storage: &mut dyn Storage, chain_id: u64) {
        self.trusted.remove(storage, chain_id)
    }

    pub fn trusted(&self, storage: &dyn Storage, chain_id: u64) -> StdResult<Option<String>> {
        self.trusted.may_load(storage, chain_id)
    }

    /// All configured `(chain_id, remote)` pairs.
    pub fn all_trusted(&self, storage: &dyn Storage) -> StdResult<Vec<(u64, String)>> {
        self.trusted
            .range(storage, None, None, Order::Ascending)
            .collect()
    }

    pub fn is_received(&self, storage: &dyn Storage, chain_id: u64, nonce: u64) -> StdResult<bool> {
        Ok(self.received.has(storage, (chain_id, nonce)))
    }

    /// Verify an inbound message and mark its nonce as consumed.
    pub fn accept(
        &self,
        storage: &mut dyn Storage,
        transport: &Addr,
        caller: &Addr,
        msg: &InboundMessage,
    ) -> Result<(), InboundRejection> {
        if caller != transport {
            return Err(InboundRejection::NotTransport);
        }

        let trusted = self.trusted.may_load(storage, msg.src_chain_id)?;
        if trusted.as_deref() != Some(msg.src_contract.as_str()) {
            return Err(InboundRejection::UntrustedRemote {
                chain_id: msg.src_chain_id,
            });
        }

        let key = (msg.src_chain_id, msg.nonce);
        if self.received.has(storage, key) {
            return Err(InboundRejection::Replayed {
                chain_id: msg.src_chain_id,
                nonce: msg.nonce,
            });
        }
        self.received.save(storage, key, &true)?;

        Ok(())
    }
}
