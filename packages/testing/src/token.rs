//! CW20 token helpers backed by `cw20-base`.

use cosmwasm_std::{Addr, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, ContractWrapper, Executor};

pub fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

/// Instantiate a 6-decimal cw20-base token with the given balances.
pub fn instantiate_cw20(
    app: &mut App,
    creator: &Addr,
    symbol: &str,
    balances: &[(&Addr, u128)],
    minter: Option<&Addr>,
) -> Addr {
    let code_id = app.store_code(contract_cw20());
    app.instantiate_contract(
        code_id,
        creator.clone(),
        &cw20_base::msg::InstantiateMsg {
            name: format!("{} Token", symbol),
            symbol: symbol.to_string(),
            decimals: 6,
            initial_balances: balances
                .iter()
                .map(|(address, amount)| Cw20Coin {
                    address: address.to_string(),
                    amount: Uint128::new(*amount),
                })
                .collect(),
            mint: minter.map(|m| MinterResponse {
                minter: m.to_string(),
                cap: None,
            }),
            marketing: None,
        },
        &[],
        symbol,
        None,
    )
    .unwrap()
}

pub fn cw20_balance(app: &App, token: &Addr, holder: &Addr) -> Uint128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &Cw20QueryMsg::Balance {
                address: holder.to_string(),
            },
        )
        .unwrap();
    res.balance
}
