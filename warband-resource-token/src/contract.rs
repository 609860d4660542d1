use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::helpers::{assert_game_master, assert_nonzero, assert_owner, deduct_balance, reject_funds};
use crate::msg::*;
use crate::state::*;

const CONTRACT_NAME: &str = "crates.io:warband-resource-token";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const MAX_BATCH_SIZE: u32 = 25;

// ─── Instantiate ────────────────────────────────────────────────────────────

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let config = Config {
        owner,
        name: msg.name,
        symbol: msg.symbol,
        decimals: msg.decimals,
    };
    CONFIG.save(deps.storage, &config)?;
    TOTAL_SUPPLY.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("owner", config.owner.as_str()))
}

// ─── Execute dispatch ───────────────────────────────────────────────────────

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, env, info, recipient, amount),
        ExecuteMsg::Burn { from, amount } => execute_burn(deps, env, info, from, amount),
        ExecuteMsg::EditGameMasters { accounts, flags } => {
            execute_edit_game_masters(deps, env, info, accounts, flags)
        }
    }
}

// ─── Execute: Transfers ─────────────────────────────────────────────────────

pub fn execute_transfer(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_nonzero(amount)?;

    let recipient_addr = deps.api.addr_validate(&recipient)?;

    deduct_balance(deps.branch(), &info.sender, amount)?;
    BALANCES.update(deps.storage, &recipient_addr, |b| -> StdResult<_> {
        Ok(b.unwrap_or_default().checked_add(amount)?)
    })?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender.as_str())
        .add_attribute("to", recipient_addr.as_str())
        .add_attribute("amount", amount.to_string()))
}

// ─── Execute: Privileged supply changes ─────────────────────────────────────

pub fn execute_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_game_master(deps.as_ref(), &info.sender)?;
    assert_nonzero(amount)?;

    let recipient_addr = deps.api.addr_validate(&recipient)?;

    BALANCES.update(deps.storage, &recipient_addr, |b| -> StdResult<_> {
        Ok(b.unwrap_or_default().checked_add(amount)?)
    })?;
    TOTAL_SUPPLY.update(deps.storage, |s| -> StdResult<_> {
        Ok(s.checked_add(amount)?)
    })?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("to", recipient_addr.as_str())
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_burn(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    from: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_game_master(deps.as_ref(), &info.sender)?;
    assert_nonzero(amount)?;

    let from_addr = deps.api.addr_validate(&from)?;

    deduct_balance(deps.branch(), &from_addr, amount)?;
    TOTAL_SUPPLY.update(deps.storage, |s| -> StdResult<_> {
        Ok(s.checked_sub(amount)?)
    })?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("from", from_addr.as_str())
        .add_attribute("amount", amount.to_string()))
}

// ─── Execute: Admin ─────────────────────────────────────────────────────────

pub fn execute_edit_game_masters(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    accounts: Vec<String>,
    flags: Vec<bool>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    if accounts.is_empty() {
        return Err(ContractError::EmptyBatch);
    }
    if accounts.len() != flags.len() {
        return Err(ContractError::LengthMismatch {
            accounts: accounts.len(),
            flags: flags.len(),
        });
    }
    if accounts.len() as u32 > MAX_BATCH_SIZE {
        return Err(ContractError::BatchTooLarge {
            max: MAX_BATCH_SIZE,
        });
    }

    // Validate all addresses upfront
    let validated: Vec<(Addr, bool)> = accounts
        .iter()
        .zip(flags.iter())
        .map(|(a, f)| Ok((deps.api.addr_validate(a)?, *f)))
        .collect::<Result<Vec<_>, ContractError>>()?;

    for (account, flag) in &validated {
        if *flag {
            GAME_MASTERS.save(deps.storage, account, &true)?;
        } else {
            GAME_MASTERS.remove(deps.storage, account);
        }
    }

    Ok(Response::new()
        .add_attribute("action", "edit_game_masters")
        .add_attribute("count", validated.len().to_string()))
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::Balance { address } => query_balance(deps, address),
        QueryMsg::TotalSupply {} => query_total_supply(deps),
        QueryMsg::IsGameMaster { address } => query_is_game_master(deps, address),
    }
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_balance(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let balance = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
    to_json_binary(&BalanceResponse { balance })
}

pub fn query_total_supply(deps: Deps) -> StdResult<Binary> {
    let supply = TOTAL_SUPPLY.load(deps.storage)?;
    to_json_binary(&TotalSupplyResponse { supply })
}

pub fn query_is_game_master(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let is_game_master = GAME_MASTERS.may_load(deps.storage, &addr)?.unwrap_or(false);
    to_json_binary(&GameMasterResponse { is_game_master })
}

// ─── Migrate ────────────────────────────────────────────────────────────────

pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
