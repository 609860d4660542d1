use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult,
    Storage, WasmMsg,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::helpers::{assert_minter, is_authorized, load_owner, reject_funds};
use crate::msg::*;
use crate::state::*;

const CONTRACT_NAME: &str = "crates.io:warband-land-nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_QUERY_LIMIT: u32 = 30;
const MAX_QUERY_LIMIT: u32 = 100;

// ─── Instantiate ────────────────────────────────────────────────────────────

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let minter = deps.api.addr_validate(&msg.minter)?;

    let config = Config {
        owner,
        minter,
        name: msg.name,
        symbol: msg.symbol,
    };
    CONFIG.save(deps.storage, &config)?;
    TOKEN_COUNT.save(deps.storage, &0u64)?;
    NEXT_ID.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("owner", config.owner.as_str())
        .add_attribute("minter", config.minter.as_str()))
}

// ─── Execute dispatch ───────────────────────────────────────────────────────

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::MintFor { recipient } => execute_mint_for(deps, env, info, recipient),
        ExecuteMsg::TransferNft {
            recipient,
            token_id,
        } => execute_transfer_nft(deps, env, info, recipient, token_id),
        ExecuteMsg::SendNft {
            contract,
            token_id,
            msg,
        } => execute_send_nft(deps, env, info, contract, token_id, msg),
        ExecuteMsg::Approve { spender, token_id } => {
            execute_approve(deps, env, info, spender, token_id)
        }
        ExecuteMsg::Revoke { token_id } => execute_revoke(deps, env, info, token_id),
        ExecuteMsg::ApproveAll { operator } => execute_approve_all(deps, env, info, operator),
        ExecuteMsg::RevokeAll { operator } => execute_revoke_all(deps, env, info, operator),
    }
}

// ─── Execute: Minting ───────────────────────────────────────────────────────

pub fn execute_mint_for(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
) -> Result<Response, ContractError> {
    assert_minter(deps.as_ref(), &info.sender)?;

    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let token_id = NEXT_ID.load(deps.storage)?;
    TOKENS.save(deps.storage, token_id, &recipient_addr)?;
    OWNER_TOKENS.save(deps.storage, (&recipient_addr, token_id), &true)?;
    bump_balance(deps.storage, &recipient_addr, 1)?;
    NEXT_ID.save(deps.storage, &(token_id + 1))?;
    TOKEN_COUNT.update(deps.storage, |c| -> StdResult<_> { Ok(c + 1) })?;

    Ok(Response::new()
        .add_attribute("action", "mint_for")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("to", recipient_addr.as_str()))
}

// ─── Execute: Transfers ─────────────────────────────────────────────────────

pub fn execute_transfer_nft(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    token_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let owner = load_owner(deps.as_ref(), token_id)?;
    if !is_authorized(deps.as_ref(), &owner, token_id, &info.sender)? {
        return Err(ContractError::Unauthorized {
            role: "owner or approved".to_string(),
        });
    }

    let new_owner = deps.api.addr_validate(&recipient)?;
    move_token(deps.storage, token_id, &owner, &new_owner)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_nft")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("from", owner.as_str())
        .add_attribute("to", new_owner.as_str()))
}

pub fn execute_send_nft(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    contract: String,
    token_id: u64,
    msg: Binary,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let owner = load_owner(deps.as_ref(), token_id)?;
    if !is_authorized(deps.as_ref(), &owner, token_id, &info.sender)? {
        return Err(ContractError::Unauthorized {
            role: "owner or approved".to_string(),
        });
    }

    let contract_addr = deps.api.addr_validate(&contract)?;
    // State mutation BEFORE sub-message dispatch
    move_token(deps.storage, token_id, &owner, &contract_addr)?;

    let callback = cw721::receiver::Cw721ReceiveMsg {
        sender: info.sender.to_string(),
        token_id: token_id.to_string(),
        msg,
    };
    let callback_msg = WasmMsg::Execute {
        contract_addr: contract_addr.to_string(),
        msg: to_json_binary(&callback)?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(callback_msg)
        .add_attribute("action", "send_nft")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("from", owner.as_str())
        .add_attribute("to", contract_addr.as_str()))
}

// ─── Execute: Approvals ─────────────────────────────────────────────────────

pub fn execute_approve(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    spender: String,
    token_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let owner = load_owner(deps.as_ref(), token_id)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized {
            role: "token owner".to_string(),
        });
    }

    let spender_addr = deps.api.addr_validate(&spender)?;
    TOKEN_APPROVALS.save(deps.storage, token_id, &spender_addr)?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("spender", spender_addr.as_str()))
}

pub fn execute_revoke(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let owner = load_owner(deps.as_ref(), token_id)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized {
            role: "token owner".to_string(),
        });
    }

    TOKEN_APPROVALS.remove(deps.storage, token_id);

    Ok(Response::new()
        .add_attribute("action", "revoke")
        .add_attribute("token_id", token_id.to_string()))
}

pub fn execute_approve_all(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    operator: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let operator_addr = deps.api.addr_validate(&operator)?;
    OPERATOR_APPROVALS.save(deps.storage, (&info.sender, &operator_addr), &true)?;

    Ok(Response::new()
        .add_attribute("action", "approve_all")
        .add_attribute("owner", info.sender.as_str())
        .add_attribute("operator", operator_addr.as_str()))
}

pub fn execute_revoke_all(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    operator: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let operator_addr = deps.api.addr_validate(&operator)?;
    OPERATOR_APPROVALS.remove(deps.storage, (&info.sender, &operator_addr));

    Ok(Response::new()
        .add_attribute("action", "revoke_all")
        .add_attribute("owner", info.sender.as_str())
        .add_attribute("operator", operator_addr.as_str()))
}

// ─── Internal state transitions ─────────────────────────────────────────────

/// Move a parcel between owners, updating every index and clearing the
/// single-token approval.
fn move_token(
    storage: &mut dyn Storage,
    token_id: u64,
    from: &Addr,
    to: &Addr,
) -> Result<(), ContractError> {
    TOKENS.save(storage, token_id, to)?;
    OWNER_TOKENS.remove(storage, (from, token_id));
    OWNER_TOKENS.save(storage, (to, token_id), &true)?;
    drop_balance(storage, from, 1)?;
    bump_balance(storage, to, 1)?;
    TOKEN_APPROVALS.remove(storage, token_id);
    Ok(())
}

fn bump_balance(storage: &mut dyn Storage, account: &Addr, by: u64) -> StdResult<()> {
    BALANCES.update(storage, account, |b| -> StdResult<_> {
        Ok(b.unwrap_or_default() + by)
    })?;
    Ok(())
}

fn drop_balance(storage: &mut dyn Storage, account: &Addr, by: u64) -> StdResult<()> {
    let balance = BALANCES.may_load(storage, account)?.unwrap_or_default();
    let remaining = balance.saturating_sub(by);
    if remaining == 0 {
        BALANCES.remove(storage, account);
    } else {
        BALANCES.save(storage, account, &remaining)?;
    }
    Ok(())
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::OwnerOf { token_id } => query_owner_of(deps, token_id),
        QueryMsg::BalanceOf { owner } => query_balance_of(deps, owner),
        QueryMsg::NumTokens {} => query_num_tokens(deps),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => query_tokens(deps, owner, start_after, limit),
        QueryMsg::AllTokens { start_after, limit } => query_all_tokens(deps, start_after, limit),
        QueryMsg::Approval { token_id, spender } => query_approval(deps, token_id, spender),
        QueryMsg::Operator { owner, operator } => query_operator(deps, owner, operator),
    }
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_owner_of(deps: Deps, token_id: u64) -> StdResult<Binary> {
    let owner = TOKENS.load(deps.storage, token_id)?;
    let approvals = TOKEN_APPROVALS
        .may_load(deps.storage, token_id)?
        .map(|a| a.to_string())
        .into_iter()
        .collect();

    to_json_binary(&OwnerOfResponse {
        owner: owner.to_string(),
        approvals,
    })
}

pub fn query_balance_of(deps: Deps, owner: String) -> StdResult<Binary> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let balance = BALANCES
        .may_load(deps.storage, &owner_addr)?
        .unwrap_or_default();
    to_json_binary(&BalanceResponse { balance })
}

pub fn query_num_tokens(deps: Deps) -> StdResult<Binary> {
    let count = TOKEN_COUNT.load(deps.storage)?;
    to_json_binary(&NumTokensResponse { count })
}

pub fn query_tokens(
    deps: Deps,
    owner: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after.map(cw_storage_plus::Bound::exclusive);

    let tokens: Vec<u64> = OWNER_TOKENS
        .prefix(&owner_addr)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|k| k.ok())
        .collect();

    to_json_binary(&TokensResponse { tokens })
}

pub fn query_all_tokens(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after.map(cw_storage_plus::Bound::exclusive);

    let tokens: Vec<u64> = TOKENS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|k| k.ok())
        .collect();

    to_json_binary(&TokensResponse { tokens })
}

pub fn query_approval(deps: Deps, token_id: u64, spender: String) -> StdResult<Binary> {
    let spender_addr = deps.api.addr_validate(&spender)?;
    let approved = TOKEN_APPROVALS
        .may_load(deps.storage, token_id)?
        .map(|a| a == spender_addr)
        .unwrap_or(false);

    to_json_binary(&ApprovalResponse { approved })
}

pub fn query_operator(deps: Deps, owner: String, operator: String) -> StdResult<Binary> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let operator_addr = deps.api.addr_validate(&operator)?;
    let approved = OPERATOR_APPROVALS
        .may_load(deps.storage, (&owner_addr, &operator_addr))?
        .unwrap_or(false);

    to_json_binary(&OperatorResponse { approved })
}

// ─── Migrate ────────────────────────────────────────────────────────────────

pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
