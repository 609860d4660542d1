use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Coin, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult, Storage, Uint128, WasmMsg,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::helpers::{
    assert_owner, is_authorized, load_direct_owner, load_token, reject_funds,
    validate_exact_payment,
};
use crate::msg::*;
use crate::state::*;

const CONTRACT_NAME: &str = "crates.io:warband-warrior-nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const MAX_BATCH_SIZE: u32 = 25;
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
    let config = Config {
        owner,
        name: msg.name,
        symbol: msg.symbol,
        denom: msg.denom,
        price: msg.price,
        sale_live: false,
        land_claim_time: msg.land_claim_time,
        land_contract: None,
        resource_contract: None,
    };
    CONFIG.save(deps.storage, &config)?;
    TOKEN_COUNT.save(deps.storage, &0u64)?;
    NEXT_ID.save(deps.storage, &0u64)?;

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
        ExecuteMsg::PublicMint { quantity, stake } => {
            execute_public_mint(deps, env, info, quantity, stake)
        }
        ExecuteMsg::Stake { token_ids } => execute_stake(deps, env, info, token_ids),
        ExecuteMsg::ClaimLand { token_ids } => execute_claim_land(deps, env, info, token_ids),
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
        ExecuteMsg::Burn { token_id } => execute_burn(deps, env, info, token_id),
        ExecuteMsg::FlipSaleState {} => execute_flip_sale_state(deps, env, info),
        ExecuteMsg::SetContractAddresses { land, resource } => {
            execute_set_contract_addresses(deps, env, info, land, resource)
        }
        ExecuteMsg::SetLandClaimTime { seconds } => {
            execute_set_land_claim_time(deps, env, info, seconds)
        }
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
    }
}

// ─── Execute: Minting ───────────────────────────────────────────────────────

pub fn execute_public_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    quantity: u32,
    stake: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.sale_live {
        return Err(ContractError::SaleNotLive);
    }
    if quantity == 0 {
        return Err(ContractError::EmptyBatch);
    }
    if quantity > MAX_BATCH_SIZE {
        return Err(ContractError::BatchTooLarge {
            max: MAX_BATCH_SIZE,
        });
    }

    let expected = config
        .price
        .checked_mul(Uint128::from(quantity))
        .map_err(|e| ContractError::Std(e.into()))?;
    validate_exact_payment(&info, &config.denom, expected)?;

    let first_id = NEXT_ID.load(deps.storage)?;
    for offset in 0..quantity as u64 {
        let token_id = first_id + offset;
        let state = if stake {
            TokenState::Staked {
                staker: info.sender.clone(),
                since: env.block.time,
            }
        } else {
            TokenState::Owned {
                owner: info.sender.clone(),
            }
        };
        TOKENS.save(deps.storage, token_id, &state)?;
        if !stake {
            OWNER_TOKENS.save(deps.storage, (&info.sender, token_id), &true)?;
        }
    }

    // Scouting tokens count against the contract's custodial balance so the
    // per-holder sum still equals TOKEN_COUNT.
    let holder = if stake {
        env.contract.address.clone()
    } else {
        info.sender.clone()
    };
    bump_balance(deps.storage, &holder, quantity as u64)?;

    NEXT_ID.save(deps.storage, &(first_id + quantity as u64))?;
    TOKEN_COUNT.update(deps.storage, |c| -> StdResult<_> {
        Ok(c + quantity as u64)
    })?;

    Ok(Response::new()
        .add_attribute("action", "public_mint")
        .add_attribute("minter", info.sender.as_str())
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("first_token_id", first_id.to_string())
        .add_attribute("staked", stake.to_string()))
}

// ─── Execute: Scouting ──────────────────────────────────────────────────────

pub fn execute_stake(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_ids: Vec<u64>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    validate_batch(&token_ids)?;

    // Validate every id before touching storage so a bad id cannot leave a
    // half-staked batch behind.
    for &token_id in &token_ids {
        let owner = load_direct_owner(deps.as_ref(), token_id)?;
        if owner != info.sender {
            return Err(ContractError::Unauthorized {
                role: "owner".to_string(),
            });
        }
    }

    for &token_id in &token_ids {
        TOKENS.save(
            deps.storage,
            token_id,
            &TokenState::Staked {
                staker: info.sender.clone(),
                since: env.block.time,
            },
        )?;
        OWNER_TOKENS.remove(deps.storage, (&info.sender, token_id));
        // Custody change invalidates any standing approval
        TOKEN_APPROVALS.remove(deps.storage, token_id);
    }

    let moved = token_ids.len() as u64;
    drop_balance(deps.storage, &info.sender, moved)?;
    bump_balance(deps.storage, &env.contract.address, moved)?;

    Ok(Response::new()
        .add_attribute("action", "stake")
        .add_attribute("staker", info.sender.as_str())
        .add_attribute("count", moved.to_string()))
}

pub fn execute_claim_land(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_ids: Vec<u64>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    validate_batch(&token_ids)?;

    let config = CONFIG.load(deps.storage)?;
    let land_contract = config.land_contract.ok_or(ContractError::ContractsNotSet)?;

    // All-or-nothing: every id is validated before anything is committed, so
    // a single bad id aborts the whole claim with no partial state.
    for &token_id in &token_ids {
        let (staker, since) = match load_token(deps.as_ref(), token_id)? {
            TokenState::Staked { staker, since } => (staker, since),
            TokenState::Owned { .. } => return Err(ContractError::NotStaked { token_id }),
        };
        if staker != info.sender {
            return Err(ContractError::Unauthorized {
                role: "staker".to_string(),
            });
        }
        if env.block.time < since.plus_seconds(config.land_claim_time) {
            return Err(ContractError::ClaimTooEarly { token_id });
        }
    }

    let mut mint_msgs = Vec::with_capacity(token_ids.len());
    for &token_id in &token_ids {
        TOKENS.save(
            deps.storage,
            token_id,
            &TokenState::Owned {
                owner: info.sender.clone(),
            },
        )?;
        OWNER_TOKENS.save(deps.storage, (&info.sender, token_id), &true)?;

        mint_msgs.push(WasmMsg::Execute {
            contract_addr: land_contract.to_string(),
            msg: to_json_binary(&LandExecuteMsg::MintFor {
                recipient: info.sender.to_string(),
            })?,
            funds: vec![],
        });
    }

    let moved = token_ids.len() as u64;
    drop_balance(deps.storage, &env.contract.address, moved)?;
    bump_balance(deps.storage, &info.sender, moved)?;

    Ok(Response::new()
        .add_messages(mint_msgs)
        .add_attribute("action", "claim_land")
        .add_attribute("staker", info.sender.as_str())
        .add_attribute("count", moved.to_string()))
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

    let owner = load_direct_owner(deps.as_ref(), token_id)?;
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

    let owner = load_direct_owner(deps.as_ref(), token_id)?;
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

    let owner = load_direct_owner(deps.as_ref(), token_id)?;
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

    let owner = load_direct_owner(deps.as_ref(), token_id)?;
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

// ─── Execute: Burn ──────────────────────────────────────────────────────────

pub fn execute_burn(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let owner = load_direct_owner(deps.as_ref(), token_id)?;
    if !is_authorized(deps.as_ref(), &owner, token_id, &info.sender)? {
        return Err(ContractError::Unauthorized {
            role: "owner or approved".to_string(),
        });
    }

    TOKENS.remove(deps.storage, token_id);
    OWNER_TOKENS.remove(deps.storage, (&owner, token_id));
    TOKEN_APPROVALS.remove(deps.storage, token_id);
    drop_balance(deps.storage, &owner, 1)?;
    TOKEN_COUNT.update(deps.storage, |c| -> StdResult<_> {
        Ok(c.saturating_sub(1))
    })?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("token_id", token_id.to_string()))
}

// ─── Execute: Admin ─────────────────────────────────────────────────────────

pub fn execute_flip_sale_state(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    let config = CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        c.sale_live = !c.sale_live;
        Ok(c)
    })?;

    Ok(Response::new()
        .add_attribute("action", "flip_sale_state")
        .add_attribute("sale_live", config.sale_live.to_string()))
}

pub fn execute_set_contract_addresses(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    land: String,
    resource: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    let land_addr = deps.api.addr_validate(&land)?;
    let resource_addr = deps.api.addr_validate(&resource)?;

    CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        c.land_contract = Some(land_addr.clone());
        c.resource_contract = Some(resource_addr.clone());
        Ok(c)
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_contract_addresses")
        .add_attribute("land", land_addr.as_str())
        .add_attribute("resource", resource_addr.as_str()))
}

pub fn execute_set_land_claim_time(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    seconds: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        c.land_claim_time = seconds;
        Ok(c)
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_land_claim_time")
        .add_attribute("seconds", seconds.to_string()))
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.denom)?
        .amount;
    if balance.is_zero() {
        return Err(ContractError::NothingToWithdraw);
    }

    let msg = BankMsg::Send {
        to_address: config.owner.to_string(),
        amount: vec![Coin {
            denom: config.denom,
            amount: balance,
        }],
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "withdraw")
        .add_attribute("amount", balance.to_string()))
}

// ─── Internal state transitions ─────────────────────────────────────────────

fn validate_batch(token_ids: &[u64]) -> Result<(), ContractError> {
    if token_ids.is_empty() {
        return Err(ContractError::EmptyBatch);
    }
    if token_ids.len() as u32 > MAX_BATCH_SIZE {
        return Err(ContractError::BatchTooLarge {
            max: MAX_BATCH_SIZE,
        });
    }
    let mut seen = std::collections::BTreeSet::new();
    for &token_id in token_ids {
        if !seen.insert(token_id) {
            return Err(ContractError::DuplicateTokenId { token_id });
        }
    }
    Ok(())
}

/// Move a directly-owned warrior between accounts, updating every index and
/// clearing the single-token approval.
fn move_token(
    storage: &mut dyn Storage,
    token_id: u64,
    from: &Addr,
    to: &Addr,
) -> Result<(), ContractError> {
    TOKENS.save(
        storage,
        token_id,
        &TokenState::Owned { owner: to.clone() },
    )?;
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

pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::OwnerOf { token_id } => query_owner_of(deps, env, token_id),
        QueryMsg::BalanceOf { owner } => query_balance_of(deps, owner),
        QueryMsg::NumTokens {} => query_num_tokens(deps),
        QueryMsg::SaleLive {} => query_sale_live(deps),
        QueryMsg::Activity { token_id } => query_activity(deps, token_id),
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

pub fn query_owner_of(deps: Deps, env: Env, token_id: u64) -> StdResult<Binary> {
    let owner = match TOKENS.load(deps.storage, token_id)? {
        TokenState::Owned { owner } => owner,
        // Scouting tokens are held in custody by the contract itself
        TokenState::Staked { .. } => env.contract.address,
    };
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

pub fn query_sale_live(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&SaleLiveResponse {
        live: config.sale_live,
    })
}

pub fn query_activity(deps: Deps, token_id: u64) -> StdResult<Binary> {
    let activity = match TOKENS.may_load(deps.storage, token_id)? {
        Some(TokenState::Staked { staker, since }) => Some(ActivityResponse {
            staker: staker.to_string(),
            since,
        }),
        _ => None,
    };
    to_json_binary(&activity)
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
