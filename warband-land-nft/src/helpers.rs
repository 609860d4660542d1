use cosmwasm_std::{Addr, Deps, MessageInfo, StdResult};

use crate::error::ContractError;
use crate::state::{CONFIG, OPERATOR_APPROVALS, TOKENS, TOKEN_APPROVALS};

/// Verify the caller is the authorized minter (the warrior contract).
pub fn assert_minter(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.minter {
        return Err(ContractError::Unauthorized {
            role: "minter".to_string(),
        });
    }
    Ok(())
}

/// Load a parcel's owner or fail with TokenNotFound.
pub fn load_owner(deps: Deps, token_id: u64) -> Result<Addr, ContractError> {
    TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })
}

/// Check if `spender` may transfer `token_id`: owner, token-level approval,
/// or operator approval.
pub fn is_authorized(deps: Deps, owner: &Addr, token_id: u64, spender: &Addr) -> StdResult<bool> {
    if spender == owner {
        return Ok(true);
    }
    if let Some(approved) = TOKEN_APPROVALS.may_load(deps.storage, token_id)? {
        if approved == *spender {
            return Ok(true);
        }
    }
    if let Some(true) = OPERATOR_APPROVALS.may_load(deps.storage, (owner, spender))? {
        return Ok(true);
    }
    Ok(false)
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}
