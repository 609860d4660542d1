use cosmwasm_std::{Addr, Deps, MessageInfo, StdResult, Uint128};

use crate::error::ContractError;
use crate::state::{TokenState, CONFIG, OPERATOR_APPROVALS, TOKENS, TOKEN_APPROVALS};

/// Verify the caller is the contract owner.
pub fn assert_owner(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.owner {
        return Err(ContractError::Unauthorized {
            role: "owner".to_string(),
        });
    }
    Ok(())
}

/// Load a token's state or fail with TokenNotFound. Burned ids stay gone.
pub fn load_token(deps: Deps, token_id: u64) -> Result<TokenState, ContractError> {
    TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })
}

/// Load a token and require it to be directly owned (not scouting),
/// returning the owner.
pub fn load_direct_owner(deps: Deps, token_id: u64) -> Result<Addr, ContractError> {
    match load_token(deps, token_id)? {
        TokenState::Owned { owner } => Ok(owner),
        TokenState::Staked { .. } => Err(ContractError::TokenStaked { token_id }),
    }
}

/// Check if `spender` may move `token_id`: owner, token-level approval, or
/// operator approval.
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

/// Validate that exactly one coin of the correct denom was attached, matching
/// `expected` to the unit. Underpayment and overpayment are both rejected.
pub fn validate_exact_payment(
    info: &MessageInfo,
    denom: &str,
    expected: Uint128,
) -> Result<Uint128, ContractError> {
    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }
    if info.funds.len() > 1 {
        return Err(ContractError::MultipleDenomsSent);
    }
    let coin = &info.funds[0];
    if coin.denom != denom {
        return Err(ContractError::WrongDenom {
            expected: denom.to_string(),
            got: coin.denom.clone(),
        });
    }
    if coin.amount != expected {
        return Err(ContractError::InvalidPayment {
            expected: expected.to_string(),
            got: coin.amount.to_string(),
        });
    }
    Ok(coin.amount)
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}
