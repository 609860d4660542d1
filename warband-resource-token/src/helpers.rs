use cosmwasm_std::{Addr, Deps, MessageInfo, Uint128};

use crate::error::ContractError;
use crate::state::{BALANCES, CONFIG, GAME_MASTERS};

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

/// Verify the caller currently holds the game-master flag.
pub fn assert_game_master(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let flagged = GAME_MASTERS
        .may_load(deps.storage, sender)?
        .unwrap_or(false);
    if !flagged {
        return Err(ContractError::Unauthorized {
            role: "game master".to_string(),
        });
    }
    Ok(())
}

pub fn assert_nonzero(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    Ok(())
}

/// Subtract `amount` from an account balance, failing on underflow.
pub fn deduct_balance(
    deps: cosmwasm_std::DepsMut,
    account: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let balance = BALANCES
        .may_load(deps.storage, account)?
        .unwrap_or_default();
    let remaining = balance
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientBalance {
            available: balance.to_string(),
            required: amount.to_string(),
        })?;
    if remaining.is_zero() {
        BALANCES.remove(deps.storage, account);
    } else {
        BALANCES.save(deps.storage, account, &remaining)?;
    }
    Ok(remaining)
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}
