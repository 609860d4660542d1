use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract-level configuration
#[cw_serde]
pub struct Config {
    /// Contract owner — controls sale state, claim timing, and wiring
    pub owner: Addr,
    pub name: String,
    pub symbol: String,
    /// Native denom accepted for mint payments (e.g. "uarc")
    pub denom: String,
    /// Price per minted warrior in micro-denom units
    pub price: Uint128,
    /// Whether the public mint is open
    pub sale_live: bool,
    /// Seconds a warrior must scout before its land claim matures
    pub land_claim_time: u64,
    /// Land contract receiving privileged mint calls from the claim path
    pub land_contract: Option<Addr>,
    /// Resource contract the warrior and land contracts act on as game masters
    pub resource_contract: Option<Addr>,
}

/// A warrior is either held directly or locked in scouting custody.
/// Custody is explicit state, not an overloaded owner field; the staker and
/// stake start only exist while the token is scouting.
#[cw_serde]
pub enum TokenState {
    Owned { owner: Addr },
    Staked { staker: Addr, since: Timestamp },
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Circulating token count — increases on mint, decreases on burn
pub const TOKEN_COUNT: Item<u64> = Item::new("token_count");

/// Next id to assign — dense, sequential from 0, never reused after burn
pub const NEXT_ID: Item<u64> = Item::new("next_id");

/// token_id -> ownership state
pub const TOKENS: Map<u64, TokenState> = Map::new("warrior_tokens");

/// token_id -> spender (single approval per token, cleared on transfer)
pub const TOKEN_APPROVALS: Map<u64, Addr> = Map::new("warrior_approvals");

/// (owner, operator) -> bool
pub const OPERATOR_APPROVALS: Map<(&Addr, &Addr), bool> = Map::new("warrior_operators");

/// Secondary index for owner-scoped token queries: (owner, token_id) -> bool.
/// Only directly-owned tokens appear here; scouting tokens are custodial.
pub const OWNER_TOKENS: Map<(&Addr, u64), bool> = Map::new("warrior_owner_tokens");

/// account -> token count. Scouting tokens are counted under the contract's
/// own address so the per-holder sum always equals TOKEN_COUNT.
pub const BALANCES: Map<&Addr, u64> = Map::new("warrior_balances");
