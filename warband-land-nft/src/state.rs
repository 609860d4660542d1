use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract-level configuration
#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// The only address allowed to mint — the warrior contract's claim path.
    /// Fixed at instantiation.
    pub minter: Addr,
    pub name: String,
    pub symbol: String,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Circulating token count (mint-only collection, never decremented)
pub const TOKEN_COUNT: Item<u64> = Item::new("token_count");

/// Next id to assign — dense, sequential from 0
pub const NEXT_ID: Item<u64> = Item::new("next_id");

/// token_id -> owner
pub const TOKENS: Map<u64, Addr> = Map::new("land_tokens");

/// token_id -> spender (single approval per token)
pub const TOKEN_APPROVALS: Map<u64, Addr> = Map::new("land_approvals");

/// (owner, operator) -> bool
pub const OPERATOR_APPROVALS: Map<(&Addr, &Addr), bool> = Map::new("land_operators");

/// Secondary index for owner-scoped token queries: (owner, token_id) -> bool
pub const OWNER_TOKENS: Map<(&Addr, u64), bool> = Map::new("land_owner_tokens");

/// owner -> token count
pub const BALANCES: Map<&Addr, u64> = Map::new("land_balances");
