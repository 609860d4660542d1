use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract-level configuration
#[cw_serde]
pub struct Config {
    /// Contract owner — manages the game-master set
    pub owner: Addr,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Total circulating supply across all holders
pub const TOTAL_SUPPLY: Item<Uint128> = Item::new("total_supply");

/// account -> balance
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// Privileged mint/burn role: account -> flag.
/// Checked on every Mint/Burn invocation, never cached.
pub const GAME_MASTERS: Map<&Addr, bool> = Map::new("game_masters");
