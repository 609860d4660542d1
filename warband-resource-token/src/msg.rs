use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Move balance between accounts
    Transfer { recipient: String, amount: Uint128 },
    /// Create new supply for an account (game master only)
    Mint { recipient: String, amount: Uint128 },
    /// Destroy supply held by an account (game master only)
    Burn { from: String, amount: Uint128 },
    /// Grant or revoke game-master status per address (owner only).
    /// `accounts` and `flags` must have equal length.
    EditGameMasters {
        accounts: Vec<String>,
        flags: Vec<bool>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get contract configuration
    #[returns(crate::state::Config)]
    Config {},
    /// Get an account's balance
    #[returns(BalanceResponse)]
    Balance { address: String },
    /// Total circulating supply
    #[returns(TotalSupplyResponse)]
    TotalSupply {},
    /// Check game-master status
    #[returns(GameMasterResponse)]
    IsGameMaster { address: String },
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct TotalSupplyResponse {
    pub supply: Uint128,
}

#[cw_serde]
pub struct GameMasterResponse {
    pub is_game_master: bool,
}

#[cw_serde]
pub struct MigrateMsg {}
