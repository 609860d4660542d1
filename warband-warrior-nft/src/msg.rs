use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Timestamp, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub name: String,
    pub symbol: String,
    /// Native denom accepted for mint payments
    pub denom: String,
    /// Price per warrior in micro-denom units
    pub price: Uint128,
    /// Seconds of scouting required before land can be claimed
    pub land_claim_time: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint `quantity` warriors for exactly `price * quantity` in funds.
    /// With `stake: true` the new tokens go straight into scouting custody.
    PublicMint { quantity: u32, stake: bool },
    /// Put already-owned warriors into scouting custody
    Stake { token_ids: Vec<u64> },
    /// Convert matured scouting time into land parcels. All-or-nothing:
    /// every id must be claimable by the sender or the whole call fails.
    ClaimLand { token_ids: Vec<u64> },
    /// Transfer a warrior to another account
    TransferNft { recipient: String, token_id: u64 },
    /// Send a warrior to a contract with a callback payload
    SendNft {
        contract: String,
        token_id: u64,
        msg: cosmwasm_std::Binary,
    },
    /// Approve a spender for a specific warrior
    Approve { spender: String, token_id: u64 },
    /// Revoke approval for a specific warrior
    Revoke { token_id: u64 },
    /// Approve an operator for all warriors owned by sender
    ApproveAll { operator: String },
    /// Revoke operator approval
    RevokeAll { operator: String },
    /// Destroy a warrior permanently
    Burn { token_id: u64 },
    /// Toggle the public sale (owner only)
    FlipSaleState {},
    /// Wire the land and resource contract addresses (owner only)
    SetContractAddresses { land: String, resource: String },
    /// Change the required scouting duration (owner only)
    SetLandClaimTime { seconds: u64 },
    /// Send the accumulated mint proceeds to the owner (owner only)
    Withdraw {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get contract configuration
    #[returns(crate::state::Config)]
    Config {},
    /// Get owner of a warrior. Scouting tokens report the contract itself
    /// as custodial owner.
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    /// Get an account's directly-held warrior count
    #[returns(BalanceResponse)]
    BalanceOf { owner: String },
    /// Circulating warrior count
    #[returns(NumTokensResponse)]
    NumTokens {},
    /// Whether the public mint is open
    #[returns(SaleLiveResponse)]
    SaleLive {},
    /// Scouting record for a token, if any
    #[returns(Option<ActivityResponse>)]
    Activity { token_id: u64 },
    /// Get all warriors directly owned by an address
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Get all warrior ids
    #[returns(TokensResponse)]
    AllTokens {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Check approval
    #[returns(ApprovalResponse)]
    Approval { token_id: u64, spender: String },
    /// Check operator approval
    #[returns(OperatorResponse)]
    Operator { owner: String, operator: String },
}

/// Message accepted by the land contract's privileged mint entry point.
/// The land contract authorizes this call against its fixed minter address.
#[cw_serde]
pub enum LandExecuteMsg {
    MintFor { recipient: String },
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
    pub approvals: Vec<String>,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: u64,
}

#[cw_serde]
pub struct NumTokensResponse {
    pub count: u64,
}

#[cw_serde]
pub struct SaleLiveResponse {
    pub live: bool,
}

#[cw_serde]
pub struct ActivityResponse {
    pub staker: String,
    pub since: Timestamp,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<u64>,
}

#[cw_serde]
pub struct ApprovalResponse {
    pub approved: bool,
}

#[cw_serde]
pub struct OperatorResponse {
    pub approved: bool,
}

#[cw_serde]
pub struct MigrateMsg {}
