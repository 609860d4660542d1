use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    /// The warrior contract address — the only authorized minter
    pub minter: String,
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint one sequential land parcel to `recipient` (minter only)
    MintFor { recipient: String },
    /// Transfer a parcel to another account
    TransferNft { recipient: String, token_id: u64 },
    /// Send a parcel to a contract with a callback payload
    SendNft {
        contract: String,
        token_id: u64,
        msg: cosmwasm_std::Binary,
    },
    /// Approve a spender for a specific parcel
    Approve { spender: String, token_id: u64 },
    /// Revoke approval for a specific parcel
    Revoke { token_id: u64 },
    /// Approve an operator for all parcels owned by sender
    ApproveAll { operator: String },
    /// Revoke operator approval
    RevokeAll { operator: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get contract configuration
    #[returns(crate::state::Config)]
    Config {},
    /// Get owner of a parcel
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    /// Get an account's parcel count
    #[returns(BalanceResponse)]
    BalanceOf { owner: String },
    /// Total minted count
    #[returns(NumTokensResponse)]
    NumTokens {},
    /// Get all parcels owned by an address
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Get all parcel ids
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
