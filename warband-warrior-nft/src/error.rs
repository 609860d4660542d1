use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: only {role} can perform this action")]
    Unauthorized { role: String },

    #[error("sale is not live")]
    SaleNotLive,

    #[error("no funds sent")]
    NoFundsSent,

    #[error("must send exactly one coin denomination")]
    MultipleDenomsSent,

    #[error("wrong denomination: expected {expected}, got {got}")]
    WrongDenom { expected: String, got: String },

    #[error("incorrect payment: expected {expected}, got {got}")]
    InvalidPayment { expected: String, got: String },

    #[error("token not found: {token_id}")]
    TokenNotFound { token_id: u64 },

    #[error("token {token_id} is scouting and cannot be moved")]
    TokenStaked { token_id: u64 },

    #[error("token {token_id} is not scouting")]
    NotStaked { token_id: u64 },

    #[error("token {token_id} has not scouted long enough to claim land")]
    ClaimTooEarly { token_id: u64 },

    #[error("land and resource contract addresses are not set")]
    ContractsNotSet,

    #[error("duplicate token id in batch: {token_id}")]
    DuplicateTokenId { token_id: u64 },

    #[error("token id list is empty")]
    EmptyBatch,

    #[error("batch exceeds maximum of {max} entries")]
    BatchTooLarge { max: u32 },

    #[error("nothing to withdraw")]
    NothingToWithdraw,

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,
}
