use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: only {role} can perform this action")]
    Unauthorized { role: String },

    #[error("accounts and flags length mismatch: {accounts} vs {flags}")]
    LengthMismatch { accounts: usize, flags: usize },

    #[error("game master list is empty")]
    EmptyBatch,

    #[error("batch exceeds maximum of {max} entries")]
    BatchTooLarge { max: u32 },

    #[error("insufficient balance: have {available}, need {required}")]
    InsufficientBalance { available: String, required: String },

    #[error("zero amount not allowed")]
    ZeroAmount,

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,
}
