use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: only {role} can perform this action")]
    Unauthorized { role: String },

    #[error("token not found: {token_id}")]
    TokenNotFound { token_id: u64 },

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,
}
