use serde::{Deserialize, Serialize};

pub mod goal;
pub mod interpretation;
pub mod transaction;

pub use goal::{CreateGoalRequest, Goal, GoalsResponse};
pub use interpretation::{
    InterpretTransactionRequest, InterpretTransactionResponse, LOCAL_CONFIDENCE, LOCAL_SOURCE,
};
pub use transaction::{
    CreateTransactionRequest, Transaction, TransactionDraft, TransactionType,
    TransactionsResponse, MAX_INSTALLMENTS, MIN_INSTALLMENTS, MONTHLY_RECURRENCE,
};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Request payload validation failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Campo obrigatório ausente: {0}")]
    MissingField(&'static str),

    #[error("Valor inválido")]
    InvalidAmount,

    #[error("Data inválida: {0}")]
    InvalidDate(String),
}
