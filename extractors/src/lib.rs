//! Extractors Crate
//!
//! This crate turns free-form Portuguese sentences such as
//! "paguei 50 reais no mercado" or "comprei um notebook por 1200 em 3x"
//! into structured transaction drafts.
//!
//! # Architecture
//!
//! - **Types**: Wire types (drafts, goals, responses) live in the `shared-types` crate
//! - **Rules**: Each stage is an ordered table of rules evaluated first-match-wins
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::TransactionTextInterpreter;
//!
//! let interpreter = TransactionTextInterpreter::new();
//! let interpretation = interpreter.interpret("gastei 30 no uber", &[])?;
//! ```

pub mod transaction_text;

// Re-export commonly used types
pub use transaction_text::{
    installment_dates, Interpretation, InterpretationError, InstallmentPlan,
    TransactionTextInterpreter,
};
