use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Recurrence tag carried by installment-derived transactions
pub const MONTHLY_RECURRENCE: &str = "monthly";

/// Smallest installment count that is treated as a split purchase
pub const MIN_INSTALLMENTS: u32 = 2;

/// Largest installment count that is treated as a split purchase
pub const MAX_INSTALLMENTS: u32 = 12;

/// Direction of money flow for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(TransactionType::Income),
            "expense" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

/// Structured, not yet persisted transaction produced from free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: String, // YYYY-MM-DD

    #[serde(rename = "metaId")]
    pub goal_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
}

/// A stored transaction row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub date: String,
    pub meta_id: Option<String>,
    pub installments: Option<u32>,
    pub recurrence: Option<String>,
    pub recurrence_count: Option<u32>,
    pub created_at: i64,
}

/// Body of `POST /api/transactions`.
///
/// When `installments` is between 2 and 12 the amount is the per-installment
/// value and the server creates one row per installment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub date: String,
    #[serde(default)]
    pub meta_id: Option<String>,
    #[serde(default)]
    pub installments: Option<u32>,
    #[serde(default)]
    pub recurrence: Option<String>,
    #[serde(default)]
    pub recurrence_count: Option<u32>,
}

impl CreateTransactionRequest {
    /// Number of rows this request expands to
    pub fn installment_count(&self) -> Option<u32> {
        self.installments
            .filter(|n| (MIN_INSTALLMENTS..=MAX_INSTALLMENTS).contains(n))
    }

    /// Linked goal; an empty or blank `metaId` means no goal
    pub fn goal_id(&self) -> Option<&str> {
        self.meta_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    pub fn validate(&self) -> Result<(), crate::ValidationError> {
        if !(self.amount.is_finite() && self.amount > 0.0) {
            return Err(crate::ValidationError::InvalidAmount);
        }
        if self.category.trim().is_empty() {
            return Err(crate::ValidationError::MissingField("category"));
        }
        if chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err(crate::ValidationError::InvalidDate(self.date.clone()));
        }
        Ok(())
    }
}

/// List response for transaction endpoints
#[derive(Debug, Serialize, Deserialize, TS)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
}
