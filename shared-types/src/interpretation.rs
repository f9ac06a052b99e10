use crate::{Goal, TransactionDraft};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Confidence reported for drafts produced by the local rule set
pub const LOCAL_CONFIDENCE: f64 = 0.9;

/// Source tag reported for drafts produced by the local rule set
pub const LOCAL_SOURCE: &str = "local_ai";

/// Body of `POST /api/ia-transacao`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct InterpretTransactionRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// Goals to match against; when absent the stored goals are used
    #[serde(default)]
    pub metas: Option<Vec<Goal>>,
}

/// Response of `POST /api/ia-transacao`.
///
/// One shape covers the three outcomes: a single draft, an installment
/// split (`isInstallment`), or a failure (`success == false`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct InterpretTransactionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<TransactionDraft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_installment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_multiple_transactions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InterpretTransactionResponse {
    pub fn single(draft: TransactionDraft) -> Self {
        let message = draft
            .goal_id
            .as_ref()
            .map(|_| "Associado à meta encontrada".to_string());

        Self {
            success: true,
            transaction: Some(draft),
            confidence: Some(LOCAL_CONFIDENCE),
            source: Some(LOCAL_SOURCE.to_string()),
            is_installment: None,
            total_amount: None,
            needs_multiple_transactions: None,
            message,
        }
    }

    /// `draft.amount` must already be the per-installment value
    pub fn installments(draft: TransactionDraft, total_amount: f64, count: u32) -> Self {
        let message = format!(
            "Transação parcelada detectada: {}x de R$ {:.2}",
            count, draft.amount
        );

        Self {
            success: true,
            transaction: Some(draft),
            confidence: Some(LOCAL_CONFIDENCE),
            source: Some(LOCAL_SOURCE.to_string()),
            is_installment: Some(true),
            total_amount: Some(total_amount),
            needs_multiple_transactions: Some(true),
            message: Some(message),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            transaction: None,
            confidence: None,
            source: None,
            is_installment: None,
            total_amount: None,
            needs_multiple_transactions: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TransactionType, MONTHLY_RECURRENCE};

    fn draft(amount: f64) -> TransactionDraft {
        TransactionDraft {
            transaction_type: TransactionType::Expense,
            amount,
            description: "200 reais no mercado em três vezes".to_string(),
            category: "alimentacao".to_string(),
            date: "2026-05-04".to_string(),
            goal_id: None,
            installments: Some(3),
            recurrence: Some(MONTHLY_RECURRENCE.to_string()),
        }
    }

    #[test]
    fn test_failure_shape() {
        let json = serde_json::to_value(InterpretTransactionResponse::failure("nope")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "message": "nope" }));
    }

    #[test]
    fn test_installment_shape() {
        let response = InterpretTransactionResponse::installments(draft(200.0 / 3.0), 200.0, 3);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["isInstallment"], true);
        assert_eq!(json["needsMultipleTransactions"], true);
        assert_eq!(json["totalAmount"], 200.0);
        assert_eq!(json["source"], "local_ai");
        assert_eq!(json["transaction"]["installments"], 3);
        assert_eq!(json["transaction"]["recurrence"], "monthly");
        assert_eq!(
            json["message"],
            "Transação parcelada detectada: 3x de R$ 66.67"
        );
    }

    #[test]
    fn test_single_mentions_goal_only_when_matched() {
        let mut d = draft(50.0);
        d.installments = None;
        d.recurrence = None;
        assert!(InterpretTransactionResponse::single(d.clone()).message.is_none());

        d.goal_id = Some("g1".to_string());
        let response = InterpretTransactionResponse::single(d);
        assert_eq!(response.message.as_deref(), Some("Associado à meta encontrada"));
        assert_eq!(response.confidence, Some(0.9));
    }

    #[test]
    fn test_request_without_metas() {
        let request: InterpretTransactionRequest =
            serde_json::from_str(r#"{"text":"gastei 30 no uber"}"#).unwrap();
        assert_eq!(request.text.as_deref(), Some("gastei 30 no uber"));
        assert!(request.metas.is_none());
    }
}
