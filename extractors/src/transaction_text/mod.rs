mod amount;
mod classifier;
mod description;
mod goals;
mod installments;
mod schedule;

pub use amount::{parse_decimal, AmountExtractor};
pub use classifier::{classify_category, classify_type, FALLBACK_CATEGORY};
pub use description::{sanitize_description, MAX_DESCRIPTION_CHARS};
pub use goals::match_goal;
pub use installments::InstallmentDetector;
pub use schedule::{installment_dates, InstallmentPlan};

use chrono::{Local, NaiveDate};
use shared_types::{Goal, InterpretTransactionResponse, TransactionDraft, MONTHLY_RECURRENCE};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterpretationError {
    #[error("Não foi possível identificar o valor da transação")]
    AmountNotFound,
}

/// Outcome of reading one sentence
#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    Single(TransactionDraft),
    /// `draft.amount` is the per-installment value
    Installments {
        draft: TransactionDraft,
        plan: InstallmentPlan,
    },
}

impl Interpretation {
    pub fn draft(&self) -> &TransactionDraft {
        match self {
            Interpretation::Single(draft) => draft,
            Interpretation::Installments { draft, .. } => draft,
        }
    }
}

impl From<Interpretation> for InterpretTransactionResponse {
    fn from(interpretation: Interpretation) -> Self {
        match interpretation {
            Interpretation::Single(draft) => InterpretTransactionResponse::single(draft),
            Interpretation::Installments { draft, plan } => {
                InterpretTransactionResponse::installments(draft, plan.total_amount, plan.count)
            }
        }
    }
}

impl From<InterpretationError> for InterpretTransactionResponse {
    fn from(error: InterpretationError) -> Self {
        InterpretTransactionResponse::failure(error.to_string())
    }
}

/// Reads free-form Portuguese sentences into transaction drafts.
///
/// Holds the compiled pattern tables, so build it once and share it.
pub struct TransactionTextInterpreter {
    amounts: AmountExtractor,
    installments: InstallmentDetector,
}

impl TransactionTextInterpreter {
    pub fn new() -> Self {
        Self {
            amounts: AmountExtractor::new(),
            installments: InstallmentDetector::new(),
        }
    }

    /// Interpret `text` dated with the server's local calendar day
    pub fn interpret(
        &self,
        text: &str,
        goals: &[Goal],
    ) -> Result<Interpretation, InterpretationError> {
        self.interpret_on(text, goals, Local::now().date_naive())
    }

    pub fn interpret_on(
        &self,
        text: &str,
        goals: &[Goal],
        today: NaiveDate,
    ) -> Result<Interpretation, InterpretationError> {
        let text_lower = text.to_lowercase();

        let amount = self.amounts.extract(&text_lower);
        if amount <= 0.0 {
            debug!("No amount found in {:?}", text);
            return Err(InterpretationError::AmountNotFound);
        }

        let transaction_type = classify_type(&text_lower);
        let category = classify_category(&text_lower, transaction_type);
        let installments = self.installments.detect(&text_lower);
        let goal_id = match_goal(&text_lower, goals).map(|goal| goal.id.clone());

        debug!(
            "Interpreted {:?}: amount={}, type={:?}, category={}, installments={:?}, goal={:?}",
            text, amount, transaction_type, category, installments, goal_id
        );

        let mut draft = TransactionDraft {
            transaction_type,
            amount,
            description: sanitize_description(text),
            category: category.to_string(),
            date: today.format("%Y-%m-%d").to_string(),
            goal_id,
            installments: None,
            recurrence: None,
        };

        match installments {
            Some(count) => {
                let plan = InstallmentPlan::new(amount, count);
                draft.amount = plan.per_installment_amount;
                draft.installments = Some(count);
                draft.recurrence = Some(MONTHLY_RECURRENCE.to_string());
                Ok(Interpretation::Installments { draft, plan })
            }
            None => Ok(Interpretation::Single(draft)),
        }
    }
}

impl Default for TransactionTextInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
