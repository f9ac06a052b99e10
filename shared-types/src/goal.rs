use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A savings goal ("meta")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Goal {
    pub id: String,
    pub nome: String,
    #[serde(default)]
    pub valor: f64,
}

impl Goal {
    /// Build a goal with a fresh random id
    pub fn new(nome: &str, valor: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            nome: nome.trim().to_string(),
            valor,
        }
    }
}

/// Body of both `POST /api/metas` and `PUT /api/metas/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateGoalRequest {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub valor: Option<f64>,
}

impl CreateGoalRequest {
    /// Returns the trimmed name and target value when both are usable
    pub fn validate(&self) -> Result<(&str, f64), crate::ValidationError> {
        let nome = self
            .nome
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(crate::ValidationError::MissingField("nome"))?;

        match self.valor {
            Some(valor) if valor.is_finite() && valor > 0.0 => Ok((nome, valor)),
            Some(_) => Err(crate::ValidationError::InvalidAmount),
            None => Err(crate::ValidationError::MissingField("valor")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, TS)]
pub struct GoalsResponse {
    pub metas: Vec<Goal>,
}
