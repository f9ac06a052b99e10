use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{CreateTransactionRequest, ErrorResponse, TransactionsResponse};
use std::sync::Arc;
use tracing::info;

use crate::database::transactions::{self as transactions_db, GoalNotFound};
use crate::database::Database;

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Transação não encontrada".to_string(),
    })
}

pub async fn list_transactions(db: web::Data<Arc<Database>>) -> ActixResult<HttpResponse> {
    let transactions = transactions_db::list_transactions(db.async_connection.clone())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(TransactionsResponse { transactions }))
}

/// Stores one row, or one row per installment when `installments` is 2 to 12
pub async fn create_transaction(
    db: web::Data<Arc<Database>>,
    request: web::Json<CreateTransactionRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();

    if let Err(e) = request.validate() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse {
            error: e.to_string(),
        }));
    }

    let transactions =
        match transactions_db::create_transactions(db.async_connection.clone(), &request).await {
            Ok(transactions) => transactions,
            Err(e) if e.is::<GoalNotFound>() => {
                return Ok(HttpResponse::BadRequest().json(ErrorResponse {
                    error: "Meta não encontrada".to_string(),
                }));
            }
            Err(e) => return Err(actix_web::error::ErrorInternalServerError(e.to_string())),
        };

    info!(
        "Created {} transaction(s) of {} in {}",
        transactions.len(),
        request.amount,
        request.category
    );

    Ok(HttpResponse::Created().json(TransactionsResponse { transactions }))
}

pub async fn get_transaction(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();

    let transaction = transactions_db::get_transaction(db.async_connection.clone(), id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    match transaction {
        Some(transaction) => Ok(HttpResponse::Ok().json(transaction)),
        None => Ok(not_found()),
    }
}

pub async fn delete_transaction(
    db: web::Data<Arc<Database>>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();

    let deleted = transactions_db::delete_transaction(db.async_connection.clone(), id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    if !deleted {
        return Ok(not_found());
    }

    info!("Deleted transaction {}", id);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Transação deletada com sucesso"
    })))
}
