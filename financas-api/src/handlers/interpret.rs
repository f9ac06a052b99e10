use actix_web::{web, HttpResponse, Result as ActixResult};
use extractors::TransactionTextInterpreter;
use shared_types::{InterpretTransactionRequest, InterpretTransactionResponse};
use std::sync::Arc;
use tracing::{debug, info};

use crate::database::goals as goals_db;
use crate::database::Database;

/// `POST /api/ia-transacao`
///
/// Interpreter failures are answered with 200 and `success: false`; only a
/// missing or blank `text` is a client error.
pub async fn interpret_transaction(
    db: web::Data<Arc<Database>>,
    interpreter: web::Data<Arc<TransactionTextInterpreter>>,
    request: web::Json<InterpretTransactionRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();

    let text = match request.text.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => {
            return Ok(HttpResponse::BadRequest()
                .json(InterpretTransactionResponse::failure("Texto é obrigatório")));
        }
    };

    let goals = match request.metas {
        Some(goals) => goals,
        None => goals_db::list_goals(db.async_connection.clone())
            .await
            .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?,
    };

    debug!("Interpreting {:?} against {} goals", text, goals.len());

    let response: InterpretTransactionResponse = match interpreter.interpret(&text, &goals) {
        Ok(interpretation) => interpretation.into(),
        Err(e) => {
            info!("Could not interpret {:?}: {}", text, e);
            e.into()
        }
    };

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use crate::database::goals::insert_goal;
    use crate::database::test_support::temp_database;
    use crate::handlers::test_app;
    use actix_web::{http::StatusCode, test};
    use shared_types::Goal;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_interprets_installment_purchase() {
        let (db, _dir) = temp_database();
        let db = Arc::new(db);
        let app = test_app!(db);

        let req = test::TestRequest::post()
            .uri("/api/ia-transacao")
            .set_json(serde_json::json!({ "text": "Comprei um notebook por 1200 em 3x" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["isInstallment"], true);
        assert_eq!(body["needsMultipleTransactions"], true);
        assert_eq!(body["totalAmount"], 1200.0);
        assert_eq!(body["transaction"]["amount"], 400.0);
        assert_eq!(body["transaction"]["type"], "expense");
        assert_eq!(body["transaction"]["installments"], 3);
        assert_eq!(body["transaction"]["recurrence"], "monthly");
        assert_eq!(body["source"], "local_ai");
    }

    #[actix_web::test]
    async fn test_uses_stored_goals_when_none_sent() {
        let (db, _dir) = temp_database();
        let goal = Goal::new("Viagem", 5000.0);
        insert_goal(db.async_connection.clone(), &goal).await.unwrap();
        let db = Arc::new(db);
        let app = test_app!(db);

        let req = test::TestRequest::post()
            .uri("/api/ia-transacao")
            .set_json(serde_json::json!({ "text": "Guardei 300 para a viagem" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["transaction"]["metaId"], goal.id.as_str());
        assert_eq!(body["message"], "Associado à meta encontrada");
    }

    #[actix_web::test]
    async fn test_sent_goals_replace_stored_ones() {
        let (db, _dir) = temp_database();
        insert_goal(db.async_connection.clone(), &Goal::new("Viagem", 5000.0))
            .await
            .unwrap();
        let db = Arc::new(db);
        let app = test_app!(db);

        let req = test::TestRequest::post()
            .uri("/api/ia-transacao")
            .set_json(serde_json::json!({ "text": "Guardei 300 para a viagem", "metas": [] }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert!(body["transaction"]["metaId"].is_null());
    }

    #[actix_web::test]
    async fn test_text_without_amount() {
        let (db, _dir) = temp_database();
        let db = Arc::new(db);
        let app = test_app!(db);

        let req = test::TestRequest::post()
            .uri("/api/ia-transacao")
            .set_json(serde_json::json!({ "text": "oi" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "Não foi possível identificar o valor da transação"
        );
    }

    #[actix_web::test]
    async fn test_blank_text_is_rejected() {
        let (db, _dir) = temp_database();
        let db = Arc::new(db);
        let app = test_app!(db);

        for payload in [serde_json::json!({ "text": "   " }), serde_json::json!({})] {
            let req = test::TestRequest::post()
                .uri("/api/ia-transacao")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], false);
            assert_eq!(body["message"], "Texto é obrigatório");
        }
    }
}
