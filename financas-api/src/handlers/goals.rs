use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{CreateGoalRequest, ErrorResponse, Goal, GoalsResponse};
use std::sync::Arc;
use tracing::info;

use crate::database::goals as goals_db;
use crate::database::Database;

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Meta não encontrada".to_string(),
    })
}

pub async fn list_goals(db: web::Data<Arc<Database>>) -> ActixResult<HttpResponse> {
    let metas = goals_db::list_goals(db.async_connection.clone())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(GoalsResponse { metas }))
}

pub async fn create_goal(
    db: web::Data<Arc<Database>>,
    request: web::Json<CreateGoalRequest>,
) -> ActixResult<HttpResponse> {
    let goal = match request.validate() {
        Ok((nome, valor)) => Goal::new(nome, valor),
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(ErrorResponse {
                error: "Nome e valor são obrigatórios".to_string(),
            }));
        }
    };

    goals_db::insert_goal(db.async_connection.clone(), &goal)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    info!("Created goal {} ({})", goal.nome, goal.id);

    Ok(HttpResponse::Created().json(goal))
}

pub async fn get_goal(
    db: web::Data<Arc<Database>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();

    let goal = goals_db::get_goal(db.async_connection.clone(), &id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    match goal {
        Some(goal) => Ok(HttpResponse::Ok().json(goal)),
        None => Ok(not_found()),
    }
}

pub async fn update_goal(
    db: web::Data<Arc<Database>>,
    path: web::Path<String>,
    request: web::Json<CreateGoalRequest>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();

    let (nome, valor) = match request.validate() {
        Ok(fields) => fields,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(ErrorResponse {
                error: "Nome e valor são obrigatórios".to_string(),
            }));
        }
    };

    let goal = goals_db::update_goal(db.async_connection.clone(), &id, nome, valor)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    match goal {
        Some(goal) => {
            info!("Updated goal {} ({})", goal.nome, goal.id);
            Ok(HttpResponse::Ok().json(goal))
        }
        None => Ok(not_found()),
    }
}

/// Transactions linked to the goal keep existing with no goal
pub async fn delete_goal(
    db: web::Data<Arc<Database>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();

    let deleted = goals_db::delete_goal(db.async_connection.clone(), &id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    if !deleted {
        return Ok(not_found());
    }

    info!("Deleted goal {}", id);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Meta deletada com sucesso"
    })))
}
