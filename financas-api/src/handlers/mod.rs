pub mod goals;
pub mod health;
pub mod interpret;
pub mod transactions;

use actix_web::web;

/// Register every route of the API
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .route("/api/ia-transacao", web::post().to(interpret::interpret_transaction))
        .route("/api/transactions", web::get().to(transactions::list_transactions))
        .route("/api/transactions", web::post().to(transactions::create_transaction))
        .route("/api/transactions/{id}", web::get().to(transactions::get_transaction))
        .route("/api/transactions/{id}", web::delete().to(transactions::delete_transaction))
        .route("/api/metas", web::get().to(goals::list_goals))
        .route("/api/metas", web::post().to(goals::create_goal))
        .route("/api/metas/{id}", web::get().to(goals::get_goal))
        .route("/api/metas/{id}", web::put().to(goals::update_goal))
        .route("/api/metas/{id}", web::delete().to(goals::delete_goal));
}

/// Builds a test service over `$db` with every route registered
#[cfg(test)]
macro_rules! test_app {
    ($db:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($db.clone()))
                .app_data(actix_web::web::Data::new(std::sync::Arc::new(
                    extractors::TransactionTextInterpreter::new(),
                )))
                .configure(crate::handlers::configure_routes),
        )
        .await
    };
}

#[cfg(test)]
pub(crate) use test_app;
