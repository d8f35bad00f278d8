// routes.rs
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{admin, handlers};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub admin_token: String,
}

pub fn app(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route(
            "/questions",
            get(admin::list_questions).post(admin::create_question),
        )
        .route("/questions/scaffold", get(admin::question_scaffold))
        .route(
            "/questions/{question_id}",
            get(admin::get_question)
                .put(admin::update_question)
                .delete(admin::delete_question),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin::require_token,
        ));

    Router::new()
        .route("/polls", get(handlers::index))
        .route("/polls/{question_id}", get(handlers::detail))
        .route("/polls/{question_id}/results", get(handlers::results))
        .route("/polls/{question_id}/vote", post(handlers::vote))
        .nest("/admin", admin_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
