// src/main.rs
use std::env;

use polls_backend::routes::AppState;
use polls_backend::{app, db};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok(); // Load environment variables from .env file

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get the port from the environment (default to 3030 for local development)
    let port = env::var("PORT").unwrap_or_else(|_| "3030".to_string());
    let port = port.parse::<u16>().expect("PORT must be a valid number");

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://polls.db".to_string());
    let admin_token = env::var("ADMIN_TOKEN").expect("ADMIN_TOKEN must be set");

    let pool = db::create_pool(&database_url)
        .await
        .expect("Failed to connect to the database");
    db::init_schema(&pool)
        .await
        .expect("Failed to initialize the database schema");

    let state = AppState { pool, admin_token };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("Failed to bind the server port");
    tracing::info!("listening on port {port}");
    axum::serve(listener, app(state))
        .await
        .expect("server error");
}
