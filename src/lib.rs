pub mod admin;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod routes;

pub use routes::{app, AppState};
