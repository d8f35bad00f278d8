// src/admin.rs
//
// Authenticated JSON surface for managing questions, with choices edited
// inline on their question.
use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use http::header::AUTHORIZATION;
use serde_json::json;

use crate::error::AppError;
use crate::models::{PubDateFilter, QuestionInput};
use crate::repo;
use crate::routes::AppState;

/// Declarative registration of Question with the admin: how its edit form is
/// grouped, which columns the list view shows, and what it filters on.
pub struct QuestionAdmin;

impl QuestionAdmin {
    pub const FIELDSETS: [(Option<&'static str>, &'static [&'static str]); 2] = [
        (None, &["question_text"]),
        (Some("Date information"), &["pub_date"]),
    ];
    pub const LIST_DISPLAY: [&'static str; 3] =
        ["question_text", "pub_date", "was_published_recently"];
    pub const LIST_FILTER: [&'static str; 1] = ["pub_date"];
    /// Blank inline choice rows offered on the edit form.
    pub const INLINE_EXTRA: usize = 3;
}

pub async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == state.admin_token);

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid admin token" })),
        )
            .into_response();
    }
    next.run(request).await
}

/// The edit-form description: fieldset grouping plus the blank inline rows.
pub async fn question_scaffold() -> Json<serde_json::Value> {
    let fieldsets: Vec<serde_json::Value> = QuestionAdmin::FIELDSETS
        .iter()
        .map(|(label, fields)| json!({ "label": label, "fields": fields }))
        .collect();

    Json(json!({
        "fieldsets": fieldsets,
        "list_display": QuestionAdmin::LIST_DISPLAY,
        "list_filter": QuestionAdmin::LIST_FILTER,
        "choices": vec![""; QuestionAdmin::INLINE_EXTRA],
    }))
}

pub async fn list_questions(
    State(state): State<AppState>,
    Query(filter): Query<PubDateFilter>,
) -> Result<Json<serde_json::Value>, AppError> {
    let questions = repo::list_filtered(
        &state.pool,
        filter.published_after,
        filter.published_before,
    )
    .await?;

    let rows: Vec<serde_json::Value> = questions
        .iter()
        .map(|question| {
            json!({
                "id": question.id,
                "question_text": question.question_text,
                "pub_date": question.pub_date,
                "was_published_recently": question.was_published_recently(),
            })
        })
        .collect();

    Ok(Json(json!({ "questions": rows })))
}

pub async fn create_question(
    State(state): State<AppState>,
    Json(input): Json<QuestionInput>,
) -> Result<impl IntoResponse, AppError> {
    let pub_date = input.pub_date.unwrap_or_else(Utc::now);
    let id =
        repo::create_question(&state.pool, &input.question_text, pub_date, &input.choices).await?;
    tracing::info!(question_id = id, "question created");
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

pub async fn get_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let question = repo::find_question(&state.pool, question_id)
        .await?
        .ok_or(AppError::QuestionNotFound)?;
    let choices = repo::choices_for(&state.pool, question_id).await?;
    Ok(Json(json!({
        "question": question,
        "was_published_recently": question.was_published_recently(),
        "choices": choices,
    })))
}

pub async fn update_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    Json(input): Json<QuestionInput>,
) -> Result<Json<serde_json::Value>, AppError> {
    let existing = repo::find_question(&state.pool, question_id)
        .await?
        .ok_or(AppError::QuestionNotFound)?;
    let pub_date = input.pub_date.unwrap_or(existing.pub_date);

    let updated = repo::update_question(
        &state.pool,
        question_id,
        &input.question_text,
        pub_date,
        &input.choices,
    )
    .await?;
    if !updated {
        return Err(AppError::QuestionNotFound);
    }
    Ok(Json(json!({ "id": question_id })))
}

pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if repo::delete_question(&state.pool, question_id).await? {
        tracing::info!(question_id, "question deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::QuestionNotFound)
    }
}
