// handlers.rs
use askama::Template;
use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::error::AppError;
use crate::models::VoteForm;
use crate::repo;
use crate::routes::AppState;

pub mod templates {
    use askama::Template;

    use crate::models::{Choice, Question};

    #[derive(Template)]
    #[template(path = "index.html")]
    pub struct IndexTemplate<'a> {
        pub latest_question_list: &'a [Question],
    }

    #[derive(Template)]
    #[template(path = "detail.html")]
    pub struct DetailTemplate<'a> {
        pub question: &'a Question,
        pub choices: &'a [Choice],
        pub error_message: Option<&'a str>,
    }

    #[derive(Template)]
    #[template(path = "results.html")]
    pub struct ResultsTemplate<'a> {
        pub question: &'a Question,
        pub choices: &'a [Choice],
    }
}

/// The five most recently published questions, newest first.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let latest_question_list = repo::list_recent(&state.pool, 5).await?;
    let page = templates::IndexTemplate {
        latest_question_list: &latest_question_list,
    };
    Ok(Html(page.render()?))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let question = repo::find_question(&state.pool, question_id)
        .await?
        .ok_or(AppError::QuestionNotFound)?;
    let choices = repo::choices_for(&state.pool, question_id).await?;
    let page = templates::DetailTemplate {
        question: &question,
        choices: &choices,
        error_message: None,
    };
    Ok(Html(page.render()?))
}

pub async fn results(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let question = repo::find_question(&state.pool, question_id)
        .await?
        .ok_or(AppError::QuestionNotFound)?;
    let choices = repo::choices_for(&state.pool, question_id).await?;
    let page = templates::ResultsTemplate {
        question: &question,
        choices: &choices,
    };
    Ok(Html(page.render()?))
}

/// Record a vote and redirect to the results page. When no choice was
/// selected, or the selected choice does not belong to this question, the
/// detail form is shown again with an error message.
pub async fn vote(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    Form(form): Form<VoteForm>,
) -> Result<Response, AppError> {
    let question = repo::find_question(&state.pool, question_id)
        .await?
        .ok_or(AppError::QuestionNotFound)?;

    let voted = match form.choice {
        Some(choice_id) => repo::record_vote(&state.pool, question_id, choice_id).await?,
        None => false,
    };
    if !voted {
        let choices = repo::choices_for(&state.pool, question_id).await?;
        let page = templates::DetailTemplate {
            question: &question,
            choices: &choices,
            error_message: Some("You didn't select a choice."),
        };
        return Ok(Html(page.render()?).into_response());
    }

    Ok(Redirect::to(&format!("/polls/{question_id}/results")).into_response())
}
