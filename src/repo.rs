// src/repo.rs
//
// Repository layer over the two tables. Handlers never write SQL themselves.
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::{Choice, Question};

pub async fn find_question(pool: &SqlitePool, id: i64) -> Result<Option<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>("SELECT id, question_text, pub_date FROM question WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_recent(pool: &SqlitePool, limit: i64) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question_text, pub_date FROM question ORDER BY pub_date DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Admin list view, optionally bounded on `pub_date` from either side.
pub async fn list_filtered(
    pool: &SqlitePool,
    published_after: Option<DateTime<Utc>>,
    published_before: Option<DateTime<Utc>>,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question_text, pub_date FROM question \
         WHERE (?1 IS NULL OR pub_date >= ?1) AND (?2 IS NULL OR pub_date <= ?2) \
         ORDER BY pub_date DESC",
    )
    .bind(published_after)
    .bind(published_before)
    .fetch_all(pool)
    .await
}

pub async fn choices_for(pool: &SqlitePool, question_id: i64) -> Result<Vec<Choice>, sqlx::Error> {
    sqlx::query_as::<_, Choice>(
        "SELECT id, question_id, choice_text, votes FROM choice \
         WHERE question_id = ? ORDER BY id",
    )
    .bind(question_id)
    .fetch_all(pool)
    .await
}

/// Insert a question and its inline choices in one transaction. Blank choice
/// texts (untouched inline rows) are skipped.
pub async fn create_question(
    pool: &SqlitePool,
    question_text: &str,
    pub_date: DateTime<Utc>,
    choices: &[String],
) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let question_id = sqlx::query("INSERT INTO question (question_text, pub_date) VALUES (?, ?)")
        .bind(question_text)
        .bind(pub_date)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    for choice_text in choices.iter().filter(|text| !text.trim().is_empty()) {
        sqlx::query("INSERT INTO choice (question_id, choice_text, votes) VALUES (?, ?, 0)")
            .bind(question_id)
            .bind(choice_text)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(question_id)
}

/// Update a question and replace its inline choice set. Returns false when
/// the question does not exist (the transaction is rolled back on drop).
pub async fn update_question(
    pool: &SqlitePool,
    id: i64,
    question_text: &str,
    pub_date: DateTime<Utc>,
    choices: &[String],
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query("UPDATE question SET question_text = ?, pub_date = ? WHERE id = ?")
        .bind(question_text)
        .bind(pub_date)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    if updated == 0 {
        return Ok(false);
    }

    sqlx::query("DELETE FROM choice WHERE question_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    for choice_text in choices.iter().filter(|text| !text.trim().is_empty()) {
        sqlx::query("INSERT INTO choice (question_id, choice_text, votes) VALUES (?, ?, 0)")
            .bind(id)
            .bind(choice_text)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(true)
}

pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let deleted = sqlx::query("DELETE FROM question WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(deleted > 0)
}

/// Single-statement increment so concurrent voters cannot lose updates.
/// Returns false when the choice does not exist or belongs to another
/// question.
pub async fn record_vote(
    pool: &SqlitePool,
    question_id: i64,
    choice_id: i64,
) -> Result<bool, sqlx::Error> {
    let updated = sqlx::query("UPDATE choice SET votes = votes + 1 WHERE id = ? AND question_id = ?")
        .bind(choice_id)
        .bind(question_id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(updated > 0)
}
