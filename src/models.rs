// models.rs
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// True when the question was published within the last day and is not
    /// dated in the future. The 24-hour boundary itself does not count.
    pub fn was_published_recently(&self) -> bool {
        let now = Utc::now();
        self.pub_date <= now && self.pub_date > now - Duration::days(1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub choice_text: String,
    pub votes: i64,
}

/// Admin payload for creating or updating a question together with its
/// inline choices. Blank choice rows are ignored on write.
#[derive(Debug, Deserialize)]
pub struct QuestionInput {
    pub question_text: String,
    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub choices: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct VoteForm {
    pub choice: Option<i64>,
}

/// Query-string filter over `pub_date` for the admin list view.
#[derive(Debug, Deserialize)]
pub struct PubDateFilter {
    pub published_after: Option<DateTime<Utc>>,
    pub published_before: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_published_at(pub_date: DateTime<Utc>) -> Question {
        Question {
            id: 1,
            question_text: "What's new?".to_string(),
            pub_date,
        }
    }

    #[test]
    fn recent_when_published_within_the_last_day() {
        let question = question_published_at(Utc::now() - Duration::hours(23));
        assert!(question.was_published_recently());
    }

    #[test]
    fn recent_when_just_published() {
        let question = question_published_at(Utc::now() - Duration::seconds(1));
        assert!(question.was_published_recently());
    }

    #[test]
    fn not_recent_when_older_than_a_day() {
        let question =
            question_published_at(Utc::now() - Duration::days(1) - Duration::seconds(1));
        assert!(!question.was_published_recently());
    }

    #[test]
    fn not_recent_when_dated_in_the_future() {
        let question = question_published_at(Utc::now() + Duration::hours(1));
        assert!(!question.was_published_recently());
    }
}
