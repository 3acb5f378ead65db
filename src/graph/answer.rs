//! Answers given by users to questions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::describe::{timestamp_json, Describe};
use super::types::{QuestionHandle, UserRef};
use crate::loader::{LoadError, Row};

/// An answer carries no relationship collections of its own; it is the
/// target of the question and author collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: String,
    pub author_id: String,
    pub question_id: String,
    pub date_added: NaiveDateTime,
    pub body: String,
    /// Resolved during linking. Stays `None` when the author id matches no
    /// user record.
    pub author: Option<UserRef>,
    /// Resolved during linking; always set in a sealed graph. An answer
    /// whose question id does not resolve aborts construction.
    pub question: Option<QuestionHandle>,
}

impl Answer {
    pub(crate) fn from_row(row: Row<'_>) -> Result<Answer, LoadError> {
        Ok(Answer {
            id: row.get("answers_id")?.to_string(),
            author_id: row.get("answers_author_id")?.to_string(),
            question_id: row.get("answers_question_id")?.to_string(),
            date_added: row.get_timestamp("answers_date_added")?,
            body: row.get("answers_body")?.to_string(),
            author: None,
            question: None,
        })
    }
}

impl Describe for Answer {
    fn type_name(&self) -> &'static str {
        "Answer"
    }

    fn scalars(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("body", json!(self.body)),
            ("date_added", timestamp_json(&self.date_added)),
        ]
    }

    fn collections(&self) -> Vec<(&'static str, usize)> {
        Vec::new()
    }
}
