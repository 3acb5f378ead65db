//! Questions asked on the platform.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::describe::{timestamp_json, Describe};
use super::related::Related;
use super::types::{AnswerHandle, EmailHandle, TagHandle, UserRef};
use crate::loader::{LoadError, Row};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub author_id: String,
    pub date_added: NaiveDateTime,
    pub title: String,
    pub body: String,
    /// Resolved during linking. Stays `None` for the questions whose
    /// author id matches no user record; this is expected data, not a
    /// failure.
    pub author: Option<UserRef>,
    pub tags: Related<TagHandle>,
    pub emails: Related<EmailHandle>,
    pub answers: Related<AnswerHandle>,
}

impl Question {
    pub(crate) fn from_row(row: Row<'_>) -> Result<Question, LoadError> {
        Ok(Question {
            id: row.get("questions_id")?.to_string(),
            author_id: row.get("questions_author_id")?.to_string(),
            date_added: row.get_timestamp("questions_date_added")?,
            title: row.get("questions_title")?.to_string(),
            body: row.get("questions_body")?.to_string(),
            author: None,
            tags: Related::new(),
            emails: Related::new(),
            answers: Related::new(),
        })
    }

    pub(crate) fn freeze(&mut self) {
        self.tags.seal();
        self.emails.seal();
        self.answers.seal();
    }
}

impl Describe for Question {
    fn type_name(&self) -> &'static str {
        "Question"
    }

    fn scalars(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("body", json!(self.body)),
            ("date_added", timestamp_json(&self.date_added)),
            ("title", json!(self.title)),
        ]
    }

    fn collections(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("answers", self.answers.len()),
            ("emails", self.emails.len()),
            ("tags", self.tags.len()),
        ]
    }
}
