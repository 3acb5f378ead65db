//! The two user categories: students asking questions and professionals
//! answering them.
//!
//! Their ids share one merged namespace at link time, but the namespaces
//! must be disjoint: a user is never both.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::describe::{timestamp_json, Describe};
use super::related::Related;
use super::types::{AnswerHandle, EmailHandle, GroupHandle, QuestionHandle, SchoolHandle, TagHandle};
use crate::loader::{LoadError, Row};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub location: Option<String>,
    pub date_joined: NaiveDateTime,
    pub tags: Related<TagHandle>,
    pub groups: Related<GroupHandle>,
    pub schools: Related<SchoolHandle>,
    pub questions: Related<QuestionHandle>,
    pub answers: Related<AnswerHandle>,
}

impl Student {
    pub(crate) fn from_row(row: Row<'_>) -> Result<Student, LoadError> {
        Ok(Student {
            id: row.get("students_id")?.to_string(),
            location: row.get_opt("students_location")?.map(str::to_string),
            date_joined: row.get_timestamp("students_date_joined")?,
            tags: Related::new(),
            groups: Related::new(),
            schools: Related::new(),
            questions: Related::new(),
            answers: Related::new(),
        })
    }

    pub(crate) fn freeze(&mut self) {
        self.tags.seal();
        self.groups.seal();
        self.schools.seal();
        self.questions.seal();
        self.answers.seal();
    }
}

impl Describe for Student {
    fn type_name(&self) -> &'static str {
        "Student"
    }

    fn scalars(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("date_joined", timestamp_json(&self.date_joined)),
            ("location", json!(self.location)),
        ]
    }

    fn collections(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("answers", self.answers.len()),
            ("groups", self.groups.len()),
            ("questions", self.questions.len()),
            ("schools", self.schools.len()),
            ("tags", self.tags.len()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professional {
    pub id: String,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub headline: Option<String>,
    pub date_joined: NaiveDateTime,
    pub tags: Related<TagHandle>,
    pub groups: Related<GroupHandle>,
    pub schools: Related<SchoolHandle>,
    pub questions: Related<QuestionHandle>,
    pub answers: Related<AnswerHandle>,
    pub emails: Related<EmailHandle>,
}

impl Professional {
    pub(crate) fn from_row(row: Row<'_>) -> Result<Professional, LoadError> {
        Ok(Professional {
            id: row.get("professionals_id")?.to_string(),
            location: row.get_opt("professionals_location")?.map(str::to_string),
            industry: row.get_opt("professionals_industry")?.map(str::to_string),
            headline: row.get_opt("professionals_headline")?.map(str::to_string),
            date_joined: row.get_timestamp("professionals_date_joined")?,
            tags: Related::new(),
            groups: Related::new(),
            schools: Related::new(),
            questions: Related::new(),
            answers: Related::new(),
            emails: Related::new(),
        })
    }

    pub(crate) fn freeze(&mut self) {
        self.tags.seal();
        self.groups.seal();
        self.schools.seal();
        self.questions.seal();
        self.answers.seal();
        self.emails.seal();
    }
}

impl Describe for Professional {
    fn type_name(&self) -> &'static str {
        "Professional"
    }

    fn scalars(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("date_joined", timestamp_json(&self.date_joined)),
            ("headline", json!(self.headline)),
            ("industry", json!(self.industry)),
            ("location", json!(self.location)),
        ]
    }

    fn collections(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("answers", self.answers.len()),
            ("emails", self.emails.len()),
            ("groups", self.groups.len()),
            ("questions", self.questions.len()),
            ("schools", self.schools.len()),
            ("tags", self.tags.len()),
        ]
    }
}
