//! Topic tags. Users follow tags; questions carry them.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::describe::Describe;
use super::related::Related;
use super::types::{QuestionHandle, UserRef};
use crate::loader::{LoadError, Row};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub users: Related<UserRef>,
    pub questions: Related<QuestionHandle>,
}

impl Tag {
    pub(crate) fn from_row(row: Row<'_>) -> Result<Tag, LoadError> {
        Ok(Tag {
            id: row.get_u64("tags_tag_id")?,
            name: row.get("tags_tag_name")?.to_string(),
            users: Related::new(),
            questions: Related::new(),
        })
    }

    pub(crate) fn freeze(&mut self) {
        self.users.seal();
        self.questions.seal();
    }
}

impl Describe for Tag {
    fn type_name(&self) -> &'static str {
        "Tag"
    }

    fn scalars(&self) -> Vec<(&'static str, Value)> {
        vec![("name", json!(self.name))]
    }

    fn collections(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("questions", self.questions.len()),
            ("users", self.users.len()),
        ]
    }
}
