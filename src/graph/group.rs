//! Membership groups (e.g. youth programs).

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::describe::Describe;
use super::related::Related;
use super::types::UserRef;
use crate::loader::{LoadError, Row};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub group_type: String,
    pub users: Related<UserRef>,
}

impl Group {
    pub(crate) fn from_row(row: Row<'_>) -> Result<Group, LoadError> {
        Ok(Group {
            id: row.get("groups_id")?.to_string(),
            group_type: row.get("groups_group_type")?.to_string(),
            users: Related::new(),
        })
    }

    pub(crate) fn freeze(&mut self) {
        self.users.seal();
    }
}

impl Describe for Group {
    fn type_name(&self) -> &'static str {
        "Group"
    }

    fn scalars(&self) -> Vec<(&'static str, Value)> {
        vec![("group_type", json!(self.group_type))]
    }

    fn collections(&self) -> Vec<(&'static str, usize)> {
        vec![("users", self.users.len())]
    }
}
