//! Schools.
//!
//! There is no school source table: a school exists only because a
//! membership row referenced it. The linker synthesizes each school on
//! first reference and reuses the instance for subsequent rows.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::describe::Describe;
use super::related::Related;
use super::types::UserRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: u64,
    pub users: Related<UserRef>,
}

impl School {
    pub(crate) fn new(id: u64) -> School {
        School {
            id,
            users: Related::new(),
        }
    }

    pub(crate) fn freeze(&mut self) {
        self.users.seal();
    }
}

impl Describe for School {
    fn type_name(&self) -> &'static str {
        "School"
    }

    fn scalars(&self) -> Vec<(&'static str, Value)> {
        Vec::new()
    }

    fn collections(&self) -> Vec<(&'static str, usize)> {
        vec![("users", self.users.len())]
    }
}
