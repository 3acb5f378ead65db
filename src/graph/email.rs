//! Notification emails sent to professionals, matching them to questions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::describe::{timestamp_json, Describe};
use super::related::Related;
use super::types::{ProfessionalHandle, QuestionHandle};
use crate::loader::{LoadError, Row};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub id: String,
    pub recipient_id: String,
    pub date_sent: NaiveDateTime,
    pub frequency_level: String,
    /// Resolved during linking; always set in a sealed graph. Recipient
    /// ids are assumed valid, and a miss aborts construction.
    pub recipient: Option<ProfessionalHandle>,
    pub questions: Related<QuestionHandle>,
}

impl Email {
    pub(crate) fn from_row(row: Row<'_>) -> Result<Email, LoadError> {
        Ok(Email {
            id: row.get("emails_id")?.to_string(),
            recipient_id: row.get("emails_recipient_id")?.to_string(),
            date_sent: row.get_timestamp("emails_date_sent")?,
            frequency_level: row.get("emails_frequency_level")?.to_string(),
            recipient: None,
            questions: Related::new(),
        })
    }

    pub(crate) fn freeze(&mut self) {
        self.questions.seal();
    }
}

impl Describe for Email {
    fn type_name(&self) -> &'static str {
        "Email"
    }

    fn scalars(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("date_sent", timestamp_json(&self.date_sent)),
            ("frequency_level", json!(self.frequency_level)),
        ]
    }

    fn collections(&self) -> Vec<(&'static str, usize)> {
        vec![("questions", self.questions.len())]
    }
}
