//! Raw (unlinked) dataset loading and snapshot persistence.
//!
//! Relationship collections are empty at this stage, which is what makes
//! the raw dataset serializable: the linked graph contains reference
//! cycles and deliberately has no serialization surface. The intended
//! reload pattern is: load the unlinked snapshot, then re-run linking
//! in-process.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::answer::Answer;
use super::email::Email;
use super::group::Group;
use super::link;
use super::linked::LinkedGraph;
use super::person::{Professional, Student};
use super::question::Question;
use super::tag::Tag;
use crate::error::GraphResult;
use crate::loader::{LoadError, Row, Table};

/// The seven primary tables, loaded flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDataset {
    pub dir: PathBuf,
    pub tags: Vec<Tag>,
    pub groups: Vec<Group>,
    pub students: Vec<Student>,
    pub professionals: Vec<Professional>,
    pub questions: Vec<Question>,
    pub answers: Vec<Answer>,
    pub emails: Vec<Email>,
}

impl RawDataset {
    /// Load the primary tables from a dataset directory. One pass per
    /// table, each independent of the others.
    pub fn load(dir: impl AsRef<Path>) -> Result<RawDataset, LoadError> {
        let dir = dir.as_ref();
        Ok(RawDataset {
            dir: dir.to_path_buf(),
            tags: load_table(dir, "tags", Tag::from_row)?,
            groups: load_table(dir, "groups", Group::from_row)?,
            students: load_table(dir, "students", Student::from_row)?,
            professionals: load_table(dir, "professionals", Professional::from_row)?,
            questions: load_table(dir, "questions", Question::from_row)?,
            answers: load_table(dir, "answers", Answer::from_row)?,
            emails: load_table(dir, "emails", Email::from_row)?,
        })
    }

    /// Resolve every foreign key into a direct relationship and seal the
    /// result. Consumes the raw dataset, so a graph is linked at most once.
    pub fn link(self, joins: &JoinTables) -> GraphResult<LinkedGraph> {
        link::run(self, joins)
    }

    /// Load the join tables from this dataset's own directory, then link.
    pub fn link_from_dir(self) -> GraphResult<LinkedGraph> {
        let joins = JoinTables::load(&self.dir)?;
        self.link(&joins)
    }

    /// Write the unlinked dataset to a snapshot file.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Reconstruct an unlinked dataset from a snapshot file.
    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<RawDataset, LoadError> {
        let file = File::open(path)?;
        Ok(bincode::deserialize_from(BufReader::new(file))?)
    }
}

/// One tag-membership join row.
#[derive(Debug, Clone, PartialEq)]
pub struct TagUserRow {
    pub tag_id: u64,
    pub user_id: String,
}

/// One group-membership join row.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMembershipRow {
    pub group_id: String,
    pub user_id: String,
}

/// One school-membership join row.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolMembershipRow {
    pub school_id: u64,
    pub user_id: String,
}

/// One tag-question join row.
#[derive(Debug, Clone, PartialEq)]
pub struct TagQuestionRow {
    pub tag_id: u64,
    pub question_id: String,
}

/// One email-question match row.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow {
    pub email_id: String,
    pub question_id: String,
}

/// The five join tables, consumed by the linker. Each row carries exactly
/// the pair of foreign keys needed for one relationship.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinTables {
    pub tag_users: Vec<TagUserRow>,
    pub group_memberships: Vec<GroupMembershipRow>,
    pub school_memberships: Vec<SchoolMembershipRow>,
    pub tag_questions: Vec<TagQuestionRow>,
    pub matches: Vec<MatchRow>,
}

impl JoinTables {
    pub fn load(dir: impl AsRef<Path>) -> Result<JoinTables, LoadError> {
        let dir = dir.as_ref();
        Ok(JoinTables {
            tag_users: load_table(dir, "tag_users", |row| {
                Ok(TagUserRow {
                    tag_id: row.get_u64("tag_users_tag_id")?,
                    user_id: row.get("tag_users_user_id")?.to_string(),
                })
            })?,
            group_memberships: load_table(dir, "group_memberships", |row| {
                Ok(GroupMembershipRow {
                    group_id: row.get("group_memberships_group_id")?.to_string(),
                    user_id: row.get("group_memberships_user_id")?.to_string(),
                })
            })?,
            school_memberships: load_table(dir, "school_memberships", |row| {
                Ok(SchoolMembershipRow {
                    school_id: row.get_u64("school_memberships_school_id")?,
                    user_id: row.get("school_memberships_user_id")?.to_string(),
                })
            })?,
            tag_questions: load_table(dir, "tag_questions", |row| {
                Ok(TagQuestionRow {
                    tag_id: row.get_u64("tag_questions_tag_id")?,
                    question_id: row.get("tag_questions_question_id")?.to_string(),
                })
            })?,
            matches: load_table(dir, "matches", |row| {
                Ok(MatchRow {
                    email_id: row.get("matches_email_id")?.to_string(),
                    question_id: row.get("matches_question_id")?.to_string(),
                })
            })?,
        })
    }
}

fn load_table<T>(
    dir: &Path,
    name: &str,
    from_row: impl Fn(Row<'_>) -> Result<T, LoadError>,
) -> Result<Vec<T>, LoadError> {
    let table = Table::read(dir, name)?;
    let mut records = Vec::with_capacity(table.len());
    for row in table.rows() {
        records.push(from_row(row)?);
    }
    info!(rows = records.len(), "loaded {}", name);
    Ok(records)
}
