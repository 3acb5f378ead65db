//! Entity model, linker, and sealed graph.
//!
//! The graph moves through two stages:
//! - [`RawDataset`]: flat records straight out of the primary tables, all
//!   relationship collections empty. Serializable.
//! - [`LinkedGraph`]: every foreign key resolved into a direct
//!   relationship and every collection sealed. Read-only.
//!
//! The transition is [`RawDataset::link`], which runs the nine linking
//! passes and the freeze in one shot.

pub mod answer;
pub mod dataset;
pub mod describe;
pub mod email;
pub mod group;
mod link;
pub mod linked;
pub mod person;
pub mod question;
pub mod related;
pub mod school;
pub mod tag;
pub mod types;

// Re-export main types
pub use answer::Answer;
pub use dataset::{
    GroupMembershipRow, JoinTables, MatchRow, RawDataset, SchoolMembershipRow, TagQuestionRow,
    TagUserRow,
};
pub use describe::Describe;
pub use email::Email;
pub use group::Group;
pub use linked::{GraphStats, LinkedGraph, UserView};
pub use person::{Professional, Student};
pub use question::Question;
pub use related::{Related, StateError};
pub use school::School;
pub use tag::Tag;
pub use types::{
    AnswerHandle, EmailHandle, GroupHandle, ProfessionalHandle, QuestionHandle, SchoolHandle,
    TagHandle, UserRef,
};
