//! Mentorgraph
//!
//! An in-memory, cross-referenced object graph built from the relational
//! CSV tables of a Q&A mentoring platform: users, questions, answers,
//! tags, groups, schools, emails, and their join tables.
//!
//! Construction is two-stage:
//!
//! 1. [`RawDataset::load`] decodes the primary tables into flat records
//!    with empty relationship collections. This stage can be saved to and
//!    reloaded from a snapshot file bit-for-bit.
//! 2. [`RawDataset::link`] consumes the raw dataset together with the
//!    [`JoinTables`] and resolves every foreign key into a direct
//!    relationship, returning a sealed [`LinkedGraph`].
//!
//! The linked graph is read-only. Relationship collections refuse appends
//! once sealed, linking a graph twice is unrepresentable because `link`
//! takes the dataset by value, and the cyclic linked graph has no
//! serialization surface; reload the unlinked snapshot and link again
//! instead.
//!
//! # Example
//!
//! ```no_run
//! use mentorgraph::{JoinTables, RawDataset};
//!
//! # fn main() -> mentorgraph::GraphResult<()> {
//! let raw = RawDataset::load("data")?;
//! let joins = JoinTables::load("data")?;
//! let graph = raw.link(&joins)?;
//!
//! let tag = &graph.tags()[0];
//! for user in graph.users_of(&tag.users) {
//!     println!("{} follows {}", user.id(), tag.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod graph;
pub mod index;
pub mod loader;

// Re-export main types for convenience
pub use error::{GraphError, GraphResult, IntegrityError};
pub use graph::{
    Answer, AnswerHandle, Describe, Email, EmailHandle, GraphStats, Group, GroupHandle,
    JoinTables, LinkedGraph, Professional, ProfessionalHandle, Question, QuestionHandle,
    RawDataset, Related, School, SchoolHandle, StateError, Student, Tag, TagHandle, UserRef,
    UserView,
};
pub use loader::{LoadError, Row, Table};
