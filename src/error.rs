//! Error taxonomy for graph construction.
//!
//! Construction either yields a fully linked, sealed graph or aborts with
//! an error naming the offending table and key. There is no row-level
//! skip-and-continue: a dataset with a broken mandatory reference is
//! untrustworthy as a whole.

use thiserror::Error;

use crate::graph::related::StateError;
use crate::loader::LoadError;

/// Fatal dataset-consistency failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    /// Two records in one table share a primary key.
    #[error("duplicate key {key:?} in {table}")]
    DuplicateKey { table: &'static str, key: String },

    /// A user id exists in both the student and the professional table.
    /// The merged user namespace must have no collisions.
    #[error("user id {key:?} present in both students and professionals")]
    UserIdOverlap { key: String },

    /// A mandatory foreign key has no matching primary entity.
    #[error("{table} references unknown key {key:?}")]
    DanglingReference { table: &'static str, key: String },
}

/// Any error the load → link pipeline can abort with.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    #[error(transparent)]
    State(#[from] StateError),
}

pub type GraphResult<T> = Result<T, GraphError>;
