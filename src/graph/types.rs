//! Typed handles into the graph's entity arenas.
//!
//! Entities live in owned collections inside the graph container;
//! relationships are stored as these copyable arena positions and resolved
//! back to entity references through the container. This is what lets the
//! graph contain reference cycles (question → answer → question) without
//! shared ownership.

use serde::{Deserialize, Serialize};

/// Position of a tag in the graph's tag arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagHandle(pub(crate) u32);

impl TagHandle {
    pub(crate) fn new(position: usize) -> Self {
        TagHandle(position as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Position of a group in the graph's group arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupHandle(pub(crate) u32);

impl GroupHandle {
    pub(crate) fn new(position: usize) -> Self {
        GroupHandle(position as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Position of a school in the graph's school arena. Schools are
/// synthesized during linking, so handles are assigned in first-reference
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchoolHandle(pub(crate) u32);

impl SchoolHandle {
    pub(crate) fn new(position: usize) -> Self {
        SchoolHandle(position as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Position of a question in the graph's question arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionHandle(pub(crate) u32);

impl QuestionHandle {
    pub(crate) fn new(position: usize) -> Self {
        QuestionHandle(position as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Position of an answer in the graph's answer arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerHandle(pub(crate) u32);

impl AnswerHandle {
    pub(crate) fn new(position: usize) -> Self {
        AnswerHandle(position as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Position of an email in the graph's email arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailHandle(pub(crate) u32);

impl EmailHandle {
    pub(crate) fn new(position: usize) -> Self {
        EmailHandle(position as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Position of a professional in the graph's professional arena. Used for
/// the email → recipient edge, which always resolves to a professional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfessionalHandle(pub(crate) u32);

impl ProfessionalHandle {
    pub(crate) fn new(position: usize) -> Self {
        ProfessionalHandle(position as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Reference to a user in either arena.
///
/// Students and professionals occupy disjoint id namespaces, so a user is
/// exactly one of the two. Mixed membership collections (tag users, group
/// users, school users) store these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRef {
    Student(u32),
    Professional(u32),
}

impl UserRef {
    pub fn is_student(self) -> bool {
        matches!(self, UserRef::Student(_))
    }

    pub fn is_professional(self) -> bool {
        matches!(self, UserRef::Professional(_))
    }
}
