//! The sealed, navigable graph.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::answer::Answer;
use super::email::Email;
use super::group::Group;
use super::person::{Professional, Student};
use super::question::Question;
use super::related::Related;
use super::school::School;
use super::tag::Tag;
use super::types::{
    AnswerHandle, EmailHandle, GroupHandle, ProfessionalHandle, QuestionHandle, SchoolHandle,
    TagHandle, UserRef,
};

/// The fully linked, sealed object graph.
///
/// Every relationship collection is sealed and every mandatory reference
/// is resolved. The graph only hands out shared references: there is no
/// mutation surface, and no serialization surface either. The cycles it
/// contains (question → answer → question) are rebuilt by deserializing
/// the unlinked snapshot and linking again in-process. Once constructed it
/// is safe for unlimited concurrent readers.
#[derive(Debug)]
pub struct LinkedGraph {
    tags: Box<[Tag]>,
    groups: Box<[Group]>,
    schools: Box<[School]>,
    students: Box<[Student]>,
    professionals: Box<[Professional]>,
    questions: Box<[Question]>,
    answers: Box<[Answer]>,
    emails: Box<[Email]>,
}

impl LinkedGraph {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        tags: Vec<Tag>,
        groups: Vec<Group>,
        schools: Vec<School>,
        students: Vec<Student>,
        professionals: Vec<Professional>,
        questions: Vec<Question>,
        answers: Vec<Answer>,
        emails: Vec<Email>,
    ) -> LinkedGraph {
        LinkedGraph {
            tags: tags.into_boxed_slice(),
            groups: groups.into_boxed_slice(),
            schools: schools.into_boxed_slice(),
            students: students.into_boxed_slice(),
            professionals: professionals.into_boxed_slice(),
            questions: questions.into_boxed_slice(),
            answers: answers.into_boxed_slice(),
            emails: emails.into_boxed_slice(),
        }
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Schools in first-reference order.
    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn professionals(&self) -> &[Professional] {
        &self.professionals
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn tag(&self, handle: TagHandle) -> &Tag {
        &self.tags[handle.index()]
    }

    pub fn group(&self, handle: GroupHandle) -> &Group {
        &self.groups[handle.index()]
    }

    pub fn school(&self, handle: SchoolHandle) -> &School {
        &self.schools[handle.index()]
    }

    pub fn question(&self, handle: QuestionHandle) -> &Question {
        &self.questions[handle.index()]
    }

    pub fn answer(&self, handle: AnswerHandle) -> &Answer {
        &self.answers[handle.index()]
    }

    pub fn email(&self, handle: EmailHandle) -> &Email {
        &self.emails[handle.index()]
    }

    pub fn professional(&self, handle: ProfessionalHandle) -> &Professional {
        &self.professionals[handle.index()]
    }

    pub fn user(&self, user: UserRef) -> UserView<'_> {
        match user {
            UserRef::Student(i) => UserView::Student(&self.students[i as usize]),
            UserRef::Professional(i) => UserView::Professional(&self.professionals[i as usize]),
        }
    }

    /// Resolve a mixed membership collection to user views.
    pub fn users_of<'a>(
        &'a self,
        members: &'a Related<UserRef>,
    ) -> impl Iterator<Item = UserView<'a>> {
        members.iter().map(move |&user| self.user(user))
    }

    /// Only the student members of a mixed user collection.
    pub fn students_of<'a>(
        &'a self,
        members: &'a Related<UserRef>,
    ) -> impl Iterator<Item = &'a Student> {
        members.iter().filter_map(move |&user| match user {
            UserRef::Student(i) => Some(&self.students[i as usize]),
            UserRef::Professional(_) => None,
        })
    }

    /// Only the professional members of a mixed user collection.
    pub fn professionals_of<'a>(
        &'a self,
        members: &'a Related<UserRef>,
    ) -> impl Iterator<Item = &'a Professional> {
        members.iter().filter_map(move |&user| match user {
            UserRef::Student(_) => None,
            UserRef::Professional(i) => Some(&self.professionals[i as usize]),
        })
    }

    /// A question's author, when one was resolved. Unauthored questions
    /// are an expected data shape.
    pub fn question_author(&self, question: &Question) -> Option<UserView<'_>> {
        question.author.map(|user| self.user(user))
    }

    /// An answer's author, when one was resolved.
    pub fn answer_author(&self, answer: &Answer) -> Option<UserView<'_>> {
        answer.author.map(|user| self.user(user))
    }

    /// The question an answer belongs to. Always present in a sealed graph.
    pub fn answer_question(&self, answer: &Answer) -> &Question {
        let handle = answer
            .question
            .expect("answer→question is resolved during linking");
        self.question(handle)
    }

    /// The professional an email was sent to. Always present in a sealed
    /// graph.
    pub fn email_recipient(&self, email: &Email) -> &Professional {
        let handle = email
            .recipient
            .expect("email→recipient is resolved during linking");
        self.professional(handle)
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            tags: self.tags.len(),
            groups: self.groups.len(),
            schools: self.schools.len(),
            students: self.students.len(),
            professionals: self.professionals.len(),
            questions: self.questions.len(),
            answers: self.answers.len(),
            emails: self.emails.len(),
        }
    }
}

/// A user from either arena.
#[derive(Debug, Clone, Copy)]
pub enum UserView<'a> {
    Student(&'a Student),
    Professional(&'a Professional),
}

impl<'a> UserView<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            UserView::Student(student) => student.id.as_str(),
            UserView::Professional(pro) => pro.id.as_str(),
        }
    }

    pub fn location(&self) -> Option<&'a str> {
        match *self {
            UserView::Student(student) => student.location.as_deref(),
            UserView::Professional(pro) => pro.location.as_deref(),
        }
    }

    pub fn date_joined(&self) -> NaiveDateTime {
        match *self {
            UserView::Student(student) => student.date_joined,
            UserView::Professional(pro) => pro.date_joined,
        }
    }

    pub fn tags(&self) -> &'a Related<TagHandle> {
        match *self {
            UserView::Student(student) => &student.tags,
            UserView::Professional(pro) => &pro.tags,
        }
    }

    pub fn groups(&self) -> &'a Related<GroupHandle> {
        match *self {
            UserView::Student(student) => &student.groups,
            UserView::Professional(pro) => &pro.groups,
        }
    }

    pub fn schools(&self) -> &'a Related<SchoolHandle> {
        match *self {
            UserView::Student(student) => &student.schools,
            UserView::Professional(pro) => &pro.schools,
        }
    }

    pub fn questions(&self) -> &'a Related<QuestionHandle> {
        match *self {
            UserView::Student(student) => &student.questions,
            UserView::Professional(pro) => &pro.questions,
        }
    }

    pub fn answers(&self) -> &'a Related<AnswerHandle> {
        match *self {
            UserView::Student(student) => &student.answers,
            UserView::Professional(pro) => &pro.answers,
        }
    }

    pub fn as_student(&self) -> Option<&'a Student> {
        match *self {
            UserView::Student(student) => Some(student),
            UserView::Professional(_) => None,
        }
    }

    pub fn as_professional(&self) -> Option<&'a Professional> {
        match *self {
            UserView::Student(_) => None,
            UserView::Professional(pro) => Some(pro),
        }
    }
}

/// Per-collection entity counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub tags: usize,
    pub groups: usize,
    pub schools: usize,
    pub students: usize,
    pub professionals: usize,
    pub questions: usize,
    pub answers: usize,
    pub emails: usize,
}
