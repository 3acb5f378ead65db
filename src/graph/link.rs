//! The linking phase: nine passes in dependency order, then the freeze.
//!
//! Later passes consult lookups populated by earlier ones, so the order is
//! fixed. Every pass only ever appends; the whole routine runs at most
//! once per graph because [`RawDataset::link`] consumes the dataset, which
//! makes a second run unrepresentable rather than merely guarded.

use indexmap::IndexMap;
use tracing::info;

use super::dataset::{JoinTables, RawDataset};
use super::linked::LinkedGraph;
use super::school::School;
use super::types::{
    AnswerHandle, EmailHandle, GroupHandle, ProfessionalHandle, QuestionHandle, SchoolHandle,
    TagHandle, UserRef,
};
use crate::error::{GraphResult, IntegrityError};
use crate::index::{build_index, merge_disjoint};

pub(crate) fn run(raw: RawDataset, joins: &JoinTables) -> GraphResult<LinkedGraph> {
    let RawDataset {
        dir: _,
        mut tags,
        mut groups,
        mut students,
        mut professionals,
        mut questions,
        mut answers,
        mut emails,
    } = raw;

    // Pass 1: identifier indexes. Duplicate primary keys and any overlap
    // between the student and professional id namespaces surface here,
    // before a single relationship is written.
    let tags_by_id = build_index("tags", &tags, |tag| tag.id)?;
    let groups_by_id = build_index("groups", &groups, |group| group.id.clone())?;
    let students_by_id = build_index("students", &students, |student| student.id.clone())?;
    let professionals_by_id =
        build_index("professionals", &professionals, |pro| pro.id.clone())?;
    let questions_by_id = build_index("questions", &questions, |question| question.id.clone())?;
    let emails_by_id = build_index("emails", &emails, |email| email.id.clone())?;
    let users_by_id = merge_disjoint(&students_by_id, &professionals_by_id)?;

    let dangling = |table: &'static str, key: &str| IntegrityError::DanglingReference {
        table,
        key: key.to_string(),
    };

    // Pass 2: tag ↔ user memberships. Join rows reference only valid
    // primary entities; an unknown id on either side is fatal.
    info!("linking tags with users");
    for row in &joins.tag_users {
        let &tag_position = tags_by_id
            .get(&row.tag_id)
            .ok_or_else(|| dangling("tag_users", &row.tag_id.to_string()))?;
        let &user = users_by_id
            .get(row.user_id.as_str())
            .ok_or_else(|| dangling("tag_users", &row.user_id))?;

        let tag_handle = TagHandle::new(tag_position as usize);
        tags[tag_handle.index()].users.push(user)?;
        match user {
            UserRef::Student(i) => students[i as usize].tags.push(tag_handle)?,
            UserRef::Professional(i) => professionals[i as usize].tags.push(tag_handle)?,
        }
    }

    // Pass 3: group ↔ user memberships.
    info!("linking groups with users");
    for row in &joins.group_memberships {
        let &group_position = groups_by_id
            .get(row.group_id.as_str())
            .ok_or_else(|| dangling("group_memberships", &row.group_id))?;
        let &user = users_by_id
            .get(row.user_id.as_str())
            .ok_or_else(|| dangling("group_memberships", &row.user_id))?;

        let group_handle = GroupHandle::new(group_position as usize);
        groups[group_handle.index()].users.push(user)?;
        match user {
            UserRef::Student(i) => students[i as usize].groups.push(group_handle)?,
            UserRef::Professional(i) => professionals[i as usize].groups.push(group_handle)?,
        }
    }

    // Pass 4: school ↔ user memberships. Schools have no source table:
    // each is synthesized on the first row that references it and reused
    // afterwards. The side table keeps first-reference order, so handle
    // assignment is deterministic.
    info!("linking schools with users");
    let mut schools_by_id: IndexMap<u64, School> = IndexMap::new();
    for row in &joins.school_memberships {
        let entry = schools_by_id.entry(row.school_id);
        let school_handle = SchoolHandle::new(entry.index());
        entry.or_insert_with(|| School::new(row.school_id));

        let &user = users_by_id
            .get(row.user_id.as_str())
            .ok_or_else(|| dangling("school_memberships", &row.user_id))?;

        schools_by_id[school_handle.index()].users.push(user)?;
        match user {
            UserRef::Student(i) => students[i as usize].schools.push(school_handle)?,
            UserRef::Professional(i) => professionals[i as usize].schools.push(school_handle)?,
        }
    }

    // Pass 5: tag ↔ question associations.
    info!("linking tags with questions");
    for row in &joins.tag_questions {
        let &tag_position = tags_by_id
            .get(&row.tag_id)
            .ok_or_else(|| dangling("tag_questions", &row.tag_id.to_string()))?;
        let &question_position = questions_by_id
            .get(row.question_id.as_str())
            .ok_or_else(|| dangling("tag_questions", &row.question_id))?;

        let tag_handle = TagHandle::new(tag_position as usize);
        let question_handle = QuestionHandle::new(question_position as usize);
        questions[question_handle.index()].tags.push(tag_handle)?;
        tags[tag_handle.index()].questions.push(question_handle)?;
    }

    // Pass 6: question → author. The dataset contains questions whose
    // author id matches no user record; those keep a None author.
    info!("linking questions with authors");
    for (position, question) in questions.iter_mut().enumerate() {
        if let Some(&user) = users_by_id.get(question.author_id.as_str()) {
            question.author = Some(user);
            let handle = QuestionHandle::new(position);
            match user {
                UserRef::Student(i) => students[i as usize].questions.push(handle)?,
                UserRef::Professional(i) => professionals[i as usize].questions.push(handle)?,
            }
        }
    }

    // Pass 7: answer → author (same tolerated miss as questions) and
    // answer → question (mandatory: the dataset is assumed consistent on
    // this edge).
    info!("linking answers with authors and questions");
    for (position, answer) in answers.iter_mut().enumerate() {
        let handle = AnswerHandle::new(position);
        if let Some(&user) = users_by_id.get(answer.author_id.as_str()) {
            answer.author = Some(user);
            match user {
                UserRef::Student(i) => students[i as usize].answers.push(handle)?,
                UserRef::Professional(i) => professionals[i as usize].answers.push(handle)?,
            }
        }

        let &question_position = questions_by_id
            .get(answer.question_id.as_str())
            .ok_or_else(|| dangling("answers", &answer.question_id))?;
        let question_handle = QuestionHandle::new(question_position as usize);
        answer.question = Some(question_handle);
        questions[question_handle.index()].answers.push(handle)?;
    }

    // Pass 8: email → recipient. Recipient ids are assumed valid and
    // always name a professional.
    info!("linking emails with recipients");
    for (position, email) in emails.iter_mut().enumerate() {
        let &recipient_position = professionals_by_id
            .get(email.recipient_id.as_str())
            .ok_or_else(|| dangling("emails", &email.recipient_id))?;

        let recipient = ProfessionalHandle::new(recipient_position as usize);
        email.recipient = Some(recipient);
        professionals[recipient.index()]
            .emails
            .push(EmailHandle::new(position))?;
    }

    // Pass 9: email ↔ question matches.
    info!("linking emails with questions");
    for row in &joins.matches {
        let &email_position = emails_by_id
            .get(row.email_id.as_str())
            .ok_or_else(|| dangling("matches", &row.email_id))?;
        let &question_position = questions_by_id
            .get(row.question_id.as_str())
            .ok_or_else(|| dangling("matches", &row.question_id))?;

        let email_handle = EmailHandle::new(email_position as usize);
        let question_handle = QuestionHandle::new(question_position as usize);
        emails[email_handle.index()].questions.push(question_handle)?;
        questions[question_handle.index()].emails.push(email_handle)?;
    }

    // Freeze: one traversal per entity collection. Answers carry no
    // relationship collections of their own.
    info!("freezing relationship collections");
    for tag in &mut tags {
        tag.freeze();
    }
    for group in &mut groups {
        group.freeze();
    }
    for student in &mut students {
        student.freeze();
    }
    for professional in &mut professionals {
        professional.freeze();
    }
    for question in &mut questions {
        question.freeze();
    }
    for email in &mut emails {
        email.freeze();
    }
    let schools: Vec<School> = schools_by_id
        .into_values()
        .map(|mut school| {
            school.freeze();
            school
        })
        .collect();

    Ok(LinkedGraph::new(
        tags,
        groups,
        schools,
        students,
        professionals,
        questions,
        answers,
        emails,
    ))
}
