//! End-to-end linking over fixture datasets: bidirectional closure for
//! every link type, tolerated author misses, mandatory-edge failures, and
//! sealing.

mod common;

use mentorgraph::{GraphError, IntegrityError, JoinTables, LinkedGraph, RawDataset, UserRef};
use tempfile::TempDir;

fn linked_fixture() -> (TempDir, LinkedGraph) {
    let dir = TempDir::new().unwrap();
    common::write_dataset(dir.path());
    let raw = RawDataset::load(dir.path()).unwrap();
    let joins = JoinTables::load(dir.path()).unwrap();
    let graph = raw.link(&joins).unwrap();
    (dir, graph)
}

fn link_error(dir: &TempDir) -> GraphError {
    let raw = RawDataset::load(dir.path()).unwrap();
    let joins = JoinTables::load(dir.path()).unwrap();
    raw.link(&joins).unwrap_err()
}

#[test]
fn tag_memberships_are_bidirectional() {
    let (_dir, graph) = linked_fixture();

    let college = &graph.tags()[0];
    assert_eq!(college.name, "college");
    assert_eq!(college.users.len(), 1);
    let member = graph.users_of(&college.users).next().unwrap();
    assert_eq!(member.id(), "s1");

    let student = &graph.students()[0];
    assert_eq!(student.tags.len(), 1);
    assert_eq!(graph.tag(student.tags.as_slice()[0]).name, "college");

    // tag 2 has the professional, tag 3 has nobody
    assert_eq!(graph.tags()[1].users.len(), 1);
    assert!(graph.tags()[2].users.is_empty());
}

#[test]
fn every_link_type_closes_both_ways() {
    let (_dir, graph) = linked_fixture();

    // entity → user direction
    for (position, tag) in graph.tags().iter().enumerate() {
        for &user in &tag.users {
            assert!(graph.user(user).tags().iter().any(|h| h.index() == position));
        }
        for &handle in &tag.questions {
            let question = graph.question(handle);
            assert!(question.tags.iter().any(|h| h.index() == position));
        }
    }
    for (position, group) in graph.groups().iter().enumerate() {
        for &user in &group.users {
            assert!(graph.user(user).groups().iter().any(|h| h.index() == position));
        }
    }
    for (position, school) in graph.schools().iter().enumerate() {
        for &user in &school.users {
            assert!(graph.user(user).schools().iter().any(|h| h.index() == position));
        }
    }

    // user → entity direction
    for (position, student) in graph.students().iter().enumerate() {
        let user = UserRef::Student(position as u32);
        for &handle in &student.tags {
            assert!(graph.tag(handle).users.iter().any(|&u| u == user));
        }
        for &handle in &student.groups {
            assert!(graph.group(handle).users.iter().any(|&u| u == user));
        }
        for &handle in &student.schools {
            assert!(graph.school(handle).users.iter().any(|&u| u == user));
        }
    }
    for (position, pro) in graph.professionals().iter().enumerate() {
        let user = UserRef::Professional(position as u32);
        for &handle in &pro.tags {
            assert!(graph.tag(handle).users.iter().any(|&u| u == user));
        }
        for &handle in &pro.groups {
            assert!(graph.group(handle).users.iter().any(|&u| u == user));
        }
        for &handle in &pro.schools {
            assert!(graph.school(handle).users.iter().any(|&u| u == user));
        }
    }

    // email ↔ question matches
    for (position, email) in graph.emails().iter().enumerate() {
        for &handle in &email.questions {
            let question = graph.question(handle);
            assert!(question.emails.iter().any(|h| h.index() == position));
        }
    }
    for (position, question) in graph.questions().iter().enumerate() {
        for &handle in &question.emails {
            let email = graph.email(handle);
            assert!(email.questions.iter().any(|h| h.index() == position));
        }
    }
}

#[test]
fn schools_are_synthesized_in_first_reference_order() {
    let (_dir, graph) = linked_fixture();

    let ids: Vec<u64> = graph.schools().iter().map(|school| school.id).collect();
    assert_eq!(ids, vec![10, 20]);

    let school = &graph.schools()[0];
    assert_eq!(school.users.len(), 2);
    assert_eq!(graph.students_of(&school.users).count(), 1);
    assert_eq!(graph.professionals_of(&school.users).count(), 1);

    // repeated rows for school 10 reused one instance
    let pro = &graph.professionals()[0];
    assert_eq!(pro.schools.len(), 2);
}

#[test]
fn authors_resolve_with_tolerated_misses() {
    let (_dir, graph) = linked_fixture();

    let authored = &graph.questions()[0];
    let author = graph.question_author(authored).unwrap();
    assert_eq!(author.id(), "s1");
    assert_eq!(graph.students()[0].questions.len(), 1);

    let unauthored = graph
        .questions()
        .iter()
        .filter(|question| question.author.is_none())
        .count();
    assert_eq!(unauthored, 1);
    assert!(graph.questions()[1].author.is_none());

    let answered = &graph.answers()[0];
    assert_eq!(graph.answer_author(answered).unwrap().id(), "p1");
    assert!(graph.answers()[1].author.is_none());
    assert_eq!(graph.professionals()[0].answers.len(), 1);
}

#[test]
fn every_answer_reaches_its_question_and_back() {
    let (_dir, graph) = linked_fixture();

    for (position, answer) in graph.answers().iter().enumerate() {
        let question = graph.answer_question(answer);
        assert_eq!(question.id, answer.question_id);
        assert!(question.answers.iter().any(|h| h.index() == position));
    }
    assert_eq!(graph.questions()[0].answers.len(), 2);
    assert!(graph.questions()[1].answers.is_empty());
}

#[test]
fn emails_reach_their_recipient_and_matched_questions() {
    let (_dir, graph) = linked_fixture();

    let email = &graph.emails()[0];
    let recipient = graph.email_recipient(email);
    assert_eq!(recipient.id, "p1");
    assert_eq!(recipient.emails.len(), 1);

    assert_eq!(email.questions.len(), 1);
    assert_eq!(graph.question(email.questions.as_slice()[0]).id, "q1");
    assert_eq!(graph.questions()[0].emails.len(), 1);
}

#[test]
fn all_collections_are_sealed_after_linking() {
    let (_dir, graph) = linked_fixture();

    assert!(graph
        .tags()
        .iter()
        .all(|tag| tag.users.is_sealed() && tag.questions.is_sealed()));
    assert!(graph
        .students()
        .iter()
        .all(|s| s.tags.is_sealed() && s.schools.is_sealed() && s.answers.is_sealed()));
    assert!(graph
        .professionals()
        .iter()
        .all(|p| p.emails.is_sealed() && p.questions.is_sealed()));
    assert!(graph.schools().iter().all(|school| school.users.is_sealed()));
    assert!(graph.emails().iter().all(|email| email.questions.is_sealed()));
}

#[test]
fn missing_email_recipient_aborts_construction() {
    let dir = TempDir::new().unwrap();
    common::write_dataset(dir.path());
    common::write_table(
        dir.path(),
        "emails",
        &[
            "emails_id,emails_recipient_id,emails_date_sent,emails_frequency_level",
            "e1,p1,2017-03-01 09:00:00 UTC+0000,email_notification_daily",
            "e2,nobody,2017-03-02 09:00:00 UTC+0000,email_notification_weekly",
        ],
    );

    match link_error(&dir) {
        GraphError::Integrity(IntegrityError::DanglingReference { table, key }) => {
            assert_eq!(table, "emails");
            assert_eq!(key, "nobody");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn overlapping_user_namespaces_abort_before_linking() {
    let dir = TempDir::new().unwrap();
    common::write_dataset(dir.path());
    // a professional reusing the student's id
    common::write_table(
        dir.path(),
        "professionals",
        &[
            "professionals_id,professionals_location,professionals_industry,\
             professionals_headline,professionals_date_joined",
            "p1,New York NY,Software,Engineer at Example,2015-06-01 12:00:00 UTC+0000",
            "s1,,,,2015-07-01 12:00:00 UTC+0000",
        ],
    );

    match link_error(&dir) {
        GraphError::Integrity(IntegrityError::UserIdOverlap { key }) => assert_eq!(key, "s1"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_primary_key_aborts_construction() {
    let dir = TempDir::new().unwrap();
    common::write_dataset(dir.path());
    common::write_table(
        dir.path(),
        "tags",
        &["tags_tag_id,tags_tag_name", "1,college", "1,college-again"],
    );

    match link_error(&dir) {
        GraphError::Integrity(IntegrityError::DuplicateKey { table, key }) => {
            assert_eq!(table, "tags");
            assert_eq!(key, "1");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn dangling_join_row_aborts_construction() {
    let dir = TempDir::new().unwrap();
    common::write_dataset(dir.path());
    common::write_table(
        dir.path(),
        "tag_users",
        &["tag_users_tag_id,tag_users_user_id", "99,s1"],
    );

    match link_error(&dir) {
        GraphError::Integrity(IntegrityError::DanglingReference { table, key }) => {
            assert_eq!(table, "tag_users");
            assert_eq!(key, "99");
        }
        other => panic!("unexpected error: {other}"),
    }
}
