//! Shared CSV fixtures for the integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub fn write_table(dir: &Path, name: &str, lines: &[&str]) {
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(dir.join(format!("{name}.csv")), content).unwrap();
}

/// A small but fully wired dataset:
/// - 3 tags; tag 1 is followed by the student, tag 2 by the professional,
///   tag 3 by nobody
/// - 1 group with the professional as its only member
/// - 2 users: student `s1`, professional `p1`
/// - schools 10 (both users) and 20 (professional only)
/// - 2 questions: `q1` by `s1`, `q2` unauthored
/// - 2 answers on `q1`: `a1` by `p1`, `a2` unauthored
/// - 1 email to `p1`, matched to `q1`
pub fn write_dataset(dir: &Path) {
    write_table(
        dir,
        "tags",
        &[
            "tags_tag_id,tags_tag_name",
            "1,college",
            "2,engineering",
            "3,medicine",
        ],
    );
    write_table(
        dir,
        "groups",
        &["groups_id,groups_group_type", "g1,youth program"],
    );
    write_table(
        dir,
        "students",
        &[
            "students_id,students_location,students_date_joined",
            "s1,\"Seattle, Washington\",2016-01-01 09:00:00 UTC+0000",
        ],
    );
    write_table(
        dir,
        "professionals",
        &[
            "professionals_id,professionals_location,professionals_industry,\
             professionals_headline,professionals_date_joined",
            "p1,New York NY,Software,Engineer at Example,2015-06-01 12:00:00 UTC+0000",
        ],
    );
    write_table(
        dir,
        "questions",
        &[
            "questions_id,questions_author_id,questions_date_added,questions_title,questions_body",
            "q1,s1,2017-03-01 08:00:00 UTC+0000,Becoming an engineer,\
             \"What should I study, and where?\"",
            "q2,ghost,2017-04-01 08:00:00 UTC+0000,Orphaned question,No author on record",
        ],
    );
    write_table(
        dir,
        "answers",
        &[
            "answers_id,answers_author_id,answers_question_id,answers_date_added,answers_body",
            "a1,p1,q1,2017-03-02 10:00:00 UTC+0000,Study maths and build things",
            "a2,ghost2,q1,2017-03-03 11:00:00 UTC+0000,Orphaned answer",
        ],
    );
    write_table(
        dir,
        "emails",
        &[
            "emails_id,emails_recipient_id,emails_date_sent,emails_frequency_level",
            "e1,p1,2017-03-01 09:00:00 UTC+0000,email_notification_daily",
        ],
    );
    write_table(
        dir,
        "tag_users",
        &["tag_users_tag_id,tag_users_user_id", "1,s1", "2,p1"],
    );
    write_table(
        dir,
        "group_memberships",
        &[
            "group_memberships_group_id,group_memberships_user_id",
            "g1,p1",
        ],
    );
    write_table(
        dir,
        "school_memberships",
        &[
            "school_memberships_school_id,school_memberships_user_id",
            "10,s1",
            "10,p1",
            "20,p1",
        ],
    );
    write_table(
        dir,
        "tag_questions",
        &["tag_questions_tag_id,tag_questions_question_id", "1,q1"],
    );
    write_table(
        dir,
        "matches",
        &["matches_email_id,matches_question_id", "e1,q1"],
    );
}
