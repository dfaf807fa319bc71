use chrono::NaiveDate;

use crate::catalog::event::{EventKind, Importance, TimelineEvent};
use crate::catalog::institution::Institution;
use crate::catalog::program::Program;
use crate::quiz::Category;

pub(super) fn institution(
    id: u32,
    name: &str,
    location: &str,
    courses: &[&str],
    rating: f64,
) -> Institution {
    Institution {
        id,
        name: name.to_string(),
        location: location.to_string(),
        lat: 0.0,
        lon: 0.0,
        courses: courses.iter().map(|course| course.to_string()).collect(),
        cutoff: String::new(),
        facilities: vec!["Library".to_string()],
        rating,
        fees: String::new(),
        website: String::new(),
        established: 1950,
        kind: "Government".to_string(),
    }
}

/// Five institutions, three of them in Delhi with ratings either side of 4.5.
pub(super) fn institutions() -> Vec<Institution> {
    vec![
        institution(1, "IIT Delhi", "Delhi", &["B.Tech Engineering", "B.Sc Physics"], 4.8),
        institution(2, "St. Xavier's College", "Mumbai", &["B.A History", "BBA"], 4.6),
        institution(3, "Hansraj College", "Delhi", &["B.Sc Physics", "B.Com Finance"], 4.2),
        institution(4, "AIIMS", "Delhi", &["MBBS"], 4.5),
        institution(5, "Government Polytechnic", "Pune", &["Polytechnic"], 3.9),
    ]
}

pub(super) fn ids<R>(records: &[&R], id: impl Fn(&R) -> u32) -> Vec<u32> {
    records.iter().map(|record| id(record)).collect()
}

pub(super) fn institution_ids(records: &[&Institution]) -> Vec<u32> {
    ids(records, |record| record.id)
}

pub(super) fn program(id: u32, name: &str, stream: Category, skills: &[&str]) -> Program {
    Program {
        id,
        name: name.to_string(),
        stream,
        duration: format!("{} years", id % 3 + 2),
        salary_range: "3-8 LPA".to_string(),
        description: format!("{name} program"),
        higher_studies: vec!["Masters".to_string()],
        job_roles: vec!["Analyst".to_string(), "Consultant".to_string()],
        employers: vec!["Acme".to_string()],
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
    }
}

pub(super) fn programs() -> Vec<Program> {
    vec![
        program(1, "B.Tech Engineering", Category::Science, &["Programming", "Mathematics"]),
        program(2, "BBA", Category::Commerce, &["Leadership"]),
        program(3, "Journalism", Category::Arts, &["Writing"]),
        program(4, "ITI Courses", Category::Vocational, &["Hand Tools"]),
        program(5, "MBBS", Category::Science, &["Biology"]),
    ]
}

pub(super) fn event(id: u32, date: (i32, u32, u32), kind: EventKind, title: &str) -> TimelineEvent {
    TimelineEvent {
        id,
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid date"),
        title: title.to_string(),
        kind,
        description: format!("{title} details"),
        importance: Importance::Medium,
        link: None,
    }
}

pub(super) fn events() -> Vec<TimelineEvent> {
    vec![
        event(1, (2024, 2, 15), EventKind::Exam, "JEE Main Registration Opens"),
        event(2, (2024, 2, 28), EventKind::Deadline, "NEET Application Deadline"),
        event(3, (2024, 3, 10), EventKind::Admission, "DU Admission Portal Opens"),
        event(4, (2024, 3, 20), EventKind::Scholarship, "National Merit Scholarship"),
        event(5, (2024, 4, 5), EventKind::Exam, "CBSE Board Results"),
    ]
}
