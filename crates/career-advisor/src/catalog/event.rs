use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::filter::{FilterSpec, Predicate};
use super::loader::{empty_string_as_none, numeric_field};
use super::record::{CatalogRecord, FieldValue};
use super::search::CatalogQuery;
use super::snapshot::CatalogSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Admission,
    Scholarship,
    Exam,
    Deadline,
}

impl EventKind {
    pub const fn label(self) -> &'static str {
        match self {
            EventKind::Admission => "admission",
            EventKind::Scholarship => "scholarship",
            EventKind::Exam => "exam",
            EventKind::Deadline => "deadline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl Importance {
    pub const fn label(self) -> &'static str {
        match self {
            Importance::High => "high",
            Importance::Medium => "medium",
            Importance::Low => "low",
        }
    }
}

/// Dated admission, exam, scholarship, or deadline entry on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    #[serde(deserialize_with = "numeric_field")]
    pub id: u32,
    pub date: NaiveDate,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default)]
    pub description: String,
    pub importance: Importance,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventField {
    Title,
    Description,
    Kind,
    Importance,
    Link,
}

impl CatalogRecord for TimelineEvent {
    type Field = EventField;

    fn field(&self, field: Self::Field) -> FieldValue<'_> {
        match field {
            EventField::Title => FieldValue::Text(&self.title),
            EventField::Description => FieldValue::Text(&self.description),
            EventField::Kind => FieldValue::Text(self.kind.label()),
            EventField::Importance => FieldValue::Text(self.importance.label()),
            EventField::Link => FieldValue::from_optional(self.link.as_deref()),
        }
    }
}

/// Timeline form: free text plus an event type selector where `all` means any type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub kind: String,
}

impl CatalogQuery for EventQuery {
    type Record = TimelineEvent;

    fn catalog(snapshot: &CatalogSnapshot) -> &[TimelineEvent] {
        &snapshot.events
    }

    fn filter_spec(&self) -> FilterSpec<EventField> {
        let kind = self.kind.trim();
        let kind = if kind.eq_ignore_ascii_case("all") {
            String::new()
        } else {
            kind.to_ascii_lowercase()
        };

        FilterSpec::new()
            .with(Predicate::text(
                self.search.clone(),
                [EventField::Title, EventField::Description],
            ))
            .with(Predicate::exact(EventField::Kind, kind))
    }

    fn facet_fields() -> &'static [(&'static str, EventField)] {
        &[("kind", EventField::Kind)]
    }
}

/// Events on or after `today`, soonest first, at most `limit` of them.
pub fn upcoming_events(
    events: &[TimelineEvent],
    today: NaiveDate,
    limit: usize,
) -> Vec<&TimelineEvent> {
    let mut upcoming: Vec<&TimelineEvent> =
        events.iter().filter(|event| event.date >= today).collect();
    upcoming.sort_by_key(|event| event.date);
    upcoming.truncate(limit);
    upcoming
}
