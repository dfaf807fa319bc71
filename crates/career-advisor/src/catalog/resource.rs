use serde::{Deserialize, Serialize};

use super::filter::{FilterSpec, Predicate};
use super::loader::{list_field, numeric_field};
use super::record::{CatalogRecord, FieldValue};
use super::search::CatalogQuery;
use super::snapshot::CatalogSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    #[serde(rename = "PDF")]
    Pdf,
    Video,
    Website,
}

impl ResourceKind {
    pub const fn label(self) -> &'static str {
        match self {
            ResourceKind::Pdf => "PDF",
            ResourceKind::Video => "Video",
            ResourceKind::Website => "Website",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ResourceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ResourceLevel::Beginner => "Beginner",
            ResourceLevel::Intermediate => "Intermediate",
            ResourceLevel::Advanced => "Advanced",
        }
    }
}

/// Study material: notes, lecture series, or reference portals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyResource {
    #[serde(deserialize_with = "numeric_field")]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub subject: String,
    pub level: ResourceLevel,
    #[serde(default)]
    pub url: String,
    #[serde(default, deserialize_with = "list_field")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceField {
    Title,
    Description,
    Tags,
    Kind,
    Subject,
    Level,
}

impl CatalogRecord for StudyResource {
    type Field = ResourceField;

    fn field(&self, field: Self::Field) -> FieldValue<'_> {
        match field {
            ResourceField::Title => FieldValue::Text(&self.title),
            ResourceField::Description => FieldValue::Text(&self.description),
            ResourceField::Tags => FieldValue::List(&self.tags),
            ResourceField::Kind => FieldValue::Text(self.kind.label()),
            ResourceField::Subject => FieldValue::Text(&self.subject),
            ResourceField::Level => FieldValue::Text(self.level.label()),
        }
    }
}

/// Resource library form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub level: String,
}

impl CatalogQuery for ResourceQuery {
    type Record = StudyResource;

    fn catalog(snapshot: &CatalogSnapshot) -> &[StudyResource] {
        &snapshot.resources
    }

    fn filter_spec(&self) -> FilterSpec<ResourceField> {
        FilterSpec::new()
            .with(Predicate::text(
                self.search.clone(),
                [
                    ResourceField::Title,
                    ResourceField::Description,
                    ResourceField::Tags,
                ],
            ))
            .with(Predicate::exact(ResourceField::Kind, self.kind.clone()))
            .with(Predicate::exact(ResourceField::Subject, self.subject.clone()))
            .with(Predicate::exact(ResourceField::Level, self.level.clone()))
    }

    fn facet_fields() -> &'static [(&'static str, ResourceField)] {
        &[
            ("kind", ResourceField::Kind),
            ("subject", ResourceField::Subject),
            ("level", ResourceField::Level),
        ]
    }
}
