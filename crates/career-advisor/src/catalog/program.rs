use serde::{Deserialize, Serialize};

use super::filter::{FilterSpec, Predicate};
use super::loader::{list_field, numeric_field};
use super::record::{CatalogRecord, FieldValue};
use super::search::CatalogQuery;
use super::snapshot::CatalogSnapshot;
use crate::quiz::Category;

/// Degree or diploma program shown on the career map and in comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(deserialize_with = "numeric_field")]
    pub id: u32,
    pub name: String,
    pub stream: Category,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "list_field")]
    pub higher_studies: Vec<String>,
    #[serde(default, deserialize_with = "list_field")]
    pub job_roles: Vec<String>,
    #[serde(default, deserialize_with = "list_field")]
    pub employers: Vec<String>,
    #[serde(default, deserialize_with = "list_field")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramField {
    Name,
    Stream,
    Description,
    Skills,
    JobRoles,
    Employers,
}

impl CatalogRecord for Program {
    type Field = ProgramField;

    fn field(&self, field: Self::Field) -> FieldValue<'_> {
        match field {
            ProgramField::Name => FieldValue::Text(&self.name),
            ProgramField::Stream => FieldValue::Text(self.stream.code()),
            ProgramField::Description => FieldValue::Text(&self.description),
            ProgramField::Skills => FieldValue::List(&self.skills),
            ProgramField::JobRoles => FieldValue::List(&self.job_roles),
            ProgramField::Employers => FieldValue::List(&self.employers),
        }
    }
}

/// Career map form: free text plus a stream selector where `ALL` means any stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub stream: String,
}

impl ProgramQuery {
    fn stream_value(&self) -> String {
        let raw = self.stream.trim();
        if raw.eq_ignore_ascii_case("all") {
            return String::new();
        }
        Category::parse(raw)
            .map(|category| category.code().to_string())
            .unwrap_or_else(|| raw.to_string())
    }
}

impl CatalogQuery for ProgramQuery {
    type Record = Program;

    fn catalog(snapshot: &CatalogSnapshot) -> &[Program] {
        &snapshot.programs
    }

    fn filter_spec(&self) -> FilterSpec<ProgramField> {
        FilterSpec::new()
            .with(Predicate::text(
                self.search.clone(),
                [
                    ProgramField::Name,
                    ProgramField::Description,
                    ProgramField::Skills,
                ],
            ))
            .with(Predicate::exact(ProgramField::Stream, self.stream_value()))
    }

    fn facet_fields() -> &'static [(&'static str, ProgramField)] {
        &[("stream", ProgramField::Stream)]
    }
}
