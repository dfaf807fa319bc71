use serde::{Deserialize, Serialize};

use super::filter::{FilterSpec, Predicate};
use super::loader::{empty_as_default, list_field, numeric_field};
use super::record::{CatalogRecord, FieldValue};
use super::search::CatalogQuery;
use super::snapshot::CatalogSnapshot;

/// College or university listed in the institution catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    #[serde(deserialize_with = "numeric_field")]
    pub id: u32,
    pub name: String,
    pub location: String,
    #[serde(default, deserialize_with = "empty_as_default")]
    pub lat: f64,
    #[serde(default, deserialize_with = "empty_as_default")]
    pub lon: f64,
    #[serde(default, deserialize_with = "list_field")]
    pub courses: Vec<String>,
    #[serde(default)]
    pub cutoff: String,
    #[serde(default, deserialize_with = "list_field")]
    pub facilities: Vec<String>,
    #[serde(deserialize_with = "numeric_field")]
    pub rating: f64,
    #[serde(default)]
    pub fees: String,
    #[serde(default)]
    pub website: String,
    #[serde(default, deserialize_with = "empty_as_default")]
    pub established: i32,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Institution {
    pub fn directions_url(&self) -> String {
        format!("https://www.google.com/maps?q={},{}", self.lat, self.lon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstitutionField {
    Name,
    Location,
    Courses,
    Facilities,
    Rating,
    Kind,
    Established,
}

impl CatalogRecord for Institution {
    type Field = InstitutionField;

    fn field(&self, field: Self::Field) -> FieldValue<'_> {
        match field {
            InstitutionField::Name => FieldValue::Text(&self.name),
            InstitutionField::Location => FieldValue::Text(&self.location),
            InstitutionField::Courses => FieldValue::List(&self.courses),
            InstitutionField::Facilities => FieldValue::List(&self.facilities),
            InstitutionField::Rating => FieldValue::Number(self.rating),
            InstitutionField::Kind => FieldValue::Text(&self.kind),
            InstitutionField::Established => FieldValue::Number(f64::from(self.established)),
        }
    }
}

/// College finder form: free text over name and location, plus location, course and
/// minimum rating selectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstitutionQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub min_rating: f64,
}

impl CatalogQuery for InstitutionQuery {
    type Record = Institution;

    fn catalog(snapshot: &CatalogSnapshot) -> &[Institution] {
        &snapshot.institutions
    }

    fn filter_spec(&self) -> FilterSpec<InstitutionField> {
        FilterSpec::new()
            .with(Predicate::text(
                self.search.clone(),
                [InstitutionField::Name, InstitutionField::Location],
            ))
            .with(Predicate::exact(
                InstitutionField::Location,
                self.location.clone(),
            ))
            .with(Predicate::contains(
                InstitutionField::Courses,
                self.course.clone(),
            ))
            .with(Predicate::at_least(InstitutionField::Rating, self.min_rating))
    }

    fn facet_fields() -> &'static [(&'static str, InstitutionField)] {
        &[
            ("location", InstitutionField::Location),
            ("courses", InstitutionField::Courses),
        ]
    }
}
