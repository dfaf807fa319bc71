use super::normalizer::{contains_normalized, normalize_query};
use super::record::{CatalogRecord, FieldValue};

/// Single field-level condition.
///
/// A predicate whose caller value is unset (blank text, zero threshold) is inactive and
/// accepts every record; this is how "all locations"/"any rating" controls are expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<F> {
    /// Case-insensitive substring match against any of `fields`.
    Text { query: String, fields: Vec<F> },
    /// Field equals `value`.
    Exact { field: F, value: String },
    /// List field has `value` as an element.
    Contains { field: F, value: String },
    /// Numeric field is at least `minimum` (inclusive).
    AtLeast { field: F, minimum: f64 },
}

impl<F: Copy> Predicate<F> {
    pub fn text(query: impl Into<String>, fields: impl IntoIterator<Item = F>) -> Self {
        Predicate::Text {
            query: query.into(),
            fields: fields.into_iter().collect(),
        }
    }

    pub fn exact(field: F, value: impl Into<String>) -> Self {
        Predicate::Exact {
            field,
            value: value.into(),
        }
    }

    pub fn contains(field: F, value: impl Into<String>) -> Self {
        Predicate::Contains {
            field,
            value: value.into(),
        }
    }

    pub fn at_least(field: F, minimum: f64) -> Self {
        Predicate::AtLeast { field, minimum }
    }

    pub fn is_active(&self) -> bool {
        match self {
            Predicate::Text { query, .. } => normalize_query(query).is_some(),
            Predicate::Exact { value, .. } | Predicate::Contains { value, .. } => {
                !value.is_empty()
            }
            Predicate::AtLeast { minimum, .. } => *minimum != 0.0 && !minimum.is_nan(),
        }
    }

    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: CatalogRecord<Field = F>,
    {
        match self {
            Predicate::Text { query, fields } => match normalize_query(query) {
                Some(query) => fields
                    .iter()
                    .any(|field| text_matches(record.field(*field), &query)),
                None => true,
            },
            Predicate::Exact { field, value } => {
                value.is_empty() || exact_matches(record.field(*field), value)
            }
            Predicate::Contains { field, value } => {
                value.is_empty() || list_contains(record.field(*field), value)
            }
            Predicate::AtLeast { field, minimum } => {
                if *minimum == 0.0 || minimum.is_nan() {
                    return true;
                }
                match record.field(*field) {
                    FieldValue::Number(value) => value >= *minimum,
                    _ => false,
                }
            }
        }
    }
}

fn text_matches(value: FieldValue<'_>, normalized_query: &str) -> bool {
    match value {
        FieldValue::Text(text) => contains_normalized(text, normalized_query),
        FieldValue::List(items) => items
            .iter()
            .any(|item| contains_normalized(item, normalized_query)),
        FieldValue::Number(_) | FieldValue::Missing => false,
    }
}

fn exact_matches(value: FieldValue<'_>, expected: &str) -> bool {
    match value {
        FieldValue::Text(text) => text == expected,
        FieldValue::Number(number) => expected
            .trim()
            .parse::<f64>()
            .map(|parsed| parsed == number)
            .unwrap_or(false),
        FieldValue::List(_) | FieldValue::Missing => false,
    }
}

fn list_contains(value: FieldValue<'_>, expected: &str) -> bool {
    match value {
        FieldValue::List(items) => items.iter().any(|item| item == expected),
        FieldValue::Text(text) => text == expected,
        FieldValue::Number(_) | FieldValue::Missing => false,
    }
}

/// Conjunction of predicates over one catalog kind. The empty spec matches everything.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec<F> {
    predicates: Vec<Predicate<F>>,
}

impl<F> Default for FilterSpec<F> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<F: Copy> FilterSpec<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: Predicate<F>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Conjunction of both specs.
    pub fn and(mut self, other: FilterSpec<F>) -> Self {
        self.predicates.extend(other.predicates);
        self
    }

    pub fn active(&self) -> impl Iterator<Item = &Predicate<F>> + '_ {
        self.predicates.iter().filter(|predicate| predicate.is_active())
    }

    /// True when no predicate narrows the catalog.
    pub fn is_unconstrained(&self) -> bool {
        self.active().next().is_none()
    }

    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: CatalogRecord<Field = F>,
    {
        self.active().all(|predicate| predicate.matches(record))
    }
}

/// Records satisfying every active predicate, in catalog order.
pub fn filter_catalog<'a, R>(records: &'a [R], spec: &FilterSpec<R::Field>) -> Vec<&'a R>
where
    R: CatalogRecord,
{
    let active: Vec<&Predicate<R::Field>> = spec.active().collect();
    records
        .iter()
        .filter(|record| active.iter().all(|predicate| predicate.matches(*record)))
        .collect()
}

/// Owned variant of [`filter_catalog`] for callers that keep the result around.
pub fn filter_catalog_owned<R>(records: &[R], spec: &FilterSpec<R::Field>) -> Vec<R>
where
    R: CatalogRecord + Clone,
{
    filter_catalog(records, spec).into_iter().cloned().collect()
}
