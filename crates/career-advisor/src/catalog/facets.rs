use std::collections::HashSet;

use super::record::{CatalogRecord, FieldValue};

/// Distinct values of `field` across `records`, in first-seen order.
///
/// List fields contribute each element. Blank and missing values are skipped because
/// the empty selection already means "any value".
pub fn derive_facets<R: CatalogRecord>(records: &[R], field: R::Field) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();

    let mut record_value = |value: String| {
        if !value.trim().is_empty() && seen.insert(value.clone()) {
            values.push(value);
        }
    };

    for record in records {
        match record.field(field) {
            FieldValue::Text(text) => record_value(text.to_string()),
            FieldValue::List(items) => {
                for item in items {
                    record_value(item.clone());
                }
            }
            FieldValue::Number(number) => record_value(number.to_string()),
            FieldValue::Missing => {}
        }
    }

    values
}
