/// Borrowed view of a single catalog field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
    Number(f64),
    Missing,
}

impl<'a> FieldValue<'a> {
    pub fn from_optional(value: Option<&'a str>) -> Self {
        value.map(FieldValue::Text).unwrap_or(FieldValue::Missing)
    }
}

/// Flat record exposing its fields through a typed selector.
///
/// Every catalog kind names its own selector enum so predicates can only target
/// fields that exist on that kind.
pub trait CatalogRecord {
    type Field: Copy + std::fmt::Debug + PartialEq + 'static;

    fn field(&self, field: Self::Field) -> FieldValue<'_>;
}

impl<R: CatalogRecord + ?Sized> CatalogRecord for &R {
    type Field = R::Field;

    fn field(&self, field: Self::Field) -> FieldValue<'_> {
        (**self).field(field)
    }
}
