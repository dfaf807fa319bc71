use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::facets::derive_facets;
use super::filter::{filter_catalog, FilterSpec};
use super::record::CatalogRecord;
use super::snapshot::CatalogSnapshot;

/// Form values for one catalog screen, packaged into a [`FilterSpec`] on demand.
pub trait CatalogQuery {
    type Record: CatalogRecord + Clone;

    /// Catalog this query runs against.
    fn catalog(snapshot: &CatalogSnapshot) -> &[Self::Record];

    fn filter_spec(&self) -> FilterSpec<<Self::Record as CatalogRecord>::Field>;

    /// Facet name and field pairs used to populate the screen's dropdowns.
    fn facet_fields() -> &'static [(&'static str, <Self::Record as CatalogRecord>::Field)];
}

/// Matches plus dropdown values for a catalog screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults<R> {
    pub total: usize,
    pub items: Vec<R>,
    pub facets: BTreeMap<String, Vec<String>>,
}

/// Filters `records` with the query and derives facets from the unfiltered catalog, so
/// dropdowns keep offering every value while a selection is active.
pub fn search<Q: CatalogQuery>(records: &[Q::Record], query: &Q) -> SearchResults<Q::Record> {
    let spec = query.filter_spec();
    let items: Vec<Q::Record> = filter_catalog(records, &spec)
        .into_iter()
        .cloned()
        .collect();

    let facets = Q::facet_fields()
        .iter()
        .map(|(name, field)| (name.to_string(), derive_facets(records, *field)))
        .collect();

    SearchResults {
        total: items.len(),
        items,
        facets,
    }
}

/// Runs the query against its catalog in `snapshot`.
pub fn search_snapshot<Q: CatalogQuery>(
    snapshot: &CatalogSnapshot,
    query: &Q,
) -> SearchResults<Q::Record> {
    search(Q::catalog(snapshot), query)
}
